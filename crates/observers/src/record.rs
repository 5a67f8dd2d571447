//! Recording observer for rendering solver progress after the fact.
//!
//! See [`Recorder`] for usage.

use ndarray::Array1;
use recovery_core::Observer;

use crate::traits::{HasEstimate, HasIteration, HasObjective};

/// One recorded iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Zero-based iteration index.
    pub iter: usize,

    /// Objective recorded by the iteration.
    pub objective: f64,

    /// Estimate after the iteration, if this iteration was sampled.
    pub estimate: Option<Array1<f64>>,
}

/// An observer that records the objective of every iteration and a copy of
/// the estimate every `every` iterations.
///
/// The recorder keeps everything a plot of the run needs (the objective
/// curve and periodic estimate snapshots) without the solver depending on
/// any plotting library. Pass `&mut recorder` to the solver to keep
/// ownership and read [`Recorder::frames`] afterwards.
///
/// # Example
///
/// ```rust
/// use ndarray::array;
/// use recovery_core::DenseOperator;
/// use recovery_observers::Recorder;
/// use recovery_solvers::dual_shrinkage::{self, Config, FixedIterations};
///
/// let op = DenseOperator::new(array![[1.0, 0.5], [0.0, 1.0]]);
/// let y = array![2.0, 1.0];
/// let config = Config::from_data(&op, y.view()).unwrap();
///
/// let mut recorder = Recorder::every(10);
/// dual_shrinkage::solve(&op, y.view(), &config, FixedIterations::new(50), &mut recorder).unwrap();
///
/// assert_eq!(recorder.frames().len(), 50);
/// assert_eq!(recorder.snapshots().count(), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Recorder {
    every: usize,
    frames: Vec<Frame>,
}

impl Recorder {
    /// Snapshots the estimate on iterations `0, every, 2 * every, ...`. An
    /// interval of zero is treated as one.
    #[must_use]
    pub fn every(every: usize) -> Self {
        Self {
            every: every.max(1),
            frames: Vec::new(),
        }
    }

    /// Records an event.
    pub fn record<E>(&mut self, event: &E)
    where
        E: HasIteration + HasObjective + HasEstimate,
    {
        let iter = event.iteration();
        let estimate = (iter % self.every == 0).then(|| event.estimate().to_owned());
        self.frames.push(Frame {
            iter,
            objective: event.objective(),
            estimate,
        });
    }

    /// Every recorded frame, in iteration order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The objective curve, one value per recorded iteration.
    pub fn objectives(&self) -> impl Iterator<Item = f64> + '_ {
        self.frames.iter().map(|f| f.objective)
    }

    /// The sampled estimates with their iteration indices.
    pub fn snapshots(&self) -> impl Iterator<Item = (usize, &Array1<f64>)> + '_ {
        self.frames
            .iter()
            .filter_map(|f| f.estimate.as_ref().map(|e| (f.iter, e)))
    }

    /// Consumes the recorder and returns its frames.
    #[must_use]
    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}

impl<E, A> Observer<E, A> for Recorder
where
    E: HasIteration + HasObjective + HasEstimate,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows passing `&mut Recorder` as an observer, so the caller keeps ownership.
impl<E, A> Observer<E, A> for &mut Recorder
where
    E: HasIteration + HasObjective + HasEstimate,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}
