use approx::assert_relative_eq;
use ndarray::{Array1, Array2, ArrayView1, array};
use recovery_core::{DenseOperator, DimensionMismatch, LinearOperator};

use crate::InvalidArgument;

use super::{
    Action, Config, Event, FixedIterations, Status, TraceConvergence, Termination, solve,
    solve_unobserved,
};

fn scalar(a: f64) -> DenseOperator {
    DenseOperator::new(array![[a]])
}

fn three_by_two() -> DenseOperator {
    DenseOperator::new(array![[1.0, 0.0], [0.0, 2.0], [1.0, 1.0]])
}

#[test]
fn single_iteration_shrinks_the_first_gradient_step() {
    let op = three_by_two();
    let y = array![1.0, 2.0, 3.0];
    let config = Config::new(2.0, 0.1).unwrap();

    let solution = solve_unobserved(&op, y.view(), &config, 1).unwrap();

    // Aᵀy = [4, 7], so w = [0.4, 0.7], shrunk by tau * dt = 0.2.
    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.iters, 1);
    assert_eq!(solution.trace.len(), 1);
    assert_relative_eq!(solution.trace[0], 14.0);
    assert_relative_eq!(solution.estimate[0], 0.2, epsilon = 1e-12);
    assert_relative_eq!(solution.estimate[1], 0.5, epsilon = 1e-12);
}

#[test]
fn gradient_step_uses_the_dual_from_before_the_update() {
    // Scalar problem with A = 1, y = 1, tau = 0, dt = 0.5; every value is exact.
    //
    // k  x      z      error   J
    // 0  0      0      1       1
    // 1  0.5    0.5    0.5     0.25
    // 2  1.0    0.75   0       0
    // 3  1.375  0.75   -0.375  0.140625
    let op = scalar(1.0);
    let y = array![1.0];
    let config = Config::new(0.0, 0.5).unwrap();

    let solution = solve_unobserved(&op, y.view(), &config, 4).unwrap();

    assert_eq!(solution.trace, vec![1.0, 0.25, 0.0, 0.140_625]);
    assert_eq!(solution.estimate, array![1.5625]);
}

#[test]
fn penalty_enters_objective_and_threshold() {
    // A = 1, y = 1, tau = 0.5, dt = 0.5, so the threshold is 0.25.
    let op = scalar(1.0);
    let y = array![1.0];
    let config = Config::new(0.5, 0.5).unwrap();

    let solution = solve_unobserved(&op, y.view(), &config, 2).unwrap();

    // J[1] = 0.75² + 0.5 * 0.25
    assert_eq!(solution.trace, vec![1.0, 0.6875]);
    assert_eq!(solution.estimate, array![0.625]);
}

#[test]
fn negative_gradient_step_is_clipped_to_zero() {
    let op = scalar(-1.0);
    let y = array![1.0];
    let config = Config::new(0.0, 0.5).unwrap();

    let solution = solve_unobserved(&op, y.view(), &config, 1).unwrap();

    assert_eq!(solution.estimate, array![0.0]);
    assert!(solution.estimate[0].is_sign_positive());
}

#[test]
fn first_objective_is_the_observation_energy() {
    let op = three_by_two();
    let y = array![0.5, -1.0, 2.0];
    let config = Config::new(3.0, 0.01).unwrap();

    let solution = solve_unobserved(&op, y.view(), &config, 5).unwrap();

    assert_relative_eq!(solution.trace[0], 0.25 + 1.0 + 4.0);
    assert_eq!(solution.estimate.len(), 2);
}

#[test]
fn fixed_iterations_never_exit_early() {
    // A zero observation stays at the zero estimate, so the trace is flat.
    let op = three_by_two();
    let y = Array1::zeros(3);
    let config = Config::new(1.0, 0.1).unwrap();

    let solution = solve_unobserved(&op, y.view(), &config, 25).unwrap();

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.iters, 25);
    assert!(solution.trace.iter().all(|&j| j == 0.0));
}

#[test]
fn converges_on_an_overdamped_scalar_problem() {
    let op = scalar(3.0);
    let y = array![3.0];
    let config = Config::new(0.0, 0.01).unwrap();
    let termination =
        FixedIterations::new(10_000).or(TraceConvergence::new(1e-12, 0.0).unwrap());

    let solution = solve(&op, y.view(), &config, termination, ()).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.iters < 10_000);
    assert_eq!(solution.trace.len(), solution.iters);
    assert_relative_eq!(solution.estimate[0], 1.0, epsilon = 1e-4);
}

#[test]
fn observer_sees_every_iteration() {
    let op = three_by_two();
    let y = array![1.0, 2.0, 3.0];
    let config = Config::from_data(&op, y.view()).unwrap();

    let mut iters = Vec::new();
    let observer = |event: &Event<'_>| {
        assert_eq!(event.trace.len(), event.iter + 1);
        assert_eq!(event.objective.to_bits(), event.trace[event.iter].to_bits());
        assert!(event.estimate.iter().all(|&v| v >= 0.0));
        iters.push(event.iter);
        None
    };

    let solution = solve(&op, y.view(), &config, FixedIterations::new(6), observer).unwrap();

    assert_eq!(iters, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(solution.iters, 6);
}

#[test]
fn observer_can_stop_early() {
    let op = three_by_two();
    let y = array![1.0, 2.0, 3.0];
    let config = Config::from_data(&op, y.view()).unwrap();

    let observer = |event: &Event<'_>| (event.iter == 4).then_some(Action::StopEarly);

    let solution = solve(&op, y.view(), &config, FixedIterations::new(100), observer).unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 5);
    assert_eq!(solution.trace.len(), 5);
}

#[test]
fn passive_observer_does_not_change_the_result() {
    let op = three_by_two();
    let y = array![1.0, 2.0, 3.0];
    let config = Config::from_data(&op, y.view()).unwrap();

    let unobserved = solve_unobserved(&op, y.view(), &config, 200).unwrap();

    let mut snapshots = Vec::new();
    let observed = solve(
        &op,
        y.view(),
        &config,
        FixedIterations::new(200),
        |event: &Event<'_>| {
            snapshots.push(event.estimate.to_owned());
            None
        },
    )
    .unwrap();

    assert_eq!(observed, unobserved);
    assert_eq!(snapshots.len(), 200);
    assert_eq!(snapshots.last(), Some(&unobserved.estimate));
}

#[test]
fn identical_inputs_give_identical_results() {
    let op = DenseOperator::new(Array2::from_shape_fn((6, 4), |(i, j)| {
        ((i * 7 + j * 3) % 5) as f64 / 5.0
    }));
    let y = array![1.0, 0.5, 2.0, 0.0, 1.5, 0.25];
    let config = Config::from_data(&op, y.view()).unwrap();

    let a = solve_unobserved(&op, y.view(), &config, 500).unwrap();
    let b = solve_unobserved(&op, y.view(), &config, 500).unwrap();

    let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&a.trace), bits(&b.trace));
    assert_eq!(
        bits(a.estimate.as_slice().unwrap()),
        bits(b.estimate.as_slice().unwrap())
    );
}

#[test]
fn independent_solves_can_share_an_operator_across_threads() {
    let op = three_by_two();
    let config = Config::new(0.5, 0.05).unwrap();
    let y1 = array![1.0, 2.0, 3.0];
    let y2 = array![3.0, 0.0, 1.0];

    let (a, b) = std::thread::scope(|s| {
        let a = s.spawn(|| solve_unobserved(&op, y1.view(), &config, 300));
        let b = s.spawn(|| solve_unobserved(&op, y2.view(), &config, 300));
        (a.join().unwrap(), b.join().unwrap())
    });

    let expected_a = solve_unobserved(&op, y1.view(), &config, 300).unwrap();
    let expected_b = solve_unobserved(&op, y2.view(), &config, 300).unwrap();
    assert_eq!(a.unwrap(), expected_a);
    assert_eq!(b.unwrap(), expected_b);
}

#[test]
fn overflow_is_reported_not_fatal() {
    let op = scalar(1.0);
    let y = array![1e200];
    let config = Config::new(0.0, 0.1).unwrap();

    let solution = solve_unobserved(&op, y.view(), &config, 3).unwrap();

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.trace.len(), 3);
    let degeneracy = solution.degeneracy().expect("objective should overflow");
    assert_eq!(degeneracy.iter, 0);
    assert!(degeneracy.value.is_infinite());
}

#[test]
fn finite_run_has_no_degeneracy() {
    let op = three_by_two();
    let y = array![1.0, 2.0, 3.0];
    let config = Config::from_data(&op, y.view()).unwrap();

    let solution = solve_unobserved(&op, y.view(), &config, 50).unwrap();

    assert_eq!(solution.degeneracy(), None);
}

// --- Invalid arguments ---

#[test]
fn observation_length_must_match_operator() {
    let op = DenseOperator::new(Array2::ones((10, 10)));
    let y = Array1::ones(7);
    let config = Config::new(1.0, 0.01).unwrap();

    let mut observed = false;
    let err = solve(
        &op,
        y.view(),
        &config,
        FixedIterations::new(10),
        |_: &Event<'_>| {
            observed = true;
            None
        },
    )
    .unwrap_err();

    assert_eq!(
        err.reason(),
        InvalidArgument::Dimension {
            what: "observation",
            expected: 10,
            actual: 7
        }
    );
    assert!(!observed, "no iteration should run");
}

#[test]
fn rejects_invalid_hyperparameters() {
    let op = three_by_two();
    let y = array![1.0, 2.0, 3.0];

    let negative_tau = Config { tau: -0.1, dt: 0.1 };
    assert_eq!(
        solve_unobserved(&op, y.view(), &negative_tau, 10)
            .unwrap_err()
            .reason(),
        InvalidArgument::Tau(-0.1)
    );

    let zero_dt = Config { tau: 1.0, dt: 0.0 };
    assert_eq!(
        solve_unobserved(&op, y.view(), &zero_dt, 10)
            .unwrap_err()
            .reason(),
        InvalidArgument::StepSize(0.0)
    );
}

#[test]
fn rejects_empty_or_unbounded_budgets() {
    let op = three_by_two();
    let y = array![1.0, 2.0, 3.0];
    let config = Config::new(1.0, 0.1).unwrap();

    assert_eq!(
        solve_unobserved(&op, y.view(), &config, 0)
            .unwrap_err()
            .reason(),
        InvalidArgument::IterationBudget
    );

    let unbounded = TraceConvergence::new(1e-9, 0.0).unwrap();
    assert_eq!(
        solve(&op, y.view(), &config, unbounded, ())
            .unwrap_err()
            .reason(),
        InvalidArgument::IterationBudget
    );
}

/// Operator whose forward map returns one entry too many.
struct LongForward;

impl LinearOperator for LongForward {
    fn domain_dim(&self) -> usize {
        2
    }

    fn range_dim(&self) -> usize {
        2
    }

    fn apply(&self, x: ArrayView1<'_, f64>) -> Result<Array1<f64>, DimensionMismatch> {
        DimensionMismatch::check(2, x.len())?;
        Ok(Array1::zeros(3))
    }

    fn apply_adjoint(&self, y: ArrayView1<'_, f64>) -> Result<Array1<f64>, DimensionMismatch> {
        DimensionMismatch::check(2, y.len())?;
        Ok(Array1::zeros(2))
    }

    fn operator_norm(&self) -> f64 {
        1.0
    }
}

#[test]
fn misbehaving_operator_surfaces_as_invalid_argument() {
    let y = array![1.0, 1.0];
    let config = Config::new(1.0, 0.1).unwrap();

    let err = solve_unobserved(&LongForward, y.view(), &config, 5).unwrap_err();

    assert_eq!(
        err.reason(),
        InvalidArgument::Dimension {
            what: "forward image",
            expected: 2,
            actual: 3
        }
    );
}
