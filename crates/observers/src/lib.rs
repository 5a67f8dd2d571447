//! Reusable observers for sparse recovery solvers.
//!
//! Observers plug into a solver's event stream through
//! [`recovery_core::Observer`]. The ones in this crate are written against
//! the capability traits in [`traits`], so they apply to any solver whose
//! events carry the needed data.
//!
//! - [`Progress`] — periodic `tracing` log lines
//! - [`Recorder`] — objective curve and periodic estimate snapshots for
//!   rendering after the solve
//! - [`StopOnDegeneracy`] — ends a run once the objective is non-finite

pub mod traits;

mod guard;
mod progress;
mod record;

pub use guard::StopOnDegeneracy;
pub use progress::Progress;
pub use record::{Frame, Recorder};
