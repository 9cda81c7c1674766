//! Curvepace moves a marker along an arbitrary 2D parametric curve at a
//! constant on-screen speed.
//!
//! A curve is an opaque mapping from a scalar parameter to a point
//! ([`Trajectory`]); there is no closed-form arc length or derivative to
//! invert. Each timer tick the crate searches for the parameter shift whose
//! pixel displacement matches the requested speed, then applies that
//! displacement to the host's drawable.
//!
//! # Tick pipeline
//!
//! 1. **Solve**: [`predict_move`] brackets and bisects the parameter shift
//!    until the estimated speed is within tolerance of the target.
//! 2. **Apply**: [`Driver::tick`] translates the [`Surface`] by the solved
//!    pixel delta and advances its stored parameter.
//! 3. **Check**: the marker box must stay strictly inside the surface;
//!    a violation stops the run with a typed error.
//! 4. **Reschedule**: the driver asks the host [`Scheduler`] for the next
//!    tick and stays `Running`, or goes `Idle` if the host declines.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: curves are pure functions; solving the same inputs
//!   yields the same move.
//! - **Bounded search**: both search phases carry iteration caps and fail
//!   with [`CurvepaceError::SearchDiverged`] instead of hanging on curves
//!   whose local speed never reaches the target.
//! - **No GUI, no IO**: window, canvas and timer stay on the host side of
//!   the [`Surface`] and [`Scheduler`] traits.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod motion;
mod trajectory;

pub use config::{AnimationConfig, CurveKind};
pub use foundation::core::{Canvas, Point, Vec2, distance};
pub use foundation::error::{CurvepaceError, CurvepaceResult, SearchPhase};
pub use motion::driver::{Driver, DriverState, Scheduler, Surface};
pub use motion::solver::{
    MovePrediction, RELATIVE_TOLERANCE, STARTING_SHIFT, predict_move,
};
pub use trajectory::curve::{Cardioid, Circle, FigureEight, Trajectory};
