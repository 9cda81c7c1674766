use crate::foundation::core::distance;
use crate::foundation::error::{CurvepaceError, CurvepaceResult, SearchPhase};
use crate::trajectory::curve::Trajectory;

/// Initial right edge of the parameter-shift bracket.
pub const STARTING_SHIFT: f64 = 0.001;

/// Acceptable fractional deviation of the estimated speed from the target.
pub const RELATIVE_TOLERANCE: f64 = 0.01;

// Iteration budgets for the two search phases. A curve whose local speed
// never reaches the target (or oscillates past the doubling probe) must
// fail instead of hanging.
const MAX_BRACKET_ITERATIONS: u32 = 64;
const MAX_BISECTION_ITERATIONS: u32 = 128;

// Bracket width below which bisection cannot make progress in f64.
const MIN_BRACKET_WIDTH: f64 = 1e-12;

/// Pixel and parameter displacement approximating the target speed over
/// one tick.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MovePrediction {
    /// Horizontal pixel displacement.
    pub dx: f64,
    /// Vertical pixel displacement.
    pub dy: f64,
    /// Parameter displacement; always non-negative.
    pub dp: f64,
}

/// Find the forward parameter shift that moves a marker along `curve` at
/// `speed` pixels per second over one `dt`-second tick.
///
/// The shift is located with a derivative-free search: the right bracket
/// edge doubles from [`STARTING_SHIFT`] until the chord speed
/// `distance(curve(param + dp), curve(param)) / dt` overshoots the target
/// (the chord speed at a zero shift is zero, so the bracket then contains a
/// crossing), after which bisection narrows the bracket until the chord
/// speed is within `speed * RELATIVE_TOLERANCE` of `speed`. Both phases
/// assume the chord speed is non-decreasing in the shift; curves violating
/// that near the probed region surface as
/// [`CurvepaceError::SearchDiverged`] once the iteration budget runs out.
///
/// # Errors
///
/// - [`CurvepaceError::Validation`] if `speed` or `dt` is non-finite or
///   not strictly positive. Never clamped.
/// - [`CurvepaceError::SearchDiverged`] if either phase exhausts its
///   iteration budget or the bracket degenerates.
#[tracing::instrument(level = "trace", skip(curve))]
pub fn predict_move(
    curve: &impl Trajectory,
    param: f64,
    speed: f64,
    dt: f64,
) -> CurvepaceResult<MovePrediction> {
    if !speed.is_finite() || speed <= 0.0 {
        return Err(CurvepaceError::validation(format!(
            "target speed must be finite and > 0, got {speed}"
        )));
    }
    if !dt.is_finite() || dt <= 0.0 {
        return Err(CurvepaceError::validation(format!(
            "tick duration must be finite and > 0, got {dt} s"
        )));
    }

    let p0 = curve.position(param);

    // Expand the bracket until the chord speed overshoots the target.
    let mut dp_r = STARTING_SHIFT;
    let mut iterations = 0u32;
    while distance(curve.position(param + dp_r), p0) / dt <= speed {
        iterations += 1;
        if iterations >= MAX_BRACKET_ITERATIONS {
            return Err(CurvepaceError::SearchDiverged {
                phase: SearchPhase::Bracket,
                iterations,
                bracket_lo: 0.0,
                bracket_hi: dp_r,
                target_speed: speed,
            });
        }
        dp_r *= 2.0;
    }

    // Bisect [0, dp_r] down to the tolerance band around the target.
    let mut dp_l = 0.0_f64;
    for iteration in 1..=MAX_BISECTION_ITERATIONS {
        let dp_guess = (dp_l + dp_r) / 2.0;
        let p1 = curve.position(param + dp_guess);
        let est_speed = distance(p1, p0) / dt;

        if (est_speed - speed).abs() <= speed * RELATIVE_TOLERANCE {
            tracing::trace!(dp = dp_guess, est_speed, iteration, "converged");
            return Ok(MovePrediction {
                dx: p1.x - p0.x,
                dy: p1.y - p0.y,
                dp: dp_guess,
            });
        }

        if est_speed < speed {
            // Moving too slow, the shift needs to grow.
            dp_l = dp_guess;
        } else {
            dp_r = dp_guess;
        }

        if dp_r - dp_l < MIN_BRACKET_WIDTH {
            return Err(CurvepaceError::SearchDiverged {
                phase: SearchPhase::Bisection,
                iterations: iteration,
                bracket_lo: dp_l,
                bracket_hi: dp_r,
                target_speed: speed,
            });
        }
    }

    Err(CurvepaceError::SearchDiverged {
        phase: SearchPhase::Bisection,
        iterations: MAX_BISECTION_ITERATIONS,
        bracket_lo: dp_l,
        bracket_hi: dp_r,
        target_speed: speed,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/motion/solver.rs"]
mod tests;
