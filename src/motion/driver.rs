use crate::foundation::core::{Canvas, Point};
use crate::foundation::error::{CurvepaceError, CurvepaceResult};
use crate::motion::solver::predict_move;
use crate::trajectory::curve::Trajectory;

/// Host-owned drawable holding the moving marker.
///
/// The core never draws; it only reads the marker position and moves it by
/// pixel deltas.
pub trait Surface {
    /// Current marker center in pixel space.
    fn position(&self) -> Point;

    /// Move the marker by a pixel delta.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Surface dimensions.
    fn canvas(&self) -> Canvas;
}

/// Host-owned timer that re-invokes [`Driver::tick`].
pub trait Scheduler {
    /// Arrange for the driver's `tick` to be invoked once, after at least
    /// `delay_ms` milliseconds, on the same logical thread.
    ///
    /// Returns `false` when the host declines (e.g. it is shutting down),
    /// which ends the animation.
    fn request_tick(&mut self, delay_ms: u64) -> bool;
}

/// Animation lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    /// No parameter advancing, nothing scheduled.
    Idle,
    /// Parameter advances once per tick; the next tick is scheduled.
    Running,
}

/// Per-animation state machine.
///
/// Owns the current curve parameter and, once per tick, solves for the
/// parameter shift matching the configured speed, applies the resulting
/// pixel delta to the surface, enforces the bounds invariant and asks the
/// scheduler for the next tick.
///
/// Single-threaded: `start`, `tick` and `stop` must never be invoked
/// concurrently with each other. Cancellation is cooperative: `stop` flips
/// the state, and a tick already queued by the host fires as a no-op.
pub struct Driver<C> {
    curve: C,
    speed: f64,
    tick_ms: u64,
    marker_radius: f64,
    param: f64,
    state: DriverState,
}

impl<C: Trajectory> Driver<C> {
    /// Driver for `curve` moving at `speed` pixels per second, ticking
    /// every `tick_ms` milliseconds, with a marker of `marker_radius`
    /// pixels for the bounds check.
    ///
    /// # Errors
    ///
    /// [`CurvepaceError::Validation`] for non-positive or non-finite
    /// arguments; nothing is clamped.
    pub fn new(
        curve: C,
        speed: f64,
        tick_ms: u64,
        marker_radius: f64,
    ) -> CurvepaceResult<Self> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(CurvepaceError::validation(format!(
                "speed must be finite and > 0, got {speed}"
            )));
        }
        if tick_ms == 0 {
            return Err(CurvepaceError::validation("tick_ms must be > 0"));
        }
        if !marker_radius.is_finite() || marker_radius <= 0.0 {
            return Err(CurvepaceError::validation(format!(
                "marker_radius must be finite and > 0, got {marker_radius}"
            )));
        }
        let param = curve.start_param();
        Ok(Self {
            curve,
            speed,
            tick_ms,
            marker_radius,
            param,
            state: DriverState::Idle,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Current curve parameter.
    pub fn param(&self) -> f64 {
        self.param
    }

    /// Transition Idle → Running and perform the first tick immediately.
    ///
    /// The parameter is reset to the curve's start value and the marker is
    /// snapped onto the curve's start point before the first tick, so the
    /// marker position always equals `curve.position(param)` afterwards.
    /// A no-op when already running.
    pub fn start(
        &mut self,
        surface: &mut impl Surface,
        scheduler: &mut impl Scheduler,
    ) -> CurvepaceResult<()> {
        if self.state == DriverState::Running {
            return Ok(());
        }

        self.param = self.curve.start_param();
        let snap = self.curve.position(self.param) - surface.position();
        surface.translate(snap.x, snap.y);
        self.state = DriverState::Running;
        tracing::debug!(param = self.param, speed = self.speed, "animation started");
        self.tick(surface, scheduler)
    }

    /// Advance the animation by one tick.
    ///
    /// Valid only while running; a tick that fires after [`Driver::stop`]
    /// is a no-op. On any error the driver transitions to Idle before the
    /// error propagates; divergence and bounds violations end the run and
    /// are never retried.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn tick(
        &mut self,
        surface: &mut impl Surface,
        scheduler: &mut impl Scheduler,
    ) -> CurvepaceResult<()> {
        if self.state == DriverState::Idle {
            return Ok(());
        }

        if let Err(err) = self.advance(surface) {
            self.state = DriverState::Idle;
            return Err(err);
        }

        if !scheduler.request_tick(self.tick_ms) {
            tracing::debug!("scheduler declined, animation ends");
            self.state = DriverState::Idle;
        }
        Ok(())
    }

    /// Transition Running → Idle. No further ticks are scheduled; a tick
    /// already queued by the host fires as a no-op.
    pub fn stop(&mut self) {
        if self.state == DriverState::Running {
            tracing::debug!(param = self.param, "animation stopped");
        }
        self.state = DriverState::Idle;
    }

    fn advance(&mut self, surface: &mut impl Surface) -> CurvepaceResult<()> {
        let dt = self.tick_ms as f64 / 1000.0;
        let mp = predict_move(&self.curve, self.param, self.speed, dt)?;
        surface.translate(mp.dx, mp.dy);
        self.param += mp.dp;
        tracing::trace!(dp = mp.dp, dx = mp.dx, dy = mp.dy, param = self.param);

        // The marker box must stay strictly inside the surface, touching
        // the far edges at most. A violation means the curve constants and
        // the surface dimensions disagree, or the solver misconverged.
        let pos = surface.position();
        let canvas = surface.canvas();
        let r = self.marker_radius;
        if pos.x - r <= 0.0
            || pos.x + r > f64::from(canvas.width)
            || pos.y - r <= 0.0
            || pos.y + r > f64::from(canvas.height)
        {
            return Err(CurvepaceError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                radius: r,
                width: canvas.width,
                height: canvas.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/driver.rs"]
mod tests;
