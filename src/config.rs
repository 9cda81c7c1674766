use crate::foundation::core::Canvas;
use crate::foundation::error::{CurvepaceError, CurvepaceResult};
use crate::motion::driver::Driver;
use crate::trajectory::curve::{Cardioid, Circle, FigureEight, Trajectory};

/// Identifier of a catalog curve, selectable by name from configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    /// Heart-shaped cardioid.
    Cardioid,
    /// Lemniscate-like figure of eight.
    FigureEight,
    /// Circle; constant local speed.
    Circle,
}

impl CurveKind {
    /// Build the curve with constants derived from `canvas` so all of its
    /// points keep `margin` pixels of clearance from the surface edges.
    pub fn fitted(self, canvas: Canvas, margin: f64) -> Box<dyn Trajectory> {
        match self {
            Self::Cardioid => Box::new(Cardioid::fitted(canvas, margin)),
            Self::FigureEight => Box::new(FigureEight::fitted(canvas, margin)),
            Self::Circle => Box::new(Circle::fitted(canvas, margin)),
        }
    }
}

/// Read-only animation settings supplied by the host.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationConfig {
    /// Target linear marker speed, pixels per second.
    pub speed_px_per_sec: f64,
    /// Tick interval in milliseconds.
    pub tick_ms: u64,
    /// Which catalog curve to animate.
    pub curve: CurveKind,
    /// Marker radius in pixels, used for the bounds check.
    pub marker_radius: f64,
    /// Marker fill color; cosmetic, passed through to the host untouched.
    pub marker_color: String,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            speed_px_per_sec: 18_000.0,
            tick_ms: 5,
            curve: CurveKind::FigureEight,
            marker_radius: 10.0,
            marker_color: "red".to_string(),
        }
    }
}

impl AnimationConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(s: &str) -> CurvepaceResult<Self> {
        let cfg: Self =
            serde_json::from_str(s).map_err(|e| CurvepaceError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject non-positive or non-finite numeric settings; never clamps.
    pub fn validate(&self) -> CurvepaceResult<()> {
        if !self.speed_px_per_sec.is_finite() || self.speed_px_per_sec <= 0.0 {
            return Err(CurvepaceError::validation(
                "speed_px_per_sec must be finite and > 0",
            ));
        }
        if self.tick_ms == 0 {
            return Err(CurvepaceError::validation("tick_ms must be > 0"));
        }
        if !self.marker_radius.is_finite() || self.marker_radius <= 0.0 {
            return Err(CurvepaceError::validation(
                "marker_radius must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Tick interval in seconds.
    pub fn tick_secs(&self) -> f64 {
        self.tick_ms as f64 / 1000.0
    }

    /// Build a driver animating the configured curve, fitted to `canvas`
    /// with one pixel of clearance beyond the marker radius.
    pub fn driver(&self, canvas: Canvas) -> CurvepaceResult<Driver<Box<dyn Trajectory>>> {
        self.validate()?;
        let curve = self.curve.fitted(canvas, self.marker_radius + 1.0);
        Driver::new(curve, self.speed_px_per_sec, self.tick_ms, self.marker_radius)
    }
}
