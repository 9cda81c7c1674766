use std::f64::consts::FRAC_PI_2;

use crate::foundation::core::{Canvas, Point};

/// A parametric trajectory in surface pixel space.
///
/// Implementations must be pure: the same `param` always yields the same
/// point. The parameter measures progress along the curve; it is neither
/// time nor arc length, and regions where the local speed vanishes (cusps,
/// crossings) are allowed.
pub trait Trajectory {
    /// Point on the curve at `param`.
    fn position(&self, param: f64) -> Point;

    /// Parameter value the animation starts from.
    fn start_param(&self) -> f64 {
        0.0
    }
}

impl<T: Trajectory + ?Sized> Trajectory for &T {
    fn position(&self, param: f64) -> Point {
        (**self).position(param)
    }

    fn start_param(&self) -> f64 {
        (**self).start_param()
    }
}

impl<T: Trajectory + ?Sized> Trajectory for Box<T> {
    fn position(&self, param: f64) -> Point {
        (**self).position(param)
    }

    fn start_param(&self) -> f64 {
        (**self).start_param()
    }
}

// Half the vertical extent of a unit cardioid, 3*sqrt(3)/4.
const CARDIOID_Y_HALF: f64 = 1.299_038_105_676_658;

/// Heart-shaped curve traced around a cusp at `center`, `2π`-periodic.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cardioid {
    /// Cusp position in pixel space.
    pub center: Point,
    /// Radial scale in pixels.
    pub scale: f64,
}

impl Cardioid {
    /// Cardioid with explicit constants.
    pub fn new(center: Point, scale: f64) -> Self {
        Self { center, scale }
    }

    /// Largest cardioid whose points keep at least `margin` pixels of
    /// clearance from every edge of `canvas`.
    ///
    /// The curve spans `[-2s, s/4]` horizontally and `±(3√3/4)s` vertically
    /// around the cusp for scale `s`.
    pub fn fitted(canvas: Canvas, margin: f64) -> Self {
        let w = f64::from(canvas.width);
        let h = f64::from(canvas.height);
        let scale = ((w - 2.0 * margin) / 2.25)
            .min((h - 2.0 * margin) / (2.0 * CARDIOID_Y_HALF))
            .max(0.0);
        let center = Point::new((w - 2.25 * scale) / 2.0 + 2.0 * scale, h / 2.0);
        Self { center, scale }
    }
}

impl Trajectory for Cardioid {
    fn position(&self, param: f64) -> Point {
        let r = self.scale * (1.0 - param.cos());
        Point::new(
            self.center.x + r * param.cos(),
            self.center.y + r * param.sin(),
        )
    }
}

/// Lemniscate-like figure of eight, `2π`-periodic.
///
/// The parameter is phase-shifted by `-π/2` so the animation starts at the
/// center crossing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FigureEight {
    /// Crossing position in pixel space.
    pub center: Point,
    /// Horizontal half-extent in pixels.
    pub rx: f64,
    /// Vertical lobe scale in pixels; the curve spans `±ry/2` vertically.
    pub ry: f64,
}

impl FigureEight {
    /// Figure of eight with explicit constants.
    pub fn new(center: Point, rx: f64, ry: f64) -> Self {
        Self { center, rx, ry }
    }

    /// Largest figure of eight whose points keep at least `margin` pixels
    /// of clearance from every edge of `canvas`.
    pub fn fitted(canvas: Canvas, margin: f64) -> Self {
        let w = f64::from(canvas.width);
        let h = f64::from(canvas.height);
        Self {
            center: Point::new(w / 2.0, h / 2.0),
            rx: (w / 2.0 - margin).max(0.0),
            ry: (h - 2.0 * margin).max(0.0),
        }
    }
}

impl Trajectory for FigureEight {
    fn position(&self, param: f64) -> Point {
        let q = param - FRAC_PI_2;
        Point::new(
            self.center.x + self.rx * q.cos(),
            self.center.y + self.ry * q.cos() * q.sin(),
        )
    }
}

/// Circle with constant local speed, `2π`-periodic.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Circle {
    /// Center in pixel space.
    pub center: Point,
    /// Radius in pixels.
    pub radius: f64,
}

impl Circle {
    /// Circle with explicit constants.
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Largest circle whose points keep at least `margin` pixels of
    /// clearance from every edge of `canvas`.
    pub fn fitted(canvas: Canvas, margin: f64) -> Self {
        let w = f64::from(canvas.width);
        let h = f64::from(canvas.height);
        Self {
            center: Point::new(w / 2.0, h / 2.0),
            radius: (w.min(h) / 2.0 - margin).max(0.0),
        }
    }
}

impl Trajectory for Circle {
    fn position(&self, param: f64) -> Point {
        Point::new(
            self.center.x + self.radius * param.sin(),
            self.center.y + self.radius * param.cos(),
        )
    }
}
