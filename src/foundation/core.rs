pub use kurbo::{Point, Vec2};

/// Drawable surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Euclidean distance between two points in pixel space.
///
/// Total over all finite inputs; no failure modes.
pub fn distance(a: Point, b: Point) -> f64 {
    (a - b).hypot()
}
