use serde::{Deserialize, Serialize};

/// Line segment with integer endpoints in the coordinate frame of the view it
/// was detected in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl LineSegment {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn dx(&self) -> i32 {
        self.x2 - self.x1
    }

    pub fn dy(&self) -> i32 {
        self.y2 - self.y1
    }

    pub fn is_vertical(&self) -> bool {
        self.x2 == self.x1
    }

    /// `dy / dx`, or `None` for vertical segments.
    ///
    /// Image rows grow downward, so a segment rising on screen has a
    /// negative slope.
    pub fn slope(&self) -> Option<f64> {
        (!self.is_vertical()).then(|| self.dy() as f64 / self.dx() as f64)
    }
}
