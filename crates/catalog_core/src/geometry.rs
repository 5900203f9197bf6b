//! Layout geometry
//!
//! Plain value types in logical points. Rectangles use a top-left origin.

use serde::{Deserialize, Serialize};

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Square size, as used by catalog grid cells
    pub const fn square(side: f32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Negative and NaN extents become 0
    pub fn non_negative(self) -> Self {
        Self {
            width: self.width.max(0.0),
            height: self.height.max(0.0),
        }
    }

    /// Convert to a Rect at the origin (0, 0)
    pub const fn to_rect(self) -> Rect {
        Rect {
            origin: Point::ZERO,
            size: self,
        }
    }
}

impl From<Size> for Rect {
    fn from(size: Size) -> Self {
        size.to_rect()
    }
}

/// Edge used when slicing a rectangle in two
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RectEdge {
    MinX,
    MinY,
    MaxX,
    MaxY,
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Rect of `size` whose center sits on `center`
    pub fn centered_at(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn mid_x(&self) -> f32 {
        self.origin.x + self.size.width / 2.0
    }

    pub fn mid_y(&self) -> f32 {
        self.origin.y + self.size.height / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Slice `amount` off `edge`, returning `(slice, remainder)`.
    ///
    /// `amount` is clamped to the rect's extent along the sliced axis, so both
    /// halves always have non-negative sizes. A negative or NaN extent counts
    /// as empty.
    pub fn divided(&self, amount: f32, edge: RectEdge) -> (Rect, Rect) {
        let origin = self.origin;
        let size = self.size.non_negative();
        let slice = |extent: f32| amount.max(0.0).min(extent);
        match edge {
            RectEdge::MinX => {
                let a = slice(size.width);
                (
                    Rect::new(origin.x, origin.y, a, size.height),
                    Rect::new(origin.x + a, origin.y, size.width - a, size.height),
                )
            }
            RectEdge::MaxX => {
                let a = slice(size.width);
                (
                    Rect::new(origin.x + size.width - a, origin.y, a, size.height),
                    Rect::new(origin.x, origin.y, size.width - a, size.height),
                )
            }
            RectEdge::MinY => {
                let a = slice(size.height);
                (
                    Rect::new(origin.x, origin.y, size.width, a),
                    Rect::new(origin.x, origin.y + a, size.width, size.height - a),
                )
            }
            RectEdge::MaxY => {
                let a = slice(size.height);
                (
                    Rect::new(origin.x, origin.y + size.height - a, size.width, a),
                    Rect::new(origin.x, origin.y, size.width, size.height - a),
                )
            }
        }
    }
}

/// Insets from each edge, e.g. a device safe area
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets::uniform(0.0);

    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// `left + right`
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// `top + bottom`
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}
