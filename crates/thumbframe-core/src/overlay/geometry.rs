//! Rectangle geometry and the edge-adjustment rule shared by corner and side drags.

use serde::{Deserialize, Serialize};

/// A point in surface (or rectangle-local) coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which edges of the rectangle a drag moves.
///
/// North and west drags move the offset together with the size so that the
/// opposite edge stays put; south and east drags only change the size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Edges {
    pub north: bool,
    pub south: bool,
    pub west: bool,
    pub east: bool,
}

/// The editable rectangle: top-left offset and size.
///
/// Width and height are allowed to go negative while dragging; nothing here
/// clamps them. See [`SizePolicy`](super::SizePolicy) for optional
/// normalization at gesture end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width (may be negative mid-drag)
    pub width: f64,
    /// Height (may be negative mid-drag)
    pub height: f64,
}

impl Geometry {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Geometry covering a freshly loaded image at the origin.
    pub fn from_natural_size(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width as f64, height as f64)
    }

    /// Right edge (`x + width`)
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`)
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center of the unrotated rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Move the rectangle by a pointer delta.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Move the given edges by a pointer delta.
    pub fn drag_edges(&mut self, edges: Edges, dx: f64, dy: f64) {
        if edges.north {
            self.y += dy;
            self.height -= dy;
        }
        if edges.south {
            self.height += dy;
        }
        if edges.west {
            self.x += dx;
            self.width -= dx;
        }
        if edges.east {
            self.width += dx;
        }
    }

    /// Check whether a rectangle-local point lies inside, regardless of the
    /// sign of width and height.
    pub fn contains_local(&self, p: Point) -> bool {
        let (x0, x1) = (self.width.min(0.0), self.width.max(0.0));
        let (y0, y1) = (self.height.min(0.0), self.height.max(0.0));
        p.x >= x0 && p.x <= x1 && p.y >= y0 && p.y <= y1
    }
}
