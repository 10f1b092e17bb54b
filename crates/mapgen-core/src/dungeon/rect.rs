//! Axis-aligned rectangles for room placement

use serde::{Deserialize, Serialize};

/// A rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the right-most column
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// One past the bottom row
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Check if this rectangle shares at least one cell with another
    pub const fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Check if the rectangle lies inside a `width × height` grid with a
    /// 1-cell border left untouched
    pub const fn fits_interior(&self, width: i32, height: i32) -> bool {
        self.x >= 1 && self.y >= 1 && self.right() <= width - 1 && self.bottom() <= height - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects() {
        let a = Rect::new(1, 1, 3, 3);

        assert!(a.intersects(&Rect::new(3, 3, 3, 3)));
        assert!(a.intersects(&Rect::new(0, 0, 9, 9)));
        // Touching edges do not intersect
        assert!(!a.intersects(&Rect::new(4, 1, 3, 3)));
        assert!(!a.intersects(&Rect::new(1, 4, 3, 3)));
        assert!(!a.intersects(&Rect::new(5, 5, 3, 3)));
    }

    #[test]
    fn test_fits_interior() {
        assert!(Rect::new(1, 1, 3, 3).fits_interior(5, 5));
        assert!(!Rect::new(1, 1, 5, 3).fits_interior(5, 5));
        assert!(!Rect::new(0, 1, 3, 3).fits_interior(9, 9));
        assert!(!Rect::new(3, 3, 3, 3).fits_interior(5, 5));
    }
}
