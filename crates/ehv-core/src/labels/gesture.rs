//! Geometry and gesture results reported by the host for a label row.

/// Axis-aligned rectangle in row-local coordinates; right and bottom are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

/// Layout of one rendered label row, as measured by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowLayout {
    /// Region that must be under the pointer for a drag to start.
    pub drag_handle: Rect,
}

/// Which swipe directions a row reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeReaction {
    None,
    Left,
    Right,
    BothHorizontal,
}

/// How a swipe gesture ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeResult {
    SwipedLeft,
    SwipedRight,
    Canceled,
}
