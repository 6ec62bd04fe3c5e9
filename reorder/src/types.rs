use core::cmp;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// One visible row as laid out by the host list for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowGeometry {
    pub index: usize,
    /// Offset of the row's top edge from the viewport's top edge.
    pub top: f32,
    /// Size in the scroll axis.
    pub size: f32,
}

impl RowGeometry {
    pub fn bottom(&self) -> f32 {
        self.top + self.size
    }

    /// Whether `y` falls inside `[top, bottom)`.
    pub fn contains_y(&self, y: f32) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// A single-element move: the item at `from` ended up at `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

impl Move {
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }

    /// The move that undoes this one.
    pub fn inverse(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// Removes the item at `from` and reinserts it at `to`, shifting the items in between.
    ///
    /// Out-of-range moves leave `items` untouched and return `false`.
    pub fn apply<T>(&self, items: &mut [T]) -> bool {
        move_item(items, self.from, self.to)
    }
}

pub(crate) fn move_item<T>(items: &mut [T], from: usize, to: usize) -> bool {
    let len = items.len();
    if from >= len || to >= len {
        return false;
    }
    if from < to {
        items[from..=to].rotate_left(1);
    } else if to < from {
        items[to..=from].rotate_right(1);
    }
    true
}

/// The ephemeral state of one drag gesture.
///
/// While a session exists, the row at `current_index` is rendered offset by
/// `accumulated_offset`; no other row moves.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragSession {
    pub start_index: usize,
    pub current_index: usize,
    pub accumulated_offset: f32,
}

impl DragSession {
    pub const fn new(index: usize) -> Self {
        Self {
            start_index: index,
            current_index: index,
            accumulated_offset: 0.0,
        }
    }

    /// The net move this session would report if it ended now.
    pub fn pending_move(&self) -> Option<Move> {
        let mv = Move::new(self.start_index, self.current_index);
        (!mv.is_noop()).then_some(mv)
    }

    /// Adds `delta` to the offset and steps `current_index` while the offset exceeds
    /// `threshold * row_size`.
    ///
    /// `on_swap(from, to)` is called once per single-position step, before `current_index`
    /// is updated. Each step subtracts `row_size` (in the drag direction) from the offset, so
    /// a fast drag carries its excess into the next position. Steps stop at either end of
    /// `0..item_count`.
    ///
    /// Returns the number of steps taken.
    pub fn advance(
        &mut self,
        delta: f32,
        row_size: f32,
        threshold: f32,
        item_count: usize,
        mut on_swap: impl FnMut(usize, usize),
    ) -> usize {
        self.accumulated_offset += delta;
        if !row_size.is_finite() || row_size <= 0.0 || self.current_index >= item_count {
            return 0;
        }

        let limit = threshold * row_size;
        let last = item_count - 1;
        let mut steps = 0usize;
        // Each step shrinks |offset| by `row_size`; `item_count` bounds it regardless.
        while steps < item_count && abs(self.accumulated_offset) > limit {
            let down = self.accumulated_offset > 0.0;
            let next = if down {
                cmp::min(self.current_index + 1, last)
            } else {
                self.current_index.saturating_sub(1)
            };
            if next == self.current_index {
                break;
            }
            on_swap(self.current_index, next);
            self.current_index = next;
            if down {
                self.accumulated_offset -= row_size;
            } else {
                self.accumulated_offset += row_size;
            }
            steps += 1;
        }
        steps
    }
}

pub(crate) fn abs(v: f32) -> f32 {
    if v < 0.0 { -v } else { v }
}
