use alloc::vec::Vec;

use crate::{RowGeometry, Size};

/// Read-only view of the host list's layout for the current frame.
///
/// The host recomputes this every frame; the engine never mutates it. Implementations only
/// need to report the rows that are currently visible, in any order.
pub trait GeometryProvider {
    /// The size of the scrollable viewport.
    fn viewport(&self) -> Size;

    /// Calls `f` once per visible row.
    fn for_each_visible_row(&self, f: &mut dyn FnMut(RowGeometry));

    /// The visible row with the given list index, if any.
    fn row(&self, index: usize) -> Option<RowGeometry> {
        let mut out = None;
        self.for_each_visible_row(&mut |row| {
            if out.is_none() && row.index == index {
                out = Some(row);
            }
        });
        out
    }

    /// The visible row whose vertical extent contains `y`, if any.
    fn row_at(&self, y: f32) -> Option<RowGeometry> {
        let mut out = None;
        self.for_each_visible_row(&mut |row| {
            if out.is_none() && row.contains_y(y) {
                out = Some(row);
            }
        });
        out
    }

    /// The smallest visible list index.
    fn first_visible_index(&self) -> Option<usize> {
        self.first_visible_row().map(|row| row.index)
    }

    /// The largest visible list index.
    fn last_visible_index(&self) -> Option<usize> {
        let mut out: Option<usize> = None;
        self.for_each_visible_row(&mut |row| {
            if out.is_none_or(|i| row.index > i) {
                out = Some(row.index);
            }
        });
        out
    }

    /// The visible row with the smallest list index.
    fn first_visible_row(&self) -> Option<RowGeometry> {
        let mut out: Option<RowGeometry> = None;
        self.for_each_visible_row(&mut |row| {
            if out.is_none_or(|r| row.index < r.index) {
                out = Some(row);
            }
        });
        out
    }

    /// Size used for the swap threshold of the row at `index`.
    ///
    /// Uses the row's own size when it is visible, otherwise the first visible row's size
    /// (lists are assumed to have uniform row height), otherwise `fallback`.
    fn row_size_or(&self, index: usize, fallback: f32) -> f32 {
        let usable = |size: f32| size.is_finite() && size > 0.0;
        if let Some(row) = self.row(index).filter(|r| usable(r.size)) {
            return row.size;
        }
        if let Some(row) = self.first_visible_row().filter(|r| usable(r.size)) {
            rtrace!(index, proxy = row.index, "row_size_or: using first visible row");
            return row.size;
        }
        rtrace!(index, fallback, "row_size_or: no usable geometry");
        fallback
    }
}

impl<G: GeometryProvider + ?Sized> GeometryProvider for &G {
    fn viewport(&self) -> Size {
        (**self).viewport()
    }

    fn for_each_visible_row(&self, f: &mut dyn FnMut(RowGeometry)) {
        (**self).for_each_visible_row(f)
    }

    fn row(&self, index: usize) -> Option<RowGeometry> {
        (**self).row(index)
    }

    fn row_at(&self, y: f32) -> Option<RowGeometry> {
        (**self).row_at(y)
    }

    fn first_visible_index(&self) -> Option<usize> {
        (**self).first_visible_index()
    }

    fn last_visible_index(&self) -> Option<usize> {
        (**self).last_visible_index()
    }

    fn first_visible_row(&self) -> Option<RowGeometry> {
        (**self).first_visible_row()
    }

    fn row_size_or(&self, index: usize, fallback: f32) -> f32 {
        (**self).row_size_or(index, fallback)
    }
}

/// An owned geometry snapshot.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometrySnapshot {
    pub viewport: Size,
    pub rows: Vec<RowGeometry>,
}

impl GeometrySnapshot {
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            rows: Vec::new(),
        }
    }

    /// Lays out a fixed-height list scrolled to `scroll_offset`.
    ///
    /// Only rows intersecting `[0, viewport.height)` are recorded.
    pub fn uniform(viewport: Size, item_count: usize, row_size: f32, scroll_offset: f32) -> Self {
        let mut out = Self::new(viewport);
        if item_count == 0 || !row_size.is_finite() || row_size <= 0.0 {
            return out;
        }
        let scroll_offset = if scroll_offset.is_finite() {
            scroll_offset.max(0.0)
        } else {
            0.0
        };

        let mut index = (scroll_offset / row_size) as usize;
        while index < item_count {
            let top = index as f32 * row_size - scroll_offset;
            if top >= viewport.height {
                break;
            }
            if top + row_size > 0.0 {
                out.rows.push(RowGeometry {
                    index,
                    top,
                    size: row_size,
                });
            }
            index += 1;
        }
        out
    }

    pub fn with_row(mut self, index: usize, top: f32, size: f32) -> Self {
        self.push_row(index, top, size);
        self
    }

    pub fn push_row(&mut self, index: usize, top: f32, size: f32) {
        self.rows.push(RowGeometry { index, top, size });
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl GeometryProvider for GeometrySnapshot {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn for_each_visible_row(&self, f: &mut dyn FnMut(RowGeometry)) {
        for row in &self.rows {
            f(*row);
        }
    }
}
