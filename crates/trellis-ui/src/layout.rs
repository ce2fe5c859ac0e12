//! Layout helpers: padding and a single-axis box layout.
//!
//! A layout is the exclusive caller of `resize` and `move_to` for the widgets
//! it manages. Widgets never resize themselves.

use trellis_types::geometry::{Position, Size};

use crate::canvas::CanvasObjectRef;
use crate::widget::{Layoutable, Positionable, Sizable, WidgetRef};

/// Padding specification for all four sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    /// Top padding in pixels.
    pub top: u16,
    /// Right padding in pixels.
    pub right: u16,
    /// Bottom padding in pixels.
    pub bottom: u16,
    /// Left padding in pixels.
    pub left: u16,
}

impl Padding {
    /// Zero padding on all sides.
    pub const ZERO: Self = Self::uniform(0);

    /// Create uniform padding on all sides.
    pub const fn uniform(p: u16) -> Self {
        Self {
            top: p,
            right: p,
            bottom: p,
            left: p,
        }
    }

    /// Create symmetric padding (horizontal and vertical).
    pub const fn symmetric(h: u16, v: u16) -> Self {
        Self {
            top: v,
            right: h,
            bottom: v,
            left: h,
        }
    }

    /// Total horizontal and vertical padding as an extent.
    pub fn total(&self) -> Size {
        Size::new(
            self.left as i32 + self.right as i32,
            self.top as i32 + self.bottom as i32,
        )
    }

    /// Offset of the content area from the outer origin.
    pub fn offset(&self) -> Position {
        Position::new(self.left as i32, self.top as i32)
    }

    /// Content extent left inside `outer`, never negative.
    pub fn inner(&self, outer: Size) -> Size {
        let inner = outer - self.total();
        Size::new(inner.width.max(0), inner.height.max(0))
    }
}

/// Offset that centers `child` inside `parent` along one axis.
pub fn center(parent: i32, child: i32) -> i32 {
    (parent.saturating_sub(child) / 2).max(0)
}

/// Main axis of a [`BoxLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Children left to right.
    Horizontal,
    /// Children top to bottom.
    Vertical,
}

/// Where a layout put one child, and what the child rendered there.
pub struct Placement {
    /// The child's position within the container.
    pub origin: Position,
    /// The size the child was given.
    pub size: Size,
    /// Canvas objects from the child's layout pass, relative to `origin`.
    pub objects: Vec<CanvasObjectRef>,
}

/// Stacks widgets along one axis at their minimum extent.
///
/// Each child gets its minimum size along the main axis and the full cross
/// extent. The last child also absorbs whatever main-axis space is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxLayout {
    pub orientation: Orientation,
    /// Gap between adjacent children in pixels.
    pub spacing: i32,
}

impl BoxLayout {
    pub fn vertical(spacing: i32) -> Self {
        Self {
            orientation: Orientation::Vertical,
            spacing,
        }
    }

    pub fn horizontal(spacing: i32) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            spacing,
        }
    }

    fn main(&self, size: Size) -> i32 {
        match self.orientation {
            Orientation::Horizontal => size.width,
            Orientation::Vertical => size.height,
        }
    }

    fn cross(&self, size: Size) -> i32 {
        match self.orientation {
            Orientation::Horizontal => size.height,
            Orientation::Vertical => size.width,
        }
    }

    fn compose(&self, main: i32, cross: i32) -> Size {
        match self.orientation {
            Orientation::Horizontal => Size::new(main, cross),
            Orientation::Vertical => Size::new(cross, main),
        }
    }

    fn origin(&self, offset: i32) -> Position {
        match self.orientation {
            Orientation::Horizontal => Position::new(offset, 0),
            Orientation::Vertical => Position::new(0, offset),
        }
    }

    /// Smallest container extent that fits every child at its minimum.
    pub fn min_size(&self, children: &[WidgetRef]) -> Size {
        if children.is_empty() {
            return Size::ZERO;
        }
        let gaps = i32::try_from(children.len() - 1).unwrap_or(i32::MAX);
        let mut main = self.spacing.saturating_mul(gaps);
        let mut cross = 0;
        for child in children {
            let min = child.borrow().min_size();
            main = main.saturating_add(self.main(min));
            cross = cross.max(self.cross(min));
        }
        self.compose(main, cross)
    }

    /// Size and position every child within `size`, run each child's layout
    /// pass, and report the placements in child order.
    pub fn arrange(&self, children: &[WidgetRef], size: Size) -> Vec<Placement> {
        log::trace!(
            "Arranging {} children ({:?}) in {}x{}",
            children.len(),
            self.orientation,
            size.width,
            size.height
        );
        let total = self.main(size);
        let cross = self.cross(size);
        let mut offset = 0;
        let mut placements = Vec::with_capacity(children.len());

        for (i, child) in children.iter().enumerate() {
            let mut child = child.borrow_mut();
            let mut main = self.main(child.min_size());
            if i + 1 == children.len() {
                main = main.max(total.saturating_sub(offset));
            }
            let alloc = self.compose(main, cross);
            let origin = self.origin(offset);

            child.resize(alloc);
            child.move_to(origin);
            let objects = child.layout(alloc);
            placements.push(Placement {
                origin,
                size: alloc,
                objects,
            });

            offset = offset.saturating_add(main).saturating_add(self.spacing);
        }
        placements
    }
}
