//! `BaseWidget`: reusable size/position storage for concrete widgets.
//!
//! A concrete widget embeds a `BaseWidget` field and forwards [`Sizable`] and
//! [`Positionable`] to it (see [`embed_base_widget!`](crate::embed_base_widget)).
//! `BaseWidget` deliberately does not implement [`Layoutable`] or
//! [`Themeable`], so on its own it is not a [`Widget`]: the embedding type
//! must supply `min_size`, `layout` and `apply_theme`.
//!
//! [`Layoutable`]: crate::widget::Layoutable
//! [`Themeable`]: crate::widget::Themeable
//! [`Widget`]: crate::widget::Widget

use trellis_types::geometry::{Position, Size};

use crate::canvas::CanvasObjectRef;
use crate::widget::{Positionable, Sizable};

/// Size, position and child objects shared by every concrete widget.
///
/// Accessors are plain field reads and writes. Nothing is validated and no
/// relayout happens on change.
///
/// A bare `BaseWidget` cannot stand in for a [`Widget`]:
///
/// ```compile_fail
/// use trellis_ui::base::BaseWidget;
/// use trellis_ui::widget::Widget;
///
/// fn takes_widget<W: Widget>(_: W) {}
///
/// takes_widget(BaseWidget::new());
/// ```
#[derive(Default)]
pub struct BaseWidget {
    size: Size,
    position: Position,
    objects: Vec<CanvasObjectRef>,
}

impl BaseWidget {
    /// Zero size, zero position, no children.
    pub fn new() -> Self {
        Self::default()
    }

    /// Children produced by the most recent layout pass.
    pub fn objects(&self) -> &[CanvasObjectRef] {
        &self.objects
    }

    /// Replace the cached children.
    pub fn set_objects(&mut self, objects: Vec<CanvasObjectRef>) {
        self.objects = objects;
    }
}

impl Sizable for BaseWidget {
    fn current_size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }
}

impl Positionable for BaseWidget {
    fn current_position(&self) -> Position {
        self.position
    }

    fn move_to(&mut self, position: Position) {
        self.position = position;
    }
}

impl std::fmt::Debug for BaseWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseWidget")
            .field("size", &self.size)
            .field("position", &self.position)
            .field("objects", &self.objects.len())
            .finish()
    }
}

/// Implement [`Sizable`] and [`Positionable`] for a type by forwarding to
/// one of its `BaseWidget` fields.
///
/// ```
/// use trellis_ui::base::BaseWidget;
/// use trellis_ui::embed_base_widget;
/// use trellis_ui::widget::Sizable;
/// use trellis_ui::Size;
///
/// struct Spacer {
///     base: BaseWidget,
/// }
///
/// embed_base_widget!(Spacer, base);
///
/// let mut s = Spacer { base: BaseWidget::new() };
/// s.resize(Size::new(8, 8));
/// assert_eq!(s.current_size(), Size::new(8, 8));
/// ```
#[macro_export]
macro_rules! embed_base_widget {
    ($ty:ty, $field:ident) => {
        impl $crate::widget::Sizable for $ty {
            fn current_size(&self) -> $crate::Size {
                $crate::widget::Sizable::current_size(&self.$field)
            }

            fn resize(&mut self, size: $crate::Size) {
                $crate::widget::Sizable::resize(&mut self.$field, size)
            }
        }

        impl $crate::widget::Positionable for $ty {
            fn current_position(&self) -> $crate::Position {
                $crate::widget::Positionable::current_position(&self.$field)
            }

            fn move_to(&mut self, position: $crate::Position) {
                $crate::widget::Positionable::move_to(&mut self.$field, position)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Rectangle, canvas_ref};
    use trellis_types::color::Color;

    #[test]
    fn new_is_zero_valued() {
        let w = BaseWidget::new();
        assert_eq!(w.current_size(), Size::ZERO);
        assert_eq!(w.current_position(), Position::ZERO);
        assert!(w.objects().is_empty());
    }

    #[test]
    fn resize_then_move() {
        let mut w = BaseWidget::new();
        w.resize(Size::new(100, 50));
        w.move_to(Position::new(10, 20));
        assert_eq!(w.current_size(), Size::new(100, 50));
        assert_eq!(w.current_position(), Position::new(10, 20));
    }

    #[test]
    fn move_then_resize() {
        let mut w = BaseWidget::new();
        w.move_to(Position::new(10, 20));
        w.resize(Size::new(100, 50));
        assert_eq!(w.current_size(), Size::new(100, 50));
        assert_eq!(w.current_position(), Position::new(10, 20));
    }

    #[test]
    fn negative_values_are_stored_verbatim() {
        let mut w = BaseWidget::new();
        w.resize(Size::new(-5, -1));
        w.move_to(Position::new(-30, -40));
        assert_eq!(w.current_size(), Size::new(-5, -1));
        assert_eq!(w.current_position(), Position::new(-30, -40));
    }

    #[test]
    fn resize_leaves_objects_alone() {
        let mut w = BaseWidget::new();
        let rect = canvas_ref(Rectangle::new(Color::BLACK));
        w.set_objects(vec![rect]);
        w.resize(Size::new(200, 200));
        assert_eq!(w.objects().len(), 1);
        assert_eq!(w.objects()[0].borrow().current_size(), Size::ZERO);
    }

    #[test]
    fn debug_reports_object_count() {
        let w = BaseWidget::new();
        let dbg = format!("{w:?}");
        assert!(dbg.contains("BaseWidget"));
        assert!(dbg.contains("objects: 0"));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn resize_roundtrips(w in any::<i32>(), h in any::<i32>()) {
                let mut widget = BaseWidget::new();
                widget.resize(Size::new(w, h));
                prop_assert_eq!(widget.current_size(), Size::new(w, h));
            }

            #[test]
            fn move_roundtrips(x in any::<i32>(), y in any::<i32>()) {
                let mut widget = BaseWidget::new();
                widget.move_to(Position::new(x, y));
                prop_assert_eq!(widget.current_position(), Position::new(x, y));
            }

            #[test]
            fn size_and_position_are_independent(
                w in any::<i32>(),
                h in any::<i32>(),
                x in any::<i32>(),
                y in any::<i32>(),
                move_first in any::<bool>(),
            ) {
                let mut widget = BaseWidget::new();
                if move_first {
                    widget.move_to(Position::new(x, y));
                    widget.resize(Size::new(w, h));
                } else {
                    widget.resize(Size::new(w, h));
                    widget.move_to(Position::new(x, y));
                }
                prop_assert_eq!(widget.current_size(), Size::new(w, h));
                prop_assert_eq!(widget.current_position(), Position::new(x, y));
            }
        }
    }
}
