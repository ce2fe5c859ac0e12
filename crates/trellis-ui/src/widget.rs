//! Widget capability traits.
//!
//! A widget is not one monolithic interface. Each concern is its own trait so
//! a type opts into exactly what it supports:
//!
//! - [`Sizable`] and [`Positionable`] describe where the widget sits.
//! - [`Layoutable`] turns an allocated size into canvas objects.
//! - [`Themeable`] re-derives visual properties from a [`Theme`].
//! - [`Focussable`] receives keyboard focus and key presses.
//!
//! [`Widget`] is the full set a layout system needs to manage an element
//! uniformly; it is implemented automatically for any type with all four
//! required capabilities. [`BaseWidget`](crate::base::BaseWidget) supplies
//! the first two.
//!
//! All widget state is confined to the UI thread. Shared handles are
//! `Rc<RefCell<_>>`, so widgets are neither `Send` nor `Sync`.

use std::cell::RefCell;
use std::rc::Rc;

use trellis_types::geometry::{Position, Size};
use trellis_types::input::KeyEvent;

use crate::canvas::CanvasObjectRef;
use crate::theme::Theme;

/// Something with a mutable extent.
pub trait Sizable {
    /// The current extent.
    fn current_size(&self) -> Size;

    /// Set a new extent.
    ///
    /// Do not call this on a widget whose size is managed by a layout; the
    /// layout will not know about the change.
    fn resize(&mut self, size: Size);
}

/// Something with a mutable offset relative to its parent.
pub trait Positionable {
    /// The current offset, relative to the parent.
    fn current_position(&self) -> Position;

    /// Move to a new offset, relative to the parent.
    ///
    /// Do not call this on a widget whose position is managed by a layout.
    fn move_to(&mut self, position: Position);
}

/// Something that renders itself as a set of canvas objects.
pub trait Layoutable {
    /// Smallest extent this widget can render at without clipping.
    fn min_size(&self) -> Size;

    /// Produce (or update) the child canvas objects for the given allocation
    /// and return them for rendering.
    ///
    /// Called by the layout system during its size-allocation pass.
    fn layout(&mut self, size: Size) -> Vec<CanvasObjectRef>;
}

/// Something whose appearance follows the active theme.
pub trait Themeable {
    /// Re-derive colors, text sizes and spacing from `theme`.
    fn apply_theme(&mut self, theme: &Theme);
}

/// Something that can hold keyboard focus.
pub trait Focussable {
    /// This widget has become the focus target.
    fn on_focus_gained(&mut self);

    /// Focus has moved elsewhere.
    fn on_focus_lost(&mut self);

    /// A key was pressed while this widget held focus.
    fn on_key_down(&mut self, event: &KeyEvent);
}

/// The full capability set of a custom-drawn widget.
pub trait Widget: Sizable + Positionable + Layoutable + Themeable {}

impl<T: Sizable + Positionable + Layoutable + Themeable + ?Sized> Widget for T {}

/// Shared handle to a widget, as held by containers and layouts.
pub type WidgetRef = Rc<RefCell<dyn Widget>>;

/// Shared handle to a focus target.
pub type FocussableRef = Rc<RefCell<dyn Focussable>>;

/// Wrap a widget in a shared handle.
pub fn widget_ref<W: Widget + 'static>(widget: W) -> WidgetRef {
    Rc::new(RefCell::new(widget))
}
