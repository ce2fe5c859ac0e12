//! trellis-ui: widget capability contracts and a small widget set.
//!
//! Widgets are built from independent capabilities (see [`widget`]) rather
//! than a base class. [`BaseWidget`] stores size and position so concrete
//! widgets only write their own layout and theming. Everything here runs on
//! the UI thread; shared handles are `Rc<RefCell<_>>`.

pub mod base;
pub mod button;
pub mod canvas;
pub mod entry;
pub mod focus;
pub mod label;
pub mod layout;
pub mod theme;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_utils;

pub use base::BaseWidget;
pub use canvas::{CanvasObject, CanvasObjectRef};
pub use focus::FocusManager;
pub use layout::{BoxLayout, Padding};
pub use theme::Theme;
pub use trellis_types::geometry::{Position, Size};
pub use widget::{Focussable, Layoutable, Positionable, Sizable, Themeable, Widget, WidgetRef};
