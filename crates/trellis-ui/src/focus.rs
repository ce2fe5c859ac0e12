//! Keyboard focus dispatch.
//!
//! At most one widget holds focus. Transitions are delivered synchronously:
//! the previous holder hears `on_focus_lost` before the new one hears
//! `on_focus_gained`.

use std::rc::Rc;

use trellis_types::input::KeyEvent;

use crate::widget::FocussableRef;

/// Tracks the focused widget and routes key presses to it.
#[derive(Default)]
pub struct FocusManager {
    focused: Option<FocussableRef>,
}

impl FocusManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// The widget currently holding focus.
    pub fn focused(&self) -> Option<&FocussableRef> {
        self.focused.as_ref()
    }

    /// Whether `widget` is the current focus holder.
    pub fn is_focused(&self, widget: &FocussableRef) -> bool {
        self.focused
            .as_ref()
            .is_some_and(|current| Rc::ptr_eq(current, widget))
    }

    /// Move focus to `widget`. Focusing the current holder again is a no-op.
    pub fn focus(&mut self, widget: FocussableRef) {
        if self.is_focused(&widget) {
            return;
        }
        if let Some(previous) = self.focused.take() {
            previous.borrow_mut().on_focus_lost();
        }
        log::debug!("Focus moved to {:p}", Rc::as_ptr(&widget));
        widget.borrow_mut().on_focus_gained();
        self.focused = Some(widget);
    }

    /// Withdraw focus from the current holder, if any.
    pub fn unfocus(&mut self) {
        if let Some(previous) = self.focused.take() {
            log::debug!("Focus cleared");
            previous.borrow_mut().on_focus_lost();
        }
    }

    /// Deliver a key press to the focus holder.
    ///
    /// Returns `false` if nothing is focused.
    pub fn key_down(&self, event: &KeyEvent) -> bool {
        match &self.focused {
            Some(widget) => {
                widget.borrow_mut().on_key_down(event);
                true
            },
            None => {
                log::trace!("Dropping {:?} with no focused widget", event.name);
                false
            },
        }
    }
}
