//! Shared test utilities for trellis-ui tests.
//!
//! Provides a [`Probe`] widget that records every capability call it
//! receives, for assertion.

use trellis_types::color::Color;
use trellis_types::geometry::Size;
use trellis_types::input::KeyEvent;

use crate::base::BaseWidget;
use crate::canvas::{CanvasObjectRef, Rectangle, canvas_ref};
use crate::embed_base_widget;
use crate::theme::Theme;
use crate::widget::{Focussable, Layoutable, Sizable, Themeable};

/// A recorded capability call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Layout(Size),
    ApplyTheme,
    FocusGained,
    FocusLost,
    KeyDown(KeyEvent),
}

/// A widget with a fixed minimum size that records everything done to it.
pub struct Probe {
    base: BaseWidget,
    min: Size,
    pub calls: Vec<Call>,
}

embed_base_widget!(Probe, base);

impl Probe {
    pub fn new() -> Self {
        Self::with_min(Size::ZERO)
    }

    pub fn with_min(min: Size) -> Self {
        Self {
            base: BaseWidget::new(),
            min,
            calls: Vec::new(),
        }
    }

    /// Only the focus-related calls, in order.
    pub fn focus_calls(&self) -> Vec<&Call> {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::FocusGained | Call::FocusLost))
            .collect()
    }

    /// Count of `KeyDown` calls.
    pub fn key_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::KeyDown(_)))
            .count()
    }
}

impl Layoutable for Probe {
    fn min_size(&self) -> Size {
        self.min
    }

    /// One rectangle filling the allocation.
    fn layout(&mut self, size: Size) -> Vec<CanvasObjectRef> {
        self.calls.push(Call::Layout(size));
        let rect = canvas_ref(Rectangle::new(Color::BLACK));
        rect.borrow_mut().resize(size);
        self.base.set_objects(vec![rect]);
        self.base.objects().to_vec()
    }
}

impl Themeable for Probe {
    fn apply_theme(&mut self, _theme: &Theme) {
        self.calls.push(Call::ApplyTheme);
    }
}

impl Focussable for Probe {
    fn on_focus_gained(&mut self) {
        self.calls.push(Call::FocusGained);
    }

    fn on_focus_lost(&mut self) {
        self.calls.push(Call::FocusLost);
    }

    fn on_key_down(&mut self, event: &KeyEvent) {
        self.calls.push(Call::KeyDown(event.clone()));
    }
}
