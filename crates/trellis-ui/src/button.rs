//! Button widget.

use std::cell::RefCell;
use std::rc::Rc;

use trellis_types::color::Color;
use trellis_types::geometry::{Position, Size};

use crate::base::BaseWidget;
use crate::canvas::{CanvasObject, CanvasObjectRef, Rectangle, Text};
use crate::embed_base_widget;
use crate::layout::{self, Padding};
use crate::theme::Theme;
use crate::widget::{Layoutable, Positionable, Sizable, Themeable};

/// Button visual style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Filled with the theme's primary color.
    Primary,
    /// Filled with the theme's neutral button color.
    Secondary,
}

/// A tappable button with a text label.
pub struct Button {
    base: BaseWidget,
    text: String,
    style: ButtonStyle,
    disabled: bool,
    on_tapped: Option<Box<dyn FnMut()>>,
    theme: Theme,
    background: Option<Rc<RefCell<Rectangle>>>,
    label: Option<Rc<RefCell<Text>>>,
}

embed_base_widget!(Button, base);

impl Button {
    /// Create a new secondary button.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: BaseWidget::new(),
            text: text.into(),
            style: ButtonStyle::Secondary,
            disabled: false,
            on_tapped: None,
            theme: Theme::default(),
            background: None,
            label: None,
        }
    }

    /// Create a new primary (accent-colored) button.
    pub fn primary(text: impl Into<String>) -> Self {
        Self {
            style: ButtonStyle::Primary,
            ..Self::new(text)
        }
    }

    /// Run `f` whenever the button is tapped.
    pub fn on_tapped(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_tapped = Some(Box::new(f));
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> ButtonStyle {
        self.style
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.refresh();
    }

    /// Activate the button. Disabled buttons ignore taps.
    pub fn tap(&mut self) {
        if self.disabled {
            return;
        }
        if let Some(f) = self.on_tapped.as_mut() {
            f();
        }
    }

    fn padding(&self) -> Padding {
        Padding::symmetric(self.theme.padding.saturating_mul(2), self.theme.padding)
    }

    fn bg_color(&self) -> Color {
        match self.style {
            ButtonStyle::Primary if !self.disabled => self.theme.primary,
            _ => self.theme.button,
        }
    }

    fn text_color(&self) -> Color {
        if self.disabled {
            self.theme.disabled_text
        } else {
            self.theme.text
        }
    }

    /// Push current colors and text into the existing canvas objects.
    fn refresh(&self) {
        if let Some(bg) = &self.background {
            bg.borrow_mut().fill = self.bg_color();
        }
        if let Some(label) = &self.label {
            let mut label = label.borrow_mut();
            label.set_content(self.text.as_str());
            label.set_color(self.text_color());
            label.set_text_size(self.theme.text_size);
        }
    }
}

impl Layoutable for Button {
    fn min_size(&self) -> Size {
        Text::measure(&self.text, self.theme.text_size) + self.padding().total()
    }

    fn layout(&mut self, size: Size) -> Vec<CanvasObjectRef> {
        let background = Rc::clone(
            self.background
                .get_or_insert_with(|| Rc::new(RefCell::new(Rectangle::new(Color::TRANSPARENT)))),
        );
        let label = Rc::clone(
            self.label
                .get_or_insert_with(|| Rc::new(RefCell::new(Text::new("", Color::BLACK, 0)))),
        );
        self.refresh();

        {
            let mut bg = background.borrow_mut();
            bg.resize(size);
            bg.move_to(Position::ZERO);
        }
        {
            let mut label = label.borrow_mut();
            let min = label.min_size();
            label.resize(min);
            label.move_to(Position::new(
                layout::center(size.width, min.width),
                layout::center(size.height, min.height),
            ));
        }

        self.base.set_objects(vec![
            background as CanvasObjectRef,
            label as CanvasObjectRef,
        ]);
        self.base.objects().to_vec()
    }
}

impl Themeable for Button {
    fn apply_theme(&mut self, theme: &Theme) {
        self.theme = theme.clone();
        self.refresh();
    }
}
