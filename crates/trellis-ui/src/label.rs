//! Label widget: a single line of themed text.

use std::cell::RefCell;
use std::rc::Rc;

use trellis_types::geometry::Size;

use crate::base::BaseWidget;
use crate::canvas::{CanvasObject, CanvasObjectRef, Text};
use crate::embed_base_widget;
use crate::layout::{self, Padding};
use crate::theme::Theme;
use crate::widget::{Layoutable, Positionable, Sizable, Themeable};

/// Static text with theme-driven color and size.
pub struct Label {
    base: BaseWidget,
    text: String,
    theme: Theme,
    text_obj: Option<Rc<RefCell<Text>>>,
}

embed_base_widget!(Label, base);

impl Label {
    /// Create a label styled with the default theme.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: BaseWidget::new(),
            text: text.into(),
            theme: Theme::default(),
            text_obj: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text. Takes effect on existing objects immediately; the
    /// new extent is only honored on the next layout pass.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if let Some(obj) = &self.text_obj {
            obj.borrow_mut().set_content(self.text.as_str());
        }
    }

    fn padding(&self) -> Padding {
        Padding::uniform(self.theme.padding)
    }

    fn style(&self, text: &mut Text) {
        text.set_content(self.text.as_str());
        text.set_color(self.theme.text);
        text.set_text_size(self.theme.text_size);
    }
}

impl Layoutable for Label {
    fn min_size(&self) -> Size {
        Text::measure(&self.text, self.theme.text_size) + self.padding().total()
    }

    fn layout(&mut self, size: Size) -> Vec<CanvasObjectRef> {
        let text = match &self.text_obj {
            Some(obj) => Rc::clone(obj),
            None => {
                let obj = Rc::new(RefCell::new(Text::new(
                    "",
                    self.theme.text,
                    self.theme.text_size,
                )));
                self.text_obj = Some(Rc::clone(&obj));
                obj
            },
        };
        {
            let mut t = text.borrow_mut();
            self.style(&mut t);
            let inner = self.padding().inner(size);
            let min = t.min_size();
            let mut origin = self.padding().offset();
            origin.y += layout::center(inner.height, min.height);
            t.resize(Size::new(inner.width, min.height));
            t.move_to(origin);
        }
        self.base.set_objects(vec![text as CanvasObjectRef]);
        self.base.objects().to_vec()
    }
}

impl Themeable for Label {
    fn apply_theme(&mut self, theme: &Theme) {
        self.theme = theme.clone();
        if let Some(obj) = &self.text_obj {
            self.style(&mut obj.borrow_mut());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_types::color::Color;
    use trellis_types::geometry::Position;

    #[test]
    fn new_defaults() {
        let l = Label::new("Hello");
        assert_eq!(l.text(), "Hello");
        assert_eq!(l.current_size(), Size::ZERO);
        assert_eq!(l.current_position(), Position::ZERO);
    }

    #[test]
    fn min_size_includes_padding() {
        let l = Label::new("Hello");
        let theme = Theme::default();
        let text = Text::measure("Hello", theme.text_size);
        let pad = 2 * theme.padding as i32;
        assert_eq!(l.min_size(), Size::new(text.width + pad, text.height + pad));
    }

    #[test]
    fn layout_produces_one_text() {
        let mut l = Label::new("Hi");
        let objs = l.layout(Size::new(100, 40));
        assert_eq!(objs.len(), 1);
        let obj = objs[0].borrow();
        assert_eq!(obj.current_position().x, Theme::default().padding as i32);
        assert!(obj.current_position().y > 0, "text should be centered");
    }

    #[test]
    fn layout_reuses_objects() {
        let mut l = Label::new("Hi");
        let first = l.layout(Size::new(100, 40));
        let second = l.layout(Size::new(200, 40));
        assert!(Rc::ptr_eq(&first[0], &second[0]));
        assert_eq!(second[0].borrow().current_size().width, 200 - 8);
    }

    #[test]
    fn set_text_updates_existing_text() {
        let mut l = Label::new("old");
        l.layout(Size::new(100, 40));
        l.set_text("a much longer label");
        let min = l.text_obj.as_ref().unwrap().borrow().min_size();
        assert_eq!(min, Text::measure("a much longer label", 14));
        assert_eq!(l.text_obj.as_ref().unwrap().borrow().content(), "a much longer label");
    }

    #[test]
    fn apply_theme_restyles_text() {
        let mut l = Label::new("Hi");
        l.layout(Size::new(100, 40));
        let mut theme = Theme::light();
        theme.text = Color::rgb(1, 2, 3);
        theme.text_size = 20;
        l.apply_theme(&theme);

        let t = l.text_obj.as_ref().unwrap().borrow();
        assert_eq!(t.color(), Color::rgb(1, 2, 3));
        assert_eq!(t.text_size(), 20);
        drop(t);
        assert_eq!(
            l.min_size(),
            Text::measure("Hi", 20) + Padding::uniform(theme.padding).total()
        );
    }

    #[test]
    fn apply_theme_before_layout_is_used_by_layout() {
        let mut l = Label::new("Hi");
        let mut theme = Theme::dark();
        theme.text = Color::rgb(9, 9, 9);
        l.apply_theme(&theme);
        l.layout(Size::new(50, 30));
        assert_eq!(
            l.text_obj.as_ref().unwrap().borrow().color(),
            Color::rgb(9, 9, 9)
        );
    }

    #[test]
    fn extreme_config_text_size_does_not_overflow() {
        let cfg = trellis_types::config::UiConfig::from_toml_str(
            "text_size = 65535\npadding = 65535",
        )
        .unwrap();
        let mut l = Label::new("x".repeat(11_000));
        l.apply_theme(&Theme::from_config(&cfg));

        let min = l.min_size();
        assert_eq!(min.width, i32::MAX);
        let objects = l.layout(min);
        assert_eq!(objects.len(), 1);
        assert!(objects[0].borrow().current_position().y >= 65_535);
    }
}
