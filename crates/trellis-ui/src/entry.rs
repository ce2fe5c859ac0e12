//! Entry widget: single-line text input with cursor.

use std::cell::RefCell;
use std::rc::Rc;

use trellis_types::color::Color;
use trellis_types::geometry::{Position, Size};
use trellis_types::input::{KeyEvent, KeyName};

use crate::base::BaseWidget;
use crate::canvas::{CanvasObject, CanvasObjectRef, Rectangle, Text};
use crate::embed_base_widget;
use crate::layout::{self, Padding};
use crate::theme::Theme;
use crate::widget::{Focussable, Layoutable, Positionable, Sizable, Themeable};

/// Canvas objects owned by an entry, created on first layout.
struct EntryObjects {
    background: Rc<RefCell<Rectangle>>,
    text: Rc<RefCell<Text>>,
    cursor: Rc<RefCell<Rectangle>>,
}

/// Text input field with cursor and optional placeholder.
pub struct Entry {
    base: BaseWidget,
    text: String,
    placeholder: String,
    /// Cursor position as a character index.
    cursor: usize,
    focused: bool,
    password: bool,
    on_changed: Option<Box<dyn FnMut(&str)>>,
    theme: Theme,
    objects: Option<EntryObjects>,
}

embed_base_widget!(Entry, base);

impl Default for Entry {
    fn default() -> Self {
        Self::new()
    }
}

impl Entry {
    /// Create a new empty entry.
    pub fn new() -> Self {
        Self {
            base: BaseWidget::new(),
            text: String::new(),
            placeholder: String::new(),
            cursor: 0,
            focused: false,
            password: false,
            on_changed: None,
            theme: Theme::default(),
            objects: None,
        }
    }

    /// Create a password entry that masks its content.
    pub fn password() -> Self {
        Self {
            password: true,
            ..Self::new()
        }
    }

    /// Builder-style placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Run `f` with the new content after every edit.
    pub fn on_changed(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_changed = Some(Box::new(f));
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Replace the content and move the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.char_count();
        self.changed();
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Insert text at the cursor position.
    pub fn insert(&mut self, s: &str) {
        let at = self.byte_index(self.cursor);
        self.text.insert_str(at, s);
        self.cursor += s.chars().count();
        self.changed();
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.remove_at_cursor();
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            self.remove_at_cursor();
        }
    }

    fn remove_at_cursor(&mut self) {
        let at = self.byte_index(self.cursor);
        if let Some(ch) = self.text[at..].chars().next() {
            self.text.drain(at..at + ch.len_utf8());
            self.changed();
        }
    }

    /// Text as displayed (masked in password mode).
    fn display_text(&self) -> String {
        if self.password {
            "*".repeat(self.char_count())
        } else {
            self.text.clone()
        }
    }

    fn changed(&mut self) {
        if let Some(f) = self.on_changed.as_mut() {
            f(&self.text);
        }
        self.refresh();
    }

    fn padding(&self) -> Padding {
        Padding::uniform(self.theme.padding.saturating_mul(2))
    }

    /// Push current text, colors and cursor into the existing canvas objects.
    fn refresh(&self) {
        let Some(objs) = &self.objects else { return };
        let (content, color) = if self.text.is_empty() {
            (self.placeholder.clone(), self.theme.placeholder)
        } else {
            (self.display_text(), self.theme.text)
        };
        let border = if self.focused {
            self.theme.focus
        } else {
            self.theme.placeholder
        };

        let height = {
            let mut bg = objs.background.borrow_mut();
            bg.fill = self.theme.background;
            bg.stroke = Some(border);
            bg.current_size().height
        };

        let origin = self.padding().offset();
        let mut text = objs.text.borrow_mut();
        text.set_content(content);
        text.set_color(color);
        text.set_text_size(self.theme.text_size);
        let text_min = text.min_size();
        let text_y = layout::center(height, text_min.height);
        text.resize(text_min);
        text.move_to(Position::new(origin.x, text_y));

        let before: String = self.display_text().chars().take(self.cursor).collect();
        let cursor_x = origin
            .x
            .saturating_add(Text::measure(&before, self.theme.text_size).width);
        let mut cursor = objs.cursor.borrow_mut();
        cursor.fill = if self.focused {
            self.theme.text
        } else {
            Color::TRANSPARENT
        };
        cursor.resize(Size::new(1, text_min.height));
        cursor.move_to(Position::new(cursor_x, text_y));
    }
}

impl Layoutable for Entry {
    fn min_size(&self) -> Size {
        let content = if self.text.is_empty() {
            self.placeholder.clone()
        } else {
            self.display_text()
        };
        let text = Text::measure(&content, self.theme.text_size)
            .max(Text::measure("M", self.theme.text_size));
        text + self.padding().total()
    }

    fn layout(&mut self, size: Size) -> Vec<CanvasObjectRef> {
        let objs = self.objects.get_or_insert_with(|| EntryObjects {
            background: Rc::new(RefCell::new(Rectangle::new(Color::TRANSPARENT))),
            text: Rc::new(RefCell::new(Text::new("", Color::TRANSPARENT, 0))),
            cursor: Rc::new(RefCell::new(Rectangle::new(Color::TRANSPARENT))),
        });
        {
            let mut bg = objs.background.borrow_mut();
            bg.resize(size);
            bg.move_to(Position::ZERO);
        }
        let children: Vec<CanvasObjectRef> = vec![
            Rc::clone(&objs.background) as CanvasObjectRef,
            Rc::clone(&objs.text) as CanvasObjectRef,
            Rc::clone(&objs.cursor) as CanvasObjectRef,
        ];
        self.base.set_objects(children);
        self.refresh();
        self.base.objects().to_vec()
    }
}

impl Themeable for Entry {
    fn apply_theme(&mut self, theme: &Theme) {
        self.theme = theme.clone();
        self.refresh();
    }
}

impl Focussable for Entry {
    fn on_focus_gained(&mut self) {
        self.focused = true;
        self.refresh();
    }

    fn on_focus_lost(&mut self) {
        self.focused = false;
        self.refresh();
    }

    fn on_key_down(&mut self, event: &KeyEvent) {
        match event.name {
            KeyName::Backspace => self.backspace(),
            KeyName::Delete => self.delete(),
            KeyName::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                self.refresh();
            },
            KeyName::Right => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                self.refresh();
            },
            KeyName::Home => {
                self.cursor = 0;
                self.refresh();
            },
            KeyName::End => {
                self.cursor = self.char_count();
                self.refresh();
            },
            _ => {
                if let Some(text) = event.printable() {
                    self.insert(text);
                }
            },
        }
    }
}
