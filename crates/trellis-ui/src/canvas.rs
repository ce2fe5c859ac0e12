//! Canvas objects: the primitive drawables a widget's layout produces.
//!
//! A renderer only ever draws canvas objects. Widgets compose them in
//! [`Layoutable::layout`](crate::widget::Layoutable::layout) and hand back
//! shared references, so the widget can keep updating the same objects on
//! later passes.

use std::cell::RefCell;
use std::rc::Rc;

use trellis_types::color::Color;
use trellis_types::geometry::{Position, Size};

use crate::widget::{Positionable, Sizable};

/// A primitive drawable with a size and a position.
pub trait CanvasObject: Sizable + Positionable {
    /// Smallest extent this object can be drawn at.
    fn min_size(&self) -> Size;
}

/// Shared handle to a canvas object.
pub type CanvasObjectRef = Rc<RefCell<dyn CanvasObject>>;

/// Wrap a primitive in a shared handle.
pub fn canvas_ref<O: CanvasObject + 'static>(object: O) -> CanvasObjectRef {
    Rc::new(RefCell::new(object))
}

// ---------------------------------------------------------------------------
// Rectangle
// ---------------------------------------------------------------------------

/// A filled rectangle with an optional 1px stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub fill: Color,
    pub stroke: Option<Color>,
    size: Size,
    position: Position,
}

impl Rectangle {
    pub fn new(fill: Color) -> Self {
        Self {
            fill,
            stroke: None,
            size: Size::ZERO,
            position: Position::ZERO,
        }
    }

    /// Builder-style stroke color.
    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

impl Sizable for Rectangle {
    fn current_size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }
}

impl Positionable for Rectangle {
    fn current_position(&self) -> Position {
        self.position
    }

    fn move_to(&mut self, position: Position) {
        self.position = position;
    }
}

impl CanvasObject for Rectangle {
    fn min_size(&self) -> Size {
        Size::ZERO
    }
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

/// A single line of text.
///
/// Without a font backend the extent is approximated: each glyph is 3/5 of
/// the text size wide and a line is 4/3 of the text size tall.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    content: String,
    color: Color,
    text_size: u16,
    size: Size,
    position: Position,
}

impl Text {
    pub fn new(content: impl Into<String>, color: Color, text_size: u16) -> Self {
        Self {
            content: content.into(),
            color,
            text_size,
            size: Size::ZERO,
            position: Position::ZERO,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn text_size(&self) -> u16 {
        self.text_size
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_text_size(&mut self, text_size: u16) {
        self.text_size = text_size;
    }

    /// Approximate extent of `content` at `text_size`, capped at `i32::MAX`.
    pub fn measure(content: &str, text_size: u16) -> Size {
        let chars = i64::try_from(content.chars().count()).unwrap_or(i64::MAX);
        let ts = i64::from(text_size);
        let width = chars.saturating_mul(ts * 3).saturating_add(4) / 5;
        let height = (ts * 4 + 2) / 3;
        Size::new(clamp_i32(width), clamp_i32(height))
    }
}

fn clamp_i32(v: i64) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

impl Sizable for Text {
    fn current_size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }
}

impl Positionable for Text {
    fn current_position(&self) -> Position {
        self.position
    }

    fn move_to(&mut self, position: Position) {
        self.position = position;
    }
}

impl CanvasObject for Text {
    fn min_size(&self) -> Size {
        Text::measure(&self.content, self.text_size)
    }
}
