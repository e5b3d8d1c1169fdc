use alloc::string::String;

use crate::render::{Glyph, Renderer};

/// Draws a tree as a single line of text, the same way it would be typed. The focused node, if
/// any, is surrounded by square brackets.
#[derive(Default, Clone, Debug)]
pub struct AsciiRenderer {
    pub line: String,
}

impl Renderer for AsciiRenderer {
    fn init(&mut self) {
        self.line = String::new();
    }

    fn draw(&mut self, glyph: Glyph) {
        match glyph {
            Glyph::Literal(value) => self.line.push_str(value),
            Glyph::Operator(operator) => self.line.push_str(operator.as_str()),
            Glyph::LeftParenthesis => self.line.push('('),
            Glyph::RightParenthesis => self.line.push(')'),
            Glyph::FocusStart => self.line.push('['),
            Glyph::FocusEnd => self.line.push(']'),
        }
    }
}
