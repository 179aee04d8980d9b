use std::fmt::Display;

use super::{Name, Object, PdfString};

/// A content stream operator: operands followed by the operator name.
#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    pub(crate) name: String,
    pub(crate) operands: Vec<Object>,
}

impl Operator {
    pub fn new(name: impl Into<String>, operands: Vec<Object>) -> Self {
        Self {
            name: name.into(),
            operands,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn operands(&self) -> &[Object] {
        &self.operands
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for operand in &self.operands {
            write!(f, "{} ", operand)?;
        }
        write!(f, "{}", self.name)
    }
}

pub fn begin_text() -> Operator {
    Operator::new("BT", vec![])
}

pub fn end_text() -> Operator {
    Operator::new("ET", vec![])
}

pub fn set_font_and_size(font: impl Into<Name>, size: i32) -> Operator {
    Operator::new("Tf", vec![Object::Name(font.into()), Object::Integer(size)])
}

pub fn move_text(x: i32, y: i32) -> Operator {
    Operator::new("Td", vec![Object::Integer(x), Object::Integer(y)])
}

pub fn show_text(text: impl Into<PdfString>) -> Operator {
    Operator::new("Tj", vec![Object::String(text.into())])
}

pub fn push_graphics_state() -> Operator {
    Operator::new("q", vec![])
}

pub fn pop_graphics_state() -> Operator {
    Operator::new("Q", vec![])
}
