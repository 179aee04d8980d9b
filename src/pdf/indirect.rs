use std::fmt::Display;

use super::Object;

/// An indirect object reference, e.g. `21 0 R`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reference {
    pub number: u32,
    pub generation: u32,
}

impl Reference {
    pub fn new(number: u32, generation: u32) -> Self {
        Self { number, generation }
    }
}

impl Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} R", self.number, self.generation)
    }
}

/// A file-level indirect object: `n g obj … endobj`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndirectObject {
    pub reference: Reference,
    pub object: Box<Object>,
}

impl IndirectObject {
    pub fn new(reference: Reference, object: Object) -> Self {
        Self {
            reference,
            object: Box::new(object),
        }
    }
}

impl Display for IndirectObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} obj\n{}\nendobj",
            self.reference.number, self.reference.generation, self.object
        )
    }
}
