use super::Reference;

/// Allocator for indirect object numbers.
///
/// Hands out strictly increasing object numbers starting at 1, always with
/// generation 0. Object number 0 is reserved for the free-list head of the
/// cross-reference table.
#[derive(Debug, Clone)]
pub struct Context {
    next_object_number: u32,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    pub fn new() -> Self {
        Self {
            next_object_number: 1,
        }
    }

    pub fn next_ref(&mut self) -> Reference {
        let reference = Reference::new(self.next_object_number, 0);
        self.next_object_number += 1;
        reference
    }

    /// Number of references handed out so far.
    pub fn allocated(&self) -> u32 {
        self.next_object_number.saturating_sub(1)
    }
}
