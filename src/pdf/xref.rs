use crate::error::PpError;

/// Largest byte offset that fits the 10 digit entry field.
pub const MAX_OFFSET: u64 = 9_999_999_999;
/// Largest generation number that fits the 5 digit entry field.
pub const MAX_GENERATION: u32 = 99_999;

/// One cross-reference entry: byte offset, generation number and in-use flag.
///
/// Always renders as exactly 20 bytes. Values that would overflow the fixed
/// field widths are rejected by the builder, never truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub(crate) offset: u64,
    pub(crate) generation: u32,
    pub(crate) in_use: bool,
}

impl Entry {
    pub fn builder() -> EntryBuilder {
        EntryBuilder::default()
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn is_in_use(&self) -> bool {
        self.in_use
    }
}

/// Builder for [`Entry`] with validation at every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntryBuilder {
    offset: Option<u64>,
    generation: u32,
    in_use: bool,
}

impl EntryBuilder {
    pub fn offset(mut self, offset: u64) -> Result<Self, PpError> {
        if offset > MAX_OFFSET {
            return Err(PpError::OffsetTooLarge(offset));
        }
        self.offset = Some(offset);
        Ok(self)
    }

    pub fn generation(mut self, generation: u32) -> Result<Self, PpError> {
        if generation > MAX_GENERATION {
            return Err(PpError::GenerationTooLarge(generation));
        }
        self.generation = generation;
        Ok(self)
    }

    pub fn in_use(mut self, in_use: bool) -> Self {
        self.in_use = in_use;
        self
    }

    pub fn build(self) -> Result<Entry, PpError> {
        let offset = self.offset.ok_or(PpError::MissingOffset)?;
        Ok(Entry {
            offset,
            generation: self.generation,
            in_use: self.in_use,
        })
    }
}

/// A run of entries covering the contiguous object numbers
/// `first_object_number..first_object_number + entries.len()`.
///
/// Entries are indexed positionally; the subsection stores no per-entry
/// object number. Grouping objects into subsections (e.g. to skip gaps in
/// the allocated number space) is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Subsection {
    pub(crate) first_object_number: u32,
    pub(crate) entries: Vec<Entry>,
}

impl Subsection {
    pub fn new(first_object_number: u32) -> Self {
        Self {
            first_object_number,
            entries: Vec::new(),
        }
    }

    pub fn add_entry(&mut self, entry: Entry) -> &mut Self {
        self.entries.push(entry);
        self
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn first_object_number(&self) -> u32 {
        self.first_object_number
    }
}

/// The cross-reference table: an ordered sequence of subsections.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub(crate) subsections: Vec<Subsection>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_subsection(&mut self, subsection: Subsection) -> &mut Self {
        self.subsections.push(subsection);
        self
    }

    pub fn subsections(&self) -> &[Subsection] {
        &self.subsections
    }
}

impl From<Vec<Subsection>> for Table {
    fn from(subsections: Vec<Subsection>) -> Self {
        Self { subsections }
    }
}
