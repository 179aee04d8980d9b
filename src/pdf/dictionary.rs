use std::ops::{Deref, DerefMut};

use indexmap::IndexMap;

use super::{Name, Object};

/// A dictionary object.
///
/// Keys keep their insertion order so that serialization is byte-stable;
/// inserting an existing key replaces its value in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dictionary(IndexMap<Name, Object>);

impl Dictionary {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }
}

impl Deref for Dictionary {
    type Target = IndexMap<Name, Object>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Dictionary {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[(Name, Object); N]> for Dictionary {
    fn from(entries: [(Name, Object); N]) -> Self {
        Self(IndexMap::from(entries))
    }
}

impl std::fmt::Display for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "<<")?;
        for (key, value) in self.iter() {
            writeln!(f, "{} {}", key, value)?;
        }
        write!(f, ">>")
    }
}
