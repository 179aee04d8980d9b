use std::path::Path;

use pdf::Document;

mod encode;
mod error;
pub mod filter;
pub mod pdf;
pub mod writer;

pub use error::PpError;
pub use writer::{Encode, SliceWriter, Writer};

/// Serialize a `Document` and write it to a file.
pub fn write_file(file_path: &Path, document: &Document) -> Result<(), PpError> {
    let bytes = document.save()?;
    std::fs::write(file_path, bytes)?;
    Ok(())
}
