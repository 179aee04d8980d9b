use std::io::Write;

use flate2::{write::ZlibEncoder, Compression};

use crate::error::PpError;

/// Compress `data` with the zlib wrapping expected by `/FlateDecode`.
///
/// The compressor is treated as an opaque collaborator: its failures are
/// propagated unmodified and its output is never inspected.
pub fn flate_encode(data: &[u8]) -> Result<Vec<u8>, PpError> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}
