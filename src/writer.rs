/// Byte sink used by all encoders.
///
/// `position` reports the number of bytes between the start of the output and
/// the cursor. For a `Vec<u8>` that is simply its length; for a `SliceWriter`
/// it is the absolute index into the underlying buffer.
pub trait Writer {
    fn write(&mut self, buf: &[u8]);
    fn position(&self) -> usize;
}

impl Writer for Vec<u8> {
    fn write(&mut self, buf: &[u8]) {
        self.extend(buf);
    }

    fn position(&self) -> usize {
        self.len()
    }
}

/// Bounded cursor over a caller supplied buffer.
///
/// Panics if a write runs past the end of the buffer. Callers are expected to
/// allocate at least `encoded_len()` bytes past `offset` before writing.
pub struct SliceWriter<'a> {
    buf: &'a mut [u8],
    start: usize,
    pos: usize,
}

impl<'a> SliceWriter<'a> {
    pub fn new(buf: &'a mut [u8], offset: usize) -> Self {
        Self {
            buf,
            start: offset,
            pos: offset,
        }
    }

    /// Number of bytes written since construction.
    pub fn written(&self) -> usize {
        self.pos - self.start
    }
}

impl Writer for SliceWriter<'_> {
    fn write(&mut self, buf: &[u8]) {
        self.buf[self.pos..self.pos + buf.len()].copy_from_slice(buf);
        self.pos += buf.len();
    }

    fn position(&self) -> usize {
        self.pos
    }
}

/// The serialization protocol shared by every object kind.
///
/// Invariant: as long as the value is not mutated in between, `write_to` emits
/// exactly `encoded_len()` bytes. The library performs no runtime check of
/// this; it is verified by the test suite of every implementation.
pub trait Encode {
    fn encoded_len(&self) -> usize;
    fn write_to(&self, writer: &mut dyn Writer);

    /// Write into `buffer` starting at `offset` and report the number of
    /// bytes written.
    fn write_into(&self, buffer: &mut [u8], offset: usize) -> usize {
        let mut writer = SliceWriter::new(buffer, offset);
        self.write_to(&mut writer);
        writer.written()
    }
}
