use crate::{
    error::PpError,
    writer::{Encode, Writer},
};

use super::{Context, Dictionary, Entry, IndirectObject, Name, Object, Reference, Subsection, Table};

// Version line plus a comment with bytes above 127, announcing binary
// content to transfer programs.
const HEADER: &[u8] = b"%PDF-1.7\n%\xb5\xed\xae\xfb\n";

/// A whole PDF file under assembly: indirect objects, the trailer dictionary
/// and the reference allocator.
///
/// `save` performs the single sequential pass the format requires: object
/// offsets are computed bottom-up from `encoded_len` before a single byte is
/// written, then everything is written top-down against those offsets.
#[derive(Debug, Clone, Default)]
pub struct Document {
    context: Context,
    objects: Vec<IndirectObject>,
    trailer: Dictionary,
}

impl Document {
    pub fn new() -> Self {
        Self {
            context: Context::new(),
            objects: Vec::new(),
            trailer: Dictionary::new(),
        }
    }

    /// Register `object` as the next indirect object and return its
    /// reference.
    pub fn push(&mut self, object: Object) -> Reference {
        let reference = self.context.next_ref();
        self.objects.push(IndirectObject::new(reference, object));
        reference
    }

    pub fn objects(&self) -> &[IndirectObject] {
        &self.objects
    }

    pub fn trailer_mut(&mut self) -> &mut Dictionary {
        &mut self.trailer
    }

    /// Serialize the whole file.
    pub fn save(&self) -> Result<Vec<u8>, PpError> {
        log::trace!("compute document layout");
        let mut offsets = Vec::with_capacity(self.objects.len());
        let mut position = HEADER.len();
        for object in &self.objects {
            offsets.push(position as u64);
            position += object.encoded_len();
        }

        let table = self.cross_reference(&offsets)?;
        let start_xref = position;
        let trailer = self.trailer_dict();

        let total = position
            + table.encoded_len()
            + b"trailer\n".len()
            + trailer.encoded_len()
            + b"\nstartxref\n".len()
            + start_xref.to_string().len()
            + b"\n%%EOF".len();

        log::trace!("write document, {} bytes", total);
        let mut out = Vec::with_capacity(total);
        out.write(HEADER);
        for (object, &offset) in self.objects.iter().zip(offsets.iter()) {
            debug_assert_eq!(out.position() as u64, offset);
            object.write_to(&mut out);
        }
        debug_assert_eq!(out.position(), start_xref);
        table.write_to(&mut out);
        out.write(b"trailer\n");
        trailer.write_to(&mut out);
        out.write(b"\nstartxref\n");
        out.write(start_xref.to_string().as_bytes());
        out.write(b"\n%%EOF");
        debug_assert_eq!(out.len(), total);

        Ok(out)
    }

    // One subsection spanning object 0 (the free-list head) through the last
    // allocated object. The context hands out contiguous numbers, so no gap
    // grouping is needed here.
    fn cross_reference(&self, offsets: &[u64]) -> Result<Table, PpError> {
        let mut subsection = Subsection::new(0);
        subsection.add_entry(Entry::builder().offset(0)?.generation(65_535)?.build()?);
        for &offset in offsets {
            subsection.add_entry(Entry::builder().offset(offset)?.in_use(true).build()?);
        }
        let mut table = Table::new();
        table.add_subsection(subsection);
        Ok(table)
    }

    fn trailer_dict(&self) -> Dictionary {
        let mut dict = self.trailer.clone();
        dict.insert(
            Name::from("Size"),
            Object::Integer(self.objects.len() as i32 + 1),
        );
        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(haystack: &[u8], needle: &[u8]) -> usize {
        haystack
            .windows(needle.len())
            .position(|w| w == needle)
            .expect("needle not found")
    }

    fn build() -> Document {
        let mut document = Document::new();
        let catalog = document.push(Object::Dictionary(Dictionary::from([(
            Name::from("Type"),
            Object::Name(Name::from("Catalog")),
        )])));
        document.push(Object::Integer(42));
        document.push(Object::Null);
        document
            .trailer_mut()
            .insert(Name::from("Root"), Object::Reference(catalog));
        document
    }

    #[test]
    fn push_allocates_increasing_numbers() {
        let mut document = Document::new();
        assert_eq!(document.push(Object::Null).number, 1);
        assert_eq!(document.push(Object::Null).number, 2);
    }

    #[test]
    fn save_frames_the_file() {
        let bytes = build().save().unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7\n"));
        assert!(bytes.ends_with(b"\n%%EOF"));
        // derived /Size covers the free-list head plus three objects
        assert!(find(&bytes, b"/Size 4") > find(&bytes, b"trailer\n"));
    }

    #[test]
    fn startxref_points_at_the_table() {
        let bytes = build().save().unwrap();
        let tail = find(&bytes, b"\nstartxref\n") + b"\nstartxref\n".len();
        let digits = &bytes[tail..bytes.len() - b"\n%%EOF".len()];
        let start_xref: usize = std::str::from_utf8(digits).unwrap().parse().unwrap();
        assert_eq!(&bytes[start_xref..start_xref + 5], b"xref\n");
    }

    #[test]
    fn entry_offsets_point_at_object_headers() {
        let bytes = build().save().unwrap();
        let table = find(&bytes, b"xref\n0 4\n") + b"xref\n0 4\n".len();
        assert_eq!(&bytes[table..table + 20], b"0000000000 65535 f \n");
        for i in 1..=3usize {
            let entry = &bytes[table + i * 20..table + i * 20 + 20];
            let offset: usize = std::str::from_utf8(&entry[..10]).unwrap().parse().unwrap();
            let header = format!("{} 0 obj\n", i);
            assert_eq!(&bytes[offset..offset + header.len()], header.as_bytes());
        }
    }
}
