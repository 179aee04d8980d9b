use std::fmt::Display;

use crate::{error::PpError, filter::flate_encode, writer::Encode};

use super::{Dictionary, Name, Object, Reference};

/// An object stream (`/Type /ObjStm`): many indirect objects packed into one
/// stream, each stripped of its own `obj`/`endobj` wrapper.
///
/// The decompressed payload starts with an index of `"<num> <offset>"` pairs
/// terminated by a newline; `/First` is the byte length of that region,
/// measured before compression. Objects keep the order they were supplied in.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectStream {
    objects: Vec<(Reference, Object)>,
    compress: bool,
    // Index region length of the uncompressed payload.
    first: usize,
    payload: Vec<u8>,
}

impl ObjectStream {
    /// Pack `objects` into a stream, compressing the payload if requested.
    ///
    /// Compression runs exactly once, here; later size and write calls reuse
    /// the cached payload.
    pub fn with_objects(
        objects: Vec<(Reference, Object)>,
        compress: bool,
    ) -> Result<Self, PpError> {
        let mut index = String::new();
        let mut offset = 0;
        for (i, (reference, object)) in objects.iter().enumerate() {
            if i != 0 {
                index.push(' ');
            }
            index.push_str(&format!("{} {}", reference.number, offset));
            // bodies are newline terminated
            offset += object.encoded_len() + 1;
        }
        index.push('\n');

        let first = index.len();
        let mut raw = index.into_bytes();
        for (_, object) in objects.iter() {
            object.write_to(&mut raw);
            raw.push(b'\n');
        }

        let payload = if compress { flate_encode(&raw)? } else { raw };

        Ok(ObjectStream {
            objects,
            compress,
            first,
            payload,
        })
    }

    pub fn objects(&self) -> &[(Reference, Object)] {
        &self.objects
    }

    pub(crate) fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// The header dictionary, derived from the cached payload.
    pub fn header(&self) -> Dictionary {
        let mut dict = Dictionary::new();
        if self.compress {
            dict.insert(Name::from("Filter"), Object::Name(Name::from("FlateDecode")));
        }
        dict.insert(Name::from("Type"), Object::Name(Name::from("ObjStm")));
        dict.insert(
            Name::from("N"),
            Object::Integer(self.objects.len() as i32),
        );
        dict.insert(Name::from("First"), Object::Integer(self.first as i32));
        dict.insert(
            Name::from("Length"),
            Object::Integer(self.payload.len() as i32),
        );
        dict
    }
}

impl Display for ObjectStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\nstream\n", self.header())?;
        let mut offset = 0;
        for (i, (reference, object)) in self.objects.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{} {}", reference.number, offset)?;
            offset += object.encoded_len() + 1;
        }
        writeln!(f)?;
        for (_, object) in self.objects.iter() {
            writeln!(f, "{}", object)?;
        }
        write!(f, "\nendstream")
    }
}
