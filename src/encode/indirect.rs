use crate::{
    pdf::{IndirectObject, Reference},
    writer::{Encode, Writer},
};

impl Encode for Reference {
    fn encoded_len(&self) -> usize {
        self.number.to_string().len() + self.generation.to_string().len() + 3
    }

    fn write_to(&self, writer: &mut dyn Writer) {
        writer.write(self.number.to_string().as_bytes());
        writer.write(b" ");
        writer.write(self.generation.to_string().as_bytes());
        writer.write(b" R");
    }
}

impl Encode for IndirectObject {
    fn encoded_len(&self) -> usize {
        self.reference.number.to_string().len()
            + self.reference.generation.to_string().len()
            + b"  obj\n".len()
            + self.object.encoded_len()
            + b"\nendobj\n".len()
    }

    fn write_to(&self, writer: &mut dyn Writer) {
        writer.write(self.reference.number.to_string().as_bytes());
        writer.write(b" ");
        writer.write(self.reference.generation.to_string().as_bytes());
        writer.write(b" obj\n");
        self.object.write_to(writer);
        writer.write(b"\nendobj\n");
    }
}

#[cfg(test)]
mod tests {
    use crate::pdf::Object;

    use super::*;

    #[test]
    fn reference() {
        let reference = Reference::new(21, 0);
        let encoded_len = reference.encoded_len();
        let mut out = Vec::new();
        reference.write_to(&mut out);
        assert_eq!(&out[..], b"21 0 R");
        assert_eq!(encoded_len, out.len());
    }

    #[test]
    fn indirect_object() {
        let object = IndirectObject::new(Reference::new(3, 0), Object::Null);
        let encoded_len = object.encoded_len();
        let mut out = Vec::new();
        object.write_to(&mut out);
        assert_eq!(&out[..], b"3 0 obj\nnull\nendobj\n");
        assert_eq!(encoded_len, out.len());
    }
}
