use crate::{
    pdf::Object,
    writer::{Encode, Writer},
};

mod array;
mod content_stream;
mod dictionary;
mod indirect;
mod name;
mod object_stream;
mod operator;
mod string;
mod xref;

pub(crate) const TRUE_OBJECT: &str = "true";
pub(crate) const FALSE_OBJECT: &str = "false";
pub(crate) const NULL_OBJECT: &str = "null";

pub(crate) const START_STREAM: &[u8] = b"\nstream\n";
pub(crate) const END_STREAM: &[u8] = b"\nendstream";

impl Encode for Object {
    fn encoded_len(&self) -> usize {
        match self {
            Object::String(str) => str.encoded_len(),
            Object::HexString(bytes) => bytes.len() * 2 + 2,
            Object::Integer(i) => i.to_string().len(),
            Object::Real(r) => r.to_string().len(),
            Object::Bool(true) => TRUE_OBJECT.len(),
            Object::Bool(false) => FALSE_OBJECT.len(),
            Object::Name(n) => n.encoded_len(),
            Object::Array(a) => a.encoded_len(),
            Object::Dictionary(d) => d.encoded_len(),
            Object::Null => NULL_OBJECT.len(),
            Object::Reference(r) => r.encoded_len(),
            Object::ContentStream(s) => s.encoded_len(),
            Object::ObjectStream(s) => s.encoded_len(),
        }
    }

    fn write_to(&self, writer: &mut dyn Writer) {
        match self {
            Object::String(str) => str.write_to(writer),
            Object::HexString(bytes) => {
                writer.write(b"<");
                writer.write(hex::encode_upper(&bytes[..]).as_bytes());
                writer.write(b">");
            }
            Object::Integer(i) => writer.write(i.to_string().as_bytes()),
            Object::Real(r) => writer.write(r.to_string().as_bytes()),
            Object::Bool(true) => writer.write(TRUE_OBJECT.as_bytes()),
            Object::Bool(false) => writer.write(FALSE_OBJECT.as_bytes()),
            Object::Name(n) => n.write_to(writer),
            Object::Array(a) => a.write_to(writer),
            Object::Dictionary(d) => d.write_to(writer),
            Object::Null => writer.write(NULL_OBJECT.as_bytes()),
            Object::Reference(r) => r.write_to(writer),
            Object::ContentStream(s) => s.write_to(writer),
            Object::ObjectStream(s) => s.write_to(writer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(obj: Object, expected: &[u8]) {
        let encoded_len = obj.encoded_len();
        let mut out = Vec::new();
        obj.write_to(&mut out);
        assert_eq!(
            out,
            expected,
            "expected {}, got {}",
            String::from_utf8_lossy(expected),
            String::from_utf8_lossy(&out)
        );
        assert_eq!(encoded_len, out.len());
    }

    #[test]
    fn scalars() {
        check(Object::Bool(true), b"true");
        check(Object::Bool(false), b"false");
        check(Object::Null, b"null");
        check(Object::Integer(-21), b"-21");
        check(Object::Integer(0), b"0");
        check(Object::Real(24.5), b"24.5");
    }

    #[test]
    fn real_without_fraction_has_no_point() {
        check(Object::Real(24.0), b"24");
    }

    #[test]
    fn hex_string_is_uppercase() {
        check(Object::HexString(vec![0xab, 0xc1, 0x23]), b"<ABC123>");
    }
}
