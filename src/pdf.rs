use std::fmt::Display;

pub use self::{
    array::Array,
    content_stream::ContentStream,
    context::Context,
    dictionary::Dictionary,
    document::Document,
    indirect::{IndirectObject, Reference},
    name::Name,
    object_stream::ObjectStream,
    operator::Operator,
    string::PdfString,
    xref::{Entry, EntryBuilder, Subsection, Table},
};

mod array;
mod content_stream;
mod context;
mod dictionary;
mod document;
mod indirect;
mod name;
mod object_stream;
pub mod operator;
mod string;
mod xref;

/// A serializable PDF object.
///
/// The variant set is closed; every operation of the byte-size protocol is a
/// single match over it.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    String(PdfString),
    HexString(Vec<u8>),
    Integer(i32),
    Real(f32),
    Bool(bool),
    Name(Name),
    Array(Array),
    Dictionary(Dictionary),
    Null,
    Reference(Reference),
    ContentStream(ContentStream),
    ObjectStream(ObjectStream),
}

impl Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Object::String(obj) => obj.fmt(f),
            Object::HexString(bytes) => write!(f, "<{}>", hex::encode_upper(bytes)),
            Object::Integer(obj) => obj.fmt(f),
            Object::Real(obj) => obj.fmt(f),
            Object::Bool(obj) => obj.fmt(f),
            Object::Name(obj) => obj.fmt(f),
            Object::Array(obj) => obj.fmt(f),
            Object::Dictionary(obj) => obj.fmt(f),
            Object::Null => write!(f, "null"),
            Object::Reference(obj) => obj.fmt(f),
            Object::ContentStream(obj) => obj.fmt(f),
            Object::ObjectStream(obj) => obj.fmt(f),
        }
    }
}

impl From<bool> for Object {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Object {
    fn from(v: i32) -> Self {
        Self::Integer(v)
    }
}

impl From<f32> for Object {
    fn from(v: f32) -> Self {
        Self::Real(v)
    }
}

impl From<PdfString> for Object {
    fn from(v: PdfString) -> Self {
        Self::String(v)
    }
}

impl From<Name> for Object {
    fn from(n: Name) -> Self {
        Self::Name(n)
    }
}

impl From<Array> for Object {
    fn from(a: Array) -> Self {
        Self::Array(a)
    }
}

impl From<Vec<Object>> for Object {
    fn from(a: Vec<Object>) -> Self {
        Self::Array(a.into())
    }
}

impl From<Dictionary> for Object {
    fn from(d: Dictionary) -> Self {
        Self::Dictionary(d)
    }
}

impl From<Reference> for Object {
    fn from(r: Reference) -> Self {
        Self::Reference(r)
    }
}

impl From<ContentStream> for Object {
    fn from(s: ContentStream) -> Self {
        Self::ContentStream(s)
    }
}

impl From<ObjectStream> for Object {
    fn from(s: ObjectStream) -> Self {
        Self::ObjectStream(s)
    }
}
