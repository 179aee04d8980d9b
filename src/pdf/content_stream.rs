use std::fmt::Display;

use crate::{error::PpError, filter::flate_encode, writer::Encode};

use super::{Dictionary, Name, Object, Operator};

/// A content stream: an ordered list of graphics operators wrapped in a
/// stream whose header dictionary carries the payload length.
///
/// The payload (and with it `/Length` and `/Filter` in the header) is
/// recomputed whenever the operator list changes, so a size computation and a
/// later write always agree, including on the compressor output.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentStream {
    dict: Dictionary,
    operators: Vec<Operator>,
    compress: bool,
    payload: Vec<u8>,
}

impl ContentStream {
    /// Wrap `operators` in a stream headed by `dict`.
    ///
    /// `dict` is taken over and mutated to carry `/Length` (and `/Filter`
    /// when `compress` is set), overwriting any prior values.
    pub fn of(dict: Dictionary, operators: Vec<Operator>, compress: bool) -> Result<Self, PpError> {
        let mut stream = ContentStream {
            dict,
            operators,
            compress,
            payload: Vec::new(),
        };
        stream.refresh()?;
        Ok(stream)
    }

    /// Append operators to the end of the stream.
    pub fn push(&mut self, operators: impl IntoIterator<Item = Operator>) -> Result<(), PpError> {
        self.operators.extend(operators);
        self.refresh()
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    pub fn dict(&self) -> &Dictionary {
        &self.dict
    }

    pub(crate) fn payload(&self) -> &[u8] {
        &self.payload
    }

    fn refresh(&mut self) -> Result<(), PpError> {
        let mut body = Vec::new();
        for operator in &self.operators {
            operator.write_to(&mut body);
        }
        self.payload = if self.compress {
            flate_encode(&body)?
        } else {
            body
        };
        self.dict.insert(
            Name::from("Length"),
            Object::Integer(self.payload.len() as i32),
        );
        if self.compress {
            self.dict
                .insert(Name::from("Filter"), Object::Name(Name::from("FlateDecode")));
        }
        Ok(())
    }
}

impl Display for ContentStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\nstream\n", self.dict)?;
        for operator in &self.operators {
            writeln!(f, "{}", operator)?;
        }
        write!(f, "\nendstream")
    }
}
