use chrono::{DateTime, Utc};

/// A textual string object.
///
/// The value is held as text and serialized as UTF-16BE code units, so the
/// byte-size computation has to look at both bytes of every code unit rather
/// than at the characters of the source.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PdfString(String);

impl PdfString {
    pub fn of(value: impl Into<String>) -> Self {
        PdfString(value.into())
    }

    /// Render a UTC timestamp in the fixed `D:YYYYMMDDHHMMSSZ` form.
    ///
    /// The result contains no escapable bytes.
    pub fn from_date(date: DateTime<Utc>) -> Self {
        PdfString(date.format("D:%Y%m%d%H%M%SZ").to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// The UTF-16 code units of the value, in order.
    pub fn code_units(&self) -> impl Iterator<Item = u16> + '_ {
        self.0.encode_utf16()
    }
}

impl From<&str> for PdfString {
    fn from(v: &str) -> Self {
        PdfString(v.into())
    }
}

impl std::fmt::Debug for PdfString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PdfString").field(&self.0).finish()
    }
}

impl std::fmt::Display for PdfString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn display_is_the_raw_literal() {
        assert_eq!(PdfString::of("foobar").to_string(), "(foobar)");
    }

    #[test]
    fn from_date_is_zero_padded() {
        let date = Utc.with_ymd_and_hms(2018, 6, 24, 1, 58, 37).unwrap();
        assert_eq!(PdfString::from_date(date).value(), "D:20180624015837Z");
    }

    #[test]
    fn clone_is_independent() {
        let original = PdfString::of("foobar");
        let copy = original.clone();
        drop(original);
        assert_eq!(copy.value(), "foobar");
    }
}
