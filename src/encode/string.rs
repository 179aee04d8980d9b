use crate::{
    pdf::PdfString,
    writer::{Encode, Writer},
};

// UTF-16BE byte order mark, written right after the opening parenthesis.
const BOM: &[u8] = &[0xfe, 0xff];

// Only the syntactically significant bytes are escaped. The format also
// allows escaping newlines and other control bytes inside a literal, but
// does not require it, so they pass through untouched.
fn needs_escape(byte: u8) -> bool {
    matches!(byte, b'(' | b')' | b'\\')
}

impl Encode for PdfString {
    fn encoded_len(&self) -> usize {
        // parentheses plus BOM
        let mut len = 4;
        for unit in self.code_units() {
            len += 2;
            // An escapable byte can hide in either half of a code unit, even
            // when no parenthesis or backslash is visible in the source text.
            for byte in unit.to_be_bytes() {
                if needs_escape(byte) {
                    len += 1;
                }
            }
        }
        len
    }

    fn write_to(&self, writer: &mut dyn Writer) {
        writer.write(b"(");
        writer.write(BOM);
        for unit in self.code_units() {
            for byte in unit.to_be_bytes() {
                if needs_escape(byte) {
                    writer.write(br"\");
                }
                writer.write(&[byte]);
            }
        }
        writer.write(b")");
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn check(value: &str, expected: &[u8]) {
        let string = PdfString::of(value);
        let encoded_len = string.encoded_len();
        let mut out = Vec::new();
        string.write_to(&mut out);
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
    fn plain_latin_text() {
        check(
            "foobar",
            b"(\xfe\xff\x00f\x00o\x00o\x00b\x00a\x00r)",
        );
        assert_eq!(PdfString::of("foobar").encoded_len(), 16);
    }

    #[test]
    fn escapes_parens_and_backslash() {
        // 11 code units, 4 of them escapable low bytes
        assert_eq!(PdfString::of(" (foo(bar))").encoded_len(), 30);
        check(
            r"a\b",
            b"(\xfe\xff\x00a\x00\\\\\x00b)",
        );
    }

    #[test]
    fn escapes_bytes_inside_non_latin_units() {
        // U+2829 encodes as 0x28 0x29; both halves need a backslash even
        // though the source contains no parenthesis.
        check("\u{2829}", b"(\xfe\xff\\\x28\\\x29)");
        assert_eq!(PdfString::of("\u{2829}").encoded_len(), 8);
    }

    #[test]
    fn newlines_pass_through_unescaped() {
        check("a\nb", b"(\xfe\xff\x00a\x00\n\x00b)");
    }

    #[test]
    fn surrogate_pairs_count_as_two_units() {
        // U+1F600 is one char but two code units
        let string = PdfString::of("\u{1f600}");
        let mut out = Vec::new();
        string.write_to(&mut out);
        assert_eq!(string.encoded_len(), out.len());
        assert_eq!(out.len(), 2 * 2 + 4);
    }

    #[test]
    fn date_strings_have_no_escapes() {
        let date = chrono::Utc.with_ymd_and_hms(2018, 6, 24, 1, 58, 37).unwrap();
        let string = PdfString::from_date(date);
        // "D:20180624015837Z" as UTF-16BE
        let mut expected = vec![b'(', 0xfe, 0xff];
        for byte in "D:20180624015837Z".bytes() {
            expected.push(0);
            expected.push(byte);
        }
        expected.push(b')');
        let mut out = Vec::new();
        string.write_to(&mut out);
        assert_eq!(out, expected);
        assert_eq!(string.encoded_len(), 2 * 17 + 4);
        assert_eq!(string.encoded_len(), out.len());
    }
}
