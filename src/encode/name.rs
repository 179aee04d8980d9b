use crate::{
    pdf::Name,
    writer::{Encode, Writer},
};

fn is_delimiter(chr: u8) -> bool {
    matches!(
        chr,
        b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
    )
}

fn is_whitespace(chr: u8) -> bool {
    matches!(chr, b'\0' | b'\t' | b'\n' | b'\x0c' | b'\r' | b' ')
}

// Bytes that may appear in a name without a `#` escape.
fn is_regular(chr: u8) -> bool {
    (b'!'..=b'~').contains(&chr) && !is_delimiter(chr) && !is_whitespace(chr) && chr != b'#'
}

impl Encode for Name {
    fn encoded_len(&self) -> usize {
        self.iter().map(|&c| if is_regular(c) { 1 } else { 3 }).sum::<usize>() + 1
    }

    fn write_to(&self, writer: &mut dyn Writer) {
        let mut last_write = 0;
        writer.write(b"/");
        for (index, &chr) in self.iter().enumerate() {
            if !is_regular(chr) {
                writer.write(&self[last_write..index]);
                last_write = index + 1;
                writer.write(b"#");
                writer.write(hex::encode([chr]).as_bytes());
            }
        }
        writer.write(&self[last_write..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(name: &str, expected: &[u8]) {
        let name = Name::from(name);
        let encoded_len = name.encoded_len();
        let mut out = Vec::new();
        name.write_to(&mut out);
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
    fn regular_name() {
        check("F1", b"/F1");
        check("FlateDecode", b"/FlateDecode");
    }

    #[test]
    fn whitespace_in_the_middle() {
        check("Hello World!", b"/Hello#20World!");
    }

    #[test]
    fn delimiter_at_the_start() {
        check("(Hello", b"/#28Hello");
    }

    #[test]
    fn hash_is_escaped() {
        check("a#b", b"/a#23b");
    }

    #[test]
    fn only_irregular_bytes() {
        check("   ", b"/#20#20#20");
    }
}
