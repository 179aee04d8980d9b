use crate::{
    pdf::{Entry, Subsection, Table},
    writer::{Encode, Writer},
};

// Mandated fixed entry width: 10 digit offset, 5 digit generation, one kind
// character, trailing space and newline.
const ENTRY_LEN: usize = 20;

impl Encode for Entry {
    fn encoded_len(&self) -> usize {
        ENTRY_LEN
    }

    fn write_to(&self, writer: &mut dyn Writer) {
        let kind = if self.is_in_use() { 'n' } else { 'f' };
        writer.write(format!("{:010} {:05} {} \n", self.offset(), self.generation(), kind).as_bytes());
    }
}

fn subsection_header(subsection: &Subsection) -> String {
    format!(
        "{} {}\n",
        subsection.first_object_number(),
        subsection.entries().len()
    )
}

impl Encode for Subsection {
    fn encoded_len(&self) -> usize {
        subsection_header(self).len() + ENTRY_LEN * self.entries().len()
    }

    fn write_to(&self, writer: &mut dyn Writer) {
        writer.write(subsection_header(self).as_bytes());
        for entry in self.entries() {
            entry.write_to(writer);
        }
    }
}

impl Encode for Table {
    fn encoded_len(&self) -> usize {
        // "xref\n" plus one separating newline per subsection
        5 + self
            .subsections()
            .iter()
            .map(|s| s.encoded_len() + 1)
            .sum::<usize>()
    }

    fn write_to(&self, writer: &mut dyn Writer) {
        log::trace!("write cross-reference table");
        writer.write(b"xref\n");
        for subsection in self.subsections() {
            subsection.write_to(writer);
            writer.write(b"\n");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(offset: u64, generation: u32, in_use: bool) -> Entry {
        Entry::builder()
            .offset(offset)
            .and_then(|b| b.generation(generation))
            .map(|b| b.in_use(in_use))
            .and_then(|b| b.build())
            .unwrap()
    }

    #[test]
    fn entry_is_always_twenty_bytes() {
        for entry in [
            entry(0, 65_535, false),
            entry(15, 0, true),
            entry(9_999_999_999, 99_999, true),
        ] {
            assert_eq!(entry.encoded_len(), 20);
            let mut out = Vec::new();
            entry.write_to(&mut out);
            assert_eq!(out.len(), 20);
        }
    }

    #[test]
    fn entry_rendering() {
        let mut out = Vec::new();
        entry(15, 0, true).write_to(&mut out);
        assert_eq!(&out[..], b"0000000015 00000 n \n");

        out.clear();
        entry(0, 65_535, false).write_to(&mut out);
        assert_eq!(&out[..], b"0000000000 65535 f \n");
    }

    #[test]
    fn subsection_rendering() {
        let mut subsection = Subsection::new(0);
        subsection
            .add_entry(entry(0, 65_535, false))
            .add_entry(entry(15, 0, true));

        let encoded_len = subsection.encoded_len();
        let mut out = Vec::new();
        subsection.write_to(&mut out);
        assert_eq!(
            &out[..],
            b"0 2\n0000000000 65535 f \n0000000015 00000 n \n"
        );
        assert_eq!(encoded_len, out.len());
    }

    #[test]
    fn table_with_a_gap_in_the_number_space() {
        let mut first = Subsection::new(0);
        first.add_entry(entry(0, 65_535, false));
        let mut second = Subsection::new(3);
        second.add_entry(entry(123, 0, true));
        let table = Table::from(vec![first, second]);

        let encoded_len = table.encoded_len();
        let mut out = Vec::new();
        table.write_to(&mut out);
        assert_eq!(
            &out[..],
            b"xref\n\
              0 1\n0000000000 65535 f \n\n\
              3 1\n0000000123 00000 n \n\n"
                .as_slice()
        );
        assert_eq!(encoded_len, out.len());
    }

    #[test]
    fn table_write_into_reports_consumed_bytes() {
        let mut subsection = Subsection::new(0);
        subsection.add_entry(entry(0, 65_535, false));
        let mut table = Table::new();
        table.add_subsection(subsection);

        let mut buffer = vec![b'#'; table.encoded_len() + 4];
        let written = table.write_into(&mut buffer, 2);
        assert_eq!(written, table.encoded_len());
        assert_eq!(&buffer[..2], b"##");
        assert_eq!(&buffer[2..7], b"xref\n");
        assert_eq!(&buffer[buffer.len() - 2..], b"##");
    }
}
