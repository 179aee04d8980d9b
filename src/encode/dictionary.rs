use crate::{
    pdf::Dictionary,
    writer::{Encode, Writer},
};

impl Encode for Dictionary {
    fn encoded_len(&self) -> usize {
        // "<<\n" and ">>"
        let mut size = 5;

        // one delimiter between key and value, one newline after the value
        for (key, value) in self.iter() {
            size += key.encoded_len() + 1 + value.encoded_len() + 1;
        }

        size
    }

    fn write_to(&self, writer: &mut dyn Writer) {
        writer.write(b"<<\n");
        for (key, value) in self.iter() {
            key.write_to(writer);
            writer.write(b" ");
            value.write_to(writer);
            writer.write(b"\n");
        }
        writer.write(b">>");
    }
}
