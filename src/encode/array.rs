use crate::{
    pdf::Array,
    writer::{Encode, Writer},
};

impl Encode for Array {
    fn encoded_len(&self) -> usize {
        // brackets plus the space after the opening one
        let mut size = 3;

        // every element is followed by one delimiter
        for item in self.iter() {
            size += item.encoded_len() + 1;
        }

        size
    }

    fn write_to(&self, writer: &mut dyn Writer) {
        writer.write(b"[ ");
        for item in self.iter() {
            item.write_to(writer);
            writer.write(b" ");
        }
        writer.write(b"]");
    }
}
