use crate::{
    pdf::ObjectStream,
    writer::{Encode, Writer},
};

use super::{END_STREAM, START_STREAM};

impl Encode for ObjectStream {
    fn encoded_len(&self) -> usize {
        self.header().encoded_len() + START_STREAM.len() + self.payload().len() + END_STREAM.len()
    }

    fn write_to(&self, writer: &mut dyn Writer) {
        log::trace!("write object stream, {} objects", self.objects().len());
        self.header().write_to(writer);
        writer.write(START_STREAM);
        writer.write(self.payload());
        writer.write(END_STREAM);
    }
}
