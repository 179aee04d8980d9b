use crate::{
    pdf::ContentStream,
    writer::{Encode, Writer},
};

use super::{END_STREAM, START_STREAM};

impl Encode for ContentStream {
    fn encoded_len(&self) -> usize {
        self.dict().encoded_len() + START_STREAM.len() + self.payload().len() + END_STREAM.len()
    }

    fn write_to(&self, writer: &mut dyn Writer) {
        log::trace!("write content stream, {} operators", self.operators().len());
        self.dict().write_to(writer);
        writer.write(START_STREAM);
        writer.write(self.payload());
        writer.write(END_STREAM);
    }
}
