use crate::{
    pdf::Operator,
    writer::{Encode, Writer},
};

impl Encode for Operator {
    fn encoded_len(&self) -> usize {
        let operands: usize = self.operands().iter().map(|o| o.encoded_len() + 1).sum();
        operands + self.name().len() + 1
    }

    fn write_to(&self, writer: &mut dyn Writer) {
        for operand in self.operands() {
            operand.write_to(writer);
            writer.write(b" ");
        }
        writer.write(self.name().as_bytes());
        writer.write(b"\n");
    }
}
