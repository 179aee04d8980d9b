use thiserror::Error;

#[derive(Debug, Error)]
pub enum PpError {
    /// A byte offset that does not fit the 10 digit cross-reference field.
    #[error("byte offset {0} does not fit the 10 digit cross-reference field")]
    OffsetTooLarge(u64),

    /// A generation number that does not fit the 5 digit cross-reference
    /// field.
    #[error("generation number {0} does not fit the 5 digit cross-reference field")]
    GenerationTooLarge(u32),

    /// A cross-reference entry was finished without a byte offset.
    #[error("cross-reference entry has no byte offset")]
    MissingOffset,

    /// I/O failure, including failures reported by the compressor.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
