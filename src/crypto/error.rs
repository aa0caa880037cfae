use thiserror::Error;

#[derive(Debug, Error)]
pub enum CipherError {
    /// The chaining layer only accepts whole blocks; no padding scheme
    /// is applied on the caller's behalf.
    #[error("input length {len} is not a multiple of the {block}-byte block size")]
    BlockAlignment { len: usize, block: usize },

    #[error("IV length {len} does not match the {block}-byte block size")]
    IvLength { len: usize, block: usize },

    #[error("CBC mode requires an IV")]
    MissingIv,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
