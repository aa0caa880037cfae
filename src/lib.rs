pub mod crypto;

pub use crypto::cipher_context::CipherContext;
pub use crypto::cipher_traits::BlockCipher;
pub use crypto::cipher_types::CipherMode;
pub use crypto::des::{BLOCK_SIZE, Des, KEY_SIZE};
pub use crypto::error::CipherError;
