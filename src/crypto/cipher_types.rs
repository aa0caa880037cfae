/// Multi-block chaining mode. ECB processes blocks independently;
/// CBC chains each block into the next through an XOR with the
/// previous ciphertext block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMode {
    ECB,
    CBC,
}
