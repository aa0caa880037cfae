/// Seam between the chaining layer and a concrete block cipher.
///
/// `CipherContext` holds implementors as trait objects, so tests can
/// substitute a stub cipher when exercising the mode logic alone.
pub trait BlockCipher {
    fn block_size(&self) -> usize;
    fn encrypt_block(&self, block: &[u8]) -> Vec<u8>;
    fn decrypt_block(&self, block: &[u8]) -> Vec<u8>;
}
