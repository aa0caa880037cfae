use crate::crypto::cipher_context::{
    cbc_decrypt_chained, cbc_encrypt_chained, ecb_process, ensure_aligned,
};
use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::des_key_expansion::{NUM_ROUNDS, generate_subkeys};
use crate::crypto::des_tables::{FP, IP};
use crate::crypto::error::CipherError;
use crate::crypto::feistel_network::{decrypt_rounds, encrypt_rounds};
use crate::crypto::utils::permute;

pub const BLOCK_SIZE: usize = 8;
pub const KEY_SIZE: usize = 8;

/// DES block cipher with a precomputed 16-subkey schedule.
///
/// The schedule is derived once from the key and never mutated, so a
/// `Des` value can be shared across threads and reused for any number
/// of block operations. Any 8-byte key is accepted; the parity bits
/// are permuted like every other bit, never validated.
pub struct Des {
    subkeys: [u64; NUM_ROUNDS],
}

impl Des {
    pub fn new(key: &[u8; KEY_SIZE]) -> Self {
        Des {
            subkeys: generate_subkeys(key),
        }
    }

    /// Encrypts a single 64-bit block: IP, 16 rounds with subkeys in
    /// ascending order, half swap, FP.
    pub fn encrypt_block(&self, plaintext: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let permuted = permute(u64::from_be_bytes(*plaintext), 64, &IP);
        let swapped = encrypt_rounds(permuted, &self.subkeys);
        permute(swapped, 64, &FP).to_be_bytes()
    }

    /// Decrypts a single 64-bit block. Identical round structure with
    /// the subkeys consumed in descending order.
    pub fn decrypt_block(&self, ciphertext: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let permuted = permute(u64::from_be_bytes(*ciphertext), 64, &IP);
        let swapped = decrypt_rounds(permuted, &self.subkeys);
        permute(swapped, 64, &FP).to_be_bytes()
    }

    /// Encrypts every block of `input` independently.
    /// The length must be a multiple of [`BLOCK_SIZE`].
    pub fn ecb_encrypt(&self, input: &[u8]) -> Result<Vec<u8>, CipherError> {
        ensure_aligned(input.len(), BLOCK_SIZE)?;
        Ok(ecb_process(self, input, true))
    }

    pub fn ecb_decrypt(&self, input: &[u8]) -> Result<Vec<u8>, CipherError> {
        ensure_aligned(input.len(), BLOCK_SIZE)?;
        Ok(ecb_process(self, input, false))
    }

    /// CBC encryption: each plaintext block is XOR-ed with the previous
    /// ciphertext block (the IV for the first) before encryption.
    pub fn cbc_encrypt(&self, iv: &[u8; BLOCK_SIZE], input: &[u8]) -> Result<Vec<u8>, CipherError> {
        ensure_aligned(input.len(), BLOCK_SIZE)?;
        let mut prev = iv.to_vec();
        Ok(cbc_encrypt_chained(self, input, &mut prev))
    }

    /// CBC decryption: each decrypted block is XOR-ed with the previous
    /// ciphertext block (the IV for the first).
    pub fn cbc_decrypt(&self, iv: &[u8; BLOCK_SIZE], input: &[u8]) -> Result<Vec<u8>, CipherError> {
        ensure_aligned(input.len(), BLOCK_SIZE)?;
        let mut prev = iv.to_vec();
        Ok(cbc_decrypt_chained(self, input, &mut prev))
    }
}

impl BlockCipher for Des {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &[u8]) -> Vec<u8> {
        let block: &[u8; BLOCK_SIZE] = block.try_into().expect("DES block must be 8 bytes");
        Des::encrypt_block(self, block).to_vec()
    }

    fn decrypt_block(&self, block: &[u8]) -> Vec<u8> {
        let block: &[u8; BLOCK_SIZE] = block.try_into().expect("DES block must be 8 bytes");
        Des::decrypt_block(self, block).to_vec()
    }
}
