use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::cipher_types::CipherMode;
use crate::crypto::error::CipherError;
use rayon::prelude::*;
use std::sync::Arc;

/// Buffers at least this large are worth splitting across the rayon
/// pool in ECB mode; smaller ones stay on the calling thread.
const PARALLEL_THRESHOLD: usize = 64 * 1024;

pub(crate) fn ensure_aligned(len: usize, block_size: usize) -> Result<(), CipherError> {
    if len % block_size != 0 {
        return Err(CipherError::BlockAlignment {
            len,
            block: block_size,
        });
    }
    Ok(())
}

fn apply_block(cipher: &dyn BlockCipher, block: &[u8], encrypt: bool) -> Vec<u8> {
    if encrypt {
        cipher.encrypt_block(block)
    } else {
        cipher.decrypt_block(block)
    }
}

/// ECB over an aligned buffer. The blocks carry no cross-block
/// dependency, so large inputs are split across the rayon pool.
pub(crate) fn ecb_process(
    cipher: &(dyn BlockCipher + Send + Sync),
    data: &[u8],
    encrypt: bool,
) -> Vec<u8> {
    let block_size = cipher.block_size();

    if data.len() >= PARALLEL_THRESHOLD {
        data.par_chunks(block_size)
            .flat_map_iter(|chunk| apply_block(cipher, chunk, encrypt))
            .collect()
    } else {
        let mut out = Vec::with_capacity(data.len());
        for chunk in data.chunks(block_size) {
            out.extend(apply_block(cipher, chunk, encrypt));
        }
        out
    }
}

/// One CBC encryption pass over an aligned buffer. `prev` enters as the
/// IV (or the last ciphertext block of the preceding chunk) and leaves
/// as the last ciphertext block produced, so chunked callers can keep
/// the chain running across calls.
pub(crate) fn cbc_encrypt_chained(
    cipher: &dyn BlockCipher,
    data: &[u8],
    prev: &mut Vec<u8>,
) -> Vec<u8> {
    let block_size = cipher.block_size();
    let mut out = Vec::with_capacity(data.len());

    for chunk in data.chunks(block_size) {
        let xored: Vec<u8> = chunk.iter().zip(prev.iter()).map(|(p, c)| p ^ c).collect();
        let ciphertext = cipher.encrypt_block(&xored);
        prev.clear();
        prev.extend_from_slice(&ciphertext);
        out.extend_from_slice(&ciphertext);
    }
    out
}

/// One CBC decryption pass. `prev` tracks the previous *ciphertext*
/// block, not the recovered plaintext.
pub(crate) fn cbc_decrypt_chained(
    cipher: &dyn BlockCipher,
    data: &[u8],
    prev: &mut Vec<u8>,
) -> Vec<u8> {
    let block_size = cipher.block_size();
    let mut out = Vec::with_capacity(data.len());

    for chunk in data.chunks(block_size) {
        let decrypted = cipher.decrypt_block(chunk);
        out.extend(decrypted.iter().zip(prev.iter()).map(|(d, c)| d ^ c));
        prev.clear();
        prev.extend_from_slice(chunk);
    }
    out
}

/// A block cipher bound to a chaining mode and, for CBC, an IV.
///
/// Immutable after construction; the chain state of a CBC call lives
/// on that call's stack, so one context may serve concurrent
/// encryptions of different buffers without synchronization.
#[derive(Clone)]
pub struct CipherContext {
    algorithm: Arc<dyn BlockCipher + Send + Sync>,
    mode: CipherMode,
    iv: Option<Vec<u8>>,
}

impl std::fmt::Debug for CipherContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CipherContext")
            .field("mode", &self.mode)
            .field("iv", &self.iv)
            .finish_non_exhaustive()
    }
}

impl CipherContext {
    pub fn new(
        algorithm: Arc<dyn BlockCipher + Send + Sync>,
        mode: CipherMode,
        iv: Option<Vec<u8>>,
    ) -> Result<Self, CipherError> {
        if let Some(iv) = &iv {
            if iv.len() != algorithm.block_size() {
                return Err(CipherError::IvLength {
                    len: iv.len(),
                    block: algorithm.block_size(),
                });
            }
        }
        if mode == CipherMode::CBC && iv.is_none() {
            return Err(CipherError::MissingIv);
        }

        Ok(Self {
            algorithm,
            mode,
            iv,
        })
    }

    pub fn block_size(&self) -> usize {
        self.algorithm.block_size()
    }

    pub fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        ensure_aligned(data.len(), self.algorithm.block_size())?;
        let mut prev = self.chain_start();
        Ok(self.process_chunk(data, &mut prev, true))
    }

    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        ensure_aligned(data.len(), self.algorithm.block_size())?;
        let mut prev = self.chain_start();
        Ok(self.process_chunk(data, &mut prev, false))
    }

    /// Starting value for a fresh CBC chain. ECB never reads it.
    pub(crate) fn chain_start(&self) -> Vec<u8> {
        self.iv
            .clone()
            .unwrap_or_else(|| vec![0u8; self.algorithm.block_size()])
    }

    /// Processes one aligned chunk, threading `prev` through so file
    /// streaming can span a CBC chain over many reads.
    pub(crate) fn process_chunk(&self, data: &[u8], prev: &mut Vec<u8>, encrypt: bool) -> Vec<u8> {
        match self.mode {
            CipherMode::ECB => ecb_process(self.algorithm.as_ref(), data, encrypt),
            CipherMode::CBC => {
                if encrypt {
                    cbc_encrypt_chained(self.algorithm.as_ref(), data, prev)
                } else {
                    cbc_decrypt_chained(self.algorithm.as_ref(), data, prev)
                }
            }
        }
    }
}
