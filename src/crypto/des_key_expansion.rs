use crate::crypto::des_tables::{PC1, PC2, SHIFTS};
use crate::crypto::utils::{permute, rotate_left};

pub const NUM_ROUNDS: usize = 16;

/// Derives the 16 round subkeys from an 8-byte key.
///
/// PC-1 drops the parity bits and splits the remaining 56 bits into the
/// 28-bit halves C and D. Each round rotates both halves left by that
/// round's shift count and PC-2 selects 48 bits from the joined halves.
/// Subkeys come back in round order 1..=16; decryption walks the same
/// array in reverse, so no inverse schedule is ever computed.
pub fn generate_subkeys(key: &[u8; 8]) -> [u64; NUM_ROUNDS] {
    let permuted = permute(u64::from_be_bytes(*key), 64, &PC1);

    let mut c = ((permuted >> 28) & 0x0FFF_FFFF) as u32;
    let mut d = (permuted & 0x0FFF_FFFF) as u32;

    let mut subkeys = [0u64; NUM_ROUNDS];
    for (round, &shift) in SHIFTS.iter().enumerate() {
        c = rotate_left(c, shift, 28);
        d = rotate_left(d, shift, 28);

        let cd = ((c as u64) << 28) | d as u64;
        subkeys[round] = permute(cd, 56, &PC2);
    }
    subkeys
}
