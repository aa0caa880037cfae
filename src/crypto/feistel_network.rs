use crate::crypto::des_key_expansion::NUM_ROUNDS;
use crate::crypto::des_transformation::round_function;

/// Runs the 16 Feistel rounds over an IP-permuted block, consuming the
/// subkeys in whatever order the iterator yields them. Encryption and
/// decryption share this loop; only the traversal order differs, which
/// is what makes the two paths exact inverses.
///
/// The returned value already has the final half-swap applied (R16 in
/// front of L16), ready for the final permutation.
fn apply_rounds(block: u64, subkeys: impl Iterator<Item = u64>) -> u64 {
    let mut left = (block >> 32) as u32;
    let mut right = block as u32;

    for subkey in subkeys {
        let new_right = left ^ round_function(right, subkey);
        left = right;
        right = new_right;
    }

    ((right as u64) << 32) | left as u64
}

pub fn encrypt_rounds(block: u64, subkeys: &[u64; NUM_ROUNDS]) -> u64 {
    apply_rounds(block, subkeys.iter().copied())
}

pub fn decrypt_rounds(block: u64, subkeys: &[u64; NUM_ROUNDS]) -> u64 {
    apply_rounds(block, subkeys.iter().rev().copied())
}
