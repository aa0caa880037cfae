use crate::crypto::des_tables::{E, P, S_BOXES};
use crate::crypto::utils::permute;

/// The DES round function F: the only nonlinear step in the cipher.
///
/// Expands the 32-bit half-block to 48 bits, mixes in the subkey, runs
/// each 6-bit group through its S-box (outer two bits select the row,
/// inner four the column) and permutes the resulting 32 bits with P.
pub fn round_function(r: u32, subkey: u64) -> u32 {
    // 1. Expansion E: 32 -> 48 bits
    let expanded = permute(r as u64, 32, &E);

    // 2. Subkey mixing
    let mixed = expanded ^ subkey;

    // 3-5. Eight 6-bit groups through the S-boxes, most significant first
    let mut substituted = 0u32;
    for (box_index, s_box) in S_BOXES.iter().enumerate() {
        let group = ((mixed >> (42 - 6 * box_index)) & 0x3F) as usize;
        let row = ((group & 0x20) >> 4) | (group & 0x01);
        let col = (group >> 1) & 0x0F;
        substituted = (substituted << 4) | s_box[row * 16 + col] as u32;
    }

    // 6. Permutation P
    permute(substituted as u64, 32, &P) as u32
}
