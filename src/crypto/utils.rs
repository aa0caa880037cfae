use rand::RngCore;

/// Permutes the low `input_width` bits of `input` according to `table`.
///
/// Output bit `i`, counting from the most significant bit of the
/// `table.len()`-bit result, is the input bit named by `table[i]`,
/// 1-indexed from the most significant bit of the input. Entries may
/// repeat, which is how the expansion table E widens 32 bits to 48.
pub fn permute(input: u64, input_width: usize, table: &[usize]) -> u64 {
    debug_assert!(input_width <= 64);

    let mut output = 0u64;
    for &pos in table {
        debug_assert!(pos >= 1 && pos <= input_width, "table entry out of range");
        output = (output << 1) | ((input >> (input_width - pos)) & 1);
    }
    output
}

/// Circular left rotation of the low `width` bits of `value`.
/// The key schedule uses this on the 28-bit C and D halves.
pub fn rotate_left(value: u32, shift: u32, width: u32) -> u32 {
    debug_assert!(width <= 32 && shift >= 1 && shift <= width);

    let mask = if width == 32 { u32::MAX } else { (1u32 << width) - 1 };
    ((value << shift) | (value >> (width - shift))) & mask
}

/// 8 random bytes from the OS generator, suitable as a key or CBC IV.
pub fn random_block() -> [u8; 8] {
    let mut block = [0u8; 8];
    rand::rng().fill_bytes(&mut block);
    block
}
