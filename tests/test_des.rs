#[cfg(test)]
mod tests {
    use des_cipher::Des;
    use des_cipher::crypto::des_key_expansion::generate_subkeys;
    use des_cipher::crypto::des_transformation::round_function;
    use hex_literal::hex;

    #[test]
    fn test_key_schedule_known_subkeys() {
        // First and last subkeys of the FIPS-46 worked example key.
        let subkeys = generate_subkeys(&hex!("13 34 57 79 9B BC DF F1"));
        assert_eq!(subkeys[0], 0x1B02_EFFC_7072);
        assert_eq!(subkeys[15], 0xCB3D_8B0E_17F5);
    }

    #[test]
    fn test_subkeys_fit_48_bits() {
        let subkeys = generate_subkeys(&hex!("FF FF FF FF FF FF FF FF"));
        assert!(subkeys.iter().all(|&k| k <= 0xFFFF_FFFF_FFFF));
    }

    #[test]
    fn test_parity_bits_are_ignored() {
        // Keys differing only in the parity bit of each byte produce
        // the same schedule, since PC-1 never selects those bits.
        let stripped = generate_subkeys(&hex!("12 34 56 78 9A BC DE F0"));
        let flipped = generate_subkeys(&hex!("13 35 57 79 9B BD DF F1"));
        assert_eq!(stripped, flipped);
    }

    #[test]
    fn test_round_function_known_answer() {
        // Round 1 of the worked example: F(R0, K1) = 234AA9BB.
        assert_eq!(round_function(0xF0AA_F0AA, 0x1B02_EFFC_7072), 0x234A_A9BB);
    }

    #[test]
    fn test_encrypt_block_known_answer() {
        let des = Des::new(&hex!("13 34 57 79 9B BC DF F1"));
        let ciphertext = des.encrypt_block(&hex!("01 23 45 67 89 AB CD EF"));
        assert_eq!(ciphertext, hex!("85 E8 13 54 0F 0A B4 05"));

        let decrypted = des.decrypt_block(&ciphertext);
        assert_eq!(decrypted, hex!("01 23 45 67 89 AB CD EF"));
    }

    #[test]
    fn test_block_roundtrip_random() {
        use rand::RngCore;
        let mut rng = rand::rng();

        for _ in 0..64 {
            let mut key = [0u8; 8];
            let mut block = [0u8; 8];
            rng.fill_bytes(&mut key);
            rng.fill_bytes(&mut block);

            let des = Des::new(&key);
            assert_eq!(des.decrypt_block(&des.encrypt_block(&block)), block);
        }
    }

    #[test]
    fn test_encrypt_block_deterministic() {
        let des = Des::new(b"8bytekey");
        let block = *b"deadbeef";
        assert_eq!(des.encrypt_block(&block), des.encrypt_block(&block));
        assert_eq!(des.decrypt_block(&block), des.decrypt_block(&block));
    }

    #[test]
    fn test_avalanche_on_plaintext_bit_flip() {
        let des = Des::new(&hex!("13 34 57 79 9B BC DF F1"));

        let base = hex!("01 23 45 67 89 AB CD EF");
        let mut flipped = base;
        flipped[0] ^= 0x80;

        let a = u64::from_be_bytes(des.encrypt_block(&base));
        let b = u64::from_be_bytes(des.encrypt_block(&flipped));

        let differing = (a ^ b).count_ones();
        assert!(
            (8..=56).contains(&differing),
            "expected a substantial fraction of output bits to change, got {differing}"
        );
    }

    #[test]
    fn test_avalanche_on_key_bit_flip() {
        let block = hex!("01 23 45 67 89 AB CD EF");

        let mut key = hex!("13 34 57 79 9B BC DF F1");
        let a = u64::from_be_bytes(Des::new(&key).encrypt_block(&block));
        key[3] ^= 0x40; // a non-parity bit
        let b = u64::from_be_bytes(Des::new(&key).encrypt_block(&block));

        let differing = (a ^ b).count_ones();
        assert!((8..=56).contains(&differing));
    }

    #[test]
    fn test_shared_across_threads() {
        use std::sync::Arc;

        let des = Arc::new(Des::new(b"threads!"));
        let block = *b"oneblock";
        let expected = des.encrypt_block(&block);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let des = Arc::clone(&des);
                std::thread::spawn(move || des.encrypt_block(&block))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
