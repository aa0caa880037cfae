use des_cipher::crypto::utils::random_block;
use des_cipher::{CipherContext, CipherMode, Des};
use std::sync::Arc;

fn print_hex(label: &str, data: &[u8]) {
    print!("{label}: ");
    for byte in data {
        print!("{byte:02X} ");
    }
    println!();
}

#[tokio::main]
async fn main() -> Result<(), des_cipher::CipherError> {
    // Single-block round trip with the classic FIPS-46 example vector.
    let key = [0x13, 0x34, 0x57, 0x79, 0x9B, 0xBC, 0xDF, 0xF1];
    let plaintext = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];

    let des = Des::new(&key);
    let ciphertext = des.encrypt_block(&plaintext);
    let decrypted = des.decrypt_block(&ciphertext);

    println!("=== Single block ===");
    print_hex("key       ", &key);
    print_hex("plaintext ", &plaintext);
    print_hex("ciphertext", &ciphertext);
    print_hex("decrypted ", &decrypted);

    // ECB and CBC over a longer message. The crate applies no padding,
    // so the demo message is a whole number of blocks.
    let message = b"The message must fill whole blocks; no padding!!".to_vec();
    assert_eq!(message.len() % 8, 0);

    let ecb = CipherContext::new(Arc::new(Des::new(&key)), CipherMode::ECB, None)?;
    let encrypted = ecb.encrypt(&message)?;
    println!("\n=== ECB ===");
    print_hex("ciphertext", &encrypted);
    assert_eq!(ecb.decrypt(&encrypted)?, message);

    let iv = random_block();
    let cbc = CipherContext::new(
        Arc::new(Des::new(&key)),
        CipherMode::CBC,
        Some(iv.to_vec()),
    )?;
    let encrypted = cbc.encrypt(&message)?;
    println!("\n=== CBC ===");
    print_hex("iv        ", &iv);
    print_hex("ciphertext", &encrypted);
    assert_eq!(cbc.decrypt(&encrypted)?, message);

    println!("\nround trips OK");
    Ok(())
}
