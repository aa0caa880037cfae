#[cfg(test)]
mod tests {
    use des_cipher::{CipherContext, CipherError, CipherMode, Des};
    use std::io::Write;
    use std::sync::Arc;
    use tempfile::NamedTempFile;

    fn ctx(mode: CipherMode, iv: Option<Vec<u8>>) -> CipherContext {
        CipherContext::new(Arc::new(Des::new(b"fileskey")), mode, iv).unwrap()
    }

    fn temp_file_with(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_file_roundtrip_cbc() {
        let plaintext: Vec<u8> = (0..4096u32).flat_map(|i| i.to_be_bytes()).collect();
        let input = temp_file_with(&plaintext);
        let encrypted = NamedTempFile::new().unwrap();
        let decrypted = NamedTempFile::new().unwrap();

        let ctx = ctx(CipherMode::CBC, Some(vec![7u8; 8]));
        ctx.encrypt_file(input.path(), encrypted.path())
            .await
            .unwrap();
        ctx.decrypt_file(encrypted.path(), decrypted.path())
            .await
            .unwrap();

        assert_ne!(std::fs::read(encrypted.path()).unwrap(), plaintext);
        assert_eq!(std::fs::read(decrypted.path()).unwrap(), plaintext);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_file_matches_in_memory_ecb() {
        let plaintext = vec![0x42u8; 1024];
        let input = temp_file_with(&plaintext);
        let output = NamedTempFile::new().unwrap();

        let ctx = ctx(CipherMode::ECB, None);
        ctx.encrypt_file(input.path(), output.path()).await.unwrap();

        assert_eq!(
            std::fs::read(output.path()).unwrap(),
            ctx.encrypt(&plaintext).unwrap()
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_unaligned_file_rejected() {
        let input = temp_file_with(&[0u8; 21]);
        let output = NamedTempFile::new().unwrap();

        let err = ctx(CipherMode::ECB, None)
            .encrypt_file(input.path(), output.path())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CipherError::BlockAlignment { len: 21, block: 8 }
        ));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_missing_input_file_is_io_error() {
        let output = NamedTempFile::new().unwrap();
        let err = ctx(CipherMode::ECB, None)
            .encrypt_file("/definitely/not/here.bin", output.path())
            .await
            .unwrap_err();
        assert!(matches!(err, CipherError::Io(_)));
    }
}
