use crate::crypto::cipher_context::{CipherContext, ensure_aligned};
use crate::crypto::error::CipherError;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Multiple of the block size, so only the final short read can ever
/// be misaligned.
const CHUNK_SIZE: usize = 1024 * 1024;

impl CipherContext {
    /// Encrypts `input` into `output`, streaming in 1 MiB chunks on a
    /// blocking worker so the async caller is never stalled on disk.
    /// The file length must be a whole number of blocks.
    pub async fn encrypt_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<(), CipherError> {
        self.run_file_task(
            input.as_ref().to_path_buf(),
            output.as_ref().to_path_buf(),
            true,
        )
        .await
    }

    pub async fn decrypt_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<(), CipherError> {
        self.run_file_task(
            input.as_ref().to_path_buf(),
            output.as_ref().to_path_buf(),
            false,
        )
        .await
    }

    async fn run_file_task(
        &self,
        input: PathBuf,
        output: PathBuf,
        encrypt: bool,
    ) -> Result<(), CipherError> {
        let this = self.clone();
        tokio::task::spawn_blocking(move || this.process_file(&input, &output, encrypt))
            .await
            .map_err(|e| CipherError::Io(std::io::Error::other(e)))?
    }

    fn process_file(&self, input: &Path, output: &Path, encrypt: bool) -> Result<(), CipherError> {
        let mut reader = BufReader::new(File::open(input)?);
        let mut writer = BufWriter::new(File::create(output)?);

        let mut prev = self.chain_start();
        let mut buf = vec![0u8; CHUNK_SIZE];
        let mut filled = 0usize;

        loop {
            let n = reader.read(&mut buf[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;

            if filled == buf.len() {
                let processed = self.process_chunk(&buf, &mut prev, encrypt);
                writer.write_all(&processed)?;
                filled = 0;
            }
        }

        if filled > 0 {
            ensure_aligned(filled, self.block_size())?;
            let processed = self.process_chunk(&buf[..filled], &mut prev, encrypt);
            writer.write_all(&processed)?;
        }

        writer.flush()?;
        Ok(())
    }
}
