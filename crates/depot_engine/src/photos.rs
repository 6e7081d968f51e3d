//! Content-addressed storage for pickup proof photos.

use std::path::PathBuf;

use sha2::{Digest, Sha256};

use crate::persist::{AtomicFileWriter, PersistError};

/// Directory for proof photos inside the state directory.
pub const PHOTO_DIR: &str = "photos";

/// Deterministic photo filename: `pickup-{short_hash(frame)}.jpg`. The
/// same frame always lands on the same file.
pub fn photo_filename(frame: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(frame);
    let digest = hasher.finalize();
    let mut hex = String::with_capacity(8);
    for byte in digest.iter().take(4) {
        use std::fmt::Write;
        let _ = write!(&mut hex, "{byte:02x}");
    }
    format!("pickup-{hex}.jpg")
}

/// Writes captured frames under `{state_dir}/photos` and hands back the
/// relative reference stored on delivery records.
pub struct PhotoStore {
    writer: AtomicFileWriter,
}

impl PhotoStore {
    pub fn new(state_dir: PathBuf) -> Self {
        Self {
            writer: AtomicFileWriter::new(state_dir.join(PHOTO_DIR)),
        }
    }

    pub fn store(&self, frame: &[u8]) -> Result<String, PersistError> {
        let filename = photo_filename(frame);
        self.writer.write(&filename, frame)?;
        Ok(format!("{PHOTO_DIR}/{filename}"))
    }
}
