//! Capture device contract and the directory-backed stand-in.

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use crate::types::CaptureError;

/// An exclusively held camera stream. Acquisition can fail (permission
/// denial); release of a stream that is not held is a no-op.
#[async_trait]
pub trait CaptureDevice: Send + Sync {
    async fn acquire(&self) -> Result<(), CaptureError>;
    /// Reads the current frame as JPEG bytes. Requires an acquired stream.
    async fn frame(&self) -> Result<Bytes, CaptureError>;
    async fn release(&self);
}

/// Serves JPEG files from a directory in round-robin order, standing in
/// for camera hardware where none is attached.
pub struct DirectoryCamera {
    dir: PathBuf,
    inner: Mutex<DirectoryCameraState>,
}

#[derive(Default)]
struct DirectoryCameraState {
    held: bool,
    frames: Vec<PathBuf>,
    cursor: usize,
}

impl DirectoryCamera {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            inner: Mutex::new(DirectoryCameraState::default()),
        }
    }
}

#[async_trait]
impl CaptureDevice for DirectoryCamera {
    async fn acquire(&self) -> Result<(), CaptureError> {
        let mut frames: Vec<PathBuf> = std::fs::read_dir(&self.dir)
            .map_err(|err| CaptureError::Access(format!("{}: {err}", self.dir.display())))?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension().is_some_and(|ext| {
                    ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg")
                })
            })
            .collect();
        frames.sort();
        if frames.is_empty() {
            return Err(CaptureError::Access(format!(
                "no frames available in {}",
                self.dir.display()
            )));
        }

        let mut inner = self.inner.lock().expect("camera state lock");
        inner.held = true;
        inner.frames = frames;
        inner.cursor = 0;
        Ok(())
    }

    async fn frame(&self) -> Result<Bytes, CaptureError> {
        let path = {
            let mut inner = self.inner.lock().expect("camera state lock");
            if !inner.held {
                return Err(CaptureError::Access("stream not acquired".to_string()));
            }
            let index = inner.cursor % inner.frames.len();
            inner.cursor += 1;
            inner.frames[index].clone()
        };
        let bytes = std::fs::read(&path)
            .map_err(|err| CaptureError::Frame(format!("{}: {err}", path.display())))?;
        Ok(Bytes::from(bytes))
    }

    async fn release(&self) {
        self.inner.lock().expect("camera state lock").held = false;
    }
}
