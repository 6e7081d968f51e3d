#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Run the remote-first text recognition pipeline.
    RecognizeText { text: String },
    /// Run the remote-only image recognition pipeline, one sequential call
    /// per image.
    RecognizeImages { images: Vec<Vec<u8>> },
    /// Acquire the exclusive capture device stream.
    AcquireCamera,
    /// Read one frame from the acquired stream.
    CaptureFrame,
    /// Release the capture device stream; a no-op when not held.
    ReleaseCamera,
    /// Rewrite the persisted pending queue.
    SavePending,
    /// Rewrite the persisted delivery history.
    SaveHistory,
}
