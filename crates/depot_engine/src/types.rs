use thiserror::Error;

/// One recognized `{code, area}` pair, in response order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedPair {
    pub code: String,
    pub area: String,
}

/// Recognition pipeline failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecognitionError {
    /// The remote call failed at transport level: connection error, timeout,
    /// or a non-success HTTP status. Never triggers the local fallback.
    #[error("recognition transport failure: {message}")]
    Transport {
        status: Option<u16>,
        message: String,
    },
}

/// Capture device failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    /// Device permission or availability failure; non-fatal, user may retry.
    #[error("capture device unavailable: {0}")]
    Access(String),
    /// Reading or storing a frame failed.
    #[error("frame capture failed: {0}")]
    Frame(String),
}

/// Events reported back to the app loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// A recognition request finished, successfully or not.
    RecognitionFinished {
        result: Result<Vec<RecognizedPair>, RecognitionError>,
    },
    /// The capture device stream is acquired and ready.
    CameraAcquired,
    /// Acquiring the capture device failed.
    CameraFailed { error: CaptureError },
    /// A frame was captured and stored; carries the photo reference.
    FrameCaptured { photo: String },
    /// Reading or storing a frame failed.
    CaptureFailed { error: CaptureError },
}
