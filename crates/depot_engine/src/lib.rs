//! Depot engine: IO pipeline and effect execution.
mod capture;
mod engine;
mod gateway;
mod local;
mod pattern;
mod persist;
mod photos;
mod recognize;
mod types;

pub use capture::{CaptureDevice, DirectoryCamera};
pub use engine::{EngineCommands, EngineHandle};
pub use gateway::RecognitionGateway;
pub use local::LocalCodeExtractor;
pub use pattern::extract_pairs;
pub use persist::{ensure_state_dir, AtomicFileWriter, PersistError};
pub use photos::{photo_filename, PhotoStore, PHOTO_DIR};
pub use recognize::{
    ChatCompletionsClient, RecognitionService, RecognitionSettings, SYSTEM_PROMPT,
};
pub use types::{CaptureError, EngineEvent, RecognitionError, RecognizedPair};
