#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User submitted free text for recognition.
    TextSubmitted(String),
    /// User submitted photographed labels (raw JPEG bytes per image).
    ImagesSubmitted(Vec<Vec<u8>>),
    /// Engine finished a recognition request with the staged cards.
    RecognitionCompleted(Vec<crate::RecognizeCard>),
    /// Engine reported a transport-level recognition failure.
    RecognitionFailed(String),
    /// User edited the code of a staged card.
    CardCodeEdited { index: usize, code: String },
    /// User changed the area of a staged card.
    CardAreaEdited { index: usize, area: String },
    /// User deleted a staged card.
    CardRemoved { index: usize },
    /// User added a blank staged card.
    CardAdded,
    /// User confirmed the staged cards for merge into the queue.
    RecognitionConfirmed,
    /// User dismissed the staged cards.
    RecognitionCancelled,
    /// User switched the displayed map.
    MapSelected(crate::MapView),
    /// Press on a list row, starting a potential drag.
    ItemPressed { key: String, x: f32 },
    /// Horizontal move while pressing a list row.
    ItemMoved { key: String, x: f32 },
    /// Release of a pressed list row.
    ItemReleased { key: String },
    /// Delete tap on a revealed pending row.
    PendingDeleteActivated { id: String },
    /// Delete tap on a revealed history row.
    HistoryDeleteActivated { key: String },
    /// User started a pickup for a pending record.
    PickupRequested { id: String },
    /// Engine acquired the capture device stream.
    CameraAcquired,
    /// Engine failed to acquire the capture device.
    CameraFailed(String),
    /// User retries device acquisition after a failure.
    CameraRetryRequested,
    /// User pressed the shutter.
    CaptureRequested,
    /// Engine delivered the captured frame reference.
    FrameCaptured { photo: String },
    /// Engine failed to read a frame.
    CaptureFailed(String),
    /// User discarded the captured photo to shoot again.
    RetakeRequested,
    /// User confirmed the pickup; carries the platform-formatted
    /// `YYYY-MM-DD HH:MM` timestamp.
    PickupConfirmed { pickup_time: String },
    /// User abandoned the pickup.
    PickupCancelled,
    /// Restore persisted queue and history at startup.
    StateRestored {
        pending: Vec<crate::PendingRecord>,
        history: Vec<crate::DeliveryRecord>,
    },
}
