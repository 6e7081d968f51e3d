use crate::merge::MergeStats;
use crate::pickup::PickupStep;
use crate::state::{Notice, RecognizeCard};
use crate::MapView;

/// Display projection of the whole state, rebuilt per dirty transition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub map: MapView,
    /// Pending queue in display order.
    pub pending: Vec<PendingRowView>,
    pub history: Vec<HistoryRowView>,
    /// Staged recognition cards while the review modal is open.
    pub cards: Option<Vec<RecognizeCard>>,
    pub recognition_busy: bool,
    pub pickup: Option<PickupView>,
    pub notice: Option<Notice>,
    pub last_merge: Option<MergeStats>,
}

/// One pending row with its reveal-to-delete drag offset.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRowView {
    pub id: String,
    pub location: String,
    pub offset_px: f32,
    pub delete_revealed: bool,
}

/// One history row; `key` is the composite delete identity.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRowView {
    pub key: String,
    pub id: String,
    pub location: String,
    pub pickup_time: String,
    pub photo: String,
    pub offset_px: f32,
    pub delete_revealed: bool,
}

/// The active pickup modal.
#[derive(Debug, Clone, PartialEq)]
pub struct PickupView {
    pub id: String,
    pub location: String,
    pub step: PickupStep,
    pub camera_ready: bool,
    pub camera_error: Option<String>,
    pub photo: Option<String>,
}
