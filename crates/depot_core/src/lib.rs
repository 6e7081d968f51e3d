//! Depot core: pure state machines and view-model helpers.
mod area;
mod effect;
mod gesture;
mod merge;
mod msg;
mod order;
mod pickup;
mod state;
mod update;
mod view_model;

pub use area::{
    classify_area, MapView, AREA_CAINIAO, AREA_OTHER, AREA_SHUNFENG, AREA_YUNDA_JD, EXPRESS_AREAS,
};
pub use effect::Effect;
pub use gesture::{GestureState, REVEAL_WIDTH_PX, SNAP_THRESHOLD_PX};
pub use merge::{merge_pending, MergeStats};
pub use msg::Msg;
pub use order::{area_weight, compare_codes, sort_for_view};
pub use pickup::{PickupSession, PickupStep};
pub use state::{AppState, DeliveryRecord, Notice, PendingRecord, RecognizeCard};
pub use update::update;
pub use view_model::{AppViewModel, HistoryRowView, PendingRowView, PickupView};
