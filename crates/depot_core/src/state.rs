//! Application state: records, staging, and the dirty-transition flag.

use std::collections::HashMap;

use crate::area::MapView;
use crate::gesture::GestureState;
use crate::merge::MergeStats;
use crate::order;
use crate::pickup::PickupSession;
use crate::view_model::{AppViewModel, HistoryRowView, PendingRowView, PickupView};

/// One parcel awaiting pickup. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRecord {
    /// Pickup code, unique across the queue.
    pub id: String,
    /// Area string the parcel was filed under.
    pub location: String,
}

/// One completed pickup with photographic proof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRecord {
    pub id: String,
    pub location: String,
    /// Local time of the confirm action, rendered `YYYY-MM-DD HH:MM`.
    pub pickup_time: String,
    /// Relative path of the proof photo in the photo store.
    pub photo: String,
}

impl DeliveryRecord {
    /// List identity. Two pickups of one code within the same rendered
    /// minute collapse to one key; known limitation.
    pub fn key(&self) -> String {
        format!("{}|{}", self.id, self.pickup_time)
    }
}

/// A recognized `{code, area}` pair staged for review. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizeCard {
    pub code: String,
    pub area: String,
}

/// Transient user-visible notices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Zero pairs after all applicable fallbacks; check input or image
    /// clarity.
    NotRecognized,
    /// The remote recognition call failed at transport level.
    RecognitionFailed(String),
    /// Reading a frame from the capture device failed.
    CaptureFailed(String),
    /// A pickup was recorded for this code.
    PickupComplete { id: String },
}

/// The single application state fed through the `update` loop.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub(crate) pending: Vec<PendingRecord>,
    pub(crate) history: Vec<DeliveryRecord>,
    pub(crate) selected_map: MapView,
    pub(crate) cards: Option<Vec<RecognizeCard>>,
    pub(crate) recognition_busy: bool,
    pub(crate) pickup: Option<PickupSession>,
    pub(crate) gestures: HashMap<String, GestureState>,
    pub(crate) notice: Option<Notice>,
    pub(crate) last_merge: Option<MergeStats>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pending queue in insertion order, for persistence.
    pub fn pending_records(&self) -> &[PendingRecord] {
        &self.pending
    }

    /// Delivery history in completion order, for persistence.
    pub fn history_records(&self) -> &[DeliveryRecord] {
        &self.history
    }

    /// True while an engine response is the only thing that can advance the
    /// state: an outstanding recognition call, a pending device acquisition,
    /// or an in-flight frame read.
    pub fn awaiting_engine(&self) -> bool {
        self.recognition_busy
            || self
                .pickup
                .as_ref()
                .is_some_and(PickupSession::awaiting_device)
    }

    /// Whether `key` names a live pending record or history entry.
    pub(crate) fn item_key_exists(&self, key: &str) -> bool {
        self.pending.iter().any(|record| record.id == key)
            || self.history.iter().any(|record| record.key() == key)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns and clears the dirty flag; callers re-render only on `true`.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn gesture_offset(&self, key: &str) -> (f32, bool) {
        match self.gestures.get(key) {
            Some(gesture) => (gesture.offset(), gesture.is_open()),
            None => (0.0, false),
        }
    }

    /// Projects the state into the display model. Ordering is recomputed on
    /// every call and never cached.
    pub fn view(&self) -> AppViewModel {
        let mut ordered = self.pending.clone();
        order::sort_for_view(&mut ordered, self.selected_map);
        let pending = ordered
            .into_iter()
            .map(|record| {
                let (offset_px, delete_revealed) = self.gesture_offset(&record.id);
                PendingRowView {
                    id: record.id,
                    location: record.location,
                    offset_px,
                    delete_revealed,
                }
            })
            .collect();

        let history = self
            .history
            .iter()
            .map(|record| {
                let key = record.key();
                let (offset_px, delete_revealed) = self.gesture_offset(&key);
                HistoryRowView {
                    key,
                    id: record.id.clone(),
                    location: record.location.clone(),
                    pickup_time: record.pickup_time.clone(),
                    photo: record.photo.clone(),
                    offset_px,
                    delete_revealed,
                }
            })
            .collect();

        AppViewModel {
            map: self.selected_map,
            pending,
            history,
            cards: self.cards.clone(),
            recognition_busy: self.recognition_busy,
            pickup: self.pickup.as_ref().map(|session| PickupView {
                id: session.record().id.clone(),
                location: session.record().location.clone(),
                step: session.step(),
                camera_ready: session.camera_ready(),
                camera_error: session.camera_error().map(ToOwned::to_owned),
                photo: session.photo().map(ToOwned::to_owned),
            }),
            notice: self.notice.clone(),
            last_merge: self.last_merge,
        }
    }
}
