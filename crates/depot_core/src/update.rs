use crate::area::AREA_CAINIAO;
use crate::gesture::GestureState;
use crate::merge;
use crate::pickup::{PickupSession, PickupStep};
use crate::state::Notice;
use crate::{AppState, Effect, Msg, RecognizeCard};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TextSubmitted(raw) => {
            let text = raw.trim().to_string();
            // The busy flag serializes recognition sessions; a second
            // submission while one is outstanding is dropped.
            if text.is_empty() || state.recognition_busy {
                return (state, Vec::new());
            }
            state.recognition_busy = true;
            state.notice = None;
            state.mark_dirty();
            vec![Effect::RecognizeText { text }]
        }
        Msg::ImagesSubmitted(images) => {
            if images.is_empty() || state.recognition_busy {
                return (state, Vec::new());
            }
            state.recognition_busy = true;
            state.notice = None;
            state.mark_dirty();
            vec![Effect::RecognizeImages { images }]
        }
        Msg::RecognitionCompleted(cards) => {
            state.recognition_busy = false;
            if cards.is_empty() {
                state.notice = Some(Notice::NotRecognized);
            } else {
                state.cards = Some(cards);
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::RecognitionFailed(message) => {
            state.recognition_busy = false;
            state.notice = Some(Notice::RecognitionFailed(message));
            state.mark_dirty();
            Vec::new()
        }
        Msg::CardCodeEdited { index, code } => {
            if let Some(card) = staged_card(&mut state, index) {
                card.code = code;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CardAreaEdited { index, area } => {
            if let Some(card) = staged_card(&mut state, index) {
                card.area = area;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CardRemoved { index } => {
            if let Some(cards) = state.cards.as_mut() {
                if index < cards.len() {
                    cards.remove(index);
                    state.mark_dirty();
                }
            }
            Vec::new()
        }
        Msg::CardAdded => {
            if let Some(cards) = state.cards.as_mut() {
                cards.push(RecognizeCard {
                    code: String::new(),
                    area: AREA_CAINIAO.to_string(),
                });
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::RecognitionConfirmed => match state.cards.take() {
            Some(cards) => {
                let stats = merge::merge_pending(&mut state.pending, cards);
                state.last_merge = Some(stats);
                state.mark_dirty();
                vec![Effect::SavePending]
            }
            None => Vec::new(),
        },
        Msg::RecognitionCancelled => {
            if state.cards.take().is_some() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::MapSelected(map) => {
            if state.selected_map != map {
                state.selected_map = map;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ItemPressed { key, x } => {
            if state.item_key_exists(&key) {
                state.gestures.entry(key).or_default().press(x);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ItemMoved { key, x } => {
            if let Some(gesture) = state.gestures.get_mut(&key) {
                gesture.drag(x);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ItemReleased { key } => {
            if let Some(gesture) = state.gestures.get_mut(&key) {
                gesture.release();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::PendingDeleteActivated { id } => {
            let revealed = state
                .gestures
                .get(&id)
                .is_some_and(GestureState::is_open);
            if !revealed {
                return (state, Vec::new());
            }
            state.pending.retain(|record| record.id != id);
            state.gestures.remove(&id);
            state.mark_dirty();
            vec![Effect::SavePending]
        }
        Msg::HistoryDeleteActivated { key } => {
            let revealed = state
                .gestures
                .get(&key)
                .is_some_and(GestureState::is_open);
            if !revealed {
                return (state, Vec::new());
            }
            state.history.retain(|record| record.key() != key);
            state.gestures.remove(&key);
            state.mark_dirty();
            vec![Effect::SaveHistory]
        }
        Msg::PickupRequested { id } => {
            // The device is exclusively held; the trigger is dead while a
            // session is active.
            if state.pickup.is_some() {
                return (state, Vec::new());
            }
            match state.pending.iter().find(|record| record.id == id) {
                Some(record) => {
                    state.pickup = Some(PickupSession::new(record.clone()));
                    state.mark_dirty();
                    vec![Effect::AcquireCamera]
                }
                None => Vec::new(),
            }
        }
        Msg::CameraAcquired => {
            if let Some(session) = state.pickup.as_mut() {
                session.camera_acquired();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CameraFailed(message) => {
            if let Some(session) = state.pickup.as_mut() {
                session.camera_failed(message);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CameraRetryRequested => {
            let retryable = state.pickup.as_ref().is_some_and(|session| {
                session.step() == PickupStep::CameraActive
                    && !session.camera_ready()
                    && session.camera_error().is_some()
            });
            if retryable {
                state.mark_dirty();
                vec![Effect::AcquireCamera]
            } else {
                Vec::new()
            }
        }
        Msg::CaptureRequested => {
            let armed = state
                .pickup
                .as_mut()
                .is_some_and(PickupSession::begin_capture);
            if armed {
                state.mark_dirty();
                vec![Effect::CaptureFrame]
            } else {
                Vec::new()
            }
        }
        Msg::FrameCaptured { photo } => {
            if let Some(session) = state.pickup.as_mut() {
                session.photo_captured(photo);
                state.mark_dirty();
            }
            // Entering review leaves the live view behind; the stream is
            // released even if the session vanished while the frame was in
            // flight.
            vec![Effect::ReleaseCamera]
        }
        Msg::CaptureFailed(message) => {
            if let Some(session) = state.pickup.as_mut() {
                session.capture_failed();
                state.notice = Some(Notice::CaptureFailed(message));
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::RetakeRequested => {
            let in_review = state
                .pickup
                .as_ref()
                .is_some_and(|session| session.step() == PickupStep::PhotoCaptured);
            if !in_review {
                return (state, Vec::new());
            }
            if let Some(session) = state.pickup.as_mut() {
                session.retake();
            }
            state.mark_dirty();
            vec![Effect::AcquireCamera]
        }
        Msg::PickupConfirmed { pickup_time } => {
            let record = state
                .pickup
                .as_ref()
                .and_then(|session| session.confirm(pickup_time));
            match record {
                Some(record) => {
                    state.pickup = None;
                    state.pending.retain(|pending| pending.id != record.id);
                    state.gestures.remove(&record.id);
                    state.notice = Some(Notice::PickupComplete {
                        id: record.id.clone(),
                    });
                    state.history.push(record);
                    state.mark_dirty();
                    vec![Effect::ReleaseCamera, Effect::SavePending, Effect::SaveHistory]
                }
                None => Vec::new(),
            }
        }
        Msg::PickupCancelled => {
            if state.pickup.take().is_some() {
                state.mark_dirty();
                vec![Effect::ReleaseCamera]
            } else {
                Vec::new()
            }
        }
        Msg::StateRestored { pending, history } => {
            state.pending = pending;
            state.history = history;
            state.gestures.clear();
            state.mark_dirty();
            Vec::new()
        }
    };

    (state, effects)
}

fn staged_card(state: &mut AppState, index: usize) -> Option<&mut RecognizeCard> {
    state.cards.as_mut().and_then(|cards| cards.get_mut(index))
}
