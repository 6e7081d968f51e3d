use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use depot_core::{AppState, Effect, Msg, RecognizeCard};
use depot_engine::{
    CaptureDevice, ChatCompletionsClient, DirectoryCamera, EngineCommands, EngineEvent,
    EngineHandle, LocalCodeExtractor, PhotoStore, RecognitionError, RecognitionGateway,
    RecognitionSettings,
};
use depot_logging::{depot_info, depot_warn};

use super::persistence::PersistenceStore;

/// Executes the effects returned by `update`: engine commands for IO,
/// direct store writes for persistence.
pub struct EffectRunner {
    commands: EngineCommands,
    store: PersistenceStore,
}

impl EffectRunner {
    /// Wires the gateway, camera, and photo store into an engine and starts
    /// the event pump feeding `msg_tx`.
    pub fn new(
        msg_tx: mpsc::Sender<Msg>,
        store: PersistenceStore,
        settings: RecognitionSettings,
        camera_dir: PathBuf,
        state_dir: PathBuf,
    ) -> Result<Self, RecognitionError> {
        let local = LocalCodeExtractor::new(settings.default_area.clone());
        let client = ChatCompletionsClient::new(settings)?;
        let gateway = RecognitionGateway::new(Arc::new(client), local);
        let device: Arc<dyn CaptureDevice> = Arc::new(DirectoryCamera::new(camera_dir));
        let photos = PhotoStore::new(state_dir);

        let engine = EngineHandle::new(gateway, device, photos);
        let commands = engine.commands();
        spawn_event_loop(engine, msg_tx);

        Ok(Self { commands, store })
    }

    pub fn run(&self, state: &AppState, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RecognizeText { text } => {
                    depot_info!("RecognizeText text_len={}", text.len());
                    self.commands.recognize_text(text);
                }
                Effect::RecognizeImages { images } => {
                    depot_info!("RecognizeImages image_count={}", images.len());
                    self.commands.recognize_images(images);
                }
                Effect::AcquireCamera => self.commands.acquire_camera(),
                Effect::CaptureFrame => self.commands.capture_frame(),
                Effect::ReleaseCamera => self.commands.release_camera(),
                Effect::SavePending => self.store.save_pending(state.pending_records()),
                Effect::SaveHistory => self.store.save_history(state.history_records()),
            }
        }
    }
}

fn spawn_event_loop(engine: EngineHandle, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || loop {
        if let Some(event) = engine.try_recv() {
            if msg_tx.send(map_event(event)).is_err() {
                break;
            }
        } else {
            thread::sleep(Duration::from_millis(20));
        }
    });
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::RecognitionFinished { result } => match result {
            Ok(pairs) => Msg::RecognitionCompleted(
                pairs
                    .into_iter()
                    .map(|pair| RecognizeCard {
                        code: pair.code,
                        area: pair.area,
                    })
                    .collect(),
            ),
            Err(err) => {
                depot_warn!("Recognition failed: {}", err);
                Msg::RecognitionFailed(err.to_string())
            }
        },
        EngineEvent::CameraAcquired => Msg::CameraAcquired,
        EngineEvent::CameraFailed { error } => {
            depot_warn!("Camera acquisition failed: {}", error);
            Msg::CameraFailed(error.to_string())
        }
        EngineEvent::FrameCaptured { photo } => Msg::FrameCaptured { photo },
        EngineEvent::CaptureFailed { error } => {
            depot_warn!("Frame capture failed: {}", error);
            Msg::CaptureFailed(error.to_string())
        }
    }
}
