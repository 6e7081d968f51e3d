use std::sync::{mpsc, Arc};
use std::thread;

use crate::capture::CaptureDevice;
use crate::gateway::RecognitionGateway;
use crate::photos::PhotoStore;
use crate::types::{CaptureError, EngineEvent};

enum EngineCommand {
    RecognizeText { text: String },
    RecognizeImages { images: Vec<Vec<u8>> },
    AcquireCamera,
    CaptureFrame,
    ReleaseCamera,
}

/// Command/event bridge between the synchronous app loop and the async IO
/// pipeline. Commands run strictly one at a time on a dedicated runtime
/// thread, which also serializes recognition against capture-device
/// traffic.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

/// Cloneable command side of the bridge, for callers that do not consume
/// events themselves.
#[derive(Clone)]
pub struct EngineCommands {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(
        gateway: RecognitionGateway,
        device: Arc<dyn CaptureDevice>,
        photos: PhotoStore,
    ) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let event =
                    runtime.block_on(handle_command(&gateway, device.as_ref(), &photos, command));
                if let Some(event) = event {
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn commands(&self) -> EngineCommands {
        EngineCommands {
            cmd_tx: self.cmd_tx.clone(),
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

impl EngineCommands {
    pub fn recognize_text(&self, text: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::RecognizeText { text: text.into() });
    }

    pub fn recognize_images(&self, images: Vec<Vec<u8>>) {
        let _ = self.cmd_tx.send(EngineCommand::RecognizeImages { images });
    }

    pub fn acquire_camera(&self) {
        let _ = self.cmd_tx.send(EngineCommand::AcquireCamera);
    }

    pub fn capture_frame(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CaptureFrame);
    }

    pub fn release_camera(&self) {
        let _ = self.cmd_tx.send(EngineCommand::ReleaseCamera);
    }
}

async fn handle_command(
    gateway: &RecognitionGateway,
    device: &dyn CaptureDevice,
    photos: &PhotoStore,
    command: EngineCommand,
) -> Option<EngineEvent> {
    match command {
        EngineCommand::RecognizeText { text } => Some(EngineEvent::RecognitionFinished {
            result: gateway.recognize_text(&text).await,
        }),
        EngineCommand::RecognizeImages { images } => Some(EngineEvent::RecognitionFinished {
            result: gateway.recognize_images(&images).await,
        }),
        EngineCommand::AcquireCamera => Some(match device.acquire().await {
            Ok(()) => EngineEvent::CameraAcquired,
            Err(error) => EngineEvent::CameraFailed { error },
        }),
        EngineCommand::CaptureFrame => Some(match capture_frame(device, photos).await {
            Ok(photo) => EngineEvent::FrameCaptured { photo },
            Err(error) => EngineEvent::CaptureFailed { error },
        }),
        EngineCommand::ReleaseCamera => {
            device.release().await;
            None
        }
    }
}

async fn capture_frame(
    device: &dyn CaptureDevice,
    photos: &PhotoStore,
) -> Result<String, CaptureError> {
    let frame = device.frame().await?;
    photos
        .store(&frame)
        .map_err(|err| CaptureError::Frame(err.to_string()))
}
