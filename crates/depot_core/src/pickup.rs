//! Photo-capture workflow turning a pending record into a delivery record.

use crate::state::{DeliveryRecord, PendingRecord};

/// Visible step of an active pickup session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupStep {
    /// Live camera view; waiting for the operator to shoot.
    CameraActive,
    /// A frame has been captured and is shown for review.
    PhotoCaptured,
}

/// One in-flight pickup. Confirm emits the delivery record and the session
/// is dropped; cancel just drops it. The caller owns queue and history
/// mutation and must release the capture device on every exit path.
#[derive(Debug, Clone, PartialEq)]
pub struct PickupSession {
    record: PendingRecord,
    step: PickupStep,
    camera_ready: bool,
    camera_error: Option<String>,
    capture_in_flight: bool,
    photo: Option<String>,
}

impl PickupSession {
    /// Opens a session for `record` with the camera not yet acquired.
    pub fn new(record: PendingRecord) -> Self {
        Self {
            record,
            step: PickupStep::CameraActive,
            camera_ready: false,
            camera_error: None,
            capture_in_flight: false,
            photo: None,
        }
    }

    /// The pending record being picked up.
    pub fn record(&self) -> &PendingRecord {
        &self.record
    }

    pub fn step(&self) -> PickupStep {
        self.step
    }

    pub fn camera_ready(&self) -> bool {
        self.camera_ready
    }

    /// Last device acquisition error, if any.
    pub fn camera_error(&self) -> Option<&str> {
        self.camera_error.as_deref()
    }

    /// The captured frame reference while under review.
    pub fn photo(&self) -> Option<&str> {
        self.photo.as_deref()
    }

    pub fn camera_acquired(&mut self) {
        self.camera_ready = true;
        self.camera_error = None;
    }

    /// Device acquisition failed; capture stays disabled until the user
    /// retries the acquisition.
    pub fn camera_failed(&mut self, message: String) {
        self.camera_ready = false;
        self.camera_error = Some(message);
    }

    /// Arms one frame read. Returns `false` (a no-op) unless the camera view
    /// is live, the device is ready, and no read is already in flight.
    pub fn begin_capture(&mut self) -> bool {
        if self.step != PickupStep::CameraActive || !self.camera_ready || self.capture_in_flight {
            return false;
        }
        self.capture_in_flight = true;
        true
    }

    /// The in-flight frame read failed; the live view stays up.
    pub fn capture_failed(&mut self) {
        self.capture_in_flight = false;
    }

    /// Stores the captured frame and moves to review. The device must be
    /// released by the caller once this returns.
    pub fn photo_captured(&mut self, photo: String) {
        if self.step != PickupStep::CameraActive {
            return;
        }
        self.capture_in_flight = false;
        self.camera_ready = false;
        self.photo = Some(photo);
        self.step = PickupStep::PhotoCaptured;
    }

    /// Discards the captured frame and returns to the live view. The caller
    /// must re-acquire the device.
    pub fn retake(&mut self) {
        if self.step != PickupStep::PhotoCaptured {
            return;
        }
        self.photo = None;
        self.camera_ready = false;
        self.step = PickupStep::CameraActive;
    }

    /// True while the session waits on the engine for the device or a frame.
    pub fn awaiting_device(&self) -> bool {
        self.capture_in_flight
            || (self.step == PickupStep::CameraActive
                && !self.camera_ready
                && self.camera_error.is_none())
    }

    /// Builds the delivery record stamped with the supplied
    /// `YYYY-MM-DD HH:MM` time. `None` unless a photo is under review.
    pub fn confirm(&self, pickup_time: String) -> Option<DeliveryRecord> {
        if self.step != PickupStep::PhotoCaptured {
            return None;
        }
        let photo = self.photo.clone()?;
        Some(DeliveryRecord {
            id: self.record.id.clone(),
            location: self.record.location.clone(),
            pickup_time,
            photo,
        })
    }
}
