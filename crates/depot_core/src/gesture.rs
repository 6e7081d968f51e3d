//! Horizontal-drag state driving the reveal-to-delete affordance.

/// Offset of a fully revealed delete affordance, in pixels.
pub const REVEAL_WIDTH_PX: f32 = -80.0;

/// Release offsets strictly beyond this snap open; exactly at it resolves
/// closed.
pub const SNAP_THRESHOLD_PX: f32 = -60.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Phase {
    #[default]
    Idle,
    Dragging {
        start_x: f32,
        offset: f32,
    },
    SnappedOpen,
}

/// Per-item drag state. Items are independent; there is no shared lock.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    phase: Phase,
}

impl GestureState {
    /// Records the press position and arms the drag. Pressing an open row
    /// re-arms it, so releasing without a leftward move closes it again.
    pub fn press(&mut self, x: f32) {
        self.phase = Phase::Dragging {
            start_x: x,
            offset: 0.0,
        };
    }

    /// Tracks a horizontal move. Rightward motion clamps the offset to zero.
    pub fn drag(&mut self, x: f32) {
        if let Phase::Dragging { start_x, offset } = &mut self.phase {
            *offset = (x - *start_x).min(0.0);
        }
    }

    /// Resolves the drag: snapped open past the threshold, idle otherwise.
    pub fn release(&mut self) {
        if let Phase::Dragging { offset, .. } = self.phase {
            self.phase = if offset < SNAP_THRESHOLD_PX {
                Phase::SnappedOpen
            } else {
                Phase::Idle
            };
        }
    }

    /// Current horizontal offset of the row, in pixels.
    pub fn offset(&self) -> f32 {
        match self.phase {
            Phase::Idle => 0.0,
            Phase::Dragging { offset, .. } => offset,
            Phase::SnappedOpen => REVEAL_WIDTH_PX,
        }
    }

    /// Whether the delete affordance is revealed.
    pub fn is_open(&self) -> bool {
        self.phase == Phase::SnappedOpen
    }
}
