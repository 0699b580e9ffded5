//! Three-slot stage progress board
//!
//! Pure state machine behind the progress display: one slot per remote
//! stage, driven only by real stage-boundary events. On failure the
//! board freezes - completed slots stay completed and the failed stage
//! is never marked completed.

use council_domain::Stage;

/// Display state of one stage slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Pending,
    Active,
    Completed,
}

/// Progress board with one slot per remote stage
#[derive(Debug, Clone)]
pub struct StageBoard {
    slots: [SlotState; 3],
    frozen: bool,
}

impl StageBoard {
    pub fn new() -> Self {
        Self {
            slots: [SlotState::Pending; 3],
            frozen: false,
        }
    }

    pub fn slots(&self) -> &[SlotState; 3] {
        &self.slots
    }

    pub fn slot(&self, stage: Stage) -> Option<SlotState> {
        stage.slot().map(|i| self.slots[i - 1])
    }

    /// Mark a stage's slot active (its remote call was issued)
    pub fn start(&mut self, stage: Stage) {
        if self.frozen {
            return;
        }
        if let Some(i) = stage.slot() {
            self.slots[i - 1] = SlotState::Active;
        }
    }

    /// Mark a stage's slot completed (its remote call resolved)
    pub fn finish(&mut self, stage: Stage) {
        if self.frozen {
            return;
        }
        if let Some(i) = stage.slot() {
            self.slots[i - 1] = SlotState::Completed;
        }
    }

    /// Freeze the board at the current state; later events are ignored
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Render the board as a compact text strip, e.g. `[#] [>] [ ]`
    pub fn strip(&self) -> String {
        self.slots
            .iter()
            .map(|slot| match slot {
                SlotState::Pending => "[ ]",
                SlotState::Active => "[>]",
                SlotState::Completed => "[#]",
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for StageBoard {
    fn default() -> Self {
        Self::new()
    }
}
