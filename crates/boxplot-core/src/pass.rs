//! Render-pass context
//!
//! State that used to live process-wide now travels in an explicit
//! context created at pass start. A pass registers every successfully
//! calculated box trace in order; the registration index doubles as the
//! fallback position for traces with no position data and as the slot
//! index for group layout. Traces that fail calculation register
//! nothing, so they shift no sibling's slot. One pass is active at a
//! time; a pass either completes or its results are discarded.

/// Pass-scoped registration counter for box traces
#[derive(Debug, Default)]
pub struct RenderPass {
    boxes_registered: usize,
}

impl RenderPass {
    /// Start a fresh pass
    pub fn new() -> Self {
        Self::default()
    }

    /// Index the next successful trace will receive; doubles as its
    /// fallback position
    pub fn next_box_index(&self) -> usize {
        self.boxes_registered
    }

    /// Register a successfully calculated box trace, returning its index
    pub fn register_box(&mut self) -> usize {
        let index = self.boxes_registered;
        self.boxes_registered += 1;
        index
    }

    /// Number of box traces registered so far
    pub fn box_count(&self) -> usize {
        self.boxes_registered
    }
}
