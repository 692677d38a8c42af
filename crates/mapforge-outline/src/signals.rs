//! Change-notification signals for the outline model.
//!
//! A presentation layer connects to these to stay synchronized with the
//! model: the reset pair brackets a full rebuild, the layout pair brackets a
//! sibling-order change. Both are the cue to re-flatten and redraw.

use mapforge_core::Signal;

/// Signals emitted by an [`OutlineTree`](crate::OutlineTree).
///
/// Signals fire in pairs: the `*_about_to_*` signal before the mutation, the
/// matching signal after it completes.
pub struct OutlineSignals {
    /// Emitted before the element collection is replaced.
    pub model_about_to_reset: Signal<()>,

    /// Emitted after the element collection has been replaced.
    pub model_reset: Signal<()>,

    /// Emitted before sibling order changes (sorting).
    pub layout_about_to_change: Signal<()>,

    /// Emitted after sibling order has changed. Flattened views taken before
    /// this point are stale and must be regenerated.
    pub layout_changed: Signal<()>,
}

impl Default for OutlineSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineSignals {
    /// Creates a new set of outline signals.
    pub fn new() -> Self {
        Self {
            model_about_to_reset: Signal::new(),
            model_reset: Signal::new(),
            layout_about_to_change: Signal::new(),
            layout_changed: Signal::new(),
        }
    }
}
