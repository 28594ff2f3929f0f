//! Events delivered by the external scanning session

use meshscan_core::{Anchor, AnchorId};

/// One callback from the scanner's delivery context
///
/// Events arrive in order on a single delivery context and are handled to
/// completion before the next one is accepted.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A new anchor was placed
    AnchorAdded(Anchor),
    /// A tracked anchor's geometry or pose changed
    AnchorUpdated(Anchor),
    /// A tracked anchor was retired
    AnchorRemoved(AnchorId),
    /// A frame was processed; carries every anchor currently tracked
    Frame { anchors: Vec<Anchor> },
    /// The session failed and will deliver no further tracking data
    Failed { reason: String },
    /// Tracking was interrupted, for example by the app backgrounding
    Interrupted,
    /// Tracking resumed after an interruption
    InterruptionEnded,
}
