/// Why an update was requested.
///
/// The reason travels with the coalesced request so the controller knows
/// whether to fire the scroll-frame callback after recomputing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpdateReason {
    Mount,
    Scroll,
    Resize,
    Options,
    Programmatic,
}

/// Coalesces update requests into at most one recomputation per frame.
///
/// `request` replaces any pending entry, so re-scheduling within a frame
/// cancels the previous request instead of queueing a second one. `Scroll`
/// is sticky across merges: a scroll-born frame callback must not be lost to
/// a later resize arriving in the same frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameScheduler {
    pending: Option<UpdateReason>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, reason: UpdateReason) {
        satrace!(?reason, "FrameScheduler::request");
        self.pending = match self.pending {
            Some(UpdateReason::Scroll) => Some(UpdateReason::Scroll),
            _ => Some(reason),
        };
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drains the pending request, if any. Called once per frame.
    pub fn take(&mut self) -> Option<UpdateReason> {
        self.pending.take()
    }

    /// Drops any pending request (teardown).
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
