use scrollbars::ScrollbarsOptions;

/// An opacity patch for both tracks, carrying the fade duration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackFade {
    pub opacity: f64,
    pub duration_ms: u64,
}

impl TrackFade {
    /// Applies the fade to a track style.
    pub fn apply_to(&self, style: &mut scrollbars::ElementStyle) {
        style.opacity = Some(self.opacity);
        style.transition_ms = Some(self.duration_ms);
    }
}

/// Timer-driven track concealment.
///
/// Tracks are shown on the spot when scrolling or pointer-enter happens, and
/// a hide deadline is armed by scroll and pointer-leave. `tick` emits the
/// hide fade once the deadline passes, unless the pointer is still inside
/// the container; in that case the hide is re-armed by the eventual
/// pointer-leave.
///
/// The deadline is plain owned state rather than a wall-clock timer, so
/// dropping the controller cancels everything.
#[derive(Clone, Copy, Debug)]
pub struct AutoHide {
    enabled: bool,
    timeout_ms: u64,
    duration_ms: u64,
    visible: bool,
    hovering: bool,
    deadline_ms: Option<u64>,
}

impl AutoHide {
    pub fn new(enabled: bool, timeout_ms: u64, duration_ms: u64) -> Self {
        Self {
            enabled,
            timeout_ms,
            duration_ms,
            visible: true,
            hovering: false,
            deadline_ms: None,
        }
    }

    pub fn from_options(options: &ScrollbarsOptions) -> Self {
        Self::new(
            options.auto_hide,
            options.auto_hide_timeout_ms,
            options.auto_hide_duration_ms,
        )
    }

    /// Reconfigures timings in place, keeping the current visibility state.
    pub fn configure(&mut self, options: &ScrollbarsOptions) {
        self.enabled = options.auto_hide;
        self.timeout_ms = options.auto_hide_timeout_ms;
        self.duration_ms = options.auto_hide_duration_ms;
        if !self.enabled {
            self.deadline_ms = None;
            self.visible = true;
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn hovering(&self) -> bool {
        self.hovering
    }

    fn fade(&self, opacity: f64) -> TrackFade {
        TrackFade {
            opacity,
            duration_ms: self.duration_ms,
        }
    }

    /// Shows the tracks immediately, cancelling any armed hide.
    ///
    /// Returns a patch only on the hidden→visible edge, so hosts don't churn
    /// styles on every scroll event.
    pub fn show(&mut self) -> Option<TrackFade> {
        self.deadline_ms = None;
        if !self.enabled || self.visible {
            return None;
        }
        self.visible = true;
        Some(self.fade(1.0))
    }

    /// Arms the hide deadline at `now + timeout`.
    pub fn schedule_hide(&mut self, now_ms: u64) {
        if !self.enabled {
            return;
        }
        self.deadline_ms = Some(now_ms.saturating_add(self.timeout_ms));
    }

    /// Scroll activity: show now, hide `timeout` from now.
    pub fn on_scroll(&mut self, now_ms: u64) -> Option<TrackFade> {
        if !self.enabled {
            return None;
        }
        let shown = self.show();
        self.schedule_hide(now_ms);
        shown
    }

    pub fn on_pointer_enter(&mut self) -> Option<TrackFade> {
        self.hovering = true;
        self.show()
    }

    pub fn on_pointer_leave(&mut self, now_ms: u64) {
        self.hovering = false;
        self.schedule_hide(now_ms);
    }

    /// Runs the hide timer; call this every tick.
    pub fn tick(&mut self, now_ms: u64) -> Option<TrackFade> {
        if !self.enabled {
            return None;
        }
        let Some(deadline) = self.deadline_ms else {
            return None;
        };
        if now_ms < deadline {
            return None;
        }
        self.deadline_ms = None;
        if self.hovering || !self.visible {
            return None;
        }
        self.visible = false;
        Some(self.fade(0.0))
    }

    /// Drops any armed deadline (teardown).
    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }
}
