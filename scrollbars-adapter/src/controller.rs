use scrollbars::{ScrollMetrics, Scrollbars, ScrollbarsOptions, TrackSizes, UpdatePatch};

use crate::{AutoHide, FrameScheduler, TrackFade, UpdateReason};

/// The work that came due on one frame tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickPatches {
    /// The coalesced geometry recomputation, when one was pending.
    pub update: Option<UpdatePatch>,
    /// A track opacity change from the auto-hide timer.
    pub track_fade: Option<TrackFade>,
}

/// A framework-neutral controller that wraps a [`Scrollbars`] engine and
/// owns its timers.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_mount` / `on_unmount` around the view element's lifecycle
/// - `on_scroll` / `on_resize` / `on_pointer_enter` / `on_pointer_leave`
///   when UI events occur
/// - `tick(now_ms)` each frame, applying the returned patches to the
///   rendered elements
///
/// All pending work (the coalesced update, the hide deadline, the
/// quiet-period bookkeeping) lives on this instance and is cancelled by
/// `on_unmount` or by dropping it.
#[derive(Clone, Debug)]
pub struct Controller {
    sb: Scrollbars,
    scheduler: FrameScheduler,
    auto_hide: AutoHide,
}

impl Controller {
    pub fn new(options: ScrollbarsOptions) -> Self {
        let auto_hide = AutoHide::from_options(&options);
        Self {
            sb: Scrollbars::new(options),
            scheduler: FrameScheduler::new(),
            auto_hide,
        }
    }

    pub fn from_scrollbars(sb: Scrollbars) -> Self {
        let auto_hide = AutoHide::from_options(sb.options());
        Self {
            sb,
            scheduler: FrameScheduler::new(),
            auto_hide,
        }
    }

    pub fn scrollbars(&self) -> &Scrollbars {
        &self.sb
    }

    pub fn scrollbars_mut(&mut self) -> &mut Scrollbars {
        &mut self.sb
    }

    pub fn into_scrollbars(self) -> Scrollbars {
        self.sb
    }

    pub fn auto_hide(&self) -> &AutoHide {
        &self.auto_hide
    }

    pub fn set_options(&mut self, options: ScrollbarsOptions) {
        self.auto_hide.configure(&options);
        self.sb.set_options(options);
        if self.sb.mounted() {
            self.scheduler.request(UpdateReason::Options);
        }
    }

    /// Attaches to a measured view element and schedules the first update.
    ///
    /// With auto-hide on, the tracks start visible and the first hide
    /// deadline is armed right away.
    pub fn on_mount(&mut self, metrics: ScrollMetrics, scrollbar_width: f64, now_ms: u64) {
        sadebug!(scrollbar_width, now_ms, "Controller::on_mount");
        self.sb.mount(metrics, scrollbar_width);
        self.scheduler.request(UpdateReason::Mount);
        self.auto_hide.schedule_hide(now_ms);
    }

    /// Detaches and cancels all pending work.
    pub fn on_unmount(&mut self) {
        sadebug!("Controller::on_unmount");
        self.scheduler.cancel();
        self.auto_hide.cancel();
        self.sb.unmount();
    }

    /// Applies a host scroll event.
    ///
    /// Fires `on_scroll` synchronously, marks the engine as scrolling,
    /// requests a coalesced update, and pokes the auto-hide controller. The
    /// returned fade (if any) shows the tracks.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics, now_ms: u64) -> Option<TrackFade> {
        self.sb.handle_scroll(metrics, now_ms);
        self.scheduler.request(UpdateReason::Scroll);
        self.auto_hide.on_scroll(now_ms)
    }

    /// Applies fresh element readings after a layout/content change.
    pub fn on_resize(&mut self, metrics: ScrollMetrics) {
        self.sb.set_metrics(metrics);
        self.scheduler.request(UpdateReason::Resize);
    }

    /// Applies fresh inner track measurements.
    pub fn on_track_resize(&mut self, track_sizes: TrackSizes) {
        self.sb.set_track_sizes(track_sizes);
        self.scheduler.request(UpdateReason::Resize);
    }

    pub fn on_pointer_enter(&mut self) -> Option<TrackFade> {
        self.auto_hide.on_pointer_enter()
    }

    pub fn on_pointer_leave(&mut self, now_ms: u64) {
        self.auto_hide.on_pointer_leave(now_ms);
    }

    /// Requests a coalesced update for the next tick.
    pub fn request_update(&mut self, reason: UpdateReason) {
        self.scheduler.request(reason);
    }

    fn programmatic(&mut self, applied: f64) -> f64 {
        if self.sb.mounted() {
            self.scheduler.request(UpdateReason::Programmatic);
        }
        applied
    }

    pub fn set_scroll_left(&mut self, left: f64) -> f64 {
        let applied = self.sb.set_scroll_left(left);
        self.programmatic(applied)
    }

    pub fn set_scroll_top(&mut self, top: f64) -> f64 {
        let applied = self.sb.set_scroll_top(top);
        self.programmatic(applied)
    }

    pub fn scroll_to_left(&mut self) -> f64 {
        let applied = self.sb.scroll_to_left();
        self.programmatic(applied)
    }

    pub fn scroll_to_right(&mut self) -> f64 {
        let applied = self.sb.scroll_to_right();
        self.programmatic(applied)
    }

    pub fn scroll_to_top(&mut self) -> f64 {
        let applied = self.sb.scroll_to_top();
        self.programmatic(applied)
    }

    pub fn scroll_to_bottom(&mut self) -> f64 {
        let applied = self.sb.scroll_to_bottom();
        self.programmatic(applied)
    }

    /// Advances the controller by one frame.
    ///
    /// Drains the coalesced update (at most one recomputation regardless of
    /// how many requests arrived since the last tick), runs the quiet-period
    /// debounce, and runs the auto-hide timer. The scroll-frame callback
    /// fires only when the drained request was scroll-born.
    pub fn tick(&mut self, now_ms: u64) -> TickPatches {
        let update = self.scheduler.take().map(|reason| {
            let patch = self.sb.update();
            if reason == UpdateReason::Scroll {
                if let Some(cb) = &self.sb.options().on_scroll_frame {
                    cb(patch.values);
                }
            }
            patch
        });
        self.sb.update_scrolling(now_ms);
        let track_fade = self.auto_hide.tick(now_ms);
        TickPatches { update, track_fade }
    }
}
