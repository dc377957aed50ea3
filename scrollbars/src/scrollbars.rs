use crate::elements::{Element, ElementTree};
use crate::geometry;
use crate::state::{ScrollMetrics, ScrollValues, ThumbPatch, TrackPatch, UpdatePatch};
use crate::style::{Dimension, ElementStyle, Overflow, Position, Visibility};
use crate::types::{Axis, ThumbGeometry, TrackSizes};
use crate::ScrollbarsOptions;

/// A headless custom-scrollbar engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it by reporting element metrics, scroll events and
///   timestamps.
/// - Rendering is exposed as element descriptions ([`Self::render`]) plus
///   imperative style patches ([`Self::update`]).
///
/// For frame coalescing and auto-hide timers, see the `scrollbars-adapter`
/// crate.
#[derive(Clone, Debug)]
pub struct Scrollbars {
    options: ScrollbarsOptions,
    metrics: ScrollMetrics,
    track_sizes: TrackSizes,
    scrollbar_width: f64,
    mounted: bool,
    universal_mounted: bool,
    is_scrolling: bool,
    last_scroll_event_ms: Option<u64>,
}

impl Scrollbars {
    pub fn new(options: ScrollbarsOptions) -> Self {
        sbdebug!(
            auto_hide = options.auto_hide,
            auto_height = options.auto_height,
            universal = options.universal,
            "Scrollbars::new"
        );
        Self {
            options,
            metrics: ScrollMetrics::default(),
            track_sizes: TrackSizes::default(),
            scrollbar_width: 0.0,
            mounted: false,
            universal_mounted: false,
            is_scrolling: false,
            last_scroll_event_ms: None,
        }
    }

    pub fn options(&self) -> &ScrollbarsOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ScrollbarsOptions) {
        self.options = options;
        sbtrace!(
            auto_hide = self.options.auto_hide,
            auto_height = self.options.auto_height,
            "Scrollbars::set_options"
        );
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ScrollbarsOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    /// Attaches the engine to a measured view element.
    ///
    /// `scrollbar_width` is the host-measured native scrollbar width; 0 means
    /// the platform draws overlay scrollbars and the custom tracks stay
    /// hidden. In universal mode this also ends the pre-mount rendering
    /// state.
    pub fn mount(&mut self, metrics: ScrollMetrics, scrollbar_width: f64) {
        sbdebug!(scrollbar_width, "Scrollbars::mount");
        self.metrics = metrics;
        self.scrollbar_width = scrollbar_width.max(0.0);
        self.mounted = true;
        self.universal_mounted = true;
    }

    /// Detaches the engine from its view element.
    ///
    /// Reads return zeros and writes become no-ops until the next `mount`.
    /// Scrolling state is dropped without firing `on_scroll_stop`.
    pub fn unmount(&mut self) {
        sbdebug!("Scrollbars::unmount");
        self.mounted = false;
        self.is_scrolling = false;
        self.last_scroll_event_ms = None;
        self.metrics = ScrollMetrics::default();
        self.track_sizes = TrackSizes::default();
    }

    pub fn mounted(&self) -> bool {
        self.mounted
    }

    pub fn scrollbar_width(&self) -> f64 {
        self.scrollbar_width
    }

    pub fn set_scrollbar_width(&mut self, scrollbar_width: f64) {
        self.scrollbar_width = scrollbar_width.max(0.0);
    }

    /// Replaces the element readings (resize, content change).
    pub fn set_metrics(&mut self, metrics: ScrollMetrics) {
        if !self.mounted {
            return;
        }
        self.metrics = metrics;
    }

    pub fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    /// Replaces the host-measured inner track sizes.
    pub fn set_track_sizes(&mut self, track_sizes: TrackSizes) {
        self.track_sizes = track_sizes;
    }

    pub fn track_sizes(&self) -> TrackSizes {
        self.track_sizes
    }

    /// Returns a snapshot of the current scroll state.
    ///
    /// All fields are 0 while unmounted.
    pub fn values(&self) -> ScrollValues {
        if !self.mounted {
            return ScrollValues::default();
        }
        ScrollValues::from_metrics(self.metrics)
    }

    pub fn scroll_left(&self) -> f64 {
        if self.mounted { self.metrics.scroll_left } else { 0.0 }
    }

    pub fn scroll_top(&self) -> f64 {
        if self.mounted { self.metrics.scroll_top } else { 0.0 }
    }

    pub fn scroll_width(&self) -> f64 {
        if self.mounted { self.metrics.scroll_width } else { 0.0 }
    }

    pub fn scroll_height(&self) -> f64 {
        if self.mounted { self.metrics.scroll_height } else { 0.0 }
    }

    pub fn client_width(&self) -> f64 {
        if self.mounted { self.metrics.client_width } else { 0.0 }
    }

    pub fn client_height(&self) -> f64 {
        if self.mounted { self.metrics.client_height } else { 0.0 }
    }

    pub fn max_scroll_left(&self) -> f64 {
        (self.metrics.scroll_width - self.metrics.client_width).max(0.0)
    }

    pub fn max_scroll_top(&self) -> f64 {
        (self.metrics.scroll_height - self.metrics.client_height).max(0.0)
    }

    /// Sets the horizontal offset and returns the applied (clamped) value.
    ///
    /// There is no browser behind the engine to clamp the write, so the
    /// engine clamps to the scrollable range itself. No-op while unmounted.
    pub fn set_scroll_left(&mut self, left: f64) -> f64 {
        if !self.mounted {
            return 0.0;
        }
        let left = if left.is_finite() { left } else { 0.0 };
        let applied = left.clamp(0.0, self.max_scroll_left());
        sbtrace!(left, applied, "set_scroll_left");
        self.metrics.scroll_left = applied;
        applied
    }

    /// Sets the vertical offset and returns the applied (clamped) value.
    pub fn set_scroll_top(&mut self, top: f64) -> f64 {
        if !self.mounted {
            return 0.0;
        }
        let top = if top.is_finite() { top } else { 0.0 };
        let applied = top.clamp(0.0, self.max_scroll_top());
        sbtrace!(top, applied, "set_scroll_top");
        self.metrics.scroll_top = applied;
        applied
    }

    pub fn scroll_to_left(&mut self) -> f64 {
        self.set_scroll_left(0.0)
    }

    pub fn scroll_to_top(&mut self) -> f64 {
        self.set_scroll_top(0.0)
    }

    /// Requests the full horizontal extent; the applied offset is the
    /// clamped maximum.
    pub fn scroll_to_right(&mut self) -> f64 {
        let target = self.metrics.scroll_width;
        self.set_scroll_left(target)
    }

    /// Requests the full vertical extent; the applied offset is the clamped
    /// maximum.
    pub fn scroll_to_bottom(&mut self) -> f64 {
        let target = self.metrics.scroll_height;
        self.set_scroll_top(target)
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    fn set_is_scrolling(&mut self, is_scrolling: bool) {
        if self.is_scrolling == is_scrolling {
            return;
        }
        self.is_scrolling = is_scrolling;
        if is_scrolling {
            if let Some(cb) = &self.options.on_scroll_start {
                cb();
            }
        } else {
            self.last_scroll_event_ms = None;
            if let Some(cb) = &self.options.on_scroll_stop {
                cb();
            }
        }
    }

    /// Records a scroll event; the idle→scrolling edge fires
    /// `on_scroll_start`.
    pub fn notify_scroll_event(&mut self, now_ms: u64) {
        if !self.mounted {
            return;
        }
        self.last_scroll_event_ms = Some(now_ms);
        self.set_is_scrolling(true);
    }

    /// Runs the quiet-period debounce; call this every tick.
    ///
    /// Once `scrolling_reset_delay_ms` elapses after the last scroll event,
    /// scrolling stops and `on_scroll_stop` fires.
    pub fn update_scrolling(&mut self, now_ms: u64) {
        if !self.is_scrolling {
            return;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return;
        };
        if now_ms.saturating_sub(last) >= self.options.scrolling_reset_delay_ms {
            self.set_is_scrolling(false);
        }
    }

    /// Applies a scroll event from the host: fresh metrics plus a timestamp.
    ///
    /// Fires `on_scroll` synchronously. The geometry recomputation is the
    /// adapter's job (schedule an update, then call [`Self::update`] next
    /// frame).
    pub fn handle_scroll(&mut self, metrics: ScrollMetrics, now_ms: u64) {
        if !self.mounted {
            return;
        }
        sbtrace!(
            scroll_left = metrics.scroll_left,
            scroll_top = metrics.scroll_top,
            now_ms,
            "handle_scroll"
        );
        self.metrics = metrics;
        if let Some(cb) = &self.options.on_scroll {
            cb(self.values());
        }
        self.notify_scroll_event(now_ms);
    }

    pub fn track_inner_size(&self, axis: Axis) -> f64 {
        self.track_sizes.get(axis)
    }

    /// Thumb length and translation for one axis, from the current metrics.
    pub fn thumb_geometry(&self, axis: Axis) -> ThumbGeometry {
        if !self.mounted {
            return ThumbGeometry::default();
        }
        let (offset, content, viewport) = match axis {
            Axis::Horizontal => (
                self.metrics.scroll_left,
                self.metrics.scroll_width,
                self.metrics.client_width,
            ),
            Axis::Vertical => (
                self.metrics.scroll_top,
                self.metrics.scroll_height,
                self.metrics.client_height,
            ),
        };
        let track = self.track_sizes.get(axis);
        let length = geometry::thumb_length(
            track,
            content,
            viewport,
            self.options.thumb_size,
            self.options.thumb_min_size,
        );
        let offset = geometry::thumb_offset(offset, content, viewport, track, length);
        ThumbGeometry { length, offset }
    }

    /// Runs one geometry recomputation and returns the style patch.
    ///
    /// Fires `on_update` with the snapshot. Callers are expected to coalesce:
    /// the adapter's frame scheduler guarantees at most one call per frame.
    pub fn update(&self) -> UpdatePatch {
        let values = self.values();
        let mut patch = UpdatePatch {
            values,
            thumb_horizontal: None,
            thumb_vertical: None,
            track_horizontal: None,
            track_vertical: None,
        };

        if self.mounted && self.scrollbar_width > 0.0 {
            let horizontal = self.thumb_geometry(Axis::Horizontal);
            let vertical = self.thumb_geometry(Axis::Vertical);
            patch.thumb_horizontal = Some(ThumbPatch {
                length: horizontal.length,
                translate: horizontal.offset,
            });
            patch.thumb_vertical = Some(ThumbPatch {
                length: vertical.length,
                translate: vertical.offset,
            });

            if self.options.hide_tracks_when_not_needed {
                patch.track_horizontal = Some(TrackPatch {
                    visibility: if values.scroll_width > values.client_width {
                        Visibility::Visible
                    } else {
                        Visibility::Hidden
                    },
                });
                patch.track_vertical = Some(TrackPatch {
                    visibility: if values.scroll_height > values.client_height {
                        Visibility::Visible
                    } else {
                        Visibility::Hidden
                    },
                });
            }
        }

        sbtrace!(
            left = values.left,
            top = values.top,
            "Scrollbars::update"
        );
        if let Some(cb) = &self.options.on_update {
            cb(values);
        }
        patch
    }

    pub fn container_style(&self) -> ElementStyle {
        let mut style = ElementStyle {
            position: Some(Position::Relative),
            overflow: Some(Overflow::Hidden),
            width: Some(Dimension::Percent(100.0)),
            height: Some(Dimension::Percent(100.0)),
            ..ElementStyle::default()
        };
        if self.options.auto_height {
            style.height = Some(Dimension::Auto);
            style.min_height = Some(self.options.auto_height_min);
            style.max_height = Some(self.options.auto_height_max);
        }
        style
    }

    pub fn view_style(&self) -> ElementStyle {
        let scrollbar_width = self.scrollbar_width;
        let margin = if scrollbar_width > 0.0 {
            -scrollbar_width
        } else {
            0.0
        };
        let mut style = ElementStyle {
            position: Some(Position::Absolute),
            top: Some(0.0),
            right: Some(0.0),
            bottom: Some(0.0),
            left: Some(0.0),
            overflow: Some(Overflow::Scroll),
            margin_right: Some(margin),
            margin_bottom: Some(margin),
            ..ElementStyle::default()
        };
        if self.options.auto_height {
            style.position = Some(Position::Relative);
            style.top = None;
            style.right = None;
            style.bottom = None;
            style.left = None;
            // The view is taller than the container by the native scrollbar
            // width, which the negative margins pull back out of view.
            style.min_height = Some(self.options.auto_height_min + scrollbar_width);
            style.max_height = Some(self.options.auto_height_max + scrollbar_width);
        }
        if self.options.universal && !self.universal_mounted {
            if self.options.auto_height {
                style.min_height = Some(self.options.auto_height_min);
                style.max_height = Some(self.options.auto_height_max);
            }
            style.overflow = Some(Overflow::Hidden);
            style.margin_right = Some(0.0);
            style.margin_bottom = Some(0.0);
        }
        style
    }

    fn track_style(&self, axis: Axis) -> ElementStyle {
        let mut style = ElementStyle {
            position: Some(Position::Absolute),
            ..ElementStyle::default()
        };
        match axis {
            Axis::Horizontal => style.height = Some(Dimension::Px(6.0)),
            Axis::Vertical => style.width = Some(Dimension::Px(6.0)),
        }
        if self.options.auto_hide {
            style.transition_ms = Some(self.options.auto_hide_duration_ms);
            style.opacity = Some(1.0);
        }
        if self.scrollbar_width == 0.0 || (self.options.universal && !self.universal_mounted) {
            style.display_none = true;
        }
        style
    }

    pub fn track_horizontal_style(&self) -> ElementStyle {
        self.track_style(Axis::Horizontal)
    }

    pub fn track_vertical_style(&self) -> ElementStyle {
        self.track_style(Axis::Vertical)
    }

    /// Runs one render pass through the configured element producers.
    ///
    /// Thumbs receive an empty style; their geometry arrives through
    /// [`UpdatePatch`]es applied after the render is committed.
    pub fn render(&self) -> ElementTree {
        ElementTree {
            container: Element::new(self.options.tag_name.clone(), self.container_style()),
            view: (self.options.render_view)(self.view_style()),
            track_horizontal: (self.options.render_track_horizontal)(
                self.track_horizontal_style(),
            ),
            thumb_horizontal: (self.options.render_thumb_horizontal)(ElementStyle::default()),
            track_vertical: (self.options.render_track_vertical)(self.track_vertical_style()),
            thumb_vertical: (self.options.render_thumb_vertical)(ElementStyle::default()),
        }
    }
}
