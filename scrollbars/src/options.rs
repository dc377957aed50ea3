use std::sync::Arc;

use crate::elements::{
    Element, RenderElementFn, render_thumb_horizontal_default, render_thumb_vertical_default,
    render_track_horizontal_default, render_track_vertical_default, render_view_default,
};
use crate::state::ScrollValues;
use crate::style::ElementStyle;

/// Fired synchronously for every scroll event, before the coalesced update.
pub type OnScrollCallback = Arc<dyn Fn(ScrollValues) + Send + Sync>;

/// Fired once per update frame that was triggered by scrolling, with the
/// freshly recomputed values.
pub type OnScrollFrameCallback = Arc<dyn Fn(ScrollValues) + Send + Sync>;

/// Fired on the idle→scrolling transition.
pub type OnScrollStartCallback = Arc<dyn Fn() + Send + Sync>;

/// Fired once the quiet period elapses after the last scroll event.
pub type OnScrollStopCallback = Arc<dyn Fn() + Send + Sync>;

/// Fired after every geometry recomputation, scroll-born or not.
pub type OnUpdateCallback = Arc<dyn Fn(ScrollValues) + Send + Sync>;

/// Configuration for [`crate::Scrollbars`].
///
/// This type is designed to be cheap to clone: render hooks and callbacks are
/// stored in `Arc`s so adapters can update a few fields and call
/// `Scrollbars::set_options` without reallocating closures.
pub struct ScrollbarsOptions {
    /// Fade the tracks out after a period without scroll/hover activity.
    pub auto_hide: bool,
    /// Delay before hiding, in milliseconds.
    pub auto_hide_timeout_ms: u64,
    /// Duration of the opacity fade, in milliseconds.
    pub auto_hide_duration_ms: u64,

    /// Let the container grow with its content instead of filling the parent.
    pub auto_height: bool,
    /// Container height lower bound in auto-height mode, in pixels.
    pub auto_height_min: f64,
    /// Container height upper bound in auto-height mode, in pixels.
    pub auto_height_max: f64,

    /// Toggle track `visibility` per axis depending on whether the content
    /// actually overflows.
    pub hide_tracks_when_not_needed: bool,

    /// Fixed thumb length in pixels. When set, the proportional length and
    /// `thumb_min_size` are ignored.
    pub thumb_size: Option<f64>,
    /// Lower bound for the proportional thumb length, in pixels.
    pub thumb_min_size: f64,

    /// Defer scrollbar-width-dependent layout until after the first mount,
    /// so server- and client-rendered markup agree.
    pub universal: bool,

    /// Tag used for the container element.
    pub tag_name: String,

    /// Quiet period after the last scroll event before scrolling is
    /// considered stopped, in milliseconds.
    pub scrolling_reset_delay_ms: u64,

    pub render_view: RenderElementFn,
    pub render_track_horizontal: RenderElementFn,
    pub render_track_vertical: RenderElementFn,
    pub render_thumb_horizontal: RenderElementFn,
    pub render_thumb_vertical: RenderElementFn,

    pub on_scroll: Option<OnScrollCallback>,
    pub on_scroll_frame: Option<OnScrollFrameCallback>,
    pub on_scroll_start: Option<OnScrollStartCallback>,
    pub on_scroll_stop: Option<OnScrollStopCallback>,
    pub on_update: Option<OnUpdateCallback>,
}

impl ScrollbarsOptions {
    pub fn new() -> Self {
        Self {
            auto_hide: false,
            auto_hide_timeout_ms: 1000,
            auto_hide_duration_ms: 200,
            auto_height: false,
            auto_height_min: 0.0,
            auto_height_max: 200.0,
            hide_tracks_when_not_needed: false,
            thumb_size: None,
            thumb_min_size: 30.0,
            universal: false,
            tag_name: String::from("div"),
            scrolling_reset_delay_ms: 150,
            render_view: Arc::new(render_view_default),
            render_track_horizontal: Arc::new(render_track_horizontal_default),
            render_track_vertical: Arc::new(render_track_vertical_default),
            render_thumb_horizontal: Arc::new(render_thumb_horizontal_default),
            render_thumb_vertical: Arc::new(render_thumb_vertical_default),
            on_scroll: None,
            on_scroll_frame: None,
            on_scroll_start: None,
            on_scroll_stop: None,
            on_update: None,
        }
    }

    pub fn with_auto_hide(mut self, auto_hide: bool) -> Self {
        self.auto_hide = auto_hide;
        self
    }

    pub fn with_auto_hide_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.auto_hide_timeout_ms = timeout_ms;
        self
    }

    pub fn with_auto_hide_duration_ms(mut self, duration_ms: u64) -> Self {
        self.auto_hide_duration_ms = duration_ms;
        self
    }

    pub fn with_auto_height(mut self, auto_height: bool) -> Self {
        self.auto_height = auto_height;
        self
    }

    pub fn with_auto_height_bounds(mut self, min: f64, max: f64) -> Self {
        self.auto_height_min = min;
        self.auto_height_max = max;
        self
    }

    pub fn with_hide_tracks_when_not_needed(mut self, hide: bool) -> Self {
        self.hide_tracks_when_not_needed = hide;
        self
    }

    pub fn with_thumb_size(mut self, thumb_size: Option<f64>) -> Self {
        self.thumb_size = thumb_size;
        self
    }

    pub fn with_thumb_min_size(mut self, thumb_min_size: f64) -> Self {
        self.thumb_min_size = thumb_min_size;
        self
    }

    pub fn with_universal(mut self, universal: bool) -> Self {
        self.universal = universal;
        self
    }

    pub fn with_tag_name(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = tag_name.into();
        self
    }

    pub fn with_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.scrolling_reset_delay_ms = delay_ms;
        self
    }

    pub fn with_render_view(
        mut self,
        f: impl Fn(ElementStyle) -> Element + Send + Sync + 'static,
    ) -> Self {
        self.render_view = Arc::new(f);
        self
    }

    pub fn with_render_track_horizontal(
        mut self,
        f: impl Fn(ElementStyle) -> Element + Send + Sync + 'static,
    ) -> Self {
        self.render_track_horizontal = Arc::new(f);
        self
    }

    pub fn with_render_track_vertical(
        mut self,
        f: impl Fn(ElementStyle) -> Element + Send + Sync + 'static,
    ) -> Self {
        self.render_track_vertical = Arc::new(f);
        self
    }

    pub fn with_render_thumb_horizontal(
        mut self,
        f: impl Fn(ElementStyle) -> Element + Send + Sync + 'static,
    ) -> Self {
        self.render_thumb_horizontal = Arc::new(f);
        self
    }

    pub fn with_render_thumb_vertical(
        mut self,
        f: impl Fn(ElementStyle) -> Element + Send + Sync + 'static,
    ) -> Self {
        self.render_thumb_vertical = Arc::new(f);
        self
    }

    pub fn with_on_scroll(
        mut self,
        f: Option<impl Fn(ScrollValues) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_scroll_frame(
        mut self,
        f: Option<impl Fn(ScrollValues) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll_frame = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_scroll_start(mut self, f: Option<impl Fn() + Send + Sync + 'static>) -> Self {
        self.on_scroll_start = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_scroll_stop(mut self, f: Option<impl Fn() + Send + Sync + 'static>) -> Self {
        self.on_scroll_stop = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_update(
        mut self,
        f: Option<impl Fn(ScrollValues) + Send + Sync + 'static>,
    ) -> Self {
        self.on_update = f.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for ScrollbarsOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ScrollbarsOptions {
    fn clone(&self) -> Self {
        Self {
            auto_hide: self.auto_hide,
            auto_hide_timeout_ms: self.auto_hide_timeout_ms,
            auto_hide_duration_ms: self.auto_hide_duration_ms,
            auto_height: self.auto_height,
            auto_height_min: self.auto_height_min,
            auto_height_max: self.auto_height_max,
            hide_tracks_when_not_needed: self.hide_tracks_when_not_needed,
            thumb_size: self.thumb_size,
            thumb_min_size: self.thumb_min_size,
            universal: self.universal,
            tag_name: self.tag_name.clone(),
            scrolling_reset_delay_ms: self.scrolling_reset_delay_ms,
            render_view: Arc::clone(&self.render_view),
            render_track_horizontal: Arc::clone(&self.render_track_horizontal),
            render_track_vertical: Arc::clone(&self.render_track_vertical),
            render_thumb_horizontal: Arc::clone(&self.render_thumb_horizontal),
            render_thumb_vertical: Arc::clone(&self.render_thumb_vertical),
            on_scroll: self.on_scroll.clone(),
            on_scroll_frame: self.on_scroll_frame.clone(),
            on_scroll_start: self.on_scroll_start.clone(),
            on_scroll_stop: self.on_scroll_stop.clone(),
            on_update: self.on_update.clone(),
        }
    }
}

impl core::fmt::Debug for ScrollbarsOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollbarsOptions")
            .field("auto_hide", &self.auto_hide)
            .field("auto_hide_timeout_ms", &self.auto_hide_timeout_ms)
            .field("auto_hide_duration_ms", &self.auto_hide_duration_ms)
            .field("auto_height", &self.auto_height)
            .field("auto_height_min", &self.auto_height_min)
            .field("auto_height_max", &self.auto_height_max)
            .field(
                "hide_tracks_when_not_needed",
                &self.hide_tracks_when_not_needed,
            )
            .field("thumb_size", &self.thumb_size)
            .field("thumb_min_size", &self.thumb_min_size)
            .field("universal", &self.universal)
            .field("tag_name", &self.tag_name)
            .field("scrolling_reset_delay_ms", &self.scrolling_reset_delay_ms)
            .finish_non_exhaustive()
    }
}
