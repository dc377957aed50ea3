use crate::geometry::scroll_fraction;
use crate::style::Visibility;

/// Raw readings of the scrollable view element, as reported by the host.
///
/// All values are pixels; `f64` because DOM measurements are fractional.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub scroll_top: f64,
    pub scroll_width: f64,
    pub scroll_height: f64,
    pub client_width: f64,
    pub client_height: f64,
}

/// A derived, immutable snapshot of the current scroll state.
///
/// `left`/`top` are the scroll positions as fractions in `[0, 1]`. They are 0
/// whenever the content does not overflow on that axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollValues {
    pub left: f64,
    pub top: f64,
    pub scroll_left: f64,
    pub scroll_top: f64,
    pub scroll_width: f64,
    pub scroll_height: f64,
    pub client_width: f64,
    pub client_height: f64,
}

impl ScrollValues {
    pub fn from_metrics(m: ScrollMetrics) -> Self {
        Self {
            left: scroll_fraction(m.scroll_left, m.scroll_width, m.client_width),
            top: scroll_fraction(m.scroll_top, m.scroll_height, m.client_height),
            scroll_left: m.scroll_left,
            scroll_top: m.scroll_top,
            scroll_width: m.scroll_width,
            scroll_height: m.scroll_height,
            client_width: m.client_width,
            client_height: m.client_height,
        }
    }
}

/// Style mutation for one thumb: its length along the track and its
/// translation from the track start.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThumbPatch {
    pub length: f64,
    pub translate: f64,
}

/// Style mutation for one track (only emitted with
/// `hide_tracks_when_not_needed`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackPatch {
    pub visibility: Visibility,
}

/// The imperative style patch produced by one update pass.
///
/// The engine never writes styles itself; it hands the host one of these per
/// recomputation, to be applied after the committed render. Thumb patches are
/// absent when the view is unmounted or when the platform draws overlay
/// scrollbars (native scrollbar width of 0), in which case the tracks are
/// `display: none` anyway.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdatePatch {
    pub values: ScrollValues,
    pub thumb_horizontal: Option<ThumbPatch>,
    pub thumb_vertical: Option<ThumbPatch>,
    pub track_horizontal: Option<TrackPatch>,
    pub track_vertical: Option<TrackPatch>,
}
