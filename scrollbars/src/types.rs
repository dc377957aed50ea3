#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Thumb size and position along one track, in pixels.
///
/// A `length` of 0 means the thumb is hidden (the content fits the viewport
/// on that axis, or the track has not been measured yet).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThumbGeometry {
    pub length: f64,
    pub offset: f64,
}

/// Inner track lengths reported by the host (outer size minus padding).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackSizes {
    pub horizontal: f64,
    pub vertical: f64,
}

impl TrackSizes {
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }
}
