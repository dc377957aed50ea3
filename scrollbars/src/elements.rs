use std::sync::Arc;

use crate::state::UpdatePatch;
use crate::style::{Dimension, ElementStyle, Rgba};

/// A renderable element description: a tag plus its computed style.
///
/// This is the engine's stand-in for a DOM node. Hosts map it to whatever
/// their framework renders.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub tag: String,
    pub style: ElementStyle,
}

impl Element {
    pub fn new(tag: impl Into<String>, style: ElementStyle) -> Self {
        Self {
            tag: tag.into(),
            style,
        }
    }

    pub fn div(style: ElementStyle) -> Self {
        Self::new("div", style)
    }
}

/// A pure producer from a computed style to a renderable element.
///
/// The five hooks (view, both tracks, both thumbs) are substitutable
/// independently; each receives the engine-computed base style and may
/// overlay its own decoration, like the defaults below do.
pub type RenderElementFn = Arc<dyn Fn(ElementStyle) -> Element + Send + Sync>;

/// The five overlay elements produced by one render pass, plus the container.
///
/// Thumb styles start empty; geometry arrives through [`UpdatePatch`]es
/// applied after each committed render.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementTree {
    pub container: Element,
    pub view: Element,
    pub track_horizontal: Element,
    pub thumb_horizontal: Element,
    pub track_vertical: Element,
    pub thumb_vertical: Element,
}

impl ElementTree {
    /// Applies an update patch to the rendered tree.
    pub fn apply(&mut self, patch: &UpdatePatch) {
        if let Some(thumb) = patch.thumb_horizontal {
            self.thumb_horizontal.style.width = Some(Dimension::Px(thumb.length));
            self.thumb_horizontal.style.translate_x = Some(thumb.translate);
        }
        if let Some(thumb) = patch.thumb_vertical {
            self.thumb_vertical.style.height = Some(Dimension::Px(thumb.length));
            self.thumb_vertical.style.translate_y = Some(thumb.translate);
        }
        if let Some(track) = patch.track_horizontal {
            self.track_horizontal.style.visibility = Some(track.visibility);
        }
        if let Some(track) = patch.track_vertical {
            self.track_vertical.style.visibility = Some(track.visibility);
        }
    }
}

pub fn render_view_default(style: ElementStyle) -> Element {
    Element::div(style)
}

pub fn render_track_horizontal_default(mut style: ElementStyle) -> Element {
    style.right = Some(2.0);
    style.bottom = Some(2.0);
    style.left = Some(2.0);
    style.border_radius = Some(3.0);
    Element::div(style)
}

pub fn render_track_vertical_default(mut style: ElementStyle) -> Element {
    style.right = Some(2.0);
    style.bottom = Some(2.0);
    style.top = Some(2.0);
    style.border_radius = Some(3.0);
    Element::div(style)
}

pub fn render_thumb_horizontal_default(mut style: ElementStyle) -> Element {
    style.cursor_pointer = true;
    style.background = Some(Rgba::new(0, 0, 0, 0.2));
    Element::div(style)
}

pub fn render_thumb_vertical_default(mut style: ElementStyle) -> Element {
    style.cursor_pointer = true;
    style.background = Some(Rgba::new(0, 0, 0, 0.2));
    Element::div(style)
}
