use super::constants::PARALLAX_RANGE_PX;
use super::cursor::px;
use glam::Vec2;

/// Pointer offset from the viewport center, scaled so each axis spans
/// `range` pixels (±range/2 at the edges). Zero for a degenerate viewport.
#[inline]
pub fn parallax_offset(pointer: Vec2, viewport: Vec2, range: f32) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }
    (pointer / viewport - Vec2::splat(0.5)) * range
}

/// Inline transforms for the two hero layers.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerTransforms {
    /// Moves against the pointer.
    pub foreground: String,
    /// Moves with the pointer.
    pub background: String,
}

pub fn layer_transforms(pointer: Vec2, viewport: Vec2) -> LayerTransforms {
    let o = parallax_offset(pointer, viewport, PARALLAX_RANGE_PX);
    LayerTransforms {
        foreground: translate(-o),
        background: translate(o),
    }
}

#[inline]
pub fn translate(offset: Vec2) -> String {
    format!("translate({}, {})", px(offset.x), px(offset.y))
}
