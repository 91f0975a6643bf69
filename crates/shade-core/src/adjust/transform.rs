//! Per-channel linear lighten/darken.

use glam::Vec3;

use crate::adjust::factor::AdjustmentFactor;
use crate::color::model::Color;

const WHITE: Vec3 = Vec3::splat(255.0);

/// Move a color toward white (`f > 0`) or black (`f <= 0`).
///
/// Each channel is interpolated independently:
///
/// ```text
/// f > 0:  out = v + f × (255 − v)
/// f ≤ 0:  out = v + f × v
/// ```
///
/// `f = 1` gives white, `f = -1` gives black, `f = 0` is the identity.
pub fn adjust_color(color: Color, factor: AdjustmentFactor) -> Color {
    let f = factor.get();
    if f == 0.0 {
        return color;
    }

    let v = color.to_vec3();
    let out = if f > 0.0 { v + (WHITE - v) * f } else { v + v * f };
    Color::from_vec3(out)
}
