//! # Badge Palette
//!
//! Colors for the selection badges (module/type) and the per-member minor
//! badges (access level, static flag, member kind). Hues are defined in HSV
//! so the two badge families share saturation and brightness: major badges
//! are brighter, minor badges sit slightly darker so they read as metadata.

use ratatui::style::Color;

use crate::core::catalog::Access;

// major badge const values
const MAJOR_BADGE_SATURATION: f32 = 0.7;
const MAJOR_BADGE_VALUE: f32 = 0.7;

// minor badge const values
const MINOR_BADGE_SATURATION: f32 = 0.7;
const MINOR_BADGE_VALUE: f32 = 0.55;

/// HSV → RGB, with hue given as a turn fraction in [0, 1).
fn hsv(hue: f32, saturation: f32, value: f32) -> Color {
    let h = (hue.fract() + 1.0).fract() * 6.0;
    let sector = h.floor();
    let f = h - sector;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * f);
    let t = value * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match sector as u32 % 6 {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    Color::Rgb(
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}

/// Badge color for the selected module.
pub fn module_badge() -> Color {
    hsv(0.59, MAJOR_BADGE_SATURATION, MAJOR_BADGE_VALUE)
}

/// Badge color for the selected type.
pub fn type_badge() -> Color {
    hsv(0.73, MAJOR_BADGE_SATURATION, MAJOR_BADGE_VALUE)
}

/// Minor badge color for a member's access level.
pub fn access_badge(access: Access) -> Color {
    let hue = match access {
        Access::Public => 0.6,
        Access::Internal => 0.65,
        Access::Protected | Access::ProtectedInternal => 0.7,
        Access::Private | Access::PrivateProtected => 0.75,
    };
    hsv(hue, MINOR_BADGE_SATURATION, MINOR_BADGE_VALUE)
}

/// Minor badge color for static members.
pub fn static_badge() -> Color {
    hsv(0.05, MINOR_BADGE_SATURATION, MINOR_BADGE_VALUE)
}

/// Minor badge color for the member kind tag.
pub fn kind_badge() -> Color {
    hsv(0.1, MINOR_BADGE_SATURATION, MINOR_BADGE_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(hsv(0.0, 1.0, 1.0), Color::Rgb(255, 0, 0));
        assert_eq!(hsv(1.0 / 3.0, 1.0, 1.0), Color::Rgb(0, 255, 0));
        assert_eq!(hsv(2.0 / 3.0, 1.0, 1.0), Color::Rgb(0, 0, 255));
    }

    #[test]
    fn test_hsv_zero_saturation_is_gray() {
        assert_eq!(hsv(0.42, 0.0, 1.0), Color::Rgb(255, 255, 255));
        assert_eq!(hsv(0.42, 0.0, 0.5), Color::Rgb(128, 128, 128));
    }

    #[test]
    fn test_access_hues_are_distinct() {
        let colors = [
            access_badge(Access::Public),
            access_badge(Access::Internal),
            access_badge(Access::Protected),
            access_badge(Access::Private),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_combined_access_levels_share_base_hue() {
        assert_eq!(
            access_badge(Access::ProtectedInternal),
            access_badge(Access::Protected)
        );
        assert_eq!(
            access_badge(Access::PrivateProtected),
            access_badge(Access::Private)
        );
    }
}
