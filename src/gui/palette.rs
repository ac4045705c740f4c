//! Legend colors. Same index, same color, on every frame.

use eframe::egui::Color32;

use crate::core::{
    ProfileId,
    Technique,
};

/// The classic ten-color categorical scheme.
const CATEGORY10: [Color32; 10] = [
    Color32::from_rgb(0x1f, 0x77, 0xb4),
    Color32::from_rgb(0xff, 0x7f, 0x0e),
    Color32::from_rgb(0x2c, 0xa0, 0x2c),
    Color32::from_rgb(0xd6, 0x27, 0x28),
    Color32::from_rgb(0x94, 0x67, 0xbd),
    Color32::from_rgb(0x8c, 0x56, 0x4b),
    Color32::from_rgb(0xe3, 0x77, 0xc2),
    Color32::from_rgb(0x7f, 0x7f, 0x7f),
    Color32::from_rgb(0xbc, 0xbd, 0x22),
    Color32::from_rgb(0x17, 0xbe, 0xcf),
];

const DARKER: f64 = 0.7;

/// Amount pills are darkened by so white text stays readable.
pub const PILL_DARKENING: f64 = 0.5;

/// Places the profile on a rainbow spanning `[0, profile_count]`. The rainbow
/// is cyclic, which is why the domain ends one past the last profile.
pub fn profile_color(profile: ProfileId, profile_count: usize) -> Color32 {
    let t = if profile_count == 0 { 0.0 } else { profile.index() as f64 / profile_count as f64 };
    rainbow(t)
}

pub fn technique_color(technique: Technique) -> Color32 {
    CATEGORY10[technique.index() % CATEGORY10.len()]
}

pub fn darker(color: Color32, amount: f64) -> Color32 {
    let k = DARKER.powf(amount);
    let scale = |channel: u8| channel_u8(channel as f64 * k);
    Color32::from_rgb(scale(color.r()), scale(color.g()), scale(color.b()))
}

/// Cubehelix rainbow sweep, matching d3's `interpolateRainbow`.
pub fn rainbow(t: f64) -> Color32 {
    let t = if !(0.0..=1.0).contains(&t) { t - t.floor() } else { t };
    let ts = (t - 0.5).abs();
    cubehelix(360.0 * t - 100.0, 1.5 - 1.5 * ts, 0.8 - 0.9 * ts)
}

fn cubehelix(hue: f64, saturation: f64, lightness: f64) -> Color32 {
    const A: f64 = -0.14861;
    const B: f64 = 1.78277;
    const C: f64 = -0.29227;
    const D: f64 = -0.90649;
    const E: f64 = 1.97294;

    let h = (hue + 120.0).to_radians();
    let a = saturation * lightness * (1.0 - lightness);
    let (sinh, cosh) = h.sin_cos();

    Color32::from_rgb(
        channel_u8(255.0 * (lightness + a * (A * cosh + B * sinh))),
        channel_u8(255.0 * (lightness + a * (C * cosh + D * sinh))),
        channel_u8(255.0 * (lightness + a * (E * cosh))),
    )
}

fn channel_u8(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::roster::tests::sample_roster;

    #[test]
    fn test_rainbow_known_values() {
        assert_eq!(rainbow(0.0), Color32::from_rgb(110, 64, 170));
        assert_eq!(rainbow(0.5), Color32::from_rgb(175, 240, 91));
        assert_eq!(rainbow(1.0), rainbow(0.0));
    }

    #[test]
    fn test_profile_color_is_stable() {
        let roster = sample_roster();
        for profile in roster.profile_ids() {
            let first = profile_color(profile, roster.profiles.len());
            let second = profile_color(profile, roster.profiles.len());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_profile_colors_are_distinct() {
        let roster = sample_roster();
        let colors: Vec<_> =
            roster.profile_ids().map(|id| profile_color(id, roster.profiles.len())).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn test_technique_colors() {
        assert_eq!(
            technique_color(Technique::DigitalTwoDimensional),
            Color32::from_rgb(0x1f, 0x77, 0xb4)
        );
        assert_eq!(technique_color(Technique::Free), Color32::from_rgb(0x8c, 0x56, 0x4b));
    }

    #[test]
    fn test_darker() {
        assert_eq!(
            darker(Color32::from_rgb(110, 64, 170), PILL_DARKENING),
            Color32::from_rgb(92, 54, 142)
        );
        assert_eq!(
            darker(Color32::from_rgb(0x1f, 0x77, 0xb4), PILL_DARKENING),
            Color32::from_rgb(26, 100, 151)
        );
        assert_eq!(darker(Color32::WHITE, 0.0), Color32::WHITE);
    }
}
