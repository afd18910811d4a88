// Tuning constants for the particle background. Defaults reproduce the look of
// the team site: 80 cyan dots drifting slowly, joined when closer than 100px.

use crate::color::Color;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    // Per-axis speed is sampled from [-max_speed, max_speed), in px per frame
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub min_opacity: f64,
    pub max_opacity: f64,
    // Pairs closer than this get a connecting line
    pub link_distance: f64,
    // Line alpha for two particles at the same spot, fades to 0 at link_distance
    pub max_link_alpha: f64,
    pub line_width: f64,
    pub color: Color,
}

impl FieldConfig {
    pub const PARTICLE_COUNT: usize = 80;
    pub const ACCENT_COLOR: u32 = 0x00d9ffff;
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: FieldConfig::PARTICLE_COUNT,
            max_speed: 0.25,
            min_radius: 0.5,
            max_radius: 2.5,
            min_opacity: 0.2,
            max_opacity: 0.7,
            link_distance: 100.0,
            max_link_alpha: 0.2,
            line_width: 0.5,
            color: Color::from_u32(FieldConfig::ACCENT_COLOR),
        }
    }
}
