use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadarConfig {
    pub size: f64,
    pub center: f64,
    pub max_radius: f64,
    pub levels: usize,
    /// Distance of axis labels beyond `max_radius`.
    pub label_offset: f64,
}

pub const RADAR: RadarConfig = RadarConfig {
    size: 400.0,
    center: 200.0,
    max_radius: 150.0,
    levels: 5,
    label_offset: 25.0,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadarPoint {
    pub x: f64,
    pub y: f64,
}

/// Point on axis `index` of `total`, first axis pointing straight up.
pub fn axis_point(index: usize, total: usize, radius: f64, config: &RadarConfig) -> RadarPoint {
    let total = total.max(1) as f64;
    let angle = TAU * index as f64 / total - FRAC_PI_2;
    RadarPoint {
        x: config.center + radius * angle.cos(),
        y: config.center + radius * angle.sin(),
    }
}

pub fn level_radii(config: &RadarConfig) -> Vec<f64> {
    let levels = config.levels.max(1) as f64;
    (1..=config.levels)
        .map(|level| level as f64 * config.max_radius / levels)
        .collect()
}

pub fn value_radius(level: u8, config: &RadarConfig) -> f64 {
    f64::from(level.min(100)) / 100.0 * config.max_radius
}

pub fn value_points(levels: &[u8], config: &RadarConfig) -> Vec<RadarPoint> {
    levels
        .iter()
        .enumerate()
        .map(|(index, level)| axis_point(index, levels.len(), value_radius(*level, config), config))
        .collect()
}

pub fn label_points(total: usize, config: &RadarConfig) -> Vec<RadarPoint> {
    let radius = config.max_radius + config.label_offset;
    (0..total)
        .map(|index| axis_point(index, total, radius, config))
        .collect()
}

pub fn polygon_path(levels: &[u8], config: &RadarConfig) -> String {
    let points = value_points(levels, config);
    let mut path = String::new();
    for (index, point) in points.iter().enumerate() {
        let command = if index == 0 { "M" } else { " L" };
        let _ = write!(&mut path, "{command} {},{}", point.x, point.y);
    }
    if !path.is_empty() {
        path.push_str(" Z");
    }
    path
}

pub fn view_box(config: &RadarConfig) -> String {
    format!("0 0 {} {}", config.size, config.size)
}
