// src/constants.rs

// Figure dimensions. Three 3D panels side by side, roughly 3:1.
pub const PLOT_WIDTH: u32 = 1800;
pub const PLOT_HEIGHT: u32 = 640;

// Font sizes for all text elements in the figure.
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 12;
pub const FONT_SIZE_LEGEND: i32 = 12;
pub const FONT_SIZE_MESSAGE: i32 = 16;

// Marker metrics.
pub const MARKER_SIZE: i32 = 5;
pub const LINE_WIDTH_MARKER: u32 = 2;
pub const LEGEND_MARKER_OFFSET_PX: i32 = 10;

// 3D projection applied to every panel.
pub const PROJECTION_PITCH: f64 = 0.32;
pub const PROJECTION_YAW: f64 = 0.7;
pub const PROJECTION_SCALE: f64 = 0.85;

// Cap on skipped rows echoed in the console summary.
pub const MAX_SKIPPED_ROWS_REPORTED: usize = 20;

// src/constants.rs
