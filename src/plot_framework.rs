// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, Cross, IntoDynElement, Text, TriangleMarker};
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, Palette, Palette99, RGBColor};

use std::error::Error;
use std::ops::Range;

use crate::component_names::COMPONENT_NAMES;
use crate::constants::{
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND, FONT_SIZE_MAIN_TITLE,
    FONT_SIZE_MESSAGE, LEGEND_MARKER_OFFSET_PX, LINE_WIDTH_MARKER, MARKER_SIZE, PLOT_HEIGHT,
    PLOT_WIDTH, PROJECTION_PITCH, PROJECTION_SCALE, PROJECTION_YAW,
};
use crate::data_input::pose_data::Vec3;

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Marker glyph used for a panel's points, one shape per panel so the three
/// subplots stay distinguishable at a glance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Triangle,
    Cross,
}

/// One 3D scatter subplot: a title, a marker shape, and one point per
/// record. `ranges` are padded component-wise bounds in data order (X, Y, Z).
#[derive(Clone)]
pub struct Scatter3dPanel {
    pub title: String,
    pub marker: MarkerShape,
    pub points: Vec<Vec3>,
    pub ranges: [Range<f64>; 3],
}

/// Stable per-record color, so the same record keeps its color in every
/// panel of the figure.
pub fn record_color(record_index: usize) -> RGBColor {
    let color = Palette99::pick(record_index).to_rgba();
    RGBColor(color.0, color.1, color.2)
}

/// Draw a "Data Unavailable" message on a panel area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    panel_title: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    // Constants for text rendering
    const CHAR_WIDTH_RATIO: f32 = 0.6; // Approximate character width relative to font size
    const LINE_HEIGHT_SPACING: i32 = 4; // Additional spacing between lines

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (
        (x_range.end - x_range.start) as u32,
        (y_range.end - y_range.start) as u32,
    );
    let message = format!("{panel_title} Data Unavailable:\n{reason}");

    // Estimate text dimensions for better centering
    let estimated_char_width = (FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_line_height = FONT_SIZE_MESSAGE + LINE_HEIGHT_SPACING;

    let lines: Vec<&str> = message.split('\n').collect();
    let max_line_length = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let estimated_text_width = max_line_length.saturating_mul(estimated_char_width as usize) as i32;
    let estimated_text_height = lines.len().saturating_mul(estimated_line_height as usize) as i32;

    let center_x = width as i32 / 2 - estimated_text_width / 2;
    let center_y = height as i32 / 2 - estimated_text_height / 2;

    let text_style = ("sans-serif", FONT_SIZE_MESSAGE).into_font().color(&RED);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

/// Renders a single figure containing one row of 3D scatter panels.
///
/// Every panel must carry exactly one point per label; a mismatch is an
/// error and nothing is drawn. A panel with no points draws a placeholder
/// message instead of a chart, so an empty dataset still produces the
/// figure without error.
pub fn draw_scatter3d_row(
    output_filename: &str,
    root_name: &str,
    labels: &[&str],
    panels: &[Scatter3dPanel],
) -> Result<(), Box<dyn Error>> {
    for panel in panels {
        if panel.points.len() != labels.len() {
            return Err(format!(
                "Panel '{}' has {} points for {} labels",
                panel.title,
                panel.points.len(),
                labels.len()
            )
            .into());
        }
    }

    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE)
            .into_font()
            .color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(40, 5, 5, 5);
    let sub_plot_areas = margined_root_area.split_evenly((1, panels.len()));
    let mut any_panel_plotted = false;

    for (panel, area) in panels.iter().zip(sub_plot_areas.iter()) {
        if panel.points.is_empty() {
            draw_unavailable_message(area, &panel.title, "No pose records")?;
        } else {
            draw_single_scatter3d_chart(area, panel, labels)?;
            any_panel_plotted = true;
        }
    }

    root_area.present()?;
    if any_panel_plotted {
        println!("  Scatter figure saved as '{output_filename}'.");
    } else {
        println!("  Scatter figure '{output_filename}' contains only placeholder panels: no records to plot.");
    }
    Ok(())
}

/// Draws one 3D scatter chart. The vertical chart axis carries the Z
/// component so the figure reads like the usual pose convention (Z up);
/// the depth axis carries Y.
fn draw_single_scatter3d_chart(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    panel: &Scatter3dPanel,
    labels: &[&str],
) -> Result<(), Box<dyn Error>> {
    let [x_range, y_range, z_range] = panel.ranges.clone();

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(10)
        .build_cartesian_3d(x_range.clone(), z_range.clone(), y_range.clone())?;

    chart.with_projection(|mut pb| {
        pb.pitch = PROJECTION_PITCH;
        pb.yaw = PROJECTION_YAW;
        pb.scale = PROJECTION_SCALE;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .x_labels(4)
        .y_labels(4)
        .z_labels(4)
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    for (record_index, (point, label)) in panel.points.iter().zip(labels.iter()).enumerate() {
        let color = record_color(record_index);
        let coord = (point[0], point[2], point[1]);
        let marker = panel.marker;
        let series = match marker {
            MarkerShape::Circle => chart.draw_series(std::iter::once(Circle::new(
                coord,
                MARKER_SIZE,
                color.filled(),
            )))?,
            MarkerShape::Triangle => chart.draw_series(std::iter::once(TriangleMarker::new(
                coord,
                MARKER_SIZE,
                color.filled(),
            )))?,
            MarkerShape::Cross => chart.draw_series(std::iter::once(Cross::new(
                coord,
                MARKER_SIZE,
                color.stroke_width(LINE_WIDTH_MARKER),
            )))?,
        };
        series.label(*label).legend(move |(x, y)| {
            let anchor = (x + LEGEND_MARKER_OFFSET_PX, y);
            match marker {
                MarkerShape::Circle => {
                    Circle::new(anchor, MARKER_SIZE, color.filled()).into_dyn()
                }
                MarkerShape::Triangle => {
                    TriangleMarker::new(anchor, MARKER_SIZE, color.filled()).into_dyn()
                }
                MarkerShape::Cross => {
                    Cross::new(anchor, MARKER_SIZE, color.stroke_width(LINE_WIDTH_MARKER))
                        .into_dyn()
                }
            }
        });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", FONT_SIZE_LEGEND))
        .draw()?;

    // Component names at the positive end of each axis. backend_coord gives
    // absolute pixels; area.draw expects area-relative ones.
    let area_offset = area.get_base_pixel();
    let label_anchors = [
        (COMPONENT_NAMES[0], (x_range.end, z_range.start, y_range.start)),
        (COMPONENT_NAMES[1], (x_range.start, z_range.start, y_range.end)),
        (COMPONENT_NAMES[2], (x_range.start, z_range.end, y_range.start)),
    ];
    for (name, anchor) in label_anchors {
        let (px, py) = chart.plotting_area().map_coordinate(&anchor);
        area.draw(&Text::new(
            name,
            (px - area_offset.0 + 6, py - area_offset.1 - 6),
            ("sans-serif", FONT_SIZE_AXIS_LABEL)
                .into_font()
                .color(&BLACK),
        ))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_range_pads_by_fifteen_percent() {
        let (min, max) = calculate_range(0.0, 10.0);
        assert!((min - -1.5).abs() < 1e-9);
        assert!((max - 11.5).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_range_degenerate_uses_fixed_padding() {
        let (min, max) = calculate_range(2.0, 2.0);
        assert!((min - 1.5).abs() < 1e-9);
        assert!((max - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_range_swapped_bounds() {
        let (min, max) = calculate_range(10.0, 0.0);
        assert!(min < 0.0);
        assert!(max > 10.0);
    }

    #[test]
    fn test_record_color_is_stable() {
        let (a, b) = (record_color(3), record_color(3));
        assert_eq!((a.0, a.1, a.2), (b.0, b.1, b.2));
        let (c, d) = (record_color(0), record_color(1));
        assert_ne!((c.0, c.1, c.2), (d.0, d.1, d.2));
    }
}

// src/plot_framework.rs
