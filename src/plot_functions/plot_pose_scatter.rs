// src/plot_functions/plot_pose_scatter.rs

use std::error::Error;
use std::ops::Range;

use ndarray::Array1;
use ndarray_stats::QuantileExt; // Import QuantileExt for .min() and .max() on Array1

use crate::data_input::pose_data::{PoseDataSet, Vec3};
use crate::plot_framework::{calculate_range, draw_scatter3d_row, MarkerShape, Scatter3dPanel};

/// Generates the side-by-side Translation / Rotation / Euler Angles scatter
/// figure, one point per record, saved as `<root_name>_pose_scatter.png`.
pub fn plot_pose_scatter(data: &PoseDataSet, root_name: &str) -> Result<(), Box<dyn Error>> {
    let output_file = format!("{}_pose_scatter.png", root_name);
    let labels = data.labels();

    let panels = [
        build_panel("Translation Vectors", MarkerShape::Circle, data.translations()),
        build_panel("Rotation Vectors", MarkerShape::Triangle, data.rotations()),
        build_panel("Euler Angles", MarkerShape::Cross, data.euler_angles()),
    ];

    draw_scatter3d_row(&output_file, root_name, &labels, &panels)
}

fn build_panel(title: &str, marker: MarkerShape, points: Vec<Vec3>) -> Scatter3dPanel {
    let ranges = component_ranges(&points);
    Scatter3dPanel {
        title: title.to_string(),
        marker,
        points,
        ranges,
    }
}

/// Padded per-component bounds over all points, in data order (X, Y, Z).
fn component_ranges(points: &[Vec3]) -> [Range<f64>; 3] {
    std::array::from_fn(|component| {
        let values = Array1::from_iter(points.iter().map(|p| p[component]));
        let (low, high) = match (values.min(), values.max()) {
            (Ok(&low), Ok(&high)) => (low, high),
            // Empty panel (or values without a defined order); the fixed
            // padding below still yields a drawable range.
            _ => (0.0, 0.0),
        };
        let (low, high) = calculate_range(low, high);
        low..high
    })
}


// src/plot_functions/plot_pose_scatter.rs
