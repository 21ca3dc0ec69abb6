// src/main.rs

use std::env;
use std::error::Error;
use std::path::Path;

use pose_csv_render::constants::MAX_SKIPPED_ROWS_REPORTED;
use pose_csv_render::data_input::pose_parser::parse_pose_file;
use pose_csv_render::plot_functions::plot_pose_scatter::plot_pose_scatter;

fn main() -> Result<(), Box<dyn Error>> {
    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <input_file.csv>", args[0]);
        eprintln!("pose-csv-render {}", pose_csv_render::crate_version());
        std::process::exit(1);
    }
    let input_file = &args[1];
    let input_path = Path::new(input_file);
    let root_name = input_path.file_stem().unwrap_or_default().to_string_lossy();

    // --- Data Reading ---
    let data = parse_pose_file(input_path)?;

    if !data.skipped.is_empty() {
        println!("\n--- Skipped Rows ---");
        for skipped in data.skipped.iter().take(MAX_SKIPPED_ROWS_REPORTED) {
            println!(
                "  row {}: {} [{}]",
                skipped.row_number, skipped.reason, skipped.raw
            );
        }
        if data.skipped.len() > MAX_SKIPPED_ROWS_REPORTED {
            println!(
                "  ... and {} more",
                data.skipped.len() - MAX_SKIPPED_ROWS_REPORTED
            );
        }
    }

    // --- Figure Generation ---
    // An empty dataset still renders: the figure then carries placeholder
    // panels instead of charts.
    println!("\n--- Generating Pose Scatter Figure ---");
    plot_pose_scatter(&data, &root_name)?;

    Ok(())
}
