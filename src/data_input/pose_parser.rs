// src/data_input/pose_parser.rs

use csv::ReaderBuilder;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::data_input::pose_data::{
    PoseDataSet, PoseRecord, RowError, SkippedRow, Vec3, MIN_FIELDS,
};

/// Parses the pose CSV file into records plus the list of skipped rows.
///
/// The first row is a header and is discarded. Each data row must carry at
/// least nine numeric fields (translation 0-2, rotation 3-5, Euler angles
/// 6-8) followed by a label in the last field, whatever the total row width.
/// Rows that do not are skipped, warned about on stderr, and recorded in
/// `PoseDataSet::skipped` - never fatal. Only opening or reading the file
/// itself returns an error.
pub fn parse_pose_file(input_file_path: &Path) -> Result<PoseDataSet, Box<dyn Error>> {
    let mut data = PoseDataSet::default();

    println!("Reading data rows...");
    {
        let file = File::open(input_file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(BufReader::new(file));

        for (row_index, result) in reader.records().enumerate() {
            let row_number = row_index + 1;
            match result {
                Ok(record) => match parse_record(&record) {
                    Ok(pose) => data.records.push(pose),
                    Err(reason) => {
                        let raw = record.iter().collect::<Vec<_>>().join(",");
                        eprintln!("Warning: Skipping row {}: {} [{}]", row_number, reason, raw);
                        data.skipped.push(SkippedRow {
                            row_number,
                            raw,
                            reason,
                        });
                    }
                },
                Err(e) => {
                    eprintln!("Warning: Skipping row {} due to CSV read error: {}", row_number, e);
                    data.skipped.push(SkippedRow {
                        row_number,
                        raw: String::new(),
                        reason: RowError::Csv(e.to_string()),
                    });
                }
            }
        }
    } // File reader is dropped here

    println!(
        "Finished reading {} data rows ({} skipped).",
        data.records.len(),
        data.skipped.len()
    );

    Ok(data)
}

/// A row becomes a record only when all nine floats parse, so the four
/// output sequences can never drift out of step. The label is the last
/// field regardless of total row width.
fn parse_record(record: &csv::StringRecord) -> Result<PoseRecord, RowError> {
    if record.len() < MIN_FIELDS {
        return Err(RowError::TooFewFields {
            found: record.len(),
        });
    }

    let parse_vec3 = |start: usize| -> Result<Vec3, RowError> {
        let mut out = [0.0; 3];
        for (offset, slot) in out.iter_mut().enumerate() {
            let column = start + offset;
            let value = record.get(column).unwrap_or("");
            *slot = value.parse::<f64>().map_err(|_| RowError::InvalidNumber {
                column,
                value: value.to_string(),
            })?;
        }
        Ok(out)
    };

    let translation = parse_vec3(0)?;
    let rotation = parse_vec3(3)?;
    let euler_angles = parse_vec3(6)?;
    let label = record.get(record.len() - 1).unwrap_or("").to_string();

    Ok(PoseRecord {
        label,
        translation,
        rotation,
        euler_angles,
    })
}


// src/data_input/pose_parser.rs
