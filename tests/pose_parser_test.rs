// tests/pose_parser_test.rs

use std::fs;
use std::path::PathBuf;

/// Writes `contents` to a uniquely named CSV file in the system temp dir.
fn write_temp_csv(name: &str, contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "pose_csv_render_test_{}_{}.csv",
        name,
        std::process::id()
    ));
    fs::write(&path, contents).expect("failed to write temp CSV");
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use pose_csv_render::data_input::pose_data::RowError;
    use pose_csv_render::data_input::pose_parser::parse_pose_file;

    #[test]
    fn test_well_formed_file_yields_equal_length_sequences() {
        let path = write_temp_csv(
            "well_formed",
            "tx,ty,tz,rx,ry,rz,ex,ey,ez,filename\n\
             1.0,2.0,3.0,0.1,0.2,0.3,10,20,30,img1.png\n\
             4.0,5.0,6.0,0.4,0.5,0.6,40,50,60,img2.png\n\
             7.0,8.0,9.0,0.7,0.8,0.9,70,80,90,img3.png\n",
        );
        let data = parse_pose_file(&path).expect("parse should succeed");
        fs::remove_file(&path).ok();

        assert_eq!(data.len(), 3);
        assert_eq!(data.labels().len(), 3);
        assert_eq!(data.translations().len(), 3);
        assert_eq!(data.rotations().len(), 3);
        assert_eq!(data.euler_angles().len(), 3);
        assert!(data.skipped.is_empty());

        // File order is preserved.
        assert_eq!(data.labels(), vec!["img1.png", "img2.png", "img3.png"]);
        assert_eq!(data.translations()[2], [7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_malformed_row_is_skipped_and_recorded() {
        let path = write_temp_csv(
            "malformed_mix",
            "tx,ty,tz,rx,ry,rz,ex,ey,ez,filename\n\
             1.0,2.0,3.0,0.1,0.2,0.3,10,20,30,img1.png\n\
             bad,row\n",
        );
        let data = parse_pose_file(&path).expect("parse must not fail on bad rows");
        fs::remove_file(&path).ok();

        assert_eq!(data.len(), 1);
        assert_eq!(data.translations(), vec![[1.0, 2.0, 3.0]]);
        assert_eq!(data.rotations(), vec![[0.1, 0.2, 0.3]]);
        assert_eq!(data.euler_angles(), vec![[10.0, 20.0, 30.0]]);
        assert_eq!(data.labels(), vec!["img1.png"]);

        assert_eq!(data.skipped.len(), 1);
        assert_eq!(data.skipped[0].row_number, 2);
        assert_eq!(data.skipped[0].raw, "bad,row");
        assert_eq!(data.skipped[0].reason, RowError::TooFewFields { found: 2 });
    }

    #[test]
    fn test_non_numeric_field_is_recorded_and_reading_continues() {
        let path = write_temp_csv(
            "non_numeric",
            "tx,ty,tz,rx,ry,rz,ex,ey,ez,filename\n\
             1.0,2.0,3.0,0.1,abc,0.3,10,20,30,img1.png\n\
             4.0,5.0,6.0,0.4,0.5,0.6,40,50,60,img2.png\n",
        );
        let data = parse_pose_file(&path).expect("parse should succeed");
        fs::remove_file(&path).ok();

        assert_eq!(data.len(), 1);
        assert_eq!(data.labels(), vec!["img2.png"]);
        assert_eq!(data.skipped.len(), 1);
        assert_eq!(data.skipped[0].row_number, 1);
        assert_eq!(
            data.skipped[0].reason,
            RowError::InvalidNumber {
                column: 4,
                value: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_header_only_file_yields_empty_sequences() {
        let path = write_temp_csv(
            "header_only",
            "tx,ty,tz,rx,ry,rz,ex,ey,ez,filename\n",
        );
        let data = parse_pose_file(&path).expect("parse should succeed");
        fs::remove_file(&path).ok();

        assert!(data.is_empty());
        assert!(data.labels().is_empty());
        assert!(data.translations().is_empty());
        assert!(data.rotations().is_empty());
        assert!(data.euler_angles().is_empty());
        assert!(data.skipped.is_empty());
    }

    #[test]
    fn test_positional_association_survives_interleaved_bad_rows() {
        let path = write_temp_csv(
            "interleaved",
            "tx,ty,tz,rx,ry,rz,ex,ey,ez,filename\n\
             1.0,2.0,3.0,0.1,0.2,0.3,10,20,30,first.png\n\
             nope\n\
             4.0,5.0,6.0,0.4,0.5,0.6,40,50,60,second.png\n\
             1,2,3,4,oops,6,7,8,9,broken.png\n\
             7.0,8.0,9.0,0.7,0.8,0.9,70,80,90,third.png\n",
        );
        let data = parse_pose_file(&path).expect("parse should succeed");
        fs::remove_file(&path).ok();

        // Sequences stay aligned: labels[i] belongs to the same source row
        // as translations[i] / rotations[i] / euler_angles[i].
        assert_eq!(data.labels(), vec!["first.png", "second.png", "third.png"]);
        assert_eq!(data.translations()[1], [4.0, 5.0, 6.0]);
        assert_eq!(data.rotations()[1], [0.4, 0.5, 0.6]);
        assert_eq!(data.euler_angles()[2], [70.0, 80.0, 90.0]);

        let skipped_rows: Vec<usize> = data.skipped.iter().map(|s| s.row_number).collect();
        assert_eq!(skipped_rows, vec![2, 4]);
    }

    #[test]
    fn test_label_is_last_field_of_wider_rows() {
        let path = write_temp_csv(
            "wide_rows",
            "tx,ty,tz,rx,ry,rz,ex,ey,ez,score,note,filename\n\
             1,2,3,4,5,6,7,8,9,0.99,good,wide.png\n",
        );
        let data = parse_pose_file(&path).expect("parse should succeed");
        fs::remove_file(&path).ok();

        assert_eq!(data.labels(), vec!["wide.png"]);
        assert_eq!(data.euler_angles(), vec![[7.0, 8.0, 9.0]]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut path = std::env::temp_dir();
        path.push("pose_csv_render_test_does_not_exist.csv");
        assert!(parse_pose_file(&path).is_err());
    }
}
