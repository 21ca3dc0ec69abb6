/// Centralized vector-component naming utilities
///
/// Keeps the X/Y/Z component names consistent between axis labeling and
/// status messages.
/// Get the standard component name for a given index
///
/// # Arguments
/// * `index` - Component index (0=X, 1=Y, 2=Z)
///
/// # Returns
/// Static string slice with the component name
///
/// # Panics
/// Panics if index is greater than 2
#[allow(dead_code)]
pub fn component_name(index: usize) -> &'static str {
    match index {
        0 => "X",
        1 => "Y",
        2 => "Z",
        _ => panic!(
            "Invalid component index: {}. Expected 0 (X), 1 (Y), or 2 (Z)",
            index
        ),
    }
}

/// Get all component names as a static array
pub const COMPONENT_NAMES: [&str; 3] = ["X", "Y", "Z"];
