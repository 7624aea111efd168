use std::collections::HashMap;

/// Builds a fake process environment from key-value pairs.
///
/// # Arguments
/// - `pairs` - Variables to define, in `(key, value)` form
///
/// # Returns
/// - Map containing every pair; later duplicates overwrite earlier ones
pub fn env_vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
