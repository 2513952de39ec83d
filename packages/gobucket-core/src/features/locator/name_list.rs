//! Function name list validation

use crate::shared::models::{BucketError, Result};

/// Flatten comma-separated name groups into one ordered list.
///
/// Surrounding whitespace is trimmed, so whitespace-only tokens count as
/// empty. Empty tokens are dropped. Order is
/// first group first, then left to right within a group. An empty result is
/// a usage error; terminating the process is left to the caller.
pub fn validate_names<S: AsRef<str>>(groups: &[S]) -> Result<Vec<String>> {
    let names: Vec<String> = groups
        .iter()
        .flat_map(|group| group.as_ref().split(','))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    if names.is_empty() {
        return Err(BucketError::usage("no functions given"));
    }
    Ok(names)
}
