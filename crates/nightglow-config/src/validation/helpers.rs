//! Shared range-validation helpers used by all domain validators.

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (float). NaN fails.
pub(crate) fn validate_range_f32(
    errors: &mut Vec<String>,
    name: &str,
    value: f32,
    min: f32,
    max: f32,
) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error unless every component of `value` is strictly positive.
pub(crate) fn validate_positive3(errors: &mut Vec<String>, name: &str, value: [f32; 3]) {
    if value.iter().any(|v| !(*v > 0.0)) {
        errors.push(format!("{name} = {value:?} must be positive on every axis"));
    }
}
