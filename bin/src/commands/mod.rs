//! CLI command implementations.

pub(crate) mod roi;
pub(crate) mod tables;
pub(crate) mod tam;

/// Parses a numeric flag, rejecting `inf` and `NaN`.
pub(crate) fn finite_number(arg: &str) -> Result<f64, String> {
    let value: f64 = arg.trim().parse().map_err(|_| format!("'{arg}' is not a number"))?;
    if !value.is_finite() {
        return Err(format!("'{arg}' is not a finite number"));
    }
    Ok(value)
}
