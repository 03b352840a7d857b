//! Parsing of `WIDTHxHEIGHT` output resolution strings

use crate::frame::canvas::OutputBounds;
use crate::io::configuration::RESOLUTION_SEPARATOR;
use crate::io::error::{FractalError, Result, invalid_resolution};
use std::str::FromStr;

/// Parse a resolution such as `1200x900` into output bounds
///
/// # Errors
///
/// Returns `FractalError::InvalidResolution` if the string does not contain
/// exactly one separator or either side is not a non-negative integer
pub fn parse_resolution(value: &str) -> Result<OutputBounds> {
    let parts: Vec<&str> = value.split(RESOLUTION_SEPARATOR).collect();
    let [width, height] = parts.as_slice() else {
        return Err(invalid_resolution(
            &value,
            &format!("expected the format WIDTH{RESOLUTION_SEPARATOR}HEIGHT"),
        ));
    };

    let width = parse_dimension(value, "width", width)?;
    let height = parse_dimension(value, "height", height)?;
    Ok(OutputBounds::new(width, height))
}

fn parse_dimension(value: &str, axis: &str, part: &str) -> Result<u32> {
    part.parse::<u32>().map_err(|e| {
        invalid_resolution(&value, &format!("{axis} '{part}' is not an integer: {e}"))
    })
}

impl FromStr for OutputBounds {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self> {
        parse_resolution(s)
    }
}
