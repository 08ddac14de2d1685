use thiserror::Error;

/// The operator typed something that is not a speed.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("invalid speed reading {input:?}: please enter a valid speed (e.g. 85 or 90.5)")]
pub struct InvalidSpeedInput {
    pub input: String,
}

/// Parses a speed reading, accepting either `.` or `,` as the decimal separator.
pub fn parse_speed(raw: &str) -> Result<f64, InvalidSpeedInput> {
    let normalized = raw.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(speed) if speed.is_finite() => Ok(speed),
        _ => Err(InvalidSpeedInput {
            input: raw.to_string(),
        }),
    }
}
