use crate::errors::AppResult;
use crate::models::shift::Shift;

/// Write the shifts as formatted JSON, in the shift-unit schema.
pub fn write_json(path: &str, shifts: &[Shift]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(shifts)?;
    std::fs::write(path, json)?;
    Ok(())
}
