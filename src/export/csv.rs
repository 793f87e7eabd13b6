use crate::errors::AppResult;
use crate::models::shift::Shift;
use crate::utils::time::TIME_FMT;
use csv::Writer;

/// Write the shifts as CSV rows. Open shifts get an empty end column.
pub fn write_csv(path: &str, shifts: &[Shift]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["date", "start", "end", "hours", "notes"])?;

    for shift in shifts {
        wtr.write_record(&[
            shift.start_time.format("%Y-%m-%d").to_string(),
            shift.start_time.format(TIME_FMT).to_string(),
            shift
                .end_time
                .map(|end| end.format(TIME_FMT).to_string())
                .unwrap_or_default(),
            format!("{:.2}", shift.hours),
            shift.notes.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
