use super::domain::FieldReadings;
use std::io::Read;
use std::path::Path;

/// Failure reading a CSV batch of field readings.
#[derive(Debug, thiserror::Error)]
pub enum BatchImportError {
    #[error("failed to read readings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid readings CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads a CSV whose header row uses the [`FieldReadings`] field names.
/// Column order is free; labels are trimmed.
pub fn read_readings<R: Read>(reader: R) -> Result<Vec<FieldReadings>, BatchImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut readings = Vec::new();
    for record in csv_reader.deserialize::<FieldReadings>() {
        readings.push(record?);
    }
    Ok(readings)
}

pub fn read_readings_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<FieldReadings>, BatchImportError> {
    let file = std::fs::File::open(path)?;
    read_readings(file)
}
