//! Flat-file persistence for the fleet
//!
//! The store is read once at startup and written back on shutdown. Loading
//! is forgiving: a malformed line is skipped with a warning and a missing
//! file just means an empty marina. Saving is the opposite — if the data
//! file cannot be written the program has nowhere to put its records, so
//! the error propagates to the caller, which treats it as fatal.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::codec;
use crate::error::{MarinaError, MarinaResult};
use crate::fleet::Fleet;

/// Outcome of loading the data file
#[derive(Debug)]
pub struct LoadReport {
    /// The populated fleet
    pub fleet: Fleet,
    /// One message per skipped or suspicious line
    pub warnings: Vec<String>,
    /// True if the file was missing or unreadable (fleet starts empty)
    pub file_missing: bool,
}

/// Load the fleet from the data file
///
/// Each line is parsed by the codec. Malformed lines are skipped with a
/// warning; lines with an unrecognized category are kept as Unknown records
/// with a warning. Loading stops silently once the fleet is full. A missing
/// or unopenable file yields an empty fleet, not an error.
pub fn load_fleet<P: AsRef<Path>>(path: P, capacity: usize) -> MarinaResult<LoadReport> {
    let path = path.as_ref();
    let mut report = LoadReport {
        fleet: Fleet::with_capacity(capacity),
        warnings: Vec::new(),
        file_missing: false,
    };

    if !path.exists() {
        report.file_missing = true;
        return Ok(report);
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            report.file_missing = true;
            report
                .warnings
                .push(format!("could not open {}: {}", path.display(), err));
            return Ok(report);
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(BufReader::new(file));

    for (index, result) in reader.records().enumerate() {
        if report.fleet.is_full() {
            // remaining input is silently truncated
            break;
        }
        let line = index + 1;

        let record = match result {
            Ok(record) => record,
            Err(err) => {
                report.warnings.push(format!("line {}: {}", line, err));
                continue;
            }
        };

        match codec::parse_record(&record) {
            Ok(boat) => {
                if !boat.category().is_known() {
                    report.warnings.push(format!(
                        "line {}: unrecognized storage category, record kept as 'unknown'",
                        line
                    ));
                }
                report.fleet.insert(boat)?;
            }
            Err(err) => {
                report
                    .warnings
                    .push(format!("line {}: {} (line skipped)", line, err));
            }
        }
    }

    Ok(report)
}

/// Save the fleet to the data file, one record line per boat in store order
///
/// Writes to a temp file in the same directory and renames it into place,
/// so the previous data file survives a failed write. Quoting is disabled:
/// the on-disk format has no escaping.
pub fn save_fleet<P: AsRef<Path>>(path: P, fleet: &Fleet) -> MarinaResult<()> {
    let path = path.as_ref();
    let temp_path = path.with_extension("tmp");

    let file = File::create(&temp_path)
        .map_err(|e| MarinaError::Io(format!("failed to create {}: {}", temp_path.display(), e)))?;

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(BufWriter::new(file));

    for boat in fleet.iter() {
        writer
            .write_record(codec::format_fields(boat))
            .map_err(|e| MarinaError::Io(format!("failed to write record: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| MarinaError::Io(format!("failed to flush data: {}", e)))?;

    let buf = writer
        .into_inner()
        .map_err(|e| MarinaError::Io(format!("failed to finish writing: {}", e)))?;
    let file = buf
        .into_inner()
        .map_err(|e| MarinaError::Io(format!("failed to finish writing: {}", e)))?;
    file.sync_all()
        .map_err(|e| MarinaError::Io(format!("failed to sync data: {}", e)))?;
    drop(file);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        MarinaError::Io(format!("failed to replace {}: {}", path.display(), e))
    })?;

    Ok(())
}
