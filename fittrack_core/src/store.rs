//! Flat-file persistence for the roster.
//!
//! Each record occupies exactly nine lines, one field per line:
//! name, weight, height, age, max bench, max squat, max deadlift,
//! current calories, diet type. No header, delimiter, or record count.
//! Derived values (BMI, recommended calories) are never written, and a
//! load does not recompute them; a freshly loaded record shows them at
//! their zero defaults until an operation touches it.

use crate::{Result, Roster, UserRecord};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// File name of the persisted roster inside the data directory
pub const USER_DATA_FILE: &str = "user_data.txt";

/// Overwrite the persisted file with every record in insertion order.
///
/// Single-shot open/write/close; no locking, no atomic rename. Durability
/// is explicit save (or exit) only.
pub fn save_all(path: &Path, roster: &Roster) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for record in roster.records() {
        write_record(&mut writer, record)?;
    }
    writer.flush()?;

    tracing::debug!("Saved {} users to {:?}", roster.len(), path);
    Ok(())
}

fn write_record<W: Write>(writer: &mut W, record: &UserRecord) -> std::io::Result<()> {
    writeln!(writer, "{}", record.name)?;
    writeln!(writer, "{}", record.weight)?;
    writeln!(writer, "{}", record.height)?;
    writeln!(writer, "{}", record.age)?;
    writeln!(writer, "{}", record.max_bench)?;
    writeln!(writer, "{}", record.max_squat)?;
    writeln!(writer, "{}", record.max_deadlift)?;
    writeln!(writer, "{}", record.current_calories)?;
    writeln!(writer, "{}", record.diet_type)?;
    Ok(())
}

/// Read the persisted file back into a roster.
///
/// A missing or unreadable file yields an empty roster. Records are read
/// until input is exhausted or a name line comes back empty (treated as
/// end-of-data, not as a malformed record). A trailing partial record
/// keeps zero defaults for its absent fields.
pub fn load_all(path: &Path) -> Result<Roster> {
    if !path.exists() {
        tracing::info!(
            "No user data file at {:?}, starting with an empty roster",
            path
        );
        return Ok(Roster::new());
    }

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            tracing::warn!(
                "Unable to open user data file {:?}: {}. Starting with an empty roster.",
                path,
                e
            );
            return Ok(Roster::new());
        }
    };

    let mut lines = BufReader::new(file).lines();
    let mut roster = Roster::new();
    while let Some(record) = read_record(&mut lines) {
        roster.add(record);
    }

    tracing::debug!("Loaded {} users from {:?}", roster.len(), path);
    Ok(roster)
}

fn read_record<I>(lines: &mut I) -> Option<UserRecord>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    let name = next_line(lines)?;
    if name.is_empty() {
        return None;
    }

    let weight = parse_or_default(next_line(lines));
    let height = next_line(lines).unwrap_or_default();
    let age = parse_or_default(next_line(lines));
    let max_bench = parse_or_default(next_line(lines));
    let max_squat = parse_or_default(next_line(lines));
    let max_deadlift = parse_or_default(next_line(lines));
    let current_calories = parse_or_default(next_line(lines));
    let diet_type = next_line(lines).unwrap_or_default();

    Some(UserRecord {
        name,
        weight,
        height,
        age,
        max_bench,
        max_squat,
        max_deadlift,
        current_calories,
        diet_type,
        ..Default::default()
    })
}

fn next_line<I>(lines: &mut I) -> Option<String>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    lines.next().and_then(|line| line.ok())
}

fn parse_or_default<T>(line: Option<String>) -> T
where
    T: FromStr + Default,
{
    line.and_then(|s| s.trim().parse().ok()).unwrap_or_default()
}
