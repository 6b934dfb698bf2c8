use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::catalog::TierStatus;
use crate::model::{Action, Day};

/// Errors that can occur when reading actions or writing the tier board
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to open csv file: {0}")]
    Open(csv::Error),

    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: unrecognized action type '{action}'")]
    UnrecognizedType { line: usize, action: String },

    #[error("line {line}: {action} missing target")]
    MissingTarget { line: usize, action: String },

    #[error("failed to write csv: {0}")]
    Write(#[from] csv::Error),

    #[error("failed to flush csv writer: {0}")]
    Flush(#[from] io::Error),
}

#[derive(Debug, Deserialize)]
struct InputRow {
    r#type: String,
    day: Day,
    target: Option<String>,
}

#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    tier: &'a str,
    name: &'a str,
    required: u64,
    status: &'a str,
    can_upgrade: bool,
    points_to_go: u64,
    progress: u8,
}

/// Read member actions from a csv file
pub fn read_actions(
    path: impl AsRef<Path>,
) -> Result<impl Iterator<Item = Result<Action, CsvError>>, CsvError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(CsvError::Open)?;

    Ok(reader
        .into_deserialize::<InputRow>()
        .enumerate()
        .map(|(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| CsvError::Parse { line, source })?;
            let day = row.day;
            let target = row.target.unwrap_or_default();

            let action = match row.r#type.as_str() {
                "checkin" => Action::CheckIn { day },
                "upgrade" => Action::Upgrade { day, tier: target },
                "redeem" => Action::Redeem { day, reward: target },
                other => {
                    return Err(CsvError::UnrecognizedType {
                        line,
                        action: other.to_string(),
                    });
                }
            };

            if action.target() == Some("") {
                return Err(CsvError::MissingTarget {
                    line,
                    action: action.kind().to_string(),
                });
            }
            Ok(action)
        }))
}

/// Write the tier board in csv format, one row per tier in catalog order
pub fn write_board<'a>(
    writer: impl io::Write,
    board: impl IntoIterator<Item = &'a TierStatus<'a>>,
) -> Result<(), CsvError> {
    let mut writer = csv::Writer::from_writer(writer);

    for status in board {
        let row = OutputRow {
            tier: &status.tier.id,
            name: &status.tier.name,
            required: status.tier.required_points.get(),
            status: status.state.as_str(),
            can_upgrade: status.can_upgrade,
            points_to_go: status.points_to_go.get(),
            progress: status.progress,
        };
        writer.serialize(&row)?;
    }

    writer.flush()?;
    Ok(())
}
