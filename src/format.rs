//! Column-order resolution from the picker's format string.
//!
//! ## Usage
//!
//! Parse a dash-separated format such as `"dd-mm-yyyy"` into the ordered list
//! of fields the picker should render.
use thiserror::Error;

/// Default column order when the host supplies no format.
pub const DEFAULT_FORMAT: &str = "dd-mm-yyyy";

/// Fallback field per position when a token is unrecognized.
const POSITIONAL_FALLBACK: [DateField; 3] = [DateField::Day, DateField::Month, DateField::Year];

/// One date or time field rendered as a picker column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    /// Day of the month (1-31).
    Day,
    /// Month of the year, rendered as a localized name.
    Month,
    /// Full calendar year.
    Year,
    /// Hour of the day (0-23).
    Hour,
    /// Minute of the hour (0-59).
    Minute,
}

/// Selects which column set the picker renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerMode {
    /// Day/month/year columns, ordered by the format string.
    #[default]
    Date,
    /// Hour and minute columns in that fixed order; the format is ignored.
    Time,
}

/// Failure to resolve a format string into a column list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The format has more than three dash-separated tokens.
    #[error("format {0:?} has more than three fields")]
    TooManyFields(String),
}

/// Resolves a date format string into an ordered list of fields.
///
/// Tokens are `"dd"`, `"mm"`, and `"yyyy"`, joined by `-`. An unrecognized
/// token is logged and replaced by the field conventional for its position
/// (day, month, year). Formats with more than three tokens are rejected
/// outright; the positional fallback only covers three columns.
pub fn parse_format(format: &str) -> Result<Vec<DateField>, FormatError> {
    let tokens: Vec<&str> = format.split('-').collect();
    if tokens.len() > POSITIONAL_FALLBACK.len() {
        return Err(FormatError::TooManyFields(format.to_string()));
    }

    Ok(tokens
        .iter()
        .enumerate()
        .map(|(position, token)| match *token {
            "dd" => DateField::Day,
            "mm" => DateField::Month,
            "yyyy" => DateField::Year,
            other => {
                tracing::warn!(token = other, format, "unrecognized date picker format token");
                POSITIONAL_FALLBACK[position]
            }
        })
        .collect())
}

/// Resolves the column list for a mode, falling back to the default order on
/// unusable formats.
pub fn resolve_columns(mode: PickerMode, format: &str) -> Vec<DateField> {
    match mode {
        PickerMode::Time => vec![DateField::Hour, DateField::Minute],
        PickerMode::Date => parse_format(format).unwrap_or_else(|error| {
            tracing::error!(%error, "unsupported date picker format, using default order");
            POSITIONAL_FALLBACK.to_vec()
        }),
    }
}
