/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 15/10/26
******************************************************************************/

//! Rendering of command results as box tables, CSV or JSON.

use crate::error::AppError;
use prettytable::{Cell, Row, Table, format};
use serde::Serialize;

/// Placeholder for a missing value
pub const EMPTY_CELL: &str = "-";

/// How results are written to standard output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Box drawn table
    #[default]
    Table,
    /// Comma separated values with a header line
    Csv,
    /// Pretty printed JSON of the typed rows
    Json,
}

impl OutputFormat {
    /// Format selected by the global flags, CSV wins over JSON
    #[must_use]
    pub fn from_flags(csv: bool, json: bool) -> Self {
        if csv {
            OutputFormat::Csv
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }
}

/// Row type with a fixed set of columns
pub trait Tabular {
    /// Column titles
    fn headers() -> Vec<&'static str>;

    /// Cells of this row, in the order of [`Tabular::headers`]
    fn row(&self) -> Vec<String>;
}

/// Result printed as a single line in table mode
pub trait Summary: Tabular {
    /// Line printed instead of a table
    fn summary_line(&self) -> String;
}

/// `value` with `decimals` fraction digits
pub fn fmt_num(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Like [`fmt_num`], [`EMPTY_CELL`] for missing values
pub fn fmt_opt(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(|| EMPTY_CELL.to_string(), |v| fmt_num(v, decimals))
}

/// Renders preformatted cells as table or CSV, or `json` as JSON
pub fn render<J: Serialize + ?Sized>(
    headers: &[&str],
    rows: &[Vec<String>],
    json: &J,
    format: OutputFormat,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Table => Ok(to_table(headers, rows)),
        OutputFormat::Csv => to_csv(headers, rows),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(json)?),
    }
}

/// Renders typed rows
pub fn render_rows<T: Tabular + Serialize>(
    rows: &[T],
    format: OutputFormat,
) -> Result<String, AppError> {
    let cells: Vec<Vec<String>> = rows.iter().map(T::row).collect();
    render(&T::headers(), &cells, rows, format)
}

/// Renders typed rows, one summary line each in table mode
pub fn render_summaries<T: Summary + Serialize>(
    rows: &[T],
    format: OutputFormat,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Table => Ok(rows
            .iter()
            .map(T::summary_line)
            .collect::<Vec<_>>()
            .join("\n")),
        _ => render_rows(rows, format),
    }
}

fn to_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(Row::new(headers.iter().map(|h| Cell::new(h)).collect()));

    for row in rows {
        table.add_row(Row::new(
            row.iter()
                .map(|value| Cell::new(value).style_spec("r"))
                .collect(),
        ));
    }

    table.to_string().trim_end().to_string()
}

fn to_csv(headers: &[&str], rows: &[Vec<String>]) -> Result<String, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).trim_end().to_string())
}
