//! Result rendering as an aligned text table or JSON.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;

use crate::Result;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}. Supported: table, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// A result row that can be printed either way.
pub trait TableRow: Serialize {
    /// Column headers, in cell order
    fn headers() -> &'static [&'static str];

    /// Formatted cells, one per header
    fn cells(&self) -> Vec<String>;
}

/// Formats a rate, with `-` for a missing value.
pub fn fmt_rate(rate: Option<f64>) -> String {
    rate.map_or_else(|| "-".to_string(), |r| format!("{:.6}", r))
}

/// Formats a discount factor.
pub fn fmt_discount(df: f64) -> String {
    format!("{:.8}", df)
}

/// Writes `rows` to `out` in `format`.
pub fn write_rows<W, R>(out: &mut W, format: OutputFormat, rows: &[R]) -> Result<()>
where
    W: Write,
    R: TableRow,
{
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            let headers = R::headers();
            let cells: Vec<Vec<String>> = rows.iter().map(TableRow::cells).collect();

            let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
            for row in &cells {
                for (width, cell) in widths.iter_mut().zip(row) {
                    *width = (*width).max(cell.len());
                }
            }

            let header_line: Vec<String> = headers
                .iter()
                .zip(&widths)
                .map(|(h, &w)| format!("{:<w$}", h, w = w))
                .collect();
            writeln!(out, "{}", header_line.join("  ").trim_end())?;

            let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
            writeln!(out, "{}", rule.join("  "))?;

            for row in &cells {
                let line: Vec<String> = row
                    .iter()
                    .zip(&widths)
                    .map(|(c, &w)| format!("{:>w$}", c, w = w))
                    .collect();
                writeln!(out, "{}", line.join("  "))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        name: &'static str,
        rate: Option<f64>,
    }

    impl TableRow for Sample {
        fn headers() -> &'static [&'static str] {
            &["name", "rate"]
        }

        fn cells(&self) -> Vec<String> {
            vec![self.name.to_string(), fmt_rate(self.rate)]
        }
    }

    fn render(format: OutputFormat) -> String {
        let rows = [
            Sample {
                name: "a",
                rate: Some(0.0425),
            },
            Sample {
                name: "longer",
                rate: None,
            },
        ];
        let mut out = Vec::new();
        write_rows(&mut out, format, &rows).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(" table ".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_table_layout() {
        let text = render(OutputFormat::Table);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "name    rate");
        assert_eq!(lines[1], "------  --------");
        assert_eq!(lines[2], "     a  0.042500");
        assert_eq!(lines[3], "longer         -");
    }

    #[test]
    fn test_json_uses_null_for_missing() {
        let value: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(value[0]["name"], "a");
        assert_eq!(value[0]["rate"], 0.0425);
        assert!(value[1]["rate"].is_null());
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(fmt_discount(0.5), "0.50000000");
        assert_eq!(fmt_rate(Some(-0.001)), "-0.001000");
        assert_eq!(fmt_rate(None), "-");
    }
}
