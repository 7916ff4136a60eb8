use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::error::{ConvertError, ReportError};
use crate::format;
use crate::registry::UnitRegistry;
use crate::result::ConversionResult;

const RULE: &str = "--------------------------------------";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Plain-text conversion report, as offered for download by front ends.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub category: &'static str,
    pub category_name: &'static str,
    pub input: String,
    pub from_unit: &'static str,
    pub from_label: &'static str,
    pub to_unit: &'static str,
    pub to_label: &'static str,
    pub result: String,
    pub formula: Vec<String>,
    pub steps: Vec<String>,
}

impl Report {
    pub fn new(result: &ConversionResult, registry: &UnitRegistry) -> Result<Self, ConvertError> {
        let def = registry.get_category(result.category)?;
        Ok(Self {
            category: result.category,
            category_name: def.name,
            input: format::number(result.input),
            from_unit: result.from_unit,
            from_label: result.from_label,
            to_unit: result.to_unit,
            to_label: result.to_label,
            result: format!("{} {}", result.formatted_value(), result.to_label),
            formula: result.formula_lines(),
            steps: result.derivation_steps.clone(),
        })
    }

    /// `Conversion_length_2km_to_cm.txt`
    pub fn file_name(&self) -> String {
        format!(
            "Conversion_{}_{}{}_to_{}.txt",
            self.category, self.input, self.from_unit, self.to_unit
        )
    }

    /// Report text stamped with `exported_on`.
    pub fn render(&self, exported_on: NaiveDateTime) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "Unit Conversion Report");
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "Conversion Type: {}", self.category_name);
        let _ = writeln!(out, "Input: {} {}", self.input, self.from_label);
        let _ = writeln!(out, "Converted To: {}", self.to_label);
        let _ = writeln!(out, "Result: {}", self.result);
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "Formula Used:");
        for line in &self.formula {
            let _ = writeln!(out, "{line}");
        }
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "Solution Steps:");
        for step in &self.steps {
            let _ = writeln!(out, "{step}");
        }
        let _ = writeln!(out, "{RULE}");
        let _ = write!(out, "Exported on: {}", exported_on.format(TIMESTAMP_FORMAT));
        out
    }

    /// Write the report into `dir` under [`file_name`](Self::file_name),
    /// stamped with the local time.  Returns the written path.
    pub fn export(&self, dir: &Path) -> Result<PathBuf, ReportError> {
        let path = dir.join(self.file_name());
        let text = self.render(Local::now().naive_local());
        std::fs::write(&path, text).map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "report exported");
        Ok(path)
    }
}
