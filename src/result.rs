use serde::Serialize;

use crate::format;
use crate::formula::FormulaDescriptor;

/// Display precision for temperature results.
pub const TEMPERATURE_PRECISION: usize = 4;
/// Display precision for every linear category.
pub const LINEAR_PRECISION: usize = 6;

// ── Conversion result ───────────────────────────────────────────────

/// Outcome of one conversion request.
///
/// `value` keeps full `f64` precision; `display_precision` is only a hint
/// for rendering (4 decimals for temperature, 6 otherwise).
///
/// | Field              | Meaning                                      |
/// |--------------------|----------------------------------------------|
/// | category           | category key (`"length"`)                    |
/// | from_unit, to_unit | unit codes of the request                    |
/// | from_label, to_label | display labels of those codes              |
/// | input              | magnitude that was converted                 |
/// | value              | converted magnitude                          |
/// | derivation_steps   | human-readable steps ending in `value`       |
/// | formula            | linear factors or temperature variant        |
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub category: &'static str,
    pub from_unit: &'static str,
    pub to_unit: &'static str,
    #[serde(skip)]
    pub from_label: &'static str,
    #[serde(skip)]
    pub to_label: &'static str,
    pub input: f64,
    pub value: f64,
    pub display_precision: usize,
    pub derivation_steps: Vec<String>,
    pub formula: FormulaDescriptor,
}

impl ConversionResult {
    pub fn is_identity(&self) -> bool {
        self.from_unit == self.to_unit
    }

    /// `value` with exactly `display_precision` decimals.
    pub fn formatted_value(&self) -> String {
        format::fixed(self.value, self.display_precision)
    }

    /// `2 Kilometers (km) = 200000.000000 Centimeters (cm)`
    pub fn result_line(&self) -> String {
        format!(
            "{} {} = {} {}",
            format::number(self.input),
            self.from_label,
            self.formatted_value(),
            self.to_label,
        )
    }

    /// Formula text shown next to the result.
    pub fn formula_lines(&self) -> Vec<String> {
        match &self.formula {
            FormulaDescriptor::Temperature { variant } => vec![variant.formula().to_string()],
            FormulaDescriptor::Linear { factor_from, factor_to, .. } => {
                let from = self.from_unit.to_uppercase();
                let to = self.to_unit.to_uppercase();
                let mut lines = vec![format!("{to} = ({from} × Factor_From) / Factor_To")];
                if self.is_identity() {
                    lines.push("Since units are the same, the value doesn't change.".to_string());
                } else {
                    lines.push(format!("Where {from} is the value in {},", self.from_label));
                    lines.push(format!(
                        "Factor_From ({}) converts {} to base units,",
                        format::number(*factor_from),
                        self.from_label,
                    ));
                    lines.push(format!(
                        "Factor_To ({}) is the factor for {} relative to base units.",
                        format::number(*factor_to),
                        self.to_label,
                    ));
                }
                lines
            }
        }
    }
}

impl std::fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.result_line())?;
        writeln!(f)?;
        writeln!(f, "Formula:")?;
        for line in self.formula_lines() {
            writeln!(f, "  {line}")?;
        }
        writeln!(f)?;
        write!(f, "Computation Breakdown:")?;
        for step in &self.derivation_steps {
            write!(f, "\n  {step}")?;
        }
        Ok(())
    }
}
