use crate::error::ConvertError;
use crate::format;
use crate::registry::UnitRegistry;
use crate::result::ConversionResult;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: &'static str,
    pub value: f64,
}

/// Two-bar comparison of a conversion: input on the left, result on the
/// right.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub bars: [Bar; 2],
    pub precision: usize,
}

impl BarChart {
    pub fn from_result(result: &ConversionResult, registry: &UnitRegistry) -> Result<Self, ConvertError> {
        let def = registry.get_category(result.category)?;
        let title = format!(
            "{}: {} {} → {} {}",
            def.name,
            format::number(result.input),
            result.from_unit,
            result.formatted_value(),
            result.to_unit,
        );
        Ok(Self {
            title,
            bars: [
                Bar { label: result.from_label, value: result.input },
                Bar { label: result.to_label, value: result.value },
            ],
            precision: result.display_precision,
        })
    }

    /// Bar lengths in cells for a chart `width` cells wide, proportional to
    /// `|value|`.  The largest bar always fills the width.
    pub fn scaled(&self, width: usize) -> [usize; 2] {
        let max = self.bars.iter().map(|b| b.value.abs()).fold(0.0_f64, f64::max);
        self.bars.each_ref().map(|b| {
            if max == 0.0 {
                0
            } else {
                ((b.value.abs() / max) * width as f64).round() as usize
            }
        })
    }

    /// Text rendering: title, then one row per bar.  Negative values are
    /// drawn with `░`, positive ones with `█`.
    pub fn render(&self, width: usize) -> String {
        let label_width = self.bars.iter().map(|b| b.label.chars().count()).max().unwrap_or(0);
        let lengths = self.scaled(width);
        let mut out = self.title.clone();
        for (bar, len) in self.bars.iter().zip(lengths) {
            let cell = if bar.value < 0.0 { "░" } else { "█" };
            out.push('\n');
            out.push_str(&format!(
                "{:<label_width$} | {:<width$} {}",
                bar.label,
                cell.repeat(len),
                format::fixed(bar.value, self.precision),
            ));
        }
        out
    }
}
