use serde::Serialize;

use unitconv_registry::TempUnit;

/// Which temperature formula a conversion applied, keyed by the
/// `from-to` code pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TemperatureVariant {
    #[serde(rename = "c-f")] CToF,
    #[serde(rename = "f-c")] FToC,
    #[serde(rename = "c-k")] CToK,
    #[serde(rename = "k-c")] KToC,
    #[serde(rename = "f-k")] FToK,
    #[serde(rename = "k-f")] KToF,
    #[serde(rename = "c-c")] CToC,
    #[serde(rename = "f-f")] FToF,
    #[serde(rename = "k-k")] KToK,
}

impl TemperatureVariant {
    pub fn new(from: TempUnit, to: TempUnit) -> Self {
        use TempUnit::*;
        match (from, to) {
            (Celsius, Fahrenheit)    => Self::CToF,
            (Fahrenheit, Celsius)    => Self::FToC,
            (Celsius, Kelvin)        => Self::CToK,
            (Kelvin, Celsius)        => Self::KToC,
            (Fahrenheit, Kelvin)     => Self::FToK,
            (Kelvin, Fahrenheit)     => Self::KToF,
            (Celsius, Celsius)       => Self::CToC,
            (Fahrenheit, Fahrenheit) => Self::FToF,
            (Kelvin, Kelvin)         => Self::KToK,
        }
    }

    /// `"c-f"`, `"k-k"`, …
    pub fn key(&self) -> &'static str {
        match self {
            Self::CToF => "c-f",
            Self::FToC => "f-c",
            Self::CToK => "c-k",
            Self::KToC => "k-c",
            Self::FToK => "f-k",
            Self::KToF => "k-f",
            Self::CToC => "c-c",
            Self::FToF => "f-f",
            Self::KToK => "k-k",
        }
    }

    /// Canonical formula text.
    pub fn formula(&self) -> &'static str {
        match self {
            Self::CToF => "°F = (°C × 9/5) + 32",
            Self::FToC => "°C = (°F − 32) × 5/9",
            Self::CToK => "K = °C + 273.15",
            Self::KToC => "°C = K − 273.15",
            Self::FToK => "K = ((°F − 32) × 5/9) + 273.15",
            Self::KToF => "°F = ((K − 273.15) × 9/5) + 32",
            Self::CToC => "°C₁ = °C₂ (No change)",
            Self::FToF => "°F₁ = °F₂ (No change)",
            Self::KToK => "K₁ = K₂ (No change)",
        }
    }

    /// The formula with the input substituted, e.g. `(100 × 9/5) + 32`.
    /// `None` for identity variants.
    pub fn substituted(&self, x: &str) -> Option<String> {
        Some(match self {
            Self::CToF => format!("({x} × 9/5) + 32"),
            Self::FToC => format!("({x} - 32) × 5/9"),
            Self::CToK => format!("{x} + 273.15"),
            Self::KToC => format!("{x} - 273.15"),
            Self::FToK => format!("(({x} - 32) × 5/9) + 273.15"),
            Self::KToF => format!("(({x} - 273.15) × 9/5) + 32"),
            Self::CToC | Self::FToF | Self::KToK => return None,
        })
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Self::CToC | Self::FToF | Self::KToK)
    }
}

/// How a result was obtained.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormulaDescriptor {
    /// `value = magnitude × factor_from / factor_to`.
    Linear {
        factor_from: f64,
        factor_to: f64,
        base_unit_symbol: String,
    },
    /// One of the nine temperature formulas.
    Temperature { variant: TemperatureVariant },
}

impl FormulaDescriptor {
    pub fn temperature_variant(&self) -> Option<TemperatureVariant> {
        match self {
            FormulaDescriptor::Temperature { variant } => Some(*variant),
            FormulaDescriptor::Linear { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_follow_unit_codes() {
        for from in [TempUnit::Celsius, TempUnit::Fahrenheit, TempUnit::Kelvin] {
            for to in [TempUnit::Celsius, TempUnit::Fahrenheit, TempUnit::Kelvin] {
                let variant = TemperatureVariant::new(from, to);
                assert_eq!(variant.key(), format!("{}-{}", from.code(), to.code()));
                assert_eq!(variant.is_identity(), from == to);
                assert_eq!(variant.substituted("1").is_none(), from == to);
            }
        }
    }

    #[test]
    fn descriptor_serializes_with_kind_tag() {
        let linear = FormulaDescriptor::Linear {
            factor_from: 1000.0,
            factor_to: 0.01,
            base_unit_symbol: "m".into(),
        };
        let json = serde_json::to_value(&linear).unwrap();
        assert_eq!(json["kind"], "linear");
        assert_eq!(json["base_unit_symbol"], "m");

        let temp = FormulaDescriptor::Temperature { variant: TemperatureVariant::KToF };
        let json = serde_json::to_value(&temp).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "temperature", "variant": "k-f" }));
    }
}
