use unitconv_registry::{CategoryDef, TempUnit, UnitDef};

use crate::error::*;
use crate::format;
use crate::formula::{FormulaDescriptor, TemperatureVariant};
use crate::registry::UnitRegistry;
use crate::result::{ConversionResult, LINEAR_PRECISION, TEMPERATURE_PRECISION};

/// Conversion engine over a [`UnitRegistry`].
///
/// The engine holds no state besides the registry reference; every call
/// is a pure function of its arguments.  The selected category is always
/// passed in by the caller.
///
/// ```
/// use unitconv::Engine;
///
/// let engine = Engine::builtin();
/// let r = engine.convert("length", "km", "cm", 2.0)?;
/// assert_eq!(r.value, 200000.0);
/// assert_eq!(r.derivation_steps[1], "2 km × 1000 = 2000 m");
/// # Ok::<(), unitconv::ConvertError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Engine<'r> {
    registry: &'r UnitRegistry,
}

impl Engine<'static> {
    /// Engine over the built-in catalog.
    pub fn builtin() -> Self {
        Self::new(UnitRegistry::builtin())
    }
}

impl Default for Engine<'static> {
    fn default() -> Self { Self::builtin() }
}

impl<'r> Engine<'r> {
    pub fn new(registry: &'r UnitRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r UnitRegistry {
        self.registry
    }

    /// Convert `magnitude` from `from_unit` to `to_unit` within `category`.
    ///
    /// Fails with [`ConvertError::InvalidMagnitude`] for NaN or infinite
    /// input, [`ConvertError::UnknownCategory`] for an unregistered key and
    /// [`ConvertError::UnknownUnit`] when either code is not part of the
    /// category.  Negative magnitudes are accepted for every category.
    pub fn convert(
        &self,
        category: &str,
        from_unit: &str,
        to_unit: &str,
        magnitude: f64,
    ) -> Result<ConversionResult> {
        if !magnitude.is_finite() {
            return Err(ConvertError::InvalidMagnitude(magnitude));
        }
        let def = self.registry.get_category(category)?;
        let from = self.registry.unit(category, from_unit)?;
        let to = self.registry.unit(category, to_unit)?;

        let result = if def.is_linear() {
            self.linear(def, from, to, magnitude)?
        } else {
            temperature(def, from, to, magnitude)?
        };

        tracing::debug!(
            category,
            from = from_unit,
            to = to_unit,
            input = magnitude,
            value = result.value,
            "converted"
        );
        Ok(result)
    }

    // ── Linear categories ───────────────────────────────────────────

    fn linear(
        &self,
        def: &'static CategoryDef,
        from: &'static UnitDef,
        to: &'static UnitDef,
        x: f64,
    ) -> Result<ConversionResult> {
        let factor_from = factor(def, from)?;
        let factor_to = factor(def, to)?;
        let base = self.registry.find_base_unit(def.key.as_str())?;
        let p = LINEAR_PRECISION;

        let (value, steps) = if from.code == to.code {
            let steps = vec![
                format!("{} {} = {} {}.", format::number(x), from.label, format::trimmed(x, p), to.label),
                "No conversion needed as units are the same.".to_string(),
            ];
            (x, steps)
        } else {
            // Always through the base unit: the breakdown shows both legs.
            let base_value = x * factor_from;
            let value = base_value / factor_to;
            let shown_base = format::trimmed(base_value, p);
            let steps = vec![
                format!("Convert from {} to base unit ({base}):", from.label),
                format!(
                    "{} {} × {} = {shown_base} {base}",
                    format::number(x),
                    from.code,
                    format::number(factor_from),
                ),
                format!("Convert from base unit ({base}) to {}:", to.label),
                format!(
                    "{shown_base} {base} / {} = {} {}",
                    format::number(factor_to),
                    format::trimmed(value, p),
                    to.code,
                ),
            ];
            (value, steps)
        };

        Ok(ConversionResult {
            category: def.key.as_str(),
            from_unit: from.code,
            to_unit: to.code,
            from_label: from.label,
            to_label: to.label,
            input: x,
            value,
            display_precision: p,
            derivation_steps: steps,
            formula: FormulaDescriptor::Linear {
                factor_from,
                factor_to,
                base_unit_symbol: base.to_string(),
            },
        })
    }
}

/// Convenience wrapper around [`Engine::builtin`].
pub fn convert(category: &str, from_unit: &str, to_unit: &str, magnitude: f64) -> Result<ConversionResult> {
    Engine::builtin().convert(category, from_unit, to_unit, magnitude)
}

fn unknown_unit(def: &CategoryDef, unit: &UnitDef) -> ConvertError {
    ConvertError::UnknownUnit {
        category: def.key.as_str().to_string(),
        unit: unit.code.to_string(),
    }
}

fn factor(def: &CategoryDef, unit: &UnitDef) -> Result<f64> {
    unit.factor.ok_or_else(|| unknown_unit(def, unit))
}

// ── Temperature ─────────────────────────────────────────────────────

fn temperature(
    def: &'static CategoryDef,
    from: &'static UnitDef,
    to: &'static UnitDef,
    x: f64,
) -> Result<ConversionResult> {
    let t_from = TempUnit::from_code(from.code).ok_or_else(|| unknown_unit(def, from))?;
    let t_to = TempUnit::from_code(to.code).ok_or_else(|| unknown_unit(def, to))?;
    let variant = TemperatureVariant::new(t_from, t_to);
    let p = TEMPERATURE_PRECISION;

    let value = t_from.convert(x, t_to);
    let shown = format::number(x);
    let steps = match variant.substituted(&shown) {
        None => vec![format!(
            "{shown} {} remains {} {}. No conversion needed.",
            from.label,
            format::trimmed(value, p),
            to.label,
        )],
        Some(expr) => vec![
            format!("Starting with {shown}{}.", t_from.symbol()),
            format!(
                "Apply {}: {expr} = {}{}",
                variant.formula(),
                format::trimmed(value, p),
                t_to.symbol(),
            ),
        ],
    };

    Ok(ConversionResult {
        category: def.key.as_str(),
        from_unit: from.code,
        to_unit: to.code,
        from_label: from.label,
        to_label: to.label,
        input: x,
        value,
        display_precision: p,
        derivation_steps: steps,
        formula: FormulaDescriptor::Temperature { variant },
    })
}
