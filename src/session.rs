use unitconv_registry::{CategoryDef, CategoryKey};

use crate::engine::Engine;
use crate::error::{ConvertError, InputError};
use crate::result::ConversionResult;

/// Front-end state around the stateless [`Engine`]: the selected
/// category, the selected units and the raw text typed by the user.
///
/// Changing category resets the input and re-selects the default units
/// (first unit as "from", second as "to").
#[derive(Debug, Clone)]
pub struct Session<'r> {
    engine: Engine<'r>,
    category: &'static CategoryDef,
    from_unit: &'static str,
    to_unit: &'static str,
    input: String,
}

impl<'r> Session<'r> {
    pub fn new(engine: Engine<'r>, category: CategoryKey) -> Result<Self, ConvertError> {
        let def = engine.registry().category(category)?;
        let (from_unit, to_unit) = default_units(def);
        Ok(Self { engine, category: def, from_unit, to_unit, input: String::new() })
    }

    pub fn category(&self) -> &'static CategoryDef {
        self.category
    }

    pub fn from_unit(&self) -> &'static str {
        self.from_unit
    }

    pub fn to_unit(&self) -> &'static str {
        self.to_unit
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Switch category by key.  The previous input is discarded.
    pub fn select_category(&mut self, key: &str) -> Result<(), ConvertError> {
        let def = self.engine.registry().get_category(key)?;
        let (from_unit, to_unit) = default_units(def);
        self.category = def;
        self.from_unit = from_unit;
        self.to_unit = to_unit;
        self.input.clear();
        tracing::debug!(category = key, from_unit, to_unit, "category selected");
        Ok(())
    }

    pub fn set_from_unit(&mut self, code: &str) -> Result<(), ConvertError> {
        self.from_unit = self.resolve_unit(code)?;
        Ok(())
    }

    pub fn set_to_unit(&mut self, code: &str) -> Result<(), ConvertError> {
        self.to_unit = self.resolve_unit(code)?;
        Ok(())
    }

    pub fn swap_units(&mut self) {
        std::mem::swap(&mut self.from_unit, &mut self.to_unit);
    }

    /// Store raw input text.
    ///
    /// Outside temperature a negative number is refused and the input is
    /// cleared.  Anything else is kept as typed; it is validated by
    /// [`evaluate`](Self::evaluate).
    pub fn set_input(&mut self, raw: &str) -> Result<(), InputError> {
        if !self.category.key.is_temperature() {
            if let Ok(x) = raw.trim().parse::<f64>() {
                if x < 0.0 {
                    self.input.clear();
                    return Err(InputError::NegativeNotAllowed(self.category.key));
                }
            }
        }
        self.input = raw.to_string();
        Ok(())
    }

    /// Convert the current input with the current selection.
    pub fn evaluate(&self) -> Result<ConversionResult, InputError> {
        let raw = self.input.trim();
        if raw.is_empty() {
            return Err(InputError::Empty);
        }
        let magnitude = raw
            .parse::<f64>()
            .map_err(|_| InputError::NotANumber(raw.to_string()))?;
        let result = self.engine.convert(
            self.category.key.as_str(),
            self.from_unit,
            self.to_unit,
            magnitude,
        )?;
        Ok(result)
    }

    fn resolve_unit(&self, code: &str) -> Result<&'static str, ConvertError> {
        self.category
            .unit(code)
            .map(|u| u.code)
            .ok_or_else(|| ConvertError::UnknownUnit {
                category: self.category.key.as_str().to_string(),
                unit: code.to_string(),
            })
    }
}

fn default_units(def: &'static CategoryDef) -> (&'static str, &'static str) {
    match def.units {
        [first, second, ..] => (first.code, second.code),
        [only] => (only.code, only.code),
        [] => ("", ""),
    }
}
