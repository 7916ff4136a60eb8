use unitconv_registry::{CATEGORIES, CategoryDef, CategoryKey, UnitDef};

use crate::error::*;

/// Shown in breakdown text when a category has no base unit.
pub const BASE_UNITS_FALLBACK: &str = "base units";

/// The built-in registry.
pub static REGISTRY: UnitRegistry = UnitRegistry { categories: &CATEGORIES };

/// Read-only lookup over a set of category definitions.
///
/// Lookups never mutate anything, so one registry can be shared by any
/// number of callers.
#[derive(Debug, Clone, Copy)]
pub struct UnitRegistry {
    categories: &'static [CategoryDef],
}

impl UnitRegistry {
    pub fn builtin() -> &'static UnitRegistry {
        &REGISTRY
    }

    /// All categories in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = &'static CategoryDef> + '_ {
        self.categories.iter()
    }

    /// Definition of the category registered under `key`.
    pub fn get_category(&self, key: &str) -> Result<&'static CategoryDef> {
        tracing::trace!(category = key, "category lookup");
        self.categories
            .iter()
            .find(|c| c.key.as_str() == key)
            .ok_or_else(|| ConvertError::UnknownCategory(key.to_string()))
    }

    /// Same as [`get_category`](Self::get_category) for an already-typed key.
    pub fn category(&self, key: CategoryKey) -> Result<&'static CategoryDef> {
        self.get_category(key.as_str())
    }

    /// `(code, label)` pairs in registration order.
    pub fn list_units(&self, key: &str) -> Result<Vec<(&'static str, &'static str)>> {
        let category = self.get_category(key)?;
        Ok(category.units.iter().map(|u| (u.code, u.label)).collect())
    }

    /// Full unit entry for `code`.
    pub fn unit(&self, key: &str, code: &str) -> Result<&'static UnitDef> {
        let category = self.get_category(key)?;
        category.unit(code).ok_or_else(|| ConvertError::UnknownUnit {
            category: key.to_string(),
            unit: code.to_string(),
        })
    }

    pub fn label(&self, key: &str, code: &str) -> Result<&'static str> {
        Ok(self.unit(key, code)?.label)
    }

    /// Linear factor of `code`.  `Ok(None)` for temperature units.
    pub fn get_factor(&self, key: &str, code: &str) -> Result<Option<f64>> {
        Ok(self.unit(key, code)?.factor)
    }

    /// Code of the base unit, or [`BASE_UNITS_FALLBACK`] for categories
    /// without one.  Only used for display.
    pub fn find_base_unit(&self, key: &str) -> Result<&'static str> {
        let category = self.get_category(key)?;
        Ok(match category.base_unit {
            Some(code) => code,
            None => {
                if category.is_linear() {
                    tracing::warn!(category = key, "linear category without a base unit");
                }
                BASE_UNITS_FALLBACK
            }
        })
    }
}

impl Default for UnitRegistry {
    fn default() -> Self { REGISTRY }
}
