//! # unitconv
//!
//! Unit conversion with a readable derivation: every result carries the
//! formula that was applied and the steps that lead to it.
//!
//! ## Highlights
//!
//! * **Ten categories**: length, mass, time, volume, speed, force,
//!   pressure, energy, power, temperature
//! * **Linear categories** go through the category's base unit
//!   (`2 km × 1000 = 2000 m`, then `2000 m / 0.01 = 200000 cm`)
//! * **Temperature** dispatches on the unit pair (`°F = (°C × 9/5) + 32`)
//! * **Stateless engine**: the selected category is always an argument
//! * **Front-end helpers**: [`Session`] (selection + input validation),
//!   [`Report`] (text export), [`BarChart`]
//!
//! ## Quick example
//!
//! ```
//! use unitconv::convert;
//!
//! let r = convert("temperature", "c", "f", 100.0)?;
//! assert_eq!(r.value, 212.0);
//! assert_eq!(r.formula.temperature_variant().map(|v| v.key()), Some("c-f"));
//! println!("{}", r.result_line());   // 100 Celsius (°C) = 212.0000 Fahrenheit (°F)
//! # Ok::<(), unitconv::ConvertError>(())
//! ```
//!
//! ## Registry
//!
//! ```
//! use unitconv::REGISTRY;
//!
//! let units = REGISTRY.list_units("time")?;
//! assert_eq!(units[0], ("s", "Seconds (s)"));
//! assert_eq!(REGISTRY.get_factor("time", "h")?, Some(3600.0));
//! assert_eq!(REGISTRY.get_factor("temperature", "k")?, None);
//! # Ok::<(), unitconv::ConvertError>(())
//! ```

pub mod chart;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod formula;
pub mod registry;
pub mod report;
pub mod result;
pub mod session;

// ── Public re-exports ────────────────────────────────────────────────
pub use chart::{Bar, BarChart};
pub use config::Settings;
pub use engine::{Engine, convert};
pub use error::{ConvertError, InputError, ReportError, Result};
pub use formula::{FormulaDescriptor, TemperatureVariant};
pub use registry::{BASE_UNITS_FALLBACK, REGISTRY, UnitRegistry};
pub use report::Report;
pub use result::{ConversionResult, LINEAR_PRECISION, TEMPERATURE_PRECISION};
pub use session::Session;

pub use unitconv_registry::{CategoryDef, CategoryKey, TempUnit, UnitDef};
