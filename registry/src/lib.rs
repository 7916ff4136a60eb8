//! Static unit catalog for unitconv.
//!
//! Ten categories are built in.  Nine of them are **linear**: every unit
//! carries a factor saying how many base units one of it is worth.
//! Temperature is **formula-based** and has no factors.
//!
//! | Category      | Base  | Units                                    |
//! |---------------|-------|------------------------------------------|
//! | `length`      | m     | m, km, cm, mm, in, ft, yd, mi            |
//! | `mass`        | kg    | kg, g, mg, lb, oz                        |
//! | `time`        | s     | s, min, h, day                           |
//! | `volume`      | m3    | m3, cm3, l, ml, gal, ft3, in3            |
//! | `speed`       | mps   | mps, kmph, mph, fps, knot                |
//! | `force`       | N     | N, dyn, lbf, kgf                         |
//! | `pressure`    | Pa    | Pa, kPa, psi, atm, bar, mmHg             |
//! | `energy`      | J     | J, kJ, cal, kcal, Wh, kWh, eV            |
//! | `power`       | W     | W, kW, hp, BTUh                          |
//! | `temperature` | —     | c, f, k                                  |
//!
//! ```
//! use unitconv_registry::{CategoryKey, TempUnit};
//!
//! let length = CategoryKey::Length.def();
//! assert_eq!(length.base_unit, Some("m"));
//!
//! let f = TempUnit::Celsius.convert(100.0, TempUnit::Fahrenheit);
//! assert_eq!(f, 212.0);
//! ```

// ────────────────────────────────────────────────────────────────────
//  Category keys
// ────────────────────────────────────────────────────────────────────

/// Stable identifier of a measurement category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    Length,
    Mass,
    Time,
    Volume,
    Speed,
    Force,
    Pressure,
    Energy,
    Power,
    Temperature,
}

impl CategoryKey {
    /// All keys in declaration order.
    pub const ALL: [CategoryKey; 10] = [
        CategoryKey::Length,
        CategoryKey::Mass,
        CategoryKey::Time,
        CategoryKey::Volume,
        CategoryKey::Speed,
        CategoryKey::Force,
        CategoryKey::Pressure,
        CategoryKey::Energy,
        CategoryKey::Power,
        CategoryKey::Temperature,
    ];

    /// The key as used in requests and file names (`"length"`, …).
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Length      => "length",
            CategoryKey::Mass        => "mass",
            CategoryKey::Time        => "time",
            CategoryKey::Volume      => "volume",
            CategoryKey::Speed       => "speed",
            CategoryKey::Force       => "force",
            CategoryKey::Pressure    => "pressure",
            CategoryKey::Energy      => "energy",
            CategoryKey::Power       => "power",
            CategoryKey::Temperature => "temperature",
        }
    }

    /// Exact, case-sensitive lookup of a key string.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }

    /// Static definition of this category.
    pub fn def(&self) -> &'static CategoryDef {
        &CATEGORIES[*self as usize]
    }

    pub fn is_temperature(&self) -> bool {
        matches!(self, CategoryKey::Temperature)
    }
}

impl std::fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────
//  Definitions
// ────────────────────────────────────────────────────────────────────

/// One selectable unit of a category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDef {
    /// Short code, unique within its category (`"km"`).
    pub code: &'static str,
    /// Display label (`"Kilometers (km)"`).
    pub label: &'static str,
    /// Base units per one of this unit.  `None` for temperature.
    pub factor: Option<f64>,
}

/// A measurement category with its ordered units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryDef {
    pub key: CategoryKey,
    /// Display name (`"Length Conversion"`).
    pub name: &'static str,
    /// Icon reference for front ends (Font Awesome class).
    pub icon: &'static str,
    /// Code of the unit whose factor is exactly 1.  `None` for temperature.
    pub base_unit: Option<&'static str>,
    /// Units in registration order.  The first is the default "from"
    /// unit, the second the default "to" unit.
    pub units: &'static [UnitDef],
}

impl CategoryDef {
    pub fn unit(&self, code: &str) -> Option<&'static UnitDef> {
        self.units.iter().find(|u| u.code == code)
    }

    pub fn is_linear(&self) -> bool {
        !self.key.is_temperature()
    }
}

const fn linear(code: &'static str, label: &'static str, factor: f64) -> UnitDef {
    UnitDef { code, label, factor: Some(factor) }
}

const fn scale(code: &'static str, label: &'static str) -> UnitDef {
    UnitDef { code, label, factor: None }
}

// ── Unit tables ─────────────────────────────────────────────────────

const LENGTH: [UnitDef; 8] = [
    linear("m",  "Meters (m)",      1.0),
    linear("km", "Kilometers (km)", 1000.0),
    linear("cm", "Centimeters (cm)", 0.01),
    linear("mm", "Millimeters (mm)", 0.001),
    linear("in", "Inches (in)",     0.0254),
    linear("ft", "Feet (ft)",       0.3048),
    linear("yd", "Yards (yd)",      0.9144),
    linear("mi", "Miles (mi)",      1609.344),
];

const MASS: [UnitDef; 5] = [
    linear("kg", "Kilograms (kg)",  1.0),
    linear("g",  "Grams (g)",       0.001),
    linear("mg", "Milligrams (mg)", 0.000001),
    linear("lb", "Pounds (lb)",     0.45359237),
    linear("oz", "Ounces (oz)",     0.028349523125),
];

const TIME: [UnitDef; 4] = [
    linear("s",   "Seconds (s)",   1.0),
    linear("min", "Minutes (min)", 60.0),
    linear("h",   "Hours (h)",     3600.0),
    linear("day", "Days (day)",    86400.0),
];

const VOLUME: [UnitDef; 7] = [
    linear("m3",  "Cubic Meters (m³)",       1.0),
    linear("cm3", "Cubic Centimeters (cm³)", 1e-6),
    linear("l",   "Liters (l)",              0.001),
    linear("ml",  "Milliliters (ml)",        1e-6),
    linear("gal", "Gallons (US gal)",        0.00378541),
    linear("ft3", "Cubic Feet (ft³)",        0.0283168),
    linear("in3", "Cubic Inches (in³)",      0.0000163871),
];

const SPEED: [UnitDef; 5] = [
    linear("mps",  "Meters per second (m/s)",    1.0),
    linear("kmph", "Kilometers per hour (km/h)", 1.0 / 3.6),
    linear("mph",  "Miles per hour (mph)",       0.44704),
    linear("fps",  "Feet per second (ft/s)",     0.3048),
    linear("knot", "Knot (kn)",                  0.514444),
];

const FORCE: [UnitDef; 4] = [
    linear("N",   "Newton (N)",          1.0),
    linear("dyn", "Dyne (dyn)",          1e-5),
    linear("lbf", "Pound-force (lbf)",   4.44822),
    linear("kgf", "Kilogram-force (kgf)", 9.80665),
];

const PRESSURE: [UnitDef; 6] = [
    linear("Pa",   "Pascal (Pa)",                   1.0),
    linear("kPa",  "Kilopascal (kPa)",              1000.0),
    linear("psi",  "Pounds per square inch (psi)",  6894.76),
    linear("atm",  "Atmosphere (atm)",              101325.0),
    linear("bar",  "Bar (bar)",                     100000.0),
    linear("mmHg", "Millimeters of mercury (mmHg)", 133.322),
];

const ENERGY: [UnitDef; 7] = [
    linear("J",    "Joule (J)",           1.0),
    linear("kJ",   "Kilojoule (kJ)",      1000.0),
    linear("cal",  "Calorie (cal)",       4.184),
    linear("kcal", "Kilocalorie (kcal)",  4184.0),
    linear("Wh",   "Watt-hour (Wh)",      3600.0),
    linear("kWh",  "Kilowatt-hour (kWh)", 3600000.0),
    linear("eV",   "Electronvolt (eV)",   1.60218e-19),
];

const POWER: [UnitDef; 4] = [
    linear("W",    "Watt (W)",             1.0),
    linear("kW",   "Kilowatt (kW)",        1000.0),
    linear("hp",   "Horsepower (hp)",      745.7),
    linear("BTUh", "BTU per hour (BTU/h)", 0.293071),
];

const TEMPERATURE: [UnitDef; 3] = [
    scale("c", "Celsius (°C)"),
    scale("f", "Fahrenheit (°F)"),
    scale("k", "Kelvin (K)"),
];

/// The built-in catalog, indexed by `CategoryKey as usize`.
pub static CATEGORIES: [CategoryDef; 10] = [
    CategoryDef {
        key: CategoryKey::Length,
        name: "Length Conversion",
        icon: "fas fa-ruler",
        base_unit: Some("m"),
        units: &LENGTH,
    },
    CategoryDef {
        key: CategoryKey::Mass,
        name: "Mass Conversion",
        icon: "fas fa-weight-hanging",
        base_unit: Some("kg"),
        units: &MASS,
    },
    CategoryDef {
        key: CategoryKey::Time,
        name: "Time Conversion",
        icon: "fas fa-clock",
        base_unit: Some("s"),
        units: &TIME,
    },
    CategoryDef {
        key: CategoryKey::Volume,
        name: "Volume Conversion",
        icon: "fas fa-cube",
        base_unit: Some("m3"),
        units: &VOLUME,
    },
    CategoryDef {
        key: CategoryKey::Speed,
        name: "Speed Conversion",
        icon: "fas fa-tachometer-alt",
        base_unit: Some("mps"),
        units: &SPEED,
    },
    CategoryDef {
        key: CategoryKey::Force,
        name: "Force Conversion",
        icon: "fas fa-atom",
        base_unit: Some("N"),
        units: &FORCE,
    },
    CategoryDef {
        key: CategoryKey::Pressure,
        name: "Pressure Conversion",
        icon: "fas fa-compress",
        base_unit: Some("Pa"),
        units: &PRESSURE,
    },
    CategoryDef {
        key: CategoryKey::Energy,
        name: "Energy Conversion",
        icon: "fas fa-bolt",
        base_unit: Some("J"),
        units: &ENERGY,
    },
    CategoryDef {
        key: CategoryKey::Power,
        name: "Power Conversion",
        icon: "fas fa-plug",
        base_unit: Some("W"),
        units: &POWER,
    },
    CategoryDef {
        key: CategoryKey::Temperature,
        name: "Temperature Conversion",
        icon: "fas fa-temperature-low",
        base_unit: None,
        units: &TEMPERATURE,
    },
];

// ────────────────────────────────────────────────────────────────────
//  Temperature scales
// ────────────────────────────────────────────────────────────────────

/// Temperature scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TempUnit {
    /// Degrees Celsius (`c`)
    Celsius,
    /// Degrees Fahrenheit (`f`)
    Fahrenheit,
    /// Kelvin (`k`)
    Kelvin,
}

impl TempUnit {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "c" => Some(TempUnit::Celsius),
            "f" => Some(TempUnit::Fahrenheit),
            "k" => Some(TempUnit::Kelvin),
            _   => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            TempUnit::Celsius    => "c",
            TempUnit::Fahrenheit => "f",
            TempUnit::Kelvin     => "k",
        }
    }

    /// Symbol used in formulas (`°C`, `°F`, `K`).
    pub fn symbol(&self) -> &'static str {
        match self {
            TempUnit::Celsius    => "°C",
            TempUnit::Fahrenheit => "°F",
            TempUnit::Kelvin     => "K",
        }
    }

    /// Direct formula from `self` to `to`.  Same-scale pairs return `t`
    /// untouched.
    pub fn convert(&self, t: f64, to: TempUnit) -> f64 {
        use TempUnit::*;
        match (self, to) {
            (Celsius, Fahrenheit) => t * 9.0 / 5.0 + 32.0,
            (Fahrenheit, Celsius) => (t - 32.0) * 5.0 / 9.0,
            (Celsius, Kelvin)     => t + 273.15,
            (Kelvin, Celsius)     => t - 273.15,
            (Fahrenheit, Kelvin)  => (t - 32.0) * 5.0 / 9.0 + 273.15,
            (Kelvin, Fahrenheit)  => (t - 273.15) * 9.0 / 5.0 + 32.0,
            (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => t,
        }
    }
}
