use unitconv::{BASE_UNITS_FALLBACK, CategoryKey, ConvertError, REGISTRY};

fn codes(category: &str) -> Vec<&'static str> {
    REGISTRY.list_units(category).unwrap().into_iter().map(|(code, _)| code).collect()
}

// ═══════════════════════════════════════════════════════════════════
//  Catalog layout
// ═══════════════════════════════════════════════════════════════════

#[test]
fn categories_in_declaration_order() {
    let keys: Vec<_> = REGISTRY.categories().map(|c| c.key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "length", "mass", "time", "volume", "speed", "force", "pressure", "energy", "power",
            "temperature",
        ]
    );
}

#[test]
fn units_keep_registration_order() {
    assert_eq!(codes("length"), vec!["m", "km", "cm", "mm", "in", "ft", "yd", "mi"]);
    assert_eq!(codes("mass"), vec!["kg", "g", "mg", "lb", "oz"]);
    assert_eq!(codes("time"), vec!["s", "min", "h", "day"]);
    assert_eq!(codes("volume"), vec!["m3", "cm3", "l", "ml", "gal", "ft3", "in3"]);
    assert_eq!(codes("speed"), vec!["mps", "kmph", "mph", "fps", "knot"]);
    assert_eq!(codes("force"), vec!["N", "dyn", "lbf", "kgf"]);
    assert_eq!(codes("pressure"), vec!["Pa", "kPa", "psi", "atm", "bar", "mmHg"]);
    assert_eq!(codes("energy"), vec!["J", "kJ", "cal", "kcal", "Wh", "kWh", "eV"]);
    assert_eq!(codes("power"), vec!["W", "kW", "hp", "BTUh"]);
    assert_eq!(codes("temperature"), vec!["c", "f", "k"]);
}

#[test]
fn labels_and_metadata() {
    let units = REGISTRY.list_units("length").unwrap();
    assert_eq!(units[1], ("km", "Kilometers (km)"));
    assert_eq!(REGISTRY.label("volume", "m3").unwrap(), "Cubic Meters (m³)");
    assert_eq!(REGISTRY.label("temperature", "c").unwrap(), "Celsius (°C)");

    let power = REGISTRY.get_category("power").unwrap();
    assert_eq!(power.name, "Power Conversion");
    assert_eq!(power.icon, "fas fa-plug");
    assert_eq!(power.key, CategoryKey::Power);
}

// ═══════════════════════════════════════════════════════════════════
//  Factors
// ═══════════════════════════════════════════════════════════════════

fn assert_factors(category: &str, factors: &[(&str, f64)]) {
    for (code, factor) in factors {
        assert_eq!(
            REGISTRY.get_factor(category, code).unwrap(),
            Some(*factor),
            "{category}:{code}"
        );
    }
}

#[test]
fn factor_table_is_reproduced_exactly() {
    assert_factors("length", &[("m", 1.0), ("km", 1000.0), ("cm", 0.01), ("mm", 0.001),
                               ("in", 0.0254), ("ft", 0.3048), ("yd", 0.9144), ("mi", 1609.344)]);
    assert_factors("mass", &[("kg", 1.0), ("g", 0.001), ("mg", 1e-6), ("lb", 0.45359237),
                             ("oz", 0.028349523125)]);
    assert_factors("time", &[("s", 1.0), ("min", 60.0), ("h", 3600.0), ("day", 86400.0)]);
    assert_factors("volume", &[("m3", 1.0), ("cm3", 1e-6), ("l", 0.001), ("ml", 1e-6),
                               ("gal", 0.00378541), ("ft3", 0.0283168), ("in3", 1.63871e-5)]);
    assert_factors("speed", &[("mps", 1.0), ("kmph", 1.0 / 3.6), ("mph", 0.44704),
                              ("fps", 0.3048), ("knot", 0.514444)]);
    assert_factors("force", &[("N", 1.0), ("dyn", 1e-5), ("lbf", 4.44822), ("kgf", 9.80665)]);
    assert_factors("pressure", &[("Pa", 1.0), ("kPa", 1000.0), ("psi", 6894.76), ("atm", 101325.0),
                                 ("bar", 100000.0), ("mmHg", 133.322)]);
    assert_factors("energy", &[("J", 1.0), ("kJ", 1000.0), ("cal", 4.184), ("kcal", 4184.0),
                               ("Wh", 3600.0), ("kWh", 3.6e6), ("eV", 1.60218e-19)]);
    assert_factors("power", &[("W", 1.0), ("kW", 1000.0), ("hp", 745.7), ("BTUh", 0.293071)]);
}

#[test]
fn temperature_has_no_factors() {
    for code in ["c", "f", "k"] {
        assert_eq!(REGISTRY.get_factor("temperature", code).unwrap(), None);
    }
}

#[test]
fn base_units() {
    let expected = [
        ("length", "m"),
        ("mass", "kg"),
        ("time", "s"),
        ("volume", "m3"),
        ("speed", "mps"),
        ("force", "N"),
        ("pressure", "Pa"),
        ("energy", "J"),
        ("power", "W"),
        ("temperature", BASE_UNITS_FALLBACK),
    ];
    for (category, base) in expected {
        assert_eq!(REGISTRY.find_base_unit(category).unwrap(), base, "{category}");
    }
    assert_eq!(BASE_UNITS_FALLBACK, "base units");
}

// ═══════════════════════════════════════════════════════════════════
//  Errors
// ═══════════════════════════════════════════════════════════════════

#[test]
fn unknown_category_everywhere() {
    assert!(matches!(REGISTRY.get_category("bogus"), Err(ConvertError::UnknownCategory(_))));
    assert!(matches!(REGISTRY.list_units("Length"), Err(ConvertError::UnknownCategory(_))));
    assert!(matches!(REGISTRY.get_factor("", "m"), Err(ConvertError::UnknownCategory(_))));
    assert!(matches!(REGISTRY.find_base_unit("bogus"), Err(ConvertError::UnknownCategory(_))));
}

#[test]
fn unknown_unit_even_for_temperature() {
    let err = REGISTRY.get_factor("length", "xx").unwrap_err();
    assert_eq!(err.to_string(), "unknown unit 'xx' in category 'length'");
    assert!(matches!(
        REGISTRY.get_factor("temperature", "r"),
        Err(ConvertError::UnknownUnit { .. })
    ));
}
