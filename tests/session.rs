use approx::assert_relative_eq;
use unitconv::{CategoryKey, ConvertError, Engine, InputError, Session};

fn session(category: CategoryKey) -> Session<'static> {
    Session::new(Engine::builtin(), category).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  Selection
// ═══════════════════════════════════════════════════════════════════

#[test]
fn first_two_units_are_the_defaults() {
    let s = session(CategoryKey::Length);
    assert_eq!(s.category().key, CategoryKey::Length);
    assert_eq!((s.from_unit(), s.to_unit()), ("m", "km"));
    assert_eq!(s.input(), "");
}

#[test]
fn changing_category_resets_units_and_input() {
    let mut s = session(CategoryKey::Length);
    s.set_to_unit("mi").unwrap();
    s.set_input("12").unwrap();

    s.select_category("temperature").unwrap();
    assert_eq!(s.category().key, CategoryKey::Temperature);
    assert_eq!((s.from_unit(), s.to_unit()), ("c", "f"));
    assert_eq!(s.input(), "");
    assert!(matches!(s.evaluate(), Err(InputError::Empty)));
}

#[test]
fn unknown_category_leaves_the_session_untouched() {
    let mut s = session(CategoryKey::Mass);
    s.set_input("3").unwrap();
    let err = s.select_category("bogus").unwrap_err();
    assert!(matches!(err, ConvertError::UnknownCategory(_)));
    assert_eq!(s.category().key, CategoryKey::Mass);
    assert_eq!(s.input(), "3");
}

#[test]
fn unit_codes_are_checked_against_the_category() {
    let mut s = session(CategoryKey::Length);
    let err = s.set_from_unit("kg").unwrap_err();
    assert!(matches!(err, ConvertError::UnknownUnit { ref category, ref unit } if category == "length" && unit == "kg"));
    assert_eq!(s.from_unit(), "m");

    s.set_from_unit("ft").unwrap();
    s.set_to_unit("in").unwrap();
    assert_eq!((s.from_unit(), s.to_unit()), ("ft", "in"));
}

#[test]
fn swap_exchanges_units() {
    let mut s = session(CategoryKey::Length);
    s.set_input("2").unwrap();
    assert_relative_eq!(s.evaluate().unwrap().value, 0.002, max_relative = 1e-12);

    s.swap_units();
    assert_eq!((s.from_unit(), s.to_unit()), ("km", "m"));
    assert_relative_eq!(s.evaluate().unwrap().value, 2000.0, max_relative = 1e-12);
}

// ═══════════════════════════════════════════════════════════════════
//  Input validation
// ═══════════════════════════════════════════════════════════════════

#[test]
fn empty_input_asks_for_a_value() {
    let mut s = session(CategoryKey::Time);
    assert!(matches!(s.evaluate(), Err(InputError::Empty)));
    s.set_input("   ").unwrap();
    let err = s.evaluate().unwrap_err();
    assert!(matches!(err, InputError::Empty));
    assert_eq!(err.to_string(), "Enter a value to convert.");
}

#[test]
fn text_is_not_a_number() {
    let mut s = session(CategoryKey::Time);
    s.set_input("abc").unwrap();
    let err = s.evaluate().unwrap_err();
    assert!(matches!(err, InputError::NotANumber(ref raw) if raw == "abc"));
    assert_eq!(err.to_string(), "Please enter a valid number.");
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let mut s = session(CategoryKey::Time);
    s.set_from_unit("h").unwrap();
    s.set_to_unit("s").unwrap();
    s.set_input(" 1.5 ").unwrap();
    assert_eq!(s.evaluate().unwrap().value, 5400.0);
}

#[test]
fn negative_input_is_blocked_outside_temperature() {
    let mut s = session(CategoryKey::Length);
    s.set_input("7").unwrap();
    let err = s.set_input("-5").unwrap_err();
    assert!(matches!(err, InputError::NegativeNotAllowed(CategoryKey::Length)));
    assert_eq!(s.input(), "");
    assert!(matches!(s.evaluate(), Err(InputError::Empty)));
}

#[test]
fn negative_temperatures_are_fine() {
    let mut s = session(CategoryKey::Temperature);
    s.set_input("-40").unwrap();
    let r = s.evaluate().unwrap();
    assert_eq!(r.value, -40.0);
    assert_eq!(r.formula.temperature_variant().map(|v| v.key()), Some("c-f"));
}

#[test]
fn non_finite_text_reaches_the_engine_and_is_rejected() {
    let mut s = session(CategoryKey::Force);
    for raw in ["inf", "NaN"] {
        s.set_input(raw).unwrap();
        let err = s.evaluate().unwrap_err();
        assert!(
            matches!(err, InputError::Convert(ConvertError::InvalidMagnitude(_))),
            "{raw}: got {err:?}"
        );
    }
}
