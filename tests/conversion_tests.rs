use converter_skill::conversion::{resolve, resolve_slots, ConversionCatalog, ConversionOutcome};
use converter_skill::Language;

fn converted(value: f64, from: &str, converted: f64, to: &str) -> ConversionOutcome {
    ConversionOutcome::Converted {
        value,
        from: from.to_string(),
        converted,
        to: to.to_string(),
    }
}

fn unsupported(from: &str, to: &str) -> ConversionOutcome {
    ConversionOutcome::Unsupported {
        from: from.to_string(),
        to: to.to_string(),
    }
}

#[test]
fn test_feet_to_inches() {
    let catalog = ConversionCatalog::default();
    let english = catalog.table(Language::English).unwrap();

    assert_eq!(resolve(3.0, "feet", "inches", english), converted(3.0, "feet", 36.0, "inches"));
}

#[test]
fn test_unknown_target_is_unsupported() {
    let catalog = ConversionCatalog::default();
    let english = catalog.table(Language::English).unwrap();

    for v in [0.0, 1.0, 2.5, -7.0, 1e6] {
        assert_eq!(resolve(v, "feet", "miles", english), unsupported("feet", "miles"));
        assert_eq!(resolve(v, "miles", "feet", english), unsupported("miles", "feet"));
    }
}

#[test]
fn test_spanish_metros_to_centimetros() {
    let catalog = ConversionCatalog::default();
    let spanish = catalog.table(Language::Spanish).unwrap();

    assert_eq!(
        resolve(2.0, "metros", "centímetros", spanish),
        converted(2.0, "metros", 200.0, "centímetros")
    );
}

#[test]
fn test_every_listed_pair_multiplies() {
    let catalog = ConversionCatalog::default();

    for lang in Language::ALL {
        let table = catalog.table(lang).unwrap();
        for (from, to, m) in table.pairs() {
            for v in [0.0, 1.0, 2.5, -7.0, 1e6] {
                assert_eq!(
                    resolve(v, from, to, table),
                    converted(v, from, v * m, to),
                    "{} -> {} in {}",
                    from,
                    to,
                    table.name()
                );
            }
        }
    }
}

#[test]
fn test_no_identity_and_no_chaining() {
    let catalog = ConversionCatalog::default();
    let english = catalog.table(Language::English).unwrap();

    for unit in english.units() {
        assert_eq!(resolve(1.0, unit, unit, english), unsupported(unit, unit));
    }
    // Spanish units are not visible through the English table.
    assert_eq!(resolve(1.0, "metros", "feet", english), unsupported("metros", "feet"));
}

#[test]
fn test_unit_case_is_folded() {
    let catalog = ConversionCatalog::default();
    let english = catalog.table(Language::English).unwrap();
    let spanish = catalog.table(Language::Spanish).unwrap();

    assert_eq!(resolve(4.0, "FEET", "Inches", english), resolve(4.0, "feet", "inches", english));
    assert_eq!(
        resolve(1.0, "KILÓMETROS", "Metros", spanish),
        converted(1.0, "kilómetros", 1000.0, "metros")
    );
    assert_eq!(resolve(1.0, "Feet", "MILES", english), unsupported("feet", "miles"));
}

#[test]
fn test_word_quantity_is_invalid() {
    let catalog = ConversionCatalog::default();
    let english = catalog.table(Language::English).unwrap();

    assert_eq!(
        resolve_slots("three", "feet", "inches", english),
        ConversionOutcome::InvalidQuantity { raw: "three".to_string() }
    );
    // Quantity is checked before the unit pair.
    assert!(matches!(
        resolve_slots("?", "feet", "miles", english),
        ConversionOutcome::InvalidQuantity { .. }
    ));
    assert_eq!(
        resolve_slots(" 3 ", "feet", "inches", english),
        converted(3.0, "feet", 36.0, "inches")
    );
}

#[test]
fn test_overflowing_quantity_is_invalid() {
    let catalog = ConversionCatalog::default();
    let english = catalog.table(Language::English).unwrap();

    // 1e308 parses as a finite float but 1e308 * 36 does not fit.
    assert_eq!(
        resolve_slots("1e308", "yards", "inches", english),
        ConversionOutcome::InvalidQuantity { raw: "1e308".to_string() }
    );
    assert!(matches!(
        resolve_slots("-1e308", "yards", "inches", english),
        ConversionOutcome::InvalidQuantity { .. }
    ));
    // Shrinking the same value stays finite.
    assert!(matches!(
        resolve_slots("1e308", "inches", "yards", english),
        ConversionOutcome::Converted { .. }
    ));
}
