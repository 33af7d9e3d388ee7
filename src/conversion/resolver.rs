use super::table::ConversionTable;

#[derive(Debug, Clone, PartialEq)]
pub enum ConversionOutcome {
    Converted {
        value: f64,
        from: String,
        converted: f64,
        to: String,
    },
    /// Either the source unit is unknown or it has no entry for the target.
    Unsupported { from: String, to: String },
    /// The quantity text was not a finite number, or converting it overflowed.
    InvalidQuantity { raw: String },
}

/// Unit names are folded before lookup so "FEET" and "feet" hit the same row.
pub fn normalize_unit(unit: &str) -> String {
    unit.trim().to_lowercase()
}

/// Trims and parses the quantity. `inf` and `NaN` parse as floats but are
/// rejected: they would otherwise be spoken back verbatim.
pub fn parse_quantity(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// PURE FUNCTION: value * table[from][to], or Unsupported.
pub fn resolve(value: f64, from: &str, to: &str, table: &ConversionTable) -> ConversionOutcome {
    let from = normalize_unit(from);
    let to = normalize_unit(to);

    match table.multiplier(&from, &to) {
        Some(m) => ConversionOutcome::Converted {
            value,
            converted: value * m,
            from,
            to,
        },
        None => ConversionOutcome::Unsupported { from, to },
    }
}

/// Slot-level entry point: parses the raw quantity first. A finite quantity
/// whose product overflows is reported like an unparsable one.
pub fn resolve_slots(
    raw_quantity: &str,
    from: &str,
    to: &str,
    table: &ConversionTable,
) -> ConversionOutcome {
    let invalid = || ConversionOutcome::InvalidQuantity {
        raw: raw_quantity.trim().to_string(),
    };
    match parse_quantity(raw_quantity).map(|value| resolve(value, from, to, table)) {
        Some(ConversionOutcome::Converted { converted, .. }) if !converted.is_finite() => invalid(),
        Some(outcome) => outcome,
        None => invalid(),
    }
}
