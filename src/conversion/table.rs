use super::rates::{RateMap, IMPERIAL_LENGTHS, METRIC_LENGTHS_ES};
use crate::kernel::request::Language;
use std::collections::HashMap;

/// Read-only view over one static rate map.
#[derive(Debug, Clone, Copy)]
pub struct ConversionTable {
    name: &'static str,
    rates: &'static RateMap,
}

impl ConversionTable {
    pub const fn new(name: &'static str, rates: &'static RateMap) -> Self {
        Self { name, rates }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Direct lookup only. No identity conversions, no chaining through a
    /// third unit, no inverting a reverse entry.
    pub fn multiplier(&self, from: &str, to: &str) -> Option<f64> {
        self.rates.get(from)?.get(to).copied()
    }

    pub fn units(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rates.keys().copied()
    }

    /// Every listed (from, to, multiplier) triple.
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &'static str, f64)> + '_ {
        self.rates.entries().flat_map(|(from, targets)| {
            targets.entries().map(move |(to, m)| (*from, *to, *m))
        })
    }
}

/// One table per supported language. Built once at startup, never mutated.
#[derive(Debug, Clone)]
pub struct ConversionCatalog {
    tables: HashMap<Language, ConversionTable>,
}

impl ConversionCatalog {
    pub fn new(tables: HashMap<Language, ConversionTable>) -> Self {
        Self { tables }
    }

    pub fn table(&self, language: Language) -> Option<&ConversionTable> {
        self.tables.get(&language)
    }
}

impl Default for ConversionCatalog {
    fn default() -> Self {
        let mut tables = HashMap::new();
        tables.insert(
            Language::English,
            ConversionTable::new("imperial", &IMPERIAL_LENGTHS),
        );
        tables.insert(
            Language::Spanish,
            ConversionTable::new("metric-es", &METRIC_LENGTHS_ES),
        );
        Self::new(tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_a_table() {
        let catalog = ConversionCatalog::default();
        for lang in Language::ALL {
            assert!(catalog.table(lang).is_some(), "no table for {}", lang);
        }
    }

    #[test]
    fn six_pairs_per_table_none_reflexive() {
        let catalog = ConversionCatalog::default();
        for lang in Language::ALL {
            let table = catalog.table(lang).unwrap();
            let pairs: Vec<_> = table.pairs().collect();
            assert_eq!(pairs.len(), 6, "{} should list six pairs", table.name());
            for (from, to, m) in pairs {
                assert_ne!(from, to);
                assert!(m > 0.0, "{} -> {} must be positive", from, to);
                assert_eq!(table.multiplier(from, from), None);
            }
        }
    }

    #[test]
    fn tables_do_not_share_vocabulary() {
        let catalog = ConversionCatalog::default();
        let en = catalog.table(Language::English).unwrap();
        let es = catalog.table(Language::Spanish).unwrap();
        assert_eq!(en.multiplier("metros", "centímetros"), None);
        assert_eq!(es.multiplier("feet", "inches"), None);
        assert_eq!(es.multiplier("metros", "centímetros"), Some(100.0));
    }
}
