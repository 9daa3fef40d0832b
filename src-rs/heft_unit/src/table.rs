use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::{Unit, error::UnitError};

/// The canonical unit, to which all comparisons normalize.
const CANONICAL_SYMBOL: &str = "kg";

static GLOBAL: LazyLock<ConversionTable> = LazyLock::new(ConversionTable::builtin);

/// The fixed mapping from (source unit, target unit) pairs to multiplicative
/// conversion factors.
///
/// The table is read-only after construction. Every source row carries an
/// identity entry and a path to the canonical unit. Note that the cross
/// factors are not mutual inverses (`kg -> lb` is `2.2` while `lb -> kg` is
/// `0.45`), so round-trip conversions are an observable property of the
/// table contents rather than exact identities.
#[derive(Debug, Clone)]
pub struct ConversionTable {
    factors: IndexMap<&'static str, IndexMap<&'static str, f64>>,
}

impl ConversionTable {
    fn builtin() -> Self {
        let kg = IndexMap::from([("kg", 1.0), ("lb", 2.2)]);
        let lb = IndexMap::from([("lb", 1.0), ("kg", 0.45)]);

        Self {
            factors: IndexMap::from([("kg", kg), ("lb", lb)]),
        }
    }

    /// Returns the process-wide table, initialized on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Returns the canonical unit (`kg`).
    ///
    /// # Panics
    ///
    /// Panics if the canonical symbol is missing from the table, which the
    /// builtin table rules out.
    #[must_use]
    pub fn canonical(&self) -> Unit {
        self.resolve(CANONICAL_SYMBOL)
            .expect("the canonical unit is always a key in the table")
    }

    /// Resolves a symbol to a [`Unit`].
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::UnknownUnit`] if the symbol is not a key in the
    /// table.
    pub fn resolve(&self, symbol: &str) -> Result<Unit, UnitError> {
        match self.factors.get_key_value(symbol) {
            Some((&symbol, _)) => Ok(Unit::new(symbol)),
            None => Err(UnitError::UnknownUnit {
                symbol: symbol.to_string(),
            }),
        }
    }

    /// Looks up the multiplicative factor for converting `source` to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::UnknownUnit`] if the table defines no conversion
    /// path from `source` to `target`.
    pub fn factor(&self, source: Unit, target: Unit) -> Result<f64, UnitError> {
        self.factors
            .get(source.symbol())
            .and_then(|row| row.get(target.symbol()))
            .copied()
            .ok_or_else(|| UnitError::UnknownUnit {
                symbol: target.symbol().to_string(),
            })
    }

    /// Returns the closed set of units, in table order.
    pub fn units(&self) -> impl Iterator<Item = Unit> + '_ {
        self.factors.keys().copied().map(Unit::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod success_tests {
        use super::*;

        #[test]
        fn test_resolve_kilograms() {
            let unit = ConversionTable::global()
                .resolve("kg")
                .expect("should resolve kg");
            assert_eq!(unit.symbol(), "kg");
        }

        #[test]
        fn test_resolve_pounds() {
            let unit = ConversionTable::global()
                .resolve("lb")
                .expect("should resolve lb");
            assert_eq!(unit.symbol(), "lb");
        }

        #[test]
        fn test_canonical_is_kilograms() {
            let table = ConversionTable::global();
            assert_eq!(table.canonical().symbol(), "kg");
        }

        #[test]
        fn test_identity_factors() {
            let table = ConversionTable::global();
            let kg = table.resolve("kg").expect("should resolve kg");
            let lb = table.resolve("lb").expect("should resolve lb");

            let kg_to_kg = table.factor(kg, kg).expect("should have kg -> kg");
            let lb_to_lb = table.factor(lb, lb).expect("should have lb -> lb");

            assert!((kg_to_kg - 1.0).abs() < f64::EPSILON);
            assert!((lb_to_lb - 1.0).abs() < f64::EPSILON);
        }

        #[test]
        fn test_cross_factors_are_not_inverses() {
            let table = ConversionTable::global();
            let kg = table.resolve("kg").expect("should resolve kg");
            let lb = table.resolve("lb").expect("should resolve lb");

            let kg_to_lb = table.factor(kg, lb).expect("should have kg -> lb");
            let lb_to_kg = table.factor(lb, kg).expect("should have lb -> kg");

            // the table is data, not derived scale factors
            assert!((kg_to_lb * lb_to_kg - 1.0).abs() > 1e-3);
        }

        #[test]
        fn test_units_in_table_order() {
            let symbols: Vec<_> = ConversionTable::global()
                .units()
                .map(|unit| unit.symbol())
                .collect();
            assert_eq!(symbols, vec!["kg", "lb"]);
        }

        #[test]
        fn test_every_unit_reaches_canonical() {
            let table = ConversionTable::global();
            let canonical = table.canonical();

            for unit in table.units() {
                table
                    .factor(unit, canonical)
                    .expect("every unit should have a canonical path");
            }
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_resolve_unknown_symbol() {
            let result = ConversionTable::global().resolve("st");
            assert_eq!(
                result,
                Err(UnitError::UnknownUnit {
                    symbol: "st".to_string()
                })
            );
        }

        #[test]
        fn test_resolve_is_case_sensitive() {
            let result = ConversionTable::global().resolve("KG");
            assert_eq!(
                result,
                Err(UnitError::UnknownUnit {
                    symbol: "KG".to_string()
                })
            );
        }

        #[test]
        fn test_unknown_unit_display() {
            let error = UnitError::UnknownUnit {
                symbol: "st".to_string(),
            };
            assert_eq!(error.to_string(), "unknown unit 'st'");
        }
    }
}
