use std::{cmp::Ordering, fmt};

use heft_unit::{ConversionTable, Unit, UnitError};

use crate::round::round_half_even;

/// A measured weight: a magnitude paired with a unit from the conversion
/// table.
///
/// Quantities are immutable values with no identity semantics: they are
/// freely copyable, and two quantities are interchangeable whenever they
/// compare equal. The magnitude is unconstrained, so zero and negative
/// weights are representable even though they are physically implausible.
///
/// All comparisons normalize both operands to the canonical unit and round
/// each to the nearest integer before comparing, so `20 kg == 44 lb`
/// (`44 * 0.45` rounds to `20`). See the [`PartialEq`] impl for the
/// consequences of rounding before comparing.
#[derive(Debug, Clone, Copy)]
pub struct Quantity {
    magnitude: f64,
    unit: Unit,
}

impl Quantity {
    /// Creates a new quantity.
    #[must_use]
    pub const fn new(magnitude: f64, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    /// Creates a new quantity in the canonical unit.
    #[must_use]
    pub fn canonical(magnitude: f64) -> Self {
        Self::new(magnitude, ConversionTable::global().canonical())
    }

    /// Creates a new quantity from a unit symbol.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::UnknownUnit`] if the symbol is not a key in the
    /// conversion table.
    pub fn from_symbol(magnitude: f64, symbol: &str) -> Result<Self, UnitError> {
        let unit = ConversionTable::global().resolve(symbol)?;
        Ok(Self::new(magnitude, unit))
    }

    /// Returns the magnitude of the quantity.
    #[must_use]
    pub const fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Returns the unit of the quantity.
    #[must_use]
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// Converts the quantity to the target unit, rounding the result to the
    /// nearest integer (ties to even, see [`round_half_even`]).
    ///
    /// This is a pure function: the quantity itself is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::UnknownUnit`] if the table defines no conversion
    /// path from the quantity's unit to `target`.
    pub fn convert(&self, target: Unit) -> Result<i64, UnitError> {
        let factor = ConversionTable::global().factor(self.unit, target)?;
        Ok(round_half_even(self.magnitude * factor))
    }

    /// Converts the quantity to the canonical unit.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::UnknownUnit`] if the table defines no conversion
    /// path from the quantity's unit to the canonical unit.
    pub fn canonical_value(&self) -> Result<i64, UnitError> {
        self.convert(ConversionTable::global().canonical())
    }

    /// Compares two quantities by their rounded canonical values.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::UnknownUnit`] if either quantity's unit has no
    /// conversion path to the canonical unit.
    pub fn checked_cmp(&self, rhs: &Self) -> Result<Ordering, UnitError> {
        Ok(self.canonical_value()?.cmp(&rhs.canonical_value()?))
    }

    /// Checks if two quantities are equal.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::UnknownUnit`] if either quantity's unit has no
    /// conversion path to the canonical unit.
    pub fn checked_eq(&self, rhs: &Self) -> Result<bool, UnitError> {
        self.checked_cmp(rhs)
            .map(|ordering| ordering == Ordering::Equal)
    }

    /// Checks if two quantities are not equal.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::UnknownUnit`] if either quantity's unit has no
    /// conversion path to the canonical unit.
    pub fn checked_ne(&self, rhs: &Self) -> Result<bool, UnitError> {
        self.checked_eq(rhs).map(|eq| !eq)
    }

    /// Checks if the left quantity is less than the right quantity.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::UnknownUnit`] if either quantity's unit has no
    /// conversion path to the canonical unit.
    pub fn checked_lt(&self, rhs: &Self) -> Result<bool, UnitError> {
        self.checked_cmp(rhs)
            .map(|ordering| ordering == Ordering::Less)
    }

    /// Checks if the left quantity is greater than the right quantity.
    ///
    /// `a > b` is defined as `b < a`.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::UnknownUnit`] if either quantity's unit has no
    /// conversion path to the canonical unit.
    pub fn checked_gt(&self, rhs: &Self) -> Result<bool, UnitError> {
        rhs.checked_lt(self)
    }

    /// Checks if the left quantity is less than or equal to the right
    /// quantity.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::UnknownUnit`] if either quantity's unit has no
    /// conversion path to the canonical unit.
    pub fn checked_lte(&self, rhs: &Self) -> Result<bool, UnitError> {
        self.checked_cmp(rhs)
            .map(|ordering| ordering == Ordering::Less || ordering == Ordering::Equal)
    }

    /// Checks if the left quantity is greater than or equal to the right
    /// quantity.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::UnknownUnit`] if either quantity's unit has no
    /// conversion path to the canonical unit.
    pub fn checked_gte(&self, rhs: &Self) -> Result<bool, UnitError> {
        self.checked_cmp(rhs)
            .map(|ordering| ordering == Ordering::Greater || ordering == Ordering::Equal)
    }
}

impl PartialEq for Quantity {
    /// Conceptual equality: two quantities are equal iff their rounded
    /// canonical-unit magnitudes are equal, regardless of the units they
    /// are expressed in. Symmetric and reflexive by construction.
    ///
    /// Each operand is rounded independently before the comparison, so
    /// equality behaves like bucket membership rather than closeness:
    /// quantities nearly a whole canonical unit apart can compare equal
    /// while quantities a hair apart on opposite sides of a rounding
    /// boundary compare unequal. Chains of approximately-equal values do
    /// not compose transitively. This is a known property of rounding
    /// before comparing, not a defect; comparing unrounded values would
    /// change observable behavior.
    ///
    /// A quantity whose unit has no conversion path to the canonical unit
    /// is equal to nothing, itself included. Use [`Quantity::checked_eq`]
    /// to surface the error instead.
    fn eq(&self, other: &Self) -> bool {
        self.checked_eq(other).unwrap_or(false)
    }
}

impl PartialOrd for Quantity {
    /// Ordering by rounded canonical value, with the same derivation rules
    /// as the checked comparisons: `a <= b` holds iff `a < b` or `a == b`,
    /// and `a > b` holds iff `b < a`.
    ///
    /// Returns `None` if either unit has no conversion path to the
    /// canonical unit; use [`Quantity::checked_cmp`] to surface the error
    /// instead.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.checked_cmp(other).ok()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}
