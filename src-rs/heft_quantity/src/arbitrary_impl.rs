//! `Arbitrary` support for the fuzz targets.

use arbitrary::{Arbitrary, Result, Unstructured};
use heft_unit::ConversionTable;

use crate::Quantity;

impl<'a> Arbitrary<'a> for Quantity {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let magnitude = u.arbitrary::<f64>()?;

        let units: Vec<_> = ConversionTable::global().units().collect();
        let index = u.choose_index(units.len())?;

        Ok(Self::new(magnitude, units[index]))
    }
}
