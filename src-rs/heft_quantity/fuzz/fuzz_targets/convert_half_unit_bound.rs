#![no_main]

use heft_unit::ConversionTable;
use libfuzzer_sys::fuzz_target;
use shared::FiniteQuantity;

// Checks that a conversion result never lands more than half a target unit
// away from the unrounded product, for every conversion path in the table.

fuzz_target!(|data: FiniteQuantity| {
    let FiniteQuantity(quantity) = data;
    let table = ConversionTable::global();

    for target in table.units() {
        let factor = table
            .factor(quantity.unit(), target)
            .expect("the builtin table is total over its units");
        let product = quantity.magnitude() * factor;

        let converted = quantity
            .convert(target)
            .expect("the builtin table is total over its units");

        let difference = (converted as f64 - product).abs();
        assert!(
            difference <= 0.5,
            "conversion of {quantity} to {target} landed {difference} away from {product}"
        );
    }
});
