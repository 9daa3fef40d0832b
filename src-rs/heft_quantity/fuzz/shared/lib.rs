use heft_quantity::Quantity;
use libfuzzer_sys::arbitrary::{self, Result, Unstructured};

/// Magnitudes are kept within this bound so that every conversion product
/// stays exactly representable as an f64 integer and within i64 range.
const MAGNITUDE_BOUND: f64 = 1e12;

/// A quantity whose magnitude is guaranteed finite and bounded.
#[derive(Debug, Clone, Copy)]
pub struct FiniteQuantity(pub Quantity);

fn pick_magnitude(seed: f64) -> f64 {
    if seed.is_nan() {
        0.0
    } else if seed.is_infinite() && seed.is_sign_positive() {
        MAGNITUDE_BOUND
    } else if seed.is_infinite() && seed.is_sign_negative() {
        -MAGNITUDE_BOUND
    } else {
        seed % MAGNITUDE_BOUND
    }
}

impl<'a> arbitrary::Arbitrary<'a> for FiniteQuantity {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let seed = u.arbitrary::<Quantity>()?;
        let magnitude = pick_magnitude(seed.magnitude());

        assert!(
            magnitude.is_finite() && magnitude.abs() <= MAGNITUDE_BOUND,
            "magnitude ({magnitude}) escaped the bound"
        );

        Ok(Self(Quantity::new(magnitude, seed.unit())))
    }
}
