#![no_main]

use libfuzzer_sys::fuzz_target;
use shared::FiniteQuantity;

// Checks that every comparison operation is derived from the same rounded
// canonical ordering: ne negates eq, lte is lt-or-eq, gte is gt-or-eq,
// and gt flips lt. Also checks that the operator impls agree with the
// checked methods and that eq is symmetric and reflexive.

fuzz_target!(|data: (FiniteQuantity, FiniteQuantity)| {
    let (FiniteQuantity(a), FiniteQuantity(b)) = data;

    let eq = a.checked_eq(&b).expect("builtin units always reach canonical");
    let ne = a.checked_ne(&b).expect("builtin units always reach canonical");
    let lt = a.checked_lt(&b).expect("builtin units always reach canonical");
    let gt = a.checked_gt(&b).expect("builtin units always reach canonical");
    let lte = a.checked_lte(&b).expect("builtin units always reach canonical");
    let gte = a.checked_gte(&b).expect("builtin units always reach canonical");

    assert_eq!(ne, !eq, "ne must negate eq for {a} vs {b}");
    assert_eq!(lte, lt || eq, "lte must be lt-or-eq for {a} vs {b}");
    assert_eq!(gte, gt || eq, "gte must be gt-or-eq for {a} vs {b}");
    assert_eq!(
        gt,
        b.checked_lt(&a).expect("builtin units always reach canonical"),
        "gt must flip lt for {a} vs {b}"
    );

    assert_eq!(
        eq,
        b.checked_eq(&a).expect("builtin units always reach canonical"),
        "eq must be symmetric for {a} vs {b}"
    );
    assert!(
        a.checked_eq(&a).expect("builtin units always reach canonical"),
        "eq must be reflexive for {a}"
    );

    // the operator surface delegates to the same comparison
    assert_eq!(a == b, eq);
    assert_eq!(a != b, ne);
    assert_eq!(a < b, lt);
    assert_eq!(a > b, gt);
    assert_eq!(a <= b, lte);
    assert_eq!(a >= b, gte);
});
