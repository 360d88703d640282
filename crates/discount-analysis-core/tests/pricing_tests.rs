use discount_analysis_core::pricing::{
    analyze_discount, compute_revenue, DiscountAnalysisInput, PricingInputs,
};
use discount_analysis_core::DiscountError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Pricing engine
// ===========================================================================

fn inputs(
    unit_price: Decimal,
    quantity: Decimal,
    margin_rate: Decimal,
    discount_rate: Decimal,
    acquisition_cost_rate: Decimal,
) -> PricingInputs {
    PricingInputs {
        unit_price,
        quantity,
        margin_rate,
        discount_rate,
        acquisition_cost_rate,
    }
}

#[test]
fn test_formula_holds_across_a_grid() {
    let prices = [dec!(0), dec!(9.99), dec!(37.0), dec!(1250)];
    let quantities = [dec!(0), dec!(1), dec!(1350)];
    let rates = [dec!(0), dec!(0.05), dec!(0.2), dec!(1)];

    for &p in &prices {
        for &q in &quantities {
            for &m in &rates {
                for &d in &rates {
                    for &c in &rates {
                        let r = compute_revenue(&inputs(p, q, m, d, c)).unwrap();
                        assert_eq!(r.total_revenue, q * p * (m - d - c * m));
                        assert_eq!(r.profit_per_unit, p * r.adjusted_margin_rate);
                    }
                }
            }
        }
    }
}

#[test]
fn test_no_discount_reduces_to_plain_margin() {
    for m in [dec!(0), dec!(0.15), dec!(0.35), dec!(1)] {
        let r = compute_revenue(&PricingInputs::undiscounted(dec!(37.0), dec!(1000), m)).unwrap();
        assert_eq!(r.adjusted_margin_rate, m);
    }
}

#[test]
fn test_baseline_example() {
    let r = compute_revenue(&inputs(dec!(37.0), dec!(1000), dec!(0.20), dec!(0), dec!(0))).unwrap();
    assert_eq!(r.total_revenue, dec!(7400.00));
}

#[test]
fn test_discounted_example() {
    let r = compute_revenue(&inputs(
        dec!(37.0),
        dec!(1350),
        dec!(0.20),
        dec!(0.05),
        dec!(0.01),
    ))
    .unwrap();
    assert_eq!(r.adjusted_margin_rate, dec!(0.148));
    assert_eq!(r.profit_per_unit, dec!(5.476));
    assert_eq!(r.total_revenue, dec!(7392.60));
}

#[test]
fn test_invalid_inputs_report_field() {
    let cases = [
        ("unit_price", inputs(dec!(-37), dec!(1), dec!(0.2), dec!(0), dec!(0))),
        ("quantity", inputs(dec!(37), dec!(-1), dec!(0.2), dec!(0), dec!(0))),
        ("margin_rate", inputs(dec!(37), dec!(1), dec!(20), dec!(0), dec!(0))),
    ];
    for (expected, case) in cases {
        match compute_revenue(&case) {
            Err(DiscountError::InvalidInput { field, reason }) => {
                assert_eq!(field, expected);
                assert!(!reason.is_empty());
            }
            other => panic!("expected InvalidInput for {expected}, got {other:?}"),
        }
    }
}

// ===========================================================================
// Discount decision
// ===========================================================================

#[test]
fn test_decision_from_json_input() {
    let input: DiscountAnalysisInput = serde_json::from_str(
        r#"{
            "unit_price": "37.0",
            "current_quantity": "1000",
            "margin_rate": "0.20",
            "discount_rate": "0.05",
            "acquisition_cost_rate": "0.01",
            "estimated_quantity": "1350"
        }"#,
    )
    .unwrap();
    let out = analyze_discount(&input).unwrap();
    assert!(!out.result.is_advantageous);
    assert_eq!(out.result.revenue_delta, dec!(-7.4));

    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["result"]["verdict"], "not_advantageous");
    assert!(json["metadata"]["version"].is_string());
}

#[test]
fn test_break_even_volume_is_not_advantageous() {
    // 7400 / 5.476 is not whole, so check the integers around it
    let below = DiscountAnalysisInput {
        unit_price: dec!(37.0),
        current_quantity: dec!(1000),
        margin_rate: dec!(0.20),
        discount_rate: dec!(0.05),
        acquisition_cost_rate: dec!(0.01),
        estimated_quantity: dec!(1351),
    };
    let above = DiscountAnalysisInput {
        estimated_quantity: dec!(1352),
        ..below.clone()
    };
    // 1351 * 5.476 = 7398.076, 1352 * 5.476 = 7403.552
    assert!(!analyze_discount(&below).unwrap().result.is_advantageous);
    assert!(analyze_discount(&above).unwrap().result.is_advantageous);
}

// ===========================================================================
// Numeric extremes
// ===========================================================================

#[test]
fn test_extreme_inputs_return_errors_instead_of_panicking() {
    let huge = inputs(
        dec!(100000000000000000000),
        dec!(10000000000),
        dec!(0.5),
        dec!(0),
        dec!(0),
    );
    match compute_revenue(&huge) {
        Err(DiscountError::InvalidInput { field, .. }) => assert_eq!(field, "quantity"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }

    let largest_price = inputs(Decimal::MAX, dec!(1), dec!(1), dec!(0), dec!(0));
    assert_eq!(compute_revenue(&largest_price).unwrap().total_revenue, Decimal::MAX);
}

#[test]
fn test_decision_rejects_delta_outside_decimal_range() {
    // each side fits (+/- 5e28) but their difference does not
    let input = DiscountAnalysisInput {
        unit_price: dec!(100000000000000),
        current_quantity: dec!(500000000000000),
        margin_rate: dec!(1),
        discount_rate: dec!(1),
        acquisition_cost_rate: dec!(1),
        estimated_quantity: dec!(500000000000000),
    };
    match analyze_discount(&input) {
        Err(DiscountError::InvalidInput { field, .. }) => assert_eq!(field, "revenue_delta"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}
