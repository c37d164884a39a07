// Property-based tests for ITBIS calculation.
//
// Uses proptest to validate calculation properties across many inputs.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use facturador::invoices::InvoiceType;
use facturador::taxes::ItbisCalculator;

proptest! {
    #[test]
    fn itbis_is_deterministic(subtotal_cents in 0i64..1_000_000_000i64) {
        let subtotal = Decimal::new(subtotal_cents, 2);

        let tax1 = ItbisCalculator::calculate(subtotal).unwrap();
        let tax2 = ItbisCalculator::calculate(subtotal).unwrap();

        prop_assert_eq!(tax1, tax2, "ITBIS must be deterministic");
    }

    #[test]
    fn itbis_is_non_negative(subtotal_cents in 0i64..1_000_000_000i64) {
        let subtotal = Decimal::new(subtotal_cents, 2);
        let tax = ItbisCalculator::calculate(subtotal).unwrap();

        prop_assert!(tax >= Decimal::ZERO, "ITBIS must be non-negative: got {}", tax);
    }

    #[test]
    fn itbis_never_exceeds_subtotal(subtotal_cents in 0i64..1_000_000_000i64) {
        let subtotal = Decimal::new(subtotal_cents, 2);
        let tax = ItbisCalculator::calculate(subtotal).unwrap();

        prop_assert!(
            tax <= subtotal,
            "18% ITBIS {} should not exceed subtotal {}",
            tax,
            subtotal
        );
    }

    #[test]
    fn itbis_is_exactly_eighteen_percent(subtotal_cents in 0i64..1_000_000_000i64) {
        let subtotal = Decimal::new(subtotal_cents, 2);
        let tax = ItbisCalculator::calculate(subtotal).unwrap();

        prop_assert_eq!(tax, subtotal * dec!(0.18));
    }

    #[test]
    fn itbis_scales_linearly(subtotal_cents in 1i64..10_000_000i64, multiplier in 2i64..10i64) {
        let subtotal = Decimal::new(subtotal_cents, 2);
        let scaled = Decimal::new(subtotal_cents * multiplier, 2);

        let tax = ItbisCalculator::calculate(subtotal).unwrap();
        let scaled_tax = ItbisCalculator::calculate(scaled).unwrap();

        // Unrounded amounts scale exactly
        prop_assert_eq!(scaled_tax, tax * Decimal::from(multiplier));
    }
}

#[test]
fn itbis_specific_amounts() {
    // 18% of 1700.00 = 306.00
    assert_eq!(
        ItbisCalculator::calculate(dec!(1700.00)).unwrap(),
        dec!(306.00)
    );

    // 18% of 100 = 18
    assert_eq!(ItbisCalculator::calculate(dec!(100)).unwrap(), dec!(18));

    // 18% of 150.00 = 27.00
    assert_eq!(
        ItbisCalculator::calculate(dec!(150.00)).unwrap(),
        dec!(27.00)
    );

    // Sub-cent precision is preserved until display: 18% of 0.05 = 0.009
    assert_eq!(
        ItbisCalculator::calculate(dec!(0.05)).unwrap(),
        dec!(0.009)
    );
}

#[test]
fn itbis_zero_subtotal_is_zero() {
    assert_eq!(
        ItbisCalculator::calculate(Decimal::ZERO).unwrap(),
        Decimal::ZERO
    );
}

#[test]
fn itbis_rejects_negative_subtotal() {
    assert!(ItbisCalculator::calculate(dec!(-0.01)).is_err());
}

#[test]
fn itbis_exemption_follows_document_type() {
    assert!(!ItbisCalculator::applies_to(InvoiceType::Basic));

    for taxed in [
        InvoiceType::Governmental,
        InvoiceType::Quote,
        InvoiceType::EndConsumer,
        InvoiceType::Credit,
    ] {
        assert!(ItbisCalculator::applies_to(taxed), "{} should be taxed", taxed);
    }
}
