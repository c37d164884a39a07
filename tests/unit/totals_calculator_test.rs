// Property-based tests for invoice totals: order independence, the exact
// subtotal + ITBIS = total identity, and the tax exemption rule, plus the
// concrete scenarios the front-end displays.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use facturador::invoices::{InvoiceType, LineItem, TotalsCalculator};

const ALL_TYPES: [InvoiceType; 5] = [
    InvoiceType::Governmental,
    InvoiceType::Quote,
    InvoiceType::EndConsumer,
    InvoiceType::Credit,
    InvoiceType::Basic,
];

fn arb_items() -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec((1i64..1_000_000i64, 1i32..100i32), 0..12).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (price_cents, quantity))| {
                LineItem::new(
                    format!("Producto {}", i + 1),
                    Decimal::new(price_cents, 2),
                    quantity,
                )
                .unwrap()
            })
            .collect()
    })
}

fn arb_type() -> impl Strategy<Value = InvoiceType> {
    (0usize..ALL_TYPES.len()).prop_map(|i| ALL_TYPES[i])
}

proptest! {
    #[test]
    fn subtotal_is_invariant_under_permutation(
        items in arb_items(),
        rotation in 0usize..12usize
    ) {
        let invoice_type = InvoiceType::Credit;
        let original = TotalsCalculator::compute(invoice_type, &items);

        let mut reversed = items.clone();
        reversed.reverse();
        prop_assert_eq!(
            TotalsCalculator::compute(invoice_type, &reversed),
            original
        );

        let mut rotated = items.clone();
        if !rotated.is_empty() {
            let len = rotated.len();
            rotated.rotate_left(rotation % len);
        }
        prop_assert_eq!(
            TotalsCalculator::compute(invoice_type, &rotated),
            original
        );
    }

    #[test]
    fn total_is_exactly_subtotal_plus_itbis(
        invoice_type in arb_type(),
        items in arb_items()
    ) {
        let totals = TotalsCalculator::compute(invoice_type, &items);
        prop_assert_eq!(totals.total, totals.subtotal + totals.itbis);

        // The identity must also survive display rounding
        let rounded = totals.rounded();
        prop_assert_eq!(rounded.total, rounded.subtotal + rounded.itbis);
    }

    #[test]
    fn itbis_is_zero_for_basic_and_proportional_otherwise(
        invoice_type in arb_type(),
        items in arb_items()
    ) {
        let totals = TotalsCalculator::compute(invoice_type, &items);

        if invoice_type == InvoiceType::Basic {
            prop_assert_eq!(totals.itbis, Decimal::ZERO);
        } else {
            prop_assert_eq!(totals.itbis, totals.subtotal * dec!(0.18));
        }
    }

    #[test]
    fn subtotal_is_the_sum_of_line_subtotals(items in arb_items()) {
        let expected: Decimal = items.iter().map(|item| item.subtotal()).sum();
        let totals = TotalsCalculator::compute(InvoiceType::EndConsumer, &items);

        prop_assert_eq!(totals.subtotal, expected);
    }

    #[test]
    fn line_breakdown_rows_sum_to_the_totals(
        invoice_type in arb_type(),
        items in arb_items()
    ) {
        let totals = TotalsCalculator::compute(invoice_type, &items);
        let lines = TotalsCalculator::line_breakdown(invoice_type, &items);

        prop_assert_eq!(lines.len(), items.len());

        let net_sum: Decimal = lines.iter().map(|l| l.net_amount).sum();
        let itbis_sum: Decimal = lines.iter().map(|l| l.itbis).sum();
        let total_sum: Decimal = lines.iter().map(|l| l.line_total).sum();

        prop_assert_eq!(net_sum, totals.subtotal);
        prop_assert_eq!(itbis_sum, totals.itbis);
        prop_assert_eq!(total_sum, totals.total);
    }
}

#[test]
fn empty_item_list_yields_zero_subtotal() {
    for invoice_type in ALL_TYPES {
        let totals = TotalsCalculator::compute(invoice_type, &[]);
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.itbis, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }
}

#[test]
fn basic_receipt_scenario() {
    let items = [LineItem::new("Llave", dec!(150.00), 2).unwrap()];
    let totals = TotalsCalculator::compute(InvoiceType::Basic, &items).rounded();

    assert_eq!(totals.subtotal, dec!(300.00));
    assert_eq!(totals.itbis, dec!(0.00));
    assert_eq!(totals.total, dec!(300.00));
}

#[test]
fn fiscal_credit_scenario() {
    let items = [
        LineItem::new("Candado", dec!(500.00), 1).unwrap(),
        LineItem::new("Cerradura", dec!(1200.00), 1).unwrap(),
    ];
    let totals = TotalsCalculator::compute(InvoiceType::Credit, &items).rounded();

    assert_eq!(totals.subtotal, dec!(1700.00));
    assert_eq!(totals.itbis, dec!(306.00));
    assert_eq!(totals.total, dec!(2006.00));
}
