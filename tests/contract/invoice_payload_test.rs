// Contract tests for the JSON bodies exchanged with the remote API. The
// invoice submission body must keep the exact shape the API consumes:
//
//   { type, customerId?, customerName?, items: [{name, price, quantity}], createdAt }
//
// Optional fields are omitted entirely when absent, never sent as null.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde_json::Value;

use facturador::invoices::{CreateInvoiceRequest, Invoice, InvoiceDraft, InvoiceType, LineItem};

fn issue_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 3).unwrap()
}

fn body_of(request: &CreateInvoiceRequest) -> Value {
    serde_json::from_str(&request.to_json_body().unwrap()).unwrap()
}

#[test]
fn credit_submission_body_shape() {
    let mut draft = InvoiceDraft::new(InvoiceType::Credit);
    draft.set_customer(42);
    draft.add_item(LineItem::new("Candado", dec!(500.00), 1).unwrap());
    draft.add_item(LineItem::new("Cerradura", dec!(1200.00), 2).unwrap());
    draft.set_issue_date(issue_date());

    let body = body_of(&draft.to_request().unwrap());

    assert_eq!(body["type"], "CREDIT");
    assert_eq!(body["customerId"], 42);
    assert_eq!(body["createdAt"], "2025-11-03");

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Candado");
    assert_eq!(items[0]["price"], "500.00");
    assert_eq!(items[0]["quantity"], 1);
    assert_eq!(items[1]["quantity"], 2);

    // No free-text name on a customer-referenced document
    assert!(body.get("customerName").is_none());
}

#[test]
fn basic_submission_body_shape() {
    let mut draft = InvoiceDraft::new(InvoiceType::Basic);
    draft.set_customer_name("Juan Pérez");
    draft.add_item(LineItem::new("Llave", dec!(150.00), 2).unwrap());
    draft.set_issue_date(issue_date());

    let body = body_of(&draft.to_request().unwrap());

    assert_eq!(body["type"], "BASIC");
    assert_eq!(body["customerName"], "Juan Pérez");
    assert!(body.get("customerId").is_none());
}

#[test]
fn end_consumer_body_omits_both_customer_fields() {
    let mut draft = InvoiceDraft::new(InvoiceType::EndConsumer);
    draft.add_item(LineItem::new("Llave", dec!(150.00), 1).unwrap());
    draft.set_issue_date(issue_date());

    let body = body_of(&draft.to_request().unwrap());

    assert_eq!(body["type"], "ENDCONSUMER");
    assert!(body.get("customerId").is_none());
    assert!(body.get("customerName").is_none());
}

#[test]
fn submission_body_round_trips() {
    let mut draft = InvoiceDraft::new(InvoiceType::Quote);
    draft.set_customer(7);
    draft.add_item(LineItem::new("Instalación", dec!(800.00), 1).unwrap());
    draft.set_issue_date(issue_date());

    let request = draft.to_request().unwrap();
    let json = request.to_json_body().unwrap();
    let parsed: CreateInvoiceRequest = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, request);
}

#[test]
fn persisted_invoice_response_parses() {
    // A fiscal-credit invoice the way the API returns it
    let response = r#"{
        "id": 118,
        "customerId": 42,
        "customer": {
            "id": 42,
            "name": "Ferretería El Candado",
            "document": "131246871",
            "phone": "8094568855",
            "createdAt": "2025-01-10T14:00:00Z"
        },
        "type": "CREDIT",
        "document": "131246871",
        "ncf": "B0100000200",
        "items": [
            {"name": "Candado", "price": "500.00", "quantity": 1},
            {"name": "Cerradura", "price": "1200.00", "quantity": 1}
        ],
        "subtotal": "1700.00",
        "taxes": "306.00",
        "total": "2006.00",
        "createdAt": "2025-11-03T15:30:00Z"
    }"#;

    let invoice: Invoice = serde_json::from_str(response).unwrap();

    assert_eq!(invoice.id, 118);
    assert_eq!(invoice.invoice_type, InvoiceType::Credit);
    assert_eq!(invoice.ncf.as_deref(), Some("B0100000200"));
    assert_eq!(invoice.customer_display_name(), Some("Ferretería El Candado"));

    // The display layer recomputes the same figures the server stored
    let totals = invoice.computed_totals().rounded();
    assert_eq!(totals.subtotal, invoice.subtotal);
    assert_eq!(totals.itbis, invoice.taxes);
    assert_eq!(totals.total, invoice.total);
}
