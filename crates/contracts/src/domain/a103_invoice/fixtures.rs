use once_cell::sync::Lazy;

use super::aggregate::{
    BillingAddress, BillingTransaction, Invoice, InvoiceItem, InvoicePayment, InvoiceStatus,
    PaymentMethod, PaymentMethodKind, TransactionKind,
};

fn item(description: &str, unit_price: f64) -> InvoiceItem {
    InvoiceItem {
        description: description.into(),
        quantity: 1,
        unit_price,
        total: unit_price,
    }
}

fn address(name: &str, company: Option<&str>, street: &str, city: &str, state: &str, zip: &str) -> BillingAddress {
    BillingAddress {
        name: name.into(),
        company: company.map(str::to_string),
        street: street.into(),
        city: city.into(),
        state: state.into(),
        zip: zip.into(),
        country: "USA".into(),
    }
}

fn card_payment(last4: &str, expiry: &str, date: &str) -> InvoicePayment {
    InvoicePayment {
        kind: PaymentMethodKind::CreditCard,
        last4: Some(last4.into()),
        expiry_date: Some(expiry.into()),
        date: date.into(),
    }
}

static INVOICES: Lazy<Vec<Invoice>> = Lazy::new(|| {
    vec![
        Invoice {
            id: "INV-2023-001".into(),
            order_id: "#4392".into(),
            date: "2023-12-15".into(),
            due_date: "2023-12-30".into(),
            amount: 245.5,
            status: InvoiceStatus::Pending,
            items: vec![
                item("Standard Delivery Service", 150.0),
                item("Express Processing Fee", 50.0),
                item("Insurance", 25.0),
                item("Fuel Surcharge", 20.5),
            ],
            payment: None,
            billing_address: address("John Doe", Some("Acme Corp"), "123 Main Street, Suite 400", "New York", "NY", "10001"),
        },
        Invoice {
            id: "INV-2023-002".into(),
            order_id: "#4391".into(),
            date: "2023-12-15".into(),
            due_date: "2023-12-30".into(),
            amount: 320.75,
            status: InvoiceStatus::Pending,
            items: vec![
                item("Long-Distance Delivery", 250.0),
                item("Packaging Service", 35.0),
                item("Insurance", 25.0),
                item("Fuel Surcharge", 10.75),
            ],
            payment: None,
            billing_address: address("Jane Smith", Some("Tech Innovations"), "456 Park Avenue", "Boston", "MA", "02108"),
        },
        Invoice {
            id: "INV-2023-003".into(),
            order_id: "#4390".into(),
            date: "2023-12-14".into(),
            due_date: "2023-12-29".into(),
            amount: 175.25,
            status: InvoiceStatus::Paid,
            items: vec![
                item("Standard Delivery Service", 150.0),
                item("Insurance", 15.0),
                item("Fuel Surcharge", 10.25),
            ],
            payment: Some(card_payment("4242", "05/25", "2023-12-14")),
            billing_address: address("Robert Johnson", Some("Global Imports"), "789 Oak Drive", "Chicago", "IL", "60601"),
        },
        Invoice {
            id: "INV-2023-004".into(),
            order_id: "#4389".into(),
            date: "2023-12-13".into(),
            due_date: "2023-12-28".into(),
            amount: 210.5,
            status: InvoiceStatus::Paid,
            items: vec![
                item("Standard Delivery Service", 150.0),
                item("Express Processing Fee", 35.0),
                item("Insurance", 15.0),
                item("Fuel Surcharge", 10.5),
            ],
            payment: Some(card_payment("1234", "09/24", "2023-12-13")),
            billing_address: address("Michael Williams", None, "321 Pine Street", "Seattle", "WA", "98101"),
        },
        Invoice {
            id: "INV-2023-005".into(),
            order_id: "#4388".into(),
            date: "2023-12-12".into(),
            due_date: "2023-12-27".into(),
            amount: 185.75,
            status: InvoiceStatus::Paid,
            items: vec![
                item("Standard Delivery Service", 150.0),
                item("Insurance", 25.0),
                item("Fuel Surcharge", 10.75),
            ],
            payment: Some(InvoicePayment {
                kind: PaymentMethodKind::Paypal,
                last4: None,
                expiry_date: None,
                date: "2023-12-12".into(),
            }),
            billing_address: address("Sarah Davis", Some("Mountain Retailers"), "654 Maple Road", "Denver", "CO", "80202"),
        },
    ]
});

static PAYMENT_METHODS: Lazy<Vec<PaymentMethod>> = Lazy::new(|| {
    let card = |id: &str, name: &str, is_default: bool, brand: &str, last4: &str, expiry: &str| PaymentMethod {
        id: id.into(),
        kind: PaymentMethodKind::CreditCard,
        name: name.into(),
        is_default,
        last4: Some(last4.into()),
        brand: Some(brand.into()),
        expiry_date: Some(expiry.into()),
        bank_name: None,
        email: None,
    };
    vec![
        card("PM001", "Corporate Visa", true, "Visa", "4242", "05/25"),
        card("PM002", "Business Mastercard", false, "Mastercard", "1234", "09/24"),
        PaymentMethod {
            id: "PM003".into(),
            kind: PaymentMethodKind::BankAccount,
            name: "Business Checking".into(),
            is_default: false,
            last4: Some("9876".into()),
            brand: None,
            expiry_date: None,
            bank_name: Some("Chase Bank".into()),
            email: None,
        },
        PaymentMethod {
            id: "PM004".into(),
            kind: PaymentMethodKind::Paypal,
            name: "Company PayPal".into(),
            is_default: false,
            last4: None,
            brand: None,
            expiry_date: None,
            bank_name: None,
            email: Some("finance@yourcompany.com".into()),
        },
    ]
});

static BILLING_HISTORY: Lazy<Vec<BillingTransaction>> = Lazy::new(|| {
    let trx = |id: &str, date: &str, description: &str, amount: f64, kind: TransactionKind, method: &str| {
        BillingTransaction {
            id: id.into(),
            date: date.into(),
            description: description.into(),
            amount,
            kind,
            method: method.into(),
        }
    };
    use TransactionKind::*;
    vec![
        trx("TRX001", "2023-12-14", "Payment for Invoice INV-2023-003", 175.25, Payment, "Visa ending in 4242"),
        trx("TRX002", "2023-12-13", "Payment for Invoice INV-2023-004", 210.5, Payment, "Mastercard ending in 1234"),
        trx("TRX003", "2023-12-12", "Payment for Invoice INV-2023-005", 185.75, Payment, "PayPal"),
        trx("TRX004", "2023-12-10", "Refund for cancelled order #4387", 150.0, Refund, "Original payment method"),
        trx("TRX005", "2023-12-05", "Payment for Invoice INV-2023-006", 225.5, Payment, "Bank Transfer"),
    ]
});

pub fn invoices() -> &'static [Invoice] {
    &INVOICES
}

/// Последние `limit` счетов (по дате выставления, новые первыми)
pub fn recent_invoices(limit: usize) -> Vec<&'static Invoice> {
    let mut sorted: Vec<&Invoice> = INVOICES.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}

pub fn payment_methods() -> &'static [PaymentMethod] {
    &PAYMENT_METHODS
}

pub fn billing_history() -> &'static [BillingTransaction] {
    &BILLING_HISTORY
}
