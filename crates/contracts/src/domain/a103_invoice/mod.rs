pub mod aggregate;
pub mod fixtures;

pub use aggregate::{
    BillingAddress, BillingTotals, BillingTransaction, Invoice, InvoiceFilter, InvoiceItem,
    InvoicePayment, InvoiceStatus, PaymentMethod, PaymentMethodKind, TransactionKind,
};
pub use fixtures::{billing_history, invoices, payment_methods, recent_invoices};
