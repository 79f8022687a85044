use serde::{Deserialize, Serialize};

use crate::coded_enum;
use crate::domain::common::{matches_any, Choice, Coded, Searchable};

coded_enum! {
    pub enum InvoiceStatus {
        Paid => ("paid", "Paid"),
        Pending => ("pending", "Pending"),
        Overdue => ("overdue", "Overdue"),
    }
}

coded_enum! {
    pub enum PaymentMethodKind {
        CreditCard => ("credit_card", "Credit Card"),
        BankAccount => ("bank_account", "Bank Account"),
        Paypal => ("paypal", "PayPal"),
    }
}

coded_enum! {
    pub enum TransactionKind {
        Payment => ("payment", "Payment"),
        Refund => ("refund", "Refund"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub description: String,
    pub quantity: u32,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoicePayment {
    pub kind: PaymentMethodKind,
    pub last4: Option<String>,
    #[serde(rename = "expiryDate")]
    pub expiry_date: Option<String>,
    pub date: String,
}

impl InvoicePayment {
    pub fn describe(&self) -> String {
        match &self.last4 {
            Some(last4) => format!("{} ending in {}", self.kind.display_name(), last4),
            None => self.kind.display_name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingAddress {
    pub name: String,
    pub company: Option<String>,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl BillingAddress {
    /// "City, ST 00000"
    pub fn city_line(&self) -> String {
        format!("{}, {} {}", self.city, self.state, self.zip)
    }
}

/// Счёт клиента
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    #[serde(rename = "orderId")]
    pub order_id: String,
    pub date: String,
    #[serde(rename = "dueDate")]
    pub due_date: String,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub items: Vec<InvoiceItem>,
    pub payment: Option<InvoicePayment>,
    #[serde(rename = "billingAddress")]
    pub billing_address: BillingAddress,
}

impl Invoice {
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(|i| i.total).sum()
    }
}

impl Searchable for Invoice {
    fn matches_filter(&self, filter: &str) -> bool {
        matches_any(&[&self.id, &self.order_id], filter)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceFilter {
    pub query: String,
    pub status: Choice<InvoiceStatus>,
}

impl InvoiceFilter {
    pub fn matches(&self, invoice: &Invoice) -> bool {
        invoice.matches_filter(&self.query) && self.status.matches(invoice.status)
    }

    pub fn apply<'a>(&self, items: &'a [Invoice]) -> Vec<&'a Invoice> {
        items.iter().filter(|i| self.matches(i)).collect()
    }
}

/// Суммы по статусам для карточек биллинга
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BillingTotals {
    pub paid: f64,
    pub pending: f64,
    pub overdue: f64,
}

impl BillingTotals {
    pub fn of<'a>(invoices: impl IntoIterator<Item = &'a Invoice>) -> Self {
        invoices
            .into_iter()
            .fold(Self::default(), |mut acc, invoice| {
                match invoice.status {
                    InvoiceStatus::Paid => acc.paid += invoice.amount,
                    InvoiceStatus::Pending => acc.pending += invoice.amount,
                    InvoiceStatus::Overdue => acc.overdue += invoice.amount,
                }
                acc
            })
    }

    pub fn outstanding(&self) -> f64 {
        self.pending + self.overdue
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    pub kind: PaymentMethodKind,
    pub name: String,
    #[serde(rename = "isDefault")]
    pub is_default: bool,
    pub last4: Option<String>,
    pub brand: Option<String>,
    #[serde(rename = "expiryDate")]
    pub expiry_date: Option<String>,
    #[serde(rename = "bankName")]
    pub bank_name: Option<String>,
    pub email: Option<String>,
}

impl PaymentMethod {
    /// Строка деталей под названием способа оплаты
    pub fn details(&self) -> String {
        match self.kind {
            PaymentMethodKind::CreditCard => format!(
                "{} •••• {} · Expires {}",
                self.brand.as_deref().unwrap_or("Card"),
                self.last4.as_deref().unwrap_or("----"),
                self.expiry_date.as_deref().unwrap_or("--/--"),
            ),
            PaymentMethodKind::BankAccount => format!(
                "{} •••• {}",
                self.bank_name.as_deref().unwrap_or("Bank"),
                self.last4.as_deref().unwrap_or("----"),
            ),
            PaymentMethodKind::Paypal => self.email.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingTransaction {
    pub id: String,
    pub date: String,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub method: String,
}

impl BillingTransaction {
    /// Сумма со знаком: возвраты отрицательные
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Payment => self.amount,
            TransactionKind::Refund => -self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a103_invoice::{billing_history, invoices, payment_methods};

    #[test]
    fn test_search_by_id_or_order() {
        let by_id = InvoiceFilter {
            query: "inv-2023-003".into(),
            status: Choice::All,
        };
        assert_eq!(by_id.apply(invoices()).len(), 1);

        let by_order = InvoiceFilter {
            query: "#4391".into(),
            status: Choice::All,
        };
        let found = by_order.apply(invoices());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "INV-2023-002");
    }

    #[test]
    fn test_status_filter_combined_with_search() {
        let filter = InvoiceFilter {
            query: "INV-2023".into(),
            status: Choice::Only(InvoiceStatus::Pending),
        };
        let ids: Vec<&str> = filter.apply(invoices()).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["INV-2023-001", "INV-2023-002"]);
    }

    #[test]
    fn test_items_add_up_to_amount() {
        for invoice in invoices() {
            assert!(
                (invoice.items_total() - invoice.amount).abs() < 0.001,
                "{} items do not add up",
                invoice.id
            );
        }
    }

    #[test]
    fn test_totals() {
        let totals = BillingTotals::of(invoices());
        assert!((totals.pending - 566.25).abs() < 0.001);
        assert!((totals.paid - 571.5).abs() < 0.001);
        assert_eq!(totals.overdue, 0.0);
        assert!((totals.outstanding() - 566.25).abs() < 0.001);
    }

    #[test]
    fn test_single_default_payment_method() {
        assert_eq!(payment_methods().iter().filter(|m| m.is_default).count(), 1);
    }

    #[test]
    fn test_refund_is_negative() {
        let refund = billing_history()
            .iter()
            .find(|t| t.kind == TransactionKind::Refund)
            .unwrap();
        assert!(refund.signed_amount() < 0.0);
    }
}
