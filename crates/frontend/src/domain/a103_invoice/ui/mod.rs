pub mod billing;
pub mod details;
pub mod dialog;

use contracts::domain::a103_invoice::InvoiceStatus;

use crate::shared::components::Tone;

pub use billing::BillingPanel;
pub use dialog::RecentInvoicesDialog;

pub fn invoice_status_tone(status: InvoiceStatus) -> Tone {
    match status {
        InvoiceStatus::Paid => Tone::Success,
        InvoiceStatus::Pending => Tone::Warning,
        InvoiceStatus::Overdue => Tone::Danger,
    }
}
