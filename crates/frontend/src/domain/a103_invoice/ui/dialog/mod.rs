use contracts::domain::a103_invoice::recent_invoices;
use contracts::domain::common::Coded;
use contracts::navigation::ClientTab;
use leptos::prelude::*;
use thaw::*;

use super::invoice_status_tone;
use crate::layout::navigation_bridge::use_navigate_to_tab;
use crate::shared::components::{DialogFooter, DialogHeader, StatusBadge};
use crate::shared::config::use_config;
use crate::shared::date_utils::format_date;
use crate::shared::format::format_money;
use crate::shared::modal_stack::ModalHandle;

const RECENT_LIMIT: usize = 5;

#[component]
pub fn RecentInvoicesDialog(handle: ModalHandle) -> impl IntoView {
    let go = use_navigate_to_tab::<ClientTab>();
    let currency = use_config().ui.currency_symbol;

    let view_all = move |_| go(ClientTab::Billing);

    view! {
        <DialogHeader
            title="Recent Invoices"
            subtitle="View and manage your recent invoices"
            handle=handle
        />
        <div class="modal-body">
            <ul class="invoice-list">
                {recent_invoices(RECENT_LIMIT)
                    .into_iter()
                    .map(|invoice| {
                        view! {
                            <li class="invoice-list__item">
                                <div>
                                    <div><strong>{invoice.id.clone()}</strong></div>
                                    <div class="text-muted">
                                        {format!("Order {} · due {}", invoice.order_id, format_date(&invoice.due_date))}
                                    </div>
                                </div>
                                <div class="invoice-list__amount">
                                    <span>{format_money(invoice.amount, &currency)}</span>
                                    <StatusBadge
                                        tone=invoice_status_tone(invoice.status)
                                        label=invoice.status.display_name()
                                    />
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
        <DialogFooter>
            <Button on_click=move |_| handle.close()>"Close"</Button>
            <Button appearance=ButtonAppearance::Primary on_click=view_all>
                "View All Invoices and Payment History"
            </Button>
        </DialogFooter>
    }
}
