use contracts::domain::a103_invoice::Invoice;
use contracts::domain::common::Coded;
use leptos::prelude::*;
use thaw::*;

use super::invoice_status_tone;
use crate::shared::components::{DialogFooter, DialogHeader, StatusBadge};
use crate::shared::config::use_config;
use crate::shared::date_utils::format_date;
use crate::shared::format::format_money;
use crate::shared::modal_stack::ModalHandle;

#[component]
pub fn InvoiceDetails(invoice: Invoice, handle: ModalHandle) -> impl IntoView {
    let currency = use_config().ui.currency_symbol;
    let address = invoice.billing_address.clone();
    let title = format!("Invoice {}", invoice.id);
    let subtitle = format!("Order {} · issued {}", invoice.order_id, format_date(&invoice.date));
    let status = invoice.status;
    let due_date = format_date(&invoice.due_date);
    let payment = invoice
        .payment
        .as_ref()
        .map(|p| format!("{} on {}", p.describe(), format_date(&p.date)))
        .unwrap_or_else(|| "Not paid yet".to_string());
    let total = format_money(invoice.amount, &currency);

    // Строки таблицы собираются заранее: ячейки thaw принимают только 'static
    let item_rows = invoice
        .items
        .iter()
        .map(|item| {
            let description = item.description.clone();
            let quantity = item.quantity;
            let unit_price = format_money(item.unit_price, &currency);
            let line_total = format_money(item.total, &currency);
            view! {
                <TableRow>
                    <TableCell>{description}</TableCell>
                    <TableCell>{quantity}</TableCell>
                    <TableCell class="text-right">{unit_price}</TableCell>
                    <TableCell class="text-right">{line_total}</TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <DialogHeader title=title subtitle=subtitle handle=handle />
        <div class="modal-body">
            <div class="details-grid">
                <div class="form__group">
                    <span class="form__label">"Status"</span>
                    <StatusBadge tone=invoice_status_tone(status) label=status.display_name() />
                </div>
                <div class="form__group">
                    <span class="form__label">"Due Date"</span>
                    <span>{due_date}</span>
                </div>
                <div class="form__group">
                    <span class="form__label">"Bill To"</span>
                    <span>{address.name.clone()}</span>
                    {address.company.clone().map(|c| view! { <span>{c}</span> })}
                    <span>{address.street.clone()}</span>
                    <span>{address.city_line()}</span>
                </div>
                <div class="form__group">
                    <span class="form__label">"Payment"</span>
                    <span>{payment}</span>
                </div>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Description"</TableHeaderCell>
                        <TableHeaderCell>"Qty"</TableHeaderCell>
                        <TableHeaderCell>"Unit Price"</TableHeaderCell>
                        <TableHeaderCell>"Total"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {item_rows}
                    <TableRow>
                        <TableCell>
                            <strong>"Total"</strong>
                        </TableCell>
                        <TableCell>""</TableCell>
                        <TableCell>""</TableCell>
                        <TableCell class="text-right">
                            <strong>{total}</strong>
                        </TableCell>
                    </TableRow>
                </TableBody>
            </Table>
        </div>
        <DialogFooter>
            <Button on_click=move |_| handle.close()>"Close"</Button>
        </DialogFooter>
    }
}
