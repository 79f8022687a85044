use contracts::domain::a103_invoice::{
    billing_history, invoices, payment_methods, BillingTotals, Invoice, InvoiceFilter,
    InvoiceStatus, PaymentMethodKind, TransactionKind,
};
use contracts::domain::common::{Choice, Coded};
use leptos::prelude::*;
use thaw::*;

use super::details::InvoiceDetails;
use super::invoice_status_tone;
use crate::shared::components::{
    all_choice, choice_options, PageHeader, StatCard, StatTone, StatusBadge, SubTabs, Tone,
};
use crate::shared::config::use_config;
use crate::shared::date_utils::format_date;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;

const SECTIONS: &[(&str, &str)] = &[
    ("invoices", "Invoices"),
    ("payment-methods", "Payment Methods"),
    ("billing-history", "Billing History"),
];

fn payment_icon(kind: PaymentMethodKind) -> &'static str {
    match kind {
        PaymentMethodKind::CreditCard => "credit-card",
        PaymentMethodKind::BankAccount => "dollar",
        PaymentMethodKind::Paypal => "mail",
    }
}

/// Billing tab: invoices, payment methods, transaction history.
#[component]
pub fn BillingPanel() -> impl IntoView {
    let currency = use_config().ui.currency_symbol;
    let section = RwSignal::new("invoices");
    let totals = BillingTotals::of(invoices());

    let paid = format_money(totals.paid, &currency);
    let pending = format_money(totals.pending, &currency);
    let overdue = format_money(totals.overdue, &currency);
    let outstanding = format_money(totals.outstanding(), &currency);

    view! {
        <div class="panel">
            <PageHeader title="Invoices & Payments" subtitle="Manage your billing information and payment history" />

            <div class="stat-grid">
                <StatCard label="Paid" icon_name="check" value=Signal::derive(move || paid.clone()) tone=StatTone::Good />
                <StatCard label="Pending" icon_name="clock" value=Signal::derive(move || pending.clone()) tone=StatTone::Warning />
                <StatCard label="Overdue" icon_name="alert" value=Signal::derive(move || overdue.clone()) tone=StatTone::Bad />
                <StatCard label="Outstanding" icon_name="dollar" value=Signal::derive(move || outstanding.clone()) />
            </div>

            <SubTabs tabs=SECTIONS active=section />
            {move || match section.get() {
                "payment-methods" => view! { <PaymentMethodsSection /> }.into_any(),
                "billing-history" => view! { <BillingHistorySection /> }.into_any(),
                _ => view! { <InvoicesSection /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn InvoicesSection() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let currency = use_config().ui.currency_symbol;

    let query = RwSignal::new(String::new());
    let status = all_choice::<InvoiceStatus>();
    let filter = Memo::new(move |_| InvoiceFilter {
        query: query.get(),
        status: Choice::from_code(&status.get()),
    });

    let open_invoice = move |invoice: Invoice| {
        modal_stack.push_with_class(Some("modal--wide".to_string()), move |handle| {
            view! { <InvoiceDetails invoice=invoice.clone() handle=handle /> }.into_any()
        });
    };

    view! {
        <div class="filter-bar">
            <Input value=query placeholder="Search by invoice or order ID..." />
            <Select value=status>
                {choice_options::<InvoiceStatus>("All Statuses")}
            </Select>
        </div>
        <div class="table-wrapper">
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Invoice"</TableHeaderCell>
                        <TableHeaderCell>"Order"</TableHeaderCell>
                        <TableHeaderCell>"Date"</TableHeaderCell>
                        <TableHeaderCell>"Due"</TableHeaderCell>
                        <TableHeaderCell>"Amount"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let currency = currency.clone();
                        filter
                            .get()
                            .apply(invoices())
                            .into_iter()
                            .cloned()
                            .map(|invoice| {
                                let for_details = invoice.clone();
                                let amount = format_money(invoice.amount, &currency);
                                view! {
                                    <TableRow>
                                        <TableCell>{invoice.id.clone()}</TableCell>
                                        <TableCell>{invoice.order_id.clone()}</TableCell>
                                        <TableCell>{format_date(&invoice.date)}</TableCell>
                                        <TableCell>{format_date(&invoice.due_date)}</TableCell>
                                        <TableCell class="text-right">{amount}</TableCell>
                                        <TableCell>
                                            <StatusBadge
                                                tone=invoice_status_tone(invoice.status)
                                                label=invoice.status.display_name()
                                            />
                                        </TableCell>
                                        <TableCell>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| open_invoice(for_details.clone())
                                            >
                                                {icon("file-text")}
                                                "View"
                                            </Button>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

#[component]
fn PaymentMethodsSection() -> impl IntoView {
    view! {
        <div class="card-grid">
            {payment_methods()
                .iter()
                .map(|method| {
                    view! {
                        <div class="card payment-method">
                            <div class="payment-method__icon">{icon(payment_icon(method.kind))}</div>
                            <div class="payment-method__body">
                                <div class="payment-method__name">
                                    {method.name.clone()}
                                    {method.is_default.then(|| view! {
                                        <StatusBadge tone=Tone::Info label="Default" />
                                    })}
                                </div>
                                <div class="text-muted">{method.details()}</div>
                                <div class="text-muted">{method.kind.display_name()}</div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn BillingHistorySection() -> impl IntoView {
    let currency = use_config().ui.currency_symbol;

    view! {
        <div class="table-wrapper">
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Date"</TableHeaderCell>
                        <TableHeaderCell>"Description"</TableHeaderCell>
                        <TableHeaderCell>"Method"</TableHeaderCell>
                        <TableHeaderCell>"Type"</TableHeaderCell>
                        <TableHeaderCell>"Amount"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {billing_history()
                        .iter()
                        .map(|trx| {
                            let tone = match trx.kind {
                                TransactionKind::Payment => Tone::Success,
                                TransactionKind::Refund => Tone::Info,
                            };
                            let amount = format_money(trx.signed_amount(), &currency);
                            view! {
                                <TableRow>
                                    <TableCell>{format_date(&trx.date)}</TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{trx.description.clone()}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>{trx.method.clone()}</TableCell>
                                    <TableCell>
                                        <StatusBadge tone=tone label=trx.kind.display_name() />
                                    </TableCell>
                                    <TableCell class="text-right">{amount}</TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}
