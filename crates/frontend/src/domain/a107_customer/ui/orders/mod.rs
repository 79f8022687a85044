use contracts::domain::a104_delivery_tracking::DeliveryStatus;
use contracts::domain::a107_customer::{customer_deliveries, CustomerDeliveryFilter};
use contracts::domain::common::{Choice, Coded};
use contracts::navigation::CustomerTab;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a104_delivery_tracking::ui::delivery_status_tone;
use crate::layout::dashboard::use_shell;
use crate::shared::components::{all_choice, choice_options, PageHeader, StatusBadge};
use crate::shared::config::use_config;
use crate::shared::date_utils::format_date;
use crate::shared::format::format_money;

/// Order history; "Track" opens the tracking tab on that delivery.
#[component]
pub fn CustomerOrdersPanel() -> impl IntoView {
    let shell = use_shell::<CustomerTab>();
    let currency = use_config().ui.currency_symbol;

    let query = RwSignal::new(String::new());
    let status = all_choice::<DeliveryStatus>();
    let filter = Memo::new(move |_| CustomerDeliveryFilter {
        query: query.get(),
        status: Choice::from_code(&status.get()),
    });

    view! {
        <div class="panel">
            <PageHeader title="Order History" subtitle="All your past and current orders" />

            <div class="filter-bar">
                <Input value=query placeholder="Search by order ID or tracking number..." />
                <Select value=status>
                    {choice_options::<DeliveryStatus>("All Statuses")}
                </Select>
            </div>

            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Order"</TableHeaderCell>
                            <TableHeaderCell>"Tracking #"</TableHeaderCell>
                            <TableHeaderCell>"Date"</TableHeaderCell>
                            <TableHeaderCell>"Items"</TableHeaderCell>
                            <TableHeaderCell>"Total"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let currency = currency.clone();
                            let rows: Vec<_> = filter
                                .get()
                                .apply(customer_deliveries())
                                .into_iter()
                                .cloned()
                                .collect();
                            if rows.is_empty() {
                                return view! {
                                    <TableRow>
                                        <TableCell>
                                            <span class="text-muted">"No orders found"</span>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|delivery| {
                                    let id = delivery.id.clone();
                                    let date = delivery
                                        .actual_delivery
                                        .clone()
                                        .unwrap_or_else(|| delivery.estimated_delivery.clone());
                                    let items = delivery.item_count();
                                    let total = format_money(delivery.total_amount, &currency);
                                    view! {
                                        <TableRow>
                                            <TableCell>{delivery.order_id.clone()}</TableCell>
                                            <TableCell>{delivery.tracking_number.clone()}</TableCell>
                                            <TableCell>{format_date(&date)}</TableCell>
                                            <TableCell>{items}</TableCell>
                                            <TableCell class="text-right">{total}</TableCell>
                                            <TableCell>
                                                <StatusBadge
                                                    tone=delivery_status_tone(delivery.status)
                                                    label=delivery.status.display_name()
                                                />
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| shell.focus_on(CustomerTab::Tracking, id.clone())
                                                >
                                                    "Track"
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}
