use contracts::domain::a108_driver::{
    driver_deliveries, DriverDelivery, DriverDeliveryFilter, DriverDeliveryStatus,
};
use contracts::domain::common::{Choice, Coded};
use leptos::prelude::*;
use thaw::*;

use super::driver_status_tone;
use crate::shared::components::{all_choice, choice_options, PageHeader, StatusBadge};
use crate::shared::config::use_config;
use crate::shared::date_utils::format_datetime;
use crate::shared::format::format_money;

fn total_earnings(items: &[DriverDelivery]) -> f64 {
    items.iter().map(|d| d.earnings.total).sum()
}

#[component]
pub fn DeliveryHistoryPanel() -> impl IntoView {
    let currency = use_config().ui.currency_symbol;

    let query = RwSignal::new(String::new());
    let status = all_choice::<DriverDeliveryStatus>();
    let filter = Memo::new(move |_| DriverDeliveryFilter {
        query: query.get(),
        status: Choice::from_code(&status.get()),
    });
    let rows = Memo::new(move |_| {
        filter
            .get()
            .apply(driver_deliveries())
            .into_iter()
            .cloned()
            .collect::<Vec<DriverDelivery>>()
    });

    let summary = {
        let currency = currency.clone();
        move || {
            rows.with(|r| {
                format!(
                    "{} deliveries · {}",
                    r.len(),
                    format_money(total_earnings(r), &currency)
                )
            })
        }
    };

    view! {
        <div class="panel">
            <PageHeader title="Delivery History" subtitle="Your completed and past deliveries">
                <span class="text-muted">{summary}</span>
            </PageHeader>

            <div class="filter-bar">
                <Input value=query placeholder="Search by order ID or address..." />
                <Select value=status>
                    {choice_options::<DriverDeliveryStatus>("All Statuses")}
                </Select>
            </div>

            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Order"</TableHeaderCell>
                            <TableHeaderCell>"Customer"</TableHeaderCell>
                            <TableHeaderCell>"Drop-off"</TableHeaderCell>
                            <TableHeaderCell>"Date"</TableHeaderCell>
                            <TableHeaderCell>"Distance"</TableHeaderCell>
                            <TableHeaderCell>"Earnings"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let currency = currency.clone();
                            let items = rows.get();
                            if items.is_empty() {
                                return view! {
                                    <TableRow>
                                        <TableCell>
                                            <span class="text-muted">"No deliveries found"</span>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            items
                                .into_iter()
                                .map(|d| {
                                    let date = d.completed_at.clone().unwrap_or_else(|| d.accepted.clone());
                                    let earnings = format_money(d.earnings.total, &currency);
                                    view! {
                                        <TableRow>
                                            <TableCell>{d.order_id.clone()}</TableCell>
                                            <TableCell>{d.client_name.clone()}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{d.dropoff.address.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{format_datetime(&date)}</TableCell>
                                            <TableCell>{format!("{:.1} mi", d.distance)}</TableCell>
                                            <TableCell class="text-right">{earnings}</TableCell>
                                            <TableCell>
                                                <StatusBadge tone=driver_status_tone(d.status) label=d.status.display_name() />
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_earnings() {
        assert_eq!(total_earnings(&[]), 0.0);
        let all = driver_deliveries();
        let sum = total_earnings(all);
        assert!(sum > all[0].earnings.total);
    }
}
