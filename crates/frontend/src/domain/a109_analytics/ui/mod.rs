//! Analytics & reporting panel over the static daily series.

use contracts::domain::a109_analytics::{
    average_rating, customer_feedback, delivery_data, performance_metrics, regional_data,
    DailyDeliveries, DeliveryTotals,
};
use leptos::prelude::*;

use crate::shared::components::{PageHeader, StatCard, StatTone, SubTabs};
use crate::shared::date_utils::format_date;
use crate::shared::format::{format_percent, format_thousands};
use crate::shared::icons::icon;

const SECTIONS: &[(&str, &str)] = &[
    ("overview", "Overview"),
    ("performance", "Performance"),
    ("regional", "Regional"),
    ("feedback", "Customer Feedback"),
];

/// Ширина столбца относительно максимума серии, %
fn bar_height(value: u32, max: u32) -> u32 {
    if max == 0 {
        0
    } else {
        value * 100 / max
    }
}

fn stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[component]
pub fn AnalyticsPanel() -> impl IntoView {
    let section = RwSignal::new("overview");

    view! {
        <div class="panel">
            <PageHeader
                title="Analytics & Reporting"
                subtitle="View detailed performance metrics and generate reports"
            />
            <SubTabs tabs=SECTIONS active=section />
            {move || match section.get() {
                "performance" => view! { <PerformanceSection /> }.into_any(),
                "regional" => view! { <RegionalSection /> }.into_any(),
                "feedback" => view! { <FeedbackSection /> }.into_any(),
                _ => view! { <OverviewSection /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn OverviewSection() -> impl IntoView {
    let days = delivery_data();
    let totals = DeliveryTotals::of(days);
    let max = days.iter().map(|d| d.completed).max().unwrap_or(0);

    view! {
        <div class="stat-grid">
            <StatCard
                label="Total Deliveries"
                icon_name="package"
                value=Signal::derive(move || format_thousands(totals.completed as i64))
            />
            <StatCard
                label="On Time"
                icon_name="check"
                value=Signal::derive(move || format_thousands(totals.on_time as i64))
                tone=StatTone::Good
            />
            <StatCard
                label="Delayed"
                icon_name="alert"
                value=Signal::derive(move || format_thousands(totals.delayed as i64))
                tone=StatTone::Bad
            />
            <StatCard
                label="On-Time Rate"
                icon_name="bar-chart"
                value=Signal::derive(move || format_percent(totals.on_time_rate(), 1))
            />
        </div>
        <div class="card">
            <h3 class="card__title">"Daily Deliveries"</h3>
            <div class="bar-chart">
                {days
                    .iter()
                    .map(|day: &DailyDeliveries| {
                        view! {
                            <div class="bar-chart__column" title=format!("{}: {} completed, {} delayed", day.date, day.completed, day.delayed)>
                                <div class="bar-chart__bar" style=format!("height: {}%", bar_height(day.completed, max))>
                                    <div
                                        class="bar-chart__bar--delayed"
                                        style=format!("height: {}%", bar_height(day.delayed, day.completed))
                                    ></div>
                                </div>
                                <span class="bar-chart__label">{format_date(&day.date)}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn PerformanceSection() -> impl IntoView {
    view! {
        <div class="stat-grid">
            {performance_metrics()
                .iter()
                .map(|metric| {
                    let value = metric.formatted_value();
                    view! {
                        <StatCard
                            label=metric.name.clone()
                            icon_name="bar-chart"
                            value=Signal::derive(move || value.clone())
                            change=(metric.change, metric.is_improvement())
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn RegionalSection() -> impl IntoView {
    let regions = regional_data();
    let max = regions.iter().map(|r| r.deliveries).max().unwrap_or(0);

    view! {
        <div class="card">
            <h3 class="card__title">"Deliveries by Region"</h3>
            {regions
                .iter()
                .map(|region| {
                    view! {
                        <div class="region-row">
                            <span class="region-row__name">
                                <span class="region-row__dot" style=format!("background: {}", region.color)></span>
                                {region.region.clone()}
                            </span>
                            <div class="progress">
                                <div
                                    class="progress__bar"
                                    style=format!("width: {}%; background: {}", bar_height(region.deliveries, max), region.color)
                                ></div>
                            </div>
                            <span>{format_thousands(region.deliveries as i64)}</span>
                            <span class="text-muted">{format!("{}% efficiency", region.efficiency)}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn FeedbackSection() -> impl IntoView {
    let feedback = customer_feedback();
    let average = average_rating(feedback);

    view! {
        <div class="card">
            <h3 class="card__title">
                {icon("star")}
                {format!("Average rating {:.1} from {} reviews", average, feedback.len())}
            </h3>
            <ul class="feedback-list">
                {feedback
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="feedback-list__item">
                                <div class="feedback-list__head">
                                    <strong>{item.customer_name.clone()}</strong>
                                    <span class="feedback-list__stars">{stars(item.rating)}</span>
                                </div>
                                <p>{item.comment.clone()}</p>
                                <span class="text-muted">
                                    {format!("Order {} · {}", item.order_id, format_date(&item.date))}
                                </span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_height() {
        assert_eq!(bar_height(195, 195), 100);
        assert_eq!(bar_height(0, 0), 0);
        assert_eq!(bar_height(15, 195), 7);
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(9), "★★★★★");
    }
}
