use crate::shared::format::format_change;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StatTone {
    Good,
    Bad,
    Warning,
    #[default]
    Neutral,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Good => "stat-card stat-card--success",
            StatTone::Bad => "stat-card stat-card--error",
            StatTone::Warning => "stat-card stat-card--warning",
            StatTone::Neutral => "stat-card",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    tone: StatTone,
    /// Change % relative to previous period; `improved` colours the arrow
    #[prop(optional)]
    change: Option<(f64, bool)>,
    #[prop(optional, into)]
    subtitle: Option<String>,
) -> impl IntoView {
    let change_view = change.map(|(pct, improved)| {
        let cls = if pct == 0.0 {
            "stat-card__change stat-card__change--flat"
        } else if improved {
            "stat-card__change stat-card__change--up"
        } else {
            "stat-card__change stat-card__change--down"
        };
        view! { <span class=cls>{format_change(pct)}</span> }
    });

    view! {
        <div class=tone.class()>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get()}
                    {change_view}
                </div>
                {subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
