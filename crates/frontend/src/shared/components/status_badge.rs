use leptos::prelude::*;
use thaw::*;

/// Colour family of a status badge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
}

impl Tone {
    pub fn badge_color(&self) -> BadgeColor {
        match self {
            Tone::Success => BadgeColor::Success,
            Tone::Warning => BadgeColor::Warning,
            Tone::Danger => BadgeColor::Danger,
            Tone::Info => BadgeColor::Informative,
            Tone::Neutral => BadgeColor::Subtle,
        }
    }
}

#[component]
pub fn StatusBadge(tone: Tone, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=tone.badge_color()>
            {label}
        </Badge>
    }
}
