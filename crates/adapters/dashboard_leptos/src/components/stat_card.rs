//! Sensor reading card: a label, a live value and an optional badge.

use homewatch_domain::system::Badge;
use leptos::prelude::*;

/// A card displaying one sensor reading.
#[component]
pub fn StatCard(
    /// The label shown above the value.
    #[prop(into)]
    label: String,
    /// The formatted reading.
    #[prop(into)]
    value: Signal<String>,
    /// Status badge next to the reading.
    #[prop(optional, into)]
    badge: Option<Signal<Option<Badge>>>,
    /// Extra controls rendered under the value.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-label">{label}</span>
            <span class="stat-value">{move || value.get()}</span>
            {badge.map(|badge| view! {
                {move || badge.get().map(|b| view! { <span class=b.class>{b.label}</span> })}
            })}
            {children.map(|children| children())}
        </div>
    }
}
