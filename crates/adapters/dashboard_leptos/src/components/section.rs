//! Collapsible dashboard section.

use leptos::prelude::*;

fn indicator(open: bool) -> &'static str {
    if open { "\u{25B2}" } else { "\u{25BC}" }
}

/// A titled section whose header toggles the content's visibility.
///
/// Content stays mounted while collapsed so its state survives.
#[component]
pub fn Section(
    /// Header text.
    #[prop(into)]
    title: String,
    /// Start collapsed.
    #[prop(optional)]
    collapsed: bool,
    children: Children,
) -> impl IntoView {
    let open = RwSignal::new(!collapsed);

    view! {
        <section class="dashboard-section">
            <h2 class="section-header" on:click=move |_| open.update(|o| *o = !*o)>
                <span>{title}</span>
                <span class="collapse-indicator">{move || indicator(open.get())}</span>
            </h2>
            <div
                class="section-content"
                style:display=move || if open.get() { "" } else { "none" }
            >
                {children()}
            </div>
        </section>
    }
}
