//! Placeholder for panels still waiting on their first response.

use leptos::prelude::*;

/// Announced to assistive tech as a live status region.
#[component]
pub fn Loading(
    #[prop(default = "Waiting for the hub\u{2026}".into(), into)] message: String,
) -> impl IntoView {
    view! {
        <p class="panel-pending" role="status" aria-live="polite">
            <span class="pulse-dot" aria-hidden="true"></span>
            {message}
        </p>
    }
}

#[cfg(test)]
mod tests {
    use leptos::tachys::view::RenderHtml;

    use super::*;

    #[test]
    fn should_announce_default_wait_message() {
        let html = view! { <Loading/> }.to_html();

        assert!(html.contains(r#"role="status""#));
        assert!(html.contains("Waiting for the hub"));
    }
}
