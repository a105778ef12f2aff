use leptos::prelude::*;

/// Fallback route. The hub serves a single page, so anything else is a
/// stale bookmark.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="route-missing">
            <h2>"Nothing to monitor here"</h2>
            <p>"This address is not part of the home monitor."</p>
            <a class="btn-secondary" href="/">"Open the live dashboard"</a>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use leptos::tachys::view::RenderHtml;

    use super::*;

    #[test]
    fn should_link_back_to_dashboard() {
        let html = view! { <NotFound/> }.to_html();

        assert!(html.contains("Nothing to monitor here"));
        assert!(html.contains(r#"href="/""#));
    }
}
