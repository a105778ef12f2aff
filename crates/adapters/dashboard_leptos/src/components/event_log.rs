use leptos::prelude::*;

use super::loading::Loading;
use crate::browser;
use crate::state::use_dashboard;

/// Paged server event log.
#[component]
pub fn EventLog() -> impl IntoView {
    let ctx = use_dashboard();
    let events = ctx.events;
    let cursor = ctx.cursor;

    let list = move || match events.get() {
        None => view! { <Loading message="Loading events…"/> }.into_any(),
        Some(entries) if entries.is_empty() => {
            view! { <div class="event-item">"No events found"</div> }.into_any()
        }
        Some(entries) => entries
            .into_iter()
            .map(|entry| {
                view! {
                    <div class=entry.class()>
                        <span class="event-time">
                            {browser::local_timestamp(Some(&entry.timestamp))}
                        </span>
                        <span class="event-type">{entry.type_tag()}</span>
                        <span class="event-message">{entry.message}</span>
                    </div>
                }
            })
            .collect_view()
            .into_any(),
    };

    let (prev, next, clear) = (ctx.clone(), ctx.clone(), ctx);

    view! {
        <div class="event-log">
            <div class="event-list">{list}</div>
            <div class="pagination">
                <button
                    class="btn-secondary"
                    disabled=move || cursor.with(|c| c.prev_disabled())
                    on:click=move |_| prev.previous_events()
                >
                    "Previous"
                </button>
                <span class="page-info">{move || cursor.with(|c| c.page_info())}</span>
                <button
                    class="btn-secondary"
                    disabled=move || cursor.with(|c| c.next_disabled())
                    on:click=move |_| next.next_events()
                >
                    "Next"
                </button>
            </div>
            <button class="btn-danger" on:click=move |_| clear.clear_events()>"Clear All Events"</button>
        </div>
    }
}
