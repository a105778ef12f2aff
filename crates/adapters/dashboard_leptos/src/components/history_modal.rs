use homewatch_domain::history::HistoryKind;
use leptos::prelude::*;

use super::loading::Loading;
use crate::browser;
use crate::state::use_dashboard;

/// Recent motion, door or fire history. Hidden while `kind` is `None`.
#[component]
pub fn HistoryModal(kind: RwSignal<Option<HistoryKind>>) -> impl IntoView {
    let ctx = use_dashboard();

    let history = LocalResource::new(move || {
        let selected = kind.get();
        let ctx = ctx.clone();
        async move {
            match selected {
                Some(k) => Some(ctx.services.history.load(k).await),
                None => None,
            }
        }
    });

    let title = move || kind.get().map(HistoryKind::title).unwrap_or_default();

    let content = move || {
        let selected = kind.get()?;
        let body = history.read().as_ref().map(|loaded| match loaded {
            Some(Ok(items)) if items.is_empty() => {
                view! { <div class="loading">{selected.empty_text()}</div> }.into_any()
            }
            Some(Ok(items)) => items
                .iter()
                .map(|item| {
                    view! {
                        <div class="history-item">
                            <div class="history-time">
                                {browser::local_timestamp(item.timestamp.as_deref())}
                            </div>
                            <div class="history-message">{item.message.clone()}</div>
                        </div>
                    }
                })
                .collect_view()
                .into_any(),
            Some(Err(err)) => view! {
                <p class="error">{"Failed to load history: "} {err.user_message()}</p>
            }
            .into_any(),
            None => ().into_any(),
        });
        Some(body)
    };

    view! {
        <div
            class="modal"
            class:show=move || kind.with(Option::is_some)
            on:click=move |ev| {
                if browser::is_backdrop_click(&ev) {
                    kind.set(None);
                }
            }
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h2>{title}</h2>
                    <button class="modal-close" on:click=move |_| kind.set(None)>"\u{00D7}"</button>
                </div>
                <Suspense fallback=move || view! { <Loading/> }>{content}</Suspense>
            </div>
        </div>
    }
}
