use homewatch_app::ports::ErrorReporter;
use homewatch_app::schedule::RefreshTask;
use homewatch_domain::error::DashboardError;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::state::use_dashboard;

/// Server URL the control board reports to.
#[component]
pub fn ControlBoardPanel() -> impl IntoView {
    let ctx = use_dashboard();
    let current = ctx.control_board_url;
    let input = RwSignal::new(String::new());
    let saved = RwSignal::new(None::<String>);

    // prefill once the configured URL arrives
    Effect::new(move |_| {
        if let Some(url) = current.with(|c| c.as_ref().and_then(|c| c.url().map(str::to_string))) {
            input.set(url);
        }
    });

    let status_text = move || {
        saved.get().unwrap_or_else(|| {
            current.with(|c| c.as_ref().map(|c| c.text()).unwrap_or_default())
        })
    };
    let status_class = move || {
        let configured = saved.with(Option::is_some)
            || current.with(|c| c.as_ref().is_some_and(|c| c.url().is_some()));
        if configured { "url-status configured" } else { "url-status" }
    };

    let save = move |_| {
        let raw = input.get_untracked();
        let ctx = ctx.clone();
        spawn_local(async move {
            match ctx.services.control_board.save(&raw).await {
                Ok(update) => {
                    saved.set(Some(update.saved_text()));
                    gloo_timers::future::TimeoutFuture::new(ctx.config.display.url_reload_ms).await;
                    saved.set(None);
                    ctx.refresh(RefreshTask::ControlBoardUrl);
                }
                Err(DashboardError::Validation(err)) => ctx.toasts.error(err.to_string()),
                Err(err) => ctx.toasts.report("save URL", &err),
            }
        });
    };

    view! {
        <div class="control-panel">
            <div class="form-group">
                <label for="control-board-url-input">"Control Board Server URL"</label>
                <input
                    id="control-board-url-input"
                    type="text"
                    placeholder="http://192.168.1.100:5000"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button class="btn-primary" on:click=save>"Save URL"</button>
            </div>
            <p class=status_class>{status_text}</p>
        </div>
    }
}
