use homewatch_app::ports::ErrorReporter;
use homewatch_domain::error::DashboardError;
use homewatch_domain::settings::WifiForm;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::state::use_dashboard;

/// Inline status line under the Wi-Fi form.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SaveStatus {
    Idle,
    Saved(String),
    Failed(String),
}

/// Sensor-board Wi-Fi settings. Loads the current SSID and server URL each
/// time it opens; the password always starts empty.
#[component]
pub fn WifiModal(open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_dashboard();
    let ssid = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let server_url = RwSignal::new(String::new());
    let status = RwSignal::new(SaveStatus::Idle);

    let loader = ctx.clone();
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        status.set(SaveStatus::Idle);
        password.set(String::new());
        let ctx = loader.clone();
        spawn_local(async move {
            match ctx.services.sensor_board.wifi_form().await {
                Ok(form) => {
                    ssid.set(form.ssid);
                    server_url.set(form.server_url);
                }
                // the modal still opens with whatever it last showed
                Err(err) => leptos::logging::warn!("failed to load wifi settings: {err}"),
            }
        });
    });

    let save = move |_| {
        let form = WifiForm {
            ssid: ssid.get_untracked(),
            password: password.get_untracked(),
            server_url: server_url.get_untracked(),
        };
        let ctx = ctx.clone();
        spawn_local(async move {
            match ctx.services.sensor_board.save_wifi(&form).await {
                Ok(message) => {
                    status.set(SaveStatus::Saved(message));
                    let dismiss_ms = ctx.config.display.wifi_dismiss_ms;
                    gloo_timers::future::TimeoutFuture::new(dismiss_ms).await;
                    open.set(false);
                    status.set(SaveStatus::Idle);
                }
                Err(DashboardError::Validation(err)) => ctx.toasts.error(err.to_string()),
                Err(err) => status.set(SaveStatus::Failed(format!("Error: {}", err.user_message()))),
            }
        });
    };

    let status_view = move || match status.get() {
        SaveStatus::Idle => ().into_any(),
        SaveStatus::Saved(message) => view! { <p class="settings-status success">{message}</p> }.into_any(),
        SaveStatus::Failed(message) => view! { <p class="settings-status error">{message}</p> }.into_any(),
    };

    view! {
        <div
            class="modal"
            class:show=move || open.get()
            on:click=move |ev| {
                if browser::is_backdrop_click(&ev) {
                    open.set(false);
                }
            }
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h2>"WiFi Settings"</h2>
                    <button class="modal-close" on:click=move |_| open.set(false)>"\u{00D7}"</button>
                </div>
                <div class="form-group">
                    <label for="wifi-ssid-input">"WiFi SSID"</label>
                    <input
                        id="wifi-ssid-input"
                        type="text"
                        prop:value=move || ssid.get()
                        on:input=move |ev| ssid.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="wifi-password-input">"WiFi Password"</label>
                    <input
                        id="wifi-password-input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="server-url-input">"Server URL"</label>
                    <input
                        id="server-url-input"
                        type="text"
                        placeholder="http://192.168.1.100:5000"
                        prop:value=move || server_url.get()
                        on:input=move |ev| server_url.set(event_target_value(&ev))
                    />
                </div>
                <button class="btn-primary" on:click=save>"Save"</button>
                {status_view}
            </div>
        </div>
    }
}
