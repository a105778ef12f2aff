use homewatch_app::ports::ErrorReporter;
use homewatch_domain::sensor_board::{SensorBoardView, UPLOAD_INTERVAL_RANGE};
use leptos::prelude::*;

use crate::state::{BoardAction, use_dashboard};

/// Sensor-board settings: monitoring, encryption, upload interval, Wi-Fi.
#[component]
pub fn SensorBoardPanel(
    /// Set to `true` to open the Wi-Fi modal.
    wifi_open: RwSignal<bool>,
) -> impl IntoView {
    let ctx = use_dashboard();
    let board = ctx.board;
    let view = Memo::new(move |_| board.with(|b| b.as_ref().map(SensorBoardView::project)));
    let loaded = move || view.with(Option::is_some);

    let monitoring_status = move || view.with(|v| v.as_ref().map_or("Monitoring: --", |v| v.monitoring_status));
    let monitoring_class = move || {
        view.with(|v| {
            v.as_ref()
                .map_or_else(|| "btn-control".to_string(), |v| v.monitoring_button.class.clone())
        })
    };
    let monitoring_label = move || view.with(|v| v.as_ref().map_or("--", |v| v.monitoring_button.label));
    let encryption_status = move || view.with(|v| v.as_ref().map_or("Encryption: --", |v| v.encryption_status));
    let encryption_label = move || view.with(|v| v.as_ref().map_or("--", |v| v.encryption_button));
    let interval = move || view.with(|v| v.as_ref().map_or(*UPLOAD_INTERVAL_RANGE.start(), |v| v.upload_interval));
    let interval_label = move || view.with(|v| v.as_ref().map(|v| v.upload_interval_label.clone()).unwrap_or_default());

    let show_info = {
        let ctx = ctx.clone();
        move |_| match board.get_untracked() {
            Some(status) => ctx.toasts.info(SensorBoardView::summary(&status)),
            None => ctx.toasts.error("Sensor board status not loaded yet".to_string()),
        }
    };

    view! {
        <div class="control-panel">
            <div class="control-row">
                <span class="control-status">{monitoring_status}</span>
                <button
                    class=monitoring_class
                    disabled=move || !loaded()
                    on:click={
                        let ctx = ctx.clone();
                        move |_| ctx.board_action(BoardAction::ToggleMonitoring)
                    }
                >
                    {monitoring_label}
                </button>
            </div>
            <div class="control-row">
                <span class="control-status">{encryption_status}</span>
                <button
                    class="btn-control"
                    disabled=move || !loaded()
                    on:click={
                        let ctx = ctx.clone();
                        move |_| ctx.board_action(BoardAction::ToggleEncryption)
                    }
                >
                    {encryption_label}
                </button>
            </div>
            <div class="control-row">
                <label for="upload-interval-slider">"Upload Interval: " {interval_label}</label>
                <input
                    id="upload-interval-slider"
                    type="range"
                    min=UPLOAD_INTERVAL_RANGE.start().to_string()
                    max=UPLOAD_INTERVAL_RANGE.end().to_string()
                    step="500"
                    prop:value=move || interval().to_string()
                    on:input={
                        let ctx = ctx.clone();
                        move |ev: leptos::ev::Event| match event_target_value(&ev).parse::<i64>() {
                            Ok(value) => ctx.board_action(BoardAction::SetUploadInterval(value)),
                            Err(err) => leptos::logging::warn!("invalid upload interval input: {err}"),
                        }
                    }
                />
            </div>
            <div class="control-row">
                <button class="btn-secondary" on:click=show_info>"Board Info"</button>
                <button class="btn-secondary" on:click=move |_| wifi_open.set(true)>
                    "WiFi Settings"
                </button>
            </div>
        </div>
    }
}
