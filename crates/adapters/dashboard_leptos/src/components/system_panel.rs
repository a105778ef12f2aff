//! Live sensor readings and control-board actuators.

use homewatch_domain::history::HistoryKind;
use homewatch_domain::system::{Badge, ButtonView, SystemSnapshot, SystemView};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::stat_card::StatCard;
use crate::state::{SystemAction, use_dashboard};

const PLACEHOLDER: &str = "--";

fn project(snapshot: RwSignal<Option<SystemSnapshot>>) -> Memo<Option<SystemView>> {
    Memo::new(move |_| snapshot.with(|s| s.as_ref().map(SystemView::project)))
}

fn text(view: Memo<Option<SystemView>>, field: fn(&SystemView) -> String) -> Signal<String> {
    Signal::derive(move || {
        view.with(|v| v.as_ref().map_or_else(|| PLACEHOLDER.to_string(), field))
    })
}

fn badge(view: Memo<Option<SystemView>>, field: fn(&SystemView) -> Badge) -> Signal<Option<Badge>> {
    Signal::derive(move || view.with(|v| v.as_ref().map(field)))
}

fn button(view: Memo<Option<SystemView>>, field: fn(&SystemView) -> ButtonView) -> Signal<Option<ButtonView>> {
    Signal::derive(move || view.with(|v| v.as_ref().map(field)))
}

/// Sensor cards. The motion, door and fire cards open their history.
#[component]
pub fn SensorReadings(
    /// Set to open a history modal.
    history: RwSignal<Option<HistoryKind>>,
) -> impl IntoView {
    let ctx = use_dashboard();
    let view = project(ctx.snapshot);
    let open = move |kind: HistoryKind| move |_: MouseEvent| history.set(Some(kind));

    view! {
        <div class="sensor-grid">
            <StatCard label="Temperature" value=text(view, |v| v.temperature.clone())/>
            <StatCard label="Humidity" value=text(view, |v| v.humidity.clone())/>
            <StatCard
                label="Motion"
                value=text(view, |v| v.motion_status.to_string())
                badge=badge(view, |v| v.motion_badge.clone())
            >
                <button class="btn-history" on:click=open(HistoryKind::Motion)>"History"</button>
            </StatCard>
            <StatCard
                label="Door"
                value=text(view, |v| v.door_status.to_string())
                badge=badge(view, |v| v.door_badge.clone())
            >
                <button class="btn-history" on:click=open(HistoryKind::Door)>"History"</button>
            </StatCard>
            <StatCard
                label="Flame"
                value=text(view, |v| v.flame_status.to_string())
                badge=badge(view, |v| v.flame_badge.clone())
            >
                <button class="btn-history" on:click=open(HistoryKind::Fire)>"History"</button>
            </StatCard>
            <StatCard
                label="Air Quality"
                value=text(view, |v| v.air_quality.clone())
                badge=badge(view, |v| v.air_badge.clone())
            />
            <StatCard
                label="Light Level"
                value=text(view, |v| v.light_level.clone())
                badge=badge(view, |v| v.light_badge.clone())
            />
            <StatCard label="Sound Level" value=text(view, |v| v.sound_level.clone())/>
        </div>
    }
}

/// One status line with its toggle button.
#[component]
fn ControlRow(
    status: Signal<String>,
    button: Signal<Option<ButtonView>>,
    action: SystemAction,
) -> impl IntoView {
    let ctx = use_dashboard();
    let class = move || button.with(|b| b.as_ref().map_or_else(|| "btn-control".to_string(), |b| b.class.clone()));
    let label = move || button.with(|b| b.as_ref().map_or(PLACEHOLDER, |b| b.label));

    view! {
        <div class="control-row">
            <span class="control-status">{move || status.get()}</span>
            <button
                class=class
                disabled=move || button.with(Option::is_none)
                on:click=move |_| ctx.system_action(action)
            >
                {label}
            </button>
        </div>
    }
}

/// Light, buzzer, mode, home-mode and brightness controls.
#[component]
pub fn ControlPanel() -> impl IntoView {
    let ctx = use_dashboard();
    let view = project(ctx.snapshot);
    let brightness = move || view.with(|v| v.as_ref().map_or(0, |v| v.brightness));
    let brightness_label = text(view, |v| v.brightness_label.clone());

    view! {
        <div class="control-panel">
            <ControlRow
                status=text(view, |v| v.light_status.to_string())
                button=button(view, |v| v.light_button.clone())
                action=SystemAction::ToggleLight
            />
            <ControlRow
                status=text(view, |v| v.buzzer_status.to_string())
                button=button(view, |v| v.buzzer_button.clone())
                action=SystemAction::ToggleBuzzer
            />
            <ControlRow
                status=text(view, |v| v.mode_status.to_string())
                button=button(view, |v| v.mode_button.clone())
                action=SystemAction::ToggleMode
            />
            <ControlRow
                status=text(view, |v| v.home_status.to_string())
                button=button(view, |v| v.home_button.clone())
                action=SystemAction::ToggleHomeMode
            />
            <div class="control-row">
                <label for="brightness-slider">
                    "Brightness: " {move || brightness_label.get()}
                </label>
                <input
                    id="brightness-slider"
                    type="range"
                    min="0"
                    max="100"
                    prop:value=move || brightness().to_string()
                    on:input=move |ev| {
                        match event_target_value(&ev).parse::<i64>() {
                            Ok(value) => ctx.system_action(SystemAction::SetBrightness(value)),
                            Err(err) => leptos::logging::warn!("invalid brightness input: {err}"),
                        }
                    }
                />
            </div>
        </div>
    }
}
