//! Live per-sensor table with optimistic light/buzzer switches.

use homewatch_app::ports::ErrorReporter;
use homewatch_app::services::sensor_events_service::toggle_action;
use homewatch_domain::sensor_event::{ControlKind, ControlToggle, SensorEventRow, ToggleDisplay};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::state::{SensorTable as TableState, use_dashboard};

/// One light or buzzer switch. Flips immediately and rolls back if the
/// server rejects the change.
#[component]
fn ControlSwitch(sensor_name: String, kind: ControlKind, enabled: bool) -> impl IntoView {
    let ctx = use_dashboard();
    let display = RwSignal::new(ToggleDisplay::new(enabled));

    let on_change = move |ev: leptos::ev::Event| {
        let toggle = ControlToggle::begin(
            sensor_name.clone(),
            kind,
            display.get_untracked().checked,
            event_target_checked(&ev),
        );
        display.set(toggle.applied());
        let ctx = ctx.clone();
        spawn_local(async move {
            if let Err(err) = ctx.services.sensor_events.toggle(&toggle).await {
                display.set(toggle.rollback());
                ctx.toasts.report(&toggle_action(&toggle), &err);
            }
        });
    };

    view! {
        <label class="toggle-switch">
            <input
                type="checkbox"
                class=format!("{kind}-toggle")
                prop:checked=move || display.get().checked
                on:change=on_change
            />
            <span class="toggle-slider"></span>
            <span class="toggle-label">{move || display.get().label}</span>
        </label>
    }
}

/// Name, information and action cells. Server text is rendered as text
/// nodes, never parsed as markup.
fn reading_cells(row: &SensorEventRow) -> impl IntoView {
    view! {
        <td>{row.sensor_name.clone()}</td>
        <td>{row.sensor_information.clone()}</td>
        <td>{row.action_taken.clone()}</td>
    }
}

fn row_view(row: SensorEventRow) -> impl IntoView {
    let light = row.enabled(ControlKind::Light);
    let buzzer = row.enabled(ControlKind::Buzzer);
    view! {
        <tr id=format!("sensor-row-{}", row.dom_id())>
            {reading_cells(&row)}
            <td>
                <ControlSwitch sensor_name=row.sensor_name.clone() kind=ControlKind::Light enabled=light/>
            </td>
            <td>
                <ControlSwitch sensor_name=row.sensor_name kind=ControlKind::Buzzer enabled=buzzer/>
            </td>
        </tr>
    }
}

#[component]
pub fn SensorTable() -> impl IntoView {
    let ctx = use_dashboard();
    let table = ctx.sensor_table;
    let updated = ctx.sensor_updated;
    let pulse = ctx.sensor_pulse;

    // rebuilt wholesale on every refresh
    let body = move || match table.get() {
        TableState::Loading => view! {
            <tr><td colspan="5" class="loading">"Loading sensor events…"</td></tr>
        }
        .into_any(),
        TableState::Failed(message) => view! {
            <tr><td colspan="5" class="loading error">{format!("Error: {message}")}</td></tr>
        }
        .into_any(),
        TableState::Rows(rows) if rows.is_empty() => view! {
            <tr><td colspan="5" class="loading">"No sensor events yet"</td></tr>
        }
        .into_any(),
        TableState::Rows(rows) => rows.into_iter().map(row_view).collect_view().into_any(),
    };

    view! {
        <div class="sensor-events">
            <span class="sensor-events-status" class:pulse=move || pulse.get()>
                {move || updated.get().map(|time| format!("(Last updated: {time})"))}
            </span>
            <table class="sensor-events-table">
                <thead>
                    <tr>
                        <th>"Sensor"</th>
                        <th>"Information"</th>
                        <th>"Action Taken"</th>
                        <th>"Light"</th>
                        <th>"Buzzer"</th>
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use leptos::tachys::view::RenderHtml;

    use super::*;

    #[test]
    fn should_render_sensor_markup_as_text() {
        let row = SensorEventRow {
            sensor_name: "<b>x</b>&'\"".to_string(),
            sensor_information: "<script>alert(1)</script>".to_string(),
            action_taken: "Light <on>".to_string(),
            light_enabled: true,
            buzzer_enabled: false,
        };

        let html = view! { <tr>{reading_cells(&row)}</tr> }.to_html();

        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;&amp;"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("Light &lt;on&gt;"));
        assert!(!html.contains("<b>"));
        assert!(!html.contains("<script>"));
    }
}
