use homewatch_app::config::DashboardConfig;
use homewatch_domain::history::HistoryKind;
use leptos::prelude::*;

use crate::components::{
    ControlBoardPanel, ControlPanel, EventLog, HistoryModal, Notifications, Section,
    SensorBoardPanel, SensorReadings, SensorTable, WifiModal, use_toasts,
};
use crate::poller;
use crate::state::DashboardContext;

/// The single dashboard page: live readings, controls and logs.
#[component]
pub fn Dashboard() -> impl IntoView {
    let config = expect_context::<DashboardConfig>();
    let ctx = DashboardContext::new(config, use_toasts());
    provide_context(ctx.clone());
    poller::start(&ctx);

    let history = RwSignal::new(None::<HistoryKind>);
    let wifi_open = RwSignal::new(false);

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"Home Monitoring Dashboard"</h1>
                <Notifications/>
            </header>
            <Section title="Sensor Readings">
                <SensorReadings history=history/>
            </Section>
            <Section title="Control Board">
                <ControlPanel/>
            </Section>
            <Section title="Sensor Events">
                <SensorTable/>
            </Section>
            <Section title="Sensor Board">
                <SensorBoardPanel wifi_open=wifi_open/>
            </Section>
            <Section title="Control Board Settings" collapsed=true>
                <ControlBoardPanel/>
            </Section>
            <Section title="Event Log">
                <EventLog/>
            </Section>
            <HistoryModal kind=history/>
            <WifiModal open=wifi_open/>
        </div>
    }
}
