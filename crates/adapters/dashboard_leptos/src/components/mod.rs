mod control_board_panel;
mod event_log;
mod history_modal;
mod loading;
mod notifications;
mod section;
mod sensor_board_panel;
mod sensor_table;
mod stat_card;
mod system_panel;
mod toast;
mod wifi_modal;

pub use control_board_panel::ControlBoardPanel;
pub use event_log::EventLog;
pub use history_modal::HistoryModal;
pub use notifications::Notifications;
pub use section::Section;
pub use sensor_board_panel::SensorBoardPanel;
pub use sensor_table::SensorTable;
pub use system_panel::{ControlPanel, SensorReadings};
pub use toast::{ToastContainer, ToastProvider, use_toasts};
pub use wifi_modal::WifiModal;
