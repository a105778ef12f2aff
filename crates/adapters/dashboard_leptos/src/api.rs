//! HTTP API client wrapping `gloo-net` for calls to the homewatch backend.

use std::future::Future;

use gloo_net::http::{Request, RequestBuilder, Response};
use homewatch_app::ports::{CacheBuster, DashboardApi};
use homewatch_domain::command::{BoardCommand, ControlCommand};
use homewatch_domain::error::ApiError;
use homewatch_domain::event_log::EventPage;
use homewatch_domain::history::{HistoryItem, HistoryKind};
use homewatch_domain::notification::Notification;
use homewatch_domain::sensor_board::SensorBoardStatus;
use homewatch_domain::sensor_event::{SensorEventRow, SensorToggleRequest};
use homewatch_domain::settings::{ServerUrlUpdate, WifiSettings};
use homewatch_domain::system::SystemSnapshot;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use web_sys::{RequestCache, RequestCredentials};

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Deserialize)]
struct SensorEventsBody {
    #[serde(default)]
    sensor_events: Vec<SensorEventRow>,
}

#[derive(Deserialize)]
struct NotificationsBody {
    #[serde(default)]
    notifications: Vec<Notification>,
}

#[derive(Deserialize)]
struct HistoryBody {
    #[serde(default)]
    history: Vec<HistoryItem>,
}

#[derive(Deserialize)]
struct ServerUrlBody {
    server_url: Option<String>,
}

#[derive(Deserialize)]
struct MessageBody {
    message: Option<String>,
}

fn transport(err: gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::SerdeError(err) => ApiError::Decode(err.to_string()),
        other => ApiError::Transport(other.to_string()),
    }
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    if resp.status() == 401 {
        return Err(ApiError::Unauthorized);
    }
    // error pages from a proxy are not JSON
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.error);
    Err(ApiError::status(resp.status(), message))
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let resp = builder.send().await.map_err(transport)?;
    check_response(resp).await
}

async fn send_json(
    builder: RequestBuilder,
    body: &impl serde::Serialize,
) -> Result<Response, ApiError> {
    let request: Request = builder.json(body).map_err(transport)?;
    let resp = request.send().await.map_err(transport)?;
    check_response(resp).await
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(transport)
}

/// [`DashboardApi`] over the browser's `fetch`, rooted at a base URL.
#[derive(Debug, Clone)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        Request::get(&self.url(path)).credentials(RequestCredentials::Include)
    }

    fn put(&self, path: &str) -> RequestBuilder {
        Request::put(&self.url(path)).credentials(RequestCredentials::Include)
    }
}

impl DashboardApi for HttpApi {
    fn system_state(&self) -> impl Future<Output = Result<SystemSnapshot, ApiError>> {
        let builder = self.get("/system-state");
        async move { decode(send(builder).await?).await }
    }

    fn sensor_board_info(&self) -> impl Future<Output = Result<SensorBoardStatus, ApiError>> {
        let builder = self.get("/sensor-board/info");
        async move { decode(send(builder).await?).await }
    }

    fn events(
        &self,
        page: u32,
        per_page: u32,
    ) -> impl Future<Output = Result<EventPage, ApiError>> {
        let builder = self.get(&format!("/events?page={page}&per_page={per_page}"));
        async move { decode(send(builder).await?).await }
    }

    fn sensor_events(
        &self,
        cache_buster: &CacheBuster,
    ) -> impl Future<Output = Result<Vec<SensorEventRow>, ApiError>> {
        let builder = self
            .get(&format!("/sensor-events?{}", cache_buster.query()))
            .cache(RequestCache::NoStore)
            .header("Cache-Control", "no-cache, no-store, must-revalidate")
            .header("Pragma", "no-cache")
            .header("Expires", "0")
            .header("X-Requested-With", "XMLHttpRequest");
        async move {
            let body: SensorEventsBody = decode(send(builder).await?).await?;
            Ok(body.sensor_events)
        }
    }

    fn notifications(
        &self,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Notification>, ApiError>> {
        let builder = self.get(&format!("/notifications?limit={limit}"));
        async move {
            let body: NotificationsBody = decode(send(builder).await?).await?;
            Ok(body.notifications)
        }
    }

    fn history(
        &self,
        kind: HistoryKind,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<HistoryItem>, ApiError>> {
        let builder = self.get(&format!("/history/{}?limit={limit}", kind.slug()));
        async move {
            let body: HistoryBody = decode(send(builder).await?).await?;
            Ok(body.history)
        }
    }

    fn control_board_server_url(&self) -> impl Future<Output = Result<Option<String>, ApiError>> {
        let builder = self.get("/control-board/server-url");
        async move {
            let body: ServerUrlBody = decode(send(builder).await?).await?;
            Ok(body.server_url)
        }
    }

    fn set_control_board_server_url(
        &self,
        update: &ServerUrlUpdate,
    ) -> impl Future<Output = Result<(), ApiError>> {
        let builder = self.put("/control-board/server-url");
        let update = update.clone();
        async move {
            send_json(builder, &update).await?;
            Ok(())
        }
    }

    fn send_control(&self, command: &ControlCommand) -> impl Future<Output = Result<(), ApiError>> {
        let builder = self.put(command.path());
        let command = command.clone();
        async move {
            send_json(builder, &command).await?;
            Ok(())
        }
    }

    fn send_board_command(
        &self,
        command: &BoardCommand,
    ) -> impl Future<Output = Result<(), ApiError>> {
        let builder = self.put(command.path());
        let command = command.clone();
        async move {
            send_json(builder, &command).await?;
            Ok(())
        }
    }

    fn save_wifi(
        &self,
        settings: &WifiSettings,
    ) -> impl Future<Output = Result<Option<String>, ApiError>> {
        let builder = self.put("/sensor-board/wifi");
        let settings = settings.clone();
        async move {
            let resp = send_json(builder, &settings).await?;
            let body: MessageBody = decode(resp).await?;
            Ok(body.message)
        }
    }

    fn toggle_sensor_control(
        &self,
        request: &SensorToggleRequest,
    ) -> impl Future<Output = Result<(), ApiError>> {
        let builder =
            Request::post(&self.url("/sensor-control/toggle")).credentials(RequestCredentials::Include);
        let request = request.clone();
        async move {
            send_json(builder, &request).await?;
            Ok(())
        }
    }

    fn mark_notification_read(&self, id: i64) -> impl Future<Output = Result<(), ApiError>> {
        let builder = self.put(&format!("/notifications/{id}/read"));
        async move {
            send(builder).await?;
            Ok(())
        }
    }

    fn clear_notifications(&self) -> impl Future<Output = Result<(), ApiError>> {
        let builder = Request::delete(&self.url("/notifications/clear"))
            .credentials(RequestCredentials::Include);
        async move {
            send(builder).await?;
            Ok(())
        }
    }

    fn clear_events(&self) -> impl Future<Output = Result<(), ApiError>> {
        let builder =
            Request::delete(&self.url("/events/clear")).credentials(RequestCredentials::Include);
        async move {
            send(builder).await?;
            Ok(())
        }
    }
}
