use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::core::backend::BackendClient;

use super::events::{AppEvent, Notification, NotificationLevel};

/// Centralized handle to the backend services.
///
/// Created once at startup, then passed (by ref or clone) to views
/// that need backend access. `BackendClient` clones cheaply — it wraps
/// a pooled `reqwest::Client`.
pub struct Services {
    pub backend: BackendClient,
    pub config: AppConfig,
    pub event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl Services {
    /// Initialize services from config.
    pub fn init(config: AppConfig, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        let backend = BackendClient::new(&config.backend.base_url);
        log::info!("Backend client initialized for {}", backend.base_url());

        Self {
            backend,
            config,
            event_tx,
        }
    }

    /// Probe the backend root endpoint in the background.
    ///
    /// A failed probe is not fatal; it surfaces as a warning
    /// notification so the user knows uploads will not go through yet.
    pub fn spawn_health_probe(&self) {
        let backend = self.backend.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            match backend.ping().await {
                Ok(message) => log::info!("Backend reachable: {message}"),
                Err(err) => {
                    log::warn!("Backend unreachable: {err}");
                    let _ = tx.send(AppEvent::Notification(Notification {
                        id: 0, // Assigned by AppState
                        message: format!("Backend unreachable at {}", backend.base_url()),
                        level: NotificationLevel::Warning,
                        ttl_ticks: 60,
                    }));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_uses_configured_base_url() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut config = AppConfig::default();
        config.backend.base_url = "http://127.0.0.1:9999/".into();
        let services = Services::init(config, tx);
        assert_eq!(services.backend.base_url(), "http://127.0.0.1:9999");
    }
}
