use serde::Deserialize;
use tracing::{
  error,
  info,
  warn
};

const DEFAULT_NOTIFICATIONS_ENDPOINT:
  &str = "/api/notifications";
const DEFAULT_SERVICE_WORKER_PATH: &str =
  "/sw.js";
const DEFAULT_TOAST_DISPLAY_MS: u32 =
  3_000;
const DEFAULT_TOAST_EXIT_MS: u32 = 300;
const DEFAULT_NOTIFICATION_DISPLAY_MS:
  u32 = 5_000;
const DEFAULT_SWIPE_THRESHOLD_PX: f64 =
  50.0;

/// Tunables of the web shell, read from
/// the embedded `ui-config.toml`.
#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct UiConfig {
  pub notifications_endpoint:  String,
  pub service_worker_path:     String,
  pub register_service_worker: bool,
  pub toast_display_ms:        u32,
  pub toast_exit_ms:           u32,
  pub notification_display_ms: u32,
  pub swipe_threshold_px:      f64
}

impl Default for UiConfig {
  fn default() -> Self {
    Self {
      notifications_endpoint:
        DEFAULT_NOTIFICATIONS_ENDPOINT
          .to_string(),
      service_worker_path:
        DEFAULT_SERVICE_WORKER_PATH
          .to_string(),
      register_service_worker: true,
      toast_display_ms:
        DEFAULT_TOAST_DISPLAY_MS,
      toast_exit_ms:
        DEFAULT_TOAST_EXIT_MS,
      notification_display_ms:
        DEFAULT_NOTIFICATION_DISPLAY_MS,
      swipe_threshold_px:
        DEFAULT_SWIPE_THRESHOLD_PX
    }
  }
}

impl UiConfig {
  pub fn from_toml_str(
    raw: &str
  ) -> Result<Self, toml::de::Error> {
    let mut config =
      toml::from_str::<UiConfig>(raw)?;
    config.sanitize();
    Ok(config)
  }

  /// Parses `raw`, falling back to the
  /// defaults when it is malformed.
  pub fn load(raw: &str) -> Self {
    match Self::from_toml_str(raw) {
      | Ok(config) => {
        info!(
          endpoint = %config.notifications_endpoint,
          service_worker = %config.service_worker_path,
          toast_display_ms = config.toast_display_ms,
          "loaded ui config"
        );
        config
      }
      | Err(error) => {
        error!(%error, "failed parsing ui config; using defaults");
        Self::default()
      }
    }
  }

  fn sanitize(&mut self) {
    let defaults = Self::default();

    if self
      .notifications_endpoint
      .trim()
      .is_empty()
    {
      warn!(
        "blank notifications endpoint; \
         using default"
      );
      self.notifications_endpoint =
        defaults.notifications_endpoint;
    }
    if self
      .service_worker_path
      .trim()
      .is_empty()
    {
      warn!(
        "blank service worker path; \
         using default"
      );
      self.service_worker_path =
        defaults.service_worker_path;
    }
    if self.toast_display_ms == 0 {
      self.toast_display_ms =
        defaults.toast_display_ms;
    }
    if self.toast_exit_ms == 0 {
      self.toast_exit_ms =
        defaults.toast_exit_ms;
    }
    if self.notification_display_ms == 0
    {
      self.notification_display_ms =
        defaults.notification_display_ms;
    }
    if !self.swipe_threshold_px.is_finite()
      || self.swipe_threshold_px <= 0.0
    {
      warn!(
        threshold = self.swipe_threshold_px,
        "invalid swipe threshold; using \
         default"
      );
      self.swipe_threshold_px =
        defaults.swipe_threshold_px;
    }
  }
}
