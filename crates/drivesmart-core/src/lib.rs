//! Platform-independent core of the DriveSmart web shell.
//!
//! The browser is reached only through the traits in [`surface`] and
//! [`api`], so the whole controller runs natively under test.

pub mod action;
pub mod api;
pub mod config;
pub mod connectivity;
pub mod controller;
pub mod error;
pub mod form;
pub mod gesture;
pub mod notifications;
pub mod panel;
pub mod surface;
pub mod time;
pub mod toast;

pub use action::Action;
pub use api::{
  ApiRequest,
  HttpResponse,
  HttpTransport
};
pub use config::UiConfig;
pub use connectivity::ConnectionStatus;
pub use controller::UiController;
pub use error::{
  ApiError,
  SurfaceError
};
pub use form::{
  FormField,
  validate_form
};
pub use gesture::{
  Swipe,
  SwipeTracker
};
pub use notifications::{
  NotificationPanelId,
  NotificationPanelView,
  NotificationRow
};
pub use panel::{
  PanelState,
  Target
};
pub use surface::{
  Surface,
  Timers
};
pub use time::Locale;
pub use toast::{
  Toast,
  ToastId,
  ToastKind,
  toast_color
};
