//! Seams between the controller and the
//! browser.

use chrono::{
  DateTime,
  Utc
};

use crate::connectivity::ConnectionStatus;
use crate::error::SurfaceError;
use crate::notifications::{
  NotificationPanelId,
  NotificationPanelView
};
use crate::panel::Target;
use crate::time::Locale;
use crate::toast::{
  Toast,
  ToastId
};

pub type Callback = Box<dyn Fn()>;
pub type Task = Box<dyn FnOnce()>;

/// The document the controller draws on.
/// Clones share the same document.
pub trait Surface: Locale + Clone + 'static {
  fn set_active(
    &self,
    target: Target,
    active: bool
  );

  fn set_scroll_locked(&self, locked: bool);

  fn set_fab_glyph(&self, glyph: &str);

  fn set_connection_status(
    &self,
    status: ConnectionStatus
  );

  /// Adds a `<style>` block unless one with
  /// `id` already exists. Returns whether
  /// a block was added.
  fn install_style(
    &self,
    id: &str,
    css: &str
  ) -> Result<bool, SurfaceError>;

  fn mount_toast(
    &self,
    toast: &Toast,
    on_click: Callback
  ) -> Result<(), SurfaceError>;

  fn set_toast_animation(
    &self,
    id: ToastId,
    animation: &str
  );

  fn remove_toast(&self, id: ToastId);

  fn mount_notifications(
    &self,
    id: NotificationPanelId,
    view: &NotificationPanelView,
    on_dismiss: Callback
  ) -> Result<(), SurfaceError>;

  fn remove_notifications(
    &self,
    id: NotificationPanelId
  );
}

/// One-shot timers. Dropping a handle
/// before it fires cancels the task.
pub trait Timers: Clone + 'static {
  type Handle: 'static;

  fn now(&self) -> DateTime<Utc>;

  fn schedule(
    &self,
    delay_ms: u32,
    task: Task
  ) -> Self::Handle;
}
