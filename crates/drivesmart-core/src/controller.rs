use std::cell::{
  Cell,
  RefCell
};
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use drivesmart_shared::{
  HttpMethod,
  NotificationDto
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{
  debug,
  error,
  info,
  warn
};

use crate::api::{
  ApiRequest,
  HttpTransport,
  fetch_json
};
use crate::config::UiConfig;
use crate::connectivity::ConnectionStatus;
use crate::error::ApiError;
use crate::form::{
  FormField,
  validate_form
};
use crate::gesture::{
  Swipe,
  SwipeTracker
};
use crate::notifications::{
  NotificationPanelId,
  NotificationPanelView
};
use crate::panel::{
  PanelState,
  Target
};
use crate::surface::{
  Surface,
  Timers
};
use crate::time::format_time;
use crate::toast::{
  TOAST_ANIMATIONS_CSS,
  TOAST_EXIT_ANIMATION,
  TOAST_STYLE_ID,
  Toast,
  ToastId,
  ToastKind
};

pub const NETWORK_ERROR_MESSAGE: &str =
  "Network error. Please try again.";
pub const ESCAPE_KEY: &str = "Escape";

/// Pending timers keyed by the element
/// they will remove.
type Pending<K, H> =
  Rc<RefCell<HashMap<K, H>>>;

/// Owns the panel state and the transient
/// elements of one document.
pub struct UiController<S, T, H>
where
  S: Surface,
  T: Timers
{
  config:        UiConfig,
  surface:       S,
  timers:        T,
  http:          H,
  panel:         Cell<PanelState>,
  next_id:       Cell<u64>,
  swipe:         RefCell<SwipeTracker>,
  toasts:        Pending<ToastId, T::Handle>,
  notifications:
    Pending<NotificationPanelId, T::Handle>
}

impl<S, T, H> UiController<S, T, H>
where
  S: Surface,
  T: Timers,
  H: HttpTransport
{
  /// Builds the controller, installs the
  /// toast keyframes and brings the panel
  /// elements to the closed state.
  pub fn new(
    config: UiConfig,
    surface: S,
    timers: T,
    http: H
  ) -> Self {
    match surface.install_style(
      TOAST_STYLE_ID,
      TOAST_ANIMATIONS_CSS
    ) {
      | Ok(true) => {
        debug!("installed toast animations")
      }
      | Ok(false) => {}
      | Err(err) => {
        error!(
          error = %err,
          "failed installing toast animations"
        )
      }
    }

    let swipe = SwipeTracker::new(
      config.swipe_threshold_px
    );
    let controller = Self {
      config,
      surface,
      timers,
      http,
      panel: Cell::new(PanelState::None),
      next_id: Cell::new(0),
      swipe: RefCell::new(swipe),
      toasts: Rc::default(),
      notifications: Rc::default()
    };
    controller.sync_panels();
    info!("ui controller ready");
    controller
  }

  pub fn config(&self) -> &UiConfig {
    &self.config
  }

  pub fn panel_state(&self) -> PanelState {
    self.panel.get()
  }

  pub fn toggle_sidebar(&self) {
    self.toggle(PanelState::Sidebar);
  }

  pub fn toggle_user_menu(&self) {
    self.toggle(PanelState::UserMenu);
  }

  pub fn toggle_fab_menu(&self) {
    self.toggle(PanelState::Fab);
  }

  pub fn close_all_modals(&self) {
    self.set_panel(PanelState::None);
  }

  /// `touchmove` is cancelled while the
  /// overlay is up.
  pub fn blocks_touch_scroll(&self) -> bool {
    self.panel.get().overlay_visible()
  }

  pub fn on_key(&self, key: &str) {
    if key == ESCAPE_KEY {
      self.close_all_modals();
    }
  }

  pub fn on_touch_start(&self, x: f64, y: f64) {
    self.swipe.borrow_mut().start(x, y);
  }

  pub fn on_touch_end(&self, x: f64, y: f64) {
    let swipe =
      self.swipe.borrow_mut().end(x, y);
    if swipe == Some(Swipe::Left)
      && self.panel.get() == PanelState::Sidebar
    {
      debug!("left swipe closes sidebar");
      self.close_all_modals();
    }
  }

  pub fn init_connectivity(&self, online: bool) {
    let status =
      ConnectionStatus::from_online(online);
    info!(%status, "initial connection status");
    self.surface.set_connection_status(status);
  }

  pub fn on_connectivity_change(
    &self,
    status: ConnectionStatus
  ) {
    info!(%status, "connection status changed");
    let (message, kind) =
      status.transition_toast();
    self.show_toast(message, kind);
    self.surface.set_connection_status(status);
  }

  pub fn format_time(&self, input: &str) -> String {
    format_time(
      input,
      self.timers.now(),
      &self.surface
    )
  }

  pub fn validate_form<F>(&self, fields: &[F]) -> bool
  where
    F: FormField
  {
    validate_form(fields)
  }

  /// Shows a toast that leaves on its own
  /// after the display window plus the
  /// exit animation.
  pub fn show_toast(
    &self,
    message: &str,
    kind: ToastKind
  ) -> ToastId {
    let id = ToastId(self.next_id());
    let toast = Toast {
      id,
      message: message.to_string(),
      kind
    };

    let on_click = {
      let surface = self.surface.clone();
      let toasts = Rc::clone(&self.toasts);
      Box::new(move || {
        dismiss_toast(&surface, &toasts, id);
      })
    };
    if let Err(err) =
      self.surface.mount_toast(&toast, on_click)
    {
      error!(
        error = %err,
        %id,
        "failed mounting toast"
      );
      return id;
    }
    debug!(
      %id,
      kind = kind.name(),
      message,
      "toast shown"
    );

    let exit_ms = self.config.toast_exit_ms;
    let begin_exit = {
      let surface = self.surface.clone();
      let timers = self.timers.clone();
      let toasts = Rc::clone(&self.toasts);
      Box::new(move || {
        surface.set_toast_animation(
          id,
          TOAST_EXIT_ANIMATION
        );
        let removal = {
          let surface = surface.clone();
          let toasts = Rc::clone(&toasts);
          timers.schedule(
            exit_ms,
            Box::new(move || {
              finish(&toasts, id);
              surface.remove_toast(id);
            })
          )
        };
        replace(&toasts, id, removal);
      })
    };
    let handle = self.timers.schedule(
      self.config.toast_display_ms,
      begin_exit
    );
    self.toasts.borrow_mut().insert(id, handle);
    id
  }

  /// Removes a toast ahead of its timers.
  /// Returns false when it is already gone.
  pub fn dismiss_toast(&self, id: ToastId) -> bool {
    dismiss_toast(&self.surface, &self.toasts, id)
  }

  pub fn live_toasts(&self) -> usize {
    self.toasts.borrow().len()
  }

  /// Fetches the notification list and
  /// renders it. Failures are logged only.
  pub async fn show_notifications(
    &self
  ) -> Option<NotificationPanelId> {
    let request = ApiRequest::get(
      &self.config.notifications_endpoint
    );
    match fetch_json::<_, Vec<NotificationDto>>(
      &self.http, &request
    )
    .await
    {
      | Ok(list) => {
        self.display_notifications(&list)
      }
      | Err(err) => {
        error!(
          error = %err,
          endpoint = %request.endpoint,
          "error fetching notifications"
        );
        None
      }
    }
  }

  /// Mounts one dropdown. It leaves on
  /// dismiss or after the display window,
  /// whichever comes first. Dropdowns stack.
  pub fn display_notifications(
    &self,
    notifications: &[NotificationDto]
  ) -> Option<NotificationPanelId> {
    let id =
      NotificationPanelId(self.next_id());
    let view = NotificationPanelView::build(
      notifications,
      self.timers.now(),
      &self.surface
    );

    let on_dismiss = {
      let surface = self.surface.clone();
      let panels =
        Rc::clone(&self.notifications);
      Box::new(move || {
        dismiss_notifications(
          &surface, &panels, id
        );
      })
    };
    if let Err(err) = self.surface.mount_notifications(
      id, &view, on_dismiss
    ) {
      error!(
        error = %err,
        %id,
        "failed mounting notifications"
      );
      return None;
    }
    info!(
      %id,
      count = view.rows.len(),
      unread = view.unread_count(),
      "notifications shown"
    );

    let expire = {
      let surface = self.surface.clone();
      let panels =
        Rc::clone(&self.notifications);
      Box::new(move || {
        finish(&panels, id);
        surface.remove_notifications(id);
      })
    };
    let handle = self.timers.schedule(
      self.config.notification_display_ms,
      expire
    );
    self
      .notifications
      .borrow_mut()
      .insert(id, handle);
    Some(id)
  }

  pub fn dismiss_notifications(
    &self,
    id: NotificationPanelId
  ) -> bool {
    dismiss_notifications(
      &self.surface,
      &self.notifications,
      id
    )
  }

  pub fn live_notification_panels(&self) -> usize {
    self.notifications.borrow().len()
  }

  /// JSON request helper. Any failure shows
  /// the network error toast and is handed
  /// back to the caller.
  pub async fn api_request<R, B>(
    &self,
    endpoint: &str,
    method: HttpMethod,
    data: Option<&B>
  ) -> Result<R, ApiError>
  where
    R: DeserializeOwned,
    B: Serialize + ?Sized
  {
    let result = match ApiRequest::with_json(
      endpoint, method, data
    ) {
      | Ok(request) => {
        fetch_json(&self.http, &request).await
      }
      | Err(err) => Err(err)
    };

    if let Err(err) = &result {
      error!(
        error = %err,
        %method,
        endpoint,
        "api request failed"
      );
      self.show_toast(
        NETWORK_ERROR_MESSAGE,
        ToastKind::Error
      );
    }
    result
  }

  fn toggle(&self, panel: PanelState) {
    let next = self.panel.get().toggled(panel);
    self.set_panel(next);
  }

  /// Single writer of the panel state. The
  /// surface is re-synced on every call so
  /// closing also repairs drifted classes.
  fn set_panel(&self, next: PanelState) {
    let previous = self.panel.replace(next);
    if previous != next {
      debug!(%previous, %next, "panel state changed");
    }
    self.sync_panels();
  }

  fn sync_panels(&self) {
    let state = self.panel.get();
    for target in Target::ALL {
      self
        .surface
        .set_active(target, state.is_active(target));
    }
    self
      .surface
      .set_scroll_locked(state.scroll_locked());
    self.surface.set_fab_glyph(state.fab_glyph());
  }

  fn next_id(&self) -> u64 {
    let id = self.next_id.get().wrapping_add(1);
    self.next_id.set(id);
    id
  }
}

fn dismiss_toast<S, H>(
  surface: &S,
  toasts: &Pending<ToastId, H>,
  id: ToastId
) -> bool
where
  S: Surface
{
  let Some(pending) =
    toasts.borrow_mut().remove(&id)
  else {
    warn!(%id, "toast already dismissed");
    return false;
  };
  drop(pending);
  debug!(%id, "toast dismissed early");
  surface.remove_toast(id);
  true
}

fn dismiss_notifications<S, H>(
  surface: &S,
  panels: &Pending<NotificationPanelId, H>,
  id: NotificationPanelId
) -> bool
where
  S: Surface
{
  let Some(pending) =
    panels.borrow_mut().remove(&id)
  else {
    return false;
  };
  drop(pending);
  debug!(%id, "notifications dismissed");
  surface.remove_notifications(id);
  true
}

/// Forgets the handle of a timer that is
/// firing right now.
fn finish<K, H>(pending: &Pending<K, H>, key: K)
where
  K: Eq + Hash
{
  let fired = pending.borrow_mut().remove(&key);
  drop(fired);
}

fn replace<K, H>(
  pending: &Pending<K, H>,
  key: K,
  handle: H
) where
  K: Eq + Hash
{
  let previous =
    pending.borrow_mut().insert(key, handle);
  drop(previous);
}
