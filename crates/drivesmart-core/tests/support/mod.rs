#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{
  BTreeMap,
  HashMap
};
use std::rc::{
  Rc,
  Weak
};

use chrono::{
  DateTime,
  Duration,
  FixedOffset,
  NaiveDateTime,
  TimeZone,
  Utc
};
use drivesmart_core::surface::{
  Callback,
  Task
};
use drivesmart_core::{
  ApiError,
  ApiRequest,
  ConnectionStatus,
  HttpResponse,
  HttpTransport,
  Locale,
  NotificationPanelId,
  NotificationPanelView,
  Surface,
  SurfaceError,
  Target,
  Timers,
  Toast,
  ToastId
};

pub fn base_time() -> DateTime<Utc> {
  Utc
    .with_ymd_and_hms(2026, 10, 17, 12, 0, 0)
    .single()
    .expect("valid base time")
}

pub struct MountedToast {
  pub class:     String,
  pub message:   String,
  pub style:     String,
  pub animation: Option<String>,
  on_click:      Rc<dyn Fn()>
}

pub struct MountedPanel {
  pub view:   NotificationPanelView,
  on_dismiss: Rc<dyn Fn()>
}

#[derive(Default)]
struct Document {
  active:          HashMap<Target, bool>,
  scroll_locked:   bool,
  fab_glyph:       String,
  connection:      Option<ConnectionStatus>,
  styles:          Vec<String>,
  toasts:          BTreeMap<ToastId, MountedToast>,
  panels:
    BTreeMap<NotificationPanelId, MountedPanel>,
  removals:        usize,
  stale_removals:  usize
}

/// In-memory document. The browser zone
/// is UTC unless set with `hours_west`.
#[derive(Clone, Default)]
pub struct FakeSurface {
  doc:         Rc<RefCell<Document>>,
  west_of_utc: i32
}

impl FakeSurface {
  pub fn hours_west(hours: i32) -> Self {
    Self {
      west_of_utc: hours * 3_600,
      ..Self::default()
    }
  }

  fn zone(&self) -> FixedOffset {
    FixedOffset::west_opt(self.west_of_utc)
      .expect("valid offset")
  }

  pub fn is_active(&self, target: Target) -> bool {
    self
      .doc
      .borrow()
      .active
      .get(&target)
      .copied()
      .unwrap_or(false)
  }

  pub fn scroll_locked(&self) -> bool {
    self.doc.borrow().scroll_locked
  }

  pub fn fab_glyph(&self) -> String {
    self.doc.borrow().fab_glyph.clone()
  }

  pub fn connection(&self) -> Option<ConnectionStatus> {
    self.doc.borrow().connection
  }

  pub fn style_count(&self, id: &str) -> usize {
    self
      .doc
      .borrow()
      .styles
      .iter()
      .filter(|s| s.as_str() == id)
      .count()
  }

  pub fn toast_ids(&self) -> Vec<ToastId> {
    self.doc.borrow().toasts.keys().copied().collect()
  }

  pub fn with_toast<R>(
    &self,
    id: ToastId,
    f: impl FnOnce(&MountedToast) -> R
  ) -> Option<R> {
    self.doc.borrow().toasts.get(&id).map(f)
  }

  pub fn click_toast(&self, id: ToastId) {
    let callback = self
      .doc
      .borrow()
      .toasts
      .get(&id)
      .map(|t| Rc::clone(&t.on_click));
    if let Some(callback) = callback {
      callback();
    }
  }

  pub fn panel_ids(&self) -> Vec<NotificationPanelId> {
    self.doc.borrow().panels.keys().copied().collect()
  }

  pub fn panel_view(
    &self,
    id: NotificationPanelId
  ) -> Option<NotificationPanelView> {
    self
      .doc
      .borrow()
      .panels
      .get(&id)
      .map(|p| p.view.clone())
  }

  pub fn click_dismiss(&self, id: NotificationPanelId) {
    let callback = self
      .doc
      .borrow()
      .panels
      .get(&id)
      .map(|p| Rc::clone(&p.on_dismiss));
    if let Some(callback) = callback {
      callback();
    }
  }

  pub fn removals(&self) -> usize {
    self.doc.borrow().removals
  }

  pub fn stale_removals(&self) -> usize {
    self.doc.borrow().stale_removals
  }

  fn record_removal(&self, found: bool) {
    let mut doc = self.doc.borrow_mut();
    doc.removals += 1;
    if !found {
      doc.stale_removals += 1;
    }
  }
}

impl Surface for FakeSurface {
  fn set_active(&self, target: Target, active: bool) {
    self.doc.borrow_mut().active.insert(target, active);
  }

  fn set_scroll_locked(&self, locked: bool) {
    self.doc.borrow_mut().scroll_locked = locked;
  }

  fn set_fab_glyph(&self, glyph: &str) {
    self.doc.borrow_mut().fab_glyph = glyph.to_string();
  }

  fn set_connection_status(&self, status: ConnectionStatus) {
    self.doc.borrow_mut().connection = Some(status);
  }

  fn install_style(
    &self,
    id: &str,
    _css: &str
  ) -> Result<bool, SurfaceError> {
    let mut doc = self.doc.borrow_mut();
    if doc.styles.iter().any(|s| s == id) {
      return Ok(false);
    }
    doc.styles.push(id.to_string());
    Ok(true)
  }

  fn mount_toast(
    &self,
    toast: &Toast,
    on_click: Callback
  ) -> Result<(), SurfaceError> {
    self.doc.borrow_mut().toasts.insert(
      toast.id,
      MountedToast {
        class:     toast.class_name(),
        message:   toast.message.clone(),
        style:     toast.inline_style(),
        animation: None,
        on_click:  Rc::from(on_click)
      }
    );
    Ok(())
  }

  fn set_toast_animation(&self, id: ToastId, animation: &str) {
    if let Some(toast) =
      self.doc.borrow_mut().toasts.get_mut(&id)
    {
      toast.animation = Some(animation.to_string());
    }
  }

  fn remove_toast(&self, id: ToastId) {
    let found =
      self.doc.borrow_mut().toasts.remove(&id).is_some();
    self.record_removal(found);
  }

  fn mount_notifications(
    &self,
    id: NotificationPanelId,
    view: &NotificationPanelView,
    on_dismiss: Callback
  ) -> Result<(), SurfaceError> {
    self.doc.borrow_mut().panels.insert(
      id,
      MountedPanel {
        view:       view.clone(),
        on_dismiss: Rc::from(on_dismiss)
      }
    );
    Ok(())
  }

  fn remove_notifications(&self, id: NotificationPanelId) {
    let found =
      self.doc.borrow_mut().panels.remove(&id).is_some();
    self.record_removal(found);
  }
}

impl Locale for FakeSurface {
  fn local_to_utc(
    &self,
    naive: NaiveDateTime
  ) -> Option<DateTime<Utc>> {
    self
      .zone()
      .from_local_datetime(&naive)
      .single()
      .map(|dt| dt.with_timezone(&Utc))
  }

  fn date_label(&self, at: DateTime<Utc>) -> String {
    at.with_timezone(&self.zone())
      .format("%Y-%m-%d")
      .to_string()
  }
}

struct Clock {
  base:       DateTime<Utc>,
  elapsed_ms: u64,
  next_seq:   u64,
  queue:      BTreeMap<(u64, u64), Task>
}

/// Timers driven by [`ManualTimers::advance`].
#[derive(Clone)]
pub struct ManualTimers {
  clock: Rc<RefCell<Clock>>
}

pub struct TimerHandle {
  key:   (u64, u64),
  clock: Weak<RefCell<Clock>>
}

impl Drop for TimerHandle {
  fn drop(&mut self) {
    if let Some(shared) = self.clock.upgrade()
      && let Ok(mut clock) = shared.try_borrow_mut()
    {
      clock.queue.remove(&self.key);
    }
  }
}

impl ManualTimers {
  pub fn new(base: DateTime<Utc>) -> Self {
    Self {
      clock: Rc::new(RefCell::new(Clock {
        base,
        elapsed_ms: 0,
        next_seq: 0,
        queue: BTreeMap::new()
      }))
    }
  }

  pub fn pending(&self) -> usize {
    self.clock.borrow().queue.len()
  }

  /// Runs every task due within the next
  /// `ms` milliseconds, in due order.
  pub fn advance(&self, ms: u64) {
    let target = self.clock.borrow().elapsed_ms + ms;
    loop {
      let next = {
        let mut clock = self.clock.borrow_mut();
        let due = clock
          .queue
          .keys()
          .next()
          .copied()
          .filter(|(at, _)| *at <= target);
        due.and_then(|key| {
          clock.elapsed_ms = key.0;
          clock.queue.remove(&key)
        })
      };
      match next {
        | Some(task) => task(),
        | None => break
      }
    }
    self.clock.borrow_mut().elapsed_ms = target;
  }
}

impl Timers for ManualTimers {
  type Handle = TimerHandle;

  fn now(&self) -> DateTime<Utc> {
    let clock = self.clock.borrow();
    clock.base
      + Duration::milliseconds(clock.elapsed_ms as i64)
  }

  fn schedule(&self, delay_ms: u32, task: Task) -> TimerHandle {
    let mut clock = self.clock.borrow_mut();
    let key = (
      clock.elapsed_ms + u64::from(delay_ms),
      clock.next_seq
    );
    clock.next_seq += 1;
    clock.queue.insert(key, task);
    TimerHandle {
      key,
      clock: Rc::downgrade(&self.clock)
    }
  }
}

/// Canned responses keyed by endpoint.
#[derive(Default)]
pub struct FakeHttp {
  responses: HashMap<String, Result<HttpResponse, ApiError>>,
  sent:      RefCell<Vec<ApiRequest>>
}

impl FakeHttp {
  pub fn respond(
    mut self,
    endpoint: &str,
    status: u16,
    body: &str
  ) -> Self {
    self.responses.insert(
      endpoint.to_string(),
      Ok(HttpResponse {
        status,
        body: body.to_string()
      })
    );
    self
  }

  pub fn fail(mut self, endpoint: &str, reason: &str) -> Self {
    self.responses.insert(
      endpoint.to_string(),
      Err(ApiError::Transport(reason.to_string()))
    );
    self
  }

  pub fn sent(&self) -> Vec<ApiRequest> {
    self.sent.borrow().clone()
  }
}

impl HttpTransport for FakeHttp {
  async fn send(
    &self,
    request: &ApiRequest
  ) -> Result<HttpResponse, ApiError> {
    self.sent.borrow_mut().push(request.clone());
    self
      .responses
      .get(&request.endpoint)
      .cloned()
      .unwrap_or_else(|| {
        Ok(HttpResponse {
          status: 404,
          body:   String::new()
        })
      })
  }
}
