use chrono::{
  DateTime,
  Utc
};
use drivesmart_core::Timers;
use drivesmart_core::surface::Task;
use gloo::timers::callback::Timeout;

/// `setTimeout`-backed timers. A dropped
/// [`Timeout`] is cleared.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

impl Timers for BrowserTimers {
  type Handle = Timeout;

  fn now(&self) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(
      js_sys::Date::now() as i64
    )
    .unwrap_or_default()
  }

  fn schedule(
    &self,
    delay_ms: u32,
    task: Task
  ) -> Timeout {
    Timeout::new(delay_ms, task)
  }
}
