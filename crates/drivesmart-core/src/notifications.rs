use std::fmt;

use chrono::{
  DateTime,
  Utc
};
use drivesmart_shared::NotificationDto;

use crate::time::{
  Locale,
  format_time
};

pub const DEFAULT_ICON: &str = "🔔";
pub const PANEL_TITLE: &str =
  "Notifications";
pub const DISMISS_GLYPH: &str = "✕";

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
)]
pub struct NotificationPanelId(pub u64);

impl fmt::Display for NotificationPanelId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(f, "notifications-{}", self.0)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRow {
  pub title:      String,
  pub time_label: String,
  pub icon:       String,
  pub unread:     bool
}

impl NotificationRow {
  pub fn class_name(&self) -> &'static str {
    if self.unread {
      "notification-item unread"
    } else {
      "notification-item"
    }
  }
}

/// Display model of one dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPanelView {
  pub rows: Vec<NotificationRow>
}

impl NotificationPanelView {
  pub fn build<L>(
    notifications: &[NotificationDto],
    now: DateTime<Utc>,
    locale: &L
  ) -> Self
  where
    L: Locale + ?Sized
  {
    let rows = notifications
      .iter()
      .map(|n| NotificationRow {
        title:      n.title.clone(),
        time_label: format_time(
          &n.time,
          now,
          locale
        ),
        icon:       n
          .icon
          .as_deref()
          .map(str::trim)
          .filter(|icon| !icon.is_empty())
          .unwrap_or(DEFAULT_ICON)
          .to_string(),
        unread:     n.unread
      })
      .collect();

    Self { rows }
  }

  pub fn unread_count(&self) -> usize {
    self
      .rows
      .iter()
      .filter(|row| row.unread)
      .count()
  }
}
