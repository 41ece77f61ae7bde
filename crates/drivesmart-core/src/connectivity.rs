use std::fmt;

use crate::toast::ToastKind;

pub const CONNECTION_ATTRIBUTE: &str =
  "data-connection";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
  Online,
  Offline
}

impl ConnectionStatus {
  pub fn from_online(online: bool) -> Self {
    if online {
      Self::Online
    } else {
      Self::Offline
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      | Self::Online => "online",
      | Self::Offline => "offline"
    }
  }

  /// Toast shown when the browser reports
  /// a transition into this status.
  pub fn transition_toast(
    self
  ) -> (&'static str, ToastKind) {
    match self {
      | Self::Online => {
        ("You are back online", ToastKind::Success)
      }
      | Self::Offline => {
        ("You are offline", ToastKind::Warning)
      }
    }
  }
}

impl fmt::Display for ConnectionStatus {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
