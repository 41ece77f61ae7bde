use std::fmt;

use serde::{
  Deserialize,
  Serialize
};

/// One entry of `GET /api/notifications`.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct NotificationDto {
  #[serde(default)]
  pub title:  String,
  #[serde(default)]
  pub time:   String,
  #[serde(default)]
  pub icon:   Option<String>,
  #[serde(default)]
  pub unread: bool
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
  #[default]
  Get,
  Post,
  Put,
  Patch,
  Delete
}

impl HttpMethod {
  pub fn as_str(self) -> &'static str {
    match self {
      | Self::Get => "GET",
      | Self::Post => "POST",
      | Self::Put => "PUT",
      | Self::Patch => "PATCH",
      | Self::Delete => "DELETE"
    }
  }
}

impl fmt::Display for HttpMethod {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
