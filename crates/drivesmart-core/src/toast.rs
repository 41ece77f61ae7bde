use std::fmt;

pub const TOAST_STYLE_ID: &str =
  "toast-animations";
pub const TOAST_ENTER_ANIMATION: &str =
  "slideInRight 0.3s ease";
pub const TOAST_EXIT_ANIMATION: &str =
  "slideOutRight 0.3s ease";

pub const TOAST_ANIMATIONS_CSS: &str = "
@keyframes slideInRight {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOutRight {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(100%); opacity: 0; }
}
";

const SUCCESS_COLOR: &str = "#4CD964";
const ERROR_COLOR: &str = "#FF3B30";
const WARNING_COLOR: &str = "#FF9500";
const INFO_COLOR: &str = "#5AC8FA";

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
)]
pub enum ToastKind {
  Success,
  Error,
  Warning,
  #[default]
  Info
}

impl ToastKind {
  /// Unrecognised names become `Info`, so
  /// they render with class `toast-info`
  /// rather than `toast-<name>`.
  pub fn from_name(name: &str) -> Self {
    match name.trim() {
      | "success" => Self::Success,
      | "error" => Self::Error,
      | "warning" => Self::Warning,
      | _ => Self::Info
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      | Self::Success => "success",
      | Self::Error => "error",
      | Self::Warning => "warning",
      | Self::Info => "info"
    }
  }

  pub fn color(self) -> &'static str {
    match self {
      | Self::Success => SUCCESS_COLOR,
      | Self::Error => ERROR_COLOR,
      | Self::Warning => WARNING_COLOR,
      | Self::Info => INFO_COLOR
    }
  }
}

/// Background colour for a kind name;
/// unknown names get the info colour.
pub fn toast_color(name: &str) -> &'static str {
  ToastKind::from_name(name).color()
}

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
pub struct ToastId(pub u64);

impl fmt::Display for ToastId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(f, "toast-{}", self.0)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
  pub id:      ToastId,
  pub message: String,
  pub kind:    ToastKind
}

impl Toast {
  pub fn class_name(&self) -> String {
    format!("toast toast-{}", self.kind.name())
  }

  pub fn inline_style(&self) -> String {
    format!(
      "position: fixed; top: 1rem; right: \
       1rem; padding: 1rem 1.5rem; \
       border-radius: var(--radius-sm); \
       background: {}; color: white; \
       box-shadow: var(--shadow-lg); \
       z-index: 10000; animation: {};",
      self.kind.color(),
      TOAST_ENTER_ANIMATION
    )
  }
}
