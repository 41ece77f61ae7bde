use std::str::FromStr;

pub const ACTION_ATTRIBUTE: &str =
  "data-action";

/// Controller operation named by a
/// `data-action` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
  ToggleSidebar,
  ToggleUserMenu,
  ToggleFabMenu,
  CloseModals,
  ShowNotifications
}

impl FromStr for Action {
  type Err = String;

  fn from_str(raw: &str) -> Result<Self, Self::Err> {
    match raw.trim() {
      | "toggle-sidebar" => Ok(Self::ToggleSidebar),
      | "toggle-user-menu" => {
        Ok(Self::ToggleUserMenu)
      }
      | "toggle-fab-menu" => {
        Ok(Self::ToggleFabMenu)
      }
      | "close-modals" => Ok(Self::CloseModals),
      | "show-notifications" => {
        Ok(Self::ShowNotifications)
      }
      | other => {
        Err(format!("unknown action `{other}`"))
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::Action;

  #[test]
  fn parses_known_actions() {
    assert_eq!(
      "toggle-sidebar".parse::<Action>(),
      Ok(Action::ToggleSidebar)
    );
    assert_eq!(
      " show-notifications ".parse::<Action>(),
      Ok(Action::ShowNotifications)
    );
    assert!("logout".parse::<Action>().is_err());
  }
}
