use std::fmt;

pub const FAB_OPEN_GLYPH: &str = "✕";
pub const FAB_CLOSED_GLYPH: &str = "➕";
pub const FAB_ICON_ID: &str = "fabIcon";

/// DOM elements whose `active` class
/// mirrors the panel state.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash,
)]
pub enum Target {
  Sidebar,
  UserMenu,
  FabMenu,
  Overlay
}

impl Target {
  pub const ALL: [Target; 4] = [
    Target::Sidebar,
    Target::UserMenu,
    Target::FabMenu,
    Target::Overlay
  ];

  pub fn element_id(self) -> &'static str {
    match self {
      | Self::Sidebar => "sidebar",
      | Self::UserMenu => "userMenu",
      | Self::FabMenu => "fabMenu",
      | Self::Overlay => "overlay"
    }
  }
}

/// Which panel, if any, is open. At most
/// one panel is open at a time.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub enum PanelState {
  #[default]
  None,
  Sidebar,
  UserMenu,
  Fab
}

impl PanelState {
  /// Flips `panel`: closes it when it is
  /// the open one, otherwise opens it in
  /// place of whatever was open.
  #[must_use]
  pub fn toggled(
    self,
    panel: PanelState
  ) -> PanelState {
    if self == panel {
      PanelState::None
    } else {
      panel
    }
  }

  pub fn is_active(
    self,
    target: Target
  ) -> bool {
    match target {
      | Target::Sidebar => {
        self == Self::Sidebar
      }
      | Target::UserMenu => {
        self == Self::UserMenu
      }
      | Target::FabMenu => {
        self == Self::Fab
      }
      | Target::Overlay => {
        self.overlay_visible()
      }
    }
  }

  pub fn overlay_visible(self) -> bool {
    self != Self::None
  }

  pub fn scroll_locked(self) -> bool {
    self == Self::Sidebar
  }

  pub fn fab_glyph(self) -> &'static str {
    if self == Self::Fab {
      FAB_OPEN_GLYPH
    } else {
      FAB_CLOSED_GLYPH
    }
  }
}

impl fmt::Display for PanelState {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(match self {
      | Self::None => "none",
      | Self::Sidebar => "sidebar",
      | Self::UserMenu => "user-menu",
      | Self::Fab => "fab"
    })
  }
}

#[cfg(test)]
mod tests {
  use super::{
    PanelState,
    Target
  };

  #[test]
  fn toggling_twice_restores_target() {
    for start in [
      PanelState::None,
      PanelState::Sidebar,
      PanelState::UserMenu,
      PanelState::Fab
    ] {
      for panel in [
        PanelState::Sidebar,
        PanelState::UserMenu,
        PanelState::Fab
      ] {
        let target = match panel {
          | PanelState::Sidebar => {
            Target::Sidebar
          }
          | PanelState::UserMenu => {
            Target::UserMenu
          }
          | _ => Target::FabMenu
        };
        let twice = start
          .toggled(panel)
          .toggled(panel);
        assert_eq!(
          twice.is_active(target),
          start.is_active(target),
          "{start} toggled {panel} twice"
        );
      }
    }
  }

  #[test]
  fn opening_one_panel_closes_the_other() {
    let state = PanelState::Sidebar
      .toggled(PanelState::UserMenu);
    assert_eq!(state, PanelState::UserMenu);
    assert!(!state.is_active(Target::Sidebar));
    assert!(state.is_active(Target::Overlay));
    assert!(!state.scroll_locked());
  }

  #[test]
  fn derived_flags_follow_state() {
    assert!(!PanelState::None.overlay_visible());
    assert!(PanelState::Sidebar.scroll_locked());
    assert_eq!(PanelState::Fab.fab_glyph(), "✕");
    assert_eq!(PanelState::None.fab_glyph(), "➕");
    assert_eq!(
      Target::UserMenu.element_id(),
      "userMenu"
    );
  }
}
