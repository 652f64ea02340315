use tracing::debug;

pub const DEFAULT_NAV_BREAKPOINT_PX: u32 =
  768;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct NavView {
  pub toggle_active:      bool,
  pub sidebar_shown:      bool,
  pub body_scroll_locked: bool
}

/// Mobile navigation drawer.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct MobileNav {
  open:          bool,
  breakpoint_px: u32
}

impl Default for MobileNav {
  fn default() -> Self {
    Self::new(DEFAULT_NAV_BREAKPOINT_PX)
  }
}

impl MobileNav {
  pub fn new(
    breakpoint_px: u32
  ) -> Self {
    Self {
      open: false,
      breakpoint_px
    }
  }

  pub fn is_open(&self) -> bool {
    self.open
  }

  pub fn view(&self) -> NavView {
    NavView {
      toggle_active:      self.open,
      sidebar_shown:      self.open,
      body_scroll_locked: self.open
    }
  }

  pub fn toggle(&mut self) -> NavView {
    self.open = !self.open;
    debug!(
      open = self.open,
      "toggled mobile nav"
    );
    self.view()
  }

  /// Document-level click. Closes an open drawer when the click landed
  /// outside both the sidebar and its toggle.
  pub fn click(
    &mut self,
    inside_sidebar: bool,
    inside_toggle: bool
  ) -> bool {
    if self.open
      && !inside_sidebar
      && !inside_toggle
    {
      self.toggle();
      return true;
    }
    false
  }

  pub fn resized(
    &mut self,
    viewport_width_px: u32
  ) -> bool {
    if viewport_width_px
      > self.breakpoint_px
      && self.open
    {
      self.open = false;
      debug!(
        viewport_width_px,
        "closed mobile nav on wide \
         viewport"
      );
      return true;
    }
    false
  }
}

#[cfg(test)]
mod nav_tests {
  use super::*;

  #[test]
  fn toggle_locks_body_scroll_while_open(
  ) {
    let mut nav = MobileNav::default();
    let view = nav.toggle();
    assert!(view.sidebar_shown);
    assert!(view.toggle_active);
    assert!(view.body_scroll_locked);

    let view = nav.toggle();
    assert_eq!(
      view,
      NavView {
        toggle_active:      false,
        sidebar_shown:      false,
        body_scroll_locked: false
      }
    );
  }

  #[test]
  fn outside_click_closes_open_drawer() {
    let mut nav = MobileNav::default();
    assert!(!nav.click(false, false));

    nav.toggle();
    assert!(!nav.click(true, false));
    assert!(!nav.click(false, true));
    assert!(nav.is_open());
    assert!(nav.click(false, false));
    assert!(!nav.is_open());
  }

  #[test]
  fn widening_past_breakpoint_closes_drawer(
  ) {
    let mut nav = MobileNav::default();
    nav.toggle();
    assert!(!nav.resized(768));
    assert!(nav.is_open());
    assert!(nav.resized(769));
    assert!(!nav.is_open());
    assert!(!nav.resized(1024));
  }
}
