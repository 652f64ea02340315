use std::rc::Rc;

use lantern_core::MobileNav;
use yew::Reducible;

#[derive(Clone, Copy, PartialEq)]
pub struct NavState(pub MobileNav);

pub enum NavAction {
  Toggle,
  DocumentClick {
    inside_sidebar: bool,
    inside_toggle:  bool
  },
  Resized(u32)
}

impl Reducible for NavState {
  type Action = NavAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut nav = self.0;
    let changed = match action {
      | NavAction::Toggle => {
        nav.toggle();
        true
      }
      | NavAction::DocumentClick {
        inside_sidebar,
        inside_toggle
      } => {
        nav.click(
          inside_sidebar,
          inside_toggle
        )
      }
      | NavAction::Resized(width) => {
        nav.resized(width)
      }
    };

    if changed {
      Rc::new(Self(nav))
    } else {
      self
    }
  }
}

/// Whether `target` sits inside the element behind `node`.
pub fn node_contains(
  node: &yew::NodeRef,
  target: Option<&web_sys::Node>
) -> bool {
  node
    .get()
    .map(|root| root.contains(target))
    .unwrap_or(false)
}

#[cfg(test)]
mod navigation_tests {
  use super::*;

  #[test]
  fn unchanged_nav_reuses_state() {
    let closed =
      Rc::new(NavState(MobileNav::new(768)));
    let same = closed.clone().reduce(
      NavAction::DocumentClick {
        inside_sidebar: false,
        inside_toggle:  false
      }
    );
    assert!(Rc::ptr_eq(&closed, &same));

    let open =
      closed.reduce(NavAction::Toggle);
    assert!(open.0.is_open());

    let wide = open
      .reduce(NavAction::Resized(1280));
    assert!(!wide.0.is_open());
  }
}
