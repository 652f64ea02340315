use std::rc::Rc;

use lantern_core::{
  SiteConfig,
  TaskWindow,
  ToastId,
  ToastStack
};
use yew::Reducible;

/// Checklist widget state. Completion and its toast change together,
/// so both live behind one reducer.
#[derive(Clone, PartialEq)]
pub struct ChecklistState {
  pub tasks:  TaskWindow,
  pub toasts: ToastStack
}

impl ChecklistState {
  pub fn from_config(
    cfg: &SiteConfig
  ) -> Self {
    Self {
      tasks:  TaskWindow::with_tasks(
        cfg.tasks.window_size,
        &cfg.tasks.seed
      ),
      toasts: ToastStack::new(
        cfg.toasts
      )
    }
  }
}

pub enum ChecklistAction {
  Add(String),
  Complete {
    slot:   usize,
    now_ms: u64
  },
  BeginDismiss(ToastId),
  Dismiss(ToastId),
  CancelToasts
}

impl Reducible for ChecklistState {
  type Action = ChecklistAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = (*self).clone();

    match action {
      | ChecklistAction::Add(text) => {
        if let Err(error) =
          next.tasks.add_task(&text)
        {
          tracing::debug!(
            %error,
            "ignoring task input"
          );
          return self;
        }
      }
      | ChecklistAction::Complete {
        slot,
        now_ms
      } => {
        match next
          .tasks
          .complete_task(slot)
        {
          | Ok(text) => {
            next.toasts.push(text, now_ms);
          }
          | Err(error) => {
            tracing::warn!(
              %error,
              "rejected task completion"
            );
            return self;
          }
        }
      }
      | ChecklistAction::BeginDismiss(
        id
      ) => {
        if !next.toasts.begin_dismiss(id)
        {
          return self;
        }
      }
      | ChecklistAction::Dismiss(id) => {
        if !next.toasts.remove(id) {
          return self;
        }
      }
      | ChecklistAction::CancelToasts => {
        if next.toasts.is_empty() {
          return self;
        }
        next.toasts.cancel_all();
      }
    }

    Rc::new(next)
  }
}

#[cfg(test)]
mod checklist_tests {
  use super::*;

  fn state() -> Rc<ChecklistState> {
    let cfg = SiteConfig::from_toml_str(
      "[tasks]\nseed = [\"A\", \"B\", \"C\", \"D\"]"
    )
    .expect("test config parses");
    Rc::new(ChecklistState::from_config(
      &cfg
    ))
  }

  #[test]
  fn completion_pushes_one_toast() {
    let next = state().reduce(
      ChecklistAction::Complete {
        slot:   2,
        now_ms: 50
      }
    );
    assert_eq!(
      next.tasks.completed(),
      ["C"]
    );
    assert_eq!(next.toasts.toasts().len(), 1);
    assert_eq!(
      next.toasts.toasts()[0].text,
      "C"
    );
  }

  #[test]
  fn rejected_actions_keep_the_same_state(
  ) {
    let current = state();
    let after_blank = current
      .clone()
      .reduce(ChecklistAction::Add(
        "  ".to_string()
      ));
    assert!(Rc::ptr_eq(
      &current,
      &after_blank
    ));

    let after_bad_slot = current
      .clone()
      .reduce(
        ChecklistAction::Complete {
          slot:   7,
          now_ms: 0
        }
      );
    assert!(Rc::ptr_eq(
      &current,
      &after_bad_slot
    ));
  }

  #[test]
  fn timer_actions_walk_the_toast_lifecycle(
  ) {
    let shown = state().reduce(
      ChecklistAction::Complete {
        slot:   0,
        now_ms: 0
      }
    );
    let id = shown.toasts.toasts()[0].id;

    let fading = shown.reduce(
      ChecklistAction::BeginDismiss(id)
    );
    assert_eq!(
      fading.toasts.toasts()[0].css_class(),
      "toast toast-dismissing"
    );

    let gone = fading
      .reduce(ChecklistAction::Dismiss(id));
    assert!(gone.toasts.is_empty());
    assert_eq!(gone.tasks.pending(), ["B", "C", "D"]);
  }

  #[test]
  fn teardown_cancels_every_live_toast()
  {
    let busy = state()
      .reduce(ChecklistAction::Complete {
        slot:   0,
        now_ms: 0
      })
      .reduce(ChecklistAction::Complete {
        slot:   0,
        now_ms: 100
      });
    assert_eq!(busy.toasts.toasts().len(), 2);

    let quiet = busy
      .reduce(ChecklistAction::CancelToasts);
    assert!(quiet.toasts.is_empty());
    assert_eq!(quiet.tasks.completed(), ["A", "B"]);

    let again = quiet.clone().reduce(
      ChecklistAction::CancelToasts
    );
    assert!(Rc::ptr_eq(&quiet, &again));
  }
}
