//! Transient completion notifications.
//!
//! Each toast carries its own dismissal schedule. Hosts either drive
//! the stack with [`ToastStack::advance`] from a clock, or arm one timer
//! per schedule edge and call [`ToastStack::begin_dismiss`] /
//! [`ToastStack::remove`] when they fire.

use serde::Deserialize;
use tracing::debug;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Deserialize,
)]
#[serde(default)]
pub struct ToastTiming {
  pub lifetime_ms: u32,
  pub fade_at_ms:  u32
}

impl Default for ToastTiming {
  fn default() -> Self {
    Self {
      lifetime_ms: 3_000,
      fade_at_ms:  2_700
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
)]
pub struct ToastId(pub u64);

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ToastPhase {
  Showing,
  Dismissing
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct Toast {
  pub id:            ToastId,
  pub text:          String,
  pub created_at_ms: u64,
  pub phase:         ToastPhase
}

impl Toast {
  pub fn css_class(
    &self
  ) -> &'static str {
    match self.phase {
      | ToastPhase::Showing => "toast",
      | ToastPhase::Dismissing => {
        "toast toast-dismissing"
      }
    }
  }
}

/// Absolute times, in the host clock's milliseconds.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct DismissSchedule {
  pub id:           ToastId,
  pub fade_at_ms:   u64,
  pub remove_at_ms: u64
}

impl DismissSchedule {
  /// Remaining delay from `now_ms`.
  pub fn fade_delay_ms(
    &self,
    now_ms: u64
  ) -> u64 {
    self.fade_at_ms.saturating_sub(now_ms)
  }

  pub fn remove_delay_ms(
    &self,
    now_ms: u64
  ) -> u64 {
    self
      .remove_at_ms
      .saturating_sub(now_ms)
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct ToastStack {
  timing:    ToastTiming,
  next_id:   u64,
  toasts:    Vec<Toast>,
  schedules: Vec<DismissSchedule>
}

impl Default for ToastStack {
  fn default() -> Self {
    Self::new(ToastTiming::default())
  }
}

impl ToastStack {
  pub fn new(
    timing: ToastTiming
  ) -> Self {
    Self {
      timing,
      next_id: 0,
      toasts: Vec::new(),
      schedules: Vec::new()
    }
  }

  /// Oldest first.
  pub fn toasts(&self) -> &[Toast] {
    &self.toasts
  }

  pub fn is_empty(&self) -> bool {
    self.toasts.is_empty()
  }

  pub fn schedule(
    &self,
    id: ToastId
  ) -> Option<DismissSchedule> {
    self
      .schedules
      .iter()
      .copied()
      .find(|s| s.id == id)
  }

  pub fn push(
    &mut self,
    text: impl Into<String>,
    now_ms: u64
  ) -> DismissSchedule {
    let id = ToastId(self.next_id);
    self.next_id += 1;

    let schedule = DismissSchedule {
      id,
      fade_at_ms: now_ms
        + u64::from(
          self.timing.fade_at_ms
        ),
      remove_at_ms: now_ms
        + u64::from(
          self.timing.lifetime_ms
        )
    };

    let text = text.into();
    debug!(
      id = id.0,
      text = %text,
      remove_at_ms = schedule.remove_at_ms,
      "showing completion toast"
    );
    self.toasts.push(Toast {
      id,
      text,
      created_at_ms: now_ms,
      phase: ToastPhase::Showing
    });
    self.schedules.push(schedule);
    schedule
  }

  pub fn begin_dismiss(
    &mut self,
    id: ToastId
  ) -> bool {
    match self
      .toasts
      .iter_mut()
      .find(|toast| toast.id == id)
    {
      | Some(toast)
        if toast.phase
          == ToastPhase::Showing =>
      {
        toast.phase =
          ToastPhase::Dismissing;
        true
      }
      | _ => false
    }
  }

  pub fn remove(
    &mut self,
    id: ToastId
  ) -> bool {
    let before = self.toasts.len();
    self
      .toasts
      .retain(|toast| toast.id != id);
    self
      .schedules
      .retain(|s| s.id != id);
    let removed =
      self.toasts.len() != before;
    if removed {
      debug!(
        id = id.0,
        "dismissed completion toast"
      );
    }
    removed
  }

  /// Applies every schedule edge at or before `now_ms`. Returns whether
  /// anything visible changed.
  pub fn advance(
    &mut self,
    now_ms: u64
  ) -> bool {
    let mut changed = false;
    let due: Vec<DismissSchedule> =
      self.schedules.clone();

    for schedule in due {
      if now_ms >= schedule.remove_at_ms
      {
        changed |=
          self.remove(schedule.id);
      } else if now_ms
        >= schedule.fade_at_ms
      {
        changed |=
          self.begin_dismiss(schedule.id);
      }
    }

    changed
  }

  pub fn cancel_all(&mut self) {
    if !self.toasts.is_empty() {
      debug!(
        count = self.toasts.len(),
        "cancelling pending toasts"
      );
    }
    self.toasts.clear();
    self.schedules.clear();
  }
}
