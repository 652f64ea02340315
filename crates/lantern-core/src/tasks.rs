//! The checklist widget: a pending list viewed through a fixed-size
//! window, plus a write-only log of completed items.

use thiserror::Error;
use tracing::{
  debug,
  info
};

pub const DEFAULT_WINDOW_SIZE: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
  #[error("task text is empty")]
  EmptyText,
  #[error(
    "slot {index} is outside the \
     visible window of {visible} rows"
  )]
  OutOfWindow {
    index:   usize,
    visible: usize
  },
  #[error(
    "window start {start} is past the \
     end of {len} pending tasks"
  )]
  WindowStartOutOfRange {
    start: usize,
    len:   usize
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum TaskRow {
  /// A real pending task; `slot` is its position inside the window.
  Task {
    slot: usize,
    text: String
  },
  Placeholder {
    slot: usize
  }
}

impl TaskRow {
  pub fn slot(&self) -> usize {
    match self {
      | Self::Task {
        slot,
        ..
      }
      | Self::Placeholder {
        slot
      } => *slot
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct WindowView {
  pub rows: Vec<TaskRow>
}

impl WindowView {
  pub fn task_texts(
    &self
  ) -> Vec<&str> {
    self
      .rows
      .iter()
      .filter_map(|row| {
        match row {
          | TaskRow::Task {
            text,
            ..
          } => Some(text.as_str()),
          | TaskRow::Placeholder {
            ..
          } => None
        }
      })
      .collect()
  }

  pub fn placeholder_count(
    &self
  ) -> usize {
    self
      .rows
      .iter()
      .filter(|row| {
        matches!(
          row,
          TaskRow::Placeholder { .. }
        )
      })
      .count()
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct TaskWindow {
  pending:      Vec<String>,
  completed:    Vec<String>,
  window_start: usize,
  window_size:  usize
}

impl Default for TaskWindow {
  fn default() -> Self {
    Self::new(DEFAULT_WINDOW_SIZE)
  }
}

impl TaskWindow {
  /// A zero `window_size` is raised to one.
  pub fn new(
    window_size: usize
  ) -> Self {
    Self {
      pending:      Vec::new(),
      completed:    Vec::new(),
      window_start: 0,
      window_size:  window_size.max(1)
    }
  }

  pub fn with_tasks<I, T>(
    window_size: usize,
    seed: I
  ) -> Self
  where
    I: IntoIterator<Item = T>,
    T: AsRef<str>
  {
    let mut window =
      Self::new(window_size);
    for text in seed {
      if let Err(error) =
        window.add_task(text.as_ref())
      {
        debug!(
          %error,
          "skipping seed task"
        );
      }
    }
    window
  }

  pub fn pending(&self) -> &[String] {
    &self.pending
  }

  pub fn completed(&self) -> &[String] {
    &self.completed
  }

  pub fn window_start(&self) -> usize {
    self.window_start
  }

  pub fn window_size(&self) -> usize {
    self.window_size
  }

  /// Number of real tasks inside the window.
  pub fn visible_count(&self) -> usize {
    self
      .pending
      .len()
      .saturating_sub(self.window_start)
      .min(self.window_size)
  }

  pub fn initialize(&self) -> WindowView {
    debug!(
      pending = self.pending.len(),
      "initializing task window"
    );
    self.render()
  }

  /// Appends trimmed `text` and returns the new pending length.
  #[tracing::instrument(skip(self))]
  pub fn add_task(
    &mut self,
    text: &str
  ) -> Result<usize, TaskError> {
    let text = text.trim();
    if text.is_empty() {
      return Err(TaskError::EmptyText);
    }

    self.pending.push(text.to_string());
    debug!(
      pending = self.pending.len(),
      "added task"
    );
    Ok(self.pending.len())
  }

  /// Completes the task shown at `visible_index` and returns its text.
  #[tracing::instrument(skip(self))]
  pub fn complete_task(
    &mut self,
    visible_index: usize
  ) -> Result<String, TaskError> {
    let visible = self.visible_count();
    if visible_index >= visible {
      return Err(
        TaskError::OutOfWindow {
          index: visible_index,
          visible
        }
      );
    }

    let absolute =
      self.window_start + visible_index;
    let text =
      self.pending.remove(absolute);
    self.completed.push(text.clone());

    info!(
      task = %text,
      pending = self.pending.len(),
      completed = self.completed.len(),
      "completed task"
    );
    Ok(text)
  }

  /// Moves the window. Nothing in the add/complete flow calls this, so
  /// the window stays where the host last put it.
  pub fn set_window_start(
    &mut self,
    start: usize
  ) -> Result<(), TaskError> {
    if start > self.pending.len() {
      return Err(
        TaskError::WindowStartOutOfRange {
          start,
          len: self.pending.len()
        }
      );
    }
    self.window_start = start;
    Ok(())
  }

  pub fn render(&self) -> WindowView {
    let end = (self.window_start
      + self.window_size)
      .min(self.pending.len());
    let start =
      self.window_start.min(end);

    let mut rows: Vec<TaskRow> = self
      .pending[start..end]
      .iter()
      .enumerate()
      .map(|(slot, text)| {
        TaskRow::Task {
          slot,
          text: text.clone()
        }
      })
      .collect();

    let mut slot = rows.len();
    while slot < self.window_size
      && slot < self.pending.len()
    {
      rows.push(TaskRow::Placeholder {
        slot
      });
      slot += 1;
    }

    WindowView {
      rows
    }
  }
}

#[cfg(test)]
mod tasks_tests {
  use pretty_assertions::assert_eq;

  use super::*;

  fn five() -> TaskWindow {
    TaskWindow::with_tasks(
      DEFAULT_WINDOW_SIZE,
      ["A", "B", "C", "D", "E"]
    )
  }

  #[test]
  fn blank_text_is_rejected_without_mutation(
  ) {
    let mut tasks = five();
    assert_eq!(
      tasks.add_task(""),
      Err(TaskError::EmptyText)
    );
    assert_eq!(
      tasks.add_task("   "),
      Err(TaskError::EmptyText)
    );
    assert_eq!(tasks.pending().len(), 5);
  }

  #[test]
  fn add_appends_trimmed_text_last() {
    let mut tasks = five();
    assert_eq!(
      tasks.add_task("  Buy milk "),
      Ok(6)
    );
    assert_eq!(
      tasks.pending(),
      ["A", "B", "C", "D", "E", "Buy milk"]
    );
  }

  #[test]
  fn completing_middle_slot_refills_window(
  ) {
    let mut tasks = five();
    assert_eq!(
      tasks.complete_task(1),
      Ok("B".to_string())
    );
    assert_eq!(
      tasks.pending(),
      ["A", "C", "D", "E"]
    );
    assert_eq!(tasks.completed(), ["B"]);
    assert_eq!(
      tasks.render().task_texts(),
      vec!["A", "C", "D"]
    );
    assert_eq!(tasks.window_start(), 0);
  }

  #[test]
  fn out_of_window_completion_is_rejected(
  ) {
    let mut tasks = five();
    let before = tasks.clone();
    assert_eq!(
      tasks.complete_task(5),
      Err(TaskError::OutOfWindow {
        index:   5,
        visible: 3
      })
    );
    assert_eq!(
      tasks.complete_task(3),
      Err(TaskError::OutOfWindow {
        index:   3,
        visible: 3
      })
    );
    assert_eq!(tasks, before);
  }

  #[test]
  fn completion_on_short_list_respects_visible_count(
  ) {
    let mut tasks = TaskWindow::with_tasks(
      DEFAULT_WINDOW_SIZE,
      ["only"]
    );
    assert!(
      tasks.complete_task(1).is_err()
    );
    assert_eq!(
      tasks.complete_task(0),
      Ok("only".to_string())
    );
    assert!(
      tasks.complete_task(0).is_err()
    );
    assert!(tasks.render().rows.is_empty());
  }

  #[test]
  fn render_is_idempotent() {
    let tasks = five();
    let first = tasks.render();
    assert_eq!(tasks.render(), first);
    assert_eq!(tasks.initialize(), first);
  }

  #[test]
  fn short_list_at_origin_has_no_placeholders(
  ) {
    let tasks = TaskWindow::with_tasks(
      DEFAULT_WINDOW_SIZE,
      ["A", "B"]
    );
    let view = tasks.render();
    assert_eq!(view.rows.len(), 2);
    assert_eq!(view.placeholder_count(), 0);
  }

  #[test]
  fn placeholders_fill_window_after_seek()
  {
    let mut tasks = five();
    tasks
      .set_window_start(4)
      .expect("seek within bounds");
    let view = tasks.render();
    assert_eq!(
      view.rows,
      vec![
        TaskRow::Task {
          slot: 0,
          text: "E".to_string()
        },
        TaskRow::Placeholder {
          slot: 1
        },
        TaskRow::Placeholder {
          slot: 2
        },
      ]
    );
    assert_eq!(
      view
        .rows
        .iter()
        .map(TaskRow::slot)
        .collect::<Vec<_>>(),
      vec![0, 1, 2]
    );

    assert_eq!(
      tasks.complete_task(0),
      Ok("E".to_string())
    );
    assert_eq!(tasks.window_start(), 4);
    assert_eq!(
      tasks.render().placeholder_count(),
      3
    );
  }

  #[test]
  fn seek_past_end_is_rejected() {
    let mut tasks = five();
    assert_eq!(
      tasks.set_window_start(6),
      Err(
        TaskError::WindowStartOutOfRange {
          start: 6,
          len:   5
        }
      )
    );
    assert!(
      tasks.set_window_start(5).is_ok()
    );
    assert!(tasks.render().task_texts().is_empty());
  }

  #[test]
  fn seed_entries_are_filtered_like_adds()
  {
    let tasks = TaskWindow::with_tasks(
      2,
      ["  one ", "", "two", "\t"]
    );
    assert_eq!(
      tasks.pending(),
      ["one", "two"]
    );
    assert_eq!(tasks.window_size(), 2);
  }
}
