use lantern_core::TaskRow;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub row:         TaskRow,
  pub on_complete: Callback<usize>
}

/// Rows are keyed by slot and text so a refilled slot gets a fresh,
/// unchecked checkbox.
pub fn row_key(row: &TaskRow) -> String {
  match row {
    | TaskRow::Task {
      slot,
      text
    } => format!("task-{slot}-{text}"),
    | TaskRow::Placeholder {
      slot
    } => format!("placeholder-{slot}")
  }
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  match &props.row {
    | TaskRow::Task {
      slot,
      text
    } => {
      let slot = *slot;
      let on_complete =
        props.on_complete.clone();
      html! {
          <label class="task-row">
              <input
                  type="checkbox"
                  checked={false}
                  onchange={move |_| on_complete.emit(slot)}
              />
              <span class="task-text">{ text.clone() }</span>
          </label>
      }
    }
    | TaskRow::Placeholder {
      ..
    } => {
      html! {
          <div class="task-row placeholder" aria-hidden="true">
              { "Add more tasks…" }
          </div>
      }
    }
  }
}
