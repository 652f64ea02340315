use lantern_core::WindowView;
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  KeyboardEvent,
  MouseEvent,
  Properties,
  function_component,
  html,
  use_node_ref
};

use super::TaskListRow;
use super::task_list_row::row_key;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub view:        WindowView,
  pub on_add:      Callback<String>,
  pub on_complete: Callback<usize>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  let input_ref = use_node_ref();

  let submit = {
    let input_ref = input_ref.clone();
    let on_add = props.on_add.clone();
    Callback::from(move |()| {
      let Some(input) = input_ref
        .cast::<HtmlInputElement>()
      else {
        return;
      };
      on_add.emit(input.value());
      input.set_value("");
    })
  };

  let on_click = {
    let submit = submit.clone();
    Callback::from(move |_: MouseEvent| {
      submit.emit(());
    })
  };

  let on_keydown = Callback::from(
    move |event: KeyboardEvent| {
      if event.key() == "Enter" {
        submit.emit(());
      }
    }
  );

  html! {
      <section id="tasks" class="panel tasks">
          <div class="header">{ "Today" }</div>
          <div class="tasks-list">
              {
                  for props.view.rows.iter().cloned().map(|row| {
                      let key = row_key(&row);
                      html! {
                          <TaskListRow
                              key={key}
                              row={row}
                              on_complete={props.on_complete.clone()}
                          />
                      }
                  })
              }
          </div>
          <div class="task-input">
              <input
                  ref={input_ref}
                  type="text"
                  placeholder="Add a task"
                  onkeydown={on_keydown}
              />
              <button class="btn" onclick={on_click}>{ "Add" }</button>
          </div>
      </section>
  }
}
