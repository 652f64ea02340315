use lantern_core::Toast;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
  pub toasts: Vec<Toast>
}

#[function_component(ToastStackView)]
pub fn toast_stack_view(
  props: &ToastStackProps
) -> Html {
  html! {
      <div class="toast-stack" aria-live="polite">
          {
              for props.toasts.iter().map(|toast| html! {
                  <div key={toast.id.0.to_string()} class={toast.css_class()}>
                      { format!("Completed: {}", toast.text) }
                  </div>
              })
          }
      </div>
  }
}
