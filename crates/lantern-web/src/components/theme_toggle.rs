use lantern_core::Theme;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

use super::ThemeIconView;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
  pub theme:     Theme,
  pub on_toggle: Callback<MouseEvent>
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(
  props: &ThemeToggleProps
) -> Html {
  html! {
      <button
          class="btn theme-toggle"
          title={props.theme.toggle_label()}
          aria-label={props.theme.toggle_label()}
          onclick={props.on_toggle.clone()}
      >
          <ThemeIconView theme={props.theme} />
      </button>
  }
}
