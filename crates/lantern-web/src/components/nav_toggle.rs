use yew::{
  Callback,
  Html,
  MouseEvent,
  NodeRef,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct NavToggleProps {
  pub node_ref:  NodeRef,
  pub active:    bool,
  pub on_toggle: Callback<MouseEvent>
}

#[function_component(NavToggle)]
pub fn nav_toggle(
  props: &NavToggleProps
) -> Html {
  html! {
      <button
          ref={props.node_ref.clone()}
          class={classes!("mobile-nav-toggle", props.active.then_some("active"))}
          aria-label="Toggle navigation"
          aria-expanded={props.active.to_string()}
          onclick={props.on_toggle.clone()}
      >
          <span></span>
          <span></span>
          <span></span>
      </button>
  }
}
