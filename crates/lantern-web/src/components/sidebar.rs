use yew::{
  Html,
  NodeRef,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
  pub node_ref: NodeRef,
  pub shown:    bool
}

#[function_component(Sidebar)]
pub fn sidebar(
  props: &SidebarProps
) -> Html {
  let make_item =
    |href: &'static str, label: &'static str| {
      html! {
          <a class="item" href={href}>{ label }</a>
      }
    };

  html! {
      <nav
          ref={props.node_ref.clone()}
          class={classes!("sidebar", props.shown.then_some("show"))}
      >
          <div class="header">{ "Lantern" }</div>
          { make_item("#overview", "Overview") }
          { make_item("#tasks", "Tasks") }
          { make_item("#about", "About") }
      </nav>
  }
}
