use lantern_core::theme::IconShape;
use lantern_core::{
  Theme,
  ThemeIcon
};
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ThemeIconProps {
  pub theme: Theme
}

fn render_shape(shape: &IconShape) -> Html {
  match *shape {
    | IconShape::Path(d) => {
      html! { <path d={d} /> }
    }
    | IconShape::Circle {
      cx,
      cy,
      r
    } => {
      html! {
          <circle cx={cx.to_string()} cy={cy.to_string()} r={r.to_string()} />
      }
    }
    | IconShape::Line {
      x1,
      y1,
      x2,
      y2
    } => {
      html! {
          <line
              x1={x1.to_string()}
              y1={y1.to_string()}
              x2={x2.to_string()}
              y2={y2.to_string()}
          />
      }
    }
  }
}

#[function_component(ThemeIconView)]
pub fn theme_icon_view(
  props: &ThemeIconProps
) -> Html {
  let icon =
    ThemeIcon::for_theme(props.theme);

  html! {
      <svg
          class={format!("icon icon-{}", icon.name)}
          viewBox="0 0 24 24"
          width="20"
          height="20"
          fill="none"
          stroke="currentColor"
          stroke-width="2"
          stroke-linecap="round"
          stroke-linejoin="round"
      >
          { for icon.shapes.iter().map(render_shape) }
      </svg>
  }
}
