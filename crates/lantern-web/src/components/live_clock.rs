use chrono::Local;
use gloo::timers::callback::Interval;
use lantern_core::ClockFormat;
use yew::{
  Html,
  Properties,
  function_component,
  html,
  use_effect_with,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct LiveClockProps {
  pub format: ClockFormat
}

#[function_component(LiveClock)]
pub fn live_clock(
  props: &LiveClockProps
) -> Html {
  let view = {
    let format = props.format.clone();
    use_state(move || {
      format.render(&Local::now())
    })
  };

  {
    let view = view.clone();
    use_effect_with(
      props.format.clone(),
      move |format| {
        let format = format.clone();
        view.set(
          format.render(&Local::now())
        );
        let interval = Interval::new(
          format.tick_ms,
          move || {
            view.set(
              format.render(&Local::now())
            );
          }
        );
        move || drop(interval)
      }
    );
  }

  html! {
      <div class="clock">
          <span class="clock-time">{ view.time.clone() }</span>
          <span class="clock-date">{ view.date.clone() }</span>
      </div>
  }
}
