mod checklist;
mod navigation;
mod page;
mod storage;

use std::collections::HashMap;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use lantern_core::{
  SiteConfig,
  Theme,
  ThemeController,
  ToastId
};
use wasm_bindgen::JsCast;
use yew::{
  Callback,
  Html,
  MouseEvent,
  function_component,
  html,
  use_effect_with,
  use_memo,
  use_mut_ref,
  use_node_ref,
  use_reducer,
  use_state
};

use self::checklist::{
  ChecklistAction,
  ChecklistState
};
use self::navigation::{
  NavAction,
  NavState,
  node_contains
};
use self::storage::BrowserStore;
use crate::components::{
  LiveClock,
  NavToggle,
  Sidebar,
  TaskList,
  ThemeToggle,
  ToastStackView
};

const SITE_CONFIG_TOML: &str =
  include_str!("../assets/site.toml");

/// Fade and removal timers for one toast. Dropping cancels both.
struct ToastTimers {
  _fade:   Timeout,
  _remove: Timeout
}

#[function_component(App)]
pub fn app() -> Html {
  let config = use_memo((), |_| {
    SiteConfig::from_toml_or_default(
      SITE_CONFIG_TOML
    )
  });

  let themes = {
    let storage_key =
      config.theme.storage_key.clone();
    use_mut_ref(move || {
      ThemeController::new(
        BrowserStore::open(),
        storage_key
      )
    })
  };
  let theme = {
    let themes = themes.clone();
    use_state(move || {
      themes.borrow_mut().initialize(
        page::system_prefers_dark()
      )
    })
  };
  let nav = {
    let breakpoint_px =
      config.nav.breakpoint_px;
    use_reducer(move || {
      NavState(
        lantern_core::MobileNav::new(
          breakpoint_px
        )
      )
    })
  };
  let checklist = {
    let config = config.clone();
    use_reducer(move || {
      ChecklistState::from_config(
        &config
      )
    })
  };
  let toast_timers = use_mut_ref(
    HashMap::<ToastId, ToastTimers>::new
  );
  let sidebar_ref = use_node_ref();
  let nav_toggle_ref = use_node_ref();

  {
    use_effect_with(*theme, move |theme| {
      page::apply_theme(*theme);
      tracing::debug!(
        theme = %theme,
        "applied theme"
      );
      || ()
    });
  }

  {
    let themes = themes.clone();
    let theme = theme.clone();
    use_effect_with((), move |_| {
      let listener = page::prefers_dark_query()
        .map(|query| {
          EventListener::new(
            &query,
            "change",
            move |event| {
              let Some(prefers_dark) =
                event
                  .dyn_ref::<web_sys::MediaQueryListEvent>()
                  .map(|event| event.matches())
              else {
                return;
              };
              if let Some(next) = themes
                .borrow_mut()
                .system_changed(prefers_dark)
              {
                theme.set(next);
              }
            }
          )
        });
      if listener.is_none() {
        tracing::info!(
          "color scheme media query \
           unsupported; not following \
           system theme"
        );
      }
      move || drop(listener)
    });
  }

  {
    let locked =
      nav.0.view().body_scroll_locked;
    use_effect_with(locked, move |locked| {
      page::set_scroll_lock(*locked);
      || ()
    });
  }

  {
    let dispatcher = nav.dispatcher();
    let sidebar_ref = sidebar_ref.clone();
    let nav_toggle_ref =
      nav_toggle_ref.clone();
    use_effect_with((), move |_| {
      let mut listeners = Vec::new();

      if let Some(window) =
        web_sys::window()
      {
        if let Some(document) =
          window.document()
        {
          let dispatcher =
            dispatcher.clone();
          listeners.push(
            EventListener::new(
              &document,
              "click",
              move |event| {
                let target = event
                  .target()
                  .and_then(|target| {
                    target
                      .dyn_into::<web_sys::Node>()
                      .ok()
                  });
                dispatcher.dispatch(
                  NavAction::DocumentClick {
                    inside_sidebar: node_contains(
                      &sidebar_ref,
                      target.as_ref()
                    ),
                    inside_toggle:  node_contains(
                      &nav_toggle_ref,
                      target.as_ref()
                    )
                  }
                );
              }
            )
          );
        }

        listeners.push(EventListener::new(
          &window,
          "resize",
          move |_| {
            if let Some(width) =
              page::viewport_width_px()
            {
              dispatcher.dispatch(
                NavAction::Resized(width)
              );
            }
          }
        ));
      }

      move || drop(listeners)
    });
  }

  {
    let dispatcher =
      checklist.dispatcher();
    let toast_timers =
      toast_timers.clone();
    use_effect_with(
      checklist.toasts.clone(),
      move |toasts| {
        let now = page::now_ms();
        let mut timers =
          toast_timers.borrow_mut();

        timers.retain(|id, _| {
          toasts.schedule(*id).is_some()
        });

        for toast in toasts.toasts() {
          if timers.contains_key(&toast.id) {
            continue;
          }
          let Some(schedule) =
            toasts.schedule(toast.id)
          else {
            continue;
          };

          let id = toast.id;
          let fade = {
            let dispatcher =
              dispatcher.clone();
            Timeout::new(
              clamp_delay(
                schedule.fade_delay_ms(now)
              ),
              move || {
                dispatcher.dispatch(
                  ChecklistAction::BeginDismiss(id)
                );
              }
            )
          };
          let remove = {
            let dispatcher =
              dispatcher.clone();
            Timeout::new(
              clamp_delay(
                schedule
                  .remove_delay_ms(now)
              ),
              move || {
                dispatcher.dispatch(
                  ChecklistAction::Dismiss(id)
                );
              }
            )
          };
          timers.insert(id, ToastTimers {
            _fade:   fade,
            _remove: remove
          });
        }

        || ()
      }
    );
  }

  {
    let dispatcher =
      checklist.dispatcher();
    let toast_timers =
      toast_timers.clone();
    use_effect_with((), move |_| {
      move || {
        dispatcher.dispatch(
          ChecklistAction::CancelToasts
        );
        let cancelled =
          toast_timers.borrow().len();
        toast_timers.borrow_mut().clear();
        tracing::debug!(
          cancelled,
          "cancelled toast timers"
        );
      }
    });
  }

  let on_toggle_theme = {
    let themes = themes.clone();
    let theme = theme.clone();
    Callback::from(move |_: MouseEvent| {
      let next =
        themes.borrow_mut().toggle();
      theme.set(next);
    })
  };

  let on_toggle_nav = {
    let dispatcher = nav.dispatcher();
    Callback::from(move |_: MouseEvent| {
      dispatcher
        .dispatch(NavAction::Toggle);
    })
  };

  let on_add_task = {
    let dispatcher =
      checklist.dispatcher();
    Callback::from(move |text: String| {
      dispatcher.dispatch(
        ChecklistAction::Add(text)
      );
    })
  };

  let on_complete_task = {
    let dispatcher =
      checklist.dispatcher();
    Callback::from(move |slot: usize| {
      dispatcher.dispatch(
        ChecklistAction::Complete {
          slot,
          now_ms: page::now_ms()
        }
      );
    })
  };

  let nav_view = nav.0.view();
  let window_view =
    checklist.tasks.render();
  let active_theme: Theme = *theme;

  html! {
      <div class="page">
          <header class="topbar">
              <NavToggle
                  node_ref={nav_toggle_ref}
                  active={nav_view.toggle_active}
                  on_toggle={on_toggle_nav}
              />
              <LiveClock format={config.clock.clone()} />
              <ThemeToggle theme={active_theme} on_toggle={on_toggle_theme} />
          </header>
          <Sidebar node_ref={sidebar_ref} shown={nav_view.sidebar_shown} />
          <main class="content">
              <TaskList
                  view={window_view}
                  on_add={on_add_task}
                  on_complete={on_complete_task}
              />
          </main>
          <ToastStackView toasts={checklist.toasts.toasts().to_vec()} />
      </div>
  }
}

fn clamp_delay(delay_ms: u64) -> u32 {
  u32::try_from(delay_ms)
    .unwrap_or(u32::MAX)
}
