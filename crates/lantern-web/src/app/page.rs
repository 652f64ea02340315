use lantern_core::Theme;

pub const PREFERS_DARK_QUERY: &str =
  "(prefers-color-scheme: dark)";

pub fn prefers_dark_query()
-> Option<web_sys::MediaQueryList> {
  web_sys::window()?
    .match_media(PREFERS_DARK_QUERY)
    .ok()
    .flatten()
}

/// `None` when media queries cannot be evaluated.
pub fn system_prefers_dark()
-> Option<bool> {
  prefers_dark_query()
    .map(|query| query.matches())
}

fn body() -> Option<web_sys::HtmlElement> {
  web_sys::window()?
    .document()?
    .body()
}

pub fn apply_theme(theme: Theme) {
  if let Some(body) = body()
    && let Err(error) =
      body.set_attribute(
        "data-theme",
        theme.attribute_value()
      )
  {
    tracing::warn!(
      ?error,
      "failed applying theme attribute"
    );
  }
}

pub fn set_scroll_lock(locked: bool) {
  let Some(body) = body() else {
    return;
  };

  let style = body.style();
  let result = if locked {
    style
      .set_property("overflow", "hidden")
  } else {
    style
      .remove_property("overflow")
      .map(|_| ())
  };

  if let Err(error) = result {
    tracing::warn!(
      ?error,
      locked,
      "failed updating body scroll lock"
    );
  }
}

pub fn viewport_width_px()
-> Option<u32> {
  web_sys::window()?
    .inner_width()
    .ok()?
    .as_f64()
    .map(|width| width.max(0.0) as u32)
}

pub fn now_ms() -> u64 {
  js_sys::Date::now().max(0.0) as u64
}
