use anyhow::{
  Context,
  bail
};
use serde::Deserialize;
use tracing::{
  debug,
  error,
  info
};

use crate::clock::{
  ClockFormat,
  is_valid_strftime
};
use crate::nav::DEFAULT_NAV_BREAKPOINT_PX;
use crate::tasks::DEFAULT_WINDOW_SIZE;
use crate::theme::DEFAULT_THEME_STORAGE_KEY;
use crate::toast::ToastTiming;

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Deserialize,
)]
#[serde(default)]
pub struct ThemeConfig {
  pub storage_key: String
}

impl Default for ThemeConfig {
  fn default() -> Self {
    Self {
      storage_key:
        DEFAULT_THEME_STORAGE_KEY
          .to_string()
    }
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Deserialize,
)]
#[serde(default)]
pub struct TasksConfig {
  pub window_size: usize,
  pub seed:        Vec<String>
}

impl Default for TasksConfig {
  fn default() -> Self {
    Self {
      window_size: DEFAULT_WINDOW_SIZE,
      seed:        vec![]
    }
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Deserialize,
)]
#[serde(default)]
pub struct NavConfig {
  pub breakpoint_px: u32
}

impl Default for NavConfig {
  fn default() -> Self {
    Self {
      breakpoint_px:
        DEFAULT_NAV_BREAKPOINT_PX
    }
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Default,
  Deserialize,
)]
#[serde(default)]
pub struct SiteConfig {
  pub theme:  ThemeConfig,
  pub tasks:  TasksConfig,
  pub toasts: ToastTiming,
  pub nav:    NavConfig,
  pub clock:  ClockFormat
}

impl SiteConfig {
  #[tracing::instrument(skip(text))]
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let cfg: SiteConfig =
      toml::from_str(text).context(
        "failed to parse site config"
      )?;
    cfg.validate()?;

    info!(
      window_size = cfg.tasks.window_size,
      seed = cfg.tasks.seed.len(),
      storage_key = %cfg.theme.storage_key,
      "loaded site config"
    );
    Ok(cfg)
  }

  /// Falls back to defaults when `text` is unusable.
  pub fn from_toml_or_default(
    text: &str
  ) -> Self {
    match Self::from_toml_str(text) {
      | Ok(cfg) => cfg,
      | Err(error) => {
        error!(
          error = %format!("{error:#}"),
          "invalid site config; using \
           defaults"
        );
        Self::default()
      }
    }
  }

  pub fn validate(
    &self
  ) -> anyhow::Result<()> {
    if self
      .theme
      .storage_key
      .trim()
      .is_empty()
    {
      bail!(
        "theme.storage_key must not \
         be empty"
      );
    }
    if self.tasks.window_size == 0 {
      bail!(
        "tasks.window_size must be at \
         least 1"
      );
    }
    if self.toasts.fade_at_ms
      >= self.toasts.lifetime_ms
    {
      bail!(
        "toasts.fade_at_ms ({}) must be \
         below toasts.lifetime_ms ({})",
        self.toasts.fade_at_ms,
        self.toasts.lifetime_ms
      );
    }
    for (key, format) in [
      (
        "clock.time_format",
        &self.clock.time_format
      ),
      (
        "clock.date_format",
        &self.clock.date_format
      )
    ] {
      if !is_valid_strftime(format) {
        bail!(
          "{key} is not a valid \
           strftime format: {format:?}"
        );
      }
    }
    if self.clock.tick_ms == 0 {
      bail!(
        "clock.tick_ms must be positive"
      );
    }

    debug!("site config validated");
    Ok(())
  }
}

#[cfg(test)]
mod config_tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn empty_document_yields_defaults() {
    let cfg = SiteConfig::from_toml_str("")
      .expect("empty config parses");
    assert_eq!(cfg, SiteConfig::default());
    assert_eq!(cfg.theme.storage_key, "theme");
    assert_eq!(cfg.tasks.window_size, 3);
    assert_eq!(cfg.toasts.lifetime_ms, 3_000);
    assert_eq!(cfg.toasts.fade_at_ms, 2_700);
    assert_eq!(cfg.nav.breakpoint_px, 768);
    assert_eq!(cfg.clock.tick_ms, 1_000);
  }

  #[test]
  fn partial_sections_keep_other_defaults(
  ) {
    let cfg = SiteConfig::from_toml_str(
      r#"
[tasks]
seed = ["Water plants", "Call mom"]

[clock]
time_format = "%H:%M"
"#
    )
    .expect("partial config parses");

    assert_eq!(
      cfg.tasks.seed,
      vec![
        "Water plants".to_string(),
        "Call mom".to_string()
      ]
    );
    assert_eq!(cfg.tasks.window_size, 3);
    assert_eq!(cfg.clock.time_format, "%H:%M");
    assert_eq!(
      cfg.clock.date_format,
      ClockFormat::default().date_format
    );
  }

  #[test]
  fn unusable_text_falls_back_to_defaults(
  ) {
    assert_eq!(
      SiteConfig::from_toml_or_default(
        "[tasks\nwindow_size = 1"
      ),
      SiteConfig::default()
    );
  }

  #[test]
  fn unknown_clock_specifier_is_rejected(
  ) {
    let error = SiteConfig::from_toml_str(
      "[clock]\ntime_format = \"%Q\""
    )
    .expect_err("%Q must not validate");
    assert!(
      format!("{error:#}")
        .contains("clock.time_format")
    );
  }

  #[test]
  fn invalid_values_are_rejected() {
    for text in [
      "[tasks]\nwindow_size = 0",
      "[toasts]\nfade_at_ms = 3000",
      "[clock]\ntick_ms = 0",
      "[clock]\ntime_format = \"%Q\"",
      "[clock]\ndate_format = \"%Y-%\"",
      "[theme]\nstorage_key = \"  \"",
      "[tasks]\nwindow_size = \"three\""
    ] {
      assert!(
        SiteConfig::from_toml_str(text)
          .is_err(),
        "expected rejection for {text:?}"
      );
    }
  }
}
