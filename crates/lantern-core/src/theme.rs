//! Light/dark theme selection.
//!
//! The active theme is resolved from, in order: an explicit persisted
//! choice, the system `prefers-color-scheme` signal, and finally
//! [`Theme::Light`]. Only [`ThemeController::toggle`] ever writes the
//! persisted choice.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::{
  debug,
  info,
  warn
};

pub const DEFAULT_THEME_STORAGE_KEY:
  &str = "theme";

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
)]
pub enum Theme {
  #[default]
  Light,
  Dark
}

impl Theme {
  pub fn attribute_value(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "light",
      | Self::Dark => "dark"
    }
  }

  pub fn next(self) -> Self {
    match self {
      | Self::Light => Self::Dark,
      | Self::Dark => Self::Light
    }
  }

  pub fn from_prefers_dark(
    prefers_dark: bool
  ) -> Self {
    if prefers_dark {
      Self::Dark
    } else {
      Self::Light
    }
  }

  pub fn toggle_label(
    self
  ) -> &'static str {
    match self {
      | Self::Light => {
        "Switch to dark theme"
      }
      | Self::Dark => {
        "Switch to light theme"
      }
    }
  }
}

impl fmt::Display for Theme {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.attribute_value())
  }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme value: {0:?}")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
  type Err = ParseThemeError;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    match s {
      | "light" => Ok(Self::Light),
      | "dark" => Ok(Self::Dark),
      | other => {
        Err(ParseThemeError(
          other.to_string()
        ))
      }
    }
  }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
  #[error("preference storage is unavailable")]
  Unavailable,
  #[error("failed writing preference: {0}")]
  Write(String)
}

/// Key/value storage for persisted preferences.
///
/// Reads that fail for any reason behave like an absent key.
pub trait PreferenceStore {
  fn get(
    &self,
    key: &str
  ) -> Option<String>;

  fn set(
    &mut self,
    key: &str,
    value: &str
  ) -> Result<(), StoreError>;
}

/// Session-only store, used by tests and when browser storage is
/// missing.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  entries: HashMap<String, String>
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn remove(
    &mut self,
    key: &str
  ) -> Option<String> {
    self.entries.remove(key)
  }
}

impl PreferenceStore for MemoryStore {
  fn get(
    &self,
    key: &str
  ) -> Option<String> {
    self.entries.get(key).cloned()
  }

  fn set(
    &mut self,
    key: &str,
    value: &str
  ) -> Result<(), StoreError> {
    self.entries.insert(
      key.to_string(),
      value.to_string()
    );
    Ok(())
  }
}

#[derive(Debug)]
pub struct ThemeController<S> {
  store:       S,
  storage_key: String,
  active:      Theme
}

impl<S: PreferenceStore>
  ThemeController<S>
{
  pub fn new(
    store: S,
    storage_key: impl Into<String>
  ) -> Self {
    Self {
      store,
      storage_key: storage_key.into(),
      active: Theme::default()
    }
  }

  pub fn active(&self) -> Theme {
    self.active
  }

  pub fn store(&self) -> &S {
    &self.store
  }

  pub fn store_mut(&mut self) -> &mut S {
    &mut self.store
  }

  /// The persisted choice, if one exists and parses.
  pub fn persisted(
    &self
  ) -> Option<Theme> {
    let raw = self
      .store
      .get(&self.storage_key)?;
    match raw.parse::<Theme>() {
      | Ok(theme) => Some(theme),
      | Err(error) => {
        warn!(
          %error,
          key = %self.storage_key,
          "ignoring stored theme \
           preference"
        );
        None
      }
    }
  }

  /// Resolves the startup theme. `system_prefers_dark` is `None` when
  /// the host cannot evaluate media queries.
  #[tracing::instrument(skip(self))]
  pub fn initialize(
    &mut self,
    system_prefers_dark: Option<bool>
  ) -> Theme {
    let persisted = self.persisted();
    self.active = persisted
      .or_else(|| {
        system_prefers_dark
          .map(Theme::from_prefers_dark)
      })
      .unwrap_or_default();

    info!(
      theme = %self.active,
      persisted = persisted.is_some(),
      "resolved initial theme"
    );
    self.active
  }

  /// Applies a system preference change unless the user has made an
  /// explicit choice. Returns the newly applied theme, if any.
  #[tracing::instrument(skip(self))]
  pub fn system_changed(
    &mut self,
    prefers_dark: bool
  ) -> Option<Theme> {
    if self.persisted().is_some() {
      debug!(
        "explicit theme preference \
         set; ignoring system change"
      );
      return None;
    }

    self.active =
      Theme::from_prefers_dark(
        prefers_dark
      );
    debug!(
      theme = %self.active,
      "applied system theme"
    );
    Some(self.active)
  }

  /// Flips the active theme and persists it as an explicit choice.
  #[tracing::instrument(skip(self))]
  pub fn toggle(&mut self) -> Theme {
    self.active = self.active.next();

    if let Err(error) =
      self.store.set(
        &self.storage_key,
        self.active.attribute_value()
      )
    {
      warn!(
        %error,
        theme = %self.active,
        "failed persisting theme \
         preference"
      );
    }

    info!(
      theme = %self.active,
      "toggled theme"
    );
    self.active
  }

  pub fn icon(&self) -> ThemeIcon {
    ThemeIcon::for_theme(self.active)
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq,
)]
pub enum IconShape {
  Path(&'static str),
  Circle {
    cx: f32,
    cy: f32,
    r:  f32
  },
  Line {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeIcon {
  pub name:   &'static str,
  pub shapes: &'static [IconShape]
}

const MOON_SHAPES: &[IconShape] = &[
  IconShape::Path(
    "M21 12.79A9 9 0 1 1 11.21 3 7 7 \
     0 0 0 21 12.79z"
  )
];

const SUN_SHAPES: &[IconShape] = &[
  IconShape::Circle {
    cx: 12.0,
    cy: 12.0,
    r:  5.0
  },
  IconShape::Line {
    x1: 12.0,
    y1: 1.0,
    x2: 12.0,
    y2: 3.0
  },
  IconShape::Line {
    x1: 12.0,
    y1: 21.0,
    x2: 12.0,
    y2: 23.0
  },
  IconShape::Line {
    x1: 4.22,
    y1: 4.22,
    x2: 5.64,
    y2: 5.64
  },
  IconShape::Line {
    x1: 18.36,
    y1: 18.36,
    x2: 19.78,
    y2: 19.78
  },
  IconShape::Line {
    x1: 1.0,
    y1: 12.0,
    x2: 3.0,
    y2: 12.0
  },
  IconShape::Line {
    x1: 21.0,
    y1: 12.0,
    x2: 23.0,
    y2: 12.0
  },
  IconShape::Line {
    x1: 4.22,
    y1: 19.78,
    x2: 5.64,
    y2: 18.36
  },
  IconShape::Line {
    x1: 18.36,
    y1: 5.64,
    x2: 19.78,
    y2: 4.22
  }
];

impl ThemeIcon {
  pub fn for_theme(
    theme: Theme
  ) -> Self {
    match theme {
      | Theme::Dark => {
        Self {
          name:   "moon",
          shapes: MOON_SHAPES
        }
      }
      | Theme::Light => {
        Self {
          name:   "sun",
          shapes: SUN_SHAPES
        }
      }
    }
  }
}
