use std::fmt::{
  Display,
  Write
};

use chrono::format::{
  Item,
  StrftimeItems
};
use chrono::{
  DateTime,
  TimeZone
};
use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_TIME_FORMAT: &str =
  "%H:%M:%S";
pub const DEFAULT_DATE_FORMAT: &str =
  "%A, %B %-d, %Y";

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct ClockView {
  pub time: String,
  pub date: String
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Deserialize,
)]
#[serde(default)]
pub struct ClockFormat {
  pub time_format: String,
  pub date_format: String,
  pub tick_ms:     u32
}

impl Default for ClockFormat {
  fn default() -> Self {
    Self {
      time_format: DEFAULT_TIME_FORMAT
        .to_string(),
      date_format: DEFAULT_DATE_FORMAT
        .to_string(),
      tick_ms:     1_000
    }
  }
}

impl ClockFormat {
  pub fn render<Tz>(
    &self,
    now: &DateTime<Tz>
  ) -> ClockView
  where
    Tz: TimeZone,
    Tz::Offset: Display
  {
    ClockView {
      time: format_or_default(
        now,
        &self.time_format,
        DEFAULT_TIME_FORMAT
      ),
      date: format_or_default(
        now,
        &self.date_format,
        DEFAULT_DATE_FORMAT
      )
    }
  }
}

/// Whether chrono understands every specifier in `format`.
pub fn is_valid_strftime(
  format: &str
) -> bool {
  !StrftimeItems::new(format)
    .any(|item| matches!(item, Item::Error))
}

fn format_or_default<Tz>(
  now: &DateTime<Tz>,
  format: &str,
  fallback: &str
) -> String
where
  Tz: TimeZone,
  Tz::Offset: Display
{
  let mut out = String::new();
  if write!(out, "{}", now.format(format))
    .is_ok()
  {
    return out;
  }

  warn!(
    format,
    "clock format failed; using \
     default"
  );
  out.clear();
  let _ = write!(
    out,
    "{}",
    now.format(fallback)
  );
  out
}
