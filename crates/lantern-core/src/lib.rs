//! Page behavior for the Lantern static site: theme selection, the
//! mobile nav drawer, the checklist widget with its completion toasts,
//! and the header clock.
//!
//! Everything here is platform-free. `lantern_web` binds these state
//! machines to the browser.

pub mod clock;
pub mod config;
pub mod nav;
pub mod tasks;
pub mod theme;
pub mod toast;

pub use clock::{
  ClockFormat,
  ClockView
};
pub use config::SiteConfig;
pub use nav::{
  MobileNav,
  NavView
};
pub use tasks::{
  TaskError,
  TaskRow,
  TaskWindow,
  WindowView
};
pub use theme::{
  MemoryStore,
  PreferenceStore,
  StoreError,
  Theme,
  ThemeController,
  ThemeIcon
};
pub use toast::{
  DismissSchedule,
  Toast,
  ToastId,
  ToastStack,
  ToastTiming
};
