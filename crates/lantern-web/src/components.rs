mod live_clock;
mod nav_toggle;
mod sidebar;
mod task_list;
mod task_list_row;
mod theme_icon;
mod theme_toggle;
mod toast_stack;

pub use live_clock::LiveClock;
pub use nav_toggle::NavToggle;
pub use sidebar::Sidebar;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
pub use theme_icon::ThemeIconView;
pub use theme_toggle::ThemeToggle;
pub use toast_stack::ToastStackView;
