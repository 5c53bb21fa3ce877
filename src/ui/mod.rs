pub mod app;
mod context;
mod input;
mod month_pane;
pub mod sheet;
mod status_line;

pub use app::App;
pub use context::{Context, Mode, Theme};
pub use month_pane::{DayCell, MonthPane};
pub use sheet::Sheet;
pub use status_line::StatusLine;
