mod date;
pub mod grid;
pub mod nav;
pub mod parse;

pub use date::{days_of_month, is_leap_year, CalendarDate, ReferenceMonth};
pub use grid::{compute, compute_grid, GridCell, MonthGrid, MonthRelation};
pub use parse::{parse, ParseError};
