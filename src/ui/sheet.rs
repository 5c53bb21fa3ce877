use itertools::Itertools;
use std::fmt::{self, Display};

use crate::calendar::grid::DAYS_PER_WEEK;
use crate::config::Config;
use crate::picker::Picker;

use super::month_pane::DayCell;
use super::Theme;

/// Plain text rendering of a month, used when printing without a terminal UI.
pub struct Sheet<'a> {
    picker: &'a Picker,
    config: &'a Config,
    theme: Theme,
}

impl<'a> Sheet<'a> {
    pub fn new(picker: &'a Picker, config: &'a Config) -> Self {
        Sheet {
            picker,
            config,
            theme: Theme::from_config(&config.theme),
        }
    }
}

impl Display for Sheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = DAYS_PER_WEEK * DayCell::CELL_WIDTH;

        writeln!(
            f,
            "{:^width$}",
            self.picker.label(&self.config.label_format),
            width = width
        )?;

        for weekday in &self.config.weekday_labels {
            write!(f, "{:>width$}", weekday, width = DayCell::CELL_WIDTH)?;
        }
        writeln!(f)?;

        let grid = self.picker.grid();
        let rows = grid.cells().chunks(DAYS_PER_WEEK);
        for row in &rows {
            for cell in row {
                write!(f, "{}", DayCell::for_cell(cell, self.picker, &self.theme))?;
            }
            writeln!(f)?;
        }

        if let Some(selected) = self.picker.selected() {
            writeln!(f, "Date: {}", selected)?;
        }

        Ok(())
    }
}
