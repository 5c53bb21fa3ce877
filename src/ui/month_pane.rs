use itertools::Itertools;
use std::fmt::{self, Display, Write};
use unsegen::base::*;
use unsegen::widget::*;

use crate::calendar::grid::DAYS_PER_WEEK;
use crate::calendar::{GridCell, MonthRelation};
use crate::picker::Picker;

use super::{Context, Theme};

pub struct DayCell<'a> {
    day_num: u32,
    selected: bool,
    is_today: bool,
    theme: &'a Theme,
}

impl<'a> DayCell<'a> {
    pub const CELL_HEIGHT: usize = 1;
    pub const CELL_WIDTH: usize = 4;

    pub fn new(day_num: u32, theme: &'a Theme) -> Self {
        DayCell {
            day_num,
            selected: false,
            is_today: false,
            theme,
        }
    }

    pub fn for_cell(cell: GridCell, picker: &Picker, theme: &'a Theme) -> Self {
        DayCell::new(cell.day, theme)
            .select(picker.is_selected(cell))
            .today(picker.is_today(cell))
    }

    pub fn select(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn today(mut self, is_today: bool) -> Self {
        self.is_today = is_today;
        self
    }

    /// Selection takes precedence over the today marker.
    fn style(&self, relation: MonthRelation) -> StyleModifier {
        if self.selected {
            self.theme.selected_day_style
        } else if self.is_today {
            self.theme.today_day_style
        } else if relation == MonthRelation::Current {
            self.theme.day_style
        } else {
            self.theme.outside_day_style
        }
    }
}

impl Display for DayCell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arg_today = if self.is_today {
            self.theme.today_day_char.unwrap_or(' ')
        } else {
            ' '
        };

        let arg_selected = if self.selected {
            self.theme.selected_day_char.unwrap_or(' ')
        } else {
            ' '
        };

        write!(f, "{}{}{:>2}", arg_today, arg_selected, self.day_num)
    }
}

pub struct MonthPane<'a> {
    context: &'a Context,
}

impl<'a> MonthPane<'a> {
    const ROWS: usize = 6;
    const HEADER_ROWS: usize = 2;

    pub fn new(context: &'a Context) -> Self {
        MonthPane { context }
    }
}

impl Widget for MonthPane<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::exact(DAYS_PER_WEEK * DayCell::CELL_WIDTH),
            height: RowDemand::exact(Self::HEADER_ROWS + Self::ROWS * DayCell::CELL_HEIGHT),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = &self.context.theme;
        let picker = self.context.picker();

        let mut cursor = Cursor::new(&mut window)
            .wrapping_mode(WrappingMode::Wrap)
            .style_modifier(theme.month_header_style);

        let label = self.context.label();
        if let Err(err) = writeln!(
            &mut cursor,
            "{:^width$}",
            label,
            width = DAYS_PER_WEEK * DayCell::CELL_WIDTH
        ) {
            log::warn!("Error while writing month label: {}", err);
        }

        cursor.set_style_modifier(theme.weekday_style);
        for weekday in self.context.weekday_labels() {
            write!(
                &mut cursor,
                "{:>width$}",
                weekday,
                width = DayCell::CELL_WIDTH
            )
            .unwrap();
        }
        writeln!(&mut cursor).unwrap();

        let grid = picker.grid();
        let rows = grid.cells().enumerate().chunks(DAYS_PER_WEEK);
        for row in &rows {
            for (idx, cell) in row {
                let day = DayCell::for_cell(cell, picker, theme);

                cursor.set_style_modifier(day.style(cell.relation));
                if idx == self.context.cursor {
                    cursor.apply_style_modifier(theme.cursor_style);
                }

                write!(&mut cursor, "{}", day).unwrap();
            }
            writeln!(&mut cursor).unwrap();
        }
    }
}
