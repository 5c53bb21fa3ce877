use chrono::Datelike;

use super::date::ReferenceMonth;

pub const DAYS_PER_WEEK: usize = 7;
pub const MAX_CELLS: usize = 42;

// Weeks start on Sunday, weekdays are counted 0 (Sunday) to 6 (Saturday).
const LAST_WEEKDAY: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthRelation {
    Previous,
    Current,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub day: u32,
    pub relation: MonthRelation,
}

impl GridCell {
    pub fn new(day: u32, relation: MonthRelation) -> Self {
        GridCell { day, relation }
    }
}

/// Day numbers of a month view, split by the month they belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub previous: Vec<u32>,
    pub current: Vec<u32>,
    pub next: Vec<u32>,
}

impl MonthGrid {
    pub fn len(&self) -> usize {
        self.previous.len() + self.current.len() + self.next.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn rows(&self) -> usize {
        (self.len() + DAYS_PER_WEEK - 1) / DAYS_PER_WEEK
    }

    /// All cells in display order, row by row.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        let tag = |days: &[u32], relation: MonthRelation| {
            days.iter()
                .map(move |&day| GridCell::new(day, relation))
                .collect::<Vec<_>>()
        };

        tag(&self.previous, MonthRelation::Previous)
            .into_iter()
            .chain(tag(&self.current, MonthRelation::Current))
            .chain(tag(&self.next, MonthRelation::Next))
    }

    pub fn cell(&self, index: usize) -> Option<GridCell> {
        self.cells().nth(index)
    }

    pub fn position(&self, cell: GridCell) -> Option<usize> {
        self.cells().position(|c| c == cell)
    }
}

/// Computes the grid for `month`: trailing days of the previous month up to
/// the first Sunday, every day of `month`, then days of the following month.
/// The following month is filled up with at least one full week and the whole
/// grid is capped at six rows.
///
/// Neighbours outside the supported date range contribute no cells.
pub fn compute(month: ReferenceMonth) -> MonthGrid {
    let previous: Vec<u32> = match month.checked_prev() {
        Some(prev) => {
            let prev_num_days = prev.num_days();
            let prev_last_weekday = prev.last_day().weekday().num_days_from_sunday();

            if prev_last_weekday == LAST_WEEKDAY {
                Vec::new()
            } else {
                ((prev_num_days - prev_last_weekday)..=prev_num_days).collect()
            }
        }
        None => Vec::new(),
    };

    let current: Vec<u32> = (1..=month.num_days()).collect();

    let last_weekday = month.last_day().weekday().num_days_from_sunday();
    let first_next_weekday = (last_weekday + 1) % DAYS_PER_WEEK as u32;
    let mut next: Vec<u32> = if month.checked_next().is_some() {
        (1..=(2 * DAYS_PER_WEEK as u32 - first_next_weekday)).collect()
    } else {
        Vec::new()
    };

    // Top up to a second trailing week.
    if !next.is_empty() && next.len() < DAYS_PER_WEEK {
        next.extend(
            (DAYS_PER_WEEK as u32 - first_next_weekday)
                ..(2 * DAYS_PER_WEEK as u32 - first_next_weekday),
        );
    }

    let total = previous.len() + current.len() + next.len();
    if total > MAX_CELLS {
        next.truncate(next.len() - (total - MAX_CELLS));
    }

    log::trace!(
        "grid for {}: {} previous, {} current, {} next",
        month,
        previous.len(),
        current.len(),
        next.len()
    );

    MonthGrid {
        previous,
        current,
        next,
    }
}

/// Same as [`compute`] for a plain `(year, month)` pair. `None` if `month` is
/// not in `1..=12`.
pub fn compute_grid(year: i32, month: u32) -> Option<MonthGrid> {
    ReferenceMonth::from_ym(year, month).map(compute)
}
