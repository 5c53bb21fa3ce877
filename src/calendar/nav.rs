use super::date::{CalendarDate, ReferenceMonth};
use super::grid::{GridCell, MonthRelation};

pub fn previous_month(reference: ReferenceMonth) -> ReferenceMonth {
    reference.prev()
}

pub fn next_month(reference: ReferenceMonth) -> ReferenceMonth {
    reference.next()
}

pub fn today() -> ReferenceMonth {
    ReferenceMonth::today()
}

/// Resolves a clicked cell to a date. Cells of the neighbouring months move
/// the view to that month, so the returned reference is always the month of
/// the returned date.
///
/// `None` if `day` does not exist in the resolved month, or the month itself
/// is outside the supported range.
pub fn select_date(
    reference: ReferenceMonth,
    day: u32,
    relation: MonthRelation,
) -> Option<(ReferenceMonth, CalendarDate)> {
    let resolved = reference.resolve(relation)?;
    resolved.date(day).map(|date| (resolved, date))
}

pub fn cell_date(reference: ReferenceMonth, cell: GridCell) -> Option<CalendarDate> {
    reference
        .resolve(cell.relation)
        .and_then(|month| month.date(cell.day))
}

pub fn is_today(reference: ReferenceMonth, cell: GridCell, today: CalendarDate) -> bool {
    cell_date(reference, cell) == Some(today)
}

pub fn is_selected(
    reference: ReferenceMonth,
    cell: GridCell,
    selected: Option<CalendarDate>,
) -> bool {
    selected.is_some() && cell_date(reference, cell) == selected
}
