use crate::calendar::{self, nav, CalendarDate, GridCell, MonthGrid, ParseError, ReferenceMonth};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    PrevMonth,
    NextMonth,
    Today,
    Select(GridCell),
    TextChanged(String),
    Submit,
}

/// State of a single date picker.
///
/// All changes go through [`Picker::apply`], one action per user event.
#[derive(Debug, Clone)]
pub struct Picker {
    reference: ReferenceMonth,
    input: String,
    selected: Option<CalendarDate>,
    valid: bool,
    today: CalendarDate,
}

impl Picker {
    pub fn new(today: CalendarDate) -> Self {
        Picker {
            reference: today.reference_month(),
            input: String::new(),
            selected: None,
            valid: true,
            today,
        }
    }

    pub fn with_selection(mut self, date: CalendarDate) -> Self {
        self.select(date);
        self
    }

    pub fn reference(&self) -> ReferenceMonth {
        self.reference
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn selected(&self) -> Option<CalendarDate> {
        self.selected
    }

    pub fn selected_text(&self) -> String {
        self.selected.map(|d| d.to_string()).unwrap_or_default()
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn today(&self) -> CalendarDate {
        self.today
    }

    pub fn set_today(&mut self, today: CalendarDate) {
        if today != self.today {
            log::debug!("date changed to {}", today);
            self.today = today;
        }
    }

    pub fn grid(&self) -> MonthGrid {
        calendar::compute(self.reference)
    }

    pub fn is_today(&self, cell: GridCell) -> bool {
        nav::is_today(self.reference, cell, self.today)
    }

    pub fn is_selected(&self, cell: GridCell) -> bool {
        nav::is_selected(self.reference, cell, self.selected)
    }

    pub fn label(&self, format: &str) -> String {
        self.reference.label(format)
    }

    /// Replaces the input text. Validity is only re-evaluated on submit.
    pub fn set_input(&mut self, text: String) {
        self.input = text;
    }

    pub fn apply(&mut self, action: Action) -> Result<(), ParseError> {
        log::debug!("{:?} on {}", action, self.reference);

        match action {
            Action::PrevMonth => self.reference = nav::previous_month(self.reference),
            Action::NextMonth => self.reference = nav::next_month(self.reference),
            Action::Today => self.reference = self.today.reference_month(),
            Action::Select(cell) => {
                if let Some((_, date)) = nav::select_date(self.reference, cell.day, cell.relation)
                {
                    self.select(date);
                } else {
                    log::warn!("{:?} does not name a day of {}", cell, self.reference);
                }
            }
            Action::TextChanged(text) => self.set_input(text),
            Action::Submit => match calendar::parse(&self.input) {
                Ok(date) => {
                    self.select(date);
                    self.valid = true;
                }
                Err(err) => {
                    log::info!("rejected date input {:?}: {}", self.input, err);
                    self.valid = false;
                    return Err(err);
                }
            },
        }

        Ok(())
    }

    fn select(&mut self, date: CalendarDate) {
        self.reference = date.reference_month();
        self.selected = Some(date);
        self.input = date.to_string();
    }
}
