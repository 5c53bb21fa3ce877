use unsegen::base::style::*;
use unsegen::widget::builtin::PromptLine;

use crate::calendar::{CalendarDate, GridCell, MonthRelation};
use crate::config::{Config, ThemeConfig};
use crate::picker::{Action, Picker};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Insert,
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub day_style: StyleModifier,
    pub outside_day_style: StyleModifier,
    pub selected_day_style: StyleModifier,
    pub selected_day_char: Option<char>,
    pub today_day_style: StyleModifier,
    pub today_day_char: Option<char>,
    pub cursor_style: StyleModifier,
    pub month_header_style: StyleModifier,
    pub weekday_style: StyleModifier,
    pub invalid_style: StyleModifier,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Theme {
            day_style: StyleModifier::new(),
            outside_day_style: StyleModifier::new().fg_color(Color::LightBlack),
            selected_day_style: StyleModifier::new().bg_color(Color::Blue),
            selected_day_char: config.selected_char,
            today_day_style: StyleModifier::new()
                .fg_color(Color::LightRed)
                .format(TextFormatModifier::default().bold(true)),
            today_day_char: config.today_char,
            cursor_style: StyleModifier::new().invert(true),
            month_header_style: StyleModifier::new().fg_color(Color::Yellow),
            weekday_style: StyleModifier::new()
                .format(TextFormatModifier::default().italic(true)),
            invalid_style: StyleModifier::new().fg_color(Color::Red),
        }
    }
}

/// Everything the UI needs between two events.
pub struct Context {
    pub mode: Mode,
    pub theme: Theme,
    pub cursor: usize,
    pub last_error_message: Option<String>,
    picker: Picker,
    input: PromptLine,
    label_format: String,
    weekday_labels: Vec<String>,
}

impl Context {
    pub fn new(config: &Config, picker: Picker) -> Self {
        let mut input = PromptLine::with_prompt("> ".to_owned());
        input.set(picker.input());

        let mut context = Context {
            mode: Mode::Normal,
            theme: Theme::from_config(&config.theme),
            cursor: 0,
            last_error_message: None,
            picker,
            input,
            label_format: config.label_format.clone(),
            weekday_labels: config.weekday_labels.clone(),
        };
        context.focus_anchor();
        context
    }

    pub fn picker(&self) -> &Picker {
        &self.picker
    }

    pub fn label(&self) -> String {
        self.picker.label(&self.label_format)
    }

    pub fn weekday_labels(&self) -> &[String] {
        &self.weekday_labels
    }

    pub fn input_sink(&self) -> &PromptLine {
        &self.input
    }

    pub fn input_sink_mut(&mut self) -> &mut PromptLine {
        &mut self.input
    }

    pub fn update(&mut self) {
        self.picker.set_today(CalendarDate::today());
    }

    /// Applies `action` to the picker and reflects the outcome in the UI
    /// state. Returns whether the action succeeded.
    pub fn apply(&mut self, action: Action) -> bool {
        let keeps_cursor = matches!(action, Action::PrevMonth | Action::NextMonth);
        let shows_today = matches!(action, Action::Today);

        let result = self.picker.apply(action);
        self.input.set(self.picker.input());

        match result {
            Ok(()) => {
                self.last_error_message = None;
                if shows_today {
                    self.focus_on(self.picker.today());
                } else if !keeps_cursor {
                    self.focus_anchor();
                }
                true
            }
            Err(err) => {
                self.last_error_message = Some(format!("{}", err));
                false
            }
        }
    }

    pub fn cursor_cell(&self) -> Option<GridCell> {
        self.picker.grid().cell(self.cursor)
    }

    pub fn move_cursor(&mut self, delta: isize) -> Result<(), ()> {
        let len = self.picker.grid().len() as isize;
        let target = self.cursor as isize + delta;

        if (0..len).contains(&target) {
            self.cursor = target as usize;
            Ok(())
        } else {
            Err(())
        }
    }

    pub fn select_cursor(&mut self) -> bool {
        match self.cursor_cell() {
            Some(cell) => self.apply(Action::Select(cell)),
            None => false,
        }
    }

    /// Pushes the text currently in the prompt into the picker.
    pub fn sync_input(&mut self) {
        if self.input.active_line() != self.picker.input() {
            let text = self.input.active_line().to_owned();
            self.picker.set_input(text);
        }
    }

    pub fn submit_input(&mut self) -> bool {
        let text = self.input.finish_line().to_owned();
        if self.picker.input() != text {
            self.picker.set_input(text);
        }
        self.apply(Action::Submit)
    }

    pub fn leave_insert(&mut self) {
        self.mode = Mode::Normal;
        self.input.set(self.picker.input());
    }

    /// Puts the cursor on the selected day, or today, if it is visible.
    fn focus_anchor(&mut self) {
        let anchor = self.picker.selected().unwrap_or_else(|| self.picker.today());
        self.focus_on(anchor);
    }

    fn focus_on(&mut self, date: CalendarDate) {
        if self.picker.reference().contains(&date) {
            let cell = GridCell::new(date.day(), MonthRelation::Current);
            if let Some(position) = self.picker.grid().position(cell) {
                self.cursor = position;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(today: (i32, u32, u32)) -> Context {
        let today = CalendarDate::from_ymd(today.0, today.1, today.2).unwrap();
        Context::new(&Config::default(), Picker::new(today))
    }

    #[test]
    fn cursor_starts_on_today() {
        // 2024/03 starts with five days of February.
        let context = context((2024, 3, 5));
        assert_eq!(context.cursor, 9);
        assert_eq!(
            context.cursor_cell(),
            Some(GridCell::new(5, MonthRelation::Current))
        );
    }

    #[test]
    fn cursor_stays_inside_grid() {
        let mut context = context((2024, 3, 5));
        assert!(context.move_cursor(-9).is_ok());
        assert!(context.move_cursor(-1).is_err());
        assert_eq!(context.cursor, 0);

        assert!(context.move_cursor(41).is_ok());
        assert!(context.move_cursor(7).is_err());
        assert_eq!(context.cursor, 41);
    }

    #[test]
    fn selecting_outside_cell_follows_month() {
        let mut context = context((2024, 3, 5));
        context.cursor = 0;

        assert!(context.select_cursor());
        assert_eq!(context.picker().reference().to_string(), "2024/02");
        assert_eq!(context.input_sink().active_line(), "2024/02/25");
        assert_eq!(
            context.cursor_cell(),
            Some(GridCell::new(25, MonthRelation::Current))
        );
    }

    #[test]
    fn failed_submission_reports_error() {
        let mut context = context((2024, 3, 5));
        context.input_sink_mut().set("2024/02/30");

        assert!(!context.submit_input());
        assert!(!context.picker().is_valid());
        assert_eq!(
            context.last_error_message.as_deref(),
            Some("not a valid calendar date")
        );
        assert_eq!(context.input_sink().active_line(), "2024/02/30");

        context.input_sink_mut().set("2024/2/3");
        assert!(context.submit_input());
        assert_eq!(context.last_error_message, None);
        assert_eq!(context.input_sink().active_line(), "2024/02/03");
        assert_eq!(context.label(), "2024/02");
    }

    #[test]
    fn month_navigation_keeps_cursor() {
        let mut context = context((2024, 3, 5));
        assert!(context.apply(Action::NextMonth));
        assert_eq!(context.cursor, 9);
        assert_eq!(context.label(), "2024/04");
    }

    #[test]
    fn today_focuses_todays_cell() {
        let today = CalendarDate::from_ymd(2024, 3, 5).unwrap();
        let selected = CalendarDate::from_ymd(2024, 3, 20).unwrap();
        let mut context = Context::new(
            &Config::default(),
            Picker::new(today).with_selection(selected),
        );
        assert_eq!(context.cursor, 24);

        assert!(context.apply(Action::NextMonth));
        assert!(context.apply(Action::NextMonth));
        assert!(context.move_cursor(3).is_ok());

        assert!(context.apply(Action::Today));
        assert_eq!(context.label(), "2024/03");
        assert_eq!(context.cursor, 9);
        assert_eq!(context.picker().selected(), Some(selected));
    }

    #[test]
    fn edits_reach_the_picker() {
        let mut context = context((2024, 3, 5));
        context.mode = Mode::Insert;

        context.input_sink_mut().set("2024/03/1");
        context.sync_input();
        assert_eq!(context.picker().input(), "2024/03/1");
        assert_eq!(context.picker().selected(), None);
        assert!(context.picker().is_valid());
    }

    #[test]
    fn leaving_insert_mode_restores_picker_text() {
        let mut context = context((2024, 3, 5));
        context.mode = Mode::Insert;
        context.input_sink_mut().set("2024/03/1");
        context.sync_input();

        context.input_sink_mut().set("2024/03/17");
        context.leave_insert();
        assert_eq!(context.mode, Mode::Normal);
        assert_eq!(context.input_sink().active_line(), "2024/03/1");
        assert_eq!(context.picker().input(), "2024/03/1");
    }
}
