use unsegen::input::*;

use super::context::{Context, Mode};
use crate::picker::Action;

/// Handles submission of the date prompt. Editing keys are expected to be
/// consumed by an `EditBehavior` earlier in the chain.
pub struct DateInputParser<'a> {
    context: &'a mut Context,
}

impl<'a> DateInputParser<'a> {
    pub fn new(context: &'a mut Context) -> Self {
        DateInputParser { context }
    }
}

impl Behavior for DateInputParser<'_> {
    fn input(self, input: Input) -> Option<Input> {
        if let Event::Key(Key::Char('\n')) = input.event {
            if self.context.submit_input() {
                self.context.mode = Mode::Normal;
            }
            None
        } else {
            Some(input)
        }
    }
}

/// Key bindings of the month grid in normal mode.
pub struct PickerBehaviour<'a> {
    context: &'a mut Context,
}

impl<'a> PickerBehaviour<'a> {
    pub fn new(context: &'a mut Context) -> Self {
        PickerBehaviour { context }
    }
}

impl Behavior for PickerBehaviour<'_> {
    fn input(self, input: Input) -> Option<Input> {
        if let Event::Key(key) = &input.event {
            match key {
                Key::Char('\n') | Key::Char(' ') => {
                    self.context.select_cursor();
                }
                Key::Char('p') | Key::Char('<') => {
                    self.context.apply(Action::PrevMonth);
                }
                Key::Char('n') | Key::Char('>') => {
                    self.context.apply(Action::NextMonth);
                }
                Key::Char('t') => {
                    self.context.apply(Action::Today);
                }
                Key::Char('i') | Key::Char('/') => self.context.mode = Mode::Insert,
                _ => return Some(input),
            }
            None
        } else {
            Some(input)
        }
    }
}

/// Moves the grid cursor by days and weeks.
pub struct GridCursor<'a>(pub &'a mut Context);

impl Navigatable for GridCursor<'_> {
    fn move_down(&mut self) -> OperationResult {
        self.0.move_cursor(7)
    }

    fn move_left(&mut self) -> OperationResult {
        self.0.move_cursor(-1)
    }

    fn move_right(&mut self) -> OperationResult {
        self.0.move_cursor(1)
    }

    fn move_up(&mut self) -> OperationResult {
        self.0.move_cursor(-7)
    }
}
