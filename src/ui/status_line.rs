use std::fmt::Write;
use unsegen::base::*;
use unsegen::widget::*;

use super::Context;

/// The confirmed date and, after a rejected input, the reason.
pub struct StatusLine<'a> {
    context: &'a Context,
}

impl<'a> StatusLine<'a> {
    pub fn new(context: &'a Context) -> Self {
        StatusLine { context }
    }
}

impl Widget for StatusLine<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(10),
            height: RowDemand::exact(1),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let picker = self.context.picker();
        let mut cursor = Cursor::new(&mut window);

        if let Err(err) = write!(&mut cursor, "Date: {}", picker.selected_text()) {
            log::warn!("Error while writing status line: {}", err);
        }

        if !picker.is_valid() {
            cursor.set_style_modifier(self.context.theme.invalid_style);
            let message = self
                .context
                .last_error_message
                .as_deref()
                .unwrap_or("invalid date");
            write!(&mut cursor, "  [{}]", message).unwrap();
        }
    }
}
