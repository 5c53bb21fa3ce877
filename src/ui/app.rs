use crate::config::Config;
use crate::events::{Dispatcher, Event};
use crate::picker::Picker;

use super::input::{DateInputParser, GridCursor, PickerBehaviour};
use super::{Context, Mode, MonthPane, StatusLine};

use unsegen::base::Terminal;
use unsegen::input::{EditBehavior, Key, NavigateBehavior};
use unsegen::widget::*;

pub struct App {
    context: Context,
}

impl App {
    pub fn new(config: &Config, picker: Picker) -> App {
        App {
            context: Context::new(config, picker),
        }
    }

    fn as_widget<'w>(&'w self) -> impl Widget + 'w {
        let mut layout = VLayout::new()
            .widget(MonthPane::new(&self.context))
            .widget(StatusLine::new(&self.context));

        if self.context.mode == Mode::Insert {
            layout = layout.widget(self.context.input_sink().as_widget());
        }

        layout
    }

    pub fn run(
        &mut self,
        dispatcher: Dispatcher,
        mut term: Terminal,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut run = true;

        while run {
            // Handle events
            if let Ok(event) = dispatcher.next() {
                match event {
                    Event::Update => self.context.update(),
                    Event::Input(input) => {
                        if input.matches(Key::Esc) {
                            self.context.leave_insert();
                        } else {
                            match self.context.mode {
                                Mode::Normal => {
                                    let unhandled = input
                                        .chain((Key::Char('q'), || run = false))
                                        .chain(
                                            NavigateBehavior::new(&mut GridCursor(
                                                &mut self.context,
                                            ))
                                            .down_on(Key::Char('j'))
                                            .down_on(Key::Down)
                                            .up_on(Key::Char('k'))
                                            .up_on(Key::Up)
                                            .left_on(Key::Char('h'))
                                            .left_on(Key::Left)
                                            .right_on(Key::Char('l'))
                                            .right_on(Key::Right),
                                        )
                                        .chain(PickerBehaviour::new(&mut self.context))
                                        .finish();

                                    if unhandled.is_some() {
                                        log::trace!("ignored input in normal mode");
                                    }
                                }
                                Mode::Insert => {
                                    input
                                        .chain(
                                            EditBehavior::new(self.context.input_sink_mut())
                                                .delete_forwards_on(Key::Delete)
                                                .delete_backwards_on(Key::Backspace)
                                                .left_on(Key::Left)
                                                .right_on(Key::Right),
                                        )
                                        .chain(DateInputParser::new(&mut self.context))
                                        .finish();

                                    self.context.sync_input();
                                }
                            }
                        }
                    }
                }
            } else {
                log::warn!("event dispatcher disconnected");
                break;
            }

            // Draw
            let root = term.create_root_window();
            self.as_widget().draw(root, RenderingHints::new());
            term.present();
        }

        Ok(())
    }
}
