//! # ember8-gui
//!
//! The presentation and input layer around the ember8-core engine: a
//! window with the scaled display, a menu for picking a ROM, keyboard
//! translation, and a 60 Hz tick that drives one machine cycle per frame.

use std::io::Write;
use std::path::Path;

use iced::keyboard;
use iced::time;
use iced::widget::{button, column};
use iced::{Element, Fill, Subscription, Task};
use iced_aw::menu::{Item, Menu, MenuBar};
use rfd::{AsyncFileDialog, FileHandle};

use ember8_core::{Cpu, RomBuffer};

mod constants;
mod keymap;
mod widgets;

/// Messages exchanged between the iced widgets and the emulation loop.
#[derive(Debug, Clone)]
pub enum Message {
    /// The fixed-rate clock driving one machine cycle per frame
    Tick,
    KeyPressed(keyboard::Key),
    KeyReleased(keyboard::Key),
    OpenRomClicked,
    RomPicked(Option<FileHandle>),
    ResetClicked,
}

/// The main application: owns the machine, refreshes the screen when the
/// engine reports a change, and halts emulation when the engine faults.
pub struct Application {
    cpu: Cpu,
    screen: widgets::Screen,
    halted: bool,
}

impl Application {
    /// Opens the window and runs until it is closed.
    pub fn run() -> iced::Result {
        iced::application(Application::default, Application::update, Application::view)
            .title(constants::APP_NAME)
            .subscription(Application::subscription)
            .run()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let bar = MenuBar::new(vec![Item::with_menu(
            button("Machine"),
            Menu::new(vec![
                Item::new(
                    button("Open ROM")
                        .on_press(Message::OpenRomClicked)
                        .width(Fill),
                ),
                Item::new(button("Reset").on_press(Message::ResetClicked).width(Fill)),
            ])
            .width(180.0),
        )]);

        column![bar, self.screen.view()]
            .width(Fill)
            .height(Fill)
            .into()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => self.tick(),
            Message::KeyPressed(key) => {
                if let Some(code) = keymap::key_code(&key) {
                    self.cpu.press_key(code);
                }
            }
            Message::KeyReleased(key) => {
                if let Some(code) = keymap::key_code(&key) {
                    self.cpu.release_key(code);
                }
            }
            Message::OpenRomClicked => {
                return Task::perform(
                    AsyncFileDialog::new()
                        .add_filter("CHIP-8 ROM", &["ch8", "rom"])
                        .pick_file(),
                    Message::RomPicked,
                );
            }
            Message::RomPicked(Some(handle)) => self.load_rom(handle.path()),
            Message::RomPicked(None) => {}
            Message::ResetClicked => {
                self.cpu.reset();
                self.screen.refresh(self.cpu.framebuffer());
                self.halted = false;
            }
        }

        Task::none()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch(vec![
            iced::event::listen_with(|event, status, _| match (event, status) {
                (
                    iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }),
                    iced::event::Status::Ignored,
                ) => Some(Message::KeyPressed(key)),
                _ => None,
            }),
            iced::event::listen_with(|event, status, _| match (event, status) {
                (
                    iced::Event::Keyboard(keyboard::Event::KeyReleased { key, .. }),
                    iced::event::Status::Ignored,
                ) => Some(Message::KeyReleased(key)),
                _ => None,
            }),
            time::every(constants::TICK_INTERVAL).map(|_| Message::Tick),
        ])
    }

    /// One emulation frame: a single machine cycle, then flag consumption.
    fn tick(&mut self) {
        if self.halted {
            return;
        }
        if let Err(error) = self.cpu.step() {
            log::error!("emulation halted: {error}");
            self.halted = true;
        }
        if self.cpu.take_draw_flag() {
            self.screen.refresh(self.cpu.framebuffer());
        }
        if self.cpu.take_buzz_flag() {
            // TODO: route this through an audio sink instead of the bell
            print!("\x07");
            let _ = std::io::stdout().flush();
        }
    }

    fn load_rom(&mut self, path: &Path) {
        let rom = match RomBuffer::from_file(path) {
            Ok(rom) => rom,
            Err(error) => {
                log::error!("could not read {}: {error}", path.display());
                return;
            }
        };
        self.cpu.reset();
        self.halted = false;
        if let Err(error) = self.cpu.load_rom(&rom) {
            log::error!("could not load {}: {error}", path.display());
            self.halted = true;
        }
        self.screen.refresh(self.cpu.framebuffer());
        log::info!("loaded {}", path.display());
    }
}

impl Default for Application {
    fn default() -> Self {
        Self {
            cpu: Cpu::new(),
            screen: widgets::Screen::new(),
            halted: false,
        }
    }
}
