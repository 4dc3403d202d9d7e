// SPDX-License-Identifier: MPL-2.0
//! Demo application wiring the overlay registry into an Iced program.
//!
//! The app owns the [`OverlayRegistry`] and translates Iced events into
//! controller commands: buttons open the overlays, raw pointer events feed
//! the pan gesture stream, Escape stands in for the hardware back button,
//! and a frame timer drives `tick` while anything is in flight.

use crate::config::{self, Config};
use crate::overlay::{
    AlertRequest, MenuItem, MenuRequest, OverlayRegistry, PanSample, ToastRequest, ToastTone, Tone,
};
use crate::ui::theme::Palette;
use crate::ui::{alert_view, menu_view, toast_view};
use iced::widget::{button, column, container, text, Column, Stack};
use iced::{event, keyboard, mouse, time, Element, Length, Point, Subscription, Theme};
use std::cell::RefCell;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Use the dark palette.
    pub dark: bool,
    /// Optional path to a `settings.toml` overriding the default location.
    pub config_path: Option<PathBuf>,
}

/// Tracks one pointer drag and estimates its release velocity.
#[derive(Debug, Clone, Copy)]
struct DragTracker {
    start_y: f32,
    last_y: f32,
    last_at: Instant,
    velocity_y: f32,
}

impl DragTracker {
    fn begin(y: f32) -> Self {
        Self {
            start_y: y,
            last_y: y,
            last_at: Instant::now(),
            velocity_y: 0.0,
        }
    }

    fn sample(&mut self, y: f32) -> PanSample {
        let now = Instant::now();
        let dt = now.duration_since(self.last_at).as_secs_f32();
        if dt > 0.0 {
            self.velocity_y = (y - self.last_y) / dt;
        }
        self.last_y = y;
        self.last_at = now;
        PanSample::active(y - self.start_y)
    }

    fn release(&self, y: f32) -> PanSample {
        PanSample::end(y - self.start_y, self.velocity_y)
    }
}

/// Root demo state: the registry, the palette, and a small event log.
pub struct App {
    registry: OverlayRegistry,
    palette: Palette,
    events: Rc<RefCell<Vec<String>>>,
    last_tick: Option<Instant>,
    drag: Option<DragTracker>,
    cursor_y: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("any_presented", &self.registry.any_presented())
            .field("events", &self.events.borrow().len())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic frame tick while overlays are active.
    Tick(Instant),
    OpenMenu,
    OpenAlert,
    OpenToast,
    Menu(menu_view::Message),
    Alert(alert_view::Message),
    /// Escape key, standing in for the hardware back button.
    BackPressed,
    PointerPressed,
    PointerMoved(Point),
    PointerReleased,
}

impl App {
    #[must_use]
    pub fn new(flags: Flags) -> Self {
        let config = match &flags.config_path {
            Some(path) => config::load_from_path(path).unwrap_or_default(),
            None => config::load().unwrap_or_default(),
        };
        Self::with_config(&config, flags.dark)
    }

    #[must_use]
    pub fn with_config(config: &Config, dark: bool) -> Self {
        Self {
            registry: OverlayRegistry::from_config(config),
            palette: if dark {
                Palette::dark()
            } else {
                Palette::light()
            },
            events: Rc::new(RefCell::new(Vec::new())),
            last_tick: None,
            drag: None,
            cursor_y: 0.0,
        }
    }

    fn log(events: &Rc<RefCell<Vec<String>>>, entry: impl Into<String>) {
        events.borrow_mut().push(entry.into());
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tick(now) => {
                let dt_ms = self
                    .last_tick
                    .map(|last| now.duration_since(last).as_secs_f32() * 1000.0)
                    .unwrap_or(0.0);
                self.last_tick = Some(now);
                self.registry.tick(dt_ms);
                if !self.registry.is_active() {
                    self.last_tick = None;
                }
            }
            Message::OpenMenu => {
                let events = Rc::clone(&self.events);
                self.registry.menu_mut().open_menu(
                    MenuRequest::new(vec![
                        MenuItem::new("Share"),
                        MenuItem::new("Duplicate").with_tone(Tone::Primary),
                        MenuItem::new("Delete").with_tone(Tone::Error),
                    ])
                    .on_select(move |item, index| {
                        Self::log(&events, format!("menu: {} ({index})", item.title));
                    }),
                );
            }
            Message::OpenAlert => {
                let confirmed = Rc::clone(&self.events);
                let cancelled = Rc::clone(&self.events);
                self.registry.alert_mut().show(
                    AlertRequest::new("Delete item?")
                        .description("This cannot be undone")
                        .on_confirm(move || Self::log(&confirmed, "alert: confirmed"))
                        .on_cancel(move || Self::log(&cancelled, "alert: cancelled")),
                );
                let height =
                    alert_view::estimated_sheet_height(self.registry.alert().content());
                self.registry.alert_mut().set_sheet_height(height);
            }
            Message::OpenToast => {
                let events = Rc::clone(&self.events);
                self.registry.toast_mut().show(
                    ToastRequest::new("Saved")
                        .tone(ToastTone::Success)
                        .on_done(move || Self::log(&events, "toast: done")),
                );
            }
            Message::Menu(menu_view::Message::Select(index)) => {
                self.registry.menu_mut().select(index);
            }
            Message::Menu(menu_view::Message::Backdrop) => {
                self.registry.menu_mut().dismiss();
            }
            Message::Alert(alert_view::Message::Confirm) => {
                self.registry.alert_mut().confirm();
            }
            Message::Alert(alert_view::Message::Cancel) => {
                self.registry.alert_mut().cancel();
            }
            Message::Alert(alert_view::Message::Backdrop) => {
                self.registry.alert_mut().cancel();
            }
            Message::BackPressed => {
                self.registry.back_pressed();
            }
            Message::PointerPressed => {
                if self.registry.menu().is_visible() || self.registry.alert().is_visible() {
                    self.drag = Some(DragTracker::begin(self.cursor_y));
                }
            }
            Message::PointerMoved(point) => {
                self.cursor_y = point.y;
                if let Some(drag) = &mut self.drag {
                    let sample = drag.sample(point.y);
                    self.registry.menu_mut().pan(sample);
                    self.registry.alert_mut().pan(sample);
                }
            }
            Message::PointerReleased => {
                if let Some(drag) = self.drag.take() {
                    let sample = drag.release(self.cursor_y);
                    self.registry.menu_mut().pan(sample);
                    self.registry.alert_mut().pan(sample);
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut log = Column::new().spacing(4);
        for entry in self.events.borrow().iter().rev().take(8) {
            log = log.push(text(entry.clone()).size(13));
        }

        let base = container(
            column![
                button(text("Open menu")).on_press(Message::OpenMenu),
                button(text("Open alert")).on_press(Message::OpenAlert),
                button(text("Show toast")).on_press(Message::OpenToast),
                log,
            ]
            .spacing(12)
            .padding(24),
        )
        .width(Length::Fill)
        .height(Length::Fill);

        let mut stack = Stack::new().push(base);
        if let Some(element) =
            menu_view::view(self.registry.menu(), &self.palette).map(|element| element.map(Message::Menu))
        {
            stack = stack.push(element);
        }
        if let Some(element) = alert_view::view(self.registry.alert(), &self.palette)
            .map(|element| element.map(Message::Alert))
        {
            stack = stack.push(element);
        }
        if let Some(element) = toast_view::view(self.registry.toast(), &self.palette) {
            stack = stack.push(element);
        }
        stack.into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let events = event::listen_with(|event, _status, _window| match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::BackPressed),
            event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                Some(Message::PointerPressed)
            }
            event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Some(Message::PointerMoved(position))
            }
            event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                Some(Message::PointerReleased)
            }
            _ => None,
        });

        if self.registry.is_active() {
            Subscription::batch([
                events,
                time::every(Duration::from_millis(16)).map(Message::Tick),
            ])
        } else {
            events
        }
    }

    pub fn theme(&self) -> Theme {
        <Theme as iced::theme::Base>::default(iced::theme::Mode::default())
    }
}
