// SPDX-License-Identifier: MPL-2.0
//! Sample application presenting banners.
//!
//! A single screen with a "Send" button. Each press creates a fresh banner,
//! shows it and hands it to the [`PendingHolder`]; the app itself only keeps
//! weak references for drawing. The delegate logs taps and releases the
//! holder's banner once it completes. A second button toggles the alert sound
//! and persists the choice to `settings.toml`.

mod message;
pub mod paths;

pub use message::{Flags, Message};

use crate::banner::{Banner, BannerDelegate, BannerHandle};
use crate::config::{self, Config};
use crate::holder::PendingHolder;
use crate::runtime::EventLoop;
use crate::sound::{self, AlertSound};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{banner_card, Gesture, Recognizer};
use iced::widget::{button, Column, Container, Stack, Text};
use iced::{alignment, time, window, Element, Length, Subscription, Task};
use std::cell::RefCell;
use std::fmt;
use std::path::PathBuf;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: f32 = 400.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 700.0;

/// Animation frame interval while banners are active.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

const SAMPLE_TITLE: &str = "TESTS";
const SAMPLE_MESSAGE: &str = "Test content";

/// Delegate of every banner sent from the sample screen.
struct SampleDelegate {
    holder: PendingHolder,
}

impl BannerDelegate for SampleDelegate {
    fn on_tap(&self) {
        tracing::info!("banner tapped");
    }

    fn on_complete(&self) {
        tracing::info!("banner completed");
        self.holder.clean();
    }
}

/// Root state of the sample application.
pub struct App {
    event_loop: EventLoop,
    holder: PendingHolder,
    delegate: Rc<SampleDelegate>,
    sound: Rc<dyn AlertSound>,
    config: Config,
    /// Config directory override; `None` resolves it through [`paths`].
    config_dir: Option<PathBuf>,
    /// Banners that may still be on screen, oldest first.
    banners: Vec<Weak<RefCell<Banner>>>,
    gesture: Recognizer,
    started: Instant,
    window_width: f32,
    sent: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("event_loop", &self.event_loop)
            .field("holder", &self.holder)
            .field("sent", &self.sent)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires an Fn boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);
        let (config, warning) = config::load();
        if let Some(warning) = warning {
            tracing::warn!(%warning, "using default settings");
        }

        let holder = PendingHolder::new();
        let app = Self {
            event_loop: EventLoop::new(),
            delegate: Rc::new(SampleDelegate {
                holder: holder.clone(),
            }),
            holder,
            sound: sound::player_from_config(&config.sound),
            config,
            config_dir: None,
            banners: Vec::new(),
            gesture: Recognizer::new(),
            started: Instant::now(),
            window_width: WINDOW_DEFAULT_WIDTH,
            sent: 0,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Iced Banner")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Send => self.send(),
            Message::ToggleSound => self.toggle_sound(),
            Message::Tick(instant) => {
                self.event_loop
                    .advance_to(instant.saturating_duration_since(self.started));
                self.banners.retain(|banner| banner.strong_count() > 0);
            }
            Message::Banner(interaction) => {
                let Some(banner) = self.topmost() else {
                    self.gesture.reset();
                    return Task::none();
                };
                match self.gesture.update(interaction) {
                    Some(Gesture::Tap) => self.event_loop.tap(&banner),
                    Some(Gesture::SwipeUp) => self.event_loop.swipe_up(&banner),
                    None => {}
                }
            }
            Message::WindowResized(size) => {
                self.window_width = size.width;
                for banner in self.live_banners() {
                    banner.borrow_mut().resize(size.width);
                }
            }
        }
        Task::none()
    }

    fn send(&mut self) {
        // Catch the clock up before scheduling anything relative to it.
        self.event_loop.advance_to(self.started.elapsed());

        let banner = Banner::new(self.window_width, Rc::clone(&self.sound));
        banner.borrow_mut().subscribe(self.delegate.clone());
        self.event_loop.show(&banner, SAMPLE_TITLE, SAMPLE_MESSAGE);
        self.holder.push(&mut self.event_loop, Rc::clone(&banner));

        self.banners.push(Rc::downgrade(&banner));
        self.sent += 1;
    }

    fn toggle_sound(&mut self) {
        let enabled = !self.config.sound.is_enabled();
        self.config.sound.enabled = Some(enabled);
        self.sound = sound::player_from_config(&self.config.sound);
        tracing::info!(enabled, "alert sound toggled");

        if let Err(err) = config::save_with_override(&self.config, self.config_dir.clone()) {
            tracing::warn!(%err, "failed to save settings");
        }
    }

    fn live_banners(&self) -> impl Iterator<Item = BannerHandle> + '_ {
        self.banners.iter().filter_map(Weak::upgrade)
    }

    /// Newest banner currently drawn.
    fn topmost(&self) -> Option<BannerHandle> {
        self.banners
            .iter()
            .rev()
            .filter_map(Weak::upgrade)
            .find(|banner| !banner.borrow().is_hidden())
    }

    fn view(&self) -> Element<'_, Message> {
        let status = format!("Sent: {}   Pending: {}", self.sent, self.holder.len());
        let sound_label = if self.config.sound.is_enabled() {
            "Sound: on"
        } else {
            "Sound: off"
        };

        let screen = Container::new(
            Column::new()
                .spacing(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .push(button(Text::new("Send").size(typography::TITLE)).on_press(Message::Send))
                .push(
                    button(Text::new(sound_label).size(typography::BODY))
                        .on_press(Message::ToggleSound),
                )
                .push(Text::new(status).size(typography::CAPTION)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

        let now = self.event_loop.now();
        let mut stack = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(screen);
        for banner in self.live_banners() {
            let card = banner_card::view(&banner.borrow(), now);
            stack = stack.push(card.map(Message::Banner));
        }
        stack.into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let resize = window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        let animating = !self.event_loop.is_idle()
            || self
                .live_banners()
                .any(|banner| banner.borrow().is_showing());

        if animating {
            Subscription::batch([resize, time::every(FRAME_INTERVAL).map(Message::Tick)])
        } else {
            resize
        }
    }
}
