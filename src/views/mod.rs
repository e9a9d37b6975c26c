//! The five routed views plus the start-up splash.
//!
//! Each view module holds a small model (plain Rust, unit-tested) and an
//! egui `show` function that renders it against the shared `AppState`.

pub mod book;
pub mod home;
pub mod profile;
pub mod quiz;
pub mod splash;
pub mod study;

use eframe::egui;
use egui::{Color32, RichText};
use std::time::Duration;

use crate::config::Config;
use crate::router::Route;
use crate::storage::AppState;
use crate::timers::Timers;

/// Events delivered by the timer set of the active view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    SplashDone,
    QuizAdvance,
    QuizRedirect,
}

/// Everything a view may touch during one frame.
pub struct ViewCtx<'a> {
    pub state: &'a mut AppState,
    pub config: &'a Config,
    pub timers: &'a mut Timers<TimerEvent>,
    pub now: f64,
    navigate_to: Option<Route>,
}

impl<'a> ViewCtx<'a> {
    pub fn new(
        state: &'a mut AppState,
        config: &'a Config,
        timers: &'a mut Timers<TimerEvent>,
        now: f64,
    ) -> Self {
        ViewCtx {
            state,
            config,
            timers,
            now,
            navigate_to: None,
        }
    }

    pub fn navigate(&mut self, route: Route) {
        self.navigate_to = Some(route);
    }

    pub fn schedule(&mut self, delay: Duration, event: TimerEvent) {
        self.timers.schedule(self.now, delay, event);
    }

    pub fn take_navigation(&mut self) -> Option<Route> {
        self.navigate_to.take()
    }
}

pub const GREEN: Color32 = Color32::from_rgb(34, 197, 94);
pub const YELLOW: Color32 = Color32::from_rgb(250, 204, 21);
pub const PURPLE: Color32 = Color32::from_rgb(168, 85, 247);
pub const ORANGE: Color32 = Color32::from_rgb(249, 115, 22);
pub const BLUE: Color32 = Color32::from_rgb(59, 130, 246);
pub const RED: Color32 = Color32::from_rgb(220, 38, 38);
pub const LOCKED_GREY: Color32 = Color32::from_rgb(209, 213, 219);

/// The mascot with an optional speech bubble.
pub fn mascot(ui: &mut egui::Ui, message: Option<&str>) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("\u{1F411}").size(40.0));
        if let Some(text) = message {
            egui::Frame::group(ui.style())
                .stroke(egui::Stroke::new(2.0, GREEN))
                .show(ui, |ui| {
                    ui.label(text);
                });
        }
    });
}

pub fn stat_card(ui: &mut egui::Ui, title: &str, value: String, color: Color32) {
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(2.0, color))
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(title).strong());
                ui.label(RichText::new(value).size(24.0).strong().color(color));
            });
        });
}

pub fn round_button(label: RichText, fill: Color32) -> egui::Button<'static> {
    egui::Button::new(label)
        .fill(fill)
        .min_size(egui::vec2(64.0, 64.0))
}
