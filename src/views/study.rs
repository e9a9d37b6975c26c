use eframe::egui;
use egui::{Color32, RichText};
use rand::Rng;

use super::{mascot, ViewCtx, BLUE, GREEN};
use crate::annotations::{HighlightColor, VerseKey};
use crate::chat::{ChatSession, Speaker};
use crate::content;
use crate::progress::VERSE_XP;
use crate::router::Route;
use crate::storage::AppState;

/// Verses shown on the header progress bar before it reads full.
const PROGRESS_BAR_VERSES: f32 = 10.0;

#[derive(Debug, Clone)]
pub struct StudyView {
    book: String,
    chapter: u32,
    verse: u32,
    note_draft: String,
    note_open: bool,
    chat: ChatSession,
    chat_input: String,
    chat_open: bool,
    highlight_choice: HighlightColor,
}

impl StudyView {
    pub fn new(book: &str, chapter: u32, verse: u32, state: &AppState) -> Self {
        let mut view = StudyView {
            book: book.to_string(),
            chapter,
            verse,
            note_draft: String::new(),
            note_open: false,
            chat: ChatSession::new(),
            chat_input: String::new(),
            chat_open: false,
            highlight_choice: HighlightColor::default(),
        };
        view.reload_note(state);
        view
    }

    pub fn book(&self) -> &str {
        &self.book
    }

    pub fn chapter(&self) -> u32 {
        self.chapter
    }

    pub fn verse(&self) -> u32 {
        self.verse
    }

    pub fn key(&self) -> VerseKey {
        VerseKey::new(&self.book, self.chapter, self.verse)
    }

    pub fn route(&self) -> Route {
        Route::Study {
            book: self.book.clone(),
            chapter: self.chapter,
            verse: self.verse,
        }
    }

    pub fn text(&self) -> String {
        content::verse_text(&self.book, self.chapter, self.verse)
    }

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    pub fn note_draft(&self) -> &str {
        &self.note_draft
    }

    pub fn set_note_draft(&mut self, text: &str) {
        self.note_draft = text.to_string();
    }

    fn reload_note(&mut self, state: &AppState) {
        self.note_draft = state.notes().get(&self.key()).unwrap_or_default().to_string();
    }

    /// Moves to another verse of the same chapter, keeping the chat panel.
    pub fn set_verse(&mut self, verse: u32, state: &AppState) {
        if verse != self.verse {
            self.verse = verse;
            self.reload_note(state);
        }
    }

    /// Whether `route` is a verse of the chapter this view is showing.
    pub fn shows_chapter_of(&self, route: &Route) -> bool {
        matches!(route, Route::Study { book, chapter, .. } if *book == self.book && *chapter == self.chapter)
    }

    /// Stays on the last representable verse instead of wrapping.
    pub fn next(&mut self, state: &AppState) -> Route {
        self.set_verse(self.verse.saturating_add(1), state);
        self.route()
    }

    /// No-op at verse 1.
    pub fn prev(&mut self, state: &AppState) -> Option<Route> {
        if self.verse <= 1 {
            return None;
        }
        self.set_verse(self.verse - 1, state);
        Some(self.route())
    }

    pub fn save_note(&mut self, state: &mut AppState) {
        let key = self.key();
        let text = self.note_draft.clone();
        state.update_notes(|notes| notes.save(&key, &text));
        self.reload_note(state);
        self.note_open = false;
    }

    pub fn select_highlight(&mut self, color: HighlightColor) {
        self.highlight_choice = color;
    }

    pub fn toggle_highlight(&mut self, state: &mut AppState) -> Option<HighlightColor> {
        let key = self.key();
        let color = self.highlight_choice;
        state.update_highlights(|hl| hl.toggle(&key, color))
    }

    pub fn is_completed(&self, state: &AppState) -> bool {
        state
            .progress()
            .is_verse_completed(&self.book, self.chapter, self.verse)
    }

    pub fn finish(&mut self, state: &mut AppState) -> bool {
        let (book, chapter, verse) = (self.book.clone(), self.chapter, self.verse);
        state.update_progress(|p| p.mark_verse_completed(&book, chapter, verse))
    }

    pub fn send_chat<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let text = std::mem::take(&mut self.chat_input);
        let sent = self.chat.send(&text, rng);
        if !sent {
            self.chat_input = text;
        }
        sent
    }

    pub fn set_chat_input(&mut self, text: &str) {
        self.chat_input = text.to_string();
    }

    pub fn progress_fraction(&self) -> f32 {
        (self.verse as f32 / PROGRESS_BAR_VERSES).min(1.0)
    }

    pub fn show(&mut self, ui: &mut egui::Ui, ctx: &mut ViewCtx<'_>) {
        let key = self.key();
        let completed = self.is_completed(ctx.state);
        let highlight = ctx.state.highlights().get(&key);
        let note = ctx.state.notes().get(&key).map(str::to_string);

        ui.horizontal(|ui| {
            if ui.button("\u{2190} Chapters").clicked() {
                ctx.navigate(Route::Book { book: self.book.clone() });
            }
            ui.vertical(|ui| {
                ui.heading(format!("{} {}:{}", self.book, self.chapter, self.verse));
                ui.add(egui::ProgressBar::new(self.progress_fraction()).desired_width(200.0));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let xp = if completed { VERSE_XP } else { 0 };
                ui.label(format!("+{} XP", xp));
            });
        });
        ui.separator();

        let (stroke, fill) = match highlight {
            Some(c) => {
                let [r, g, b] = c.rgb();
                (Color32::from_rgb(r, g, b), Color32::from_rgba_unmultiplied(r, g, b, 40))
            }
            None => (GREEN, Color32::TRANSPARENT),
        };
        egui::Frame::group(ui.style())
            .stroke(egui::Stroke::new(4.0, stroke))
            .fill(fill)
            .inner_margin(24.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(format!("{} {}:{}", self.book, self.chapter, self.verse)).weak());
                    ui.add_space(8.0);
                    ui.label(RichText::new(format!("\"{}\"", self.text())).size(22.0).italics());
                });
                if let Some(text) = &note {
                    ui.add_space(8.0);
                    ui.separator();
                    ui.label(RichText::new("Your Note").strong());
                    ui.label(text);
                }
            });
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            for color in HighlightColor::PALETTE {
                let [r, g, b] = color.rgb();
                let chosen = self.highlight_choice == color;
                let swatch = egui::Button::new(if chosen { "\u{2713}" } else { " " })
                    .fill(Color32::from_rgb(r, g, b))
                    .min_size(egui::vec2(24.0, 24.0));
                if ui.add(swatch).on_hover_text(color.name()).clicked() {
                    self.select_highlight(color);
                }
            }
            if ui.button("Highlight").clicked() {
                self.toggle_highlight(ctx.state);
            }
            if ui.button("Note").clicked() {
                self.reload_note(ctx.state);
                self.note_open = true;
            }
            if ui.button("Chat").clicked() {
                self.chat_open = true;
            }
            let finish_label = if completed { "Complete!" } else { "Finish" };
            let finish = egui::Button::new(RichText::new(finish_label).color(Color32::WHITE)).fill(GREEN);
            if ui.add_enabled(!completed, finish).clicked() {
                self.finish(ctx.state);
            }
        });
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            if ui.add_enabled(self.verse > 1, egui::Button::new("\u{2190} Previous")).clicked() {
                if let Some(route) = self.prev(ctx.state) {
                    ctx.navigate(route);
                }
            }
            let message = if completed { "Great job! Keep going!" } else { "You're doing amazing!" };
            mascot(ui, Some(message));
            if ui.button("Next \u{2192}").clicked() {
                let route = self.next(ctx.state);
                ctx.navigate(route);
            }
        });

        self.show_note_window(ui.ctx(), ctx);
        self.show_chat_window(ui.ctx());
    }

    fn show_note_window(&mut self, egui_ctx: &egui::Context, ctx: &mut ViewCtx<'_>) {
        if !self.note_open {
            return;
        }
        let mut open = true;
        let mut save = false;
        let mut cancel = false;
        egui::Window::new(format!("Note: {} {}:{}", self.book, self.chapter, self.verse))
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(egui_ctx, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.note_draft)
                        .hint_text("Write your thoughts about this verse...")
                        .desired_rows(6)
                        .desired_width(f32::INFINITY),
                );
                ui.horizontal(|ui| {
                    cancel = ui.button("Cancel").clicked();
                    save = ui.button("Save Note").clicked();
                });
            });
        if save {
            self.save_note(ctx.state);
        } else if cancel || !open {
            self.reload_note(ctx.state);
            self.note_open = false;
        }
    }

    fn show_chat_window(&mut self, egui_ctx: &egui::Context) {
        if !self.chat_open {
            return;
        }
        let mut open = true;
        let mut send = false;
        egui::Window::new("Chat with Sheep")
            .collapsible(false)
            .default_width(420.0)
            .open(&mut open)
            .show(egui_ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_source("chat_scroll")
                    .max_height(300.0)
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if self.chat.messages().is_empty() {
                            ui.label(RichText::new("Ask me anything about this verse!").weak());
                        }
                        for msg in self.chat.messages() {
                            match msg.speaker {
                                Speaker::User => {
                                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                                        ui.label(RichText::new(&msg.text).color(BLUE));
                                    });
                                }
                                Speaker::Sheep => {
                                    ui.label(RichText::new(&msg.text).color(GREEN));
                                }
                            }
                        }
                    });
                ui.separator();
                ui.horizontal(|ui| {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.chat_input).hint_text("Ask about this verse..."),
                    );
                    let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    send = ui.button("Send").clicked() || enter;
                });
            });
        if send {
            self.send_chat(&mut rand::thread_rng());
        }
        if !open {
            self.chat_open = false;
        }
    }
}
