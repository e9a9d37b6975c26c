use eframe::egui;
use egui::{Color32, RichText};

use super::{mascot, TimerEvent, ViewCtx, BLUE, GREEN, ORANGE, PURPLE, RED};
use crate::progress::QUIZ_XP;
use crate::quiz::{QuizPhase, QuizSession};
use crate::router::Route;

#[derive(Debug, Clone)]
pub struct QuizView {
    session: QuizSession,
    leaving: bool,
}

impl QuizView {
    pub fn new(book: &str, chapter_group: u32) -> Self {
        QuizView {
            session: QuizSession::new(book, chapter_group),
            leaving: false,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn title(&self) -> String {
        format!("{} Quiz", self.session.book())
    }

    /// Range of chapters the quiz covers, ending at the chapter group.
    pub fn subtitle(&self) -> String {
        let end = i64::from(self.session.chapter_group());
        format!("Chapters {}-{}", end - 4, end)
    }

    pub fn book_route(&self) -> Route {
        Route::Book {
            book: self.session.book().to_string(),
        }
    }

    /// Locks in the answer and schedules the move past the explanation panel.
    pub fn submit(&mut self, ctx: &mut ViewCtx<'_>) {
        if self.session.submit().is_some() {
            let delay = ctx.config.quiz_reveal_delay();
            ctx.schedule(delay, TimerEvent::QuizAdvance);
        }
    }

    /// Applies the result once and schedules the return to the chapter path.
    pub fn continue_learning(&mut self, ctx: &mut ViewCtx<'_>) {
        if self.leaving {
            return;
        }
        let session = &mut self.session;
        if ctx.state.update_progress(|p| session.finalize(p)).is_some() {
            self.leaving = true;
            let delay = ctx.config.quiz_redirect_delay();
            ctx.schedule(delay, TimerEvent::QuizRedirect);
        }
    }

    pub fn on_timer(&mut self, event: TimerEvent, ctx: &mut ViewCtx<'_>) {
        match event {
            TimerEvent::QuizAdvance => self.session.advance(),
            TimerEvent::QuizRedirect => ctx.navigate(self.book_route()),
            TimerEvent::SplashDone => {}
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, ctx: &mut ViewCtx<'_>) {
        match self.session.phase() {
            QuizPhase::Completed => self.show_results(ui, ctx),
            phase => {
                ui.horizontal(|ui| {
                    if ui.button("\u{2190} Back").clicked() {
                        ctx.navigate(self.book_route());
                    }
                    mascot(ui, Some("Time for a quiz!"));
                    ui.vertical(|ui| {
                        ui.heading(RichText::new(self.title()).strong());
                        ui.label(self.subtitle());
                        let n = self.session.question_index() + 1;
                        let total = self.session.question_count();
                        ui.add(egui::ProgressBar::new(n as f32 / total as f32).desired_width(240.0));
                        ui.label(format!("Question {}/{}", n, total));
                    });
                });
                ui.separator();
                match phase {
                    QuizPhase::Revealing { correct } => self.show_reveal(ui, correct),
                    _ => self.show_question(ui, ctx),
                }
            }
        }
    }

    fn show_question(&mut self, ui: &mut egui::Ui, ctx: &mut ViewCtx<'_>) {
        let question = self.session.current_question().clone();
        ui.heading(RichText::new(&question.question).size(22.0));
        ui.add_space(12.0);
        for (idx, option) in question.options.iter().enumerate() {
            let selected = self.session.selected() == Some(idx);
            let text = RichText::new(*option).size(16.0);
            let text = if selected { text.color(PURPLE).strong() } else { text };
            if ui.add_sized([ui.available_width(), 40.0], egui::SelectableLabel::new(selected, text)).clicked() {
                self.session.select(idx);
            }
        }
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            let label = if self.session.is_last_question() { "Finish Quiz" } else { "Next Question" };
            let button = egui::Button::new(RichText::new(label).color(Color32::WHITE)).fill(PURPLE);
            if ui.add_enabled(self.session.selected().is_some(), button).clicked() {
                self.submit(ctx);
            }
        });
    }

    fn show_reveal(&self, ui: &mut egui::Ui, correct: bool) {
        ui.vertical_centered(|ui| {
            if correct {
                ui.label(RichText::new("\u{2705}").size(48.0));
                ui.heading(RichText::new("Correct!").color(GREEN));
            } else {
                ui.label(RichText::new("\u{274C}").size(48.0));
                ui.heading(RichText::new("Not quite right").color(RED));
            }
            egui::Frame::group(ui.style())
                .stroke(egui::Stroke::new(2.0, BLUE))
                .show(ui, |ui| {
                    ui.label(format!("Explanation: {}", self.session.current_question().explanation));
                });
        });
    }

    fn show_results(&mut self, ui: &mut egui::Ui, ctx: &mut ViewCtx<'_>) {
        let passed = self.session.passed();
        ui.vertical_centered(|ui| {
            let message = if passed { "Great job! You passed!" } else { "Don't worry, try again!" };
            mascot(ui, Some(message));
            let title = if passed { "Quiz Passed! \u{1F389}" } else { "Keep Studying! \u{1F4DA}" };
            ui.heading(RichText::new(title).size(28.0));
            ui.label(format!(
                "You scored {} out of {}",
                self.session.score(),
                self.session.question_count()
            ));
            if passed {
                ui.label(RichText::new(format!("+{} XP", QUIZ_XP)).strong().color(BLUE));
            }
            ui.add_space(12.0);
            let fill = if passed { GREEN } else { ORANGE };
            let button = egui::Button::new(RichText::new("Continue Learning").color(Color32::WHITE)).fill(fill);
            if ui.add_enabled(!self.leaving, button).clicked() {
                self.continue_learning(ctx);
            }
        });
    }
}
