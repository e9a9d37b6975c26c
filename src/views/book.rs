use eframe::egui;
use egui::RichText;

use super::{mascot, round_button, ViewCtx, GREEN, LOCKED_GREY, PURPLE, YELLOW};
use crate::catalog;
use crate::progress::UserProgress;
use crate::router::Route;

pub const QUIZ_EVERY: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathItemKind {
    Chapter,
    /// Checkpoint after chapter `number`; `ordinal` counts quizzes from 1.
    Quiz { ordinal: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathItem {
    pub kind: PathItemKind,
    pub number: u32,
    pub completed: bool,
    pub current: bool,
    pub locked: bool,
}

impl PathItem {
    pub fn label(&self) -> String {
        match self.kind {
            PathItemKind::Chapter => format!("Chapter {}", self.number),
            PathItemKind::Quiz { ordinal } => format!("Quiz {}", ordinal),
        }
    }

    pub fn target(&self, book: &str) -> Option<Route> {
        if self.locked {
            return None;
        }
        let book = book.to_string();
        Some(match self.kind {
            PathItemKind::Chapter => Route::Study {
                book,
                chapter: self.number,
                verse: 1,
            },
            PathItemKind::Quiz { .. } => Route::Quiz {
                book,
                chapter_group: self.number,
            },
        })
    }
}

/// Chapters 1..=N with a quiz after every fifth chapter except the last.
pub fn learning_path(book: &str, progress: &UserProgress) -> Vec<PathItem> {
    let total = catalog::chapter_count(book);
    let in_current_book = progress.current_book == book;
    let mut items = Vec::with_capacity(total as usize + total as usize / QUIZ_EVERY as usize);

    for chapter in 1..=total {
        let completed = progress.is_chapter_completed(book, chapter);
        let locked = in_current_book && chapter > progress.current_chapter;
        items.push(PathItem {
            kind: PathItemKind::Chapter,
            number: chapter,
            completed,
            current: in_current_book && chapter == progress.current_chapter,
            locked,
        });
        if chapter % QUIZ_EVERY == 0 && chapter < total {
            items.push(PathItem {
                kind: PathItemKind::Quiz {
                    ordinal: chapter / QUIZ_EVERY,
                },
                number: chapter,
                completed,
                current: false,
                locked,
            });
        }
    }
    items
}

fn item_button(item: &PathItem) -> egui::Button<'static> {
    let (text, fill) = if item.locked {
        ("\u{1F512}".to_string(), LOCKED_GREY)
    } else if item.completed {
        ("\u{1F3C6}".to_string(), GREEN)
    } else if item.current {
        (item.number.to_string(), YELLOW)
    } else {
        match item.kind {
            PathItemKind::Quiz { .. } => ("Q".to_string(), PURPLE),
            PathItemKind::Chapter => (item.number.to_string(), egui::Color32::WHITE),
        }
    };
    round_button(RichText::new(text).size(18.0).strong(), fill)
}

pub fn show(ui: &mut egui::Ui, ctx: &mut ViewCtx<'_>, book: &str) {
    let items = learning_path(book, ctx.state.progress());

    ui.horizontal(|ui| {
        mascot(ui, Some(&format!("Let's study {}!", book)));
        ui.heading(RichText::new(book).size(30.0).strong());
    });
    ui.vertical_centered(|ui| {
        ui.heading("Choose a Chapter");
        ui.label(format!("Continue your journey through {}", book));
    });
    ui.add_space(8.0);

    let mut clicked: Option<Route> = None;
    egui::ScrollArea::vertical()
        .id_source("chapter_path_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (idx, item) in items.iter().enumerate() {
                let layout = if idx % 2 == 0 {
                    egui::Layout::left_to_right(egui::Align::Center)
                } else {
                    egui::Layout::right_to_left(egui::Align::Center)
                };
                ui.with_layout(layout, |ui| {
                    let response = ui.add_enabled(!item.locked, item_button(item));
                    ui.label(RichText::new(item.label()).strong().color(match item.kind {
                        PathItemKind::Quiz { .. } => PURPLE,
                        PathItemKind::Chapter => GREEN,
                    }));
                    if response.clicked() {
                        clicked = item.target(book);
                    }
                });
                ui.add_space(6.0);
            }

            ui.separator();
            ui.heading("Legend");
            egui::Grid::new("chapter_legend").num_columns(2).show(ui, |ui| {
                ui.label(RichText::new("\u{1F4D6}").background_color(egui::Color32::WHITE));
                ui.label("Chapter");
                ui.end_row();
                ui.label(RichText::new("Q").strong().background_color(PURPLE));
                ui.label("Quiz");
                ui.end_row();
                ui.label(RichText::new("\u{1F3C6}").background_color(GREEN));
                ui.label("Completed");
                ui.end_row();
                ui.label(RichText::new("1").strong().background_color(YELLOW));
                ui.label("Current");
                ui.end_row();
            });
        });

    if let Some(route) = clicked {
        ctx.navigate(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz_items(items: &[PathItem]) -> Vec<&PathItem> {
        items
            .iter()
            .filter(|i| matches!(i.kind, PathItemKind::Quiz { .. }))
            .collect()
    }

    #[test]
    fn test_default_book_has_25_chapters_and_4_quizzes() {
        let items = learning_path("Ruth", &UserProgress::new());
        assert_eq!(items.len(), 29);
        let quizzes = quiz_items(&items);
        let groups: Vec<u32> = quizzes.iter().map(|q| q.number).collect();
        assert_eq!(groups, vec![5, 10, 15, 20]);
        assert_eq!(quizzes[3].label(), "Quiz 4");
        assert_eq!(items[5].kind, PathItemKind::Quiz { ordinal: 1 });
        assert_eq!(items.last().map(|i| i.number), Some(25));
    }

    #[test]
    fn test_john_has_no_quiz_after_last_multiple() {
        let items = learning_path("John", &UserProgress::new());
        let groups: Vec<u32> = quiz_items(&items).iter().map(|q| q.number).collect();
        assert_eq!(groups, vec![5, 10, 15, 20]);
        assert_eq!(items.len(), 25);
    }

    #[test]
    fn test_locking_in_current_book() {
        let mut progress = UserProgress::new();
        progress.current_chapter = 3;
        let items = learning_path("Genesis", &progress);

        assert!(!items[0].locked);
        assert!(items[2].current);
        assert!(!items[2].locked);
        assert!(items[3].locked);
        assert_eq!(items[3].target("Genesis"), None);
        assert_eq!(
            items[0].target("Genesis"),
            Some(Route::Study { book: "Genesis".into(), chapter: 1, verse: 1 })
        );
    }

    #[test]
    fn test_other_books_are_open() {
        let progress = UserProgress::new();
        let items = learning_path("Exodus", &progress);
        assert!(items.iter().all(|i| !i.locked && !i.current));
        assert_eq!(items.len(), 47);
        assert_eq!(
            items[5].target("Exodus"),
            Some(Route::Quiz { book: "Exodus".into(), chapter_group: 5 })
        );
    }

    #[test]
    fn test_quiz_inherits_chapter_completion() {
        let mut progress = UserProgress::new();
        progress.current_chapter = 10;
        progress.mark_verse_completed("Genesis", 5, 2);
        let items = learning_path("Genesis", &progress);
        assert!(items[4].completed);
        assert!(items[5].completed);
        assert!(!items[11].completed);
    }
}
