use eframe::egui;
use egui::RichText;

use super::{mascot, round_button, stat_card, ViewCtx, BLUE, GREEN, LOCKED_GREY, ORANGE, YELLOW};
use crate::catalog;
use crate::progress::UserProgress;
use crate::router::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookState {
    Locked,
    Completed,
    Current,
    Available,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookTile {
    pub name: &'static str,
    pub state: BookState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRow {
    pub tiles: Vec<BookTile>,
    /// Odd rows run right to left so the path snakes down the page.
    pub reversed: bool,
}

pub fn book_state(book: &str, progress: &UserProgress) -> BookState {
    if catalog::is_book_locked(book, &progress.current_book) {
        BookState::Locked
    } else if progress.is_book_completed(book) {
        BookState::Completed
    } else if progress.current_book == book {
        BookState::Current
    } else {
        BookState::Available
    }
}

pub fn book_rows(progress: &UserProgress) -> Vec<BookRow> {
    catalog::book_rows()
        .into_iter()
        .enumerate()
        .map(|(i, row)| BookRow {
            tiles: row
                .iter()
                .map(|name| BookTile {
                    name: *name,
                    state: book_state(name, progress),
                })
                .collect(),
            reversed: i % 2 == 1,
        })
        .collect()
}

/// Where a click on the tile leads, if anywhere.
pub fn click_target(tile: &BookTile) -> Option<Route> {
    match tile.state {
        BookState::Locked => None,
        _ => Some(Route::Book {
            book: tile.name.to_string(),
        }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeStats {
    pub books_read: usize,
    pub verses_studied: usize,
    pub streak: u32,
}

pub fn home_stats(progress: &UserProgress) -> HomeStats {
    HomeStats {
        books_read: progress.books_started(),
        verses_studied: progress.verses_completed(),
        streak: progress.streak,
    }
}

fn tile_button(tile: &BookTile) -> egui::Button<'static> {
    let (label, fill) = match tile.state {
        BookState::Locked => ("\u{1F512}", LOCKED_GREY),
        BookState::Completed => ("\u{1F3C6}", GREEN),
        BookState::Current => ("\u{1F4D6}", YELLOW),
        BookState::Available => ("\u{1F4D6}", egui::Color32::WHITE),
    };
    round_button(RichText::new(label).size(22.0), fill)
}

pub fn show(ui: &mut egui::Ui, ctx: &mut ViewCtx<'_>) {
    let progress = ctx.state.progress().clone();

    ui.vertical_centered(|ui| {
        ui.heading(RichText::new("Your Bible Journey").size(28.0).strong());
        ui.label("Choose a book to continue your study");
    });
    ui.add_space(12.0);

    let mut clicked: Option<Route> = None;
    egui::ScrollArea::vertical()
        .id_source("home_path_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for row in book_rows(&progress) {
                ui.vertical_centered(|ui| {
                    ui.horizontal(|ui| {
                        let tiles: Vec<&BookTile> = if row.reversed {
                            row.tiles.iter().rev().collect()
                        } else {
                            row.tiles.iter().collect()
                        };
                        for tile in tiles {
                            let enabled = tile.state != BookState::Locked;
                            let response = ui
                                .add_enabled(enabled, tile_button(tile))
                                .on_hover_text(tile.name)
                                .on_disabled_hover_text(tile.name);
                            if response.clicked() {
                                clicked = click_target(tile);
                            }
                        }
                    });
                });
                ui.add_space(16.0);
            }

            let stats = home_stats(&progress);
            ui.separator();
            ui.horizontal(|ui| {
                stat_card(ui, "Books Read", stats.books_read.to_string(), GREEN);
                stat_card(ui, "Verses Studied", stats.verses_studied.to_string(), BLUE);
                stat_card(ui, "Current Streak", format!("{} days", stats.streak), ORANGE);
            });
            ui.add_space(8.0);
            mascot(ui, None);
        });

    if let Some(route) = clicked {
        ctx.navigate(route);
    }
}
