use eframe::egui;
use egui::RichText;

use super::{mascot, stat_card, ViewCtx, BLUE, GREEN, ORANGE, PURPLE, YELLOW};
use crate::progress::{achievements, Achievement, UserProgress};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSummary {
    pub streak: u32,
    pub total_xp: u32,
    pub books_started: usize,
    pub verses_studied: usize,
    pub achievements: [Achievement; 4],
}

pub fn summary(progress: &UserProgress) -> ProfileSummary {
    ProfileSummary {
        streak: progress.streak,
        total_xp: progress.total_xp,
        books_started: progress.books_started(),
        verses_studied: progress.verses_completed(),
        achievements: achievements(progress),
    }
}

pub fn show(ui: &mut egui::Ui, ctx: &mut ViewCtx<'_>) {
    let s = summary(ctx.state.progress());

    ui.vertical_centered(|ui| {
        ui.heading(RichText::new("Your Profile").size(28.0).strong());
        mascot(ui, Some("You're doing great!"));
    });
    ui.add_space(12.0);

    ui.horizontal_wrapped(|ui| {
        stat_card(ui, "Day Streak", s.streak.to_string(), ORANGE);
        stat_card(ui, "Total XP", s.total_xp.to_string(), BLUE);
        stat_card(ui, "Books Started", s.books_started.to_string(), GREEN);
        stat_card(ui, "Verses Studied", s.verses_studied.to_string(), PURPLE);
    });
    ui.add_space(16.0);

    ui.heading("Achievements");
    egui::Grid::new("achievements_grid").num_columns(2).spacing([24.0, 12.0]).show(ui, |ui| {
        for (i, a) in s.achievements.iter().enumerate() {
            let (icon, color) = if a.unlocked {
                ("\u{1F3C6}", YELLOW)
            } else {
                ("\u{1F512}", egui::Color32::GRAY)
            };
            ui.vertical(|ui| {
                ui.label(RichText::new(format!("{} {}", icon, a.name)).strong().color(color));
                ui.label(RichText::new(a.description).color(color));
            });
            if i % 2 == 1 {
                ui.end_row();
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let mut progress = UserProgress::new();
        progress.streak = 3;
        progress.mark_verse_completed("Genesis", 1, 1);
        progress.mark_verse_completed("John", 3, 16);
        progress.mark_verse_completed("John", 3, 17);

        let s = summary(&progress);
        assert_eq!(s.total_xp, 30);
        assert_eq!(s.books_started, 2);
        assert_eq!(s.verses_studied, 3);
        let unlocked: Vec<&str> = s.achievements.iter().filter(|a| a.unlocked).map(|a| a.name).collect();
        assert_eq!(unlocked, vec!["First Steps", "Dedicated"]);
    }
}
