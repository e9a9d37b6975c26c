use eframe::egui;
use egui::RichText;

use super::GREEN;

pub fn show(ui: &mut egui::Ui, now: f64) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.label(RichText::new("\u{1F411}").size(96.0));
        ui.heading(RichText::new("SheepLingo").size(40.0).strong().color(GREEN));
        ui.label(RichText::new("Your journey through the Bible begins...").size(18.0));
        ui.add_space(16.0);
        let dots = (now * 3.0) as usize % 3 + 1;
        ui.label(RichText::new("\u{25CF} ".repeat(dots)).color(GREEN));
    });
}
