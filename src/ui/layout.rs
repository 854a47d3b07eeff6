use egui::{CentralPanel, Context, Frame, ScrollArea, Ui, Visuals};

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Mode sombre").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀ Mode clair").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            },
        );
    });
}

/// Ancho útil tras quitar márgenes; nunca negativo en ventanas estrechas.
pub fn inner_width(available: f32, margins: f32) -> f32 {
    (available - margins).max(0.0)
}

/// Panel central con ancho máximo, centrado en horizontal y con scroll
/// vertical para ventanas bajas.
pub fn form_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            let w = ui.available_width().min(max_width);
            let side = ((ui.available_width() - w) / 2.0).max(0.0);
            ui.horizontal(|ui| {
                ui.add_space(side);
                Frame::default()
                    .fill(ui.visuals().window_fill())
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::symmetric(24, 24))
                    .show(ui, |ui| {
                        ui.set_width(inner_width(w, 48.0));
                        ui.vertical(|ui| inner(ui));
                    });
            });
        });
    });
}
