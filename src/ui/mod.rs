mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizSetupApp;
use eframe::{App, Frame};
use egui::Context;
use layout::bottom_panel;

impl App for QuizSetupApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Ficheros soltados sobre la ventana = selección de fichero
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if !dropped.is_empty() {
            self.handle_dropped_files(&dropped);
        }

        views::home::ui_home(self, ctx);
    }
}
