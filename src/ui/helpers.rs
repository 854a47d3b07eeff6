// src/ui/helpers.rs
use crate::form::{Field, FormErrors};
use egui::{Color32, RichText, Ui};

pub const ERROR_RED: Color32 = Color32::from_rgb(0xEF, 0x44, 0x44);

pub fn field_label(ui: &mut Ui, label: &str) {
    ui.label(RichText::new(label).strong());
    ui.add_space(2.0);
}

/// Mensaje en rojo bajo el campo, si ese campo tiene error.
pub fn field_error(ui: &mut Ui, errors: &FormErrors, field: Field) {
    if let Some(error) = errors.get(field) {
        ui.label(RichText::new(error.to_string()).color(ERROR_RED).small());
    }
}
