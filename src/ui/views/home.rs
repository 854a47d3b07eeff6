use crate::app::QuizSetupApp;
use crate::form::Field;
use crate::model::{SessionLength, StudyLevel};
use crate::ui::helpers::{ERROR_RED, field_error, field_label};
use crate::ui::layout::{form_panel, inner_width};
use egui::{Button, Color32, ComboBox, Context, Frame, Key, RichText, Sense, Stroke, TextEdit, Ui};

pub fn ui_home(app: &mut QuizSetupApp, ctx: &Context) {
    let hovering_files = ctx.input(|i| !i.raw.hovered_files.is_empty());
    let mut submit_requested = false;
    let mut pick_requested = false;

    form_panel(ctx, 640.0, |ui| {
        let width = ui.available_width();
        let texts = &app.options.texts;

        // ----------- SUJET -----------
        field_label(ui, &texts.topic_label);
        let topic = ui.add(
            TextEdit::singleline(&mut app.form.draft.topic)
                .hint_text(texts.topic_hint.as_str())
                .desired_width(width),
        );
        // Enter en el sujet envía, como en un formulario web
        if topic.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            submit_requested = true;
        }
        field_error(ui, &app.form.errors, Field::Topic);
        ui.add_space(14.0);

        // ----------- PDF -----------
        field_label(ui, &texts.file_label);
        if drop_zone(ui, app, width, hovering_files) {
            pick_requested = true;
        }
        ui.add_space(14.0);

        // ----------- TEXTE (sólo sin PDF) -----------
        if let Some(text) = app.form.text_mut() {
            field_label(ui, &texts.text_label);
            ui.add(
                TextEdit::multiline(text)
                    .hint_text(texts.text_hint.as_str())
                    .desired_rows(4)
                    .desired_width(width),
            );
            field_error(ui, &app.form.errors, Field::Text);
            ui.add_space(14.0);
        }

        // ----------- DURÉE Y NIVEL -----------
        ui.columns(2, |cols| {
            field_label(&mut cols[0], &texts.session_label);
            let mut length = app.form.draft.session_length;
            ComboBox::from_id_salt("session_length")
                .selected_text(app.options.session_length_label(length))
                .width(cols[0].available_width())
                .show_ui(&mut cols[0], |ui| {
                    for option in SessionLength::ALL {
                        ui.selectable_value(
                            &mut length,
                            option,
                            app.options.session_length_label(option),
                        );
                    }
                });
            app.form.set_session_length(length);

            field_label(&mut cols[1], &texts.level_label);
            let mut level = app.form.draft.study_level;
            ComboBox::from_id_salt("study_level")
                .selected_text(app.options.study_level_label(level))
                .width(cols[1].available_width())
                .show_ui(&mut cols[1], |ui| {
                    for option in StudyLevel::ALL {
                        ui.selectable_value(
                            &mut level,
                            option,
                            app.options.study_level_label(option),
                        );
                    }
                });
            app.form.set_study_level(level);
        });
        ui.add_space(14.0);

        // ----------- SPÉCIALITÉ (niveles universitarios) -----------
        if app.form.show_specialty_field() {
            field_label(ui, &texts.specialty_label);
            ui.add(
                TextEdit::singleline(&mut app.form.draft.specialty)
                    .hint_text(texts.specialty_hint.as_str())
                    .desired_width(width),
            );
            field_error(ui, &app.form.errors, Field::Specialty);
            ui.add_space(14.0);
        }

        // ----------- BOTÓN -----------
        let label = texts.submit_label(app.loading());
        let button = Button::new(RichText::new(label).color(Color32::WHITE).strong())
            .fill(Color32::from_rgb(0x63, 0x66, 0xF1))
            .min_size([width, 36.0].into());
        if ui.add_enabled(app.can_submit(), button).clicked() {
            submit_requested = true;
        }
    });

    // Clic en la zona = <input type=file accept=application/pdf>
    if pick_requested {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .pick_file()
        {
            app.handle_picked_file(&path);
        }
    }

    if submit_requested {
        app.submit();
    }
}

/// Devuelve `true` si se ha hecho clic en la zona.
fn drop_zone(ui: &mut Ui, app: &QuizSetupApp, width: f32, hovering: bool) -> bool {
    let texts = &app.options.texts;
    let stroke_color = if hovering {
        Color32::from_rgb(0x63, 0x66, 0xF1)
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke.color
    };

    let frame = Frame::default()
        .stroke(Stroke::new(2.0, stroke_color))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(12, 24))
        .show(ui, |ui| {
            ui.set_width(inner_width(width, 24.0));
            ui.vertical_centered(|ui| {
                if app.form.file_name.is_empty() {
                    ui.label(RichText::new(&texts.file_drop_hint).weak());
                } else {
                    ui.label(RichText::new(&app.form.file_name).strong());
                    ui.label(
                        RichText::new(format!("{} {}", texts.file_selected, app.form.file_name))
                            .small()
                            .weak(),
                    );
                }
            });
        });

    let clicked = ui
        .interact(frame.response.rect, ui.id().with("pdf_drop_zone"), Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .clicked();

    if let Some(notice) = &app.form.file_notice {
        ui.label(RichText::new(notice.to_string()).color(ERROR_RED).small());
    }

    clicked
}
