use crate::data::FormOptions;
use crate::form::{FileSelection, QuizForm, SelectedFile, SubmitOutcome};
use crate::model::QuizRequest;
use egui::DroppedFile;
use std::path::Path;

/// Aplicación anfitriona: dueña del formulario, del indicador `loading`
/// (lo controla quien llama) y del manejador de envío.
pub struct QuizSetupApp {
    pub form: QuizForm,
    pub options: FormOptions,
    loading: bool,
    on_submit: Box<dyn FnMut(QuizRequest)>,
}

impl QuizSetupApp {
    pub fn new(options: FormOptions, on_submit: impl FnMut(QuizRequest) + 'static) -> Self {
        Self {
            form: QuizForm::new(),
            options,
            loading: false,
            on_submit: Box::new(on_submit),
        }
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// El botón de envío sólo está activo fuera de `loading`
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let on_submit = &mut self.on_submit;
        self.form.submit(self.loading, |request| on_submit(request))
    }

    pub fn handle_dropped_files(&mut self, files: &[DroppedFile]) -> FileSelection {
        self.form
            .select_first_file(files.iter().map(SelectedFile::from_dropped))
    }

    pub fn handle_picked_file(&mut self, path: &Path) -> FileSelection {
        self.form.select_file(SelectedFile::from_path(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_form_options_embedded;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;

    fn app_with_log() -> (QuizSetupApp, Rc<RefCell<Vec<QuizRequest>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let app = QuizSetupApp::new(read_form_options_embedded().unwrap(), move |r| {
            sink.borrow_mut().push(r)
        });
        (app, log)
    }

    #[test]
    fn submit_goes_through_injected_handler_once() {
        let (mut app, log) = app_with_log();
        app.form.set_topic("Histoire");

        assert_eq!(app.submit(), SubmitOutcome::Submitted);
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(log.borrow()[0].number_of_questions, 10);
    }

    #[test]
    fn loading_flag_is_owned_by_the_caller() {
        let (mut app, log) = app_with_log();
        app.form.set_topic("Histoire");
        app.set_loading(true);

        assert!(app.loading());
        assert_eq!(app.submit(), SubmitOutcome::Busy);
        assert!(log.borrow().is_empty());

        app.set_loading(false);
        assert_eq!(app.submit(), SubmitOutcome::Submitted);
    }

    #[test]
    fn button_is_disabled_while_loading() {
        let (mut app, _) = app_with_log();
        assert!(app.can_submit());
        app.set_loading(true);
        assert!(!app.can_submit());
        assert_eq!(app.options.texts.submit_label(app.loading()), "Génération en cours...");
    }

    #[test]
    fn enter_in_topic_while_loading_is_busy() {
        let (mut app, log) = app_with_log();
        app.form.set_topic("Histoire");
        app.set_loading(true);

        // Enter y clic pasan por el mismo `submit`
        assert_eq!(app.submit(), SubmitOutcome::Busy);
        assert_eq!(app.submit(), SubmitOutcome::Busy);
        assert!(log.borrow().is_empty());
        assert!(app.form.errors().is_empty());
    }

    #[test]
    fn picked_pdf_is_selected() {
        let (mut app, _) = app_with_log();
        app.form.set_text("texte précédent");

        let outcome = app.handle_picked_file(Path::new("/tmp/no-existe/resume.pdf"));

        assert_eq!(outcome, FileSelection::Accepted);
        assert_eq!(app.form.file_name, "resume.pdf");
        assert_eq!(app.form.draft().content.text(), "");
    }

    #[test]
    fn dropped_pdf_is_selected() {
        let (mut app, _) = app_with_log();
        app.form.set_text("texte précédent");
        let files = [DroppedFile {
            path: Some(PathBuf::from("/tmp/no-existe/chapitre.pdf")),
            ..Default::default()
        }];

        assert_eq!(app.handle_dropped_files(&files), FileSelection::Accepted);
        assert_eq!(app.form.file_name, "chapitre.pdf");
        assert_eq!(app.form.draft().content.text(), "");
    }
}
