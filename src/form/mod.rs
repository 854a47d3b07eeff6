use crate::model::{ContentSource, Draft, SessionLength, StudyLevel};

// Submódulos
pub mod file_selection;
pub mod submission;
pub mod validation;

pub use file_selection::{FileRejection, FileSelection, SelectedFile};
pub use submission::SubmitOutcome;
pub use validation::{Field, FormErrors, ValidationError, validate};

/// Estado del formulario durante una vida del componente.
#[derive(Debug, Clone, Default)]
pub struct QuizForm {
    pub draft: Draft,
    pub file_name: String,
    pub errors: FormErrors,
    pub file_notice: Option<FileRejection>,
}

impl QuizForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn show_specialty_field(&self) -> bool {
        self.draft.study_level.requires_specialty()
    }

    /// El área de texto sólo existe mientras no haya PDF
    pub fn show_text_field(&self) -> bool {
        matches!(self.draft.content, ContentSource::RawText(_))
    }

    // Cambios de campo: ninguno vuelve a validar

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.draft.topic = topic.into();
    }

    /// Sin efecto si ya hay un PDF seleccionado.
    pub fn set_text(&mut self, text: impl Into<String>) {
        if let ContentSource::RawText(current) = &mut self.draft.content {
            *current = text.into();
        }
    }

    pub fn text_mut(&mut self) -> Option<&mut String> {
        match &mut self.draft.content {
            ContentSource::RawText(text) => Some(text),
            ContentSource::UploadedFile(_) => None,
        }
    }

    pub fn set_study_level(&mut self, level: StudyLevel) {
        self.draft.study_level = level;
    }

    pub fn set_specialty(&mut self, specialty: impl Into<String>) {
        self.draft.specialty = specialty.into();
    }

    pub fn set_session_length(&mut self, length: SessionLength) {
        self.draft.session_length = length;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_edits_do_not_revalidate() {
        let mut form = QuizForm::new();
        form.submit(false, |_| {});
        assert!(form.errors().contains(Field::Topic));

        form.set_topic("Géographie");
        assert!(form.errors().contains(Field::Topic));
    }

    #[test]
    fn specialty_field_follows_study_level() {
        let mut form = QuizForm::new();
        assert!(!form.show_specialty_field());
        form.set_study_level(StudyLevel::Licence2);
        assert!(form.show_specialty_field());
        form.set_study_level(StudyLevel::Terminale);
        assert!(!form.show_specialty_field());
    }

    #[test]
    fn set_text_updates_raw_text() {
        let mut form = QuizForm::new();
        form.set_text("un deux trois");
        assert_eq!(form.draft().content.text(), "un deux trois");
        assert!(form.show_text_field());
    }
}
