use crate::model::{ContentSource, Draft};
use std::collections::BTreeMap;
use thiserror::Error;

pub const MIN_TEXT_WORDS: usize = 150;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Field {
    Topic,
    Text,
    Specialty,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Topic => "topic",
            Field::Text => "text",
            Field::Specialty => "specialty",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Le sujet est obligatoire")]
    TopicRequired,
    #[error("Le texte doit contenir au moins 150 mots")]
    TextTooShort,
    #[error("La spécialité est obligatoire")]
    SpecialtyRequired,
}

/// Errores por campo. Se sustituye entero en cada intento de envío.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors(BTreeMap<Field, ValidationError>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.0.iter().map(|(f, e)| (*f, e))
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn validate(draft: &Draft) -> FormErrors {
    let mut errors = BTreeMap::new();

    if draft.topic.trim().is_empty() {
        errors.insert(Field::Topic, ValidationError::TopicRequired);
    }

    // Con PDF el texto no cuenta; sin PDF, vacío está permitido
    if let ContentSource::RawText(text) = &draft.content {
        if !text.is_empty() && word_count(text) < MIN_TEXT_WORDS {
            errors.insert(Field::Text, ValidationError::TextTooShort);
        }
    }

    if draft.study_level.requires_specialty() && draft.specialty.trim().is_empty() {
        errors.insert(Field::Specialty, ValidationError::SpecialtyRequired);
    }

    FormErrors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PDF_MIME, PdfFile, StudyLevel};

    fn words(n: usize) -> String {
        vec!["mot"; n].join(" ")
    }

    fn valid_draft() -> Draft {
        Draft {
            topic: "Histoire".into(),
            ..Draft::default()
        }
    }

    fn pdf() -> PdfFile {
        PdfFile {
            name: "cours.pdf".into(),
            mime: PDF_MIME.into(),
            size: 1024,
            path: None,
            bytes: None,
        }
    }

    #[test]
    fn blank_topic_is_rejected() {
        for topic in ["", "   ", "\t\n"] {
            let draft = Draft {
                topic: topic.into(),
                ..Draft::default()
            };
            let errors = validate(&draft);
            assert_eq!(errors.get(Field::Topic), Some(&ValidationError::TopicRequired));
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn empty_text_without_file_is_allowed() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn short_text_is_rejected_and_150_words_pass() {
        let mut draft = valid_draft();
        draft.content = ContentSource::RawText(words(149));
        assert_eq!(
            validate(&draft).get(Field::Text),
            Some(&ValidationError::TextTooShort)
        );

        draft.content = ContentSource::RawText(words(150));
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn extra_whitespace_does_not_count_as_words() {
        let mut draft = valid_draft();
        draft.content = ContentSource::RawText(vec!["mot"; 100].join("   \n "));
        assert!(validate(&draft).contains(Field::Text));
    }

    #[test]
    fn uploaded_file_skips_text_rule() {
        let mut draft = valid_draft();
        draft.content = ContentSource::UploadedFile(pdf());
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn university_levels_need_a_specialty() {
        for level in StudyLevel::ALL {
            let draft = Draft {
                study_level: level,
                specialty: "  ".into(),
                ..valid_draft()
            };
            assert_eq!(
                validate(&draft).contains(Field::Specialty),
                level.requires_specialty(),
                "nivel {}",
                level.as_str()
            );
        }
    }

    #[test]
    fn specialty_filled_passes() {
        let draft = Draft {
            study_level: StudyLevel::Master2,
            specialty: "Informatique".into(),
            ..valid_draft()
        };
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn master1_without_specialty_reports_every_violation() {
        let draft = Draft {
            topic: String::new(),
            content: ContentSource::RawText(words(3)),
            study_level: StudyLevel::Master1,
            ..Draft::default()
        };
        let errors = validate(&draft);
        let fields: Vec<_> = errors.iter().map(|(f, _)| f.as_str()).collect();
        assert_eq!(fields, ["topic", "text", "specialty"]);
        assert_eq!(
            errors.get(Field::Specialty).map(ToString::to_string).as_deref(),
            Some("La spécialité est obligatoire")
        );
    }
}
