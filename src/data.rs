// src/data.rs

use crate::model::{SessionLength, StudyLevel};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("catálogo de opciones mal formado: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("falta la etiqueta del nivel `{0}`")]
    MissingStudyLevel(&'static str),
    #[error("falta la etiqueta de la duración `{0}`")]
    MissingSessionLength(&'static str),
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormTexts {
    pub topic_label: String,
    pub topic_hint: String,
    pub file_label: String,
    pub file_drop_hint: String,
    pub file_selected: String,
    pub text_label: String,
    pub text_hint: String,
    pub session_label: String,
    pub level_label: String,
    pub specialty_label: String,
    pub specialty_hint: String,
    pub submit: String,
    pub submit_loading: String,
}

impl FormTexts {
    /// Texto del botón de envío; cambia mientras se genera el quiz.
    pub fn submit_label(&self, loading: bool) -> &str {
        if loading {
            &self.submit_loading
        } else {
            &self.submit
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabeledOption<T> {
    pub value: T,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormOptions {
    pub texts: FormTexts,
    pub study_levels: Vec<LabeledOption<StudyLevel>>,
    pub session_lengths: Vec<LabeledOption<SessionLength>>,
}

impl FormOptions {
    pub fn study_level_label(&self, level: StudyLevel) -> &str {
        self.study_levels
            .iter()
            .find(|o| o.value == level)
            .map(|o| o.label.as_str())
            .unwrap_or(level.as_str())
    }

    pub fn session_length_label(&self, length: SessionLength) -> &str {
        self.session_lengths
            .iter()
            .find(|o| o.value == length)
            .map(|o| o.label.as_str())
            .unwrap_or(length.as_str())
    }
}

/// Carga el catálogo desde el YAML embebido y comprueba que cubre todos
/// los valores de los enums.
pub fn read_form_options_embedded() -> Result<FormOptions, DataError> {
    parse_form_options(include_str!("data/form_options.yaml"))
}

pub fn parse_form_options(yaml: &str) -> Result<FormOptions, DataError> {
    let options: FormOptions = serde_yaml::from_str(yaml)?;

    if let Some(missing) = StudyLevel::ALL
        .iter()
        .find(|l| !options.study_levels.iter().any(|o| o.value == **l))
    {
        return Err(DataError::MissingStudyLevel(missing.as_str()));
    }
    if let Some(missing) = SessionLength::ALL
        .iter()
        .find(|s| !options.session_lengths.iter().any(|o| o.value == **s))
    {
        return Err(DataError::MissingSessionLength(missing.as_str()));
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_covers_every_option() {
        let options = read_form_options_embedded().unwrap();
        assert_eq!(options.study_levels.len(), StudyLevel::ALL.len());
        assert_eq!(options.study_level_label(StudyLevel::Master1), "Master 1");
        assert_eq!(
            options.session_length_label(SessionLength::Moyenne),
            "Moyenne (10-15 questions)"
        );
        assert_eq!(options.texts.submit, "Démarrer le quiz");
        assert_eq!(options.texts.submit_loading, "Génération en cours...");
    }

    #[test]
    fn submit_label_swaps_while_loading() {
        let texts = read_form_options_embedded().unwrap().texts;
        assert_eq!(texts.submit_label(false), "Démarrer le quiz");
        assert_eq!(texts.submit_label(true), "Génération en cours...");
    }

    #[test]
    fn drop_zone_hint_offers_click_and_drop() {
        let texts = read_form_options_embedded().unwrap().texts;
        assert_eq!(texts.file_drop_hint, "Cliquez pour uploader ou glissez-déposez");
    }

    #[test]
    fn catalog_without_a_level_is_rejected() {
        let yaml = include_str!("data/form_options.yaml")
            .replace("  - { value: \"master2\", label: \"Master 2\" }\n", "");
        match parse_form_options(&yaml) {
            Err(DataError::MissingStudyLevel(level)) => assert_eq!(level, "master2"),
            other => panic!("se esperaba MissingStudyLevel, llegó {other:?}"),
        }
    }

    #[test]
    fn unknown_level_value_is_a_parse_error() {
        let yaml = include_str!("data/form_options.yaml").replace("\"licence1\"", "\"doctorat\"");
        assert!(matches!(parse_form_options(&yaml), Err(DataError::Parse(_))));
    }
}
