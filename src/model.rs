use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

pub const PDF_MIME: &str = "application/pdf";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd, Default)]
pub enum StudyLevel {
    #[default]
    #[serde(rename = "sixième")]
    Sixieme,
    #[serde(rename = "cinquième")]
    Cinquieme,
    #[serde(rename = "quatrième")]
    Quatrieme,
    #[serde(rename = "troisième")]
    Troisieme,
    #[serde(rename = "seconde")]
    Seconde,
    #[serde(rename = "première")]
    Premiere,
    #[serde(rename = "terminale")]
    Terminale,
    #[serde(rename = "licence1")]
    Licence1,
    #[serde(rename = "licence2")]
    Licence2,
    #[serde(rename = "licence3")]
    Licence3,
    #[serde(rename = "master1")]
    Master1,
    #[serde(rename = "master2")]
    Master2,
}

impl StudyLevel {
    pub const ALL: [StudyLevel; 12] = [
        StudyLevel::Sixieme,
        StudyLevel::Cinquieme,
        StudyLevel::Quatrieme,
        StudyLevel::Troisieme,
        StudyLevel::Seconde,
        StudyLevel::Premiere,
        StudyLevel::Terminale,
        StudyLevel::Licence1,
        StudyLevel::Licence2,
        StudyLevel::Licence3,
        StudyLevel::Master1,
        StudyLevel::Master2,
    ];

    /// Valor tal y como viaja en la petición (`"sixième"`, `"master1"`...)
    pub fn as_str(self) -> &'static str {
        match self {
            StudyLevel::Sixieme => "sixième",
            StudyLevel::Cinquieme => "cinquième",
            StudyLevel::Quatrieme => "quatrième",
            StudyLevel::Troisieme => "troisième",
            StudyLevel::Seconde => "seconde",
            StudyLevel::Premiere => "première",
            StudyLevel::Terminale => "terminale",
            StudyLevel::Licence1 => "licence1",
            StudyLevel::Licence2 => "licence2",
            StudyLevel::Licence3 => "licence3",
            StudyLevel::Master1 => "master1",
            StudyLevel::Master2 => "master2",
        }
    }

    /// Niveles universitarios: piden especialidad
    pub fn requires_specialty(self) -> bool {
        matches!(
            self,
            StudyLevel::Licence1
                | StudyLevel::Licence2
                | StudyLevel::Licence3
                | StudyLevel::Master1
                | StudyLevel::Master2
        )
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionLength {
    #[default]
    Courte,
    Moyenne,
    Longue,
}

impl SessionLength {
    pub const ALL: [SessionLength; 3] = [
        SessionLength::Courte,
        SessionLength::Moyenne,
        SessionLength::Longue,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SessionLength::Courte => "courte",
            SessionLength::Moyenne => "moyenne",
            SessionLength::Longue => "longue",
        }
    }

    pub fn number_of_questions(self) -> u32 {
        match self {
            SessionLength::Courte => 10,
            SessionLength::Moyenne => 15,
            SessionLength::Longue => 20,
        }
    }
}

/// PDF aceptado por el formulario. Sólo se guarda la referencia; el texto
/// se extrae en el servicio que genera el quiz.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PdfFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
    #[serde(skip)]
    pub path: Option<PathBuf>,
    #[serde(skip)]
    pub bytes: Option<Arc<[u8]>>,
}

/// Material de partida del quiz: o texto libre o un PDF, nunca los dos.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentSource {
    RawText(String),
    UploadedFile(PdfFile),
}

impl Default for ContentSource {
    fn default() -> Self {
        ContentSource::RawText(String::new())
    }
}

impl ContentSource {
    /// Texto efectivo: vacío si hay un PDF
    pub fn text(&self) -> &str {
        match self {
            ContentSource::RawText(text) => text,
            ContentSource::UploadedFile(_) => "",
        }
    }

    pub fn pdf_file(&self) -> Option<&PdfFile> {
        match self {
            ContentSource::RawText(_) => None,
            ContentSource::UploadedFile(file) => Some(file),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Draft {
    pub topic: String,
    pub content: ContentSource,
    pub study_level: StudyLevel,
    pub specialty: String,
    pub session_length: SessionLength,
}

/// Lo que recibe el manejador externo al enviar el formulario.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizRequest {
    pub topic: String,
    pub text: String,
    pub study_level: StudyLevel,
    pub specialty: String,
    pub session_length: SessionLength,
    pub pdf_file: Option<PdfFile>,
    pub number_of_questions: u32,
}

impl QuizRequest {
    pub fn from_draft(draft: &Draft) -> Self {
        Self {
            topic: draft.topic.clone(),
            text: draft.content.text().to_string(),
            study_level: draft.study_level,
            specialty: draft.specialty.clone(),
            session_length: draft.session_length,
            pdf_file: draft.content.pdf_file().cloned(),
            number_of_questions: draft.session_length.number_of_questions(),
        }
    }
}
