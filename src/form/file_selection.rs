use super::QuizForm;
use crate::model::{ContentSource, PDF_MIME, PdfFile};
use egui::DroppedFile;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Fichero candidato tal como llega del selector o de un arrastre.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
    pub path: Option<PathBuf>,
    pub bytes: Option<Arc<[u8]>>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size: 0,
            path: None,
            bytes: None,
        }
    }

    /// En escritorio egui no informa del tipo MIME; se deduce de la
    /// extensión igual que hace un navegador.
    pub fn from_dropped(file: &DroppedFile) -> Self {
        let name = if file.name.is_empty() {
            file.path
                .as_deref()
                .and_then(Path::file_name)
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        } else {
            file.name.clone()
        };

        let mime = if file.mime.is_empty() {
            mime_from_extension(&name).unwrap_or_default().to_string()
        } else {
            file.mime.clone()
        };

        let size = file
            .bytes
            .as_ref()
            .map(|b| b.len() as u64)
            .or_else(|| {
                file.path
                    .as_ref()
                    .and_then(|p| std::fs::metadata(p).ok())
                    .map(|m| m.len())
            })
            .unwrap_or(0);

        Self {
            name,
            mime,
            size,
            path: file.path.clone(),
            bytes: file.bytes.clone(),
        }
    }

    /// Fichero elegido en el diálogo nativo: mismo criterio de extensión
    /// que un arrastre sin tipo MIME.
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime = mime_from_extension(&name).unwrap_or_default().to_string();
        let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

        Self {
            name,
            mime,
            size,
            path: Some(path.to_path_buf()),
            bytes: None,
        }
    }
}

fn mime_from_extension(name: &str) -> Option<&'static str> {
    let ext = Path::new(name).extension()?.to_str()?;
    ext.eq_ignore_ascii_case("pdf").then_some(PDF_MIME)
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FileRejection {
    #[error("« {} » n'est pas un PDF{}", display_name(.name), mime_suffix(.mime))]
    NotPdf { name: String, mime: String },
}

fn display_name(name: &str) -> &str {
    if name.trim().is_empty() {
        "fichier sans nom"
    } else {
        name
    }
}

fn mime_suffix(mime: &str) -> String {
    if mime.is_empty() {
        String::new()
    } else {
        format!(" ({mime})")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileSelection {
    Accepted,
    Rejected(FileRejection),
    Ignored,
}

impl QuizForm {
    /// Sólo se acepta `application/pdf`. Cualquier otro fichero deja el
    /// borrador, el texto y el nombre mostrado intactos.
    pub fn select_file(&mut self, file: SelectedFile) -> FileSelection {
        if file.mime != PDF_MIME {
            log::warn!("fichero ignorado: {} ({})", file.name, file.mime);
            let rejection = FileRejection::NotPdf {
                name: file.name,
                mime: file.mime,
            };
            self.file_notice = Some(rejection.clone());
            return FileSelection::Rejected(rejection);
        }

        log::debug!("PDF seleccionado: {} ({} bytes)", file.name, file.size);
        self.file_name = file.name.clone();
        self.file_notice = None;
        self.draft.content = ContentSource::UploadedFile(PdfFile {
            name: file.name,
            mime: file.mime,
            size: file.size,
            path: file.path,
            bytes: file.bytes,
        });
        FileSelection::Accepted
    }

    /// Como un `<input type=file>`: sólo cuenta el primer fichero.
    pub fn select_first_file(
        &mut self,
        files: impl IntoIterator<Item = SelectedFile>,
    ) -> FileSelection {
        match files.into_iter().next() {
            Some(file) => self.select_file(file),
            None => FileSelection::Ignored,
        }
    }
}
