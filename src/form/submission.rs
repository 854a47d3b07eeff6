use super::{QuizForm, validate};
use crate::model::QuizRequest;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// El manejador externo recibió la petición
    Submitted,
    /// Hay errores; se muestran bajo cada campo
    Invalid,
    /// `loading` activo: el botón está deshabilitado y no se hace nada
    Busy,
}

impl QuizForm {
    /// Valida y, si todo está bien, llama a `on_submit` una sola vez con el
    /// borrador más el número de preguntas. No espera la respuesta: quién
    /// llama se encarga de `loading`.
    pub fn submit(&mut self, loading: bool, on_submit: impl FnOnce(QuizRequest)) -> SubmitOutcome {
        if loading {
            return SubmitOutcome::Busy;
        }

        self.errors = validate(&self.draft);
        if !self.errors.is_empty() {
            log::debug!("formulario inválido: {} error(es)", self.errors.len());
            return SubmitOutcome::Invalid;
        }

        let request = QuizRequest::from_draft(&self.draft);
        log::info!(
            "quiz solicitado: «{}», {} preguntas, nivel {}",
            request.topic,
            request.number_of_questions,
            request.study_level.as_str()
        );
        on_submit(request);
        SubmitOutcome::Submitted
    }
}
