// ============================================================================
// SESSION STORE - Máquina de estados de la sesión (imagen + caption + Q&A)
// ============================================================================
// UNA sola estructura cohesiva con transiciones atómicas, en lugar de slots
// sueltos de estado. Cada operación asíncrona captura un ticket al emitirse
// y la transición de resolución solo se aplica si el ticket sigue vigente.
// Resultados obsoletos (sesión reiniciada, pregunta reemplazada) se descartan.
// ============================================================================

use crate::models::{AskResponse, UploadResponse};
use crate::utils::resolve_audio_url;

/// Ticket de un upload en vuelo: captura la generación activa al emitirse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket {
    generation: u64,
}

/// Ticket de una pregunta en vuelo: generación + número de secuencia.
/// Solo la última pregunta emitida dentro de la generación sigue vigente.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AskTicket {
    generation: u64,
    seq: u64,
}

/// Estado de sesión - Compatible con use_state_handle
#[derive(Clone, Debug, PartialEq)]
pub struct SessionStore {
    /// Época de la sesión; cada selección de archivo y cada reset la avanza
    pub generation: u64,
    /// Secuencia de preguntas emitidas (monótona, no se reinicia)
    pub ask_seq: u64,
    /// Object URL local de la imagen seleccionada (solo para previsualizar)
    pub preview_url: Option<String>,
    /// Identificador devuelto por el backend tras subir; vacío hasta entonces
    pub image_path: String,
    /// Caption generado; vacío hasta resolverse
    pub caption: String,
    /// URL ABSOLUTA del audio del caption, si el backend lo generó
    pub caption_audio_url: Option<String>,
    /// Texto de la pregunta; editable libremente, independiente de requests
    pub question: String,
    /// None = nunca se preguntó; Some("") = pendiente/limpiada; Some(texto) = lista
    pub answer: Option<String>,
    /// URL ABSOLUTA del audio de la respuesta actual
    pub qa_audio_url: Option<String>,
    pub caption_pending: bool,
    pub answer_pending: bool,
    /// Solo true mientras un drag está sobre la zona de drop
    pub dragging: bool,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self {
            generation: 0,
            ask_seq: 0,
            preview_url: None,
            image_path: String::new(),
            caption: String::new(),
            caption_audio_url: None,
            question: String::new(),
            answer: None,
            qa_audio_url: None,
            caption_pending: false,
            answer_pending: false,
            dragging: false,
        }
    }
}

impl SessionStore {
    /// Nueva selección de archivo: reemplaza la sesión completa en un solo
    /// paso. Avanza la generación (descarta cualquier request en vuelo),
    /// muestra la previsualización local de inmediato y deja el caption
    /// pendiente. El texto de la pregunta se conserva; es entrada del
    /// usuario, no un dato derivado de la imagen.
    pub fn begin_upload(&mut self, preview_url: String) -> UploadTicket {
        *self = Self {
            generation: self.generation + 1,
            ask_seq: self.ask_seq,
            preview_url: Some(preview_url),
            question: std::mem::take(&mut self.question),
            caption_pending: true,
            ..Self::default()
        };
        UploadTicket {
            generation: self.generation,
        }
    }

    /// Aplica el resultado del upload si el ticket sigue vigente.
    /// Devuelve false (sin tocar el estado) para resultados obsoletos.
    pub fn upload_resolved(
        &mut self,
        ticket: UploadTicket,
        response: &UploadResponse,
        base_url: &str,
    ) -> bool {
        if ticket.generation != self.generation {
            return false;
        }

        self.caption = response.caption.clone();
        self.image_path = response.image_path.clone();
        self.caption_audio_url = response
            .caption_audio_url
            .as_deref()
            .map(|path| resolve_audio_url(base_url, path));
        self.caption_pending = false;
        true
    }

    /// Upload fallido: el caption queda vacío y se requiere una nueva
    /// selección del usuario. Sin reintentos.
    pub fn upload_failed(&mut self, ticket: UploadTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }

        self.caption_pending = false;
        true
    }

    /// Emite una pregunta. No-op (None) si no hay texto o si todavía no hay
    /// imagen subida. Limpia la respuesta anterior ANTES de enviar para que
    /// el usuario nunca lea la respuesta vieja como si fuera la nueva.
    pub fn begin_ask(&mut self) -> Option<AskTicket> {
        if self.question.is_empty() || self.image_path.is_empty() {
            return None;
        }

        self.ask_seq += 1;
        self.answer_pending = true;
        self.answer = Some(String::new());
        self.qa_audio_url = None;

        Some(AskTicket {
            generation: self.generation,
            seq: self.ask_seq,
        })
    }

    /// Aplica la respuesta si el ticket sigue vigente: misma generación y
    /// última pregunta emitida. Una pregunta reemplazada que resuelve tarde
    /// no pisa la respuesta más nueva ni su spinner.
    pub fn ask_resolved(&mut self, ticket: AskTicket, response: &AskResponse, base_url: &str) -> bool {
        if !self.is_current_ask(ticket) {
            return false;
        }

        self.answer = Some(response.answer.clone());
        self.qa_audio_url = response
            .qa_audio_url
            .as_deref()
            .map(|path| resolve_audio_url(base_url, path));
        self.answer_pending = false;
        true
    }

    /// Pregunta fallida: la respuesta queda en Some("") (limpiada).
    pub fn ask_failed(&mut self, ticket: AskTicket) -> bool {
        if !self.is_current_ask(ticket) {
            return false;
        }

        self.answer_pending = false;
        true
    }

    /// "Choose another file": limpia TODOS los campos en un solo paso y
    /// avanza la generación, de modo que cualquier request pendiente se
    /// descarte al resolver.
    pub fn reset(&mut self) {
        *self = Self {
            generation: self.generation + 1,
            ask_seq: self.ask_seq,
            ..Self::default()
        };
    }

    pub fn set_question(&mut self, question: String) {
        self.question = question;
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    pub fn has_image(&self) -> bool {
        self.preview_url.is_some()
    }

    fn is_current_ask(&self, ticket: AskTicket) -> bool {
        ticket.generation == self.generation && ticket.seq == self.ask_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:5000";

    fn upload_response(caption: &str, image_path: &str, audio: Option<&str>) -> UploadResponse {
        UploadResponse {
            caption: caption.to_string(),
            image_path: image_path.to_string(),
            caption_audio_url: audio.map(String::from),
        }
    }

    fn ask_response(answer: &str, audio: Option<&str>) -> AskResponse {
        AskResponse {
            question: String::new(),
            answer: answer.to_string(),
            qa_audio_url: audio.map(String::from),
        }
    }

    #[test]
    fn test_default_store_is_empty() {
        let store = SessionStore::default();
        assert_eq!(store.preview_url, None);
        assert!(store.image_path.is_empty());
        assert!(store.caption.is_empty());
        assert_eq!(store.answer, None);
        assert!(!store.caption_pending);
        assert!(!store.answer_pending);
        assert!(!store.dragging);
    }

    #[test]
    fn test_begin_upload_shows_preview_and_marks_pending() {
        let mut store = SessionStore::default();
        let ticket = store.begin_upload("blob:cat".to_string());

        assert_eq!(store.preview_url.as_deref(), Some("blob:cat"));
        assert!(store.caption_pending);
        assert!(store.caption.is_empty());
        assert!(store.image_path.is_empty());
        assert_eq!(store.generation, 1);
        assert!(store.upload_failed(ticket));
    }

    #[test]
    fn test_upload_resolved_populates_session() {
        // Escenario: cat.png -> caption + audio relativo resuelto a absoluto
        let mut store = SessionStore::default();
        let ticket = store.begin_upload("blob:cat".to_string());

        let applied = store.upload_resolved(
            ticket,
            &upload_response("a cat on a rug", "/img/123", Some("/audio/1.mp3")),
            BASE,
        );

        assert!(applied);
        assert_eq!(store.caption, "a cat on a rug");
        assert_eq!(store.image_path, "/img/123");
        assert_eq!(
            store.caption_audio_url.as_deref(),
            Some("http://localhost:5000/audio/1.mp3")
        );
        assert!(!store.caption_pending);
    }

    #[test]
    fn test_image_path_empty_after_failed_upload() {
        let mut store = SessionStore::default();
        let ticket = store.begin_upload("blob:cat".to_string());

        assert!(store.upload_failed(ticket));
        assert!(store.image_path.is_empty());
        assert!(store.caption.is_empty());
        assert!(!store.caption_pending);
        // La previsualización local sobrevive; el upload fallido no la quita
        assert_eq!(store.preview_url.as_deref(), Some("blob:cat"));
    }

    #[test]
    fn test_upload_without_audio_leaves_no_audio_url() {
        let mut store = SessionStore::default();
        let ticket = store.begin_upload("blob:dog".to_string());

        store.upload_resolved(ticket, &upload_response("a dog", "/img/9", None), BASE);
        assert_eq!(store.caption_audio_url, None);
    }

    #[test]
    fn test_new_file_supersedes_pending_upload() {
        let mut store = SessionStore::default();
        let first = store.begin_upload("blob:one".to_string());
        let second = store.begin_upload("blob:two".to_string());

        // La resolución del primer upload llega tarde y se descarta
        let applied = store.upload_resolved(first, &upload_response("stale", "/img/1", None), BASE);
        assert!(!applied);
        assert!(store.caption.is_empty());
        assert!(store.caption_pending);
        assert_eq!(store.preview_url.as_deref(), Some("blob:two"));

        // El segundo sigue vigente
        assert!(store.upload_resolved(second, &upload_response("fresh", "/img/2", None), BASE));
        assert_eq!(store.caption, "fresh");
    }

    #[test]
    fn test_ask_with_empty_question_is_noop() {
        let mut store = SessionStore::default();
        let ticket = store.begin_upload("blob:cat".to_string());
        store.upload_resolved(ticket, &upload_response("a cat", "/img/123", None), BASE);

        let before = store.clone();
        assert_eq!(store.begin_ask(), None);
        assert_eq!(store, before);
    }

    #[test]
    fn test_ask_without_uploaded_image_is_noop() {
        let mut store = SessionStore::default();
        store.set_question("what is this?".to_string());

        let before = store.clone();
        assert_eq!(store.begin_ask(), None);
        assert_eq!(store, before);
    }

    #[test]
    fn test_begin_ask_clears_previous_answer() {
        let mut store = uploaded_store();
        store.set_question("first?".to_string());
        let first = store.begin_ask().unwrap();
        store.ask_resolved(first, &ask_response("one", Some("/audio/q1.mp3")), BASE);

        store.set_question("second?".to_string());
        store.begin_ask().unwrap();

        // La respuesta anterior desaparece antes de que llegue la nueva
        assert_eq!(store.answer.as_deref(), Some(""));
        assert_eq!(store.qa_audio_url, None);
        assert!(store.answer_pending);
    }

    #[test]
    fn test_ask_resolved_sets_answer_without_audio() {
        // Escenario: "what color is it?" -> {answer: "orange"} sin audio
        let mut store = uploaded_store();
        store.set_question("what color is it?".to_string());
        let ticket = store.begin_ask().unwrap();

        assert!(store.ask_resolved(ticket, &ask_response("orange", None), BASE));
        assert_eq!(store.answer.as_deref(), Some("orange"));
        assert_eq!(store.qa_audio_url, None);
        assert!(!store.answer_pending);
    }

    #[test]
    fn test_backend_may_answer_empty_string() {
        let mut store = uploaded_store();
        store.set_question("anything?".to_string());
        let ticket = store.begin_ask().unwrap();

        assert!(store.ask_resolved(ticket, &ask_response("", None), BASE));
        assert_eq!(store.answer.as_deref(), Some(""));
        assert!(!store.answer_pending);
    }

    #[test]
    fn test_newer_ask_wins_over_stale_resolution() {
        let mut store = uploaded_store();
        store.set_question("A?".to_string());
        let ticket_a = store.begin_ask().unwrap();

        store.set_question("B?".to_string());
        let ticket_b = store.begin_ask().unwrap();

        // B resuelve primero
        assert!(store.ask_resolved(ticket_b, &ask_response("answer B", Some("/audio/b.mp3")), BASE));

        // A llega tarde: se descarta, B queda intacta
        assert!(!store.ask_resolved(ticket_a, &ask_response("answer A", Some("/audio/a.mp3")), BASE));
        assert_eq!(store.answer.as_deref(), Some("answer B"));
        assert_eq!(
            store.qa_audio_url.as_deref(),
            Some("http://localhost:5000/audio/b.mp3")
        );
        assert!(!store.answer_pending);
    }

    #[test]
    fn test_stale_ask_failure_does_not_clear_newer_spinner() {
        let mut store = uploaded_store();
        store.set_question("A?".to_string());
        let ticket_a = store.begin_ask().unwrap();

        store.set_question("B?".to_string());
        store.begin_ask().unwrap();

        // El fallo de A no debe apagar el spinner de B
        assert!(!store.ask_failed(ticket_a));
        assert!(store.answer_pending);
        assert_eq!(store.answer.as_deref(), Some(""));
    }

    #[test]
    fn test_ask_failed_keeps_cleared_answer() {
        let mut store = uploaded_store();
        store.set_question("anything?".to_string());
        let ticket = store.begin_ask().unwrap();

        assert!(store.ask_failed(ticket));
        assert_eq!(store.answer.as_deref(), Some(""));
        assert!(!store.answer_pending);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut store = uploaded_store();
        store.set_question("color?".to_string());
        let ticket = store.begin_ask().unwrap();
        store.ask_resolved(ticket, &ask_response("orange", Some("/audio/q.mp3")), BASE);

        let generation_before = store.generation;
        store.reset();

        assert_eq!(store.preview_url, None);
        assert!(store.image_path.is_empty());
        assert!(store.caption.is_empty());
        assert_eq!(store.caption_audio_url, None);
        assert!(store.question.is_empty());
        assert_eq!(store.answer, None);
        assert_eq!(store.qa_audio_url, None);
        assert!(!store.caption_pending);
        assert!(!store.answer_pending);
        assert_eq!(store.generation, generation_before + 1);
    }

    #[test]
    fn test_reset_discards_pending_upload() {
        let mut store = SessionStore::default();
        let ticket = store.begin_upload("blob:cat".to_string());
        store.reset();

        let applied =
            store.upload_resolved(ticket, &upload_response("stale cat", "/img/1", None), BASE);
        assert!(!applied);
        assert!(store.caption.is_empty());
        assert!(store.image_path.is_empty());
        assert!(!store.caption_pending);
    }

    #[test]
    fn test_reset_discards_pending_ask() {
        // Escenario: "choose another file" con una pregunta en vuelo
        let mut store = uploaded_store();
        store.set_question("late?".to_string());
        let ticket = store.begin_ask().unwrap();

        store.reset();

        let applied = store.ask_resolved(ticket, &ask_response("too late", Some("/a.mp3")), BASE);
        assert!(!applied);
        assert_eq!(store.answer, None);
        assert_eq!(store.qa_audio_url, None);
        assert!(!store.answer_pending);
    }

    #[test]
    fn test_ask_resolution_does_not_touch_caption_fields() {
        // Upload y Ask solo comparten image_path (lectura); resolver una
        // pregunta no toca los campos del caption
        let mut store = uploaded_store();
        store.set_question("Q?".to_string());
        let ask_ticket = store.begin_ask().unwrap();

        assert!(store.ask_resolved(ask_ticket, &ask_response("done", None), BASE));
        assert_eq!(store.caption, "a cat");
        assert_eq!(store.image_path, "/img/123");
    }

    #[test]
    fn test_question_survives_new_file_selection() {
        let mut store = uploaded_store();
        store.set_question("still here?".to_string());
        store.begin_upload("blob:new".to_string());

        assert_eq!(store.question, "still here?");
        // Pero los datos derivados de la imagen anterior no
        assert!(store.image_path.is_empty());
        assert_eq!(store.answer, None);
    }

    #[test]
    fn test_drag_gate_is_symmetric() {
        let mut store = SessionStore::default();
        store.set_dragging(true);
        assert!(store.dragging);
        store.set_dragging(false);
        assert!(!store.dragging);
    }

    fn uploaded_store() -> SessionStore {
        let mut store = SessionStore::default();
        let ticket = store.begin_upload("blob:cat".to_string());
        store.upload_resolved(ticket, &upload_response("a cat", "/img/123", None), BASE);
        store
    }
}
