use serde::{Deserialize, Serialize};

// ============================================================================
// TIPOS DE WIRE - Contrato HTTP con el backend de captioning/Q&A
// ============================================================================

/// Respuesta de `POST /upload`.
/// `caption_audio_url` es una ruta relativa al origen del backend y solo
/// está presente cuando la síntesis de voz del caption tuvo éxito.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadResponse {
    pub caption: String,
    pub image_path: String,
    pub caption_audio_url: Option<String>,
}

/// Cuerpo de `POST /ask`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AskRequest {
    pub image_path: String,
    pub question: String,
}

/// Respuesta de `POST /ask`.
/// El backend hace eco de la pregunta; `qa_audio_url` sigue la misma regla
/// que `caption_audio_url`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub question: String,
    pub answer: String,
    pub qa_audio_url: Option<String>,
}
