// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP.
// Una llamada best-effort por acción; sin reintentos.
// ============================================================================

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::models::{AskRequest, AskResponse, UploadResponse};
use crate::utils::constants::BACKEND_URL;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Subir imagen para captioning (multipart, campo "image")
    pub async fn upload_image(&self, file: &File) -> Result<UploadResponse, String> {
        let url = format!("{}/upload", self.base_url);

        let form = FormData::new().map_err(|_| "FormData error".to_string())?;
        form.append_with_blob("image", file)
            .map_err(|_| "FormData error".to_string())?;

        log::info!("📤 Subiendo imagen: {}", file.name());

        let response = Request::post(&url)
            .body(form)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<UploadResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Preguntar sobre la imagen ya subida
    pub async fn ask_question(&self, image_path: &str, question: &str) -> Result<AskResponse, String> {
        let url = format!("{}/ask", self.base_url);
        let request = AskRequest {
            image_path: image_path.to_string(),
            question: question.to_string(),
        };

        log::info!("❓ Enviando pregunta: {}", question);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<AskResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}
