// ============================================================================
// AUDIO URL - Resolución de rutas de audio del backend
// ============================================================================
// El backend devuelve rutas relativas a su origen (ej: /generated_audio/x.mp3).
// El elemento <audio> necesita una URL absoluta y alcanzable.
// ============================================================================

/// Convierte una ruta de audio del backend en una URL absoluta reproducible.
/// Las URLs ya absolutas se devuelven tal cual.
pub fn resolve_audio_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
