/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:5000 (por defecto)
/// - Producción: via BACKEND_URL env var (.env o entorno)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};
