pub mod api;

pub use api::{AskRequest, AskResponse, UploadResponse};
