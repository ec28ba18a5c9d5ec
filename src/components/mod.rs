pub mod app;
pub mod audio_player;
pub mod caption_panel;
pub mod qa_panel;
pub mod upload_zone;

pub use app::App;
pub use audio_player::AudioPlayer;
pub use caption_panel::CaptionPanel;
pub use qa_panel::QaPanel;
pub use upload_zone::UploadZone;
