// Utils compartidos

pub mod audio;
pub mod constants;

pub use audio::resolve_audio_url;
pub use constants::*;
