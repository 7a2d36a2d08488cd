//! Audio loading for the transcription collaborator

pub mod decoder;
pub mod resample;

pub use decoder::decode_audio;
pub use resample::resample_to;
