//! Recording decoding and resampling
//!
//! Recordings arrive as opaque encoded bytes. The container is sniffed from
//! its magic bytes, staged to a temporary file with a matching extension and
//! decoded with a pure Rust decoder.

mod container;
mod decoder;
mod resample;
mod staging;

pub use container::decode_container;
pub use decoder::{decode_audio, AudioData};
pub use resample::resample_to_target;
pub use staging::{extract_samples, stage_recording};

use std::path::Path;

/// Supported recording formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Wav,
    Mp3,
    Flac,
    Ogg,

    // Containers handled by symphonia
    Mp4,
    Mkv,

    Unknown,
}

impl AudioFormat {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("wav") | Some("wave") => AudioFormat::Wav,
            Some("mp3") => AudioFormat::Mp3,
            Some("flac") => AudioFormat::Flac,
            Some("ogg") => AudioFormat::Ogg,
            Some("m4a") | Some("mp4") | Some("aac") => AudioFormat::Mp4,
            Some("mkv") | Some("webm") => AudioFormat::Mkv,
            _ => AudioFormat::Unknown,
        }
    }

    /// Detect format from the leading magic bytes of an encoded buffer
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match bytes {
            [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'A', b'V', b'E', ..] => AudioFormat::Wav,
            [b'f', b'L', b'a', b'C', ..] => AudioFormat::Flac,
            [b'O', b'g', b'g', b'S', ..] => AudioFormat::Ogg,
            [b'I', b'D', b'3', ..] => AudioFormat::Mp3,
            // MPEG audio frame sync with a non-zero layer (ADTS AAC has layer 0)
            [0xFF, b1, ..] if b1 & 0xE0 == 0xE0 && b1 & 0x06 != 0 => AudioFormat::Mp3,
            [_, _, _, _, b'f', b't', b'y', b'p', ..] => AudioFormat::Mp4,
            [0x1A, 0x45, 0xDF, 0xA3, ..] => AudioFormat::Mkv,
            _ => AudioFormat::Unknown,
        }
    }

    /// File extension used when staging this format on disk
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            AudioFormat::Wav => Some("wav"),
            AudioFormat::Mp3 => Some("mp3"),
            AudioFormat::Flac => Some("flac"),
            AudioFormat::Ogg => Some("ogg"),
            AudioFormat::Mp4 => Some("m4a"),
            AudioFormat::Mkv => Some("mkv"),
            AudioFormat::Unknown => None,
        }
    }
}
