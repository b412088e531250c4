//! Output format and codec tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Supported output audio formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Mp3,
    Wav,
    M4a,
    Aac,
    Flac,
    Ogg,
}

impl OutputFormat {
    /// All supported formats.
    pub const ALL: [OutputFormat; 6] = [
        OutputFormat::Mp3,
        OutputFormat::Wav,
        OutputFormat::M4a,
        OutputFormat::Aac,
        OutputFormat::Flac,
        OutputFormat::Ogg,
    ];

    /// Encoder codec name for this format.
    pub fn codec(&self) -> &'static str {
        match self {
            OutputFormat::Mp3 => "libmp3lame",
            OutputFormat::Wav => "pcm_s16le",
            OutputFormat::M4a | OutputFormat::Aac => "aac",
            OutputFormat::Flac => "flac",
            OutputFormat::Ogg => "libvorbis",
        }
    }

    /// MIME type for output produced in this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Mp3 => "audio/mpeg",
            OutputFormat::Wav => "audio/wav",
            OutputFormat::M4a => "audio/mp4",
            OutputFormat::Aac => "audio/aac",
            OutputFormat::Flac => "audio/flac",
            OutputFormat::Ogg => "audio/ogg",
        }
    }

    /// File extension (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Mp3 => "mp3",
            OutputFormat::Wav => "wav",
            OutputFormat::M4a => "m4a",
            OutputFormat::Aac => "aac",
            OutputFormat::Flac => "flac",
            OutputFormat::Ogg => "ogg",
        }
    }

    /// Format-specific encoder flags, as (flag, value) pairs.
    ///
    /// mp3 gets a VBR quality target, m4a gets fast-start metadata
    /// placement. Other formats need no extra flags.
    pub fn encoder_flags(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            OutputFormat::Mp3 => &[("-q:a", "2")],
            OutputFormat::M4a => &[("-movflags", "+faststart")],
            _ => &[],
        }
    }

    /// Whether this format is lossless.
    pub fn is_lossless(&self) -> bool {
        matches!(self, OutputFormat::Wav | OutputFormat::Flac)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mp3" => Ok(OutputFormat::Mp3),
            "wav" => Ok(OutputFormat::Wav),
            "m4a" => Ok(OutputFormat::M4a),
            "aac" => Ok(OutputFormat::Aac),
            "flac" => Ok(OutputFormat::Flac),
            "ogg" => Ok(OutputFormat::Ogg),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_table() {
        assert_eq!(OutputFormat::Mp3.codec(), "libmp3lame");
        assert_eq!(OutputFormat::Wav.codec(), "pcm_s16le");
        assert_eq!(OutputFormat::M4a.codec(), "aac");
        assert_eq!(OutputFormat::Aac.codec(), "aac");
        assert_eq!(OutputFormat::Flac.codec(), "flac");
        assert_eq!(OutputFormat::Ogg.codec(), "libvorbis");
    }

    #[test]
    fn test_mime_table() {
        assert_eq!(OutputFormat::Mp3.mime_type(), "audio/mpeg");
        assert_eq!(OutputFormat::Wav.mime_type(), "audio/wav");
        assert_eq!(OutputFormat::M4a.mime_type(), "audio/mp4");
        assert_eq!(OutputFormat::Aac.mime_type(), "audio/aac");
        assert_eq!(OutputFormat::Flac.mime_type(), "audio/flac");
        assert_eq!(OutputFormat::Ogg.mime_type(), "audio/ogg");
    }

    #[test]
    fn test_encoder_flags() {
        assert_eq!(OutputFormat::Mp3.encoder_flags(), &[("-q:a", "2")]);
        assert_eq!(
            OutputFormat::M4a.encoder_flags(),
            &[("-movflags", "+faststart")]
        );
        assert!(OutputFormat::Flac.encoder_flags().is_empty());
    }

    #[test]
    fn test_from_str_roundtrip() {
        for format in OutputFormat::ALL {
            let parsed: OutputFormat = format.to_string().parse().unwrap();
            assert_eq!(parsed, format);
        }
        assert!("mp4".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Flac).unwrap();
        assert_eq!(json, "\"flac\"");
        let back: OutputFormat = serde_json::from_str("\"ogg\"").unwrap();
        assert_eq!(back, OutputFormat::Ogg);
    }
}
