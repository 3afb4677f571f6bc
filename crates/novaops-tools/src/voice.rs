//! Voice tools - mock speech synthesis, transcription and voice alerts.

use chrono::{DateTime, Utc};
use novaops_analysis::embedding::round_to;
use rand::Rng;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::info;

/// Speech model reported by every voice tool.
pub const VOICE_MODEL: &str = "amazon.nova-sonic-v1:0";

/// Approximate speaking rate used to estimate audio length.
const WORDS_PER_SECOND: f64 = 2.5;

/// Transcriptions keyed by a keyword in the audio reference, checked in order.
const TRANSCRIPTIONS: [(&str, &str); 5] = [
    ("status", "Check the status of all services"),
    ("incident", "Create a new incident for the API gateway"),
    ("health", "Run a health check on the database"),
    ("deploy", "Deploy the latest version to production"),
    ("alert", "What are the current active alerts"),
];

const DEFAULT_TRANSCRIPTION: &str = "Check the current system status and report any issues";

fn short_digest(text: &str, len: usize) -> String {
    let mut digest = format!("{:x}", Sha256::digest(text.as_bytes()));
    digest.truncate(len);
    digest
}

fn truncate_chars(text: &str, max: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

/// Metadata of synthesized audio.
#[derive(Debug, Clone, Serialize)]
pub struct SpeechSynthesis {
    pub text: String,
    pub audio_ref: String,
    pub format: &'static str,
    pub sample_rate: u32,
    pub duration_seconds: f64,
    pub model: &'static str,
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Converts text to (mock) speech.
pub fn text_to_speech(text: &str) -> SpeechSynthesis {
    let words = text.split_whitespace().count() as f64;

    SpeechSynthesis {
        text: truncate_chars(text, 200),
        audio_ref: format!("audio-{}", short_digest(text, 12)),
        format: "pcm_16000",
        sample_rate: 16000,
        duration_seconds: round_to((words / WORDS_PER_SECOND).max(0.5), 2),
        model: VOICE_MODEL,
        status: "synthesized",
        timestamp: Utc::now(),
    }
}

/// A (mock) transcription.
#[derive(Debug, Clone, Serialize)]
pub struct Transcription {
    pub audio_ref: String,
    pub transcription: &'static str,
    pub confidence: f64,
    pub language: &'static str,
    pub model: &'static str,
    pub duration_seconds: f64,
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Transcribes audio, choosing a canned phrase by keyword in the reference.
pub fn speech_to_text<R: Rng + ?Sized>(rng: &mut R, audio_ref: &str) -> Transcription {
    let reference = audio_ref.to_lowercase();
    let transcription = TRANSCRIPTIONS
        .iter()
        .find(|(keyword, _)| reference.contains(keyword))
        .map(|(_, text)| *text)
        .unwrap_or(DEFAULT_TRANSCRIPTION);

    Transcription {
        audio_ref: audio_ref.to_string(),
        transcription,
        confidence: round_to(rng.gen_range(0.85..=0.99), 3),
        language: "en-US",
        model: VOICE_MODEL,
        duration_seconds: round_to(rng.gen_range(1.0..=10.0), 2),
        status: "transcribed",
        timestamp: Utc::now(),
    }
}

/// Urgency of a voice alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    #[default]
    Info,
    Warning,
    Critical,
}

impl AlertSeverity {
    /// Parses an alert severity, falling back to `Info`.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "warning" => AlertSeverity::Warning,
            "critical" => AlertSeverity::Critical,
            _ => AlertSeverity::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Info => "info",
            AlertSeverity::Warning => "warning",
            AlertSeverity::Critical => "critical",
        }
    }

    /// Channels an alert of this severity is broadcast to.
    pub fn channels(&self) -> &'static [&'static str] {
        match self {
            AlertSeverity::Info => &["ops-general"],
            AlertSeverity::Warning => &["ops-general", "ops-oncall"],
            AlertSeverity::Critical => &["ops-general", "ops-oncall", "ops-escalation"],
        }
    }
}

/// Result of a voice alert broadcast.
#[derive(Debug, Clone, Serialize)]
pub struct VoiceAlert {
    pub message: String,
    pub severity: AlertSeverity,
    pub channels: &'static [&'static str],
    pub broadcast_status: &'static str,
    pub recipients_count: usize,
    pub audio_ref: String,
    pub model: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Broadcasts a voice alert to the operations channels.
pub fn voice_alert<R: Rng + ?Sized>(rng: &mut R, message: &str, severity: &str) -> VoiceAlert {
    let severity = AlertSeverity::parse_lenient(severity);
    let channels = severity.channels();
    let recipients_count = channels.len() * rng.gen_range(2..=8);

    info!(severity = ?severity, channels = channels.len(), "Broadcasting voice alert");

    VoiceAlert {
        message: message.to_string(),
        severity,
        channels,
        broadcast_status: "delivered",
        recipients_count,
        audio_ref: format!("alert-{}", short_digest(message, 8)),
        model: VOICE_MODEL,
        timestamp: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_text_to_speech() {
        let speech = text_to_speech("one two three four five");

        assert_eq!(speech.duration_seconds, 2.0);
        assert!(speech.audio_ref.starts_with("audio-"));
        assert_eq!(speech.audio_ref.len(), "audio-".len() + 12);
        assert_eq!(speech.audio_ref, text_to_speech("one two three four five").audio_ref);
        assert_eq!(speech.status, "synthesized");
    }

    #[test]
    fn test_text_to_speech_minimum_duration() {
        assert_eq!(text_to_speech("").duration_seconds, 0.5);
        assert_eq!(text_to_speech("hi").duration_seconds, 0.5);
    }

    #[test]
    fn test_text_to_speech_truncates_echo() {
        let long = "word ".repeat(100);
        let speech = text_to_speech(&long);
        assert_eq!(speech.text.chars().count(), 203);
        assert!(speech.text.ends_with("..."));
    }

    #[test]
    fn test_speech_to_text_keywords() {
        let mut rng = StdRng::seed_from_u64(1);

        let t = speech_to_text(&mut rng, "clip-HEALTH-42.wav");
        assert_eq!(t.transcription, "Run a health check on the database");

        let t = speech_to_text(&mut rng, "deploy-request");
        assert_eq!(t.transcription, "Deploy the latest version to production");

        // first matching keyword wins
        let t = speech_to_text(&mut rng, "incident-status");
        assert_eq!(t.transcription, "Check the status of all services");

        let t = speech_to_text(&mut rng, "random.wav");
        assert_eq!(t.transcription, DEFAULT_TRANSCRIPTION);
        assert!((0.85..=0.99).contains(&t.confidence));
    }

    #[test]
    fn test_voice_alert_channels() {
        let mut rng = StdRng::seed_from_u64(2);

        let alert = voice_alert(&mut rng, "API down", "critical");
        assert_eq!(alert.severity, AlertSeverity::Critical);
        assert_eq!(alert.channels.len(), 3);
        assert!(alert.recipients_count >= 6 && alert.recipients_count <= 24);
        assert_eq!(alert.recipients_count % 3, 0);

        let alert = voice_alert(&mut rng, "FYI", "warning");
        assert_eq!(alert.channels, &["ops-general", "ops-oncall"]);
    }

    #[test]
    fn test_voice_alert_invalid_severity_is_info() {
        let alert = voice_alert(&mut StdRng::seed_from_u64(3), "hello", "urgent");

        assert_eq!(alert.severity, AlertSeverity::Info);
        assert_eq!(alert.channels, &["ops-general"]);
        assert!(alert.audio_ref.starts_with("alert-"));
        assert_eq!(alert.audio_ref.len(), "alert-".len() + 8);
    }
}
