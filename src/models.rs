use serde::{Deserialize, Serialize};

/// Point-in-time framing for the day's material. Derived once per run,
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyContext {
    pub headline_hook: String,
    pub observance: String,
    pub vibe: Vibe,
    pub crowd_energy: f32, // [0.5, 1.0]
    pub news_flash: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    Optimistic,
    Reflective,
    Electric,
    Chill,
}

impl Vibe {
    pub fn as_str(self) -> &'static str {
        match self {
            Vibe::Optimistic => "optimistic",
            Vibe::Reflective => "reflective",
            Vibe::Electric => "electric",
            Vibe::Chill => "chill",
        }
    }
}

/// A raw joke normalized into production-ready material. Immutable once
/// built; editors work on the derived timeline segments instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JokeIdea {
    pub id: String, // e.g., "joke-42"
    pub title: String,
    pub setup: String,
    pub punchline: String,
    pub tags: Vec<String>,
    pub mood: Mood,
    pub topical_hook: String,
    pub tone_notes: String,
    pub timestamp: String, // RFC 3339
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mood {
    FeelGood,
    Satire,
    Wholesome,
    Edgy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSegment {
    pub id: String, // e.g., "joke-42-hook"
    pub label: String,
    pub text: String,
    pub duration: f32, // seconds, > 0
    pub background: SegmentBackground,
    pub emphasis: SegmentEmphasis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentBackground {
    pub theme: BackgroundTheme,
    pub accent_color: String, // "#RRGGBB"
    pub media_prompt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundTheme {
    Studio,
    Stage,
    Abstract,
    Newsroom,
    Nightlife,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentEmphasis {
    pub beat: Beat,
    pub energy: f32, // [0.0, 1.0]
    pub gestures: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Beat {
    Setup,
    Punch,
    Callback,
    Transition,
    Payoff,
}

/// Static performance archetype. Selected by reference from the catalog in
/// `voice.rs`, cloned into plans for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoicePreset {
    pub id: String,
    pub name: String,
    pub performer_style: PerformerStyle,
    pub pitch: f32,
    pub speed: f32,
    pub warmth: f32,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PerformerStyle {
    Standup,
    LateNight,
    NewsAnchor,
    Narrator,
}

impl PerformerStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            PerformerStyle::Standup => "standup",
            PerformerStyle::LateNight => "late-night",
            PerformerStyle::NewsAnchor => "news-anchor",
            PerformerStyle::Narrator => "narrator",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LipSyncFrame {
    pub timecode: f32, // seconds from track start, >= 0
    pub mouth_shape: MouthShape,
    pub phoneme: String, // single character, or "rest"
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouthShape {
    Rest,
    Wide,
    Narrow,
    Open,
    Pucker,
    Smile,
    Clench,
}

/// One fully assembled plan per input joke. `lip_sync` must be regenerated
/// whenever `timeline` changes; `voice` can change independently of both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionPlan {
    pub joke: Option<JokeIdea>,
    pub timeline: Vec<TimelineSegment>,
    pub voice: VoicePreset,
    pub lip_sync: Vec<LipSyncFrame>,
}

/// Energies computed anywhere in the pipeline stay inside [0, 1] even if an
/// upstream formula drifts.
pub fn clamp_unit(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}
