//! Turns raw joke payloads plus a derived daily context into multi-segment
//! video production plans: narrative beats, voice selection, and a
//! phoneme-level lip-sync track.

pub mod api_types;
pub mod context;
pub mod idea;
pub mod lipsync;
pub mod models;
pub mod orchestrator;
pub mod render;
pub mod timeline;
pub mod voice;

pub use api_types::RawJoke;
pub use models::{
    DailyContext, JokeIdea, LipSyncFrame, ProductionPlan, TimelineSegment, VoicePreset,
};
