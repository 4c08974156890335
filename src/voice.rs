use once_cell::sync::Lazy;

use crate::models::{DailyContext, Mood, PerformerStyle, Vibe, VoicePreset};

static VOICE_PRESETS: Lazy<Vec<VoicePreset>> = Lazy::new(|| {
    vec![
        VoicePreset {
            id: "ellie-standup".to_string(),
            name: "Ellie Bright".to_string(),
            performer_style: PerformerStyle::Standup,
            pitch: 1.05,
            speed: 1.0,
            warmth: 0.8,
            description: "Upbeat club comic with tight punch delivery and quick wit."
                .to_string(),
        },
        VoicePreset {
            id: "leo-late-night".to_string(),
            name: "Leo Midnight".to_string(),
            performer_style: PerformerStyle::LateNight,
            pitch: 0.95,
            speed: 0.92,
            warmth: 0.9,
            description: "Smooth late-night host energy with conversational pacing."
                .to_string(),
        },
        VoicePreset {
            id: "nova-news".to_string(),
            name: "Nova Fielding".to_string(),
            performer_style: PerformerStyle::NewsAnchor,
            pitch: 0.9,
            speed: 1.08,
            warmth: 0.7,
            description: "Sharp newsroom presenter with headline-ready cadence.".to_string(),
        },
        VoicePreset {
            id: "sage-narrator".to_string(),
            name: "Sage Harper".to_string(),
            performer_style: PerformerStyle::Narrator,
            pitch: 1.0,
            speed: 0.88,
            warmth: 1.0,
            description: "Cinematic narrator with premium documentary polish.".to_string(),
        },
    ]
});

/// The full read-only preset catalog, for preview surfaces.
pub fn voice_presets() -> &'static [VoicePreset] {
    &VOICE_PRESETS
}

/// Map a mood/vibe pair to a preset. First match wins: edgy and satire moods
/// override whatever the day's vibe would pick.
pub fn pick_voice(mood: Mood, ctx: &DailyContext) -> &'static VoicePreset {
    let presets = voice_presets();
    if mood == Mood::Edgy {
        return &presets[0];
    }
    if mood == Mood::Satire {
        return &presets[1];
    }
    match ctx.vibe {
        Vibe::Electric => &presets[0],
        Vibe::Reflective => &presets[3],
        Vibe::Optimistic => &presets[0],
        Vibe::Chill => &presets[2],
    }
}
