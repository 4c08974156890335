use rand::Rng;

use crate::models::{
    clamp_unit, BackgroundTheme, Beat, DailyContext, JokeIdea, SegmentBackground,
    SegmentEmphasis, TimelineSegment,
};

struct ThemeSpec {
    theme: BackgroundTheme,
    accent_color: &'static str,
    media_prompt: &'static str,
}

static BACKGROUND_THEMES: [ThemeSpec; 5] = [
    ThemeSpec {
        theme: BackgroundTheme::Stage,
        accent_color: "#EF4444",
        media_prompt: "Spotlit brick wall comedy stage with audience bokeh",
    },
    ThemeSpec {
        theme: BackgroundTheme::Studio,
        accent_color: "#6366F1",
        media_prompt: "Modern neon comedy studio with depth and light trails",
    },
    ThemeSpec {
        theme: BackgroundTheme::Nightlife,
        accent_color: "#22D3EE",
        media_prompt: "City rooftop lounge at night with skyline lights",
    },
    ThemeSpec {
        theme: BackgroundTheme::Newsroom,
        accent_color: "#F59E0B",
        media_prompt: "Dynamic virtual newsroom with ticker holograms",
    },
    ThemeSpec {
        theme: BackgroundTheme::Abstract,
        accent_color: "#10B981",
        media_prompt: "Abstract playful shapes with vibrant gradients",
    },
];

const PUNCH_ACCENT: &str = "#F97316";
const CALLBACK_ACCENT: &str = "#22C55E";

fn background(spec: &ThemeSpec, accent: &str) -> SegmentBackground {
    SegmentBackground {
        theme: spec.theme,
        accent_color: accent.to_string(),
        media_prompt: spec.media_prompt.to_string(),
    }
}

fn gestures(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Expand a joke idea into its four narrative beats. The background theme is
/// drawn once from the catalog via the injected source and shared by all four
/// segments; the punch and callback beats override only the accent color.
pub fn timeline_for_joke<R: Rng + ?Sized>(
    joke: &JokeIdea,
    energy: f32,
    ctx: &DailyContext,
    rng: &mut R,
) -> Vec<TimelineSegment> {
    let spec = &BACKGROUND_THEMES[rng.gen_range(0..BACKGROUND_THEMES.len())];
    let setup_len = joke.setup.chars().count() as f32;
    let punch_len = joke.punchline.chars().count() as f32;
    let first_sentence = joke.setup.split('.').next().unwrap_or_default();

    vec![
        TimelineSegment {
            id: format!("{}-hook", joke.id),
            label: "Cold Open Hook".to_string(),
            text: format!("{} {}.", joke.topical_hook, first_sentence),
            duration: 5.0,
            background: background(spec, spec.accent_color),
            emphasis: SegmentEmphasis {
                beat: Beat::Setup,
                energy: clamp_unit(energy + 0.1),
                gestures: gestures(&["lean-in", "eyebrow-pop"]),
            },
        },
        TimelineSegment {
            id: format!("{}-setup", joke.id),
            label: "Story Build".to_string(),
            text: joke.setup.clone(),
            duration: (setup_len / 22.0).round().max(6.0),
            background: background(spec, spec.accent_color),
            emphasis: SegmentEmphasis {
                beat: Beat::Transition,
                energy: clamp_unit(energy),
                gestures: gestures(&["hand-wave", "shoulder-drop"]),
            },
        },
        TimelineSegment {
            id: format!("{}-punch", joke.id),
            label: "Punchline".to_string(),
            text: joke.punchline.clone(),
            duration: (punch_len / 25.0).round().max(4.0),
            background: background(spec, PUNCH_ACCENT),
            emphasis: SegmentEmphasis {
                beat: Beat::Punch,
                energy: clamp_unit(energy + ctx.crowd_energy * 0.2),
                gestures: gestures(&["palm-up", "beat-hit"]),
            },
        },
        TimelineSegment {
            id: format!("{}-tag", joke.id),
            label: "Callback Tag".to_string(),
            text: format!("Callback it to today: {}", ctx.observance),
            duration: 5.0,
            background: background(spec, CALLBACK_ACCENT),
            emphasis: SegmentEmphasis {
                beat: Beat::Callback,
                energy: clamp_unit(ctx.crowd_energy.max(0.6)),
                gestures: gestures(&["chin-raise", "spotlight-scan"]),
            },
        },
    ]
}
