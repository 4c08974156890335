use anyhow::{bail, Result};
use chrono::{DateTime, SecondsFormat, Utc};

use crate::api_types::RawJoke;
use crate::models::{clamp_unit, DailyContext, JokeIdea, Mood, Vibe};

/// Baseline energy per source category; unknown categories fall back by mood.
const ENERGY_BY_CATEGORY: &[(&str, f32)] = &[
    ("Programming", 0.7),
    ("Miscellaneous", 0.6),
    ("Dark", 0.9),
    ("Pun", 0.75),
    ("Spooky", 0.8),
    ("Christmas", 0.65),
    ("Any", 0.7),
];

/// Setups longer than this read as a story rather than a quick hit.
const STORY_THRESHOLD: usize = 140;

/// Collapse whitespace runs to single spaces and trim the ends.
pub fn normalize_text(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A one-liner splits at 60% of its raw character length; the halves are
/// normalized independently afterwards, so they need not reconstruct the
/// normalized original around the cut.
fn split_single(text: &str) -> (String, String) {
    let chars: Vec<char> = text.chars().collect();
    let cut = (chars.len() as f64 * 0.6).floor() as usize;
    (chars[..cut].iter().collect(), chars[cut..].iter().collect())
}

/// Build a structured joke idea plus its energy score from one raw payload.
/// The build instant is injected so the pipeline stays a pure function of
/// its inputs.
pub fn build_joke_idea(
    raw: &RawJoke,
    ctx: &DailyContext,
    now: DateTime<Utc>,
) -> Result<(JokeIdea, f32)> {
    let (setup_raw, punch_raw) = match raw {
        RawJoke::Single { joke, .. } => split_single(joke),
        RawJoke::Twopart { setup, delivery, .. } => (setup.clone(), delivery.clone()),
    };

    let setup = normalize_text(&setup_raw);
    let punchline = normalize_text(&punch_raw);
    if setup.is_empty() && punchline.is_empty() {
        bail!("Joke {} carries no usable text", raw.id());
    }

    let category = raw.category();
    let mood = if category == "Dark" {
        Mood::Edgy
    } else if category == "Programming" {
        Mood::Satire
    } else if ctx.vibe == Vibe::Optimistic {
        Mood::FeelGood
    } else {
        Mood::Wholesome
    };

    let energy = ENERGY_BY_CATEGORY
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, energy)| *energy)
        .unwrap_or(match mood {
            Mood::Edgy => 0.85,
            Mood::Satire => 0.75,
            _ => 0.65,
        });

    let pace = if setup.chars().count() > STORY_THRESHOLD {
        "story"
    } else {
        "quick-hit"
    };
    let tags = vec![
        category.to_lowercase(),
        ctx.vibe.as_str().to_string(),
        pace.to_string(),
    ];

    let idea = JokeIdea {
        id: format!("joke-{}", raw.id()),
        title: format!("Topical {} bit", category),
        setup,
        punchline,
        tags,
        mood,
        topical_hook: ctx.headline_hook.clone(),
        tone_notes: format!("{} {}", ctx.news_flash, ctx.observance),
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    };

    Ok((idea, clamp_unit(energy)))
}
