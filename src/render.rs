// src/render.rs
use itertools::Itertools;

use crate::models::{DailyContext, ProductionPlan};

/// Render the whole batch as a human-readable markdown rundown.
pub fn render_rundown(ctx: &DailyContext, plans: &[ProductionPlan]) -> String {
    let mut md = String::new();
    md.push_str("# Daily Comedy Rundown\n\n");
    md.push_str(&format!("{}\n\n", ctx.news_flash.trim()));
    md.push_str(&format!("Observance: {}\n", ctx.observance));
    md.push_str(&format!("Crowd energy: {:.2}\n\n", ctx.crowd_energy));

    for plan in plans {
        md.push_str(&render_plan(plan));
    }

    md
}

fn render_plan(plan: &ProductionPlan) -> String {
    let mut md = String::new();

    match &plan.joke {
        Some(idea) => {
            md.push_str(&format!("## {}\n\n", idea.title));
            md.push_str(&format!("Tags: {}\n\n", idea.tags.iter().join(", ")));
            md.push_str(&format!("{}\n\n", idea.tone_notes.trim()));
        }
        None => md.push_str("## Untitled bit\n\n"),
    }

    md.push_str(&format!(
        "Voice: **{}** ({}, pitch {:.2}, speed {:.2})\n\n",
        plan.voice.name,
        plan.voice.performer_style.as_str(),
        plan.voice.pitch,
        plan.voice.speed
    ));

    for segment in &plan.timeline {
        md.push_str(&format!(
            "- **{}** [{:?} @ {:.0}s, energy {:.2}] {}\n",
            segment.label,
            segment.emphasis.beat,
            segment.duration,
            segment.emphasis.energy,
            segment.text
        ));
    }

    let track_end = plan
        .lip_sync
        .last()
        .map(|frame| frame.timecode)
        .unwrap_or(0.0);
    md.push_str(&format!(
        "\nLip sync: {} frames, track ends at {:.2}s\n\n",
        plan.lip_sync.len(),
        track_end
    ));

    md
}
