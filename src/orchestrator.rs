use anyhow::Result;
use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{debug, info};

use crate::api_types::RawJoke;
use crate::idea::build_joke_idea;
use crate::lipsync::stitch_timeline;
use crate::models::{DailyContext, ProductionPlan};
use crate::timeline::timeline_for_joke;
use crate::voice::pick_voice;

/// Run the full pipeline over a batch of raw jokes: idea, timeline, lip-sync
/// track, and voice per joke. Output order matches input order. A malformed
/// payload fails the whole batch; there is no per-item skip.
pub fn orchestrate_plans<R: Rng + ?Sized>(
    raw_jokes: &[RawJoke],
    ctx: &DailyContext,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<Vec<ProductionPlan>> {
    let start = std::time::Instant::now();
    info!("Plan assembly started - jokes={}", raw_jokes.len());

    let mut plans = Vec::with_capacity(raw_jokes.len());
    for raw in raw_jokes {
        let (idea, energy) = build_joke_idea(raw, ctx, now)?;
        let timeline = timeline_for_joke(&idea, energy, ctx, rng);
        let lip_sync = stitch_timeline(&timeline);
        let voice = pick_voice(idea.mood, ctx).clone();

        debug!(
            "Plan assembled - joke={}, mood={:?}, voice={}, frames={}",
            idea.id,
            idea.mood,
            voice.id,
            lip_sync.len()
        );

        plans.push(ProductionPlan {
            joke: Some(idea),
            timeline,
            voice,
            lip_sync,
        });
    }

    info!(
        "Plan assembly completed - duration={:.2}s, plans={}",
        start.elapsed().as_secs_f32(),
        plans.len()
    );
    Ok(plans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::derive_daily_context;
    use crate::lipsync::refresh_plan;
    use chrono::{NaiveDate, TimeZone};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_ctx() -> DailyContext {
        let local = NaiveDate::from_ymd_opt(2026, 8, 6)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        derive_daily_context(local)
    }

    fn single(id: i64, text: &str) -> RawJoke {
        RawJoke::Single {
            joke: text.to_string(),
            id,
            category: "Pun".to_string(),
            safe: true,
            lang: "en".to_string(),
        }
    }

    #[test]
    fn output_order_matches_input_order() {
        let jokes = vec![
            single(3, "A joke about threads that never blocks anyone."),
            single(1, "A second joke about queues that waits its turn."),
            single(2, "A third joke about stacks that pops off nicely."),
        ];
        let now = Utc.with_ymd_and_hms(2026, 8, 6, 22, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let plans = orchestrate_plans(&jokes, &sample_ctx(), now, &mut rng).unwrap();

        let ids: Vec<_> = plans
            .iter()
            .map(|p| p.joke.as_ref().unwrap().id.clone())
            .collect();
        assert_eq!(ids, vec!["joke-3", "joke-1", "joke-2"]);
    }

    #[test]
    fn each_plan_is_fully_assembled() {
        let jokes = vec![single(7, "A joke long enough to split into two readable halves.")];
        let now = Utc.with_ymd_and_hms(2026, 8, 6, 22, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let plans = orchestrate_plans(&jokes, &sample_ctx(), now, &mut rng).unwrap();

        assert_eq!(plans.len(), 1);
        let plan = &plans[0];
        assert!(plan.joke.is_some());
        assert_eq!(plan.timeline.len(), 4);
        assert!(!plan.lip_sync.is_empty());
        assert!((plan.lip_sync[0].timecode - 0.0).abs() < 1e-4);
    }

    #[test]
    fn one_malformed_payload_fails_the_batch() {
        let jokes = vec![
            single(1, "A perfectly fine joke that would have worked."),
            single(2, "   "),
        ];
        let now = Utc.with_ymd_and_hms(2026, 8, 6, 22, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        assert!(orchestrate_plans(&jokes, &sample_ctx(), now, &mut rng).is_err());
    }

    #[test]
    fn edited_timeline_needs_explicit_refresh() {
        let jokes = vec![single(5, "A joke whose timing is about to be edited.")];
        let now = Utc.with_ymd_and_hms(2026, 8, 6, 22, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut plans = orchestrate_plans(&jokes, &sample_ctx(), now, &mut rng).unwrap();

        let plan = &mut plans[0];
        let before = plan.lip_sync.clone();
        plan.timeline[1].text = "Completely rewritten story build text.".to_string();
        assert_eq!(plan.lip_sync, before);

        refresh_plan(plan);
        assert_ne!(plan.lip_sync, before);
    }
}
