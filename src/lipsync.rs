use crate::models::{LipSyncFrame, MouthShape, ProductionPlan, TimelineSegment};

/// Minimum speaking time per phoneme; text-heavy segments stretch past their
/// nominal duration rather than compressing below this.
const SECONDS_PER_PHONEME: f32 = 0.075;

/// Word gaps glide at a fraction of the per-character step.
const SPACE_GLIDE: f32 = 0.6;

fn mouth_shape_for(ch: char) -> MouthShape {
    match ch {
        'a' | 'e' | 'd' | 't' | 'l' | 'c' => MouthShape::Wide,
        'i' | 'y' | 'f' | 'v' | 's' | 'z' | 'x' => MouthShape::Narrow,
        'o' | 'u' | 'w' => MouthShape::Pucker,
        'b' | 'p' | 'm' | 'q' => MouthShape::Clench,
        'r' | 'g' | 'k' | 'h' | 'j' => MouthShape::Open,
        _ => MouthShape::Rest,
    }
}

/// Synthesize the frame sequence for one segment's text, starting the cursor
/// at `offset`. The first emitted frame sits exactly at `offset` and
/// timecodes never decrease within the sequence.
pub fn frames_for_segment(text: &str, nominal_duration: f32, offset: f32) -> Vec<LipSyncFrame> {
    let sanitized: String = text
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || ch.is_whitespace())
        .collect();
    let sanitized = sanitized.to_lowercase();
    let total_phonemes = sanitized.chars().count();

    let effective = nominal_duration.max(total_phonemes as f32 * SECONDS_PER_PHONEME);
    let per_char = effective / total_phonemes.max(1) as f32;

    let mut frames = Vec::with_capacity(total_phonemes + 1);
    let mut cursor = offset;
    for ch in sanitized.chars() {
        if ch == ' ' {
            cursor += per_char * SPACE_GLIDE;
            continue;
        }
        frames.push(LipSyncFrame {
            timecode: cursor,
            mouth_shape: mouth_shape_for(ch),
            phoneme: ch.to_string(),
        });
        cursor += per_char;
    }
    frames.push(LipSyncFrame {
        timecode: cursor + per_char,
        mouth_shape: MouthShape::Rest,
        phoneme: "rest".to_string(),
    });
    frames
}

/// Stitch per-segment sequences into one continuous track. The cursor
/// advances by each segment's nominal duration, so a segment whose effective
/// duration ran longer spills into the next segment's slot.
pub fn stitch_timeline(timeline: &[TimelineSegment]) -> Vec<LipSyncFrame> {
    let mut frames = Vec::new();
    let mut cursor = 0.0f32;
    for segment in timeline {
        frames.extend(frames_for_segment(&segment.text, segment.duration, cursor));
        cursor += segment.duration;
    }
    frames
}

/// Rebuild a plan's lip-sync track from its current timeline. Editors call
/// this after mutating segment text or durations; derived frames are never
/// refreshed implicitly.
pub fn refresh_plan(plan: &mut ProductionPlan) {
    plan.lip_sync = stitch_timeline(&plan.timeline);
}
