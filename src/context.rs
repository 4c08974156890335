use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::models::{DailyContext, Vibe};

/// Notable dates keyed by "month-day" (no zero padding).
const SEASONAL_MOMENTS: &[(&str, &str)] = &[
    ("1-1", "New Year's reboot energy is in the air."),
    ("2-14", "It's Valentine's Day, love and awkwardness collide."),
    ("3-17", "St. Patrick's festivities fuel the crowd's boldness."),
    ("4-1", "April Fools' Day primes everyone for punchlines."),
    ("7-4", "Independence celebrations keep the energy sky-high."),
    ("10-31", "It's spooky season—lean into playful eeriness."),
    ("12-25", "Holiday warmth keeps the audience feeling generous."),
    ("12-31", "Year-end reflections are ripe for callback humor."),
];

// Indexed by days-from-Sunday (0 = Sunday .. 6 = Saturday).
const WEEKDAY_HOOKS: [&str; 7] = [
    "Kick off the week with a joke sharper than Monday coffee.",
    "Keep momentum rolling—Tuesday deserves a headline laugh.",
    "It's Wednesday—the midpoint miracle needs levity.",
    "Thursday pregame energy is perfect for premium comedy.",
    "Friday crowds crave top-shelf punchlines.",
    "Saturday night lights the stage for bold bits.",
    "Sunday reflections get brighter with smart humor.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
    Late,
}

impl DayPeriod {
    fn from_hour(hour: u32) -> Self {
        match hour {
            0..=10 => DayPeriod::Morning,
            11..=15 => DayPeriod::Afternoon,
            16..=20 => DayPeriod::Evening,
            _ => DayPeriod::Late,
        }
    }

    fn vibe(self) -> Vibe {
        match self {
            DayPeriod::Morning => Vibe::Optimistic,
            DayPeriod::Afternoon => Vibe::Electric,
            DayPeriod::Evening => Vibe::Chill,
            DayPeriod::Late => Vibe::Reflective,
        }
    }
}

/// Derive the daily context from a local civil timestamp. Pure: identical
/// timestamps produce identical contexts. Callers own the clock and any
/// timezone conversion.
pub fn derive_daily_context(local: NaiveDateTime) -> DailyContext {
    let month_day = format!("{}-{}", local.month(), local.day());
    let weekday = local.weekday().num_days_from_sunday();
    let period = DayPeriod::from_hour(local.hour());
    let vibe = period.vibe();

    let observance = SEASONAL_MOMENTS
        .iter()
        .find(|(key, _)| *key == month_day)
        .map(|(_, text)| (*text).to_string())
        .unwrap_or_else(|| {
            if local.day() == 1 {
                "New month, fresh jokes to kick things off.".to_string()
            } else {
                "Lean into real-time humor that feels live and current.".to_string()
            }
        });

    let news_flash = format!(
        "Tap into {} headlines with a {} tone.",
        local.format("%A, %B %-d"),
        vibe.as_str()
    );

    let evening_bonus = if period == DayPeriod::Evening { 0.15 } else { 0.0 };
    let crowd_energy = (0.6 + weekday as f32 * 0.05 + evening_bonus).clamp(0.5, 1.0);

    DailyContext {
        headline_hook: WEEKDAY_HOOKS[weekday as usize].to_string(),
        observance,
        vibe,
        crowd_energy,
        news_flash,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn identical_timestamps_yield_identical_contexts() {
        // 2026-08-06 is a Thursday
        let ts = at(2026, 8, 6, 9);
        assert_eq!(derive_daily_context(ts), derive_daily_context(ts));
    }

    #[test]
    fn vibe_follows_hour_buckets() {
        let day = |hour| derive_daily_context(at(2026, 8, 6, hour)).vibe;
        assert_eq!(day(0), Vibe::Optimistic);
        assert_eq!(day(10), Vibe::Optimistic);
        assert_eq!(day(11), Vibe::Electric);
        assert_eq!(day(15), Vibe::Electric);
        assert_eq!(day(16), Vibe::Chill);
        assert_eq!(day(20), Vibe::Chill);
        assert_eq!(day(21), Vibe::Reflective);
        assert_eq!(day(23), Vibe::Reflective);
    }

    #[test]
    fn observance_prefers_calendar_table() {
        let halloween = derive_daily_context(at(2026, 10, 31, 12));
        assert!(halloween.observance.contains("spooky season"));

        // First of a month without a table entry
        let first = derive_daily_context(at(2026, 5, 1, 12));
        assert_eq!(first.observance, "New month, fresh jokes to kick things off.");

        let plain = derive_daily_context(at(2026, 8, 6, 12));
        assert_eq!(
            plain.observance,
            "Lean into real-time humor that feels live and current."
        );
    }

    #[test]
    fn headline_hook_indexed_from_sunday() {
        // 2026-08-09 is a Sunday
        let sunday = derive_daily_context(at(2026, 8, 9, 9));
        assert_eq!(sunday.headline_hook, WEEKDAY_HOOKS[0]);

        // 2026-08-08 is a Saturday
        let saturday = derive_daily_context(at(2026, 8, 8, 9));
        assert_eq!(saturday.headline_hook, WEEKDAY_HOOKS[6]);
    }

    #[test]
    fn crowd_energy_formula_and_bounds() {
        // Sunday morning: 0.6 + 0*0.05
        let sunday = derive_daily_context(at(2026, 8, 9, 9));
        assert!((sunday.crowd_energy - 0.6).abs() < 1e-4);

        // Saturday evening: 0.6 + 6*0.05 + 0.15 clamps to 1.0
        let saturday_night = derive_daily_context(at(2026, 8, 8, 19));
        assert!((saturday_night.crowd_energy - 1.0).abs() < 1e-4);

        for hour in 0..24 {
            for day in 3..10 {
                let ctx = derive_daily_context(at(2026, 8, day, hour));
                assert!(ctx.crowd_energy >= 0.5 && ctx.crowd_energy <= 1.0);
            }
        }
    }

    #[test]
    fn news_flash_embeds_full_date_and_vibe() {
        let ctx = derive_daily_context(at(2026, 8, 6, 9));
        assert_eq!(
            ctx.news_flash,
            "Tap into Thursday, August 6 headlines with a optimistic tone."
        );
    }
}
