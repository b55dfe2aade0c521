use wordspine_core::Points;

/// Computes the score for a solved level.
///
/// `base + time_remaining * time_bonus - hints_used * hint_penalty`, floored
/// at zero. The function is pure: the session evaluates it once at
/// completion with the final time, and hosts may also call it for a live
/// preview while the clock runs.
///
/// # Example
///
/// ```
/// use wordspine_core::Points;
/// use wordspine_game::level_score;
///
/// let points = Points { base: 100, time_bonus: 2, hint_penalty: 10 };
/// assert_eq!(level_score(points, 30, 1), 150);
/// assert_eq!(level_score(points, 0, 42), 0);
/// ```
#[must_use]
pub fn level_score(points: Points, time_remaining: u32, hints_used: u32) -> i64 {
    let score = points.base + i64::from(time_remaining) * points.time_bonus
        - i64::from(hints_used) * points.hint_penalty;
    score.max(0)
}

/// Formats whole seconds as a zero-padded `MM:SS` clock.
///
/// # Example
///
/// ```
/// use wordspine_game::format_clock;
///
/// assert_eq!(format_clock(90), "01:30");
/// assert_eq!(format_clock(0), "00:00");
/// ```
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const POINTS: Points = Points {
        base: 100,
        time_bonus: 2,
        hint_penalty: 10,
    };

    #[test]
    fn test_score_worked_example() {
        assert_eq!(level_score(POINTS, 30, 1), 150);
    }

    #[test]
    fn test_score_floors_at_zero() {
        assert_eq!(level_score(POINTS, 0, 100), 0);
    }

    #[test]
    fn test_clock_pads_minutes_and_seconds() {
        assert_eq!(format_clock(5), "00:05");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(600), "10:00");
    }

    proptest! {
        #[test]
        fn prop_score_never_negative(
            base in 0i64..10_000,
            time_bonus in 0i64..100,
            hint_penalty in 0i64..100,
            time in 0u32..10_000,
            hints in 0u32..1_000,
        ) {
            let points = Points { base, time_bonus, hint_penalty };
            prop_assert!(level_score(points, time, hints) >= 0);
        }

        #[test]
        fn prop_score_non_increasing_in_hints(
            time in 0u32..10_000,
            hints in 0u32..1_000,
        ) {
            prop_assert!(
                level_score(POINTS, time, hints + 1) <= level_score(POINTS, time, hints)
            );
        }

        #[test]
        fn prop_score_non_decreasing_in_time(
            time in 0u32..10_000,
            hints in 0u32..1_000,
        ) {
            prop_assert!(
                level_score(POINTS, time + 1, hints) >= level_score(POINTS, time, hints)
            );
        }
    }
}
