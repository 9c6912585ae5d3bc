// src/utils/format.rs

/// Seconds in a 365-day year.
const SECONDS_PER_YEAR: f64 = 31_536_000.0;

// Beyond this the raw second count no longer fits in an f64.
const LOG10_DISPLAY_LIMIT: f64 = 300.0;

/// Render a base-10 logarithm as scientific notation with three fractional
/// digits, e.g. `log10(26)` becomes `"2.600e+01"`.
pub fn scientific(log10_value: f64) -> String {
    let mut exponent = log10_value.floor();
    let mut mantissa = 10f64.powf(log10_value - exponent);

    // Rounding to three digits can carry the mantissa over to 10.0
    if format!("{mantissa:.3}") == "10.000" {
        mantissa = 1.0;
        exponent += 1.0;
    }

    if exponent >= 0.0 {
        format!("{mantissa:.3}e+{:02}", exponent as i64)
    } else {
        format!("{mantissa:.3}e-{:02}", -(exponent as i64))
    }
}

/// Convert seconds to a human readable duration.
pub fn seconds_to_human(t: f64) -> String {
    if t < 60.0 {
        return format!("{t:.2} sec");
    }
    let mins = t / 60.0;
    if mins < 60.0 {
        return format!("{mins:.2} min");
    }
    let hrs = mins / 60.0;
    if hrs < 24.0 {
        return format!("{hrs:.2} hours");
    }
    let days = hrs / 24.0;
    if days < 365.0 {
        return format!("{days:.2} days");
    }
    format!("{:.2} years", days / 365.0)
}

/// Human readable crack time from a log10 second count.
///
/// Very long passwords produce second counts far outside f64 range, so the
/// value is carried as a logarithm and only expanded when it is small enough
/// to print directly.
pub fn crack_time_display(log10_seconds: f64) -> String {
    if log10_seconds > LOG10_DISPLAY_LIMIT {
        let log10_years = log10_seconds - SECONDS_PER_YEAR.log10();
        return format!("{} years", scientific(log10_years));
    }
    seconds_to_human(10f64.powf(log10_seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scientific_small_value() {
        assert_eq!(scientific(26f64.log10()), "2.600e+01");
    }

    #[test]
    fn scientific_large_value() {
        // 36^11 = 1.316e+17
        assert_eq!(scientific(11.0 * 36f64.log10()), "1.316e+17");
    }

    #[test]
    fn scientific_mantissa_rollover() {
        assert_eq!(scientific(2.999_999_999_9), "1.000e+03");
    }

    #[test]
    fn seconds_to_human_units() {
        assert_eq!(seconds_to_human(0.05), "0.05 sec");
        assert_eq!(seconds_to_human(30.0), "30.00 sec");
        assert_eq!(seconds_to_human(90.0), "1.50 min");
        assert_eq!(seconds_to_human(7_200.0), "2.00 hours");
        assert_eq!(seconds_to_human(172_800.0), "2.00 days");
        assert_eq!(seconds_to_human(63_072_000.0), "2.00 years");
    }

    #[test]
    fn seconds_to_human_unit_boundaries() {
        assert_eq!(seconds_to_human(59.99), "59.99 sec");
        assert_eq!(seconds_to_human(60.0), "1.00 min");
        assert_eq!(seconds_to_human(3_600.0), "1.00 hours");
        assert_eq!(seconds_to_human(86_400.0), "1.00 days");
        assert_eq!(seconds_to_human(31_536_000.0), "1.00 years");
    }

    #[test]
    fn crack_time_expands_small_logs() {
        // 36^11 guesses at 1e9/sec is about 4.17 years
        let log10_seconds = 11.0 * 36f64.log10() - 9.0;
        assert_eq!(crack_time_display(log10_seconds), "4.17 years");
    }

    #[test]
    fn crack_time_stays_in_log_space_for_huge_values() {
        let display = crack_time_display(400.0);
        assert!(display.ends_with("years"));
        assert!(display.contains("e+"));
    }
}
