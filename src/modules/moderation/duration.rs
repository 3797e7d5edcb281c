use chrono::Duration;
use regex::Regex;

pub fn parse_duration(s: &str) -> Option<Duration> {
    let re = Regex::new(r"(\d+)([dhms])").unwrap();
    let mut total_seconds = 0i64;
    let mut found = false;

    for cap in re.captures_iter(s) {
        found = true;
        let value: i64 = cap[1].parse().ok()?;
        let unit = &cap[2];

        total_seconds += match unit {
            "d" => value * 24 * 3600,
            "h" => value * 3600,
            "m" => value * 60,
            "s" => value,
            _ => 0,
        };
    }

    if found {
        Some(Duration::seconds(total_seconds))
    } else {
        None
    }
}

/// Renders a duration the way moderators write them: "1d2h", "30m", "45s".
pub fn format_duration(d: Duration) -> String {
    let mut secs = d.num_seconds().max(0);
    let mut out = String::new();

    for (unit, label) in [(86400, "d"), (3600, "h"), (60, "m")] {
        let n = secs / unit;
        if n > 0 {
            out.push_str(&format!("{n}{label}"));
            secs %= unit;
        }
    }

    if secs > 0 || out.is_empty() {
        out.push_str(&format!("{secs}s"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("10m30s"), Some(Duration::seconds(630)));
        assert_eq!(parse_duration("1h30m"), Some(Duration::seconds(5400)));
        assert_eq!(parse_duration("1d"), Some(Duration::seconds(86400)));
        assert_eq!(parse_duration("invalid"), None);
        assert_eq!(parse_duration(""), None);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::seconds(630)), "10m30s");
        assert_eq!(format_duration(Duration::seconds(5400)), "1h30m");
        assert_eq!(format_duration(Duration::seconds(86400)), "1d");
        assert_eq!(format_duration(Duration::seconds(0)), "0s");
    }

    #[test]
    fn format_round_trips_parse() {
        for input in ["1d2h", "3h", "90m", "45s", "1d1h1m1s"] {
            let parsed = parse_duration(input).unwrap();
            assert_eq!(parse_duration(&format_duration(parsed)), Some(parsed));
        }
    }
}
