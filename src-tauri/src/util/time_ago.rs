//! "il y a …" labels for the recent-search list.

use std::fmt;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeAgo {
    Seconds,
    Minutes(i64),
    Hours(i64),
    Days(i64),
    Weeks(i64),
    Months(i64),
    Years(i64),
}

/// Both arguments are Unix seconds. A timestamp in the future reads as "just now".
pub fn time_ago(timestamp: i64, now: i64) -> TimeAgo {
    let diff = now.saturating_sub(timestamp);
    if diff < MINUTE {
        TimeAgo::Seconds
    } else if diff < HOUR {
        TimeAgo::Minutes(diff / MINUTE)
    } else if diff < DAY {
        TimeAgo::Hours(diff / HOUR)
    } else if diff < WEEK {
        TimeAgo::Days(diff / DAY)
    } else if diff < MONTH {
        TimeAgo::Weeks(diff / WEEK)
    } else if diff < YEAR {
        TimeAgo::Months(diff / MONTH)
    } else {
        TimeAgo::Years(diff / YEAR)
    }
}

fn plural(n: i64) -> &'static str { if n > 1 { "s" } else { "" } }

impl fmt::Display for TimeAgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TimeAgo::Seconds => f.write_str("il y a quelques secondes"),
            TimeAgo::Minutes(n) => write!(f, "il y a {n} minute{}", plural(n)),
            TimeAgo::Hours(n) => write!(f, "il y a {n} heure{}", plural(n)),
            TimeAgo::Days(n) => write!(f, "il y a {n} jour{}", plural(n)),
            TimeAgo::Weeks(n) => write!(f, "il y a {n} semaine{}", plural(n)),
            TimeAgo::Months(n) => write!(f, "il y a {n} mois"),
            TimeAgo::Years(n) => write!(f, "il y a {n} an{}", plural(n)),
        }
    }
}
