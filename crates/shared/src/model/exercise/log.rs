use crate::{
    api::payloads::{LogEntry, LogQuery, LogResponse},
    model::{Exercise, User},
    types::Timestamp,
    utils::dates::parse_date,
};

/// The usable part of a [`LogQuery`]. Bounds that are missing or can't be
/// parsed are unset, as is a limit that isn't a positive integer
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LogFilter {
    /// Exclusive lower bound
    pub from: Option<Timestamp>,
    /// Exclusive upper bound
    pub to: Option<Timestamp>,
    pub limit: Option<u64>,
}

const MAX_LIMIT: u64 = i64::MAX as u64;

impl LogFilter {
    pub fn upper_bound(&self, now: Timestamp) -> Timestamp {
        self.to.unwrap_or(now)
    }
}

impl From<&LogQuery> for LogFilter {
    fn from(query: &LogQuery) -> Self {
        let date = |v: &Option<String>| v.as_deref().and_then(parse_date).map(Timestamp::from);
        Self {
            from: date(&query.from),
            to: date(&query.to),
            limit: query.limit.as_deref().and_then(parse_limit),
        }
    }
}

/// Reads the leading integer of `input` the way a lenient form parser would:
/// `"3abc"` and `" 3"` are 3 and `"2.5"` is 2. Anything that doesn't yield a
/// positive integer is `None`. Values past what SQLite can bind are clamped
pub fn parse_limit(input: &str) -> Option<u64> {
    let input = input.trim_start();
    let input = input.strip_prefix('+').unwrap_or(input);
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());

    let digits = &input[..end];
    if digits.is_empty() {
        return None;
    }

    match digits.parse::<u64>() {
        Ok(0) => None,
        Ok(v) => Some(v.min(MAX_LIMIT)),
        // Only digits are left so this is an overflow
        Err(_) => Some(MAX_LIMIT),
    }
}

impl LogResponse {
    /// Shapes exercises already filtered, sorted and limited by the store
    pub fn new(user: &User, filter: &LogFilter, exercises: Vec<Exercise>) -> Self {
        let log: Vec<LogEntry> = exercises.into_iter().map(LogEntry::from).collect();
        Self {
            id: user.id,
            username: user.username.clone(),
            from: filter.from.map(|v| v.calendar_string()),
            to: filter.to.map(|v| v.calendar_string()),
            count: log.len(),
            log,
        }
    }
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self {
            date: exercise.date.calendar_string(),
            description: exercise.description,
            duration: exercise.duration,
        }
    }
}
