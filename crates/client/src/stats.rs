//! Numbers and labels derived from saved workouts

use std::fmt::Display;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use shared::model::{WeightUnit, Workout};

/// `45s`, `1m 30s`, `2m`, `1h 1m 1s`, `1h 5m`, `2h`
pub fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        return format!("{seconds}s");
    }

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let remaining = seconds % 60;

    match (hours, minutes, remaining) {
        (0, m, 0) => format!("{m}m"),
        (0, m, s) => format!("{m}m {s}s"),
        (h, m, s) if s > 0 => format!("{h}h {m}m {s}s"),
        (h, m, _) if m > 0 => format!("{h}h {m}m"),
        (h, _, _) => format!("{h}h"),
    }
}

pub fn format_workout_duration(seconds: Option<u64>) -> String {
    match seconds {
        None | Some(0) => "Duration not recorded".to_owned(),
        Some(seconds) => format_duration(seconds),
    }
}

pub fn total_sets(workout: &Workout) -> usize {
    workout.exercises().iter().map(|e| e.sets().len()).sum()
}

/// Names of the exercises that still exist in the catalog
pub fn exercise_names(workout: &Workout) -> Vec<&str> {
    workout
        .exercises()
        .iter()
        .filter_map(|e| e.exercise.as_ref().map(|e| e.name.as_str()))
        .filter(|name| !name.is_empty())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume {
    pub volume: f64,
    pub unit: WeightUnit,
}

/// Sum of reps x weight
///
/// Units are not converted. The reported unit is the one of the last set that
/// counted, `Lbs` when nothing counted.
pub fn total_volume(workout: &Workout) -> Volume {
    let mut total = Volume { volume: 0.0, unit: WeightUnit::Lbs };

    for set in workout.exercises().iter().flat_map(|e| e.sets()) {
        match (set.reps, set.weight) {
            (Some(reps), Some(weight)) if reps > 0 && weight != 0.0 => {
                total.volume += f64::from(reps) * weight;
                total.unit = set.weight_unit.unwrap_or(WeightUnit::Kg);
            },
            _ => {},
        }
    }

    total
}

/// `Today`, `Yesterday`, otherwise like `Wed, Jan 3`
pub fn format_relative_date<Tz: TimeZone>(date: &DateTime<Tz>, today: NaiveDate) -> String
where
    Tz::Offset: Display,
{
    let day = date.date_naive();
    if day == today {
        "Today".to_owned()
    } else if Some(day) == today.checked_sub_signed(Duration::days(1)) {
        "Yesterday".to_owned()
    } else {
        date.format("%a, %b %-d").to_string()
    }
}

/// Like `Wednesday, January 3, 2024`
pub fn format_long_date<Tz: TimeZone>(date: Option<&DateTime<Tz>>) -> String
where
    Tz::Offset: Display,
{
    match date {
        Some(date) => date.format("%A, %B %-d, %Y").to_string(),
        None => "Unknown Date".to_owned(),
    }
}

/// When a workout was saved, like `Wednesday, January 3, 2024 at 18:05`
pub fn format_record_date<Tz: TimeZone>(date: Option<&DateTime<Tz>>) -> String
where
    Tz::Offset: Display,
{
    match date {
        Some(date) => format!("{} at {}", format_long_date(Some(date)), format_time(date)),
        None => format_long_date::<Tz>(None),
    }
}

/// 24 hour `HH:MM`
pub fn format_time<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format("%H:%M").to_string()
}

/// Like `January 2024`
pub fn format_join_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format("%B %Y").to_string()
}

/// Whole days, never negative
pub fn days_since(date: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - date).num_days().max(0)
}

/// Totals shown on the home and profile screens
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSummary<'a> {
    pub total_workouts: usize,
    /// Seconds
    pub total_duration: u64,
    /// Seconds, rounded
    pub average_duration: u64,
    pub last_workout: Option<&'a Workout>,
}

impl<'a> WorkoutSummary<'a> {
    /// `workouts` is expected newest first, as the history query returns them
    pub fn from_workouts(workouts: &'a [Workout]) -> Self {
        let total_workouts = workouts.len();
        let total_duration: u64 = workouts.iter().map(|w| w.duration.unwrap_or(0)).sum();
        let average_duration = match total_workouts as u64 {
            0 => 0,
            n => (total_duration + n / 2) / n,
        };

        Self { total_workouts, total_duration, average_duration, last_workout: workouts.first() }
    }
}
