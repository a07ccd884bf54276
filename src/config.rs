use std::path::Path;

use anyhow::Context as _;
use chrono::{Days, NaiveDate, NaiveTime};

use crate::calendar::{Event, EventDraft, EventId, EventStore, Recurrence};

#[derive(Debug, Default, serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: Display,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Display {
    /// Events listed in a month grid cell before collapsing into "+N more"
    #[serde(default = "default_max_events_per_day")]
    pub max_events_per_day: usize,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            max_events_per_day: default_max_events_per_day(),
        }
    }
}

impl Config {
    /// Moves the configured events into a store, falling back to the sample
    /// events when none are configured.
    pub fn into_store(self, today: NaiveDate) -> EventStore {
        if self.events.is_empty() {
            log::info!("No events configured, using sample events");

            return sample_events(today).into_iter().collect();
        }

        log::debug!("Loaded {} events", self.events.len());

        self.events.into_iter().collect()
    }
}

pub fn init(path: &Path) -> anyhow::Result<Config> {
    let string = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;

    parse(&string).with_context(|| format!("parsing {}", path.display()))
}

pub fn parse(string: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(string)?)
}

/// Two weekly events anchored a few days after `today`.
pub fn sample_events(today: NaiveDate) -> Vec<Event> {
    let sample = |title: &str, offset: u64, hour: u32, duration: u32, color: &str, days: &[u8], description: &str| {
        EventDraft {
            start_time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN),
            duration,
            color: color.to_string(),
            recurrence: Recurrence::weekly(days.iter().copied()),
            description: Some(description.to_string()),
            ..EventDraft::new(title, today + Days::new(offset))
        }
        .into_event(EventId::new())
    };

    vec![
        sample(
            "Meeting1",
            1,
            15,
            60,
            "#3B82F6",
            &[1, 4],
            "Weekly team meeting to discuss project progress and upcoming tasks.",
        ),
        sample(
            "Movies on Saturday",
            3,
            19,
            180,
            "#8B5CF6",
            &[6],
            "Weekly movie night with friends and family.",
        ),
    ]
}

const fn default_max_events_per_day() -> usize {
    3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{Catalog as _, DayAndMonth, EventKind};

    #[test]
    fn parses_events_of_every_kind() {
        let config = parse(
            r##"
            [display]
            max_events_per_day = 2

            [[events]]
            title = "Standup"
            date = "2024-01-01"
            start_time = "09:15"
            duration = 15
            type = "weekly"
            recurrence = { days_of_week = [1, 2, 3, 4, 5] }

            [[events]]
            title = "Rent"
            date = "2024-01-01"
            start_time = "08:00"
            duration = 5
            color = "#EF4444"
            type = "monthly"
            recurrence = { day_of_month = 1 }

            [[events]]
            title = "Birthday"
            date = "2024-01-01"
            start_time = "18:00"
            duration = 240
            type = "yearly"
            recurrence = { day_and_month = { day = 25, month = 11 } }

            [[events]]
            title = "Dentist"
            date = "2024-03-05"
            start_time = "10:30"
            duration = 45
            description = "Bring the insurance card"
            "##,
        )
        .unwrap();

        assert_eq!(config.display.max_events_per_day, 2);
        assert_eq!(config.events.len(), 4);

        let kinds = config.events.iter().map(Event::kind).collect::<Vec<_>>();
        assert_eq!(kinds, [EventKind::Weekly, EventKind::Monthly, EventKind::Yearly, EventKind::OneDay]);

        assert_eq!(config.events[0].start_time, NaiveTime::from_hms_opt(9, 15, 0).unwrap());
        assert_eq!(config.events[0].color, "#3B82F6");
        assert_eq!(config.events[1].color, "#EF4444");
        assert_eq!(
            config.events[2].recurrence,
            Recurrence::Yearly(DayAndMonth { day: 25, month: 11 })
        );
        assert_eq!(config.events[3].description(), "Bring the insurance card");
    }

    #[test]
    fn malformed_recurrence_does_not_fail_loading() {
        let config = parse(
            r#"
            [[events]]
            title = "Broken"
            date = "2024-01-10"
            start_time = "12:00"
            duration = 30
            type = "monthly"
            recurrence = { days_of_week = [1] }
            "#,
        )
        .unwrap();

        assert_eq!(config.events[0].recurrence, Recurrence::OneDay);
    }

    #[test]
    fn negative_recurrence_values_do_not_fail_loading() {
        let config = parse(
            r#"
            [[events]]
            title = "Gym"
            date = "2024-01-01"
            start_time = "18:00"
            duration = 60
            type = "weekly"
            recurrence = { days_of_week = [-1, 1] }

            [[events]]
            title = "Rent"
            date = "2024-01-05"
            start_time = "08:00"
            duration = 5
            type = "monthly"
            recurrence = { day_of_month = -5 }

            [[events]]
            title = "Lunch"
            date = "2024-01-02"
            start_time = "12:00"
            duration = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.events.len(), 3);
        assert_eq!(config.events[0].recurrence, Recurrence::weekly([1]));
        assert_eq!(config.events[1].recurrence, Recurrence::OneDay);
        assert_eq!(config.events[2].title, "Lunch");
    }

    #[test]
    fn invalid_start_time_is_an_error() {
        let result = parse(
            r#"
            [[events]]
            title = "Broken"
            date = "2024-01-10"
            start_time = "noon"
            duration = 30
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn empty_config_uses_samples() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let config = parse("").unwrap();

        assert_eq!(config.display.max_events_per_day, 3);

        let store = config.into_store(today);
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].title, "Meeting1");
        assert_eq!(store.all()[0].date, NaiveDate::from_ymd_opt(2026, 10, 20).unwrap());
        assert_eq!(store.all()[1].recurrence, Recurrence::weekly([6]));
    }
}
