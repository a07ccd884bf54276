use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};

use super::date::{self, WEEKDAY_SHORT_NAMES};
use super::event_id::EventId;

pub const EVENT_DEFAULT_COLOR: &str = "#3B82F6";
pub const EVENT_DEFAULT_DURATION: u32 = 60;
pub const EVENT_DEFAULT_START: NaiveTime = match NaiveTime::from_hms_opt(9, 0, 0) {
  Some(time) => time,
  None => NaiveTime::MIN,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
  #[default]
  OneDay,
  Weekly,
  Monthly,
  Yearly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayAndMonth {
  pub day: u32,
  /// Zero based, January = 0
  pub month: u32,
}

/// How an event repeats. The anchor date of the event still counts as an
/// occurrence regardless of the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recurrence {
  OneDay,
  /// Days counted from Sunday = 0
  Weekly { days_of_week: BTreeSet<u8> },
  Monthly { day_of_month: u32 },
  Yearly(DayAndMonth),
}

impl Recurrence {
  pub const fn kind(&self) -> EventKind {
    match self {
      Self::OneDay => EventKind::OneDay,
      Self::Weekly { .. } => EventKind::Weekly,
      Self::Monthly { .. } => EventKind::Monthly,
      Self::Yearly(_) => EventKind::Yearly,
    }
  }

  pub fn weekly(days: impl IntoIterator<Item = u8>) -> Self {
    Self::Weekly { days_of_week: days.into_iter().collect() }
  }

  pub fn text(&self) -> String {
    match self {
      Self::OneDay => "One-time".to_string(),
      Self::Weekly { days_of_week } => {
        let names = days_of_week
          .iter()
          .filter_map(|day| WEEKDAY_SHORT_NAMES.get(usize::from(*day)).copied())
          .collect::<Vec<_>>();

        format!("Weekly on {}", names.join(", "))
      }
      Self::Monthly { day_of_month } => format!("Monthly on day {day_of_month}"),
      Self::Yearly(DayAndMonth { day, month }) => format!(
        "Yearly on {} {day}",
        date::month_name(month.saturating_add(1)).unwrap_or("Unknown"),
      ),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "EventRecord", into = "EventRecord")]
pub struct Event {
  pub id: EventId,
  pub title: String,
  pub date: NaiveDate,
  pub start_time: NaiveTime,
  pub duration: u32,
  pub color: String,
  pub recurrence: Recurrence,
  pub description: Option<String>,
}

impl Event {
  pub const fn kind(&self) -> EventKind {
    self.recurrence.kind()
  }

  pub fn description(&self) -> &str {
    self.description.as_deref().unwrap_or_default()
  }

  pub fn end_time(&self) -> NaiveTime {
    date::add_minutes(self.start_time, self.duration)
  }

  /// `3:00 PM - 4:00 PM`
  pub fn time_range(&self) -> String {
    format!(
      "{} - {}",
      date::format_time_of_day(self.start_time),
      date::format_time_of_day(self.end_time()),
    )
  }
}

/// The fields the user fills in for a new or edited event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
  pub title: String,
  pub date: NaiveDate,
  pub start_time: NaiveTime,
  pub duration: u32,
  pub color: String,
  pub recurrence: Recurrence,
  pub description: Option<String>,
}

impl EventDraft {
  pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
    Self {
      title: title.into(),
      date,
      start_time: EVENT_DEFAULT_START,
      duration: EVENT_DEFAULT_DURATION,
      color: EVENT_DEFAULT_COLOR.to_string(),
      recurrence: Recurrence::OneDay,
      description: None,
    }
  }

  pub fn into_event(self, id: EventId) -> Event {
    Event {
      id,
      title: self.title,
      date: self.date,
      start_time: self.start_time,
      duration: self.duration,
      color: self.color,
      recurrence: self.recurrence,
      description: self.description,
    }
  }
}

impl From<Event> for EventDraft {
  fn from(event: Event) -> Self {
    Self {
      title: event.title,
      date: event.date,
      start_time: event.start_time,
      duration: event.duration,
      color: event.color,
      recurrence: event.recurrence,
      description: event.description,
    }
  }
}

/// Flat wire form of an [`Event`], as found in configuration files.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EventRecord {
  #[serde(default)]
  pub id: EventId,
  pub title: String,
  pub date: NaiveDate,
  #[serde(with = "hh_mm")]
  pub start_time: NaiveTime,
  pub duration: u32,
  #[serde(default = "default_color")]
  pub color: String,
  #[serde(rename = "type", default)]
  pub kind: EventKind,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub recurrence: Option<RecurrenceRecord>,
}

/// Numbers are kept signed so an out of range value only fails to match
/// instead of failing the whole file.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecurrenceRecord {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub days_of_week: Option<Vec<i64>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub day_of_month: Option<i64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub day_and_month: Option<DayAndMonthRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DayAndMonthRecord {
  pub day: i64,
  pub month: i64,
}

impl From<DayAndMonth> for DayAndMonthRecord {
  fn from(DayAndMonth { day, month }: DayAndMonth) -> Self {
    Self {
      day: i64::from(day),
      month: i64::from(month),
    }
  }
}

impl TryFrom<DayAndMonthRecord> for DayAndMonth {
  type Error = std::num::TryFromIntError;

  fn try_from(DayAndMonthRecord { day, month }: DayAndMonthRecord) -> Result<Self, Self::Error> {
    Ok(Self {
      day: u32::try_from(day)?,
      month: u32::try_from(month)?,
    })
  }
}

impl EventRecord {
  /// Resolves the recurrence payload for the record's type. A payload missing
  /// the field its type needs, or holding a negative day, leaves only the
  /// anchor date as an occurrence. Weekdays that can never match are dropped.
  fn recurrence(&self) -> Recurrence {
    let payload = self.recurrence.as_ref();

    let recurrence = match self.kind {
      EventKind::OneDay => Some(Recurrence::OneDay),
      EventKind::Weekly => payload
        .and_then(|r| r.days_of_week.as_ref())
        .map(|days| Recurrence::weekly(days.iter().filter_map(|day| u8::try_from(*day).ok()))),
      EventKind::Monthly => payload
        .and_then(|r| r.day_of_month)
        .and_then(|day| u32::try_from(day).ok())
        .map(|day_of_month| Recurrence::Monthly { day_of_month }),
      EventKind::Yearly => payload
        .and_then(|r| r.day_and_month)
        .and_then(|day_and_month| DayAndMonth::try_from(day_and_month).ok())
        .map(Recurrence::Yearly),
    };

    recurrence.unwrap_or_else(|| {
      log::warn!(
        "[{}] Event {:?} is {:?} but has no matching recurrence, only its date applies",
        self.id,
        self.title,
        self.kind,
      );

      Recurrence::OneDay
    })
  }
}

impl From<EventRecord> for Event {
  fn from(record: EventRecord) -> Self {
    let recurrence = record.recurrence();

    Self {
      id: record.id,
      title: record.title,
      date: record.date,
      start_time: record.start_time,
      duration: record.duration,
      color: record.color,
      recurrence,
      description: record.description,
    }
  }
}

impl From<Event> for EventRecord {
  fn from(event: Event) -> Self {
    let kind = event.kind();
    let recurrence = match event.recurrence {
      Recurrence::OneDay => None,
      Recurrence::Weekly { days_of_week } => Some(RecurrenceRecord {
        days_of_week: Some(days_of_week.into_iter().map(i64::from).collect()),
        ..Default::default()
      }),
      Recurrence::Monthly { day_of_month } => Some(RecurrenceRecord {
        day_of_month: Some(i64::from(day_of_month)),
        ..Default::default()
      }),
      Recurrence::Yearly(day_and_month) => Some(RecurrenceRecord {
        day_and_month: Some(day_and_month.into()),
        ..Default::default()
      }),
    };

    Self {
      id: event.id,
      title: event.title,
      date: event.date,
      start_time: event.start_time,
      duration: event.duration,
      color: event.color,
      kind,
      description: event.description,
      recurrence,
    }
  }
}

fn default_color() -> String {
  EVENT_DEFAULT_COLOR.to_string()
}

mod hh_mm {
  use chrono::NaiveTime;
  use serde::{Deserialize as _, Deserializer, Serializer};

  use crate::calendar::date::{parse_time, TIME_FORMAT};

  pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format(TIME_FORMAT))
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
    let time = String::deserialize(deserializer)?;

    parse_time(&time).map_err(serde::de::Error::custom)
  }
}
