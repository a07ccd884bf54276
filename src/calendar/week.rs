use chrono::{Datelike as _, NaiveDate};

use super::date::{self, WEEKDAY_NAMES};
use super::event::Event;
use super::resolver::events_on;
use super::store::Catalog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDayEntry<'a> {
  pub date: NaiveDate,
  pub day_name: &'static str,
  /// Sorted by start time
  pub events: Vec<&'a Event>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekProgram<'a> {
  pub days: [WeekDayEntry<'a>; 7],
}

impl WeekProgram<'_> {
  pub fn first(&self) -> NaiveDate {
    self.days[0].date
  }

  pub fn last(&self) -> NaiveDate {
    self.days[6].date
  }

  pub fn total_events(&self) -> usize {
    self.days.iter().map(|day| day.events.len()).sum()
  }

  /// `October 18 - October 24, 2026`
  pub fn range_label(&self) -> String {
    let (first, last) = (self.first(), self.last());

    format!(
      "{} {} - {} {}, {}",
      date::month_name(first.month()).unwrap_or_default(),
      first.day(),
      date::month_name(last.month()).unwrap_or_default(),
      last.day(),
      last.year(),
    )
  }
}

/// Sunday to Saturday of the week containing `today`, each day with the
/// events happening on it. `None` when that week leaves chrono's range.
pub fn build_current_week<C: Catalog + ?Sized>(today: NaiveDate, catalog: &C) -> Option<WeekProgram<'_>> {
  let dates = date::current_week_dates(today)?;

  let days = std::array::from_fn(|offset| {
    let mut events = events_on(catalog, dates[offset]);
    events.sort_by_key(|event| event.start_time);

    WeekDayEntry {
      date: dates[offset],
      day_name: WEEKDAY_NAMES[offset],
      events,
    }
  });

  Some(WeekProgram { days })
}

#[cfg(test)]
mod tests {
  use chrono::{Datelike as _, NaiveTime};

  use super::*;
  use crate::calendar::{EventDraft, EventId, Recurrence};

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  fn weekly(title: &str, start: (u32, u32), days: &[u8]) -> Event {
    EventDraft {
      start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
      recurrence: Recurrence::weekly(days.iter().copied()),
      ..EventDraft::new(title, date(2020, 1, 1))
    }
    .into_event(EventId::new())
  }

  #[test]
  fn week_is_sunday_to_saturday_and_contains_today() {
    let catalog: Vec<Event> = Vec::new();

    for today in date(2024, 12, 20).iter_days().take(21) {
      let week = build_current_week(today, &catalog).unwrap();

      assert_eq!(week.days[0].day_name, "Sunday");
      assert_eq!(week.days[6].day_name, "Saturday");
      assert_eq!(week.first().weekday(), chrono::Weekday::Sun);
      assert!(week.days.windows(2).all(|pair| pair[0].date < pair[1].date));
      assert!(week.days.iter().any(|day| day.date == today));
    }
  }

  #[test]
  fn events_are_sorted_by_start_time() {
    let catalog = vec![
      weekly("late", (19, 0), &[1]),
      weekly("early", (7, 30), &[1]),
      weekly("noon", (12, 0), &[1, 3]),
    ];

    // 2024-10-16 is a Wednesday
    let week = build_current_week(date(2024, 10, 16), &catalog).unwrap();
    let monday = &week.days[1];

    assert_eq!(monday.date, date(2024, 10, 14));
    let titles = monday.events.iter().map(|event| event.title.as_str()).collect::<Vec<_>>();
    assert_eq!(titles, ["early", "noon", "late"]);

    assert_eq!(week.days[3].events.len(), 1);
    assert_eq!(week.total_events(), 4);
  }

  #[test]
  fn range_label_spans_months() {
    let catalog: Vec<Event> = Vec::new();
    let week = build_current_week(date(2025, 1, 1), &catalog).unwrap();

    assert_eq!(week.range_label(), "December 29 - January 4, 2025");
  }

  #[test]
  fn no_week_past_the_end_of_the_calendar() {
    let catalog = vec![weekly("always", (9, 0), &[0, 1, 2, 3, 4, 5, 6])];

    match build_current_week(NaiveDate::MAX, &catalog) {
      Some(week) => assert!(week.days.iter().any(|day| day.date == NaiveDate::MAX)),
      None => assert!(date::current_week_dates(NaiveDate::MAX).is_none()),
    }
  }
}
