use chrono::{Datelike as _, NaiveDate};

use super::date::weekday_index;
use super::event::{DayAndMonth, Event, Recurrence};
use super::store::Catalog;

/// Whether `event` happens on `date`. The anchor date always matches,
/// otherwise the recurrence rule decides.
pub fn occurs_on(event: &Event, date: NaiveDate) -> bool {
  if event.date == date {
    return true;
  }

  match &event.recurrence {
    Recurrence::OneDay => false,
    Recurrence::Weekly { days_of_week } => u8::try_from(weekday_index(date))
      .is_ok_and(|weekday| days_of_week.contains(&weekday)),
    Recurrence::Monthly { day_of_month } => date.day() == *day_of_month,
    Recurrence::Yearly(DayAndMonth { day, month }) => date.day() == *day && date.month0() == *month,
  }
}

/// All events of the catalog happening on `date`, in catalog order.
pub fn events_on<C: Catalog + ?Sized>(catalog: &C, date: NaiveDate) -> Vec<&Event> {
  catalog
    .all()
    .iter()
    .filter(|event| occurs_on(event, date))
    .collect()
}
