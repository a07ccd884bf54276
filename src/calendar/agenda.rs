use chrono::NaiveDate;

use super::event::Event;
use super::store::Catalog;

/// Events sharing one anchor date in the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaGroup<'a> {
  pub date: NaiveDate,
  pub events: Vec<&'a Event>,
}

impl AgendaGroup<'_> {
  /// `Wednesday, October 16, 2024`
  pub fn heading(&self) -> String {
    self.date.format("%A, %B %-d, %Y").to_string()
  }
}

/// Every event of the catalog ordered by anchor date then start time and
/// grouped by anchor date. Recurring events are listed once, under the date
/// they were created for.
pub fn agenda<C: Catalog + ?Sized>(catalog: &C) -> Vec<AgendaGroup<'_>> {
  let mut events = catalog.all().iter().collect::<Vec<_>>();
  events.sort_by_key(|event| (event.date, event.start_time));

  let mut groups: Vec<AgendaGroup> = Vec::new();

  for event in events {
    match groups.last_mut() {
      Some(group) if group.date == event.date => group.events.push(event),
      _ => groups.push(AgendaGroup {
        date: event.date,
        events: vec![event],
      }),
    }
  }

  groups
}
