use chrono::{Datelike as _, Days, Months, NaiveDate};

use super::date::{self, weekday_index};
use super::event::Event;
use super::resolver::events_on;
use super::store::Catalog;

pub const GRID_ROWS: usize = 6;
pub const GRID_COLS: usize = 7;
pub const GRID_LENGTH: usize = GRID_ROWS * GRID_COLS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay<'a> {
  pub date: NaiveDate,
  pub is_current_month: bool,
  pub is_today: bool,
  pub events: Vec<&'a Event>,
}

impl<'a> CalendarDay<'a> {
  /// The first `limit` events and the number of events left out.
  pub fn visible_events(&self, limit: usize) -> (&[&'a Event], usize) {
    let shown = self.events.len().min(limit);

    (&self.events[..shown], self.events.len() - shown)
  }
}

/// The month shown by the grid view. Weeks start on Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthGrid {
  start: NaiveDate,
  end: NaiveDate,
  current: NaiveDate,
}

impl MonthGrid {
  /// `None` when the 42 days around `current` leave chrono's date range.
  pub fn new(current: NaiveDate) -> Option<Self> {
    let (start, end) = Self::grid_bounds(current)?;

    Some(Self { start, end, current })
  }

  /// `month` is 1 based, `None` for an invalid year/month.
  pub fn from_year_month(year: i32, month: u32) -> Option<Self> {
    date::first_of_month(year, month).and_then(Self::new)
  }

  pub const fn current(&self) -> NaiveDate {
    self.current
  }

  pub const fn start(&self) -> NaiveDate {
    self.start
  }

  pub const fn end(&self) -> NaiveDate {
    self.end
  }

  pub fn year(&self) -> i32 {
    self.current.year()
  }

  pub fn month(&self) -> u32 {
    self.current.month()
  }

  /// `October 2026`
  pub fn title(&self) -> String {
    format!(
      "{} {}",
      date::month_name(self.month()).unwrap_or_default(),
      self.year(),
    )
  }

  /// Leaves the grid untouched and returns `false` if `date` has no full grid.
  pub fn set_date(&mut self, date: NaiveDate) -> bool {
    match Self::new(date) {
      Some(grid) => {
        *self = grid;
        true
      }
      None => false,
    }
  }

  /// Stays on the current month at the edge of the calendar.
  pub fn next_month(&mut self) -> NaiveDate {
    if let Some(new_date) = self.current.checked_add_months(Months::new(1)) {
      self.set_date(new_date);
    }

    self.current
  }

  pub fn prev_month(&mut self) -> NaiveDate {
    if let Some(new_date) = self.current.checked_sub_months(Months::new(1)) {
      self.set_date(new_date);
    }

    self.current
  }

  pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
    self.start.iter_days().take(GRID_LENGTH)
  }

  pub fn is_current_month(&self, date: NaiveDate) -> bool {
    date.year() == self.current.year() && date.month() == self.current.month()
  }

  pub fn days<'a, C: Catalog + ?Sized>(&self, catalog: &'a C, today: NaiveDate) -> Vec<CalendarDay<'a>> {
    self
      .dates()
      .map(|date| CalendarDay {
        date,
        is_current_month: self.is_current_month(date),
        is_today: date::is_today_at(date, today),
        events: events_on(catalog, date),
      })
      .collect()
  }

  fn grid_bounds(date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let first = date.with_day(1)?;
    let start = first.checked_sub_days(Days::new(u64::from(weekday_index(first))))?;
    let end = start.checked_add_days(Days::new(GRID_LENGTH as u64 - 1))?;

    Some((start, end))
  }
}

/// The 42 days shown for `month` (1 based) of `year`: the tail of the
/// previous month, the whole month, then the head of the next month.
pub fn build_month_grid<'a, C: Catalog + ?Sized>(
  year: i32,
  month: u32,
  catalog: &'a C,
  today: NaiveDate,
) -> Option<Vec<CalendarDay<'a>>> {
  MonthGrid::from_year_month(year, month).map(|grid| grid.days(catalog, today))
}

/// Splits grid days into week rows.
pub fn rows<'g, 'a>(days: &'g [CalendarDay<'a>]) -> impl Iterator<Item = &'g [CalendarDay<'a>]> {
  days.chunks(GRID_COLS)
}
