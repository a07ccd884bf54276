use chrono::{Datelike as _, Days, Local, Month, NaiveDate, NaiveTime, ParseResult, TimeDelta};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

pub const WEEKDAY_NAMES: [&str; 7] = [
  "Sunday",
  "Monday",
  "Tuesday",
  "Wednesday",
  "Thursday",
  "Friday",
  "Saturday",
];

pub const WEEKDAY_SHORT_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn format_date(date: NaiveDate) -> String {
  date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(date: &str) -> ParseResult<NaiveDate> {
  NaiveDate::parse_from_str(date, DATE_FORMAT)
}

pub fn parse_time(time: &str) -> ParseResult<NaiveTime> {
  NaiveTime::parse_from_str(time, TIME_FORMAT)
}

/// Number of days in `month` (1-12) of `year`, `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
  first_of_month(year, month)?
    .checked_add_months(chrono::Months::new(1))?
    .pred_opt()
    .map(|last| last.day())
}

/// Weekday of the 1st of `month`, counted from Sunday = 0.
pub fn first_weekday_of_month(year: i32, month: u32) -> Option<u32> {
  first_of_month(year, month).map(weekday_index)
}

pub fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
  NaiveDate::from_ymd_opt(year, month, 1)
}

pub fn weekday_index(date: NaiveDate) -> u32 {
  date.weekday().num_days_from_sunday()
}

pub fn today() -> NaiveDate {
  Local::now().date_naive()
}

pub fn is_today(date: NaiveDate) -> bool {
  is_today_at(date, today())
}

pub fn is_today_at(date: NaiveDate, today: NaiveDate) -> bool {
  date == today
}

/// 12-hour clock display, e.g. `3:00 PM`.
pub fn format_time_of_day(time: NaiveTime) -> String {
  time.format("%-I:%M %p").to_string()
}

/// Adds `minutes` to a time of day. Overflow past midnight is dropped, so
/// `23:30 + 90` yields `01:00` without any date rollover.
pub fn add_minutes(time: NaiveTime, minutes: u32) -> NaiveTime {
  let (sum, _overflow) = time.overflowing_add_signed(TimeDelta::minutes(i64::from(minutes)));

  sum
}

/// The seven dates from Sunday to Saturday of the week containing `today`,
/// `None` for the partial weeks at the ends of chrono's range.
pub fn current_week_dates(today: NaiveDate) -> Option<[NaiveDate; 7]> {
  let sunday = today.checked_sub_days(Days::new(u64::from(weekday_index(today))))?;
  sunday.checked_add_days(Days::new(6))?;

  Some(std::array::from_fn(|offset| sunday + Days::new(offset as u64)))
}

pub fn month_name(month: u32) -> Option<&'static str> {
  u8::try_from(month)
    .ok()
    .and_then(|month| Month::try_from(month).ok())
    .map(|month| month.name())
}
