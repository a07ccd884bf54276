//! Plain text rendering of the month grid, week program and event list.

use std::fmt::{self, Write};

use chrono::{Datelike as _, NaiveDate};

use crate::calendar::date::{self, WEEKDAY_SHORT_NAMES};
use crate::calendar::{self, Catalog, Event, MonthGrid, WeekProgram};

const CELL_WIDTH: usize = 5;

pub fn month<C: Catalog + ?Sized>(
    out: &mut impl Write,
    grid: &MonthGrid,
    catalog: &C,
    today: NaiveDate,
    max_events_per_day: usize,
) -> fmt::Result {
    let days = grid.days(catalog, today);

    writeln!(out, "{}", grid.title())?;

    for name in WEEKDAY_SHORT_NAMES {
        write!(out, "{name:>CELL_WIDTH$}")?;
    }
    writeln!(out)?;

    for row in calendar::rows(&days) {
        for day in row {
            let marker = match (day.is_today, day.events.is_empty()) {
                (true, _) => '<',
                (false, false) => '*',
                (false, true) => ' ',
            };

            let label = if day.is_current_month {
                format!("{}{marker}", day.date.day())
            } else {
                format!("·{marker}")
            };

            write!(out, "{label:>CELL_WIDTH$}")?;
        }
        writeln!(out)?;
    }

    for day in days.iter().filter(|day| day.is_current_month && !day.events.is_empty()) {
        let (shown, more) = day.visible_events(max_events_per_day);

        writeln!(out, "\n{} {}", WEEKDAY_SHORT_NAMES[date::weekday_index(day.date) as usize], date::format_date(day.date))?;

        for event in shown {
            writeln!(out, "  {} {}", date::format_time_of_day(event.start_time), event.title)?;
        }

        if more > 0 {
            writeln!(out, "  +{more} more")?;
        }
    }

    Ok(())
}

pub fn week(out: &mut impl Write, program: &WeekProgram<'_>, today: NaiveDate) -> fmt::Result {
    writeln!(out, "This week: {}", program.range_label())?;
    writeln!(out, "{} {}", program.total_events(), plural(program.total_events()))?;

    for day in &program.days {
        let today_marker = if day.date == today { " (today)" } else { "" };

        writeln!(
            out,
            "\n{} {}{today_marker}: {} {}",
            day.day_name,
            day.date.format("%b %-d"),
            day.events.len(),
            plural(day.events.len()),
        )?;

        if day.events.is_empty() {
            writeln!(out, "  No events scheduled")?;
        }

        for event in &day.events {
            write_event(out, event)?;
        }
    }

    Ok(())
}

pub fn list<C: Catalog + ?Sized>(out: &mut impl Write, catalog: &C) -> fmt::Result {
    let groups = calendar::agenda(catalog);

    if groups.is_empty() {
        return writeln!(out, "No events yet");
    }

    for group in groups {
        writeln!(out, "{}", group.heading())?;

        for event in group.events {
            write_event(out, event)?;
            writeln!(out, "    {}", event.recurrence.text())?;
        }

        writeln!(out)?;
    }

    Ok(())
}

fn write_event(out: &mut impl Write, event: &Event) -> fmt::Result {
    writeln!(out, "  {} {} [{}]", event.time_range(), event.title, event.color)?;

    if !event.description().is_empty() {
        writeln!(out, "    {}", event.description())?;
    }

    Ok(())
}

const fn plural(count: usize) -> &'static str {
    if count == 1 { "event" } else { "events" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{EventDraft, EventId, Recurrence};

    fn catalog() -> Vec<Event> {
        let anchor = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        vec![EventDraft {
            recurrence: Recurrence::weekly([1, 4]),
            ..EventDraft::new("Team meeting", anchor)
        }
        .into_event(EventId::new())]
    }

    /// Fails every write after the first `budget` characters.
    struct Budget(usize);

    impl Write for Budget {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            self.0 = self.0.checked_sub(s.chars().count()).ok_or(fmt::Error)?;

            Ok(())
        }
    }

    #[test]
    fn month_lists_current_month_events() {
        let today = NaiveDate::from_ymd_opt(2024, 10, 16).unwrap();
        let mut out = String::new();
        month(&mut out, &MonthGrid::new(today).unwrap(), &catalog(), today, 3).unwrap();

        assert!(out.starts_with("October 2024\n"));
        assert!(out.contains("Mon 2024-10-14\n  9:00 AM Team meeting"));
        assert!(!out.contains("2024-10-15"));
    }

    #[test]
    fn week_marks_today() {
        let today = NaiveDate::from_ymd_opt(2024, 10, 16).unwrap();
        let catalog = catalog();
        let program = calendar::build_current_week(today, &catalog).unwrap();
        let mut out = String::new();
        week(&mut out, &program, today).unwrap();

        assert!(out.contains("This week: October 13 - October 19, 2024"));
        assert!(out.contains("2 events"));
        assert!(out.contains("Wednesday Oct 16 (today): 0 events"));
        assert!(out.contains("9:00 AM - 10:00 AM Team meeting"));
    }

    #[test]
    fn list_shows_recurrence() {
        let mut out = String::new();
        list(&mut out, &catalog()).unwrap();

        assert!(out.starts_with("Monday, January 1, 2024\n"));
        assert!(out.contains("Weekly on Mon, Thu"));

        let mut empty = String::new();
        list(&mut empty, &Vec::<Event>::new()).unwrap();
        assert_eq!(empty, "No events yet\n");
    }

    #[test]
    fn write_errors_are_returned() {
        let today = NaiveDate::from_ymd_opt(2024, 10, 16).unwrap();
        let catalog = catalog();
        let grid = MonthGrid::new(today).unwrap();
        let program = calendar::build_current_week(today, &catalog).unwrap();

        assert_eq!(month(&mut Budget(20), &grid, &catalog, today, 3), Err(fmt::Error));
        assert_eq!(week(&mut Budget(20), &program, today), Err(fmt::Error));
        assert_eq!(list(&mut Budget(20), &catalog), Err(fmt::Error));
        assert_eq!(list(&mut Budget(usize::MAX), &catalog), Ok(()));
    }
}
