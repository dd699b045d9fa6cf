//! Pure calendar-grid logic for the shift schedule view.
//!
//! Everything here is plain date arithmetic on `chrono::NaiveDate` so the
//! UI layer only handles presentation. The grid is recomputed on every
//! render from the navigation state; nothing in this module holds hidden
//! state or touches the browser.

use chrono::{Datelike, Duration, Months, NaiveDate};

/// Week starts on Monday throughout: a month grid is 6 rows of 7 days.
pub const MONTH_GRID_LEN: usize = 42;
pub const WEEK_GRID_LEN: usize = 7;

/// Monday-first weekday labels for the grid header row.
pub const DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// CSS color classes assigned to shifts, keyed by `shift_id % 7`.
///
/// The mapping is purely presentational and stable across renders and
/// reloads; with more than seven shifts, collisions are expected.
pub const SHIFT_PALETTE: [&str; 7] = [
    "shift-blue",
    "shift-green",
    "shift-yellow",
    "shift-purple",
    "shift-pink",
    "shift-indigo",
    "shift-red",
];

/// Color class for a shift id. Same id always yields the same entry.
pub fn shift_color(shift_id: i64) -> &'static str {
    SHIFT_PALETTE[shift_id.rem_euclid(SHIFT_PALETTE.len() as i64) as usize]
}

/// Which grid shape the calendar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Week,
    Month,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Week => ViewMode::Month,
            ViewMode::Month => ViewMode::Week,
        }
    }
}

/// Canonical date key: zero-padded `YYYY-MM-DD`, local calendar.
///
/// Used both for equality against assignment records and as the list key
/// of a rendered cell. Two dates are the same day iff their keys compare
/// equal.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// One rendered slot of the grid, recomputed on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// False for the leading/trailing days of adjacent months that pad a
    /// month grid to its rectangle (dimmed styling).
    pub in_current_month: bool,
    pub is_today: bool,
}

impl DayCell {
    pub fn date_key(&self) -> String {
        date_key(self.date)
    }
}

/// The Monday on or before the given date.
fn week_start(date: NaiveDate) -> NaiveDate {
    // num_days_from_monday already remaps Sunday to 6.
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// The ordered dates a grid shows for a reference date: 42 consecutive
/// days from the Monday on or before the 1st of the month, or 7 from the
/// Monday of the reference week.
pub fn grid_days(reference: NaiveDate, mode: ViewMode) -> Vec<NaiveDate> {
    let (start, len) = match mode {
        ViewMode::Month => {
            let first = reference.with_day(1).unwrap_or(reference);
            (week_start(first), MONTH_GRID_LEN)
        }
        ViewMode::Week => (week_start(reference), WEEK_GRID_LEN),
    };
    start.iter_days().take(len).collect()
}

/// Grid cells with derived flags. `today` is injected so the computation
/// stays pure; the component passes the browser clock's date.
pub fn build_grid(reference: NaiveDate, mode: ViewMode, today: NaiveDate) -> Vec<DayCell> {
    grid_days(reference, mode)
        .into_iter()
        .map(|date| DayCell {
            date,
            in_current_month: date.month() == reference.month() && date.year() == reference.year(),
            is_today: date == today,
        })
        .collect()
}

/// The calendar's only persistent state: the anchor date plus the view
/// mode. Every transition is a pure, infallible update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarNav {
    pub reference: NaiveDate,
    pub mode: ViewMode,
}

impl CalendarNav {
    pub fn new(today: NaiveDate) -> Self {
        Self { reference: today, mode: ViewMode::Month }
    }

    /// Back one month (day-of-month clamped, e.g. Mar 31 -> Feb 29) or
    /// back seven days, depending on the mode.
    pub fn previous(self) -> Self {
        let reference = match self.mode {
            ViewMode::Month => self
                .reference
                .checked_sub_months(Months::new(1))
                .unwrap_or(self.reference),
            ViewMode::Week => self.reference - Duration::days(7),
        };
        Self { reference, ..self }
    }

    pub fn next(self) -> Self {
        let reference = match self.mode {
            ViewMode::Month => self
                .reference
                .checked_add_months(Months::new(1))
                .unwrap_or(self.reference),
            ViewMode::Week => self.reference + Duration::days(7),
        };
        Self { reference, ..self }
    }

    /// Jump back to the current date, whatever the mode.
    pub fn today(self, today: NaiveDate) -> Self {
        Self { reference: today, ..self }
    }

    /// Week <-> Month; the reference date is unchanged and the grid is
    /// simply recomputed for the new shape.
    pub fn toggle_view_mode(self) -> Self {
        Self { mode: self.mode.toggled(), ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn assert_consecutive(days: &[NaiveDate]) {
        for pair in days.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn month_grid_for_march_2024() {
        // 2024-03-01 is a Friday; the grid backs up to Monday Feb 26.
        let days = grid_days(d(2024, 3, 1), ViewMode::Month);
        assert_eq!(days.len(), MONTH_GRID_LEN);
        assert_eq!(days[0], d(2024, 2, 26));
        assert_eq!(*days.last().unwrap(), d(2024, 4, 7));
        assert_consecutive(&days);
    }

    #[test]
    fn week_grid_for_march_2024() {
        let days = grid_days(d(2024, 3, 1), ViewMode::Week);
        assert_eq!(days.len(), WEEK_GRID_LEN);
        assert_eq!(days[0], d(2024, 2, 26));
        assert_eq!(days[6], d(2024, 3, 3));
        assert_eq!(days[0].weekday(), chrono::Weekday::Mon);
        assert_consecutive(&days);
    }

    #[test]
    fn month_starting_on_monday_needs_no_padding() {
        // April 2024 starts on a Monday.
        let days = grid_days(d(2024, 4, 15), ViewMode::Month);
        assert_eq!(days[0], d(2024, 4, 1));
    }

    #[test]
    fn month_starting_on_sunday_backs_up_six_days() {
        // September 2024 starts on a Sunday.
        let days = grid_days(d(2024, 9, 1), ViewMode::Month);
        assert_eq!(days[0], d(2024, 8, 26));
        assert_eq!(days[0].weekday(), chrono::Weekday::Mon);
    }

    #[test]
    fn leap_february_is_covered_by_calendar_arithmetic() {
        let days = grid_days(d(2024, 2, 15), ViewMode::Month);
        assert!(days.contains(&d(2024, 2, 29)));
        assert_consecutive(&days);
    }

    #[test]
    fn grid_is_idempotent() {
        for mode in [ViewMode::Week, ViewMode::Month] {
            assert_eq!(grid_days(d(2024, 3, 1), mode), grid_days(d(2024, 3, 1), mode));
        }
    }

    #[test]
    fn grid_dates_are_distinct() {
        let days = grid_days(d(2024, 12, 31), ViewMode::Month);
        let mut deduped = days.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), days.len());
    }

    #[test]
    fn month_flags_mark_padding_days() {
        let cells = build_grid(d(2024, 3, 1), ViewMode::Month, d(2024, 3, 1));
        assert!(!cells[0].in_current_month); // Feb 26
        assert!(cells[4].in_current_month); // Mar 1
        assert!(cells[4].is_today);
        assert_eq!(cells[4].date_key(), "2024-03-01");
        assert_eq!(cells.iter().filter(|c| c.is_today).count(), 1);
    }

    #[test]
    fn navigation_rolls_over_year_boundaries() {
        let nav = CalendarNav { reference: d(2024, 12, 15), mode: ViewMode::Month };
        assert_eq!(nav.next().reference, d(2025, 1, 15));
        let nav = CalendarNav { reference: d(2024, 1, 15), mode: ViewMode::Month };
        assert_eq!(nav.previous().reference, d(2023, 12, 15));
    }

    #[test]
    fn month_navigation_clamps_day_of_month() {
        let nav = CalendarNav { reference: d(2024, 3, 31), mode: ViewMode::Month };
        assert_eq!(nav.previous().reference, d(2024, 2, 29));
        let nav = CalendarNav { reference: d(2024, 1, 31), mode: ViewMode::Month };
        assert_eq!(nav.next().reference, d(2024, 2, 29));
    }

    #[test]
    fn week_navigation_moves_seven_days() {
        let nav = CalendarNav { reference: d(2024, 3, 1), mode: ViewMode::Week };
        assert_eq!(nav.previous().reference, d(2024, 2, 23));
        assert_eq!(nav.next().reference, d(2024, 3, 8));
    }

    #[test]
    fn today_transition_always_lands_in_the_grid() {
        let today = d(2024, 7, 9);
        for mode in [ViewMode::Week, ViewMode::Month] {
            let nav = CalendarNav { reference: d(2019, 1, 1), mode }.today(today);
            assert_eq!(nav.mode, mode);
            let cells = build_grid(nav.reference, nav.mode, today);
            assert!(cells.iter().any(|c| c.is_today));
        }
    }

    #[test]
    fn toggling_view_mode_twice_restores_the_grid() {
        let nav = CalendarNav { reference: d(2024, 3, 1), mode: ViewMode::Month };
        let toggled = nav.toggle_view_mode();
        assert_eq!(toggled.mode, ViewMode::Week);
        assert_eq!(toggled.reference, nav.reference);
        let back = toggled.toggle_view_mode();
        assert_eq!(back, nav);
        assert_eq!(
            grid_days(back.reference, back.mode),
            grid_days(nav.reference, nav.mode)
        );
    }

    #[test]
    fn shift_colors_are_stable_and_wrap_at_seven() {
        assert_eq!(shift_color(3), shift_color(3));
        assert_eq!(shift_color(3), shift_color(10));
        assert_eq!(shift_color(3), shift_color(3 + 7 * 4));
        assert_eq!(shift_color(0), SHIFT_PALETTE[0]);
        assert_eq!(shift_color(6), SHIFT_PALETTE[6]);
        assert_eq!(shift_color(7), SHIFT_PALETTE[0]);
    }
}
