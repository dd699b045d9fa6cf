use chrono::{Datelike, NaiveDate};

/// Today's date from the browser clock, local calendar (not UTC-shifted).
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1, // JavaScript months are 0-indexed
        now.get_date(),
    )
    .unwrap_or_default()
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "Invalid",
    }
}

pub fn short_month_name(month: u32) -> &'static str {
    match month {
        1 => "Jan", 2 => "Feb", 3 => "Mar", 4 => "Apr",
        5 => "May", 6 => "Jun", 7 => "Jul", 8 => "Aug",
        9 => "Sep", 10 => "Oct", 11 => "Nov", 12 => "Dec",
        _ => "Invalid",
    }
}

/// Month-view toolbar title, e.g. "March 2024".
pub fn format_month_year(date: NaiveDate) -> String {
    format!("{} {}", month_name(date.month()), date.year())
}

/// Week-view cell endpoint, e.g. "Feb 26".
pub fn format_short(date: NaiveDate) -> String {
    format!("{} {}", short_month_name(date.month()), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_year_title() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(format_month_year(date), "March 2024");
    }

    #[test]
    fn short_date_label() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 26).unwrap();
        assert_eq!(format_short(date), "Feb 26");
    }
}
