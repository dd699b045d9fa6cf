pub mod shift_calendar;

pub use shift_calendar::ShiftCalendarView;
