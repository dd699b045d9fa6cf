pub mod use_shift_calendar;

pub use use_shift_calendar::use_shift_calendar;
