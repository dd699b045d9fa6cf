use serde::{Deserialize, Serialize};

pub mod calendar;

/// A staff member as returned by `GET /api/admin/getStaff`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub id: i64,
    pub name: String,
}

/// A shift definition as returned by `GET /api/shifts`.
///
/// Times are opaque `HH:MM` strings and are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: i64,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
}

/// A staff-to-shift assignment on a specific date, as returned by
/// `GET /api/staff-shifts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    pub id: i64,
    pub staff_id: i64,
    pub shift_id: i64,
    /// Calendar date key, `YYYY-MM-DD`.
    pub date: String,
    /// Per-assignment override; falls back to the shift's default when absent.
    #[serde(default)]
    pub start_time: Option<String>,
    /// Per-assignment override; falls back to the shift's default when absent.
    #[serde(default)]
    pub end_time: Option<String>,
}

/// Fallback display name for an assignment whose staff id is unknown.
pub const STAFF_PLACEHOLDER: &str = "Staff";
/// Fallback display name for an assignment whose shift id is unknown.
pub const SHIFT_PLACEHOLDER: &str = "Shift";

/// An assignment resolved for display: names and times looked up against
/// the fetched staff/shift sets, with placeholder degradation for unknown
/// ids and per-assignment time overrides applied.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentView {
    pub id: i64,
    pub staff_name: String,
    pub shift_name: String,
    pub start_time: String,
    pub end_time: String,
    /// Stable presentational color class, see [`calendar::shift_color`].
    pub color: &'static str,
}

impl AssignmentView {
    /// Tooltip text, e.g. `"Alice: Evening (17:00 - 23:00)"`.
    pub fn tooltip(&self) -> String {
        format!(
            "{}: {} ({} - {})",
            self.staff_name, self.shift_name, self.start_time, self.end_time
        )
    }
}

/// The three read-only data sets the calendar renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleData {
    pub staff: Vec<Staff>,
    pub shifts: Vec<Shift>,
    pub assignments: Vec<ShiftAssignment>,
}

impl ScheduleData {
    pub fn staff_by_id(&self, id: i64) -> Option<&Staff> {
        self.staff.iter().find(|s| s.id == id)
    }

    pub fn shift_by_id(&self, id: i64) -> Option<&Shift> {
        self.shifts.iter().find(|s| s.id == id)
    }

    /// All assignments whose date equals the given canonical date key.
    ///
    /// Assignments dated outside the current grid simply never match a
    /// cell; that is not an error.
    pub fn assignments_on<'a>(&'a self, date_key: &str) -> Vec<&'a ShiftAssignment> {
        self.assignments.iter().filter(|a| a.date == date_key).collect()
    }

    /// Resolve one assignment for display. Unknown staff/shift ids degrade
    /// to placeholder records with blank times rather than failing.
    pub fn resolve(&self, assignment: &ShiftAssignment) -> AssignmentView {
        let staff = self.staff_by_id(assignment.staff_id);
        let shift = self.shift_by_id(assignment.shift_id);

        let start_time = assignment
            .start_time
            .clone()
            .or_else(|| shift.map(|s| s.start_time.clone()))
            .unwrap_or_default();
        let end_time = assignment
            .end_time
            .clone()
            .or_else(|| shift.map(|s| s.end_time.clone()))
            .unwrap_or_default();

        AssignmentView {
            id: assignment.id,
            staff_name: staff
                .map(|s| s.name.clone())
                .unwrap_or_else(|| STAFF_PLACEHOLDER.to_string()),
            shift_name: shift
                .map(|s| s.name.clone())
                .unwrap_or_else(|| SHIFT_PLACEHOLDER.to_string()),
            start_time,
            end_time,
            color: calendar::shift_color(assignment.shift_id),
        }
    }

    /// Resolved assignments for one day cell, in fetch order.
    pub fn views_on(&self, date_key: &str) -> Vec<AssignmentView> {
        self.assignments_on(date_key)
            .into_iter()
            .map(|a| self.resolve(a))
            .collect()
    }
}
