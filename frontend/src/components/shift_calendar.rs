use shared::calendar::{build_grid, DayCell, ViewMode, DAY_NAMES};
use shared::ScheduleData;
use yew::prelude::*;

use crate::hooks::use_shift_calendar::{use_shift_calendar, FetchState, UseShiftCalendarResult};
use crate::services::api::ApiClient;
use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct ShiftCalendarProps {
    pub api_client: ApiClient,
    /// Opaque reload trigger: any change re-fetches staff, shifts, and
    /// assignments.
    pub reload_key: u32,
}

/// Week/month calendar of staff-shift assignments with a legend of all
/// known shifts. Read-only; the grid is recomputed on every render from
/// the navigation state.
#[function_component(ShiftCalendarView)]
pub fn shift_calendar_view(props: &ShiftCalendarProps) -> Html {
    let UseShiftCalendarResult { state, actions } =
        use_shift_calendar(&props.api_client, props.reload_key);

    let data = match &state.data {
        FetchState::Loading => {
            return html! {
                <div class="calendar-loading">{"Loading calendar..."}</div>
            };
        }
        FetchState::Error(reason) => {
            return html! {
                <div class="calendar-error">
                    <div class="calendar-error-title">{"Failed to load schedule"}</div>
                    <div class="calendar-error-reason">{reason}</div>
                </div>
            };
        }
        FetchState::Ready(data) => data,
    };

    let nav = state.nav;
    let cells = build_grid(nav.reference, nav.mode, date_utils::today());

    let title = match nav.mode {
        ViewMode::Month => date_utils::format_month_year(nav.reference),
        ViewMode::Week => format!(
            "{} - {}",
            date_utils::format_short(cells[0].date),
            date_utils::format_short(cells[cells.len() - 1].date),
        ),
    };
    let toggle_label = match nav.mode {
        ViewMode::Month => "Week View",
        ViewMode::Week => "Month View",
    };
    let grid_class = match nav.mode {
        ViewMode::Month => "calendar-grid month",
        ViewMode::Week => "calendar-grid week",
    };

    html! {
        <section class="shift-calendar">
            <div class="calendar-toolbar">
                <button class="toolbar-btn" onclick={actions.today}>{"Today"}</button>
                <button class="toolbar-btn" onclick={actions.toggle_view_mode}>
                    {toggle_label}
                </button>
                <div class="calendar-nav">
                    <button class="nav-btn" onclick={actions.previous}>{"‹"}</button>
                    <div class="calendar-title">{title}</div>
                    <button class="nav-btn" onclick={actions.next}>{"›"}</button>
                </div>
            </div>

            <div class="calendar-weekdays">
                {for DAY_NAMES.iter().map(|day| html! {
                    <div key={*day} class="weekday">{*day}</div>
                })}
            </div>

            <div class={grid_class}>
                {for cells.iter().map(|cell| render_day_cell(cell, data))}
            </div>

            <div class="calendar-legend">
                <h2>{"Legend"}</h2>
                <div class="legend-entries">
                    {for data.shifts.iter().map(|shift| html! {
                        <div key={shift.id} class="legend-entry">
                            <div class={classes!("legend-swatch", shared::calendar::shift_color(shift.id))}></div>
                            <span>{format!("{} ({} - {})", shift.name, shift.start_time, shift.end_time)}</span>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}

fn render_day_cell(cell: &DayCell, data: &ScheduleData) -> Html {
    let date_key = cell.date_key();
    let views = data.views_on(&date_key);

    let cell_class = classes!(
        "day-cell",
        (!cell.in_current_month).then_some("outside-month"),
        cell.is_today.then_some("today"),
    );

    html! {
        <div key={date_key} class={cell_class}>
            <div class="day-number">{cell.date.format("%-d").to_string()}</div>
            <div class="day-assignments">
                {for views.iter().map(|view| html! {
                    <div key={view.id} class={classes!("shift-chip", view.color)} title={view.tooltip()}>
                        <div class="chip-staff">{&view.staff_name}</div>
                        <div class="chip-shift">{&view.shift_name}</div>
                        <div class="chip-times">
                            {format!("{} - {}", view.start_time, view.end_time)}
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}
