use std::rc::Rc;

use shared::calendar::CalendarNav;
use shared::ScheduleData;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils;

/// Outcome of the joined triple fetch. Loading, ready, and failure are
/// rendered distinctly; a failed load carries its reason.
#[derive(Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Ready(ScheduleData),
    Error(String),
}

/// Navigation transitions. All of them are synchronous pure updates that
/// never fail.
pub enum NavAction {
    Previous,
    Next,
    Today,
    ToggleViewMode,
}

#[derive(PartialEq)]
struct NavState(CalendarNav);

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: NavAction) -> Rc<Self> {
        let nav = self.0;
        Rc::new(NavState(match action {
            NavAction::Previous => nav.previous(),
            NavAction::Next => nav.next(),
            NavAction::Today => nav.today(date_utils::today()),
            NavAction::ToggleViewMode => nav.toggle_view_mode(),
        }))
    }
}

#[derive(Clone)]
pub struct ShiftCalendarState {
    pub nav: CalendarNav,
    pub data: FetchState,
}

#[derive(Clone)]
pub struct ShiftCalendarActions {
    pub previous: Callback<MouseEvent>,
    pub next: Callback<MouseEvent>,
    pub today: Callback<MouseEvent>,
    pub toggle_view_mode: Callback<MouseEvent>,
}

pub struct UseShiftCalendarResult {
    pub state: ShiftCalendarState,
    pub actions: ShiftCalendarActions,
}

/// Calendar state and data loading for the shift schedule view.
///
/// Navigation is purely local; only a change of `reload_key` re-issues
/// the three fetches. The fetches run concurrently and the grid stays in
/// `Loading` until all of them settle. Each reload bumps a generation
/// counter and completions tagged with an older generation are discarded,
/// so an overlapping reload can never apply stale data over fresh data.
#[hook]
pub fn use_shift_calendar(api_client: &ApiClient, reload_key: u32) -> UseShiftCalendarResult {
    let nav = use_reducer(|| NavState(CalendarNav::new(date_utils::today())));
    let data = use_state(|| FetchState::Loading);
    let generation = use_mut_ref(|| 0u64);

    {
        let data = data.clone();
        let generation = generation.clone();
        let api_client = api_client.clone();

        use_effect_with(reload_key, move |_| {
            let token = {
                let mut latest = generation.borrow_mut();
                *latest += 1;
                *latest
            };
            data.set(FetchState::Loading);

            spawn_local(async move {
                let (staff, shifts, assignments) = futures::join!(
                    api_client.get_staff(),
                    api_client.get_shifts(),
                    api_client.get_staff_shifts(),
                );

                if *generation.borrow() != token {
                    gloo::console::log!(format!(
                        "Discarding stale schedule responses from reload {}",
                        token
                    ));
                    return;
                }

                match (staff, shifts, assignments) {
                    (Ok(staff), Ok(shifts), Ok(assignments)) => {
                        data.set(FetchState::Ready(ScheduleData { staff, shifts, assignments }));
                    }
                    (staff, shifts, assignments) => {
                        let reason = [
                            staff.err().map(|e| e.to_string()),
                            shifts.err().map(|e| e.to_string()),
                            assignments.err().map(|e| e.to_string()),
                        ]
                        .into_iter()
                        .flatten()
                        .collect::<Vec<_>>()
                        .join("; ");
                        gloo::console::error!(format!("Failed to load schedule data: {}", reason));
                        data.set(FetchState::Error(reason));
                    }
                }
            });
            || ()
        });
    }

    let previous = {
        let nav = nav.dispatcher();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::Previous))
    };
    let next = {
        let nav = nav.dispatcher();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::Next))
    };
    let today = {
        let nav = nav.dispatcher();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::Today))
    };
    let toggle_view_mode = {
        let nav = nav.dispatcher();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::ToggleViewMode))
    };

    let actions = ShiftCalendarActions { previous, next, today, toggle_view_mode };

    UseShiftCalendarResult {
        state: ShiftCalendarState { nav: nav.0, data: (*data).clone() },
        actions,
    }
}
