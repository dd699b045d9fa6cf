use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::ShiftCalendarView;
use services::api::ApiClient;
use services::session::SessionStore;

#[function_component(App)]
fn app() -> Html {
    // Any change of this key re-fetches the schedule data.
    let reload_key = use_state(|| 0u32);

    let api_client = use_memo((), |_| ApiClient::new(SessionStore::new()));

    let on_reload = {
        let reload_key = reload_key.clone();
        Callback::from(move |_: MouseEvent| reload_key.set(*reload_key + 1))
    };

    html! {
        <>
            <header class="header">
                <h1>{"Staff Schedule"}</h1>
                <button class="toolbar-btn" onclick={on_reload}>{"Reload"}</button>
            </header>

            <main class="main">
                <ShiftCalendarView
                    api_client={(*api_client).clone()}
                    reload_key={*reload_key}
                />
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
