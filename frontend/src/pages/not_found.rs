use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found">
            <div class="container">
                <h1>{"404"}</h1>
                <p>{"This page doesn't exist."}</p>
                <Link<Route> to={Route::Home} classes="btn btn-primary">
                    {"Back to home"}
                </Link<Route>>
            </div>
        </section>
    }
}
