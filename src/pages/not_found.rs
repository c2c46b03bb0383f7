//! Catch-all page for paths missing from the route table.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::HOME_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404 - Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href=HOME_PATH>"Go back to Home"</A>
        </div>
    }
}
