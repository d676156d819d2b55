use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{components::*, hooks::use_location};

use crate::nav::Route;

/// Marks the server response as 404. No-op in the browser.
pub fn set_not_found_status() {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    set_not_found_status();
    let pathname = use_location().pathname;
    view! {
        <Title text="Page Not Found" />
        <div class="not-found container section-padding">
            <h1 class="heading-xl">"404"</h1>
            <p class="hero-subtitle">
                "Nothing lives at " <code>{move || pathname.get()}</code> "."
            </p>
            <A href=Route::Home.href() attr:class="cta-button primary">
                "Take me home"
            </A>
        </div>
    }
}
