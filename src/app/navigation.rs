use leptos::{ev::MouseEvent, prelude::*};
use leptos_router::{components::*, hooks::use_location};
use leptos_use::use_window_scroll;

use crate::config::SITE_TITLE;
use crate::nav::{is_scrolled, MenuState, Route, MENU_ITEMS};

#[component]
pub fn Navigation() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    // listener is removed with this component's owner
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| is_scrolled(scroll_y.get()));
    let pathname = use_location().pathname;

    // any completed navigation, not just clicks on our own links, closes the menu
    Effect::watch(
        move || pathname.track(),
        move |_, _, _| menu.update(|m| m.navigated()),
        false,
    );

    let on_link = move |_: MouseEvent| menu.update(|m| m.navigated());

    let links = move |class: &'static str| {
        MENU_ITEMS
            .iter()
            .map(move |&item| {
                let is_active = move || item.is_active(&pathname.get());
                view! {
                    <A
                        href=item.href()
                        on:click=on_link
                        attr:class=move || {
                            if is_active() { format!("{class} active") } else { class.to_string() }
                        }
                    >
                        {item.label}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || if scrolled.get() { "navigation scrolled" } else { "navigation" }>
            <div class="nav-container">
                <A href=Route::Home.href() on:click=on_link attr:class="logo">
                    {SITE_TITLE}
                </A>
                <div class="nav-menu desktop-menu">{links("nav-link")}</div>
                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| menu.update(|m| m.toggle())
                >
                    <span class=move || {
                        if menu.get().is_open() { "hamburger open" } else { "hamburger" }
                    }>
                        <span></span>
                        <span></span>
                        <span></span>
                    </span>
                </button>
            </div>
        </nav>
        <Show when=move || menu.get().is_open()>
            <div class="mobile-menu-overlay" on:click=move |_| menu.update(|m| m.close())>
                <div class="mobile-menu" on:click=|ev| ev.stop_propagation()>
                    <div class="mobile-menu-content">{links("mobile-nav-link")}</div>
                </div>
            </div>
        </Show>
    }
}
