use leptos::prelude::*;

use crate::theme::Theme;

/// Installs the site-wide theme signal. Call once at the app root.
pub fn provide_theme() -> RwSignal<Theme> {
    let theme = RwSignal::new(Theme::default());
    provide_context(theme);
    theme
}

pub fn use_theme() -> RwSignal<Theme> {
    expect_context::<RwSignal<Theme>>()
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    let toggle = move |_| {
        theme.update(|t| *t = t.toggled());
        log::debug!("theme switched to {}", theme.get_untracked());
    };

    view! {
        <button
            class="theme-toggle"
            on:click=toggle
            aria-label=move || theme.get().next_label()
        >
            <span class=move || {
                format!("theme-toggle-icon theme-toggle-icon-{}", theme.get())
            }>{move || theme.get().icon()}</span>
        </button>
    }
}
