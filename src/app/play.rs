use leptos::prelude::*;
use leptos_meta::Title;

use super::projects::{CategoryButtons, ProjectCard};
use crate::content::{portfolio, Project};
use crate::gallery::{categories, filter, Category};

#[component]
pub fn PlayPage() -> impl IntoView {
    let projects = portfolio().projects.as_slice();
    let active = RwSignal::new(Category::All);

    view! {
        <Title text="Playground" />
        <div class="play-page container">
            <div class="play-content section-padding">
                <div class="play-hero">
                    <h1 class="heading-xl">"Playground"</h1>
                    <p class="hero-subtitle">
                        "Explore my creative experiments, side projects, and innovative solutions across various technologies and design disciplines."
                    </p>
                </div>
                <div class="filter-section">
                    <div class="filter-buttons">
                        <CategoryButtons categories=categories(projects) active class="filter-button" />
                    </div>
                </div>
                <ProjectGrid projects active />
            </div>
        </div>
    }
}

/// Projects matching the active category, or a notice when none do.
#[component]
pub fn ProjectGrid(projects: &'static [Project], active: RwSignal<Category>) -> impl IntoView {
    let filtered = Memo::new(move |_| {
        filter(projects, &active.get())
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });

    view! {
        <div class="projects-grid">
            <For each=move || filtered.get() key=|p| p.id.clone() let:project>
                <ProjectCard project />
            </For>
        </div>
        <Show when=move || filtered.with(Vec::is_empty)>
            <div class="no-projects">
                <p>"No projects found for this category."</p>
            </div>
        </Show>
    }
}
