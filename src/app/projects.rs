use leptos::prelude::*;
use leptos_router::components::*;

use crate::content::Project;
use crate::gallery::Category;

#[component]
pub fn ProjectImage(project: Project) -> impl IntoView {
    match project.image() {
        Some(src) => view! { <img src=src.to_string() alt=project.title.clone() /> }.into_any(),
        None => view! {
            <div class="project-image-placeholder" aria-hidden="true">
                {project.title.chars().next().map(String::from).unwrap_or_default()}
            </div>
        }
        .into_any(),
    }
}

/// Card linking to the project's case study. `tag_limit` caps how many tags
/// are shown.
#[component]
pub fn ProjectCard(project: Project, #[prop(optional)] tag_limit: Option<usize>) -> impl IntoView {
    let tags = project
        .tags
        .iter()
        .take(tag_limit.unwrap_or(usize::MAX))
        .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
        .collect_view();
    view! {
        <A href=project.href() attr:class="project-card">
            <div class="project-image">
                <ProjectImage project=project.clone() />
                <div class="project-overlay">
                    <span class="project-year">{project.year.clone()}</span>
                    <div class="project-category-badge">{project.category.clone()}</div>
                </div>
            </div>
            <div class="project-content">
                <h3 class="project-title">{project.title.clone()}</h3>
                <p class="project-description">{project.description.clone()}</p>
                <div class="project-tags">{tags}</div>
            </div>
        </A>
    }
}

/// Row of filter buttons; the active one is highlighted.
#[component]
pub fn CategoryButtons(
    categories: Vec<Category>,
    active: RwSignal<Category>,
    #[prop(into)] class: String,
) -> impl IntoView {
    categories
        .into_iter()
        .map(|category| {
            let label = category.label().to_string();
            let is_active = {
                let category = category.clone();
                move || active.get() == category
            };
            let class = class.clone();
            view! {
                <button
                    class=move || {
                        if is_active() { format!("{class} active") } else { class.clone() }
                    }
                    on:click=move |_| active.set(category.clone())
                >
                    {label}
                </button>
            }
        })
        .collect_view()
}
