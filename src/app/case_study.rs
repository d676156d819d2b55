use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{components::*, hooks::use_params_map};

use super::not_found::set_not_found_status;
use super::projects::ProjectImage;
use super::reveal::Reveal;
use crate::content::{portfolio, Project};
use crate::nav::Route;

#[component]
pub fn CaseStudyPage() -> impl IntoView {
    let params = use_params_map();
    let project_id = move || params.get().get("id").unwrap_or_default();

    move || {
        let id = project_id();
        match portfolio().project(&id) {
            Ok(project) => view! { <CaseStudy project=project.clone() /> }.into_any(),
            Err(e) => {
                log::warn!("{e}");
                view! { <MissingProject id /> }.into_any()
            }
        }
    }
}

#[component]
fn CaseStudy(project: Project) -> impl IntoView {
    let next = portfolio().next_project(&project.id).cloned();
    let list = |items: &[String]| {
        items
            .iter()
            .map(|s| view! { <li>{s.clone()}</li> })
            .collect_view()
    };
    let links = [("Live Site", &project.live_url), ("Source", &project.github_url)]
        .into_iter()
        .filter_map(|(label, url)| {
            url.clone().map(|href| {
                view! {
                    <a href=href target="_blank" rel="noopener noreferrer" class="cta-button secondary">
                        {label}
                    </a>
                }
            })
        })
        .collect_view();

    view! {
        <Title text=project.title.clone() />
        <div class="case-study-page container">
            <div class="back-button-container">
                <A href=Route::Play.href() attr:class="back-button">
                    "← Back to Projects"
                </A>
            </div>
            <div class="case-study-hero">
                <div class="hero-content">
                    <span class="project-category">{project.category.clone()}</span>
                    <h1 class="heading-xl">{project.title.clone()}</h1>
                    <p class="hero-subtitle">{project.long_description.clone()}</p>
                    <div class="project-meta">
                        <MetaItem label="Year" value=project.year.clone() />
                        <MetaItem label="Duration" value=project.duration.clone() />
                        <MetaItem label="Role" value=project.role.clone() />
                    </div>
                    <div class="project-links">{links}</div>
                </div>
                <div class="hero-image">
                    <ProjectImage project=project.clone() />
                </div>
            </div>
            <Reveal class="project-details section-padding">
                <div class="details-grid">
                    <div class="detail-section">
                        <h2 class="heading-md">"The Challenge"</h2>
                        <ul>{list(&project.challenges)}</ul>
                    </div>
                    <div class="detail-section">
                        <h2 class="heading-md">"The Solution"</h2>
                        <ul>{list(&project.solutions)}</ul>
                    </div>
                    <div class="detail-section">
                        <h2 class="heading-md">"Technologies Used"</h2>
                        <div class="tech-tags">
                            {project
                                .technologies
                                .iter()
                                .map(|t| view! { <span class="tech-tag">{t.clone()}</span> })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="detail-section">
                        <h2 class="heading-md">"Results"</h2>
                        <ul class="results-list">{list(&project.results)}</ul>
                    </div>
                </div>
            </Reveal>
            {next
                .map(|next| {
                    view! {
                        <div class="next-project section-padding">
                            <h3 class="heading-sm">"Next Project"</h3>
                            <A href=next.href() attr:class="next-project-link">
                                {format!("{} →", next.title)}
                            </A>
                        </div>
                    }
                })}
        </div>
    }
}

#[component]
fn MetaItem(label: &'static str, value: String) -> impl IntoView {
    (!value.is_empty())
        .then(|| {
            view! {
                <div class="meta-item">
                    <span class="meta-label">{label}</span>
                    <span class="meta-value">{value}</span>
                </div>
            }
        })
}

#[component]
fn MissingProject(id: String) -> impl IntoView {
    set_not_found_status();
    view! {
        <Title text="Project Not Found" />
        <div class="case-study-page not-found container">
            <h1 class="heading-xl">"Project not found"</h1>
            <p class="hero-subtitle">{format!("There is no case study called \"{id}\".")}</p>
            <A href=Route::Play.href() attr:class="cta-button primary">
                "Browse all projects"
            </A>
        </div>
    }
}
