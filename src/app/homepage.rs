use leptos::{html, prelude::*};
use leptos_meta::Title;
use leptos_router::components::*;
use leptos_use::{use_element_bounding, UseElementBoundingReturn};

use super::projects::{CategoryButtons, ProjectCard};
use super::reveal::Reveal;
use crate::content::portfolio;
use crate::gallery::{categories, filter, Category};
use crate::nav::{hero_indicator_visible, Route};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <div class="home">
            <HeroSection />
            <section id="work">
                <Reveal>
                    <WorkSection />
                </Reveal>
            </section>
            <section>
                <Reveal>
                    <SkillsSection />
                </Reveal>
            </section>
        </div>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    let content = portfolio();
    let profile = &content.profile;
    let stats = &content.hero_stats;

    let hero = NodeRef::<html::Section>::new();
    let UseElementBoundingReturn { bottom, height, .. } = use_element_bounding(hero);
    let show_indicator = Memo::new(move |_| hero_indicator_visible(bottom.get(), height.get()));

    view! {
        <section node_ref=hero class="hero-section">
            <div class="hero-container">
                <div class="hero-content">
                    <h1 class="hero-title">
                        {profile
                            .title
                            .split_whitespace()
                            .map(|w| view! { <span class="hero-title-word">{w.to_string()}" "</span> })
                            .collect_view()}
                    </h1>
                    <p class="hero-subtitle">{profile.subtitle.clone()}</p>
                    <div class="hero-cta">
                        <a href="#work" class="cta-button primary">
                            "View My Work"
                        </a>
                        <A href=Route::Contact.href() attr:class="cta-button secondary">
                            "Get In Touch"
                        </A>
                    </div>
                    <div class="hero-stats">
                        <Stat value=stats.projects.clone() label="Projects" />
                        <Stat value=stats.experience.clone() label="Years Experience" />
                        <Stat value=stats.clients.clone() label="Happy Clients" />
                    </div>
                </div>
                <Show when=move || show_indicator.get()>
                    <div class="scroll-indicator">
                        <div class="scroll-mouse">
                            <div class="scroll-wheel"></div>
                        </div>
                        <span>"Scroll to explore"</span>
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn Stat(value: String, label: &'static str) -> impl IntoView {
    view! {
        <div class="stat">
            <span class="stat-number">{value}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

#[component]
fn WorkSection() -> impl IntoView {
    let projects = &portfolio().projects;
    view! {
        <div class="work-section section-padding">
            <div class="section-header">
                <h2 class="heading-lg">"Featured Work"</h2>
                <p class="section-description">
                    "A selection of projects across web development, automation and IoT"
                </p>
            </div>
            <div class="work-grid">
                {projects
                    .iter()
                    .map(|p| view! { <ProjectCard project=p.clone() tag_limit=2 /> })
                    .collect_view()}
            </div>
            <div class="work-cta">
                <A href=Route::Play.href() attr:class="cta-button primary">
                    "View All Projects"
                </A>
            </div>
        </div>
    }
}

#[component]
fn SkillsSection() -> impl IntoView {
    let skills = &portfolio().skills;
    let active = RwSignal::new(Category::All);
    let visible = Memo::new(move |_| {
        filter(skills, &active.get())
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });

    view! {
        <div class="skills-section section-padding">
            <div class="section-header">
                <h2 class="heading-lg">"Skills & Expertise"</h2>
                <p class="section-description">
                    "A diverse skill set spanning design, development, and emerging technologies"
                </p>
            </div>
            <div class="skills-categories">
                <CategoryButtons categories=categories(skills) active class="category-filter" />
            </div>
            <div class="skills-grid">
                <For each=move || visible.get() key=|skill| skill.name.clone() let:skill>
                    <div class="skill-card">
                        <div class="skill-header">
                            <div class="skill-icon">{skill.icon.clone()}</div>
                            <div class="skill-info">
                                <h3 class="skill-name">{skill.name.clone()}</h3>
                                <span class="skill-category">{skill.category.clone()}</span>
                            </div>
                        </div>
                        <div
                            class="skill-level"
                            role="meter"
                            aria-valuemin="0"
                            aria-valuemax="100"
                            aria-valuenow=skill.level().to_string()
                        >
                            <div
                                class="skill-level-bar"
                                style=format!("width: {}%", skill.level())
                            ></div>
                        </div>
                    </div>
                </For>
            </div>
            <div class="skills-cta">
                <h3 class="cta-title">"Interested in working together?"</h3>
                <p class="cta-description">
                    "Let's discuss how my skills and experience can contribute to your next project."
                </p>
                <div class="cta-buttons">
                    <A href=Route::Contact.href() attr:class="cta-button primary">
                        "Get In Touch"
                    </A>
                    <A href=Route::About.href() attr:class="cta-button secondary">
                        "Learn More About Me"
                    </A>
                </div>
            </div>
        </div>
    }
}
