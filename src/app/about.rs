use leptos::prelude::*;
use leptos_meta::Title;

use super::reveal::Reveal;
use crate::content::{portfolio, Education, Experience};

/// Achievements shown per timeline entry.
const ACHIEVEMENTS_SHOWN: usize = 2;

#[component]
pub fn AboutPage() -> impl IntoView {
    let content = portfolio();
    let profile = &content.profile;

    view! {
        <Title text="About" />
        <div class="about-page container">
            <div class="about-content section-padding">
                <div class="about-hero">
                    <h1 class="heading-xl">{format!("About {}", profile.first_name())}</h1>
                    <p class="hero-subtitle">{profile.title.clone()}</p>
                </div>
                <Reveal class="about-grid">
                    <div class="about-text">
                        <h2 class="heading-md">"My Journey"</h2>
                        {profile
                            .bio_paragraphs()
                            .map(|p| view! { <p>{p.to_string()}</p> })
                            .collect_view()}
                    </div>
                </Reveal>
                <Reveal class="experience-section">
                    <h2 class="heading-md">"Experience"</h2>
                    <div class="timeline">
                        {content
                            .experiences
                            .iter()
                            .map(|exp| view! { <TimelineItem exp=exp.clone() /> })
                            .collect_view()}
                    </div>
                </Reveal>
                <Reveal class="education-section">
                    <h2 class="heading-md">"Education"</h2>
                    {content
                        .education
                        .iter()
                        .map(|edu| view! { <EducationItem edu=edu.clone() /> })
                        .collect_view()}
                </Reveal>
                {(!content.certifications.is_empty())
                    .then(|| {
                        view! {
                            <Reveal class="certifications-section">
                                <h2 class="heading-md">"Publications & Certifications"</h2>
                                <ul class="certifications">
                                    {content
                                        .certifications
                                        .iter()
                                        .map(|c| {
                                            let name = match &c.credential_url {
                                                Some(url) => {
                                                    view! {
                                                        <a href=url.clone() target="_blank" rel="noopener noreferrer">
                                                            {c.name.clone()}
                                                        </a>
                                                    }
                                                        .into_any()
                                                }
                                                None => c.name.clone().into_any(),
                                            };
                                            view! {
                                                <li>
                                                    {name} <div class="text-muted">
                                                        {format!("{} • {}", c.issuer, c.date)}
                                                    </div>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </Reveal>
                        }
                    })}
            </div>
        </div>
    }
}

#[component]
fn TimelineItem(exp: Experience) -> impl IntoView {
    view! {
        <div class=if exp.current { "timeline-item current" } else { "timeline-item" }>
            <div class="timeline-date">{exp.period()}</div>
            <div class="timeline-content">
                <h3>{exp.title.clone()}</h3>
                <h4>{format!("{} • {}", exp.company, exp.location)}</h4>
                <p>{exp.description.clone()}</p>
                {(!exp.achievements.is_empty())
                    .then(|| {
                        view! {
                            <ul>
                                {exp
                                    .achievements
                                    .iter()
                                    .take(ACHIEVEMENTS_SHOWN)
                                    .map(|a| view! { <li>{a.clone()}</li> })
                                    .collect_view()}
                            </ul>
                        }
                    })}
                <div class="tech-tags">
                    {exp
                        .technologies
                        .iter()
                        .map(|t| view! { <span class="tech-tag">{t.clone()}</span> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn EducationItem(edu: Education) -> impl IntoView {
    let extras = edu
        .honors
        .iter()
        .chain(edu.relevant_coursework.iter())
        .map(|s| view! { <span class="tag">{s.clone()}</span> })
        .collect_view();
    view! {
        <div class="education-item">
            <h3>{edu.degree.clone()}</h3>
            <h4>{format!("{} • {}", edu.institution, edu.location)}</h4>
            <div class="timeline-date">
                {edu.graduation_date.clone()}
                {edu.gpa.clone().map(|gpa| format!(" • GPA {gpa}"))}
            </div>
            <div class="project-tags">{extras}</div>
        </div>
    }
}
