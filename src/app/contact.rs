use leptos::prelude::*;
use leptos_meta::Title;

use crate::contact::{ContactError, ContactField, ContactForm};
use crate::content::portfolio;

#[derive(Debug, Clone, PartialEq)]
enum FormStatus {
    Editing,
    Invalid(ContactError),
    Sent,
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let profile = &portfolio().profile;
    let form = RwSignal::new(ContactForm::default());
    let status = RwSignal::new(FormStatus::Editing);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = form.with_untracked(ContactForm::submit);
        match result {
            Ok(()) => {
                form.set(ContactForm::default());
                status.set(FormStatus::Sent);
            }
            Err(e) => status.set(FormStatus::Invalid(e)),
        }
    };

    view! {
        <Title text="Contact" />
        <div class="contact-page container">
            <div class="contact-content section-padding">
                <div class="contact-hero">
                    <h1 class="heading-xl">"Let's Create Together"</h1>
                    <p class="hero-subtitle">
                        "Have a project in mind? I'd love to hear about it and explore how we can bring your vision to life."
                    </p>
                </div>
                <div class="contact-grid">
                    <div class="contact-form-section">
                        <form class="contact-form" on:submit=on_submit>
                            <Field form status field=ContactField::Name input_type="text" />
                            <Field form status field=ContactField::Email input_type="email" />
                            <Field form status field=ContactField::Subject input_type="text" />
                            <div class="form-group">
                                <label for="message">{ContactField::Message.label()}</label>
                                <textarea
                                    id="message"
                                    name="message"
                                    rows="5"
                                    required=true
                                    prop:value=move || form.with(|f| f.message.clone())
                                    on:input=move |ev| {
                                        form.update(|f| f.set(ContactField::Message, event_target_value(&ev)));
                                        status.set(FormStatus::Editing);
                                    }
                                ></textarea>
                            </div>
                            <button type="submit" class="cta-button primary">
                                "Send Message"
                            </button>
                            {move || match status.get() {
                                FormStatus::Editing => None,
                                FormStatus::Invalid(e) => {
                                    Some(view! { <p class="form-error" role="alert">{e.to_string()}</p> }.into_any())
                                }
                                FormStatus::Sent => {
                                    Some(view! { <p class="form-success" role="status">"Thanks! Your message has been received."</p> }.into_any())
                                }
                            }}
                        </form>
                    </div>
                    <div class="contact-info">
                        <div class="contact-card">
                            <h3>"Get In Touch"</h3>
                            <p>
                                "I'm always interested in new opportunities and exciting projects. Let's discuss how we can work together."
                            </p>
                            <div class="contact-details">
                                <ContactItem icon="📧" value=profile.email.clone() />
                                <ContactItem icon="📱" value=profile.phone.clone() />
                                <ContactItem icon="📍" value=profile.location.clone() />
                            </div>
                            <div class="social-links">
                                <h4>"Follow Me"</h4>
                                <div class="social-icons">
                                    {profile
                                        .social_links
                                        .iter()
                                        .map(|(name, url)| {
                                            view! {
                                                <a href=url.to_string() target="_blank" rel="noopener noreferrer" class="social-link">
                                                    {name}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Field(
    form: RwSignal<ContactForm>,
    status: RwSignal<FormStatus>,
    field: ContactField,
    input_type: &'static str,
) -> impl IntoView {
    let id = field.label().to_lowercase();
    view! {
        <div class="form-group">
            <label for=id.clone()>{field.label()}</label>
            <input
                type=input_type
                id=id.clone()
                name=id
                required=true
                prop:value=move || form.with(|f| f.get(field).to_string())
                on:input=move |ev| {
                    form.update(|f| f.set(field, event_target_value(&ev)));
                    status.set(FormStatus::Editing);
                }
            />
        </div>
    }
}

#[component]
fn ContactItem(icon: &'static str, value: String) -> impl IntoView {
    (!value.is_empty())
        .then(|| {
            view! {
                <div class="contact-item">
                    <span class="contact-icon">{icon}</span>
                    <span>{value}</span>
                </div>
            }
        })
}
