mod about;
mod case_study;
mod contact;
mod homepage;
mod navigation;
mod not_found;
mod play;
mod projects;
mod reveal;
mod theme_toggle;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::{build_date, BASE_PATH, SITE_TITLE};
use crate::theme::Theme;

use about::AboutPage;
use case_study::CaseStudyPage;
use contact::ContactPage;
use homepage::HomePage;
use navigation::Navigation;
use not_found::NotFound;
use play::PlayPage;
use theme_toggle::{provide_theme, ThemeToggle};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_theme();

    view! {
        <Title formatter=|title| format!("{SITE_TITLE} - {title}") />

        <Router base=BASE_PATH>
            <div class=move || {
                let current: Theme = theme.get();
                format!("app theme-{current}")
            }>
                <Navigation />
                <ThemeToggle />
                <main class="flex flex-col flex-grow w-full">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/case-study/:id") view=CaseStudyPage />
                        <Route path=path!("/play") view=PlayPage />
                        <Route path=path!("/about") view=AboutPage />
                        <Route path=path!("/contact") view=ContactPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer text-sm text-muted text-center py-8">
            {build_date().map(|d| format!("Last built {d}"))}
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use http::StatusCode;
    use leptos_axum::ResponseOptions;
    use leptos_router::location::RequestUrl;

    use super::play::ProjectGrid;
    use super::*;
    use crate::config::with_base;
    use crate::content::portfolio;
    use crate::gallery::Category;

    /// Server-renders `view` for a request to `path`, returning the markup and
    /// the status code the page set, if any.
    fn render<V: IntoView + 'static>(
        path: &str,
        view: impl FnOnce() -> V,
    ) -> (String, Option<StatusCode>) {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(RequestUrl::new(path));
            let (meta, _output) = ServerMetaContext::new();
            provide_context(meta);
            let response = ResponseOptions::default();
            provide_context(response.clone());
            let html = view().to_html();
            let status = response.0.read().status;
            (html, status)
        })
    }

    fn render_app(path: &str) -> (String, Option<StatusCode>) {
        render(&with_base(path), || view! { <App /> })
    }

    fn hrefs(html: &str) -> Vec<&str> {
        html.split("href=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }

    #[test]
    fn test_internal_links_stay_under_base() {
        let (html, status) = render_app("/");
        assert_eq!(status, None);

        let base = with_base("/");
        let links = hrefs(&html);
        let internal: Vec<_> = links.iter().filter(|h| h.starts_with('/')).collect();
        assert!(!internal.is_empty());
        for href in internal {
            assert!(href.starts_with(&base), "{href} is outside {base}");
        }
        for expected in [with_base("/play"), with_base("/about"), with_base("/contact")] {
            assert!(links.contains(&expected.as_str()), "missing link to {expected}");
        }
        let first = &portfolio().projects[0];
        assert!(links.contains(&first.href().as_str()));
    }

    #[test]
    fn test_pages_render_under_base() {
        for (path, marker) in [
            ("/play", "Playground"),
            ("/about", "about-page"),
            ("/contact", "contact-page"),
        ] {
            let (html, status) = render_app(path);
            assert_eq!(status, None, "{path}");
            assert!(!html.contains("Nothing lives at"), "{path} rendered not-found");
            assert!(html.contains(marker), "{path} is missing {marker}");
        }
    }

    #[test]
    fn test_current_page_is_highlighted() {
        let (html, _) = render_app("/play");
        assert!(html.contains("nav-link active"));
        assert_eq!(html.matches("nav-link active").count(), 1);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let (html, status) = render_app("/nowhere");
        assert_eq!(status, Some(StatusCode::NOT_FOUND));
        assert!(html.contains("Nothing lives at"));
    }

    #[test]
    fn test_case_study_by_id() {
        let first = &portfolio().projects[0];
        let (html, status) = render_app(&format!("/case-study/{}", first.id));
        assert_eq!(status, None);
        assert!(html.contains("The Challenge"));
        assert!(!html.contains("Project not found"));
    }

    #[test]
    fn test_missing_case_study_is_not_found() {
        let (html, status) = render_app("/case-study/nope");
        assert_eq!(status, Some(StatusCode::NOT_FOUND));
        assert!(html.contains("Project not found"));
        assert!(hrefs(&html).contains(&with_base("/play").as_str()));
    }

    #[test]
    fn test_gallery_empty_category_shows_notice() {
        let projects = portfolio().projects.as_slice();
        let notice = "No projects found for this category.";

        let (html, _) = render(&with_base("/play"), || {
            let active = RwSignal::new(Category::from("Design"));
            view! {
                <Router base=BASE_PATH>
                    <ProjectGrid projects active />
                </Router>
            }
        });
        assert!(html.contains(notice));
        assert!(!html.contains("project-card"));

        let (html, _) = render(&with_base("/play"), || {
            let active = RwSignal::new(Category::All);
            view! {
                <Router base=BASE_PATH>
                    <ProjectGrid projects active />
                </Router>
            }
        });
        assert!(!html.contains(notice));
        assert_eq!(html.matches("class=\"project-card\"").count(), projects.len());
    }
}
