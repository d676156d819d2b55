//! Build-time settings. The server address and reload port live in
//! `[package.metadata.leptos]` and are read by `get_configuration`.

/// Sub-path the site is deployed under. Override at compile time with
/// `PORTFOLIO_BASE_PATH` (an empty value deploys at the domain root).
pub const BASE_PATH: &str = match option_env!("PORTFOLIO_BASE_PATH") {
    Some(p) => p,
    None => "/portfolio",
};

pub const SITE_TITLE: &str = "Portfolio";

pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// `path` under the deployment base. Every internal link goes through this;
/// the router resolves absolute hrefs as-is.
pub fn with_base(path: &str) -> String {
    join_base(BASE_PATH, path)
}

/// The base-relative part of a browser pathname, or `None` when it lies
/// outside the deployment base.
pub fn strip_base(pathname: &str) -> Option<&str> {
    strip_prefix_base(BASE_PATH, pathname)
}

fn join_base(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

fn strip_prefix_base<'a>(base: &str, pathname: &'a str) -> Option<&'a str> {
    match pathname.strip_prefix(base.trim_end_matches('/'))? {
        "" => Some("/"),
        rest if rest.starts_with('/') => Some(rest),
        _ => None,
    }
}

/// Human readable build date, e.g. `Oct 16, 2026`.
pub fn build_date() -> Option<String> {
    chrono::DateTime::parse_from_rfc3339(BUILD_TIME)
        .ok()
        .map(|dt| dt.format("%b %-d, %Y").to_string())
}
