use crate::config::{strip_base, with_base};

/// Vertical offset (px) past which the navigation bar is styled as scrolled.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Fraction of the hero that must remain on screen for the scroll hint to show.
pub const HERO_VISIBILITY_THRESHOLD: f64 = 0.4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    CaseStudy(String),
    Play,
    About,
    Contact,
}

impl Route {
    /// Parses a base-relative path. `None` for anything the site doesn't serve.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Self::Home),
            "/play" => Some(Self::Play),
            "/about" => Some(Self::About),
            "/contact" => Some(Self::Contact),
            _ => trimmed
                .strip_prefix("/case-study/")
                .filter(|id| !id.is_empty() && !id.contains('/'))
                .map(|id| Self::CaseStudy(id.to_string())),
        }
    }

    /// Path relative to the deployment base.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::CaseStudy(id) => format!("/case-study/{id}"),
            Self::Play => "/play".to_string(),
            Self::About => "/about".to_string(),
            Self::Contact => "/contact".to_string(),
        }
    }

    /// Link target including the deployment base.
    pub fn href(&self) -> String {
        with_base(&self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
}

impl MenuItem {
    pub fn href(&self) -> String {
        with_base(self.path)
    }

    /// Whether `pathname` (as the browser reports it, base included) is this
    /// item's page. Fragment links are never active.
    pub fn is_active(&self, pathname: &str) -> bool {
        if self.path.contains('#') {
            return false;
        }
        let current = strip_base(pathname).and_then(Route::from_path);
        current.is_some() && current == Route::from_path(self.path)
    }
}

pub static MENU_ITEMS: [MenuItem; 5] = [
    MenuItem {
        label: "Home",
        path: "/",
    },
    MenuItem {
        label: "Work",
        path: "/#work",
    },
    MenuItem {
        label: "Play",
        path: "/play",
    },
    MenuItem {
        label: "About",
        path: "/about",
    },
    MenuItem {
        label: "Contact",
        path: "/contact",
    },
];

/// Mobile menu overlay. Closed initially and after every navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn navigated(&mut self) {
        self.close();
    }
}

pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD
}

/// Whether the hero's "scroll to explore" hint should show, given the hero's
/// bounding-box bottom (relative to the viewport) and its height.
pub fn hero_indicator_visible(hero_bottom: f64, hero_height: f64) -> bool {
    if hero_height <= 0.0 {
        return false;
    }
    let ratio = (hero_bottom / hero_height).clamp(0.0, 1.0);
    ratio > HERO_VISIBILITY_THRESHOLD
}
