use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }

    pub fn next_label(self) -> String {
        format!("Switch to {} theme", self.toggled())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn test_toggle_alternates() {
        let t = Theme::default();
        assert_eq!(t.toggled(), Theme::Light);
        assert_eq!(t.toggled().toggled(), t);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);

        let mut seen = Vec::new();
        let mut cur = t;
        for _ in 0..4 {
            cur = cur.toggled();
            seen.push(cur);
        }
        assert_eq!(
            seen,
            vec![Theme::Light, Theme::Dark, Theme::Light, Theme::Dark]
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!(Theme::Dark.next_label(), "Switch to light theme");
        assert_eq!(Theme::Light.next_label(), "Switch to dark theme");
    }
}
