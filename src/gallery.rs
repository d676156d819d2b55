use std::fmt;

pub const ALL_LABEL: &str = "All";

/// Anything that can be sorted into a filter bucket by its category label.
pub trait Categorized {
    fn category(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    pub fn from_label(label: &str) -> Self {
        if label == ALL_LABEL {
            Self::All
        } else {
            Self::Named(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_LABEL,
            Self::Named(s) => s,
        }
    }

    pub fn matches<T: Categorized + ?Sized>(&self, item: &T) -> bool {
        match self {
            Self::All => true,
            Self::Named(s) => item.category() == s,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::from_label(value)
    }
}

/// The filter buttons for a collection: `All` first, then every distinct
/// category in order of first appearance.
pub fn categories<T: Categorized>(items: &[T]) -> Vec<Category> {
    let mut out = vec![Category::All];
    for item in items {
        let c = item.category();
        if !out.iter().any(|existing| existing.label() == c) {
            out.push(Category::Named(c.to_string()));
        }
    }
    out
}

/// Stable filter: keeps source order, `All` passes everything through.
pub fn filter<'a, T: Categorized>(items: &'a [T], selected: &Category) -> Vec<&'a T> {
    items.iter().filter(|item| selected.matches(*item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        name: &'static str,
        category: &'static str,
    }

    impl Categorized for Item {
        fn category(&self) -> &str {
            self.category
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            Item {
                name: "P1",
                category: "AR/VR",
            },
            Item {
                name: "P2",
                category: "Web Development",
            },
            Item {
                name: "P3",
                category: "AR/VR",
            },
        ]
    }

    fn names(items: &[&Item]) -> Vec<&'static str> {
        items.iter().map(|i| i.name).collect()
    }

    #[test]
    fn test_filter_by_category() {
        let items = sample();
        let filtered = filter(&items, &Category::from_label("AR/VR"));
        assert_eq!(names(&filtered), vec!["P1", "P3"]);
        assert!(filtered.iter().all(|i| i.category == "AR/VR"));

        let filtered = filter(&items, &"Web Development".into());
        assert_eq!(names(&filtered), vec!["P2"]);
    }

    #[test]
    fn test_filter_all_is_identity() {
        let items = sample();
        let filtered = filter(&items, &Category::All);
        assert_eq!(filtered.len(), items.len());
        assert_eq!(names(&filtered), vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn test_filter_no_matches() {
        let items = sample();
        assert!(filter(&items, &Category::from_label("Design")).is_empty());
        assert!(filter::<Item>(&[], &Category::All).is_empty());
    }

    #[test]
    fn test_categories_in_source_order() {
        let items = sample();
        let cats = categories(&items);
        let labels: Vec<&str> = cats.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["All", "AR/VR", "Web Development"]);
    }

    #[test]
    fn test_every_listed_category_is_nonempty() {
        let items = sample();
        for c in categories(&items) {
            let filtered = filter(&items, &c);
            assert!(!filtered.is_empty());
            assert!(filtered.iter().all(|i| c.matches(*i)));
        }
    }

    #[test]
    fn test_sentinel_label() {
        assert_eq!(Category::from_label("All"), Category::All);
        assert_eq!(Category::All.to_string(), "All");
        assert_eq!(
            Category::from_label("IoT"),
            Category::Named("IoT".to_string())
        );
    }
}
