//! Static landing-page content. Copy lives in the translation tables; this
//! module only fixes ordering, layout hints and assets.

use strum::{EnumIter, IntoStaticStr};

/// In-page anchors of the landing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Section {
    Features,
    GettingStarted,
    Testimonials,
}

impl Section {
    /// Element id of the section.
    pub fn id(self) -> &'static str {
        self.into()
    }
}

/// One card of the features grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    /// Translation key under `features.items`
    pub key: &'static str,
    pub image: &'static str,
    /// Wide cards span seven of twelve columns and carry a larger title.
    pub wide: bool,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        key: "schedule",
        image: "/assets/schedule.png",
        wide: true,
    },
    Feature {
        key: "contacts",
        image: "/assets/contacts.png",
        wide: false,
    },
    Feature {
        key: "messaging",
        image: "/assets/messaging.png",
        wide: false,
    },
    Feature {
        key: "updates",
        image: "/assets/dashboard.png",
        wide: true,
    },
];

/// One onboarding step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Translation key under `how_it_works.steps`
    pub key: &'static str,
    pub image: &'static str,
}

pub const STEPS: [Step; 3] = [
    Step {
        key: "account",
        image: "/assets/signup.png",
    },
    Step {
        key: "timetable",
        image: "/assets/upload.png",
    },
    Step {
        key: "benefits",
        image: "/assets/contacts.png",
    },
];

impl Step {
    /// Two-digit label, e.g. `01`.
    pub fn number(index: usize) -> String {
        format!("{:02}", index + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    /// Translation key under `testimonials.items`
    pub key: &'static str,
    pub name: &'static str,
    pub avatar: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        key: "sarah",
        name: "Sarah J.",
        avatar: "https://picsum.photos/100/100?random=3",
    },
    Testimonial {
        key: "michael",
        name: "Michael O.",
        avatar: "https://picsum.photos/100/100?random=4",
    },
    Testimonial {
        key: "chidinma",
        name: "Chidinma A.",
        avatar: "https://picsum.photos/100/100?random=5",
    },
    Testimonial {
        key: "david",
        name: "David K.",
        avatar: "https://picsum.photos/100/100?random=6",
    },
];

/// Avatars stacked next to the active-user count in the footer.
pub const FOOTER_AVATARS: [&str; 3] = [
    "https://i.pravatar.cc/100?img=33",
    "https://i.pravatar.cc/100?img=47",
    "https://i.pravatar.cc/100?img=12",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    fn translated(path: &str) -> bool {
        let table: serde_json::Value =
            serde_json::from_str(include_str!("../translations/en.json")).unwrap();
        path.split('.')
            .try_fold(&table, |node, part| node.get(part))
            .is_some_and(serde_json::Value::is_string)
    }

    #[test]
    fn test_section_ids() {
        let ids: Vec<_> = Section::iter().map(Section::id).collect();
        assert_eq!(ids, vec!["features", "getting-started", "testimonials"]);
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(Step::number(0), "01");
        assert_eq!(Step::number(2), "03");
    }

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<_> = TESTIMONIALS.iter().map(|t| t.key).collect();
        assert_eq!(keys.len(), TESTIMONIALS.len());
        let keys: HashSet<_> = FEATURES.iter().map(|f| f.key).collect();
        assert_eq!(keys.len(), FEATURES.len());
    }

    #[test]
    fn test_every_card_has_copy() {
        for feature in FEATURES {
            assert!(translated(&format!("features.items.{}.title", feature.key)));
            assert!(translated(&format!("features.items.{}.description", feature.key)));
        }
        for step in STEPS {
            assert!(translated(&format!("how_it_works.steps.{}.title", step.key)));
        }
        for testimonial in TESTIMONIALS {
            assert!(translated(&format!("testimonials.items.{}.quote", testimonial.key)));
            assert!(translated(&format!("testimonials.items.{}.role", testimonial.key)));
        }
    }
}
