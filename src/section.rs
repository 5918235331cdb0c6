/// In-page anchor targets used for smooth-scroll navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Skills,
    Projects,
    Experience,
    Testimonials,
    Contact,
}

impl Section {
    /// Every section, in page order. Used by the mobile menu and the footer.
    pub const ALL: [Section; 6] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Testimonials,
        Section::Contact,
    ];

    /// The desktop navbar leaves out testimonials.
    pub const DESKTOP_NAV: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    /// Element id of the section, also used as the `#fragment`.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

/// Whether the navbar should use its solid, condensed style.
pub fn is_condensed(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchors_are_unique_fragments() {
        let anchors = Section::ALL.map(Section::anchor);
        for (i, anchor) in anchors.iter().enumerate() {
            assert!(!anchors[i + 1..].contains(anchor), "duplicate anchor {anchor}");
        }
        assert_eq!(Section::Contact.href(), "#contact");
    }

    #[test]
    fn test_desktop_nav_skips_testimonials() {
        assert!(!Section::DESKTOP_NAV.contains(&Section::Testimonials));
        assert!(Section::ALL.contains(&Section::Testimonials));
    }

    #[test]
    fn test_condensed_only_past_threshold() {
        assert!(!is_condensed(0.0, 50.0));
        assert!(!is_condensed(50.0, 50.0));
        assert!(is_condensed(50.5, 50.0));
    }
}
