//! Page sections reachable from the navigation bar.
//!
//! # Sections
//!
//! - [`Section::Home`]: Hero with the typewriter title and call-to-action buttons
//! - [`Section::About`]: Bio and skills
//! - [`Section::Projects`]: Featured projects and the filterable gallery
//! - [`Section::Contact`]: Contact details and the message form

/// Sections of the single-page site, in scroll order.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    /// All sections in navigation order.
    pub const ALL: [Self; 4] = [Self::Home, Self::About, Self::Projects, Self::Contact];

    /// Next section (cycles: Home → About → Projects → Contact → Home).
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Home => Self::About,
            Self::About => Self::Projects,
            Self::Projects => Self::Contact,
            Self::Contact => Self::Home,
        }
    }

    /// In-page anchor the navigation link scrolls to.
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Home => "#home",
            Self::About => "#about",
            Self::Projects => "#projects",
            Self::Contact => "#contact",
        }
    }

    /// Navigation bar label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_default() {
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn test_section_next_cycle() {
        let mut section = Section::Home;
        for expected in [Section::About, Section::Projects, Section::Contact, Section::Home] {
            section = section.next();
            assert_eq!(section, expected);
        }
    }

    #[test]
    fn test_anchors_are_distinct_fragments() {
        for (i, a) in Section::ALL.iter().enumerate() {
            assert!(a.anchor().starts_with('#'));
            for b in &Section::ALL[i + 1..] {
                assert_ne!(a.anchor(), b.anchor());
            }
        }
    }
}
