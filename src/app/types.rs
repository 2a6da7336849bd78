//! Type definitions for the application state.
//!
//! - [`Page`] - Which site page is displayed
//! - [`Focus`] - Which part of the page receives key input

/// The site pages, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Features,
    Impact,
    FuturePlans,
    Contact,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::About,
        Page::Features,
        Page::Impact,
        Page::FuturePlans,
        Page::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Features => "Features",
            Page::Impact => "Impact",
            Page::FuturePlans => "Future Plans",
            Page::Contact => "Contact",
        }
    }

    /// Short label for narrow terminals.
    pub fn short_title(self) -> &'static str {
        match self {
            Page::FuturePlans => "Future",
            other => other.title(),
        }
    }

    /// Parse a page name as given on the command line.
    pub fn from_name(name: &str) -> Option<Page> {
        match name.trim().to_ascii_lowercase().as_str() {
            "home" => Some(Page::Home),
            "about" => Some(Page::About),
            "features" => Some(Page::Features),
            "impact" => Some(Page::Impact),
            "future" | "future-plans" | "futureplans" | "future_plans" => Some(Page::FuturePlans),
            "contact" => Some(Page::Contact),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Page> {
        Self::ALL.get(index).copied()
    }

    /// Next page, wrapping.
    pub fn next(self) -> Page {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous page, wrapping.
    pub fn prev(self) -> Page {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether the page hosts a carousel.
    pub fn has_carousel(self) -> bool {
        matches!(self, Page::Home | Page::Features)
    }
}

/// Where key input goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Page navigation and carousel keys
    #[default]
    Page,
    /// Footer newsletter email field
    Newsletter,
    /// Contact form fields
    Contact,
}

impl Focus {
    pub fn is_editing(self) -> bool {
        !matches!(self, Focus::Page)
    }
}
