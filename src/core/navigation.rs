//! Site navigation: pages, active link and the mobile menu

/// Top-level pages linked from the navbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavPage {
    Home,
    About,
    Destinations,
    Specialties,
    Promotions,
    Contact,
}

impl NavPage {
    pub fn all() -> [NavPage; 6] {
        [
            NavPage::Home,
            NavPage::About,
            NavPage::Destinations,
            NavPage::Specialties,
            NavPage::Promotions,
            NavPage::Contact,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            NavPage::Home => "/",
            NavPage::About => "/about",
            NavPage::Destinations => "/destinations",
            NavPage::Specialties => "/specialties",
            NavPage::Promotions => "/promotions",
            NavPage::Contact => "/contact",
        }
    }

    /// Prefix of this page's entries in the `pageAnalytics` record
    pub fn analytics_key(&self) -> &'static str {
        match self {
            NavPage::Home => "home",
            NavPage::About => "about",
            NavPage::Destinations => "destinations",
            NavPage::Specialties => "specialties",
            NavPage::Promotions => "promotions",
            NavPage::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavPage::Home => "Home",
            NavPage::About => "About",
            NavPage::Destinations => "Destinations",
            NavPage::Specialties => "Specialties",
            NavPage::Promotions => "Promotions",
            NavPage::Contact => "Contact",
        }
    }

    /// Page for a location path. Legacy `*.html` names map to their page;
    /// an empty last segment or `index.html` is home.
    pub fn from_path(path: &str) -> Option<NavPage> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let last = path.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
        let name = last.strip_suffix(".html").unwrap_or(last);

        match name {
            "" | "index" => Some(NavPage::Home),
            "about" => Some(NavPage::About),
            "destinations" => Some(NavPage::Destinations),
            "specialties" => Some(NavPage::Specialties),
            "promotions" => Some(NavPage::Promotions),
            "contact" => Some(NavPage::Contact),
            _ => None,
        }
    }
}

/// Hamburger menu state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Following a link closes the menu
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Keys that activate a focused card, like a click
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(NavPage::from_path("/"), Some(NavPage::Home));
        assert_eq!(NavPage::from_path(""), Some(NavPage::Home));
        assert_eq!(NavPage::from_path("/index.html"), Some(NavPage::Home));
        assert_eq!(NavPage::from_path("/contact"), Some(NavPage::Contact));
        assert_eq!(NavPage::from_path("/contact/"), Some(NavPage::Contact));
        assert_eq!(NavPage::from_path("/site/promotions.html"), Some(NavPage::Promotions));
        assert_eq!(
            NavPage::from_path("/destinations?region=asia#grid"),
            Some(NavPage::Destinations)
        );
        assert_eq!(NavPage::from_path("/blog"), None);
    }

    #[test]
    fn test_paths_round_trip() {
        for page in NavPage::all() {
            assert_eq!(NavPage::from_path(page.path()), Some(page));
        }
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let mut menu = NavMenu::default();
        assert!(menu.toggle());
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        assert!(menu.toggle());
        assert!(!menu.toggle());
    }

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Spacebar"));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("Escape"));
    }
}
