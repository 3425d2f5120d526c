pub mod about;

use crate::document::Document;

pub use about::AboutPage;

/// A page the host mounts at a route.
pub trait Page: Sync {
    /// Mount path, without surrounding slashes.
    fn route(&self) -> &'static str;

    fn title(&self) -> &'static str;

    /// Build the page's document. Must be pure: every call returns an equal document.
    fn render(&self) -> Document;
}

static PAGES: &[&dyn Page] = &[&AboutPage];

/// Every mounted page, in declaration order.
pub fn all() -> &'static [&'static dyn Page] {
    PAGES
}

/// Look up a page by route. Leading and trailing slashes are ignored.
pub fn find(route: &str) -> Option<&'static dyn Page> {
    let route = route.trim_matches('/');
    PAGES.iter().copied().find(|page| page.route() == route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_ignores_slashes() {
        for route in ["about", "/about", "/about/"] {
            let page = find(route).map(|p| p.route());
            assert_eq!(page, Some("about"), "route {route:?}");
        }
        assert!(find("contact").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn routes_are_unique() {
        let mut routes: Vec<_> = all().iter().map(|p| p.route()).collect();
        routes.sort_unstable();
        routes.dedup();
        assert_eq!(routes.len(), all().len());
    }
}
