/// The page set the renderer knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Fleet,
    Trips,
    Pricing,
    NotFound,
}

impl Page {
    /// Indexable pages, in sitemap order.
    pub const ROUTED: [Page; 4] = [Page::Home, Page::Fleet, Page::Trips, Page::Pricing];

    /// Map a request path to a page. Unknown paths get the not-found page.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Page::Home,
            "/flotte" => Page::Fleet,
            "/routen" => Page::Trips,
            "/preise" => Page::Pricing,
            _ => Page::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Fleet => "/flotte",
            Page::Trips => "/routen",
            Page::Pricing => "/preise",
            Page::NotFound => "/404",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("/flotte"), Page::Fleet);
        assert_eq!(Page::from_path("/routen/"), Page::Trips);
        assert_eq!(Page::from_path("/preise?tier=budget"), Page::Pricing);
        assert_eq!(Page::from_path("/impressum"), Page::NotFound);
    }

    #[test]
    fn test_routed_paths_round_trip() {
        for page in Page::ROUTED {
            assert_eq!(Page::from_path(page.path()), page);
        }
    }
}
