use crate::error::RenderError;

/// Routes pre-rendered for every site. Must match the renderer's route table.
pub const PRERENDER_ROUTES: &[&str] = &["/", "/flotte", "/routen", "/preise"];

/// Head-section tags collected while rendering one page.
///
/// Each group holds complete, already-escaped tags in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadElements {
    pub title: Option<String>,
    pub meta: Vec<String>,
    pub link: Vec<String>,
    pub script: Vec<String>,
}

impl HeadElements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title_html(&self) -> String {
        self.title.clone().unwrap_or_default()
    }

    pub fn meta_html(&self) -> String {
        self.meta.join("\n    ")
    }

    pub fn link_html(&self) -> String {
        self.link.join("\n    ")
    }

    pub fn script_html(&self) -> String {
        self.script.join("\n    ")
    }

    /// Title, meta, link, then script groups, empty groups skipped.
    pub fn to_html(&self) -> String {
        [
            self.title_html(),
            self.meta_html(),
            self.link_html(),
            self.script_html(),
        ]
        .into_iter()
        .filter(|group| !group.is_empty())
        .collect::<Vec<_>>()
        .join("\n    ")
    }
}

/// Output of rendering one (route, site) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    pub body: String,
    pub head: HeadElements,
}

/// Server-side page renderer.
///
/// Implementations take all site state from the `site_id` argument, so
/// consecutive calls for different sites cannot bleed into each other.
/// The markup they return is spliced verbatim into the HTML shell.
pub trait PageRenderer {
    /// Routes this renderer produces real pages for.
    fn routes(&self) -> Vec<&'static str>;

    fn render(&self, route: &str, site_id: &str) -> Result<RenderResult, RenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_groups_in_order() {
        let head = HeadElements {
            title: Some("<title>T</title>".to_string()),
            meta: vec![
                r#"<meta name="a" content="1">"#.to_string(),
                r#"<meta name="b" content="2">"#.to_string(),
            ],
            link: vec![r#"<link rel="canonical" href="https://x">"#.to_string()],
            script: vec!["<script>1</script>".to_string()],
        };
        let html = head.to_html();
        let title = html.find("<title>").unwrap();
        let meta = html.find("<meta").unwrap();
        let link = html.find("<link").unwrap();
        let script = html.find("<script").unwrap();
        assert!(title < meta && meta < link && link < script);
    }

    #[test]
    fn test_empty_groups_are_skipped() {
        let head = HeadElements {
            title: Some("<title>T</title>".to_string()),
            script: vec!["<script>1</script>".to_string()],
            ..Default::default()
        };
        assert_eq!(head.to_html(), "<title>T</title>\n    <script>1</script>");
        assert_eq!(HeadElements::new().to_html(), "");
    }
}
