use crate::components::render_body;
use crate::pages::Page;
use crate::seo::head_for;
use roadtrip_ssg_core::{LocaleContext, PageRenderer, RenderError, RenderResult, SiteRegistry};

/// Renders the marketing pages for any site in its registry.
///
/// Holds no mutable state; every call builds its own [`LocaleContext`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SitePageRenderer {
    registry: SiteRegistry,
}

impl SitePageRenderer {
    pub fn new(registry: SiteRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> SiteRegistry {
        self.registry
    }
}

impl PageRenderer for SitePageRenderer {
    fn routes(&self) -> Vec<&'static str> {
        Page::ROUTED.iter().map(|page| page.path()).collect()
    }

    fn render(&self, route: &str, site_id: &str) -> Result<RenderResult, RenderError> {
        // Build-time renders never fall back to another brand
        let Some(site) = self.registry.find(site_id) else {
            return Err(RenderError::new(
                route,
                site_id,
                format!("unknown site id (known: {})", self.registry.ids().join(", ")),
            ));
        };
        let ctx = LocaleContext::for_render(site);
        let page = Page::from_path(route);

        Ok(RenderResult {
            body: render_body(page, ctx),
            head: head_for(page, &ctx),
        })
    }
}
