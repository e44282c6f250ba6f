//! Page rendering and the static pre-render pass for the brokerage sites.

pub mod analytics;
pub mod components;
pub mod content;
pub mod crawl;
pub mod escape;
pub mod pages;
pub mod prerender;
pub mod renderer;
pub mod seo;
pub mod shell;

pub use pages::Page;
pub use prerender::{PageOutput, PrerenderReport, Prerenderer, SiteOutput};
pub use renderer::SitePageRenderer;
pub use shell::HtmlShell;
