pub mod config;
pub mod error;
pub mod locale;
pub mod site;
pub mod types;

pub use config::BuildLayout;
pub use error::{Error, RenderError, Result};
pub use locale::{Locale, LocaleContext, MemoryPreferences, PreferenceStore, resolve_locale, resolve_site};
pub use site::{SiteDescriptor, SiteRegistry};
pub use types::*;
