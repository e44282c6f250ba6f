use thiserror::Error;

/// Failure of a single (route, site) render call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to render '{route}' for site '{site}': {message}")]
pub struct RenderError {
    pub route: String,
    pub site: String,
    pub message: String,
}

impl RenderError {
    pub fn new(route: &str, site: &str, message: impl Into<String>) -> Self {
        Self {
            route: route.to_string(),
            site: site.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// An input produced by an earlier build step is absent.
    #[error("{artifact} not found. {hint}")]
    MissingPrecondition { artifact: String, hint: String },

    #[error("HTML shell error: {0}")]
    Shell(String),

    #[error(
        "Route list does not match the renderer's routes (missing pages: [{}], unlisted pages: [{}])",
        missing.join(", "),
        unlisted.join(", ")
    )]
    RouteMismatch {
        /// Configured routes the renderer cannot produce.
        missing: Vec<String>,
        /// Renderer routes that the configured list leaves out.
        unlisted: Vec<String>,
    },

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
