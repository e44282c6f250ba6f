use crate::error::{Error, Result};
use crate::site::{SiteDescriptor, SiteRegistry};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Optional project-level override file, looked up in the project root.
pub const CONFIG_FILE: &str = "ssg.toml";

pub const DEFAULT_CLIENT_DIR: &str = "dist/client";
pub const DEFAULT_SHELL: &str = "dist/client/index.html";

/// Raw TOML configuration structure, mirrors ssg.toml
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    build: RawBuild,
    /// site id -> output directory
    #[serde(default)]
    output: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBuild {
    client_dir: Option<String>,
    shell: Option<String>,
}

/// Where the pre-render step reads its inputs and writes each site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildLayout {
    pub root: PathBuf,
    /// Client build output, relative to `root`.
    pub client_dir: PathBuf,
    /// Client-built HTML shell, relative to `root`.
    pub shell: PathBuf,
    output_overrides: BTreeMap<String, PathBuf>,
}

impl BuildLayout {
    /// Hard-coded default layout under `root`.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            client_dir: PathBuf::from(DEFAULT_CLIENT_DIR),
            shell: PathBuf::from(DEFAULT_SHELL),
            output_overrides: BTreeMap::new(),
        }
    }

    /// Default layout, adjusted by `ssg.toml` when the project has one.
    pub fn load<P: Into<PathBuf>>(root: P, registry: &SiteRegistry) -> Result<Self> {
        let root = root.into();
        let config_path = root.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::new(root));
        }
        let content = fs::read_to_string(&config_path)?;
        Self::from_toml_str(root, &content, registry)
    }

    /// Parse an `ssg.toml` body (useful for testing)
    pub fn from_toml_str<P: Into<PathBuf>>(
        root: P,
        content: &str,
        registry: &SiteRegistry,
    ) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)?;
        let mut layout = Self::new(root);

        if let Some(dir) = raw.build.client_dir {
            layout.client_dir = validate_path(&dir, "build.client_dir")?;
            // A moved client dir moves the default shell with it
            if raw.build.shell.is_none() {
                layout.shell = layout.client_dir.join("index.html");
            }
        }
        if let Some(shell) = raw.build.shell {
            layout.shell = validate_path(&shell, "build.shell")?;
        }

        for (site_id, dir) in raw.output {
            if registry.find(&site_id).is_none() {
                return Err(Error::ConfigParse(format!(
                    "Unknown site '{}' in [output]. Known sites: {}",
                    site_id,
                    registry.ids().join(", ")
                )));
            }
            let field = format!("output.{}", site_id);
            let path = validate_path(&dir, &field)?;
            layout.output_overrides.insert(site_id, path);
        }

        Ok(layout)
    }

    pub fn client_dir_path(&self) -> PathBuf {
        self.root.join(&self.client_dir)
    }

    pub fn shell_path(&self) -> PathBuf {
        self.root.join(&self.shell)
    }

    /// Output directory for a site, relative to `root`.
    pub fn site_out_dir(&self, site: &SiteDescriptor) -> PathBuf {
        self.output_overrides
            .get(site.id)
            .cloned()
            .unwrap_or_else(|| PathBuf::from(site.out_dir))
    }

    pub fn site_out_path(&self, site: &SiteDescriptor) -> PathBuf {
        self.root.join(self.site_out_dir(site))
    }

    /// Reject output directories that would make the asset copy recurse or
    /// that two sites would share.
    pub fn check_output_dirs(&self, registry: &SiteRegistry) -> Result<()> {
        let mut seen: Vec<(&str, PathBuf)> = Vec::new();
        for site in registry.iter() {
            let out = self.site_out_dir(site);
            let out = validate_path(&out.to_string_lossy(), &format!("{}.out_dir", site.id))?;
            if out.starts_with(&self.client_dir) {
                return Err(Error::ConfigParse(format!(
                    "Output directory '{}' for site '{}' is inside the client build directory '{}'",
                    out.display(),
                    site.id,
                    self.client_dir.display()
                )));
            }
            let overlap = seen
                .iter()
                .find(|(_, dir)| out.starts_with(dir) || dir.starts_with(&out));
            if let Some(other) = overlap {
                return Err(Error::ConfigParse(format!(
                    "Output directory '{}' for site '{}' overlaps '{}' of site '{}'",
                    out.display(),
                    site.id,
                    other.1.display(),
                    other.0
                )));
            }
            seen.push((site.id, out));
        }
        Ok(())
    }

    /// Path relative to the project root for operator output.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

/// Validate and convert a path string to PathBuf.
///
/// Rejects absolute paths, parent directory references (`..`) and empty
/// strings. `.` components are dropped so prefix checks compare like with
/// like. `field_name` is echoed in the error.
pub fn validate_path(path_str: &str, field_name: &str) -> Result<PathBuf> {
    if path_str.trim().is_empty() {
        return Err(Error::ConfigParse(format!(
            "Empty path in '{}' field",
            field_name
        )));
    }

    let path = Path::new(path_str);

    if path.is_absolute() || path_str.starts_with('/') {
        return Err(Error::ConfigParse(format!(
            "Absolute paths not allowed in '{}': '{}'. Use relative paths only.",
            field_name, path_str
        )));
    }

    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::ParentDir => {
                return Err(Error::ConfigParse(format!(
                    "Parent directory references (..) not allowed in '{}': '{}'",
                    field_name, path_str
                )));
            }
            Component::CurDir => {}
            other => normalized.push(other),
        }
    }

    // "." and "./" name the project root itself
    if normalized.as_os_str().is_empty() {
        return Err(Error::ConfigParse(format!(
            "Path in '{}' must name a directory below the project root: '{}'",
            field_name, path_str
        )));
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::GIW;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let layout = BuildLayout::new("/project");
        assert_eq!(layout.shell_path(), PathBuf::from("/project/dist/client/index.html"));
        assert_eq!(layout.client_dir_path(), PathBuf::from("/project/dist/client"));
        assert_eq!(layout.site_out_path(&GIW), PathBuf::from("/project/dist/client-giw"));
    }

    #[test]
    fn test_load_without_config_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let layout = BuildLayout::load(dir.path(), &SiteRegistry::builtin()).unwrap();
        assert_eq!(layout, BuildLayout::new(dir.path()));
    }

    #[test]
    fn test_load_reads_config_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[build]\nclient_dir = \"build/web\"\n\n[output]\ngiw = \"public/giw\"\n",
        )
        .unwrap();
        let layout = BuildLayout::load(dir.path(), &SiteRegistry::builtin()).unwrap();
        assert_eq!(layout.client_dir, PathBuf::from("build/web"));
        assert_eq!(layout.shell, PathBuf::from("build/web/index.html"));
        assert_eq!(layout.site_out_dir(&GIW), PathBuf::from("public/giw"));
    }

    #[test]
    fn test_explicit_shell_wins() {
        let toml = "[build]\nclient_dir = \"build/web\"\nshell = \"build/shell.html\"\n";
        let layout = BuildLayout::from_toml_str(".", toml, &SiteRegistry::builtin()).unwrap();
        assert_eq!(layout.shell, PathBuf::from("build/shell.html"));
    }

    #[test]
    fn test_unknown_site_in_output_rejected() {
        let toml = "[output]\nxyz = \"dist/xyz\"\n";
        let err = BuildLayout::from_toml_str(".", toml, &SiteRegistry::builtin()).unwrap_err();
        assert!(err.to_string().contains("Unknown site 'xyz'"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let toml = "[build]\nclient = \"dist\"\n";
        assert!(BuildLayout::from_toml_str(".", toml, &SiteRegistry::builtin()).is_err());
    }

    #[test]
    fn test_output_path_traversal_rejected() {
        let toml = "[output]\nama = \"../../var/www\"\n";
        let err = BuildLayout::from_toml_str(".", toml, &SiteRegistry::builtin()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Parent directory references"));
        assert!(msg.contains("output.ama"));
    }

    #[test]
    fn test_output_inside_client_dir_rejected() {
        let toml = "[output]\nama = \"dist/client/ama\"\n";
        let registry = SiteRegistry::builtin();
        let layout = BuildLayout::from_toml_str(".", toml, &registry).unwrap();
        let err = layout.check_output_dirs(&registry).unwrap_err();
        assert!(err.to_string().contains("inside the client build directory"));
        assert!(BuildLayout::new(".").check_output_dirs(&registry).is_ok());
    }

    #[test]
    fn test_dotted_output_inside_client_dir_rejected() {
        let registry = SiteRegistry::builtin();
        for dir in ["./dist/client/ama", "dist/./client/ama", "./dist/client"] {
            let toml = format!("[output]\nama = \"{}\"\n", dir);
            let layout = BuildLayout::from_toml_str(".", &toml, &registry).unwrap();
            let err = layout.check_output_dirs(&registry).unwrap_err();
            assert!(err.to_string().contains("inside the client build directory"), "{}", dir);
        }
    }

    #[test]
    fn test_dotted_client_dir_still_guards_outputs() {
        let toml = "[build]\nclient_dir = \"./web\"\n\n[output]\ngiw = \"web/giw\"\n";
        let registry = SiteRegistry::builtin();
        let layout = BuildLayout::from_toml_str(".", toml, &registry).unwrap();
        assert_eq!(layout.client_dir, PathBuf::from("web"));
        assert!(layout.check_output_dirs(&registry).is_err());
    }

    #[test]
    fn test_shared_output_dir_rejected() {
        let toml = "[output]\nama = \"public\"\ngiw = \"public/giw\"\n";
        let registry = SiteRegistry::builtin();
        let layout = BuildLayout::from_toml_str(".", toml, &registry).unwrap();
        let err = layout.check_output_dirs(&registry).unwrap_err();
        assert!(err.to_string().contains("overlaps"));
    }

    #[test]
    fn test_validate_path_drops_cur_dir() {
        assert_eq!(
            validate_path("./dist/./client-ama", "output.ama").unwrap(),
            PathBuf::from("dist/client-ama")
        );
        assert!(validate_path(".", "output.ama").is_err());
        assert!(validate_path("./", "output.ama").is_err());
    }

    #[test]
    fn test_validate_path_rejects_absolute() {
        let result = validate_path("/etc/passwd", "build.shell");
        assert!(result.unwrap_err().to_string().contains("Absolute paths not allowed"));
    }

    #[test]
    fn test_validate_path_rejects_empty() {
        assert!(validate_path("", "build.shell").is_err());
        assert!(validate_path("   ", "build.shell").is_err());
    }

    #[test]
    fn test_validate_path_accepts_nested_relative() {
        assert_eq!(
            validate_path("dist/client-ama", "output.ama").unwrap(),
            PathBuf::from("dist/client-ama")
        );
    }

    #[test]
    fn test_display_path_strips_root() {
        let layout = BuildLayout::new("/project");
        let p = layout.site_out_path(&GIW).join("index.html");
        assert_eq!(layout.display_path(&p), "dist/client-giw/index.html");
    }
}
