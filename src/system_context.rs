//! Settings shared by every command: where the store lives, which
//! registries short names are resolved against and which platform to prefer.

use std::{
    fmt::Display,
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::reference::{ImageQualifierParseError, ParsedDomain, DEFAULT_DOMAIN};

pub const DEFAULT_ROOT: &str = "/var/lib/containers/storage";
pub const DEFAULT_REGISTRIES_CONF: &str = "/etc/containers/registries.conf";

#[derive(Debug, Error)]
pub enum SystemContextError {
    #[error("reading {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parsing {}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid search registry {0:?}")]
    InvalidRegistry(String, #[source] ImageQualifierParseError),
}

/*
unqualified-search-registries = ["registry.fedoraproject.org", "docker.io"]

[[registry]]
prefix = "example.com/foo"
location = "internal-registry-for-example.com/bar"
 */
#[derive(Debug, Default, Deserialize)]
struct RegistriesConf {
    #[serde(rename = "unqualified-search-registries")]
    unqualified_search_registries: Option<Vec<String>>,
}

/// Options the system context is built from, usually the global CLI flags.
#[derive(Debug, Clone, Default)]
pub struct SystemContextOptions {
    pub root: Option<PathBuf>,
    /// An explicitly given file must exist. The default location is optional.
    pub registries_conf: Option<PathBuf>,
    pub override_os: Option<String>,
    pub override_arch: Option<String>,
    pub override_variant: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub os: String,
    pub architecture: String,
    pub variant: Option<String>,
}

impl Platform {
    /// The platform this binary runs on, in OCI terms.
    pub fn host() -> Self {
        let architecture = match std::env::consts::ARCH {
            "x86_64" => "amd64",
            "x86" => "386",
            "aarch64" => "arm64",
            "powerpc64" if cfg!(target_endian = "little") => "ppc64le",
            "powerpc64" => "ppc64",
            other => other,
        };
        Self {
            os: std::env::consts::OS.to_owned(),
            architecture: architecture.to_owned(),
            variant: None,
        }
    }

    /// An unset variant matches any variant.
    pub fn matches(&self, os: &str, architecture: &str, variant: Option<&str>) -> bool {
        self.os == os
            && self.architecture == architecture
            && self.variant.as_deref().map_or(true, |v| Some(v) == variant)
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.os, self.architecture)?;
        if let Some(variant) = &self.variant {
            write!(f, "/{variant}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SystemContext {
    pub root: PathBuf,
    pub search_registries: Vec<ParsedDomain>,
    pub platform: Platform,
}

impl SystemContext {
    pub fn new(options: &SystemContextOptions) -> Result<Self, SystemContextError> {
        let root = options
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));

        let conf = match &options.registries_conf {
            Some(path) => read_registries_conf(path)?,
            None => match read_registries_conf(Path::new(DEFAULT_REGISTRIES_CONF)) {
                Err(SystemContextError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                    RegistriesConf::default()
                }
                other => other?,
            },
        };
        let search_registries = conf
            .unqualified_search_registries
            .unwrap_or_else(|| vec![DEFAULT_DOMAIN.to_owned()])
            .into_iter()
            .map(|registry| {
                registry
                    .parse()
                    .map_err(|e| SystemContextError::InvalidRegistry(registry.clone(), e))
            })
            .collect::<Result<Vec<ParsedDomain>, _>>()?;

        let host = Platform::host();
        let platform = Platform {
            os: options.override_os.clone().unwrap_or(host.os),
            architecture: options.override_arch.clone().unwrap_or(host.architecture),
            variant: options.override_variant.clone(),
        };

        debug!(root = %root.display(), %platform, ?search_registries, "built system context");
        Ok(Self {
            root,
            search_registries,
            platform,
        })
    }
}

fn read_registries_conf(path: &Path) -> Result<RegistriesConf, SystemContextError> {
    let data = fs::read_to_string(path).map_err(|source| SystemContextError::Io {
        path: path.to_owned(),
        source,
    })?;
    toml::from_str(&data).map_err(|source| SystemContextError::Toml {
        path: path.to_owned(),
        source,
    })
}
