use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use thiserror::Error;

/// Registry assumed for names whose first component is not a domain.
pub const DEFAULT_DOMAIN: &str = "docker.io";
/// Registry prepended to short names when tagging.
pub const LOCAL_DOMAIN: &str = "localhost";
pub const DEFAULT_TAG: &str = "latest";

const LEGACY_DEFAULT_DOMAIN: &str = "index.docker.io";
const OFFICIAL_REPO_PREFIX: &str = "library/";
const MAX_TAG_LEN: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageQualifierParseError {
    #[error("invalid reference format: repository name must have at least one component")]
    MissingRepositoryName,
    #[error("invalid reference format: invalid character in domain")]
    InvalidCharacterInDomain,
    #[error("invalid reference format: invalid port")]
    InvalidPort,
    #[error("invalid reference format: repository name must be lowercase")]
    UppercaseRepository,
    #[error("invalid reference format: invalid path component {0:?}")]
    InvalidPathComponent(String),
    #[error("invalid reference format: invalid tag {0:?}")]
    InvalidTag(String),
    #[error("invalid reference format: invalid digest {0:?}")]
    InvalidDigest(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDomain {
    pub hostname: String,
    pub port: Option<u16>,
}

impl Display for ParsedDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hostname)?;
        if let Some(port) = self.port {
            f.write_char(':')?;
            port.fmt(f)?;
        }
        Ok(())
    }
}

impl FromStr for ParsedDomain {
    type Err = ImageQualifierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_registry(s)
    }
}

/// An image reference, parsed according to the grammar specified [here][1].
///
/// Not all fields are mandatory.
/// To fill in the missing fields with defaults, see [`FullyQualifiedImageName`].
///
/// The first path component is only treated as a registry when it looks like a
/// domain: it contains a `.` or a `:`, or it is `localhost`. Everything else is
/// part of the repository path, so `library/ubuntu` has no registry.
///
/// # Example
/// ```
/// # use buildah_hwc::reference::ParsedImageReference;
/// let a: ParsedImageReference = "ubuntu".parse().unwrap();
/// assert_eq!(a, ParsedImageReference {
///     registry: None,
///     repository: "ubuntu".into(),
///     tag: None,
///     digest: None,
/// });
/// ```
///
/// [1]: https://github.com/containers/image/blob/7900588000bd2ef355b3c966949c6139806b2dad/docker/reference/reference.go#L4
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedImageReference {
    pub registry: Option<ParsedDomain>,
    pub repository: String,
    pub tag: Option<String>,
    pub digest: Option<String>,
}

impl ParsedImageReference {
    /// Returns a copy of this reference pinned to `registry`.
    pub fn with_registry(&self, registry: ParsedDomain) -> Self {
        Self {
            registry: Some(registry),
            ..self.clone()
        }
    }

    pub fn is_short_name(&self) -> bool {
        self.registry.is_none()
    }
}

impl Display for ParsedImageReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(registry) = &self.registry {
            registry.fmt(f)?;
            f.write_char('/')?;
        }

        f.write_str(&self.repository)?;

        if let Some(tag) = &self.tag {
            f.write_char(':')?;
            f.write_str(tag)?;
        }

        if let Some(digest) = &self.digest {
            f.write_char('@')?;
            f.write_str(digest)?;
        }

        Ok(())
    }
}

/// A fully-qualified image name, the form names are kept in inside the store.
///
/// As opposed to [`ParsedImageReference`], the registry is always present and
/// at least one of tag or digest is set. A reference carrying both keeps only
/// the digest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FullyQualifiedImageName {
    hostname: String,
    port: Option<u16>,
    repository: String,
    tag: Option<String>,
    digest: Option<String>,
}

impl FullyQualifiedImageName {
    pub fn new(parsed_qualifier: ParsedImageReference) -> Self {
        let ParsedImageReference {
            registry,
            mut repository,
            tag,
            digest,
        } = parsed_qualifier;

        let (hostname, port) = match registry {
            None => (String::from(DEFAULT_DOMAIN), None),
            Some(ParsedDomain { hostname, port }) if hostname == LEGACY_DEFAULT_DOMAIN => {
                (String::from(DEFAULT_DOMAIN), port)
            }
            Some(ParsedDomain { hostname, port }) => (hostname, port),
        };

        if hostname == DEFAULT_DOMAIN && port.is_none() && !repository.contains('/') {
            repository.insert_str(0, OFFICIAL_REPO_PREFIX);
        }

        let tag = match (&tag, &digest) {
            (_, Some(_)) => None,
            (Some(_), None) => tag,
            (None, None) => Some(DEFAULT_TAG.to_owned()),
        };

        Self {
            hostname,
            port,
            repository,
            tag,
            digest,
        }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn digest(&self) -> Option<&str> {
        self.digest.as_deref()
    }

    /// `domain[:port]/repository`, without tag or digest.
    pub fn name(&self) -> String {
        let mut name = ParsedDomain {
            hostname: self.hostname.clone(),
            port: self.port,
        }
        .to_string();
        name.push('/');
        name.push_str(&self.repository);
        name
    }
}

impl Display for FullyQualifiedImageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())?;
        if let Some(tag) = &self.tag {
            f.write_char(':')?;
            f.write_str(tag)?;
        }
        if let Some(digest) = &self.digest {
            f.write_char('@')?;
            f.write_str(digest)?;
        }
        Ok(())
    }
}

impl FromStr for FullyQualifiedImageName {
    type Err = ImageQualifierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.parse()?))
    }
}

/// Normalizes `name` the way Buildah and Podman store names.
///
/// Short names are placed under `localhost/`, `docker.io` names get the
/// `library/` namespace, and a missing tag becomes `latest`.
pub fn normalize_name(name: &str) -> Result<FullyQualifiedImageName, ImageQualifierParseError> {
    let mut parsed: ParsedImageReference = name.parse()?;
    if parsed.registry.is_none() {
        parsed.registry = Some(ParsedDomain {
            hostname: LOCAL_DOMAIN.to_owned(),
            port: None,
        });
    }
    Ok(FullyQualifiedImageName::new(parsed))
}

fn split_zero_or_once(haystack: &str, needle: char) -> (&str, Option<&str>) {
    match haystack.split_once(needle) {
        None => (haystack, None),
        Some((head, tail)) => (head, Some(tail)),
    }
}

fn looks_like_domain(component: &str) -> bool {
    component.contains(['.', ':']) || component == LOCAL_DOMAIN
}

fn parse_registry(registry: &str) -> Result<ParsedDomain, ImageQualifierParseError> {
    let (hostname, port) = split_zero_or_once(registry, ':');
    if hostname.is_empty()
        || !hostname
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ['.', '-'].contains(&c))
    {
        return Err(ImageQualifierParseError::InvalidCharacterInDomain);
    }
    let port = match port {
        None => None,
        Some(port) => Some(
            port.parse::<u16>()
                .map_err(|_| ImageQualifierParseError::InvalidPort)?,
        ),
    };
    Ok(ParsedDomain {
        hostname: hostname.to_owned(),
        port,
    })
}

/// `[a-z0-9]+` runs joined by `.`, `_`, `__` or any number of `-`.
fn validate_path_component(component: &str) -> Result<(), ImageQualifierParseError> {
    let invalid = || ImageQualifierParseError::InvalidPathComponent(component.to_owned());
    let is_alnum = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit();

    let chars = component.chars();
    let mut separator = String::new();
    let mut seen_alnum = false;
    for c in chars {
        if is_alnum(c) {
            if !separator.is_empty() {
                let ok = matches!(separator.as_str(), "." | "_" | "__")
                    || separator.chars().all(|s| s == '-');
                if !ok {
                    return Err(invalid());
                }
                separator.clear();
            }
            seen_alnum = true;
        } else if ['.', '_', '-'].contains(&c) && seen_alnum {
            separator.push(c);
        } else {
            return Err(invalid());
        }
    }
    if !seen_alnum || !separator.is_empty() {
        return Err(invalid());
    }
    Ok(())
}

fn validate_repository(repository: &str) -> Result<(), ImageQualifierParseError> {
    if repository.is_empty() {
        return Err(ImageQualifierParseError::MissingRepositoryName);
    }
    if repository.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ImageQualifierParseError::UppercaseRepository);
    }
    repository.split('/').try_for_each(validate_path_component)
}

fn validate_tag(tag: &str) -> Result<(), ImageQualifierParseError> {
    let is_word = |c: char| c.is_ascii_alphanumeric() || c == '_';
    let mut chars = tag.chars();
    let valid = tag.len() <= MAX_TAG_LEN
        && chars.next().map_or(false, is_word)
        && chars.all(|c| is_word(c) || c == '.' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(ImageQualifierParseError::InvalidTag(tag.to_owned()))
    }
}

/// Checks `algorithm:encoded`. `sha256` digests must carry 64 lowercase hex digits.
pub fn validate_digest(digest: &str) -> Result<(), ImageQualifierParseError> {
    let invalid = || ImageQualifierParseError::InvalidDigest(digest.to_owned());
    let (algorithm, encoded) = digest.split_once(':').ok_or_else(invalid)?;
    if algorithm.is_empty()
        || !algorithm
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || ['+', '.', '_', '-'].contains(&c))
    {
        return Err(invalid());
    }
    let encoded_ok = if algorithm == "sha256" {
        encoded.len() == 64 && encoded.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    } else {
        !encoded.is_empty()
            && encoded
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || ['=', '_', '-'].contains(&c))
    };
    if encoded_ok {
        Ok(())
    } else {
        Err(invalid())
    }
}

impl FromStr for ParsedImageReference {
    type Err = ImageQualifierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name_and_tag, digest) = split_zero_or_once(s, '@');
        if let Some(digest) = digest {
            validate_digest(digest)?;
        }

        // A ':' only separates a tag when it comes after the last '/',
        // otherwise it is the registry port.
        let (name, tag) = match name_and_tag.rfind(':') {
            Some(idx) if !name_and_tag[idx..].contains('/') => {
                (&name_and_tag[..idx], Some(&name_and_tag[idx + 1..]))
            }
            _ => (name_and_tag, None),
        };
        if let Some(tag) = tag {
            validate_tag(tag)?;
        }

        let (registry, repository) = match split_zero_or_once(name, '/') {
            (first, Some(rest)) if looks_like_domain(first) => (Some(parse_registry(first)?), rest),
            _ => (None, name),
        };
        validate_repository(repository)?;

        Ok(ParsedImageReference {
            registry,
            repository: repository.to_owned(),
            tag: tag.map(ToOwned::to_owned),
            digest: digest.map(ToOwned::to_owned),
        })
    }
}
