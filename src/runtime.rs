//! Image lookup and tagging on top of the [`Store`].

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    reference::{
        normalize_name, FullyQualifiedImageName, ImageQualifierParseError, ParsedDomain, ParsedImageReference,
        DEFAULT_TAG, LOCAL_DOMAIN,
    },
    store::{Image, ImageKind, Store, StoreError},
    system_context::{Platform, SystemContext},
};

const MIN_ID_PREFIX_LEN: usize = 3;
const MAX_ID_LEN: usize = 64;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{0}: image not known")]
    ImageNotKnown(String),
    #[error("{0}: ambiguous image ID")]
    AmbiguousId(String),
    #[error("{0}: short name matches more than one image")]
    AmbiguousShortName(String),
    #[error("{name}: no image in the manifest list matches {platform}")]
    NoPlatformMatch { name: String, platform: Platform },
    #[error("tag by digest not supported")]
    TagByDigest,
    #[error(transparent)]
    Reference(#[from] ImageQualifierParseError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Default)]
pub struct LookupImageOptions {
    /// Return a manifest list itself instead of its instance for the
    /// configured platform.
    pub manifest_list: bool,
}

pub struct Runtime {
    store: Store,
    system_context: SystemContext,
}

fn is_id_prefix(candidate: &str) -> bool {
    (MIN_ID_PREFIX_LEN..=MAX_ID_LEN).contains(&candidate.len())
        && candidate.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

impl Runtime {
    pub fn new(store: Store, system_context: SystemContext) -> Self {
        Self { store, system_context }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn system_context(&self) -> &SystemContext {
        &self.system_context
    }

    /// Resolves `name` to a stored image.
    ///
    /// `name` may be a (prefix of an) image ID, a fully qualified reference,
    /// or a short name. Names win over ID prefixes: short names are tried
    /// under `localhost/` and every search registry, then as an ID prefix,
    /// then as a unique repository suffix.
    pub fn lookup_image(&self, name: &str, options: &LookupImageOptions) -> Result<Image, RuntimeError> {
        let image = self.find_image(name)?;
        debug!(name, id = %image.id, "resolved image");
        if options.manifest_list || !image.is_manifest_list() {
            return Ok(image.clone());
        }
        self.resolve_instance(name, image)
    }

    fn find_image(&self, name: &str) -> Result<&Image, RuntimeError> {
        // `sha256:<id>` and full IDs never name a repository.
        if let Some(id) = name.strip_prefix("sha256:") {
            return match self.image_by_id_prefix(name, id)? {
                Some(image) => Ok(image),
                None => Err(RuntimeError::ImageNotKnown(name.to_owned())),
            };
        }
        if name.len() == MAX_ID_LEN {
            if let Some(image) = self.image_by_id_prefix(name, name)? {
                return Ok(image);
            }
        }

        let reference: ParsedImageReference = name.parse()?;
        for qualified in self.candidates(&reference) {
            if let Some(image) = self.image_by_qualified_name(&qualified) {
                return Ok(image);
            }
        }

        if let Some(image) = self.image_by_id_prefix(name, name)? {
            return Ok(image);
        }

        if reference.is_short_name() {
            if let Some(image) = self.image_by_suffix(name, &reference)? {
                return Ok(image);
            }
        }

        Err(RuntimeError::ImageNotKnown(name.to_owned()))
    }

    fn image_by_id_prefix(&self, name: &str, prefix: &str) -> Result<Option<&Image>, RuntimeError> {
        if !is_id_prefix(prefix) {
            return Ok(None);
        }
        match self.store.images_by_id_prefix(prefix).as_slice() {
            [image] => Ok(Some(*image)),
            [] => Ok(None),
            _ => Err(RuntimeError::AmbiguousId(name.to_owned())),
        }
    }

    /// Fully qualified names to try, in order.
    fn candidates(&self, reference: &ParsedImageReference) -> Vec<FullyQualifiedImageName> {
        if !reference.is_short_name() {
            return vec![FullyQualifiedImageName::new(reference.clone())];
        }
        let local = ParsedDomain {
            hostname: LOCAL_DOMAIN.to_owned(),
            port: None,
        };
        std::iter::once(local)
            .chain(self.system_context.search_registries.iter().cloned())
            .map(|registry| FullyQualifiedImageName::new(reference.with_registry(registry)))
            .collect()
    }

    fn image_by_qualified_name(&self, qualified: &FullyQualifiedImageName) -> Option<&Image> {
        match qualified.digest() {
            None => self.store.image_by_name(&qualified.to_string()),
            Some(digest) => {
                let repository = qualified.name();
                self.store
                    .images_by_digest(digest)
                    .into_iter()
                    .find(|image| image.names.iter().any(|n| same_repository(n, &repository)))
            }
        }
    }

    fn image_by_suffix(&self, name: &str, reference: &ParsedImageReference) -> Result<Option<&Image>, RuntimeError> {
        let suffix = format!("/{}", reference.repository);
        let tag = reference.tag.as_deref().unwrap_or(DEFAULT_TAG);

        let mut found: Option<&Image> = None;
        for image in self.store.images() {
            let matches = image.names.iter().any(|stored| {
                let Ok(stored) = stored.parse::<FullyQualifiedImageName>() else {
                    return false;
                };
                let repository = format!("/{}", stored.repository());
                if !repository.ends_with(&suffix) {
                    return false;
                }
                match &reference.digest {
                    Some(digest) => image.digest == *digest,
                    None => stored.tag() == Some(tag),
                }
            });
            if !matches {
                continue;
            }
            match found {
                Some(other) if other.id != image.id => {
                    return Err(RuntimeError::AmbiguousShortName(name.to_owned()))
                }
                _ => found = Some(image),
            }
        }
        Ok(found)
    }

    fn resolve_instance(&self, name: &str, list: &Image) -> Result<Image, RuntimeError> {
        let ImageKind::ManifestList { instances } = &list.kind else {
            return Ok(list.clone());
        };
        let platform = &self.system_context.platform;
        instances
            .iter()
            .filter(|instance| {
                platform.matches(&instance.os, &instance.architecture, instance.variant.as_deref())
            })
            .find_map(|instance| self.store.images_by_digest(&instance.digest).first().copied())
            .cloned()
            .ok_or_else(|| RuntimeError::NoPlatformMatch {
                name: name.to_owned(),
                platform: platform.clone(),
            })
    }

    /// Adds `name`, normalized, to `image`.
    pub fn tag(&mut self, image: &Image, name: &str) -> Result<(), RuntimeError> {
        let normalized = normalize_name(name)?;
        if normalized.digest().is_some() {
            return Err(RuntimeError::TagByDigest);
        }
        let normalized = normalized.to_string();
        self.store.add_names(&image.id, &[normalized.clone()])?;
        info!(id = %image.id, name = %normalized, "tagged image");
        Ok(())
    }
}

/// Whether the stored name `stored` belongs to `repository` (`domain/path`).
fn same_repository(stored: &str, repository: &str) -> bool {
    stored
        .parse::<FullyQualifiedImageName>()
        .map_or(false, |stored| stored.name() == repository)
}
