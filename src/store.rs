//! A small content-addressed image store.
//!
//! Layout under the root directory:
//!
//! ```text
//! <root>/images.json            image records
//! <root>/blobs/sha256/<hex>     manifests, configs and layers
//! ```

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{debug, info};

use crate::reference::validate_digest;

const IMAGES_FILE: &str = "images.json";
const BLOBS_DIR: &str = "blobs";
const SHA256_PREFIX: &str = "sha256:";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("decoding {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{0}: image not known")]
    ImageUnknown(String),
    #[error("blob {0} not known")]
    BlobUnknown(String),
    #[error("invalid digest {0:?}")]
    InvalidDigest(String),
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_owned(),
        source,
    }
}

/// One platform-specific entry of a manifest list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInstance {
    pub digest: String,
    pub os: String,
    pub architecture: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ImageKind {
    Image {
        os: String,
        architecture: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        variant: Option<String>,
    },
    ManifestList {
        instances: Vec<ManifestInstance>,
    },
}

/*
{
  "id": "3dd02e63cf7b74292e50041d1cc0030f28553afc27716b0516f2c0d09b9cf2fa",
  "digest": "sha256:75e5df5e8a806ebec1f8369351ffb9ce16830faaee122e05ea74d6fd0077e170",
  "names": ["localhost/wb_salmon:18.1.0.2"],
  "created": "2023-03-10T06:04:46.228904662Z",
  "kind": {"type": "image", "os": "linux", "architecture": "amd64"}
}
 */
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Hex config digest for images, hex index digest for manifest lists.
    pub id: String,
    /// Digest of the manifest or index, `sha256:<hex>`.
    pub digest: String,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    pub kind: ImageKind,
}

impl Image {
    pub fn is_manifest_list(&self) -> bool {
        matches!(self.kind, ImageKind::ManifestList { .. })
    }
}

#[derive(Debug, Default, Deserialize)]
struct ImageIndex {
    images: Vec<Image>,
}

#[derive(Serialize)]
struct ImageIndexRef<'a> {
    images: &'a [Image],
}

#[derive(Debug)]
pub struct Store {
    root: PathBuf,
    images: Vec<Image>,
}

impl Store {
    /// Opens the store at `root`, creating the directory layout if needed.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_owned();
        let blobs = root.join(BLOBS_DIR).join("sha256");
        fs::create_dir_all(&blobs).map_err(io_error(&blobs))?;

        let index_path = root.join(IMAGES_FILE);
        let images = match fs::read(&index_path) {
            Ok(data) => {
                serde_json::from_slice::<ImageIndex>(&data)
                    .map_err(|source| StoreError::Json {
                        path: index_path.clone(),
                        source,
                    })?
                    .images
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(io_error(&index_path)(e)),
        };
        debug!(root = %root.display(), images = images.len(), "opened image store");

        Ok(Self { root, images })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn images(&self) -> &[Image] {
        &self.images
    }

    pub fn image(&self, id: &str) -> Option<&Image> {
        self.images.iter().find(|image| image.id == id)
    }

    pub fn image_by_name(&self, name: &str) -> Option<&Image> {
        self.images
            .iter()
            .find(|image| image.names.iter().any(|n| n == name))
    }

    pub fn images_by_id_prefix(&self, prefix: &str) -> Vec<&Image> {
        self.images
            .iter()
            .filter(|image| image.id.starts_with(prefix))
            .collect()
    }

    pub fn images_by_digest(&self, digest: &str) -> Vec<&Image> {
        self.images
            .iter()
            .filter(|image| image.digest == digest)
            .collect()
    }

    fn blob_path(&self, digest: &str) -> Result<PathBuf, StoreError> {
        let hex = digest
            .strip_prefix(SHA256_PREFIX)
            .filter(|_| validate_digest(digest).is_ok())
            .ok_or_else(|| StoreError::InvalidDigest(digest.to_owned()))?;
        Ok(self.root.join(BLOBS_DIR).join("sha256").join(hex))
    }

    /// Stores `data` and returns its digest. Storing the same content twice
    /// is a no-op.
    pub fn put_blob(&self, data: &[u8]) -> Result<String, StoreError> {
        let digest = format!("{SHA256_PREFIX}{:x}", Sha256::digest(data));
        let path = self.blob_path(&digest)?;
        if !path.exists() {
            write_atomic(&path, data)?;
            debug!(%digest, size = data.len(), "stored blob");
        }
        Ok(digest)
    }

    pub fn blob(&self, digest: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.blob_path(digest)?;
        match fs::read(&path) {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(StoreError::BlobUnknown(digest.to_owned())),
            Err(e) => Err(io_error(&path)(e)),
        }
    }

    /// Records `image`. If an image with the same id exists, the new names
    /// are merged into it. Either way the names move off any other image.
    pub fn create_image(&mut self, image: Image) -> Result<(), StoreError> {
        let id = image.id.clone();
        let names = image.names.clone();
        let created = self.image(&id).is_none();

        let mut images = self.images.clone();
        if created {
            images.push(Image {
                names: Vec::new(),
                ..image
            });
        }
        move_names(&mut images, &id, &names);
        self.commit(images)?;
        if created {
            info!(%id, "created image");
        }
        Ok(())
    }

    /// Adds `names` to the image `id`, removing them from any image that
    /// carried them before.
    pub fn add_names(&mut self, id: &str, names: &[String]) -> Result<(), StoreError> {
        if self.image(id).is_none() {
            return Err(StoreError::ImageUnknown(id.to_owned()));
        }
        let mut images = self.images.clone();
        move_names(&mut images, id, names);
        self.commit(images)
    }

    pub fn remove_names(&mut self, id: &str, names: &[String]) -> Result<(), StoreError> {
        let mut images = self.images.clone();
        let image = images
            .iter_mut()
            .find(|image| image.id == id)
            .ok_or_else(|| StoreError::ImageUnknown(id.to_owned()))?;
        image.names.retain(|name| !names.contains(name));
        self.commit(images)
    }

    /// Rewrites `images.json` through a temporary file and a rename.
    pub fn save(&self) -> Result<(), StoreError> {
        self.write_index(&self.images)
    }

    /// Persists `images` and only then makes them the in-memory state, so a
    /// failed write leaves the store as it was.
    fn commit(&mut self, images: Vec<Image>) -> Result<(), StoreError> {
        self.write_index(&images)?;
        self.images = images;
        Ok(())
    }

    fn write_index(&self, images: &[Image]) -> Result<(), StoreError> {
        let path = self.root.join(IMAGES_FILE);
        let data = serde_json::to_vec_pretty(&ImageIndexRef { images }).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;
        write_atomic(&path, &data)
    }
}

fn move_names(images: &mut [Image], id: &str, names: &[String]) {
    for image in images.iter_mut() {
        if image.id == id {
            for name in names {
                if !image.names.contains(name) {
                    image.names.push(name.clone());
                }
            }
        } else {
            let before = image.names.len();
            image.names.retain(|name| !names.contains(name));
            if image.names.len() != before {
                debug!(from = %image.id, to = %id, "moved names");
            }
        }
    }
}

fn write_atomic(path: &Path, data: &[u8]) -> Result<(), StoreError> {
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let mut file = fs::File::create(&tmp_path).map_err(io_error(&tmp_path))?;
    file.write_all(data).map_err(io_error(&tmp_path))?;
    file.sync_all().map_err(io_error(&tmp_path))?;
    fs::rename(&tmp_path, path).map_err(io_error(path))
}
