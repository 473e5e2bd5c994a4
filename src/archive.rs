//! Loading `docker save` archives and OCI layouts into the [`Store`].

use std::{
    collections::HashMap,
    fs::File,
    io::{self, Cursor, Read},
    ops::{Deref, Range},
    path::{Path, PathBuf},
};

use flate2::read::GzDecoder;
use memmap2::Mmap;
use oci_spec::image::{Descriptor, ImageConfiguration, ImageIndex, ImageManifest, MediaType};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::json;
use tar::Archive;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    reference::{FullyQualifiedImageName, ImageQualifierParseError, ParsedImageReference},
    store::{Image, ImageKind, ManifestInstance, Store, StoreError},
};

const GZIP_MAGIC: &[u8] = &[0x1f, 0x8b];

const DOCKER_MANIFEST_FILE: &str = "manifest.json";
const OCI_LAYOUT_FILE: &str = "oci-layout";
const OCI_INDEX_FILE: &str = "index.json";

const DOCKER_MANIFEST_V2: &str = "application/vnd.docker.distribution.manifest.v2+json";
const DOCKER_MANIFEST_LIST: &str = "application/vnd.docker.distribution.manifest.list.v2+json";
const DOCKER_CONFIG: &str = "application/vnd.docker.container.image.v1+json";
const DOCKER_LAYER: &str = "application/vnd.docker.image.rootfs.diff.tar";

pub const REF_NAME_ANNOTATION: &str = "org.opencontainers.image.ref.name";

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("{}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: neither a docker archive nor an OCI layout", .0.display())]
    UnknownFormat(PathBuf),
    #[error("archive is missing {0}")]
    MissingFile(String),
    #[error("decoding {name}")]
    Json {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported manifest media type {0}")]
    UnsupportedMediaType(String),
    #[error("blob {expected} has digest {actual}")]
    DigestMismatch { expected: String, actual: String },
    #[error(transparent)]
    Reference(#[from] ImageQualifierParseError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/*
[
  {
    "Config": "3dd02e63cf7b74292e50041d1cc0030f28553afc27716b0516f2c0d09b9cf2fa.json",
    "RepoTags": [
      "localhost/wb_salmon_split_dbg_info:18.1.0.2_priv.salmon-split-dbg-info"
    ],
    "Layers": [
      "af4c704c52a2e380ccfda31b4b58c502b1cd5d015059f2824afbc09dd3577008/layer.tar",
      "554c7ada7542bf42fabfc508063d0f6010b8c709bf8c015642f20cba586e5847/layer.tar"
    ]
  }
] */
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DockerManifest {
    pub config: String,
    pub repo_tags: Option<Vec<String>>,
    pub layers: Vec<PathBuf>,
}

enum ArchiveData {
    Mapped(Mmap),
    Decompressed(Vec<u8>),
}

impl Deref for ArchiveData {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            ArchiveData::Mapped(mmap) => &mmap[..],
            ArchiveData::Decompressed(data) => &data[..],
        }
    }
}

fn digest_to_blob_path(digest: &str) -> String {
    let mut digest_path_component = digest.replace(':', "/");
    digest_path_component.insert_str(0, "blobs/");
    digest_path_component
}

/// The regular files of a tarball and their spans within it.
struct ArchiveContents<'a> {
    data: &'a [u8],
    files: HashMap<String, Range<usize>>,
}

impl<'a> ArchiveContents<'a> {
    fn new(data: &'a [u8]) -> io::Result<Self> {
        let mut archive = Archive::new(Cursor::new(data));
        let mut files = HashMap::new();
        for entry in archive.entries()? {
            let entry = entry?;
            if !entry.header().entry_type().is_file() {
                continue;
            }
            let path = entry.path()?.to_string_lossy().trim_start_matches("./").to_owned();
            let pos = entry.raw_file_position() as usize;
            let size = entry.size() as usize;
            files.insert(path, pos..pos + size);
        }
        Ok(Self { data, files })
    }

    fn contains(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    fn file(&self, name: &str) -> Result<&'a [u8], ArchiveError> {
        let range = self
            .files
            .get(name)
            .ok_or_else(|| ArchiveError::MissingFile(name.to_owned()))?;
        Ok(&self.data[range.clone()])
    }

    fn json<T: DeserializeOwned>(&self, name: &str) -> Result<T, ArchiveError> {
        serde_json::from_slice(self.file(name)?).map_err(|source| ArchiveError::Json {
            name: name.to_owned(),
            source,
        })
    }

    /// Copies the blob `digest` into `store`, checking its content.
    fn copy_blob(&self, store: &Store, digest: &str) -> Result<&'a [u8], ArchiveError> {
        let data = self.file(&digest_to_blob_path(digest))?;
        let actual = store.put_blob(data)?;
        if actual != digest {
            return Err(ArchiveError::DigestMismatch {
                expected: digest.to_owned(),
                actual,
            });
        }
        Ok(data)
    }
}

fn read_archive(path: &Path) -> Result<ArchiveData, ArchiveError> {
    let io_error = |source| ArchiveError::Io {
        path: path.to_owned(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;
    // The archive is only read, and only while loading.
    let mmap = unsafe { Mmap::map(&file) }.map_err(io_error)?;
    if mmap.starts_with(GZIP_MAGIC) {
        let mut data = Vec::new();
        GzDecoder::new(&mmap[..]).read_to_end(&mut data).map_err(io_error)?;
        Ok(ArchiveData::Decompressed(data))
    } else {
        Ok(ArchiveData::Mapped(mmap))
    }
}

/// Loads every image in the archive at `path` and returns their IDs.
pub fn load(store: &mut Store, path: &Path) -> Result<Vec<String>, ArchiveError> {
    let data = read_archive(path)?;
    let contents = ArchiveContents::new(&data).map_err(|source| ArchiveError::Io {
        path: path.to_owned(),
        source,
    })?;

    let ids = if contents.contains(OCI_LAYOUT_FILE) {
        load_oci_layout(store, &contents)?
    } else if contents.contains(DOCKER_MANIFEST_FILE) {
        load_docker_archive(store, &contents)?
    } else {
        return Err(ArchiveError::UnknownFormat(path.to_owned()));
    };
    info!(path = %path.display(), images = ids.len(), "loaded archive");
    Ok(ids)
}

fn parse_config(name: &str, data: &[u8]) -> Result<ImageConfiguration, ArchiveError> {
    serde_json::from_slice(data).map_err(|source| ArchiveError::Json {
        name: name.to_owned(),
        source,
    })
}

fn image_kind(config: &ImageConfiguration) -> ImageKind {
    ImageKind::Image {
        os: config.os().to_string(),
        architecture: config.architecture().to_string(),
        variant: config.variant().clone(),
    }
}

fn load_docker_archive(store: &mut Store, contents: &ArchiveContents) -> Result<Vec<String>, ArchiveError> {
    let manifests: Vec<DockerManifest> = contents.json(DOCKER_MANIFEST_FILE)?;
    let mut ids = Vec::new();

    for manifest in manifests {
        let config_data = contents.file(&manifest.config)?;
        let config = parse_config(&manifest.config, config_data)?;
        let config_digest = store.put_blob(config_data)?;

        let mut layers = Vec::new();
        for layer in &manifest.layers {
            let layer_data = contents.file(&layer.to_string_lossy())?;
            layers.push(json!({
                "mediaType": DOCKER_LAYER,
                "size": layer_data.len(),
                "digest": store.put_blob(layer_data)?,
            }));
        }

        let image_manifest = json!({
            "schemaVersion": 2,
            "mediaType": DOCKER_MANIFEST_V2,
            "config": {
                "mediaType": DOCKER_CONFIG,
                "size": config_data.len(),
                "digest": config_digest,
            },
            "layers": layers,
        });
        let manifest_data = serde_json::to_vec(&image_manifest).map_err(|source| ArchiveError::Json {
            name: DOCKER_MANIFEST_FILE.to_owned(),
            source,
        })?;
        let digest = store.put_blob(&manifest_data)?;

        // Docker archives name images the way the docker CLI does, so a bare
        // `alpine` means `docker.io/library/alpine`.
        let names = manifest
            .repo_tags
            .iter()
            .flatten()
            .map(|tag| tag.parse::<FullyQualifiedImageName>().map(|name| name.to_string()))
            .collect::<Result<Vec<_>, _>>()?;

        let id = config_digest.trim_start_matches("sha256:").to_owned();
        debug!(%id, ?names, "loading docker archive image");
        store.create_image(Image {
            id: id.clone(),
            digest,
            names,
            created: config.created().clone(),
            kind: image_kind(&config),
        })?;
        ids.push(id);
    }
    Ok(ids)
}

/// The image name recorded in a descriptor's annotations, if it is a full
/// reference rather than just a tag.
fn ref_name(descriptor: &Descriptor) -> Option<String> {
    let annotation = descriptor.annotations().as_ref()?.get(REF_NAME_ANNOTATION)?;
    match annotation.parse::<ParsedImageReference>() {
        Ok(reference) if !reference.is_short_name() => Some(FullyQualifiedImageName::new(reference).to_string()),
        _ => {
            debug!(%annotation, "ignoring ref name that is not a full reference");
            None
        }
    }
}

fn load_oci_layout(store: &mut Store, contents: &ArchiveContents) -> Result<Vec<String>, ArchiveError> {
    let index: ImageIndex = contents.json(OCI_INDEX_FILE)?;
    let mut ids = Vec::new();

    for descriptor in index.manifests() {
        let names: Vec<String> = ref_name(descriptor).into_iter().collect();
        match descriptor.media_type() {
            MediaType::ImageManifest => {
                let (image, _) = load_oci_manifest(store, contents, descriptor.digest(), names)?;
                ids.push(image);
            }
            MediaType::Other(media_type) if media_type == DOCKER_MANIFEST_V2 => {
                let (image, _) = load_oci_manifest(store, contents, descriptor.digest(), names)?;
                ids.push(image);
            }
            MediaType::ImageIndex => {
                ids.extend(load_oci_index(store, contents, descriptor.digest(), names)?);
            }
            MediaType::Other(media_type) if media_type == DOCKER_MANIFEST_LIST => {
                ids.extend(load_oci_index(store, contents, descriptor.digest(), names)?);
            }
            other => return Err(ArchiveError::UnsupportedMediaType(other.to_string())),
        }
    }
    Ok(ids)
}

/// Stores one image manifest with its config and layers. Returns the image ID
/// and its platform.
fn load_oci_manifest(
    store: &mut Store,
    contents: &ArchiveContents,
    digest: &str,
    names: Vec<String>,
) -> Result<(String, ImageKind), ArchiveError> {
    let manifest_data = contents.copy_blob(store, digest)?;
    let manifest: ImageManifest = serde_json::from_slice(manifest_data).map_err(|source| ArchiveError::Json {
        name: digest.to_owned(),
        source,
    })?;

    let config_digest = manifest.config().digest();
    let config = parse_config(config_digest, contents.copy_blob(store, config_digest)?)?;
    for layer in manifest.layers() {
        contents.copy_blob(store, layer.digest())?;
    }

    let id = config_digest.trim_start_matches("sha256:").to_owned();
    let kind = image_kind(&config);
    debug!(%id, ?names, "loading OCI image");
    store.create_image(Image {
        id: id.clone(),
        digest: digest.to_owned(),
        names,
        created: config.created().clone(),
        kind: kind.clone(),
    })?;
    Ok((id, kind))
}

fn load_oci_index(
    store: &mut Store,
    contents: &ArchiveContents,
    digest: &str,
    names: Vec<String>,
) -> Result<Vec<String>, ArchiveError> {
    let index_data = contents.copy_blob(store, digest)?;
    let index: ImageIndex = serde_json::from_slice(index_data).map_err(|source| ArchiveError::Json {
        name: digest.to_owned(),
        source,
    })?;

    let mut ids = Vec::new();
    let mut instances = Vec::new();
    for descriptor in index.manifests() {
        let (id, kind) = match load_oci_manifest(store, contents, descriptor.digest(), Vec::new()) {
            Ok(loaded) => loaded,
            // Partial layouts only carry the instances for some platforms.
            Err(ArchiveError::MissingFile(file)) => {
                warn!(%file, instance = %descriptor.digest(), "skipping manifest list instance");
                continue;
            }
            Err(e) => return Err(e),
        };
        let instance = match (descriptor.platform(), kind) {
            (Some(platform), _) => ManifestInstance {
                digest: descriptor.digest().clone(),
                os: platform.os().to_string(),
                architecture: platform.architecture().to_string(),
                variant: platform.variant().clone(),
            },
            (None, ImageKind::Image { os, architecture, variant }) => ManifestInstance {
                digest: descriptor.digest().clone(),
                os,
                architecture,
                variant,
            },
            (None, ImageKind::ManifestList { .. }) => continue,
        };
        instances.push(instance);
        ids.push(id);
    }

    let id = digest.trim_start_matches("sha256:").to_owned();
    debug!(%id, ?names, instances = instances.len(), "loading manifest list");
    store.create_image(Image {
        id: id.clone(),
        digest: digest.to_owned(),
        names,
        created: None,
        kind: ImageKind::ManifestList { instances },
    })?;
    ids.push(id);
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use sha2::{Digest, Sha256};

    use super::*;

    fn sha256(data: &[u8]) -> String {
        format!("sha256:{:x}", Sha256::digest(data))
    }

    fn config(arch: &str) -> Vec<u8> {
        serde_json::to_vec(&json!({
            "created": "2023-03-10T06:04:46.228904662Z",
            "architecture": arch,
            "os": "linux",
            "config": {"Env": ["PATH=/usr/bin"]},
            "rootfs": {"type": "layers", "diff_ids": []},
            "history": [],
        }))
        .unwrap()
    }

    fn layer(content: &[u8]) -> Vec<u8> {
        let mut builder = tar::Builder::new(Vec::new());
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append_data(&mut header, "etc/motd", content).unwrap();
        builder.into_inner().unwrap()
    }

    fn write_tar(path: &Path, files: &[(String, Vec<u8>)], gzip: bool) {
        let mut builder = tar::Builder::new(Vec::new());
        for (name, data) in files {
            let mut header = tar::Header::new_gnu();
            header.set_size(data.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder.append_data(&mut header, name, &data[..]).unwrap();
        }
        let tarball = builder.into_inner().unwrap();

        let mut file = File::create(path).unwrap();
        if gzip {
            let mut encoder = flate2::write::GzEncoder::new(file, flate2::Compression::fast());
            encoder.write_all(&tarball).unwrap();
            encoder.finish().unwrap();
        } else {
            file.write_all(&tarball).unwrap();
        }
    }

    fn blob(data: Vec<u8>) -> (String, Vec<u8>) {
        (digest_to_blob_path(&sha256(&data)), data)
    }

    #[test]
    fn test_digest_to_blob_path() {
        assert_eq!(digest_to_blob_path("sha256:abcd"), "blobs/sha256/abcd");
    }

    #[test]
    fn test_load_docker_archive() {
        for gzip in [false, true] {
            let dir = tempfile::tempdir().unwrap();
            let archive = dir.path().join("image.tar");
            let config = config("amd64");
            let layer = layer(b"hello");
            let manifest = json!([{
                "Config": "3dd02e63.json",
                "RepoTags": ["alpine:3.18", "localhost/mine:1"],
                "Layers": ["af4c704c/layer.tar"],
            }]);
            write_tar(
                &archive,
                &[
                    ("3dd02e63.json".to_owned(), config.clone()),
                    ("af4c704c/layer.tar".to_owned(), layer.clone()),
                    ("manifest.json".to_owned(), serde_json::to_vec(&manifest).unwrap()),
                ],
                gzip,
            );

            let mut store = Store::open(dir.path().join("storage")).unwrap();
            let ids = load(&mut store, &archive).unwrap();

            let config_digest = sha256(&config);
            assert_eq!(ids, [config_digest.trim_start_matches("sha256:")]);
            let image = store.image(&ids[0]).unwrap();
            assert_eq!(image.names, ["docker.io/library/alpine:3.18", "localhost/mine:1"]);
            assert_eq!(image.created.as_deref(), Some("2023-03-10T06:04:46.228904662Z"));
            assert_eq!(
                image.kind,
                ImageKind::Image {
                    os: "linux".into(),
                    architecture: "amd64".into(),
                    variant: None,
                }
            );

            assert_eq!(store.blob(&config_digest).unwrap(), config);
            assert_eq!(store.blob(&sha256(&layer)).unwrap(), layer);
            let stored_manifest: serde_json::Value =
                serde_json::from_slice(&store.blob(&image.digest).unwrap()).unwrap();
            assert_eq!(stored_manifest["config"]["digest"], config_digest);
            assert_eq!(stored_manifest["layers"][0]["size"], layer.len());
        }
    }

    #[test]
    fn test_load_oci_layout() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("image.tar");
        let layer = layer(b"hello");
        let layer_descriptor = json!({
            "mediaType": "application/vnd.oci.image.layer.v1.tar",
            "digest": sha256(&layer),
            "size": layer.len(),
        });

        let mut files = vec![
            ("oci-layout".to_owned(), br#"{"imageLayoutVersion": "1.0.0"}"#.to_vec()),
            blob(layer.clone()),
        ];
        let mut instances = Vec::new();
        for arch in ["amd64", "arm64"] {
            let config = config(arch);
            let manifest = serde_json::to_vec(&json!({
                "schemaVersion": 2,
                "mediaType": "application/vnd.oci.image.manifest.v1+json",
                "config": {
                    "mediaType": "application/vnd.oci.image.config.v1+json",
                    "digest": sha256(&config),
                    "size": config.len(),
                },
                "layers": [layer_descriptor.clone()],
            }))
            .unwrap();
            instances.push(json!({
                "mediaType": "application/vnd.oci.image.manifest.v1+json",
                "digest": sha256(&manifest),
                "size": manifest.len(),
                "platform": {"architecture": arch, "os": "linux"},
            }));
            files.push(blob(config));
            files.push(blob(manifest));
        }
        let single_manifest_digest = instances[0]["digest"].as_str().unwrap().to_owned();

        let nested_index = serde_json::to_vec(&json!({
            "schemaVersion": 2,
            "mediaType": "application/vnd.oci.image.index.v1+json",
            "manifests": instances,
        }))
        .unwrap();
        let nested_index_digest = sha256(&nested_index);
        let index = json!({
            "schemaVersion": 2,
            "manifests": [
                {
                    "mediaType": "application/vnd.oci.image.index.v1+json",
                    "digest": nested_index_digest,
                    "size": nested_index.len(),
                    "annotations": {REF_NAME_ANNOTATION: "quay.io/multi/app:v1"},
                },
                {
                    "mediaType": "application/vnd.oci.image.manifest.v1+json",
                    "digest": single_manifest_digest,
                    "size": 1,
                    "annotations": {REF_NAME_ANNOTATION: "latest"},
                },
            ],
        });
        files.push(blob(nested_index));
        files.push(("index.json".to_owned(), serde_json::to_vec(&index).unwrap()));
        write_tar(&archive, &files, false);

        let mut store = Store::open(dir.path().join("storage")).unwrap();
        let ids = load(&mut store, &archive).unwrap();
        // two instances and the list, then the single manifest again
        assert_eq!(ids.len(), 4);

        let list = store.image(nested_index_digest.trim_start_matches("sha256:")).unwrap();
        assert_eq!(list.names, ["quay.io/multi/app:v1"]);
        let ImageKind::ManifestList { instances } = &list.kind else {
            panic!("expected a manifest list, got {:?}", list.kind);
        };
        let arches: Vec<&str> = instances.iter().map(|i| i.architecture.as_str()).collect();
        assert_eq!(arches, ["amd64", "arm64"]);

        let amd64 = store.images_by_digest(&single_manifest_digest);
        assert_eq!(amd64.len(), 1);
        assert!(amd64[0].names.is_empty());
        assert_eq!(ids[0], amd64[0].id);
        assert_eq!(ids[3], amd64[0].id);
    }

    #[test]
    fn test_bad_archives() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::open(dir.path().join("storage")).unwrap();

        let archive = dir.path().join("empty.tar");
        write_tar(&archive, &[("README".to_owned(), b"hi".to_vec())], false);
        assert!(matches!(load(&mut store, &archive), Err(ArchiveError::UnknownFormat(_))));

        let manifest = json!([{"Config": "missing.json", "RepoTags": null, "Layers": []}]);
        write_tar(
            &archive,
            &[("manifest.json".to_owned(), serde_json::to_vec(&manifest).unwrap())],
            false,
        );
        assert!(matches!(
            load(&mut store, &archive),
            Err(ArchiveError::MissingFile(name)) if name == "missing.json"
        ));

        assert!(matches!(
            load(&mut store, &dir.path().join("absent.tar")),
            Err(ArchiveError::Io { .. })
        ));
    }
}
