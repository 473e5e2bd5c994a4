//! `buildah tag IMAGE NEW-NAME...`

use anyhow::{bail, Context};

use crate::{
    runtime::{LookupImageOptions, Runtime, RuntimeError},
    store::{Image, Store},
    system_context::{SystemContext, SystemContextOptions},
};

pub const MISSING_ARGS: &str = "image name and at least one new name must be specified";

/// Something an image can be tagged in.
pub trait Tagger {
    type Error;

    fn tag(&mut self, image: &Image, name: &str) -> Result<(), Self::Error>;
}

impl Tagger for Runtime {
    type Error = RuntimeError;

    fn tag(&mut self, image: &Image, name: &str) -> Result<(), RuntimeError> {
        Runtime::tag(self, image, name)
    }
}

/// Applies `names` to `image` in order, stopping at the first failure.
pub fn tag_image<T: Tagger>(tagger: &mut T, image: &Image, names: &[String]) -> Result<(), T::Error> {
    names.iter().try_for_each(|name| tagger.tag(image, name))
}

/// Resolves `args[0]` and adds every following argument as a new name.
pub fn tag_cmd(args: &[String], options: &SystemContextOptions) -> anyhow::Result<()> {
    let [image_name, names @ ..] = args else {
        bail!(MISSING_ARGS);
    };
    if names.is_empty() {
        bail!(MISSING_ARGS);
    }

    let system_context = SystemContext::new(options).context("building system context")?;
    let store = Store::open(&system_context.root)?;
    let mut runtime = Runtime::new(store, system_context);

    let image = runtime.lookup_image(image_name, &LookupImageOptions { manifest_list: true })?;
    tag_image(&mut runtime, &image, names)?;
    Ok(())
}
