use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use buildah_hwc::{
    archive,
    store::{ImageKind, Store},
    system_context::{SystemContext, SystemContextOptions, DEFAULT_ROOT},
    tag::tag_cmd,
};

const SHORT_ID_LEN: usize = 12;

#[derive(clap::Args, Debug)]
struct GlobalOptions {
    /// Storage root directory
    #[arg(long, global = true, env = "BUILDAH_ROOT", default_value = DEFAULT_ROOT)]
    root: PathBuf,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Path to registries.conf
    #[arg(long, global = true, env = "CONTAINERS_REGISTRIES_CONF")]
    registries_conf: Option<PathBuf>,

    /// Prefer images for this OS instead of the host's
    #[arg(long, global = true)]
    override_os: Option<String>,

    /// Prefer images for this architecture instead of the host's
    #[arg(long, global = true)]
    override_arch: Option<String>,

    /// Prefer images for this architecture variant
    #[arg(long, global = true)]
    override_variant: Option<String>,
}

impl From<&GlobalOptions> for SystemContextOptions {
    fn from(options: &GlobalOptions) -> Self {
        SystemContextOptions {
            root: Some(options.root.clone()),
            registries_conf: options.registries_conf.clone(),
            override_os: options.override_os.clone(),
            override_arch: options.override_arch.clone(),
            override_variant: options.override_variant.clone(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "buildah", author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: SubCommand,
}

#[derive(Subcommand, Debug)]
enum SubCommand {
    /// Add one or more additional names to a local image
    Tag {
        #[arg(value_name = "IMAGE NEW-NAME")]
        args: Vec<String>,
    },
    /// List images in local storage
    Images,
    /// Load images from a docker or OCI archive
    Load {
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn open_store(options: &SystemContextOptions) -> anyhow::Result<Store> {
    let system_context = SystemContext::new(options).context("building system context")?;
    Ok(Store::open(&system_context.root)?)
}

fn images(options: &SystemContextOptions) -> anyhow::Result<()> {
    let store = open_store(options)?;
    println!("{:<12}  {:<16}  NAMES", "IMAGE ID", "PLATFORM");
    for image in store.images() {
        let platform = match &image.kind {
            ImageKind::Image {
                os, architecture, ..
            } => format!("{os}/{architecture}"),
            ImageKind::ManifestList { instances } => format!("list of {}", instances.len()),
        };
        let id = &image.id[..image.id.len().min(SHORT_ID_LEN)];
        let names = if image.names.is_empty() {
            "<none>".to_owned()
        } else {
            image.names.join(", ")
        };
        println!("{id:<12}  {platform:<16}  {names}");
    }
    Ok(())
}

fn load(options: &SystemContextOptions, input: &Path) -> anyhow::Result<()> {
    let mut store = open_store(options)?;
    let ids = archive::load(&mut store, input).with_context(|| format!("loading {}", input.display()))?;
    for id in ids {
        println!("Loaded image: {id}");
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&args.global.log_level)
            .with_context(|| format!("invalid log level {:?}", args.global.log_level))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let options = SystemContextOptions::from(&args.global);
    match args.command {
        SubCommand::Tag { args } => tag_cmd(&args, &options),
        SubCommand::Images => images(&options),
        SubCommand::Load { input } => load(&options, &input),
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
