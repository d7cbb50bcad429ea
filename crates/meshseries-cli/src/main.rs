//! meshseries - load Wavefront OBJ meshes and mesh time series from the command line

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use config::{Config, OutputFormat};
use meshseries_core::{load_source, to_markdown, LoadOptions, LoadedMesh, MeshSource};
use std::fs;
use std::path::{Path, PathBuf};

/// Verbosity level for output control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Verbosity {
    /// Errors only
    Quiet,
    /// Warnings and status lines (default)
    Normal,
    /// Loader progress as well
    Verbose,
}

impl Verbosity {
    /// Create from CLI flags
    const fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Default log filter for this level, overridden by `RUST_LOG`
    const fn log_filter(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
        }
    }

    const fn should_show_output(self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "meshseries",
    about = "Load Wavefront OBJ meshes and mesh time series",
    long_about = "Load Wavefront OBJ meshes and mesh time series.\n\
                  \n\
                  A single .obj file loads as one mesh. Several files, or a directory,\n\
                  load as a time series with the file position as a leading coordinate.",
    version
)]
struct Args {
    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Show loader progress
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Use this config file instead of ~/.meshseries.toml and ./.meshseries.toml
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a mesh, a list of meshes, or a directory of meshes
    #[command(long_about = "Load a mesh, a list of meshes, or a directory of meshes.\n\
                      \n\
                      Examples:\n  \
                      meshseries load cube.obj\n  \
                      meshseries load frame_0.obj frame_1.obj frame_2.obj\n  \
                      meshseries load frames/ --sort --format json -o series.json")]
    Load {
        /// Input .obj file(s) or a directory
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<PathBuf>,

        /// Output format [default: summary]
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write to FILE instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Order directory entries by file name
        #[arg(long)]
        sort: bool,

        /// Compact JSON (no pretty-printing)
        #[arg(long)]
        compact: bool,

        /// Title used in the summary (defaults to the input name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let verbosity = Verbosity::from_flags(args.quiet, args.verbose);

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(verbosity.log_filter()),
    )
    .target(env_logger::Target::Stderr)
    .init();

    let config = match Config::resolve(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red().bold());
            std::process::exit(1);
        }
    };

    match args.command {
        Commands::Load {
            paths,
            format,
            output,
            sort,
            compact,
            name,
        } => {
            let options = LoadOptions {
                entry_order: config.resolve_entry_order(sort),
            };
            let request = LoadRequest {
                format: config.resolve_format(format),
                pretty: config.resolve_pretty(compact),
                output,
                name,
            };
            if let Err(e) = run_load(&paths, options, &request, verbosity) {
                eprintln!("{} {e:#}", "Error:".red().bold());
                std::process::exit(1);
            }
        }
        Commands::Config => {
            let text = toml::to_string_pretty(&config).context("Failed to serialize config")?;
            print!("{text}");
        }
    }

    Ok(())
}

/// Resolved output settings for `meshseries load`
#[derive(Debug)]
struct LoadRequest {
    format: OutputFormat,
    pretty: bool,
    output: Option<PathBuf>,
    name: Option<String>,
}

fn run_load(
    paths: &[PathBuf],
    options: LoadOptions,
    request: &LoadRequest,
    verbosity: Verbosity,
) -> Result<()> {
    let source = match paths {
        [single] => MeshSource::from_path(single),
        _ => MeshSource::from_paths(paths),
    };

    let loaded = load_source(&source, &options)
        .with_context(|| format!("Failed to load {}", describe_paths(paths)))?;
    log::info!(
        "Loaded {} vertices and {} faces",
        loaded.vertex_count(),
        loaded.face_count()
    );

    let rendered = render(&loaded, paths, request)?;

    match &request.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            if verbosity.should_show_output() {
                eprintln!(
                    "{} Wrote {} ({} vertices, {} faces)",
                    "✓".green().bold(),
                    path.display(),
                    loaded.vertex_count(),
                    loaded.face_count()
                );
            }
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn render(loaded: &LoadedMesh, paths: &[PathBuf], request: &LoadRequest) -> Result<String> {
    match request.format {
        OutputFormat::Summary => {
            let name = request
                .name
                .clone()
                .unwrap_or_else(|| default_name(paths));
            Ok(to_markdown(&loaded.summary(name)))
        }
        OutputFormat::Json => {
            let mut json = loaded
                .to_json(request.pretty)
                .context("Failed to serialize mesh to JSON")?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Summary title: the file name for one input, otherwise "N meshes"
fn default_name(paths: &[PathBuf]) -> String {
    match paths {
        [single] => file_label(single),
        _ => format!("{} meshes", paths.len()),
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

fn describe_paths(paths: &[PathBuf]) -> String {
    match paths {
        [single] => single.display().to_string(),
        _ => format!("{} paths", paths.len()),
    }
}
