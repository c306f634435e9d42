use appx_visuals::{Config, DirectoryLocation, ManifestReader, ReportFormat, Reporter, SchemaSelection};
use clap::Parser;
use miette::Result;
use std::path::PathBuf;
use tracing::info;

/// appx-visuals - Show the branding an AppX manifest declares
#[derive(Parser, Debug)]
#[command(name = "appx-visuals")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Install directory of the package
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Manifest schema generation to read
    #[arg(short, long, value_enum)]
    schema: Option<SchemaArg>,

    /// Manifest file name inside the install directory
    #[arg(short, long)]
    manifest: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: OutputFormat,

    /// Output file (for json format)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only print logo URIs, not the raw manifest paths
    #[arg(long)]
    uris_only: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug, Default)]
enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => ReportFormat::Terminal,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum SchemaArg {
    /// Prefer the Windows 10 schema, fall back to Windows 8.1
    Auto,
    /// Windows 10 universal (Square44x44Logo)
    Uap,
    /// Windows 8.1 (Square30x30Logo)
    Win81,
}

impl From<SchemaArg> for SchemaSelection {
    fn from(schema: SchemaArg) -> Self {
        match schema {
            SchemaArg::Auto => SchemaSelection::Auto,
            SchemaArg::Uap => SchemaSelection::Uap,
            SchemaArg::Win81 => SchemaSelection::Win81,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.quiet);

    info!("appx-visuals v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;

    let reader = ManifestReader::with_config(DirectoryLocation::new(&cli.path), &config);
    let visual = reader.read_visual_element().await?;

    let reporter = Reporter::new(cli.format.into(), cli.output).uris_only(cli.uris_only);
    reporter.report(&visual)?;

    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        // Try to load from default locations
        Config::from_default_locations(&cli.path)?
    };

    // Override with CLI arguments
    if let Some(schema) = cli.schema {
        config.schema = schema.into();
    }

    if let Some(manifest) = &cli.manifest {
        config.manifest_file = manifest.clone();
    }

    Ok(config)
}
