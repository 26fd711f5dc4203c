use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use iconsetgen::{config, logger};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "mkiconset", version, about = "Render the app icon into a macOS .appiconset")]
struct Cli {
    /// key=value config file (default: platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Icon set directory to fill
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Where to write the SVG source
    #[arg(long)]
    svg: Option<PathBuf>,
    /// Converter command, e.g. "rsvg-convert"
    #[arg(long)]
    converter: Option<String>,
    /// Message printed for skipped sizes
    #[arg(long)]
    install_hint: Option<String>,
    /// Debug log file
    #[arg(long, conflicts_with = "no_log_file")]
    log_file: Option<PathBuf>,
    /// Disable the debug log file
    #[arg(long, default_value_t = false)]
    no_log_file: bool,
}

impl Cli {
    fn apply(self, cfg: &mut config::Config) {
        if let Some(dir) = self.out {
            cfg.iconset_dir = dir;
        }
        if let Some(svg) = self.svg {
            cfg.svg_path = svg;
        }
        if let Some(conv) = self.converter {
            cfg.converter = conv;
        }
        if let Some(hint) = self.install_hint {
            cfg.install_hint = hint;
        }
        if let Some(log) = self.log_file {
            cfg.log_file = Some(log);
        }
        if self.no_log_file {
            cfg.log_file = None;
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let mut cfg = config::read_config(cli.config.as_deref())?;
    cli.apply(&mut cfg);
    let _guard = logger::init_tracing(cfg.log_file.as_deref());
    debug!("config: {:?}", cfg);

    let summary = iconsetgen::generate(&cfg)?;
    info!(
        "{} of {} sizes produced, manifest at {}",
        summary.produced(),
        summary.results.len(),
        summary.manifest_path.display()
    );
    Ok(())
}
