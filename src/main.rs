use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use qrdeco::{Color, ECLevel, LogoHitTest, LogoSource, QRBuilder, RenderConfig};

#[derive(Parser)]
#[command(name = "qrdeco")]
#[command(about = "Render a QR code with round dots, eye markers and a centred logo", long_about = None)]
struct Cli {
    /// Text to encode
    data: String,

    /// Output file, SVG when the extension is .svg and PNG otherwise
    #[arg(long, short = 'o', default_value = "qr.png")]
    output: PathBuf,

    /// TOML file with render settings; flags override it
    #[arg(long, short = 'c', env = "QRDECO_CONFIG")]
    config: Option<PathBuf>,

    /// Side length of the code
    #[arg(long, short = 's')]
    size: Option<f64>,

    /// Logo image file
    #[arg(long, short = 'l')]
    logo: Option<PathBuf>,

    #[arg(long)]
    logo_size: Option<f64>,

    #[arg(long)]
    logo_padding: Option<f64>,

    #[arg(long)]
    logo_border_width: Option<f64>,

    /// Dot, eye and ring color, as #RRGGBB
    #[arg(long)]
    foreground: Option<Color>,

    /// Canvas and mask color, as #RRGGBB
    #[arg(long)]
    background: Option<Color>,

    /// Error correction level: L, M, Q or H
    #[arg(long, short = 'e')]
    ec_level: Option<ECLevel>,

    /// How cells are tested against the logo mask: corner-point or cell-overlap
    #[arg(long)]
    hit_test: Option<LogoHitTest>,

    /// Pixels per unit of size for PNG output (canvas side capped at 16384 px)
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    scale: u32,

    /// Print the module matrix to the terminal
    #[arg(long, short = 'p')]
    preview: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Cli {
    /// Defaults, then the config file, then flags.
    fn render_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                RenderConfig::from_toml_str(&text)
                    .with_context(|| format!("Invalid config {}", path.display()))?
            }
            None => RenderConfig::default(),
        };

        if let Some(v) = self.size {
            config.size = v;
        }
        if let Some(v) = self.logo_size {
            config.logo_size = v;
        }
        if let Some(v) = self.logo_padding {
            config.logo_padding = v;
        }
        if let Some(v) = self.logo_border_width {
            config.logo_border_width = v;
        }
        if let Some(v) = self.foreground {
            config.foreground = v;
        }
        if let Some(v) = self.background {
            config.background = v;
        }
        if let Some(v) = self.ec_level {
            config.ec_level = v;
        }
        if let Some(v) = self.hit_test {
            config.logo_hit_test = v;
        }
        if let Some(path) = &self.logo {
            config.logo = Some(LogoSource::Path(path.clone()));
        }
        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.render_config()?;
    debug!(?config, "Resolved render config");

    let qr = QRBuilder::new(&cli.data)
        .config(config)
        .build()
        .context("Failed to render QR code")?;

    if cli.preview {
        println!("{}", qr.matrix().to_str());
    }

    qr.save(&cli.output, cli.scale)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;
    info!(output = %cli.output.display(), "Done");

    Ok(())
}
