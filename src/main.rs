use clap::{Parser, Subcommand, ValueEnum};
use hct_theme::{Rgb, Scheme, Theme};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use chromaseed::api;
use chromaseed::models::{AppConfig, DEFAULT_CONFIG_FILE};
use chromaseed::server;
use chromaseed::services::{ImageLoader, ImageSource};

#[derive(Parser)]
#[command(name = "chromaseed")]
#[command(about = "Seed-color themes: schemes, palettes, contrast and wallpaper extraction")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Print the color scheme for a seed
    Scheme {
        /// Seed color (e.g. "#6750A4")
        #[arg(short, long)]
        seed: String,

        /// Generate the dark variant
        #[arg(long)]
        dark: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Print the tonal palette for a seed
    Palette {
        /// Seed color (e.g. "#6750A4")
        #[arg(short, long)]
        seed: String,
    },
    /// Print the contrast ratio of two colors
    Contrast {
        /// Text color
        foreground: String,
        /// Background color
        background: String,
    },
    /// Extract seed colors from a PNG file or http(s) URL
    Extract {
        /// Image path or URL
        image: String,

        /// Number of candidates (1 to 32)
        #[arg(short, long)]
        count: Option<usize>,

        /// Also print the light and dark schemes for the chosen seed
        #[arg(long)]
        scheme: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Css,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Chromaseed API",
        description = "Seed-color themes: schemes, palettes, contrast and wallpaper extraction",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_scheme,
        api::handle_palette,
        api::handle_contrast,
        api::handle_extract,
        api::handle_get_theme,
        api::handle_put_theme,
    ),
    components(schemas(
        api::SchemeResponse,
        api::PaletteResponse,
        api::ToneEntry,
        api::ContrastResponse,
        api::ExtractResponse,
        api::ThemeResponse,
        api::UpdateThemeRequest,
    )),
    tags(
        (name = "Scheme", description = "Role-based color schemes"),
        (name = "Palette", description = "Tonal palettes"),
        (name = "Contrast", description = "WCAG contrast checks"),
        (name = "Extraction", description = "Seed extraction from images"),
        (name = "Theme", description = "Current theme management")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Scheme { seed, dark, format }) => {
            init_cli_logging();
            run_scheme_command(&seed, dark, format)
        }
        Some(Commands::Palette { seed }) => {
            init_cli_logging();
            run_palette_command(&seed)
        }
        Some(Commands::Contrast {
            foreground,
            background,
        }) => {
            init_cli_logging();
            run_contrast_command(&foreground, &background)
        }
        Some(Commands::Extract {
            image,
            count,
            scheme,
        }) => {
            init_cli_logging();
            run_extract_command(&image, count, scheme).await
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for one-shot commands
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chromaseed=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

fn parse_seed(hex: &str) -> anyhow::Result<Rgb> {
    hex.parse()
        .map_err(|e| anyhow::anyhow!("Invalid color {hex:?}: {e}"))
}

/// Print one scheme as JSON or CSS custom properties
fn run_scheme_command(seed: &str, dark: bool, format: OutputFormat) -> anyhow::Result<()> {
    let seed = parse_seed(seed)?;
    let scheme = Scheme::from_seed(seed, dark);

    match format {
        OutputFormat::Json => {
            let response = api::SchemeResponse::new(seed, &scheme);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Css => print!("{}", scheme.to_css_variables("md-sys-color")),
    }
    Ok(())
}

fn run_palette_command(seed: &str) -> anyhow::Result<()> {
    let response = api::PaletteResponse::new(parse_seed(seed)?);

    println!(
        "{}  hue {:.1}  chroma {:.1}  tone {:.1}",
        response.seed, response.hue, response.chroma, response.tone
    );
    for entry in &response.tones {
        println!("  {:>3}  {}", entry.tone, entry.color);
    }
    Ok(())
}

fn run_contrast_command(foreground: &str, background: &str) -> anyhow::Result<()> {
    let response = api::ContrastResponse::new(parse_seed(foreground)?, parse_seed(background)?);

    println!(
        "{:.2}:1 ({})",
        response.ratio,
        if response.meets_aa { "passes AA" } else { "fails AA" }
    );
    println!("Readable text on {background}: {}", response.text_color);
    Ok(())
}

/// Extract candidates from an image (no server needed)
async fn run_extract_command(image: &str, count: Option<usize>, scheme: bool) -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    let loader = ImageLoader::from_config(&config.extraction);
    let mut extractor = config.extraction.extractor();
    if let Some(count) = count {
        let count =
            api::extract::check_count(count).map_err(|e| anyhow::anyhow!("--count: {e}"))?;
        extractor = extractor.candidates(count);
    }

    let extraction = loader
        .extract(ImageSource::parse(image), &extractor)
        .await
        .map_err(|e| anyhow::anyhow!("{image}: {e}"))?;

    if extraction.candidates.is_empty() {
        println!("No opaque pixels found; using the default seed");
    } else {
        println!("Candidates:");
        for color in &extraction.candidates {
            println!("  {} (score {})", color, hct_theme::score_seed(*color));
        }
    }
    println!("Primary: {}", extraction.primary);

    if scheme {
        let theme = Theme::from_seed(extraction.primary);
        let response = api::ThemeResponse::new(&theme);
        println!("{}", serde_json::to_string_pretty(&response)?);
    }
    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Read environment variables
    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    // Header
    println!("Chromaseed v{VERSION}");
    println!("Seed-color themes from a hex color or a wallpaper\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let config_source = match config_file {
        Some(path) if std::path::Path::new(&path).exists() => path,
        Some(_) => "defaults (file not found)".to_string(),
        None if std::path::Path::new(DEFAULT_CONFIG_FILE).exists() => {
            DEFAULT_CONFIG_FILE.to_string()
        }
        None => "defaults".to_string(),
    };
    println!("\nConfig: {config_source}");

    println!("\nCommands:");
    println!("  chromaseed serve      Start the HTTP server");
    println!("  chromaseed scheme     Print the scheme for a seed");
    println!("  chromaseed palette    Print the tonal palette for a seed");
    println!("  chromaseed contrast   Check the contrast of two colors");
    println!("  chromaseed extract    Pick a seed from a PNG image");
    println!("\nRun 'chromaseed --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chromaseed=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    let bind_addr = config.server.bind.clone();

    // Create application state using shared server module
    let state = server::create_app_state(config)?;

    // OpenAPI documentation (production only)
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Chromaseed server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
