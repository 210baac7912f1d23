use clap::{Parser, Subcommand};
use dot_render::Rgb;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use doticon::api;
use doticon::models::{AppConfig, ParamQuery};
use doticon::rendering::{self, CanvasBackend};
use doticon::server;

#[derive(Parser)]
#[command(name = "doticon")]
#[command(about = "Doticon - turn images into dot-pattern PNGs")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Render an image file directly to a PNG file
    Render {
        /// Input image (PNG, JPEG, GIF or WebP)
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Maximum dot radius in pixels (1-40)
        #[arg(short = 'r', long)]
        dot_radius: Option<f64>,

        /// Gap between dots in pixels (0-40)
        #[arg(short, long)]
        spacing: Option<f64>,

        /// Paint dots with the colour of the image underneath
        #[arg(long)]
        source_color: bool,

        /// Flat dot colour, e.g. "#9fe4d0"
        #[arg(long)]
        dot_color: Option<Rgb>,

        /// Background colour, e.g. "#0f172a"
        #[arg(long)]
        background_color: Option<Rgb>,

        /// Drawing surface
        #[arg(long, value_enum)]
        canvas: Option<CanvasBackend>,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Doticon API",
        description = "Doticon - turn images into dot-pattern PNGs",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_upload,
        api::handle_render,
        api::handle_download,
        api::handle_delete,
        api::handle_convert,
    ),
    components(schemas(api::UploadForm, api::UploadResponse)),
    tags(
        (name = "Images", description = "Upload, render and download dot-pattern images")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render {
            input,
            output,
            dot_radius,
            spacing,
            source_color,
            dot_color,
            background_color,
            canvas,
        }) => run_render_command(RenderArgs {
            input,
            output,
            dot_radius,
            spacing,
            source_color,
            dot_color,
            background_color,
            canvas,
        }),
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

struct RenderArgs {
    input: PathBuf,
    output: PathBuf,
    dot_radius: Option<f64>,
    spacing: Option<f64>,
    source_color: bool,
    dot_color: Option<Rgb>,
    background_color: Option<Rgb>,
    canvas: Option<CanvasBackend>,
}

fn config_path() -> Option<PathBuf> {
    std::env::var("CONFIG_FILE").ok().map(PathBuf::from)
}

/// Render an image file to a PNG file (no server needed)
fn run_render_command(args: RenderArgs) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "doticon=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = AppConfig::load(config_path().as_deref());

    // Numbers go through the same fallbacks and clamps as the HTTP API
    let query = ParamQuery {
        dot_radius: args.dot_radius.map(|v| v.to_string()),
        spacing: args.spacing.map(|v| v.to_string()),
        use_source_color: args.source_color.then(|| "true".to_string()),
        ..Default::default()
    };
    let mut params = query.resolve(&config.defaults);
    if let Some(color) = args.dot_color {
        params.dot_color = color;
    }
    if let Some(color) = args.background_color {
        params.background_color = color;
    }

    let backend = args.canvas.unwrap_or(config.canvas);
    let summary = rendering::render_file(&args.input, &args.output, &params, backend)
        .map_err(|e| anyhow::anyhow!("{}: {e}", args.input.display()))?;

    println!(
        "Rendered {} ({}x{}, {} dots, {} bytes)",
        args.output.display(),
        summary.width,
        summary.height,
        summary.dots,
        summary.bytes
    );

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Doticon v{VERSION}");
    println!("Turn images into dot-pattern PNGs\n");

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
        Some(ref path) if PathBuf::from(path).exists() => path.to_string(),
        Some(_) => "built-in defaults (file not found)".to_string(),
        None => "built-in defaults".to_string(),
    };
    println!("\nConfig: {config_source}");

    println!("\nCommands:");
    println!("  doticon serve    Start the HTTP server");
    println!("  doticon render   Render an image file to PNG");
    println!("\nRun 'doticon --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "doticon=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let config = AppConfig::load(config_path().as_deref());

    let state = server::create_app_state(config);
    server::spawn_session_sweeper(state.sessions.clone());

    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Doticon server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
