use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use color_engine::{Lab, Rgb};
use colorlens::api;
use colorlens::assets::AssetLoader;
use colorlens::models::AppConfig;
use colorlens::server;
use colorlens::services::{ColorService, MixOverrides};

#[derive(Parser)]
#[command(name = "colorlens")]
#[command(about = "Colorlens - color naming, analysis and paint-mix recipes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Name a color and show it in every color space
    Analyze {
        /// Hex color (e.g. "#E30022")
        hex: String,
    },
    /// Compute a paint-mix recipe for a color
    Mix {
        /// Target hex color
        hex: String,

        /// Maximum number of paints (1-4)
        #[arg(short, long)]
        max_paints: Option<usize>,

        /// Prefer fewer and cheaper paints among equally close recipes
        #[arg(long)]
        prefer_cost_effective: bool,

        /// Skip the refinement pass
        #[arg(long)]
        no_color_correction: bool,
    },
    /// Perceptual difference (CIEDE2000) between two colors
    DeltaE {
        /// First hex color
        a: String,
        /// Second hex color
        b: String,
    },
    /// List the reference colors
    Colors {
        /// Only list this category
        #[arg(short, long)]
        category: Option<String>,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Colorlens API",
        description = "Color naming, analysis and paint-mix recipes",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_analyze,
        api::handle_mix,
        api::handle_delta_e,
        api::handle_colors,
    ),
    components(schemas(
        api::ColorInput,
        api::RgbDto,
        api::LabDto,
        api::HslDto,
        api::CmykDto,
        api::BreakdownDto,
        api::ColorEntryDto,
        api::AnalyzeResponse,
        api::MatchInfo,
        api::MixRequest,
        api::MixResponse,
        api::MixPaint,
        api::DeltaERequest,
        api::DeltaEResponse,
        api::ColorsResponse,
    )),
    tags(
        (name = "Colors", description = "Color analysis, naming and comparison"),
        (name = "Mixing", description = "Paint-mix recipes")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Analyze { hex }) => run_analyze_command(&hex),
        Some(Commands::Mix {
            hex,
            max_paints,
            prefer_cost_effective,
            no_color_correction,
        }) => run_mix_command(
            &hex,
            MixOverrides {
                max_paints,
                prefer_cost_effective: prefer_cost_effective.then_some(true),
                allow_color_correction: no_color_correction.then_some(false),
            },
        ),
        Some(Commands::DeltaE { a, b }) => run_delta_e_command(&a, &b),
        Some(Commands::Colors { category }) => run_colors_command(category.as_deref()),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn asset_loader_from_env() -> AssetLoader {
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let colors_file = std::env::var("COLORS_FILE").ok().map(PathBuf::from);
    AssetLoader::new(config_file, colors_file)
}

/// Minimal logging and a loaded service for one-shot commands
fn cli_service() -> anyhow::Result<ColorService> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorlens=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let loader = asset_loader_from_env();
    let config = AppConfig::load_from_assets(&loader);
    Ok(ColorService::from_assets(&loader, &config)?)
}

fn run_analyze_command(hex: &str) -> anyhow::Result<()> {
    let service = cli_service()?;
    let analysis = service.analyze(Rgb::from_hex(hex)?)?;
    let b = &analysis.breakdown;
    let entry = &analysis.description.matched;

    println!("{}\n", analysis.description.name);
    println!("  Hex:  {}", b.hex);
    println!("  RGB:  {}, {}, {}", b.rgb.r, b.rgb.g, b.rgb.b);
    println!("  HSL:  {}°, {}%, {}%", b.hsl.h, b.hsl.s, b.hsl.l);
    println!("  CMYK: {}%, {}%, {}%, {}%", b.cmyk.c, b.cmyk.m, b.cmyk.y, b.cmyk.k);
    println!("  LAB:  {:.2}, {:.2}, {:.2}", b.lab.l, b.lab.a, b.lab.b);

    println!(
        "\nClosest reference: {} ({}), ΔE {:.2}",
        entry.name, entry.category, analysis.description.delta_e
    );
    if let Some(ref second) = analysis.description.second {
        println!("Runner-up:         {} ({})", second.name, second.category);
    }
    for (label, code) in [
        ("Pantone", &entry.pantone),
        ("NCS", &entry.ncs),
        ("RAL", &entry.ral),
    ] {
        if let Some(code) = code {
            println!("  {label}: {code}");
        }
    }

    Ok(())
}

fn run_mix_command(hex: &str, overrides: MixOverrides) -> anyhow::Result<()> {
    let service = cli_service()?;
    let target = Lab::from(Rgb::from_hex(hex)?);
    let result = service.mix(target, overrides)?;

    println!("Recipe for {}:\n", Rgb::from_hex(hex)?);
    for component in &result.paints {
        println!(
            "  {:>5.1}%  {:<24} {}",
            component.percentage, component.paint.name, component.paint.hex
        );
    }
    println!("\n  Mixed:    {}", result.mixed_hex);
    println!("  ΔE:       {:.2} ({:?})", result.delta_e, result.quality);
    println!("  Cost:     {:.2}", result.estimated_cost);
    if result.requires_color_correction {
        println!("\nThe mixture is visibly off; adjust by eye.");
    }

    Ok(())
}

fn run_delta_e_command(a: &str, b: &str) -> anyhow::Result<()> {
    let service = cli_service()?;
    let report = service.delta_e(
        Lab::from(Rgb::from_hex(a)?),
        Lab::from(Rgb::from_hex(b)?),
    )?;

    println!("ΔE00 = {:.4}", report.delta_e);
    println!("{}", report.category.describe());
    Ok(())
}

fn run_colors_command(category: Option<&str>) -> anyhow::Result<()> {
    let service = cli_service()?;
    let colors = service.colors(category);

    for entry in &colors {
        println!("  {:<28} {}  {}", entry.name, entry.hex, entry.category);
    }
    println!("\n{} colors", colors.len());
    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Read environment variables
    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let colors_file = std::env::var("COLORS_FILE").ok();

    // Header
    println!("Colorlens v{VERSION}");
    println!("Color naming, analysis and paint-mix recipes\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  COLORS_FILE = {}",
        colors_file.as_deref().unwrap_or("(not set)")
    );

    // Asset sources section
    println!("\nAsset Sources:");

    let config_source = match config_file {
        Some(ref path) if PathBuf::from(path).exists() => path.to_string(),
        Some(_) => "embedded (file not found)".to_string(),
        None => "embedded".to_string(),
    };
    println!("  Config:  {config_source}");

    let loader = asset_loader_from_env();
    let config = AppConfig::load_from_assets(&loader);
    let source = loader.dataset_source(config.dataset.path.as_deref());
    match loader.read_dataset(config.dataset.path.as_deref()) {
        Ok((json, _)) => match color_engine::ColorDatabase::from_json(&json) {
            Ok(db) => println!("  Colors:  {source} ({} entries)", db.len()),
            Err(e) => println!("  Colors:  {source} (invalid: {e})"),
        },
        Err(e) => println!("  Colors:  {source} (unreadable: {e})"),
    }

    // Commands section
    println!("\nCommands:");
    println!("  colorlens serve      Start the HTTP server");
    println!("  colorlens analyze    Name a color and show its breakdown");
    println!("  colorlens mix        Compute a paint-mix recipe");
    println!("  colorlens delta-e    Compare two colors");
    println!("  colorlens colors     List the reference colors");
    println!("\nRun 'colorlens --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorlens=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let asset_loader = Arc::new(asset_loader_from_env());

    tracing::info!(
        config = ?asset_loader.config_file().map(|p| p.display().to_string()).unwrap_or_else(|| "embedded".to_string()),
        "Asset sources configured"
    );

    // Create application state using shared server module
    let state = server::create_app_state(asset_loader)?;

    // Build router: start with shared API routes, add production-only routes
    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Colorlens server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
