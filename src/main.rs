use anyhow::Context;
use linkboard::{
    api::routes::build_router,
    cli::{
        init::{self, InitConfig, InitResult},
        output::Output,
        Cli, Commands,
    },
    utils::toml_config::{LinkboardConfig, ServerConfig},
    AppState,
};
use std::path::Path;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    match cli.command {
        Some(Commands::Init {
            path,
            force,
            host,
            port,
        }) => {
            let config = InitConfig {
                path,
                force,
                host,
                port,
            };
            match init::run(config, &output) {
                InitResult::Success | InitResult::AlreadyExists => Ok(()),
                InitResult::Error(e) => anyhow::bail!("init failed: {}", e),
            }
        }
        Some(Commands::Config { validate }) => show_config(&cli.config, validate, &output),
        Some(Commands::Serve) | None => serve(&cli.config, cli.verbose).await,
    }
}

fn load_config(path: &Path) -> anyhow::Result<LinkboardConfig> {
    let mut config = LinkboardConfig::load(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    config.apply_env_overrides()?;
    Ok(config)
}

fn show_config(path: &Path, validate_only: bool, output: &Output) -> anyhow::Result<()> {
    let config = match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            output.error(&format!("{:#}", e));
            return Err(e);
        }
    };

    if validate_only {
        output.success("Configuration is valid");
        return Ok(());
    }

    output.header("Server");
    output.kv("address", &config.server.bind_address());
    output.kv("log", &format!("{} ({})", config.server.log_level, config.server.log_format));
    output.kv("cors origins", &config.server.cors_origins.join(", "));

    output.header("Storage");
    output.kv("config dir", &config.storage.config_dir.display().to_string());
    output.kv("data dir", &config.storage.data_dir.display().to_string());

    output.header("LinkedIn");
    output.kv("api base", &config.linkedin.api_base);
    output.kv("oauth base", &config.linkedin.oauth_base);
    output.kv("redirect uri", &config.linkedin.redirect_uri);
    output.kv("scopes", &config.linkedin.scopes.join(" "));
    output.kv("cache ttl", &format!("{}h", config.linkedin.cache_ttl_hours));
    output.kv(
        "request timeout",
        &format!("{}s", config.linkedin.request_timeout_secs),
    );
    output.kv(
        "env credentials",
        if config.linkedin.env_credentials { "on" } else { "off" },
    );
    output.newline();

    Ok(())
}

fn init_tracing(server: &ServerConfig, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        server.log_level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "linkboard={level},linkboard_server={level},tower_http={level}"
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if server.log_format == "json" {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

async fn serve(config_path: &Path, verbose: bool) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    init_tracing(&config.server, verbose);

    let address = config.server.bind_address();
    let state = AppState::from_config(config).context("failed to initialise application state")?;

    if state.credentials.status().is_configured {
        tracing::info!("LinkedIn credentials found");
    } else {
        tracing::warn!("LinkedIn credentials not configured; the dashboard will show sample data");
    }

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;

    tracing::info!("Linkboard listening on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
