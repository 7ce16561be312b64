mod cli;
mod replay;
mod script;

use spaces_common::SpacesError;
use spaces_config::SpacesConfig;
use tracing_subscriber::EnvFilter;

use replay::Replay;

fn load_config(args: &cli::Args) -> (SpacesConfig, Option<SpacesError>) {
    let loaded = match &args.config {
        Some(path) => spaces_config::toml_loader::load_from_path(path),
        None => spaces_config::load_config(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (SpacesConfig::default(), Some(e.into())),
    }
}

fn run(args: &cli::Args, config: &SpacesConfig) -> Result<Replay, SpacesError> {
    let source = std::fs::read_to_string(&args.script)?;
    let steps = script::parse(&source)?;
    tracing::info!("Replaying {} steps from {}", steps.len(), args.script.display());

    let mut replay = Replay::new(&config.toasts);
    replay.run(steps);
    Ok(replay)
}

fn main() {
    let args = cli::parse();

    // Config decides the default log level, so it loads before logging.
    let (config, config_err) = load_config(&args);

    let log_directive = args
        .log_level
        .as_deref()
        .unwrap_or(config.logging.level.directive());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "spaces=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("spaces-replay v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_err {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    let replay = match run(&args, &config) {
        Ok(replay) => replay,
        Err(e) => {
            tracing::error!("Replay failed: {e}");
            std::process::exit(1);
        }
    };

    for line in replay.open_toast_lines() {
        println!("{line}");
    }
    for cmd in replay.commands() {
        println!("command\t{cmd:?}");
    }
}
