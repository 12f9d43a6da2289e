use std::fs;
use std::time::Duration;

use anyhow::{Context, Result};
use banner::{parse_hex_color, BannerLayout};
use petconfig::AppConfig;
use petdata::Pet;
use tracing_subscriber::EnvFilter;

use crate::cli::{parse_window_size, Cli, Command, ExportArgs, RunArgs};
use crate::paths::AppPaths;
use crate::window::{self, WindowSettings};

pub fn run(cli: Cli) -> Result<()> {
    initialise_tracing();

    match cli.command {
        Some(Command::Export(args)) => run_export(&args),
        None => run_window(&cli.run),
    }
}

fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run_window(args: &RunArgs) -> Result<()> {
    let paths = AppPaths::discover()?;
    tracing::debug!(
        config = %paths.config_dir().display(),
        assets = %paths.assets_dir().display(),
        "resolved petman paths"
    );

    let mut config = load_config(args, &paths)?;
    apply_overrides(args, &mut config)?;

    let assets_dir = args
        .assets
        .clone()
        .unwrap_or_else(|| paths.assets_dir().to_path_buf());
    let paths = paths.with_assets_dir(assets_dir);

    let top_path = paths.asset(&config.theme.top_image);
    let bottom_path = paths.asset(&config.theme.bottom_image);
    let icon_path = paths.asset(&config.theme.icon);

    let fill = parse_hex_color(&config.theme.background)
        .with_context(|| format!("invalid theme background '{}'", config.theme.background))?;

    let layout = BannerLayout::from_paths(&top_path, &bottom_path, fill)
        .context("failed to load banner assets")?;
    tracing::info!(
        top = %top_path.display(),
        bottom = %bottom_path.display(),
        "loaded banner sources"
    );

    window::run(
        WindowSettings {
            title: config.window.title,
            size: (config.window.width, config.window.height),
            debounce: config.theme.debounce,
            icon: Some(icon_path),
        },
        layout,
    )
}

fn load_config(args: &RunArgs, paths: &AppPaths) -> Result<AppConfig> {
    let explicit = args.config.as_deref();
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => paths.config_file(),
    };

    if !path.exists() {
        if explicit.is_some() {
            anyhow::bail!("config file {} does not exist", path.display());
        }
        tracing::debug!(path = %path.display(), "no config file; using defaults");
        return Ok(AppConfig::default());
    }

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config at {}", path.display()))?;
    let config = AppConfig::from_toml_str(&raw)
        .with_context(|| format!("failed to load config at {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded configuration");
    Ok(config)
}

fn apply_overrides(args: &RunArgs, config: &mut AppConfig) -> Result<()> {
    if let Some(size) = args.size.as_deref() {
        let (width, height) = parse_window_size(size).map_err(anyhow::Error::msg)?;
        config.window.width = width;
        config.window.height = height;
    }

    if let Some(background) = args.background.as_deref() {
        parse_hex_color(background)
            .with_context(|| format!("invalid --background '{background}'"))?;
        config.theme.background = background.to_string();
    }

    if let Some(ms) = args.debounce_ms {
        config.theme.debounce = Duration::from_millis(ms);
    }

    Ok(())
}

fn run_export(args: &ExportArgs) -> Result<()> {
    let pets = if args.sample { vec![Pet::sample()] } else { Vec::new() };
    petdata::save_pets(&pets, &args.out)
        .with_context(|| format!("failed to export pets to {}", args.out.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn export_writes_sample_collection() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("pets.json");

        run_export(&ExportArgs {
            out: out.clone(),
            sample: true,
        })
        .unwrap();

        let raw = fs::read_to_string(&out).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["name"], "Duke Rufus");
        assert_eq!(value[0]["talents"][1]["stat_school"], "MYTH");
    }

    #[test]
    fn size_override_applies_to_config() {
        let mut config = AppConfig::default();
        let args = RunArgs {
            config: None,
            assets: None,
            size: Some("1280x800".to_string()),
            background: Some("#102030".to_string()),
            debounce_ms: Some(25),
        };

        apply_overrides(&args, &mut config).unwrap();

        assert_eq!((config.window.width, config.window.height), (1280, 800));
        assert_eq!(config.theme.background, "#102030");
        assert_eq!(config.theme.debounce, Duration::from_millis(25));
    }

    #[test]
    fn bad_background_override_is_rejected() {
        let mut config = AppConfig::default();
        let args = RunArgs {
            config: None,
            assets: None,
            size: None,
            background: Some("nothex".to_string()),
            debounce_ms: None,
        };

        assert!(apply_overrides(&args, &mut config).is_err());
    }
}
