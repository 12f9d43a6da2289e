use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use directories_next::ProjectDirs;

pub const ENV_CONFIG_DIR: &str = "PETMAN_CONFIG_DIR";
pub const ENV_ASSETS_DIR: &str = "PETMAN_ASSETS_DIR";

const QUALIFIER: &str = "io";
const ORGANISATION: &str = "PetManager";
const APPLICATION: &str = "PetMan";

/// Resolved directories for the running application.
///
/// Environment overrides win, then the platform project directories. The
/// assets directory additionally falls back to an `assets/` folder next to
/// the executable so a plain unpacked build finds its banners.
#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
    assets_dir: PathBuf,
}

impl AppPaths {
    pub fn discover() -> Result<Self> {
        let project_dirs = ProjectDirs::from(QUALIFIER, ORGANISATION, APPLICATION)
            .ok_or_else(|| anyhow!("failed to determine user directories"))?;

        let config_dir = env_override(ENV_CONFIG_DIR)
            .unwrap_or_else(|| project_dirs.config_dir().to_path_buf());
        let assets_dir = env_override(ENV_ASSETS_DIR)
            .or_else(exe_adjacent_assets)
            .unwrap_or_else(|| project_dirs.data_dir().join("assets"));

        Ok(Self {
            config_dir,
            assets_dir,
        })
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("petman.toml")
    }

    /// Returns a copy with the assets directory replaced (CLI override).
    pub fn with_assets_dir(mut self, assets_dir: PathBuf) -> Self {
        self.assets_dir = assets_dir;
        self
    }

    pub fn asset(&self, relative: &Path) -> PathBuf {
        if relative.is_absolute() {
            relative.to_path_buf()
        } else {
            self.assets_dir.join(relative)
        }
    }
}

fn env_override(name: &str) -> Option<PathBuf> {
    match env::var_os(name) {
        Some(value) if !value.as_os_str().is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}

fn exe_adjacent_assets() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    let candidate = exe.parent()?.join("assets");
    candidate.is_dir().then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_lock() -> &'static Mutex<()> {
        static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvGuard {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvGuard {
        fn set(key: &'static str, value: &Path) -> Self {
            let previous = env::var_os(key);
            env::set_var(key, value);
            Self { key, previous }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            if let Some(value) = self.previous.take() {
                env::set_var(self.key, value);
            } else {
                env::remove_var(self.key);
            }
        }
    }

    #[test]
    fn env_overrides_take_precedence() {
        let _guard = env_lock().lock().unwrap();
        let root = TempDir::new().unwrap();
        let config_dir = root.path().join("config");
        let assets_dir = root.path().join("assets");

        let _config_guard = EnvGuard::set(ENV_CONFIG_DIR, &config_dir);
        let _assets_guard = EnvGuard::set(ENV_ASSETS_DIR, &assets_dir);

        let paths = AppPaths::discover().unwrap();

        assert_eq!(paths.config_dir(), config_dir.as_path());
        assert_eq!(paths.assets_dir(), assets_dir.as_path());
        assert_eq!(paths.config_file(), config_dir.join("petman.toml"));
    }

    #[test]
    fn relative_assets_resolve_against_assets_dir() {
        let _guard = env_lock().lock().unwrap();
        let root = TempDir::new().unwrap();
        let assets_dir = root.path().join("assets");
        let _assets_guard = EnvGuard::set(ENV_ASSETS_DIR, &assets_dir);

        let paths = AppPaths::discover().unwrap();

        assert_eq!(
            paths.asset(Path::new("background_top.png")),
            assets_dir.join("background_top.png")
        );
        assert_eq!(
            paths.asset(Path::new("/absolute/icon.png")),
            PathBuf::from("/absolute/icon.png")
        );
    }
}
