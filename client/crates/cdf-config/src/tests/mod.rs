mod config;
mod session;

use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory, point CDF_CONFIG_DIR at it and make sure
/// no stray CDF_* overrides leak in from the environment
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let guards = vec![
        EnvGuard::set("CDF_CONFIG_DIR", temp.path().to_str().unwrap()),
        EnvGuard::remove("CDF_API_BASE_URL"),
        EnvGuard::remove("CDF_SESSION_TOKEN_FILE"),
        EnvGuard::remove("CDF_LOG_LEVEL"),
        EnvGuard::remove("CDF_LOG_COLORED"),
        EnvGuard::remove("CDF_LOG_FILE"),
    ];
    (temp, guards)
}
