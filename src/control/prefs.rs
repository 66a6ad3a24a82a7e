use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

/// File name of the persisted flag inside the project config directory.
const PREFS_FILE: &str = "sound-enabled";

/// The process-wide sound preference.
///
/// A single boolean, default on, overridden at load by whatever was
/// persisted last session. Every change is written back immediately as
/// the literal string `true` or `false` - the file is user-inspectable
/// and trivially editable by hand. Storage failures degrade silently:
/// the toggle keeps working for the session, it just won't stick.
pub struct PreferenceStore {
    enabled: bool,
    path: PathBuf,
}

impl PreferenceStore {
    /// Load from the platform config directory (or the temp dir when no
    /// home is resolvable, e.g. in minimal containers).
    pub fn load() -> Self {
        Self::load_from(Self::default_path())
    }

    /// Load from an explicit path. The seam tests use to avoid touching
    /// the real config directory.
    pub fn load_from(path: PathBuf) -> Self {
        let enabled = match fs::read_to_string(&path) {
            Ok(contents) => match contents.trim() {
                "true" => true,
                "false" => false,
                other => {
                    tracing::warn!(value = other, "unrecognized sound preference, defaulting on");
                    true
                }
            },
            // Missing file is the common first-run case, not an error
            Err(_) => true,
        };

        Self { enabled, path }
    }

    fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "pling_sfx")
            .map(|dirs| dirs.config_dir().join(PREFS_FILE))
            .unwrap_or_else(|| std::env::temp_dir().join(PREFS_FILE))
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Set and persist the flag. The write happens before control returns
    /// to the caller, so a crash right after a toggle still remembers it.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;

        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let value = if enabled { "true" } else { "false" };
        if let Err(err) = fs::write(&self.path, value) {
            tracing::warn!(%err, path = %self.path.display(), "failed to persist sound preference");
        }
    }
}
