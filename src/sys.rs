//! Host operating system identity and private data directories.
//!
//! Classifies the host into a coarse [`OsFamily`] and derives the
//! per-application private directory root for that family. The process-wide
//! values are held by an immutable [`Sys`] value, constructed explicitly or
//! obtained once via [`Sys::current`].

use crate::config::{HIDDEN_DIR_PREFIX, LINUX_DATA_DIR, MAC_DATA_DIR, WINDOWS_DATA_DIR};
use crate::error::{Error, Result};
use directories::BaseDirs;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Coarse operating-system classification used to select file-system
/// conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OsFamily {
    /// Microsoft Windows.
    Windows,
    /// Apple macOS.
    Mac,
    /// A Linux distribution.
    Linux,
    /// Any system not otherwise detected.
    Other,
}

impl OsFamily {
    /// Classify an OS-identification string.
    ///
    /// Matching is case-insensitive and substring-based: "windows" maps to
    /// [`OsFamily::Windows`], "mac" to [`OsFamily::Mac`], "linux" to
    /// [`OsFamily::Linux`], anything else to [`OsFamily::Other`].
    pub fn classify(os_name: &str) -> Self {
        let os = os_name.to_lowercase();
        if os.contains("windows") {
            OsFamily::Windows
        } else if os.contains("mac") {
            OsFamily::Mac
        } else if os.contains("linux") {
            OsFamily::Linux
        } else {
            OsFamily::Other
        }
    }

    /// Classify the operating system this process is running on.
    pub fn current() -> Self {
        Self::classify(std::env::consts::OS)
    }

    /// Check if this system is UNIX-based.
    ///
    /// Returns `true` for [`OsFamily::Mac`], [`OsFamily::Linux`] and
    /// [`OsFamily::Other`] (most undetected systems are UNIX-based).
    pub fn is_unix(self) -> bool {
        matches!(self, OsFamily::Mac | OsFamily::Linux | OsFamily::Other)
    }

    /// Application data subdirectory relative to home, if the family has a
    /// dedicated convention.
    fn data_subdir(self) -> Option<&'static str> {
        match self {
            OsFamily::Windows => Some(WINDOWS_DATA_DIR),
            OsFamily::Mac => Some(MAC_DATA_DIR),
            OsFamily::Linux => Some(LINUX_DATA_DIR),
            OsFamily::Other => None,
        }
    }
}

/// Immutable host identity: the OS family plus the private-data directory
/// root derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sys {
    family: OsFamily,
    data_root: PathBuf,
}

impl Sys {
    /// Build a `Sys` from an explicit OS-identification string and home
    /// directory.
    ///
    /// This is the simulation entry point: tests hand in a foreign OS string
    /// and a scratch home to exercise another platform's conventions.
    ///
    /// # Arguments
    ///
    /// * `os_name` - OS-identification string, classified per
    ///   [`OsFamily::classify`]
    /// * `home` - The user home directory to derive the data root from
    pub fn from_parts(os_name: &str, home: impl AsRef<Path>) -> Self {
        let family = OsFamily::classify(os_name);
        let home = home.as_ref();
        let data_root = match family.data_subdir() {
            Some(subdir) => home.join(subdir),
            // No dedicated app-data convention; private directories land in
            // home itself (hidden with a leading dot, see private_dir).
            None => home.to_path_buf(),
        };
        Self { family, data_root }
    }

    /// Detect the identity of the host this process is running on.
    ///
    /// # Errors
    ///
    /// [`Error::HomeNotFound`] if the user home directory cannot be resolved
    /// from the execution environment.
    pub fn detect() -> Result<Self> {
        let base = BaseDirs::new().ok_or(Error::HomeNotFound)?;
        Ok(Self::from_parts(std::env::consts::OS, base.home_dir()))
    }

    /// Process-wide host identity, detected once on first use.
    ///
    /// The value is computed behind a one-time-initialization guard and is
    /// read-only afterwards, so concurrent access needs no locking.
    pub fn current() -> Result<&'static Sys> {
        static CURRENT: OnceLock<Option<Sys>> = OnceLock::new();
        CURRENT
            .get_or_init(|| Sys::detect().ok())
            .as_ref()
            .ok_or(Error::HomeNotFound)
    }

    /// The detected OS family.
    pub fn family(&self) -> OsFamily {
        self.family
    }

    /// Check if this system is UNIX-based.
    pub fn is_unix(&self) -> bool {
        self.family.is_unix()
    }

    /// The private-data directory root all app directories are created under.
    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    /// Generate the private directory for an app, creating it if needed.
    ///
    /// The directory is `<data_root>/<app_name>`, except on
    /// [`OsFamily::Other`] where the name is prefixed with a dot to hide it
    /// in home. Creation includes missing parents and is idempotent; an
    /// existing directory is returned as-is.
    ///
    /// `app_name` is joined unvalidated; callers are responsible for
    /// sanitizing names containing path separators.
    ///
    /// # Errors
    ///
    /// [`Error::DirUnavailable`] if a non-directory occupies the target path
    /// or the directory cannot be created.
    pub fn private_dir(&self, app_name: &str) -> Result<PathBuf> {
        let dir_name = if self.family == OsFamily::Other {
            format!("{HIDDEN_DIR_PREFIX}{app_name}")
        } else {
            app_name.to_string()
        };
        let dir = self.data_root.join(dir_name);

        if dir.is_dir() {
            return Ok(dir);
        }
        if dir.exists() {
            warn!(
                "[sys] Private directory path occupied by a non-directory: {}",
                dir.display()
            );
            return Err(Error::DirUnavailable(dir));
        }
        match std::fs::create_dir_all(&dir) {
            Ok(()) => {
                debug!("[sys] Created private directory: {}", dir.display());
                Ok(dir)
            }
            Err(err) => {
                warn!(
                    "[sys] Could not create private directory {}: {err:?}",
                    dir.display()
                );
                Err(Error::DirUnavailable(dir))
            }
        }
    }

    /// Generate the private directory for an app and return a file path
    /// inside it.
    ///
    /// Calls [`Sys::private_dir`] on `app_name` and joins `file_name` onto
    /// the result. The file itself is not created.
    ///
    /// # Errors
    ///
    /// Propagates the [`Error::DirUnavailable`] failure of
    /// [`Sys::private_dir`].
    pub fn private_file(&self, app_name: &str, file_name: &str) -> Result<PathBuf> {
        Ok(self.private_dir(app_name)?.join(file_name))
    }
}

/// Generate the private directory for an app on the current host.
///
/// Convenience wrapper over [`Sys::current`] and [`Sys::private_dir`].
pub fn private_dir(app_name: &str) -> Result<PathBuf> {
    Sys::current()?.private_dir(app_name)
}

/// Return a file path inside the app's private directory on the current host.
///
/// Convenience wrapper over [`Sys::current`] and [`Sys::private_file`].
pub fn private_file(app_name: &str, file_name: &str) -> Result<PathBuf> {
    Sys::current()?.private_file(app_name, file_name)
}
