//! Per-user preferences file holding the CI access token.
//!
//! The file is an INI document with a single managed section:
//!
//! ```text
//! [TRAVISCI]
//! travisci_api_token = PutYourTravisCIKeyHere
//! ```
//!
//! A store is either owned by the caller ([`Preferences::open`]) or shared
//! through the process-wide [`instance`], which refuses to build until a
//! location has been fixed with [`determine_location`] or [`set_location`].

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};

use tracing::{debug, error, warn};

use crate::atomic_file::write_atomic;
use crate::error::{Result, TravisCliError};
use crate::ini::IniDocument;

pub const PREFERENCES_FILE_NAME: &str = ".travisci-cli.ini";
pub const TRAVIS_CI_SECTION: &str = "TRAVISCI";
pub const TRAVISCI_API_TOKEN_KEY: &str = "travisci_api_token";
pub const TOKEN_PLACEHOLDER: &str = "PutYourTravisCIKeyHere";

/// Where the preferences file lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferencesLocation {
    path: PathBuf,
}

impl PreferencesLocation {
    /// Platform default: `$HOME/.travisci-cli.ini` on Linux and macOS,
    /// `.travisci-cli.ini` in the working directory elsewhere.
    pub fn determine() -> Self {
        let path = if cfg!(any(target_os = "linux", target_os = "macos")) {
            match dirs::home_dir() {
                Some(home) => home.join(PREFERENCES_FILE_NAME),
                None => PathBuf::from(PREFERENCES_FILE_NAME),
            }
        } else {
            PathBuf::from(PREFERENCES_FILE_NAME)
        };
        PreferencesLocation { path }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        PreferencesLocation { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Preferences loaded into memory; token writes go straight back to disk
#[derive(Debug)]
pub struct Preferences {
    location: PreferencesLocation,
    document: IniDocument,
}

impl Preferences {
    /// Load the store, healing the file as needed.
    ///
    /// In order: create the file if it cannot be opened, add the section if
    /// missing, add the token key with the placeholder if missing, then save.
    /// If the file cannot be created or saved the store keeps working from
    /// memory for this run. A file that exists but is not valid INI is an
    /// error.
    pub fn open(location: &PreferencesLocation) -> Result<Self> {
        let path = location.path();
        ensure_file_exists(path);

        let document = match fs::read_to_string(path) {
            Ok(text) => IniDocument::parse(&text)?,
            Err(e) => {
                warn!(path = %path.display(), "could not read preferences: {}", e);
                IniDocument::new()
            }
        };

        let mut preferences = Preferences {
            location: location.clone(),
            document,
        };
        preferences.create_section_if_necessary(TRAVIS_CI_SECTION);
        preferences.create_needed_keys();

        if let Err(e) = preferences.save() {
            error!(path = %path.display(), "could not save preferences: {}", e);
        }

        Ok(preferences)
    }

    pub fn location(&self) -> &PreferencesLocation {
        &self.location
    }

    /// The stored token; the placeholder if it was never configured
    pub fn travisci_api_token(&self) -> &str {
        self.document
            .get(TRAVIS_CI_SECTION, TRAVISCI_API_TOKEN_KEY)
            .unwrap_or(TOKEN_PLACEHOLDER)
    }

    /// Store a new token and rewrite the whole file
    pub fn set_travisci_api_token(&mut self, value: &str) -> Result<()> {
        self.document
            .set(TRAVIS_CI_SECTION, TRAVISCI_API_TOKEN_KEY, value);
        self.save()
    }

    pub fn has_placeholder_token(&self) -> bool {
        self.travisci_api_token() == TOKEN_PLACEHOLDER
    }

    fn create_section_if_necessary(&mut self, section: &str) {
        let has_section = self.document.has_section(section);
        debug!(has_section, section, "checked preferences section");
        if !has_section {
            self.document.add_section(section);
        }
    }

    fn create_needed_keys(&mut self) {
        if !self
            .document
            .has_option(TRAVIS_CI_SECTION, TRAVISCI_API_TOKEN_KEY)
        {
            self.document
                .set(TRAVIS_CI_SECTION, TRAVISCI_API_TOKEN_KEY, TOKEN_PLACEHOLDER);
        }
    }

    fn save(&self) -> Result<()> {
        write_atomic(self.location.path(), &self.document.to_string())?;
        Ok(())
    }
}

// Any failure here is logged and swallowed so a fresh machine still works.
fn ensure_file_exists(path: &Path) {
    if fs::File::open(path).is_ok() {
        return;
    }
    match fs::write(path, "") {
        Ok(()) => warn!(path = %path.display(), "Preferences file re-created"),
        Err(e) => error!(path = %path.display(), "Error: {}", e),
    }
}

static LOCATION: OnceLock<PreferencesLocation> = OnceLock::new();
static INSTANCE: OnceLock<Mutex<Preferences>> = OnceLock::new();
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// Fix the platform default location for this process.
///
/// Must run before [`instance`]. Later calls return the already fixed location.
pub fn determine_location() -> &'static PreferencesLocation {
    LOCATION.get_or_init(PreferencesLocation::determine)
}

/// Fix an explicit location for this process.
///
/// Fails if a different location was already fixed.
pub fn set_location(location: PreferencesLocation) -> Result<&'static PreferencesLocation> {
    let fixed = LOCATION.get_or_init(|| location.clone());
    if *fixed == location {
        Ok(fixed)
    } else {
        Err(TravisCliError::preferences(format!(
            "location already fixed at {}",
            fixed.path().display()
        )))
    }
}

/// The fixed location, or [`TravisCliError::LocationNotSet`]
pub fn location() -> Result<&'static PreferencesLocation> {
    LOCATION.get().ok_or(TravisCliError::LocationNotSet)
}

/// The process-wide store, built on first use.
pub fn instance() -> Result<&'static Mutex<Preferences>> {
    if let Some(preferences) = INSTANCE.get() {
        return Ok(preferences);
    }

    let _guard = INIT_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(preferences) = INSTANCE.get() {
        return Ok(preferences);
    }

    let preferences = Preferences::open(location()?)?;
    Ok(INSTANCE.get_or_init(|| Mutex::new(preferences)))
}
