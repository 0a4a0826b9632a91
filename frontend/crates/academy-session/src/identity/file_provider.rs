use crate::identity::{
    IdentityProvider,
    error::{IdentityError, Result as IdentityResult},
    load_result::LoadResult,
    login_status::LoginStatus,
    stored_identity::StoredIdentity,
};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use academy_core::Principal;
use async_trait::async_trait;
use log::{info, warn};
use tokio::sync::RwLock;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Identity provider backed by a JSON file in the config directory.
pub struct FileIdentityProvider {
    path: PathBuf,
    state: RwLock<ProviderState>,
}

struct ProviderState {
    status: LoginStatus,
    identity: Option<StoredIdentity>,
}

impl FileIdentityProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            state: RwLock::new(ProviderState {
                status: LoginStatus::Initializing,
                identity: None,
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl IdentityProvider for FileIdentityProvider {
    async fn initialize(&self) -> IdentityResult<()> {
        let mut state = self.state.write().await;
        if state.status != LoginStatus::Initializing {
            return Ok(());
        }

        // Initializing is left even when the restore fails
        state.status = LoginStatus::Idle;

        let loaded = load(&self.path)?;
        if let Some(reason) = loaded.corruption_error {
            warn!("Discarding unreadable identity: {reason}");
            backup_corrupted(&self.path)?;
        }

        if let Some(identity) = loaded.identity {
            state.identity = Some(identity);
            state.status = LoginStatus::LoggedIn;
        }

        info!("Identity initialized: {}", state.status);
        Ok(())
    }

    async fn identity(&self) -> Option<Principal> {
        let state = self.state.read().await;
        match state.status {
            LoginStatus::LoggedIn => state.identity.as_ref().map(|i| i.principal.clone()),
            _ => None,
        }
    }

    async fn login_status(&self) -> LoginStatus {
        self.state.read().await.status
    }

    async fn login(&self, principal: Option<Principal>) -> IdentityResult<Principal> {
        self.initialize().await?;

        let next = {
            let mut state = self.state.write().await;
            match state.status {
                LoginStatus::LoggingIn => return Err(IdentityError::login_in_progress()),
                LoginStatus::LoggedIn => {
                    if let Some(current) = state.identity.as_ref() {
                        let same = principal.as_ref().is_none_or(|p| *p == current.principal);
                        if same {
                            return Ok(current.principal.clone());
                        }
                    }
                }
                LoginStatus::Initializing | LoginStatus::Idle => {}
            }
            state.status = LoginStatus::LoggingIn;

            match principal {
                Some(principal) => StoredIdentity::new(principal),
                None => StoredIdentity::generate(),
            }
        };

        let saved = save(&self.path, &next);

        let mut state = self.state.write().await;
        match saved {
            Ok(()) => {
                let principal = next.principal.clone();
                state.identity = Some(next);
                state.status = LoginStatus::LoggedIn;
                info!("Logged in as {principal}");
                Ok(principal)
            }
            Err(e) => {
                state.identity = None;
                state.status = LoginStatus::Idle;
                Err(e)
            }
        }
    }

    async fn clear(&self) -> IdentityResult<()> {
        let mut state = self.state.write().await;

        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(IdentityError::file_delete(self.path.clone(), e)),
        }

        if let Some(previous) = state.identity.take() {
            info!("Cleared identity {}", previous.principal);
        }
        state.status = LoginStatus::Idle;
        Ok(())
    }
}

/// Loads the stored identity.
///
/// Returns:
/// - `Ok(LoadResult { identity: Some(...), corruption_error: None })` - loaded successfully
/// - `Ok(LoadResult { identity: None, corruption_error: None })` - file doesn't exist
/// - `Ok(LoadResult { identity: None, corruption_error: Some(...) })` - file exists but corrupted
pub fn load(path: &Path) -> IdentityResult<LoadResult> {
    if !path.exists() {
        info!("No identity file at {path:?}");
        return Ok(LoadResult {
            identity: None,
            corruption_error: None,
        });
    }

    let contents =
        fs::read_to_string(path).map_err(|e| IdentityError::file_read(path.to_path_buf(), e))?;

    match serde_json::from_str::<StoredIdentity>(&contents) {
        Ok(identity) => {
            info!(
                "Loaded identity: {} (schema v{})",
                identity.principal, identity.schema_version
            );
            Ok(LoadResult {
                identity: Some(identity),
                corruption_error: None,
            })
        }
        Err(e) => {
            warn!("Identity file corrupted at {path:?}: {e}");
            Ok(LoadResult {
                identity: None,
                corruption_error: Some(e.to_string()),
            })
        }
    }
}

/// Saves the identity with a temp file, fsync and atomic rename.
pub fn save(path: &Path, identity: &StoredIdentity) -> IdentityResult<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    fs::create_dir_all(dir).map_err(|e| IdentityError::dir_creation(dir.to_path_buf(), e))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "identity.json".to_string());
    let temp_path = dir.join(format!("{file_name}.tmp.{}", std::process::id()));

    let json = serde_json::to_string_pretty(identity)?;

    {
        let mut file = fs::File::create(&temp_path)
            .map_err(|e| IdentityError::file_write(temp_path.clone(), e))?;

        file.write_all(json.as_bytes())
            .map_err(|e| IdentityError::file_write(temp_path.clone(), e))?;

        file.sync_all()
            .map_err(|e| IdentityError::file_write(temp_path.clone(), e))?;
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        IdentityError::atomic_rename(temp_path.clone(), path.to_path_buf(), e)
    })?;

    info!("Saved identity: {}", identity.principal);
    Ok(())
}

/// Renames a corrupted identity file to `<name>.corrupted.{timestamp}`.
pub fn backup_corrupted(path: &Path) -> IdentityResult<Option<PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }

    let timestamp = chrono::Utc::now().format(DATE_FORMAT);
    let mut backup = path.as_os_str().to_owned();
    backup.push(format!(".corrupted.{timestamp}"));
    let backup_path = PathBuf::from(backup);

    fs::rename(path, &backup_path).map_err(|e| IdentityError::backup_failed(e))?;

    warn!("Backed up corrupted identity to {backup_path:?}");
    Ok(Some(backup_path))
}
