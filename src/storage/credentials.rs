//! Encrypted credential storage.
//!
//! LinkedIn API credentials are kept in `<config_dir>/linkedin_config.enc`,
//! sealed with ChaCha20-Poly1305. The file holds `hex(nonce):hex(ciphertext)`;
//! the plaintext is a JSON record of the credentials plus the time they were
//! last written. The 256-bit key is generated on first use and stored
//! hex-encoded in `<config_dir>/.key`.
//!
//! A file that cannot be decrypted or parsed is treated as "no credentials"
//! so a rotated or damaged key never takes the server down; saving again
//! overwrites it.
//!
//! With the environment fallback enabled, `LINKEDIN_CLIENT_*` variables stand
//! in for a missing file. Clearing leaves a `linkedin_config.cleared` marker
//! that suppresses the fallback until credentials are saved again.

use crate::types::{AppError, ConfigStatus, Credentials, Result};
use chacha20poly1305::aead::{Aead, AeadCore, KeyInit, OsRng};
use chacha20poly1305::{ChaCha20Poly1305, Nonce};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const CREDENTIALS_FILE: &str = "linkedin_config.enc";
const KEY_FILE: &str = ".key";
const CLEARED_MARKER: &str = "linkedin_config.cleared";
const NONCE_LEN: usize = 12;

/// What actually gets encrypted
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredCredentials {
    credentials: Credentials,
    last_updated: DateTime<Utc>,
}

/// Encrypted, file-backed credential store
pub struct CredentialStore {
    credentials_path: PathBuf,
    key_path: PathBuf,
    cleared_path: PathBuf,
    cipher: ChaCha20Poly1305,
    write_lock: Mutex<()>,
    env_fallback: bool,
}

impl CredentialStore {
    /// Open the store rooted at `config_dir`, creating the directory and key if needed
    pub fn open<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let key_path = config_dir.join(KEY_FILE);
        let cipher = load_or_create_cipher(&key_path)?;

        Ok(Self {
            credentials_path: config_dir.join(CREDENTIALS_FILE),
            key_path,
            cleared_path: config_dir.join(CLEARED_MARKER),
            cipher,
            write_lock: Mutex::new(()),
            env_fallback: false,
        })
    }

    /// Fall back to `LINKEDIN_CLIENT_ID`/`LINKEDIN_CLIENT_SECRET`/`LINKEDIN_ACCESS_TOKEN`
    /// when nothing has been saved
    pub fn with_env_fallback(mut self, enabled: bool) -> Self {
        self.env_fallback = enabled;
        self
    }

    pub fn credentials_path(&self) -> &Path {
        &self.credentials_path
    }

    pub fn key_path(&self) -> &Path {
        &self.key_path
    }

    /// Current credentials, if any are stored (or provided by the environment)
    pub fn get(&self) -> Option<Credentials> {
        match self.read_record() {
            Some(record) => Some(record.credentials),
            None if self.env_fallback && !self.cleared_path.exists() => credentials_from_env(),
            None => None,
        }
    }

    /// When the stored credentials were last written
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.read_record().map(|record| record.last_updated)
    }

    pub fn status(&self) -> ConfigStatus {
        ConfigStatus {
            is_configured: self.get().is_some(),
            last_updated: self.last_updated(),
        }
    }

    /// Encrypt and persist credentials, replacing whatever was stored
    pub fn save(&self, credentials: &Credentials) -> Result<()> {
        let record = StoredCredentials {
            credentials: credentials.clone(),
            last_updated: Utc::now(),
        };
        let plaintext = serde_json::to_vec(&record)?;

        let nonce = ChaCha20Poly1305::generate_nonce(&mut OsRng);
        let ciphertext = self
            .cipher
            .encrypt(&nonce, plaintext.as_ref())
            .map_err(|e| AppError::Crypto(format!("failed to encrypt credentials: {}", e)))?;

        let encoded = format!("{}:{}", hex::encode(nonce), hex::encode(ciphertext));

        let _guard = self.write_lock.lock();
        write_private(&self.credentials_path, encoded.as_bytes())?;
        remove_if_present(&self.cleared_path)?;
        info!(client_id = %credentials.client_id, "Saved LinkedIn credentials");
        Ok(())
    }

    /// Replace only the access token, keeping client id and secret
    pub fn set_access_token(&self, access_token: &str) -> Result<()> {
        let mut credentials = self.get().ok_or(AppError::NotConfigured)?;
        credentials.access_token = access_token.to_string();
        self.save(&credentials)
    }

    /// Remove stored credentials; a no-op when nothing is stored.
    ///
    /// Environment credentials stay hidden afterwards until the next `save`.
    pub fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock();
        if remove_if_present(&self.credentials_path)? {
            info!("Cleared LinkedIn credentials");
        }
        if self.env_fallback {
            write_private(&self.cleared_path, Utc::now().to_rfc3339().as_bytes())?;
        }
        Ok(())
    }

    fn read_record(&self) -> Option<StoredCredentials> {
        let raw = match fs::read_to_string(&self.credentials_path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Failed to read credential file: {}", e);
                return None;
            }
        };

        match self.decrypt(raw.trim()) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Error decrypting credentials: {}", e);
                None
            }
        }
    }

    fn decrypt(&self, encoded: &str) -> Result<StoredCredentials> {
        let (nonce_hex, ciphertext_hex) = encoded
            .split_once(':')
            .ok_or_else(|| AppError::Crypto("malformed credential file".to_string()))?;

        let nonce_bytes =
            hex::decode(nonce_hex).map_err(|e| AppError::Crypto(format!("bad nonce: {}", e)))?;
        if nonce_bytes.len() != NONCE_LEN {
            return Err(AppError::Crypto(format!(
                "nonce must be {} bytes, got {}",
                NONCE_LEN,
                nonce_bytes.len()
            )));
        }
        let ciphertext = hex::decode(ciphertext_hex)
            .map_err(|e| AppError::Crypto(format!("bad ciphertext: {}", e)))?;

        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(&nonce_bytes), ciphertext.as_ref())
            .map_err(|_| AppError::Crypto("authentication failed".to_string()))?;

        Ok(serde_json::from_slice(&plaintext)?)
    }
}

fn load_or_create_cipher(key_path: &Path) -> Result<ChaCha20Poly1305> {
    if key_path.exists() {
        let encoded = fs::read_to_string(key_path)?;
        let bytes = hex::decode(encoded.trim())
            .map_err(|e| AppError::Crypto(format!("invalid key file: {}", e)))?;
        return ChaCha20Poly1305::new_from_slice(&bytes)
            .map_err(|_| AppError::Crypto("key file must hold 32 bytes".to_string()));
    }

    debug!("Generating credential encryption key at {:?}", key_path);
    let key = ChaCha20Poly1305::generate_key(&mut OsRng);
    write_private(key_path, hex::encode(key).as_bytes())?;
    Ok(ChaCha20Poly1305::new(&key))
}

fn credentials_from_env() -> Option<Credentials> {
    let client_id = std::env::var("LINKEDIN_CLIENT_ID").ok()?;
    let client_secret = std::env::var("LINKEDIN_CLIENT_SECRET").ok()?;
    if client_id.trim().is_empty() || client_secret.trim().is_empty() {
        return None;
    }

    Some(Credentials {
        client_id,
        client_secret,
        access_token: std::env::var("LINKEDIN_ACCESS_TOKEN").unwrap_or_default(),
    })
}

/// Returns whether a file was actually removed
fn remove_if_present(path: &Path) -> std::io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Write a file readable only by the owner (on unix)
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    fs::write(path, contents)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_credentials() -> Credentials {
        Credentials {
            client_id: "86abc123".to_string(),
            client_secret: "s3cr3t-value".to_string(),
            access_token: "AQV-token".to_string(),
        }
    }

    #[test]
    fn test_save_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::open(dir.path()).unwrap();

        assert!(store.get().is_none());
        store.save(&sample_credentials()).unwrap();

        assert_eq!(store.get(), Some(sample_credentials()));
        assert!(store.last_updated().is_some());
        assert!(store.status().is_configured);
    }

    #[test]
    fn test_file_does_not_contain_plaintext() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::open(dir.path()).unwrap();
        store.save(&sample_credentials()).unwrap();

        let raw = fs::read_to_string(store.credentials_path()).unwrap();
        assert!(!raw.contains("s3cr3t-value"));
        assert!(!raw.contains("AQV-token"));
        assert!(raw.contains(':'));
    }

    #[test]
    fn test_reopen_reuses_key() {
        let dir = tempfile::tempdir().unwrap();
        CredentialStore::open(dir.path())
            .unwrap()
            .save(&sample_credentials())
            .unwrap();

        let reopened = CredentialStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get(), Some(sample_credentials()));
    }

    #[test]
    fn test_corrupted_file_reads_as_unconfigured() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::open(dir.path()).unwrap();
        store.save(&sample_credentials()).unwrap();

        fs::write(store.credentials_path(), "00ff:deadbeef").unwrap();
        assert!(store.get().is_none());
        assert!(!store.status().is_configured);
    }

    #[test]
    fn test_foreign_key_cannot_decrypt() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::open(dir.path()).unwrap();
        store.save(&sample_credentials()).unwrap();

        fs::remove_file(store.key_path()).unwrap();
        let rekeyed = CredentialStore::open(dir.path()).unwrap();
        assert!(rekeyed.get().is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::open(dir.path()).unwrap();
        store.save(&sample_credentials()).unwrap();

        store.clear().unwrap();
        assert!(store.get().is_none());
        assert!(store.last_updated().is_none());
        store.clear().unwrap();
    }

    #[test]
    fn test_clear_without_env_fallback_leaves_no_marker() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::open(dir.path()).unwrap();
        store.save(&sample_credentials()).unwrap();

        store.clear().unwrap();
        assert!(!dir.path().join(CLEARED_MARKER).exists());
    }

    #[test]
    fn test_save_after_clear_removes_marker() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::open(dir.path())
            .unwrap()
            .with_env_fallback(true);

        store.clear().unwrap();
        assert!(dir.path().join(CLEARED_MARKER).exists());

        store.save(&sample_credentials()).unwrap();
        assert!(!dir.path().join(CLEARED_MARKER).exists());
        assert_eq!(store.get(), Some(sample_credentials()));
    }

    #[test]
    fn test_set_access_token_requires_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::open(dir.path()).unwrap();

        assert!(matches!(
            store.set_access_token("new"),
            Err(AppError::NotConfigured)
        ));

        store.save(&sample_credentials()).unwrap();
        store.set_access_token("fresh-token").unwrap();

        let creds = store.get().unwrap();
        assert_eq!(creds.access_token, "fresh-token");
        assert_eq!(creds.client_secret, "s3cr3t-value");
    }
}
