// src/core/vault.rs
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose, Engine as _};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::crypto::{self, CryptoError};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Encryption error: {0}")]
    CryptoError(#[from] CryptoError),

    #[error("Invalid saved file {path}: {reason}")]
    InvalidFile { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Where a saved password and its key ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedArtifacts {
    pub ciphertext_path: PathBuf,
    pub key_path: PathBuf,
}

/// Persists a password encrypted at rest next to its key.
pub trait EncryptedStore {
    fn save(&self, password: &str, destination: &Path) -> Result<SavedArtifacts>;

    fn open(&self, destination: &Path) -> Result<String>;
}

/// `<destination>.key`
pub fn key_path_for(destination: &Path) -> PathBuf {
    let mut path = OsString::from(destination.as_os_str());
    path.push(".key");
    PathBuf::from(path)
}

/// Writes base64 text files: `nonce || ciphertext` at the destination and a
/// fresh ChaCha20-Poly1305 key at `<destination>.key`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileVault;

impl FileVault {
    pub fn new() -> Self {
        FileVault
    }

    /// Write `contents` to a temporary file in `dir`, mode 0600 on unix.
    /// Nothing at the final path changes until the file is persisted.
    fn stage_private(dir: &Path, contents: &[u8]) -> io::Result<NamedTempFile> {
        let mut staged = NamedTempFile::new_in(dir)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            staged
                .as_file()
                .set_permissions(fs::Permissions::from_mode(0o600))?;
        }

        staged.write_all(contents)?;
        staged.as_file().sync_all()?;
        Ok(staged)
    }

    fn read_base64(path: &Path) -> Result<Vec<u8>> {
        let encoded = fs::read_to_string(path)?;
        general_purpose::STANDARD
            .decode(encoded.trim())
            .map_err(|e| StoreError::InvalidFile {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }
}

impl EncryptedStore for FileVault {
    fn save(&self, password: &str, destination: &Path) -> Result<SavedArtifacts> {
        let key = crypto::generate_key();
        let encrypted = crypto::encrypt_password(&key, password)?;

        let dir = match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        let key_path = key_path_for(destination);
        let staged_key = Self::stage_private(dir, general_purpose::STANDARD.encode(key).as_bytes())?;
        let staged_ciphertext =
            Self::stage_private(dir, general_purpose::STANDARD.encode(&encrypted).as_bytes())?;

        // Key first: if it cannot be replaced, the previous pair is untouched.
        staged_key.persist(&key_path).map_err(|e| e.error)?;
        staged_ciphertext.persist(destination).map_err(|e| e.error)?;

        log::info!(
            "Saved encrypted password to {} (key: {})",
            destination.display(),
            key_path.display()
        );

        Ok(SavedArtifacts {
            ciphertext_path: destination.to_path_buf(),
            key_path,
        })
    }

    fn open(&self, destination: &Path) -> Result<String> {
        let key_path = key_path_for(destination);
        let key = Self::read_base64(&key_path)?;
        let encrypted = Self::read_base64(destination)?;

        log::debug!("Opening {} with {}", destination.display(), key_path.display());
        Ok(crypto::decrypt_password(&key, &encrypted)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_path() {
        assert_eq!(
            key_path_for(Path::new("out/saved_passwords.enc")),
            PathBuf::from("out/saved_passwords.enc.key")
        );
    }

    #[test]
    fn test_save_and_open() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("nested").join("saved_passwords.enc");
        let vault = FileVault::new();

        let artifacts = vault.save("k9#Lm2$vQx8!pR4w", &destination).unwrap();
        assert!(artifacts.ciphertext_path.exists());
        assert!(artifacts.key_path.exists());

        let ciphertext = fs::read_to_string(&artifacts.ciphertext_path).unwrap();
        assert!(!ciphertext.contains("k9#Lm2$vQx8!pR4w"));

        assert_eq!(vault.open(&destination).unwrap(), "k9#Lm2$vQx8!pR4w");
    }

    #[test]
    fn test_each_save_uses_new_key() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.enc");
        let second = dir.path().join("second.enc");
        let vault = FileVault::new();

        vault.save("same password", &first).unwrap();
        vault.save("same password", &second).unwrap();

        let first_key = fs::read_to_string(key_path_for(&first)).unwrap();
        let second_key = fs::read_to_string(key_path_for(&second)).unwrap();
        assert_ne!(first_key, second_key);
    }

    #[test]
    fn test_open_with_wrong_key() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.enc");
        let second = dir.path().join("second.enc");
        let vault = FileVault::new();

        vault.save("one", &first).unwrap();
        vault.save("two", &second).unwrap();
        fs::copy(key_path_for(&second), key_path_for(&first)).unwrap();

        assert!(matches!(
            vault.open(&first),
            Err(StoreError::CryptoError(CryptoError::DecryptionError(_)))
        ));
    }

    #[test]
    fn test_open_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("lonely.enc");
        fs::write(&destination, "AAAA").unwrap();

        assert!(matches!(
            FileVault::new().open(&destination),
            Err(StoreError::IoError(_))
        ));
    }

    #[test]
    fn test_open_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("corrupt.enc");
        let vault = FileVault::new();
        vault.save("secret", &destination).unwrap();
        fs::write(&destination, "not base64 !!").unwrap();

        assert!(matches!(
            vault.open(&destination),
            Err(StoreError::InvalidFile { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_files_are_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("private.enc");
        let artifacts = FileVault::new().save("secret", &destination).unwrap();

        for path in [&artifacts.key_path, &artifacts.ciphertext_path] {
            let mode = fs::metadata(path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_overwrite_makes_existing_files_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("saved_passwords.enc");
        let key_path = key_path_for(&destination);
        for path in [&destination, &key_path] {
            fs::write(path, "old").unwrap();
            fs::set_permissions(path, fs::Permissions::from_mode(0o644)).unwrap();
        }

        let vault = FileVault::new();
        vault.save("secret", &destination).unwrap();

        for path in [&destination, &key_path] {
            let mode = fs::metadata(path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
        assert_eq!(vault.open(&destination).unwrap(), "secret");
    }

    #[test]
    fn test_failed_key_write_keeps_previous_pair() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("saved_passwords.enc");
        let key_path = key_path_for(&destination);
        let backup = dir.path().join("backup.key");
        let vault = FileVault::new();

        vault.save("first", &destination).unwrap();

        // A directory in place of the key file makes the key write fail.
        fs::rename(&key_path, &backup).unwrap();
        fs::create_dir(&key_path).unwrap();
        assert!(vault.save("second", &destination).is_err());

        fs::remove_dir(&key_path).unwrap();
        fs::rename(&backup, &key_path).unwrap();
        assert_eq!(vault.open(&destination).unwrap(), "first");

        // No staged files are left behind.
        let entries = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 2);
    }
}
