//! Common-password denylist.
//!
//! A bundled list of frequently used weak passwords is always active.
//! Extra entries can be merged in once at startup from a newline-delimited
//! file; after that the set is read-only. Lookups are case-insensitive.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{LazyLock, RwLock};
use thiserror::Error;

/// Bundled denylist, drawn from published most-common-password rankings.
/// All entries are lowercase.
const BUNDLED: &[&str] = &[
    "123456",
    "12345",
    "qwerty",
    "password",
    "12345678",
    "111111",
    "123123",
    "1234567890",
    "1234567",
    "qwerty123",
    "000000",
    "1q2w3e",
    "aa12345678",
    "abc123",
    "password1",
    "1234",
    "qwertyuiop",
    "123321",
    "password123",
    "123456789",
    "football",
    "1111111",
    "iloveyou",
    "1q2w3e4r5t",
    "123",
    "monkey",
    "dragon",
    "987654321",
    "mynoob",
    "666666",
    "18atcskd2w",
    "7777777",
    "1q2w3e4r",
    "654321",
    "555555",
    "3rjs1la7qe",
    "google",
    "123qwe",
    "zxcvbnm",
    "letmein",
    "dragon1234",
    "baseball",
    "sunshine",
    "trustno1",
    "princess",
    "adobe123",
    "welcome",
    "login",
    "admin",
    "solomonkey",
    "q2w3e4r",
    "master",
    "photoshop",
    "qaz2wsx",
    "ashley",
    "bailey",
    "passw0rd",
    "shadow",
    "michaellogin",
    "jesus",
    "superman",
    "qazwsx",
    "ninja",
    "azerty",
    "sololoveme",
    "whatever",
    "donald",
    "batman",
    "zaq1",
    "zaq1qazwsx",
    "password1000000",
    "starwars",
    "qwerty123123",
    "qwe",
    "mustang",
    "121212",
    "football654321",
    "flower123",
    "123123123",
    "lovely",
    "6543217777777",
    "!@#$%^&*",
    "hello",
    "charlie888888",
    "696969",
    "hottie",
    "freedomaa",
    "1231234567",
    "123123123555555",
    "passw0rddragon",
    "passw0rd654321",
    "welcome21",
    "888888",
    "qwertyuiophottie",
    "lmeindragon",
];

static COMMON_PASSWORDS: LazyLock<RwLock<HashSet<String>>> =
    LazyLock::new(|| RwLock::new(bundled_set()));

fn bundled_set() -> HashSet<String> {
    BUNDLED.iter().map(|p| (*p).to_string()).collect()
}

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("failed to read denylist file: {0}")]
    Read(#[from] std::io::Error),
    #[error("denylist file is empty")]
    EmptyFile,
}

/// Merges extra entries from a newline-delimited file into the denylist.
///
/// The bundled entries always remain active. Lines are trimmed and
/// lowercased; blank lines are skipped. Call once at process start; the
/// set must not be grown after evaluation begins.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read, or
/// contains nothing but whitespace.
///
/// # Returns
///
/// The total number of denylist entries after the merge.
pub fn extend_denylist_from_path<P: AsRef<std::path::Path>>(
    path: P,
) -> Result<usize, DenylistError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("denylist extension FAILED: file not found {:?}", path);
        return Err(DenylistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("denylist extension FAILED: empty file {:?}", path);
        return Err(DenylistError::EmptyFile);
    }

    let mut guard = COMMON_PASSWORDS.write().unwrap();
    for line in content.lines() {
        let entry = line.trim().to_lowercase();
        if !entry.is_empty() {
            guard.insert(entry);
        }
    }
    let count = guard.len();

    #[cfg(feature = "tracing")]
    tracing::info!("denylist extended: {} entries total from {:?}", count, path);

    Ok(count)
}

/// Merges extra entries from the file named by `PWD_EXTRA_DENYLIST_PATH`.
///
/// A no-op when the variable is unset; the bundled list is always active
/// regardless.
///
/// # Returns
///
/// The total number of denylist entries.
pub fn extend_denylist_from_env() -> Result<usize, DenylistError> {
    match std::env::var("PWD_EXTRA_DENYLIST_PATH") {
        Ok(path) => extend_denylist_from_path(PathBuf::from(path)),
        Err(_) => Ok(denylist_len()),
    }
}

/// Number of entries currently in the denylist.
pub fn denylist_len() -> usize {
    COMMON_PASSWORDS.read().unwrap().len()
}

/// Checks if a password is in the denylist (case-insensitive).
pub fn is_common(password: &str) -> bool {
    COMMON_PASSWORDS
        .read()
        .unwrap()
        .contains(&password.to_lowercase())
}

/// Restores the bundled-only denylist for testing purposes.
#[cfg(test)]
pub fn reset_denylist_for_testing() {
    let mut guard = COMMON_PASSWORDS.write().unwrap();
    *guard = bundled_set();
}
