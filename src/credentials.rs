//! Flat-file credential store.
//!
//! Credentials live in a newline-delimited `username:password` file that is
//! re-read on every authentication attempt, so edits take effect without a
//! restart. No caching, no hashing: the comparison is an exact string match
//! against the file contents.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::Error;

/// Load the credential file into a username -> password map.
///
/// A missing file is not an error: it logs a warning and yields an empty map,
/// which makes every authentication attempt fail. A line without a `:`
/// separator is a hard error and aborts the load.
pub fn load(path: &Path) -> Result<HashMap<String, String>, Error> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "login details file not found");
            return Ok(HashMap::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut details = HashMap::new();
    for (idx, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        let (username, password) = line.split_once(':').ok_or(Error::MalformedCredentials {
            path: path.display().to_string(),
            line: idx + 1,
        })?;
        details.insert(username.to_string(), password.to_string());
    }

    Ok(details)
}

/// Check a username/password pair against the file at `path`.
///
/// Returns `Ok(true)` iff the username exists and the stored password matches
/// exactly. The file is reloaded on every call.
pub fn authenticate(path: &Path, username: &str, password: &str) -> Result<bool, Error> {
    let details = load(path)?;
    Ok(details.get(username).map_or(false, |stored| stored == password))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn details_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_all_pairs() {
        let file = details_file("alice:wonderland\nbob:builder\n");
        let details = load(file.path()).unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details["alice"], "wonderland");
        assert_eq!(details["bob"], "builder");
    }

    #[test]
    fn password_keeps_everything_after_first_colon() {
        let file = details_file("carol:p:a:s:s\n");
        let details = load(file.path()).unwrap();
        assert_eq!(details["carol"], "p:a:s:s");
    }

    #[test]
    fn missing_file_yields_empty_map() {
        let dir = tempfile::tempdir().unwrap();
        let details = load(&dir.path().join("login_details.txt")).unwrap();
        assert!(details.is_empty());
    }

    #[test]
    fn line_without_separator_is_an_error() {
        let file = details_file("alice:wonderland\nnot a credential line\n");
        let err = load(file.path()).unwrap_err();
        match err {
            Error::MalformedCredentials { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn authenticate_accepts_exact_pairs_only() {
        let file = details_file("alice:wonderland\nbob:builder\n");
        assert!(authenticate(file.path(), "alice", "wonderland").unwrap());
        assert!(authenticate(file.path(), "bob", "builder").unwrap());
        assert!(!authenticate(file.path(), "alice", "Wonderland").unwrap());
        assert!(!authenticate(file.path(), "alice", "builder").unwrap());
        assert!(!authenticate(file.path(), "mallory", "wonderland").unwrap());
        assert!(!authenticate(file.path(), "", "").unwrap());
    }
}
