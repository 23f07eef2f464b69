//! Locations of the bundled data files.
//!
//! Defaults live under a `data` directory next to the running executable.
//! Every loader also accepts an explicit path, so tests and embedding hosts
//! can point at arbitrary files without touching this configuration.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{LexiconError, Result};

pub const DATA_DIR_NAME: &str = "data";
pub const WORDS_FILE: &str = "words.dat";
pub const STOP_WORDS_FILE: &str = "stop_words.dat";
pub const VERBS_FILE: &str = "verbs.dat";
pub const INFORMAL_WORDS_FILE: &str = "informal_words.dat";
pub const INFORMAL_VERBS_FILE: &str = "informal_verbs.dat";

/// Resolved default paths for every data file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub data_dir: PathBuf,
    pub words: PathBuf,
    pub stop_words: PathBuf,
    pub verbs: PathBuf,
    // Reserved for the informal-register loaders.
    pub informal_words: PathBuf,
    pub informal_verbs: PathBuf,
}

impl DataPaths {
    /// Build paths with the fixed file names inside `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            words: data_dir.join(WORDS_FILE),
            stop_words: data_dir.join(STOP_WORDS_FILE),
            verbs: data_dir.join(VERBS_FILE),
            informal_words: data_dir.join(INFORMAL_WORDS_FILE),
            informal_verbs: data_dir.join(INFORMAL_VERBS_FILE),
            data_dir,
        }
    }

    /// Resolve `<executable dir>/data`
    pub fn from_exe() -> Result<Self> {
        let exe = env::current_exe().map_err(LexiconError::ExeDir)?;
        let exe_dir = exe.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self::new(exe_dir.join(DATA_DIR_NAME)))
    }
}

/// Pick the explicit path unless it is absent or empty
pub(crate) fn resolve<'a>(explicit: Option<&'a Path>, default: &'a Path) -> &'a Path {
    match explicit {
        Some(path) if !path.as_os_str().is_empty() => path,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_joins_fixed_names() {
        let paths = DataPaths::new("/opt/farsi/data");
        assert_eq!(paths.words, Path::new("/opt/farsi/data/words.dat"));
        assert_eq!(paths.stop_words, Path::new("/opt/farsi/data/stop_words.dat"));
        assert_eq!(paths.verbs, Path::new("/opt/farsi/data/verbs.dat"));
        assert_eq!(paths.informal_words, Path::new("/opt/farsi/data/informal_words.dat"));
        assert_eq!(paths.informal_verbs, Path::new("/opt/farsi/data/informal_verbs.dat"));
    }

    #[test]
    fn test_from_exe_uses_data_subdir() {
        let paths = DataPaths::from_exe().unwrap();
        assert!(paths.data_dir.ends_with(DATA_DIR_NAME));
        assert_eq!(paths.verbs.parent(), Some(paths.data_dir.as_path()));
    }

    #[test]
    fn test_resolve_empty_selects_default() {
        let default = Path::new("data/words.dat");
        assert_eq!(resolve(None, default), default);
        assert_eq!(resolve(Some(Path::new("")), default), default);
        assert_eq!(resolve(Some(Path::new("other.dat")), default), Path::new("other.dat"));
    }
}
