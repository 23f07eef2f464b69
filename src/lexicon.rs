//! Line-oriented lexicon loaders.
//!
//! Each call re-reads its file; cache the returned collection if you need it
//! more than once. Opening or reading the file is all-or-nothing, while
//! individual lines are parsed leniently: malformed word lines are skipped,
//! unparsable frequencies become zero and invalid UTF-8 is replaced with
//! U+FFFD. Pass a diagnostics sink to the `*_with` variants to observe those
//! cases; the plain loaders stay silent.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::{LexiconError, Result};
use crate::paths::{self, DataPaths};
use crate::roots::{self, RootKind};

const FIELD_SEPARATOR: char = '\t';
const TAG_SEPARATOR: char = ',';
const WORD_FIELDS: usize = 3;

/// One `word<TAB>frequency<TAB>tag,tag,...` record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedWord {
    pub word: String,
    pub frequency: u64,
    pub tags: Vec<String>,
}

/// A line-level problem that was tolerated while loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Word line without exactly three tab-separated fields; it was dropped
    MalformedLine { line: usize, fields: usize },
    /// Frequency field was not a non-negative integer; zero was used
    DefaultedFrequency { line: usize, raw: String },
    /// Verb line had no usable root of this kind; left out of the alternation
    MissingRoot { line: usize, kind: RootKind },
    /// Line was not valid UTF-8; it was decoded lossily
    InvalidUtf8 { line: usize },
}

fn ignore(_: Diagnostic) {}

/// Read every line of `path`, failing only if the file cannot be opened or read.
///
/// Both `\n` and `\r\n` end a line.
fn read_lines(path: &Path, diagnostics: &mut dyn FnMut(Diagnostic)) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|source| LexiconError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = Vec::new();
    for (idx, raw) in BufReader::new(file).split(b'\n').enumerate() {
        let mut raw = raw.map_err(|source| LexiconError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        let line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(err) => {
                diagnostics(Diagnostic::InvalidUtf8 { line: idx + 1 });
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };
        lines.push(line);
    }
    Ok(lines)
}

/// Parse one words-file line; `line_no` is 1-based
pub fn parse_word_line(
    line: &str,
    line_no: usize,
    diagnostics: &mut dyn FnMut(Diagnostic),
) -> Option<TaggedWord> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != WORD_FIELDS {
        diagnostics(Diagnostic::MalformedLine {
            line: line_no,
            fields: fields.len(),
        });
        return None;
    }

    let frequency = match fields[1].parse::<u64>() {
        Ok(n) => n,
        Err(_) => {
            diagnostics(Diagnostic::DefaultedFrequency {
                line: line_no,
                raw: fields[1].to_string(),
            });
            0
        }
    };

    Some(TaggedWord {
        word: fields[0].to_string(),
        frequency,
        tags: fields[2].split(TAG_SEPARATOR).map(str::to_string).collect(),
    })
}

/// Loader entry points over a fixed set of default paths
#[derive(Debug, Clone)]
pub struct Lexicon {
    paths: DataPaths,
}

impl Lexicon {
    pub fn new(paths: DataPaths) -> Self {
        Self { paths }
    }

    /// Use the `data` directory next to the running executable
    pub fn from_exe() -> Result<Self> {
        Ok(Self::new(DataPaths::from_exe()?))
    }

    /// Use `data_dir` when given, else fall back to [`from_exe`](Self::from_exe).
    ///
    /// Embedding hosts (e.g. the Python module, whose executable is the
    /// interpreter) should pass their own data directory.
    pub fn with_data_dir(data_dir: Option<&Path>) -> Result<Self> {
        match data_dir {
            Some(dir) if !dir.as_os_str().is_empty() => Ok(Self::new(DataPaths::new(dir))),
            _ => Self::from_exe(),
        }
    }

    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    /// Load tagged words from `path`, or the default words file
    pub fn words_list(&self, path: Option<&Path>) -> Result<Vec<TaggedWord>> {
        self.words_list_with(path, &mut ignore)
    }

    pub fn words_list_with(
        &self,
        path: Option<&Path>,
        diagnostics: &mut dyn FnMut(Diagnostic),
    ) -> Result<Vec<TaggedWord>> {
        let path = paths::resolve(path, &self.paths.words);
        let words: Vec<TaggedWord> = read_lines(path, diagnostics)?
            .iter()
            .enumerate()
            .filter_map(|(idx, line)| parse_word_line(line, idx + 1, diagnostics))
            .collect();
        debug!("Loaded {} tagged words from {}", words.len(), path.display());
        Ok(words)
    }

    /// Load stop words from `path`, or the default stop-words file.
    ///
    /// Blank lines come back as empty strings.
    pub fn stop_words_list(&self, path: Option<&Path>) -> Result<Vec<String>> {
        self.stop_words_list_with(path, &mut ignore)
    }

    pub fn stop_words_list_with(
        &self,
        path: Option<&Path>,
        diagnostics: &mut dyn FnMut(Diagnostic),
    ) -> Result<Vec<String>> {
        let path = paths::resolve(path, &self.paths.stop_words);
        let words = read_lines(path, diagnostics)?;
        debug!("Loaded {} stop words from {}", words.len(), path.display());
        Ok(words)
    }

    pub(crate) fn verbs_list(
        &self,
        path: Option<&Path>,
        diagnostics: &mut dyn FnMut(Diagnostic),
    ) -> Result<Vec<String>> {
        let path = paths::resolve(path, &self.paths.verbs);
        let verbs = read_lines(path, diagnostics)?;
        debug!("Loaded {} verbs from {}", verbs.len(), path.display());
        Ok(verbs)
    }

    /// `root1|root2|...` over the past roots of the default verbs file
    pub fn past_roots(&self) -> Result<String> {
        self.roots_with(None, RootKind::Past, &mut ignore)
    }

    /// `root1|root2|...` over the present roots of the default verbs file
    pub fn present_roots(&self) -> Result<String> {
        self.roots_with(None, RootKind::Present, &mut ignore)
    }

    pub fn past_roots_from(&self, path: &Path) -> Result<String> {
        self.roots_with(Some(path), RootKind::Past, &mut ignore)
    }

    pub fn present_roots_from(&self, path: &Path) -> Result<String> {
        self.roots_with(Some(path), RootKind::Present, &mut ignore)
    }

    pub fn roots_with(
        &self,
        path: Option<&Path>,
        kind: RootKind,
        diagnostics: &mut dyn FnMut(Diagnostic),
    ) -> Result<String> {
        let verbs = self.verbs_list(path, diagnostics)?;
        Ok(roots::roots_alternation(&verbs, kind, diagnostics))
    }
}
