//! Lexical resources and normalization helpers for Persian text.
//!
//! Loads the tagged-word, stop-word and verb data files, builds verb-root
//! alternations for use inside larger patterns, and applies ordered regex
//! rewrite rules. Build with the `python` feature for the extension module.
//!
//! ```no_run
//! use farsi_lexicon::{Lexicon, regex_replace};
//!
//! let lexicon = Lexicon::from_exe()?;
//! let stop_words = lexicon.stop_words_list(None)?;
//! let verb = format!(r"\b(?:{})(?:م|ی|یم|ید|ند)?\b", lexicon.past_roots()?);
//! let tagged = regex_replace(&[(verb.as_str(), "<V>$0")], "رفتم")?;
//! # let _ = (stop_words, tagged);
//! # Ok::<(), farsi_lexicon::LexiconError>(())
//! ```

pub mod error;
pub mod lexicon;
pub mod paths;
pub mod rewrite;
pub mod roots;
pub mod trans;

#[cfg(feature = "python")]
mod python;

pub use crate::error::{LexiconError, Result};
pub use crate::lexicon::{Diagnostic, Lexicon, TaggedWord};
pub use crate::paths::DataPaths;
pub use crate::rewrite::{RewriteRules, regex_replace};
pub use crate::roots::RootKind;
pub use crate::trans::{
    ASCII_DIGITS, PERSIAN_DIGITS, PERSIAN_TO_ASCII_DIGITS, TransTable, make_trans, translate,
};
