use std::collections::HashMap;
use std::path::Path;

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::error::LexiconError;
use crate::lexicon::Lexicon;
use crate::rewrite;
use crate::trans;

fn to_py_err(err: LexiconError) -> PyErr {
    match err {
        LexiconError::Open { .. } | LexiconError::Read { .. } | LexiconError::ExeDir(_) => {
            PyIOError::new_err(err.to_string())
        }
        LexiconError::Pattern { .. } | LexiconError::TransLength { .. } => {
            PyValueError::new_err(err.to_string())
        }
    }
}

// Without `data_dir` the defaults resolve next to the interpreter binary.
fn lexicon(data_dir: Option<&str>) -> PyResult<Lexicon> {
    Lexicon::with_data_dir(data_dir.map(Path::new)).map_err(to_py_err)
}

/// Tagged words as `(word, frequency, [tags])` tuples
#[pyfunction]
#[pyo3(signature = (words_file=None, data_dir=None))]
fn words_list(
    words_file: Option<String>,
    data_dir: Option<String>,
) -> PyResult<Vec<(String, u64, Vec<String>)>> {
    let words = lexicon(data_dir.as_deref())?
        .words_list(words_file.as_deref().map(Path::new))
        .map_err(to_py_err)?;
    Ok(words
        .into_iter()
        .map(|w| (w.word, w.frequency, w.tags))
        .collect())
}

#[pyfunction]
#[pyo3(signature = (stop_words_file=None, data_dir=None))]
fn stop_words_list(
    stop_words_file: Option<String>,
    data_dir: Option<String>,
) -> PyResult<Vec<String>> {
    lexicon(data_dir.as_deref())?
        .stop_words_list(stop_words_file.as_deref().map(Path::new))
        .map_err(to_py_err)
}

#[pyfunction]
#[pyo3(signature = (data_dir=None))]
fn past_roots(data_dir: Option<String>) -> PyResult<String> {
    lexicon(data_dir.as_deref())?
        .past_roots()
        .map_err(to_py_err)
}

#[pyfunction]
#[pyo3(signature = (data_dir=None))]
fn present_roots(data_dir: Option<String>) -> PyResult<String> {
    lexicon(data_dir.as_deref())?
        .present_roots()
        .map_err(to_py_err)
}

/// Apply `(pattern, replacement)` rules to `text` in order
#[pyfunction]
fn regex_replace(patterns: Vec<(String, String)>, text: String) -> PyResult<String> {
    rewrite::regex_replace(&patterns, &text).map_err(to_py_err)
}

#[pyfunction]
fn make_trans(source: String, target: String) -> PyResult<HashMap<char, char>> {
    trans::make_trans(&source, &target).map_err(to_py_err)
}

#[pyfunction]
fn translate(text: String, table: HashMap<char, char>) -> PyResult<String> {
    Ok(trans::translate(&text, &table))
}

#[pymodule]
fn farsi_lexicon(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(words_list, m)?)?;
    m.add_function(wrap_pyfunction!(stop_words_list, m)?)?;
    m.add_function(wrap_pyfunction!(past_roots, m)?)?;
    m.add_function(wrap_pyfunction!(present_roots, m)?)?;
    m.add_function(wrap_pyfunction!(regex_replace, m)?)?;
    m.add_function(wrap_pyfunction!(make_trans, m)?)?;
    m.add_function(wrap_pyfunction!(translate, m)?)?;
    Ok(())
}
