//! String templating with configurable delimiters
//!
//! Replaces `${key}`-style tokens with registered values:
//!
//! ```rust
//! use batch_heap::template::TemplateEngine;
//!
//! let mut engine = TemplateEngine::new();
//! engine.add("that", "this").unwrap();
//! assert_eq!(engine.format("${that} sentence").unwrap(), "this sentence");
//! ```

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::TemplateError;

const DEFAULT_OPEN: &str = "${";
const DEFAULT_CLOSE: &str = "}";

lazy_static! {
    /// Keys are ASCII word characters only
    static ref KEY_PATTERN: Regex = Regex::new(r"^(?-u:\w)+$").unwrap();
}

#[derive(Debug, Clone)]
pub struct TemplateEngine {
    vars: HashMap<String, String>,
    /// `open (\w+) close` with ASCII `\w`, delimiters escaped
    pattern: Regex,
}

impl TemplateEngine {
    /// Creates an engine using `${` and `}` as delimiters
    pub fn new() -> Self {
        match Self::with_delimiters(DEFAULT_OPEN, DEFAULT_CLOSE) {
            Ok(engine) => engine,
            Err(e) => unreachable!("default delimiters are valid: {}", e),
        }
    }

    /// Creates an engine with custom delimiters
    ///
    /// # Errors
    /// Returns [`TemplateError::InvalidDelimiters`] if either delimiter is
    /// empty or contains a backslash.
    pub fn with_delimiters(open: &str, close: &str) -> Result<Self, TemplateError> {
        if open.is_empty() || close.is_empty() || open.contains('\\') || close.contains('\\') {
            return Err(TemplateError::InvalidDelimiters);
        }

        let pattern = Regex::new(&format!(
            r"{}((?-u:\w)+){}",
            regex::escape(open),
            regex::escape(close)
        ))
        .map_err(|_| TemplateError::InvalidDelimiters)?;

        Ok(Self {
            vars: HashMap::new(),
            pattern,
        })
    }

    /// Registers `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns [`TemplateError::InvalidKey`] unless the key is an ASCII word
    /// (letters, digits and `_`).
    pub fn add(&mut self, key: &str, value: impl Into<String>) -> Result<(), TemplateError> {
        if !KEY_PATTERN.is_match(key) {
            return Err(TemplateError::InvalidKey(key.to_string()));
        }
        self.vars.insert(key.to_string(), value.into());
        Ok(())
    }

    /// Removes a key, returning whether it was present
    pub fn remove(&mut self, key: &str) -> bool {
        self.vars.remove(key).is_some()
    }

    /// Substitutes every delimited key in `input`
    ///
    /// Substituted values are not scanned again.
    ///
    /// # Errors
    /// Returns [`TemplateError::UnknownKey`] for the first key in `input`
    /// that was never added.
    pub fn format(&self, input: &str) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(input.len());
        let mut last = 0;

        for caps in self.pattern.captures_iter(input) {
            let (Some(whole), Some(key)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let value = self
                .vars
                .get(key.as_str())
                .ok_or_else(|| TemplateError::UnknownKey(key.as_str().to_string()))?;
            out.push_str(&input[last..whole.start()]);
            out.push_str(value);
            last = whole.end();
        }
        out.push_str(&input[last..]);

        Ok(out)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
