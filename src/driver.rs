//! Heap-sort batch driver
//!
//! Reads a whitespace-separated token stream and turns it into typed
//! batches. `min-heap` or `max-heap` opens a batch; the first token after it
//! decides whether the batch holds integers, floats or text. Each batch is
//! pushed through a [`Heap`] and drained, so it comes out ascending for
//! `min-heap` and descending for `max-heap`. `exit` stops processing.
//!
//! ```rust
//! use batch_heap::driver::run;
//!
//! let lines = run("min-heap 3 1 2 max-heap b a c exit 9", None).unwrap();
//! assert_eq!(lines, ["1", "2", "3", "c", "b", "a"]);
//! ```

use std::iter::Peekable;
use std::str::SplitWhitespace;

use lazy_static::lazy_static;
use log::{debug, trace};
use ordered_float::OrderedFloat;
use regex::Regex;

use crate::binary::Heap;
use crate::error::TemplateError;
use crate::mode::OrderingMode;
use crate::template::TemplateEngine;

/// Keywords recognized in the token stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlToken {
    Mode(OrderingMode),
    Exit,
}

impl ControlToken {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "min-heap" => Some(ControlToken::Mode(OrderingMode::Min)),
            "max-heap" => Some(ControlToken::Mode(OrderingMode::Max)),
            "exit" => Some(ControlToken::Exit),
            _ => None,
        }
    }
}

/// A homogeneous run of values
#[derive(Debug, Clone, PartialEq)]
pub enum BatchValues {
    Integer(Vec<i64>),
    Float(Vec<OrderedFloat<f64>>),
    Text(Vec<String>),
}

impl BatchValues {
    pub fn len(&self) -> usize {
        match self {
            BatchValues::Integer(v) => v.len(),
            BatchValues::Float(v) => v.len(),
            BatchValues::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn kind(&self) -> &'static str {
        match self {
            BatchValues::Integer(_) => "integer",
            BatchValues::Float(_) => "float",
            BatchValues::Text(_) => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub mode: OrderingMode,
    pub values: BatchValues,
}

type Tokens<'a> = Peekable<SplitWhitespace<'a>>;

lazy_static! {
    /// Decimal literals with optional exponent, plus `NaN` and `[+-]Infinity`
    static ref FLOAT_TOKEN: Regex = Regex::new(
        r"^(?:[+-]?(?:(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?|Infinity)|NaN)$"
    )
    .unwrap();
}

/// Parses a float token, rejecting words such as `nan` or `inf` that
/// `f64::from_str` would otherwise accept
fn parse_float(token: &str) -> Option<OrderedFloat<f64>> {
    if !FLOAT_TOKEN.is_match(token) {
        return None;
    }
    token.parse::<f64>().ok().map(OrderedFloat)
}

/// Renders a float in plain decimal form, keeping `.0` on whole numbers
fn render_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let mut out = value.to_string();
    if value.fract() == 0.0 && !out.contains('.') {
        out.push_str(".0");
    }
    out
}

/// Splits `input` into batches
///
/// Tokens outside a batch are discarded. A batch that starts with a number
/// ends at the first token of a different type; that token is then read as
/// if no batch were open.
pub fn parse_batches(input: &str) -> Vec<Batch> {
    let mut tokens = input.split_whitespace().peekable();
    let mut batches = Vec::new();

    while let Some(token) = tokens.next() {
        let mode = match ControlToken::parse(token) {
            Some(ControlToken::Mode(mode)) => mode,
            Some(ControlToken::Exit) => {
                debug!("exit token reached");
                break;
            }
            None => {
                debug!("discarding token {:?} outside of a batch", token);
                continue;
            }
        };

        let values = match tokens.peek().copied() {
            Some(next) if next.parse::<i64>().is_ok() => {
                BatchValues::Integer(take_run(&mut tokens, |t| t.parse().ok()))
            }
            Some(next) if parse_float(next).is_some() => {
                BatchValues::Float(take_run(&mut tokens, parse_float))
            }
            _ => BatchValues::Text(take_text(&mut tokens)),
        };

        trace!("parsed {} {} batch of {} values", mode, values.kind(), values.len());
        batches.push(Batch { mode, values });
    }

    batches
}

/// Consumes tokens while `parse` accepts them
fn take_run<T>(tokens: &mut Tokens<'_>, parse: impl Fn(&str) -> Option<T>) -> Vec<T> {
    let mut run = Vec::new();
    while let Some(value) = tokens.peek().copied().and_then(&parse) {
        tokens.next();
        run.push(value);
    }
    run
}

/// Consumes tokens up to the next control token
fn take_text(tokens: &mut Tokens<'_>) -> Vec<String> {
    let mut run = Vec::new();
    while let Some(token) = tokens.next_if(|t| ControlToken::parse(t).is_none()) {
        run.push(token.to_string());
    }
    run
}

/// Inserts every value into a heap of the given mode and removes them all
fn heap_sort<T: Ord>(mode: OrderingMode, values: impl IntoIterator<Item = T>) -> Vec<T> {
    let values = values.into_iter();
    let mut heap = Heap::with_capacity(mode, values.size_hint().0);
    heap.extend(values);
    heap.into_sorted_vec()
}

/// Runs one batch through a heap and renders the drained values
pub fn run_batch(batch: &Batch) -> Vec<String> {
    debug!(
        "running {} {} batch of {} values",
        batch.mode,
        batch.values.kind(),
        batch.values.len()
    );

    match &batch.values {
        BatchValues::Integer(values) => heap_sort(batch.mode, values.iter().copied())
            .into_iter()
            .map(|v| v.to_string())
            .collect(),
        BatchValues::Float(values) => heap_sort(batch.mode, values.iter().copied())
            .into_iter()
            .map(|v| render_float(v.0))
            .collect(),
        BatchValues::Text(values) => heap_sort(batch.mode, values.iter().cloned()),
    }
}

/// Parses `input`, runs every batch and returns the output lines
///
/// With a `template`, each line is rendered through a [`TemplateEngine`]
/// that knows the keys `value`, `index` (position within the batch) and
/// `mode`.
///
/// # Errors
/// Fails if the template references any other key.
pub fn run(input: &str, template: Option<&str>) -> Result<Vec<String>, TemplateError> {
    let mut engine = TemplateEngine::new();
    let mut lines = Vec::new();

    for batch in parse_batches(input) {
        for (index, value) in run_batch(&batch).into_iter().enumerate() {
            let line = match template {
                Some(template) => {
                    engine.add("value", value)?;
                    engine.add("index", index.to_string())?;
                    engine.add("mode", batch.mode.to_string())?;
                    engine.format(template)?
                }
                None => value,
            };
            lines.push(line);
        }
    }

    Ok(lines)
}
