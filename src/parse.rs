// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading networks from text.
//!
//! Two input shapes are accepted:
//!
//! - JSON: a [`NetworkFile`] (`{"inputs": N, "pairs": [[i,j],...]}` or
//!   `{"layers": [[[i,j],...],...]}`).
//! - Pair lists: `(0,8),(1,9),...` or `[0,8],[1,9]`, optionally wrapped in
//!   outer brackets and spread over several lines, which also reads back the
//!   one-layer-per-line output of [`layers_to_string`](crate::layers_to_string).
//!   `#` starts a comment.
//!
//! When the wire count is not given it is inferred as largest wire + 1.

use crate::error::NetworkError;
use crate::network::Network;
use crate::types::{NetworkFile, Pair};

/// Parse a comparator list such as `[(0,1),(2,3)]`.
pub fn parse_pairs(text: &str) -> Result<Vec<Pair>, NetworkError> {
    let mut pairs = Vec::new();
    // numbers read directly inside each open group, and whether it held groups
    let mut stack: Vec<(Vec<usize>, bool)> = Vec::new();

    for (line_idx, raw_line) in text.lines().enumerate() {
        let line_no = line_idx + 1;
        let line = raw_line.split('#').next().unwrap_or("");
        let err = |message: String| NetworkError::Parse {
            line: line_no,
            message,
        };

        let mut chars = line.char_indices().peekable();
        while let Some((col, c)) = chars.next() {
            match c {
                '(' | '[' => {
                    if let Some(parent) = stack.last_mut() {
                        if !parent.0.is_empty() {
                            return Err(err(format!("unexpected '{}' after a number", c)));
                        }
                        parent.1 = true;
                    }
                    stack.push((Vec::new(), false));
                }
                ')' | ']' => {
                    let Some((numbers, has_groups)) = stack.pop() else {
                        return Err(err(format!("unbalanced '{}' at column {}", c, col + 1)));
                    };
                    match (numbers.as_slice(), has_groups) {
                        (&[i, j], false) => pairs.push((i, j)),
                        ([], _) => {}
                        (other, _) => {
                            return Err(err(format!(
                                "a pair needs exactly two wires, found {}",
                                other.len()
                            )))
                        }
                    }
                }
                ',' | ';' => {}
                c if c.is_whitespace() => {}
                c if c.is_ascii_digit() => {
                    let mut value = c.to_digit(10).map_or(0, |d| d as usize);
                    while let Some(&(_, d)) = chars.peek() {
                        let Some(digit) = d.to_digit(10) else { break };
                        value = value
                            .checked_mul(10)
                            .and_then(|v| v.checked_add(digit as usize))
                            .ok_or_else(|| err("wire index overflows".to_string()))?;
                        chars.next();
                    }
                    match stack.last_mut() {
                        Some(group) if !group.1 => group.0.push(value),
                        Some(_) => return Err(err("number mixed with nested groups".to_string())),
                        None => return Err(err("wire index outside of a pair".to_string())),
                    }
                }
                other => {
                    return Err(err(format!(
                        "unexpected character '{}' at column {}",
                        other,
                        col + 1
                    )))
                }
            }
        }
    }

    if !stack.is_empty() {
        return Err(NetworkError::Parse {
            line: text.lines().count().max(1),
            message: "unclosed bracket".to_string(),
        });
    }
    Ok(pairs)
}

/// Smallest wire count that covers every pair.
pub fn infer_inputs(pairs: &[Pair]) -> usize {
    pairs.iter().map(|&(i, j)| i.max(j) + 1).max().unwrap_or(0)
}

/// Parse a network in either accepted form.
///
/// `inputs` overrides any size stored in the text.
pub fn parse_network(text: &str, inputs: Option<usize>) -> Result<Network, NetworkError> {
    let (stored, pairs) = if text.trim_start().starts_with('{') {
        let file: NetworkFile = serde_json::from_str(text).map_err(|e| NetworkError::Parse {
            line: e.line(),
            message: e.to_string(),
        })?;
        (file.inputs, file.body.into_pairs())
    } else {
        (None, parse_pairs(text)?)
    };

    let n = inputs.or(stored).unwrap_or_else(|| infer_inputs(&pairs));
    Network::new(n, pairs)
}
