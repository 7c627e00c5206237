//! Rename-rule compilation.
//!
//! A rule is written either as `<find>:<replace>` (plain text, first
//! occurrence only) or as `/<find>/<replace>/<flags>` (regular expression).
//! The regex form may use any delimiter character as long as it appears
//! exactly three times, e.g. `#old#new#` or `|old|new|gi`.
//!
//! Plain-text rules only ever replace the first occurrence. Use a regex rule
//! with the `g` flag to replace every occurrence.

use regex::{Captures, Regex};
use std::fmt;
use std::str::FromStr;

use crate::errors::{RenameError, Result};

/// A compiled, immutable string transform.
#[derive(Debug, Clone)]
pub enum Rule {
    PlainText {
        find: String,
        replace: String,
    },
    Regex {
        /// Delimiter the rule was written with.
        delim: char,
        /// Pattern as written by the user (no inline flags).
        find: String,
        regex: Regex,
        replacement: String,
        global: bool,
        ignore_case: bool,
    },
}

/// Compile a rule string. Same as [`Rule::parse`].
pub fn compile(rule: &str) -> Result<Rule> {
    Rule::parse(rule)
}

impl Rule {
    /// Parse and compile a rule string.
    pub fn parse(s: &str) -> Result<Self> {
        let Some(delim) = s.chars().next() else {
            return Err(RenameError::InvalidRule("empty rename-rule".into()));
        };

        let parts: Vec<&str> = s.split(delim).collect();
        if parts.len() == 4 && parts[0].is_empty() && !parts[1].is_empty() {
            return Self::regex(delim, parts[1], parts[2], parts[3]);
        }

        match s.find(':') {
            Some(i) if i > 0 && i < s.len() - 1 => Ok(Rule::PlainText {
                find: s[..i].to_string(),
                replace: s[i + 1..].to_string(),
            }),
            _ => Err(RenameError::InvalidRule(format!(
                "invalid plain-text rename-rule: {s}"
            ))),
        }
    }

    fn regex(delim: char, find: &str, replacement: &str, flags: &str) -> Result<Self> {
        let mut global = false;
        let mut ignore_case = false;
        for flag in flags.chars() {
            match flag {
                'g' => global = true,
                'i' => ignore_case = true,
                other => return Err(RenameError::UnknownFlag(other)),
            }
        }

        let pattern = if ignore_case {
            format!("(?i){find}")
        } else {
            find.to_string()
        };
        let regex = Regex::new(&pattern).map_err(|source| RenameError::InvalidRegex {
            pattern: pattern.clone(),
            source,
        })?;

        Ok(Rule::Regex {
            delim,
            find: find.to_string(),
            regex,
            replacement: replacement.to_string(),
            global,
            ignore_case,
        })
    }

    /// Apply the rule to `input`, returning the transformed string.
    pub fn apply(&self, input: &str) -> String {
        match self {
            Rule::PlainText { find, replace } => input.replacen(find.as_str(), replace, 1),
            Rule::Regex {
                regex,
                replacement,
                global,
                ..
            } => {
                let mut out = String::with_capacity(input.len());
                let mut last = 0;
                for (n, caps) in regex.captures_iter(input).enumerate() {
                    if n > 0 && !global {
                        break;
                    }
                    let Some(whole) = caps.get(0) else { continue };
                    out.push_str(&input[last..whole.start()]);
                    expand_groups(replacement, &caps, &mut out);
                    last = whole.end();
                }
                out.push_str(&input[last..]);
                out
            }
        }
    }

    pub fn is_regex(&self) -> bool {
        matches!(self, Rule::Regex { .. })
    }

    pub fn is_global(&self) -> bool {
        matches!(self, Rule::Regex { global: true, .. })
    }
}

/// Append `template` to `out`, swapping `$N` for the Nth group of `caps`.
/// Indices outside the match's groups are kept literally.
fn expand_groups(template: &str, caps: &Captures<'_>, out: &mut String) {
    let mut rest = template;
    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            out.push('$');
            rest = after;
            continue;
        }
        let placeholder = &rest[pos..pos + 1 + digits];
        match after[..digits].parse::<usize>() {
            Ok(i) if i < caps.len() => {
                out.push_str(caps.get(i).map_or("", |m| m.as_str()));
            }
            _ => out.push_str(placeholder),
        }
        rest = &after[digits..];
    }
    out.push_str(rest);
}

impl FromStr for Rule {
    type Err = RenameError;
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::PlainText { find, replace } => write!(f, "{find}:{replace}"),
            Rule::Regex {
                delim,
                find,
                replacement,
                global,
                ignore_case,
                ..
            } => {
                write!(f, "{delim}{find}{delim}{replacement}{delim}")?;
                if *global {
                    f.write_str("g")?;
                }
                if *ignore_case {
                    f.write_str("i")?;
                }
                Ok(())
            }
        }
    }
}
