//! Boolean query expression evaluation.
//!
//! Grammar, applied to the raw query text:
//!
//! ```text
//! Expr := Or
//! Or   := And (OR And)*
//! And  := Term (AND Term)*
//! Term := 'true' | 'false' | '' | keyword | '\(' Expr '\)'
//! ```
//!
//! `OR` and `AND` are case-sensitive, word-bounded operators. Grouping is
//! recognized only via the escaped marker pair `\(` / `\)`, the byte
//! sequence [`escape_keyword`](crate::escape_keyword) produces for plain
//! parentheses. Ordinary `(` / `)` inside a keyword term are never parsed
//! as groups.
//!
//! Evaluation builds no parse tree. Innermost groups are rewritten to the
//! literal text `true`/`false` until none remain, then the flat expression
//! is split on `OR`/`AND` and each remaining term is handed to the caller's
//! predicate. Markers that never pair up (unbalanced or empty groups) are
//! left in place and evaluated literally as keyword text.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// An innermost group: `\(` ... `\)` spanning no further parentheses.
static INNERMOST_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\\(([^()]+)\\\)").expect("group pattern is valid"));

static OR_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" *\bOR\b *").expect("OR pattern is valid"));

static AND_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" *\bAND\b *").expect("AND pattern is valid"));

/// Evaluates a boolean query expression against a term predicate.
///
/// Each keyword term surviving operator and group resolution is trimmed and
/// passed verbatim to `matcher`. A term of `true` or the empty string is
/// vacuously satisfied; `false` never is. The predicate must be
/// deterministic and side-effect-free: it may be invoked more than once per
/// logical term across group-rewrite passes.
///
/// A whitespace-only expression evaluates to `true` (an empty AND clause).
///
/// # Example
///
/// ```
/// use gridsift::evaluate;
///
/// let matcher = |term: &str| term == "apple" || term == "red";
/// assert!(evaluate("apple AND red", &matcher));
/// assert!(evaluate(r"banana OR \(apple AND red\)", &matcher));
/// assert!(!evaluate("apple AND banana", &matcher));
/// ```
pub fn evaluate<F>(expression: &str, matcher: F) -> bool
where
    F: Fn(&str) -> bool,
{
    let mut expression = Cow::Borrowed(expression);

    // Each rewriting pass resolves every innermost group and removes at
    // least one `\(` marker, so the loop runs at most once per group opener
    // in the input. Unpaired markers never match and fall through to flat
    // evaluation as literal term text.
    while INNERMOST_GROUP.is_match(&expression) {
        let rewritten = INNERMOST_GROUP
            .replace_all(&expression, |caps: &Captures<'_>| {
                if flat_eval(&caps[1], &matcher) {
                    "true"
                } else {
                    "false"
                }
            })
            .into_owned();
        expression = Cow::Owned(rewritten);
    }

    flat_eval(&expression, &matcher)
}

/// Evaluates a fully ungrouped expression: `OR` over `AND` over terms.
fn flat_eval<F>(expression: &str, matcher: &F) -> bool
where
    F: Fn(&str) -> bool,
{
    OR_KEYWORD.split(expression).any(|clause| {
        AND_KEYWORD.split(clause).all(|term| match term.trim() {
            "" | "true" => true,
            "false" => false,
            term => matcher(term),
        })
    })
}
