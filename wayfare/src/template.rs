//! Route template compilation.
//!
//! A template is a path pattern of literal segments, `:name` placeholders,
//! and `*` wildcards, e.g. `/editor/:id` or `/files/*`. Compilation happens
//! once per registration and the result is cached on the route.
//!
//! # Compilation rules
//!
//! 1. Literal chunks are regex-escaped, so separators match literally.
//! 2. `:name` becomes a capturing group matching one or more non-separator
//!    characters; `name` is recorded, in order, for later zipping against
//!    capture groups.
//! 3. `*` becomes a greedy match-any sequence that introduces no capture
//!    group, so it is invisible to the parameter list.
//! 4. The pattern is anchored start-to-end.
//!
//! A `:` not followed by a name character is treated as a literal.

use regex::Regex;
use thiserror::Error;
use wayfare_core::Params;

/// A template that failed pattern compilation.
///
/// Template syntax is otherwise unvalidated: anything the compiled pattern
/// accepts is a legal template, and overlap between templates is the
/// caller's hazard.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The underlying pattern construction was rejected.
    #[error("invalid route template '{template}'")]
    Pattern {
        /// The offending template.
        template: String,
        /// The pattern engine's rejection.
        #[source]
        source: regex::Error,
    },
}

/// A compiled route template: the anchored pattern plus the ordered list of
/// placeholder names.
#[derive(Debug, Clone)]
pub struct CompiledTemplate {
    pattern: Regex,
    param_names: Vec<String>,
}

impl CompiledTemplate {
    /// Compile a template.
    ///
    /// This is the fallible path; [`Router::add_route`] panics on failure
    /// instead, mirroring the unchecked registration contract.
    ///
    /// [`Router::add_route`]: crate::Router::add_route
    pub fn compile(template: &str) -> Result<Self, TemplateError> {
        let mut pattern = String::from("^");
        let mut param_names = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                ':' if chars.peek().is_some_and(|c| is_name_char(*c)) => {
                    pattern.push_str(&regex::escape(&literal));
                    literal.clear();

                    let mut name = String::new();
                    while let Some(&c) = chars.peek() {
                        if !is_name_char(c) {
                            break;
                        }
                        name.push(c);
                        chars.next();
                    }
                    param_names.push(name);
                    pattern.push_str("([^/]+)");
                }
                '*' => {
                    pattern.push_str(&regex::escape(&literal));
                    literal.clear();
                    pattern.push_str(".*");
                }
                other => literal.push(other),
            }
        }
        pattern.push_str(&regex::escape(&literal));
        pattern.push('$');

        let pattern = Regex::new(&pattern).map_err(|source| TemplateError::Pattern {
            template: template.to_owned(),
            source,
        })?;

        Ok(Self {
            pattern,
            param_names,
        })
    }

    /// Match a pathname against this template.
    ///
    /// Returns the captured parameters (placeholder names zipped with capture
    /// groups by position) on a match, `None` otherwise.
    pub fn match_path(&self, path: &str) -> Option<Params> {
        let captures = self.pattern.captures(path)?;
        let pairs = self
            .param_names
            .iter()
            .zip(captures.iter().skip(1))
            .filter_map(|(name, group)| group.map(|g| (name.clone(), g.as_str().to_owned())))
            .collect();
        Some(Params::from_pairs(pairs))
    }

    /// The placeholder names in template order.
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }
}

// Placeholder names follow the \w class: ASCII letters, digits, underscore.
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
