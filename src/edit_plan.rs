//! The edit plan turns `(locale, section, replacement)` tuples into splices on a document.
//!
//! Edits are applied strictly in order, each one locating its section afresh in the output of
//! the previous edit. A lookup failure skips that edit and leaves the document untouched; the
//! batch carries on with the next one.

use crate::error::{Error, Result};
use crate::scan;
use crate::section::SectionSpan;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
/// Serialisable list of section replacements, applied in order.
pub struct EditPlan {
    /// Individual section replacements.
    pub edits: Vec<Edit>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// One section replacement within one locale.
pub struct Edit {
    /// Locale identifier whose block is searched, e.g. `en-US`.
    pub locale: String,
    /// Section key, or a dotted path of nested keys such as `landing.hero`.
    pub section: String,
    /// Structured text that replaces the section, starting with its own key.
    pub replacement: String,
}

#[derive(Debug)]
/// What happened to a single edit of a plan.
pub enum EditStatus {
    /// The section was replaced; offsets refer to the document before this edit.
    Applied {
        /// First replaced byte.
        start: usize,
        /// One past the last replaced byte.
        end: usize,
    },
    /// The edit was skipped and the document left as it was.
    Skipped(Error),
}

#[derive(Debug)]
/// Outcome of one edit, in plan order.
pub struct EditOutcome {
    /// Locale the edit targeted.
    pub locale: String,
    /// Section path the edit targeted.
    pub section: String,
    /// Whether it was applied.
    pub status: EditStatus,
}

#[derive(Debug)]
/// The patched document together with a per-edit account of the batch.
pub struct PlanReport {
    /// Document after every applicable edit.
    pub document: String,
    /// One entry per edit, in plan order.
    pub outcomes: Vec<EditOutcome>,
}

impl PlanReport {
    #[must_use]
    /// Number of edits that were spliced in.
    pub fn applied(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, EditStatus::Applied { .. }))
            .count()
    }

    #[must_use]
    /// Number of edits skipped because their target could not be located.
    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.applied()
    }
}

impl Edit {
    #[must_use]
    /// Build an edit from its three parts.
    pub fn new(
        locale: impl Into<String>,
        section: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            locale: locale.into(),
            section: section.into(),
            replacement: replacement.into(),
        }
    }

    /// Locate this edit's section in `document`.
    ///
    /// # Errors
    ///
    /// Returns the lookup error from [`scan::locate`].
    pub fn locate(&self, document: &str) -> Result<SectionSpan> {
        scan::locate(document, &self.locale, &self.section).map(|(_, span)| span)
    }
}

impl EditPlan {
    /// Parse a plan from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Plan`] if the JSON does not describe a plan.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON plan file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Apply every edit to `document` in order.
    ///
    /// Lookup failures are logged and recorded as skipped; the document is passed on unchanged
    /// to the next edit.
    ///
    /// # Errors
    ///
    /// Returns an error only for failures that are not specific to one edit.
    pub fn apply(&self, document: &str) -> Result<PlanReport> {
        let mut current = document.to_string();
        let mut outcomes = Vec::with_capacity(self.edits.len());

        for edit in &self.edits {
            let status = match edit.locate(&current) {
                Ok(span) => {
                    debug!(
                        trailing_comma = span.has_trailing_comma(),
                        "splicing {}.{}",
                        edit.locale,
                        edit.section
                    );
                    let (patched, range) = splice(&current, &span, &edit.replacement);
                    current = patched;
                    info!("updated {}.{}", edit.locale, edit.section);
                    EditStatus::Applied {
                        start: range.start,
                        end: range.end,
                    }
                }
                Err(err) if err.is_recoverable() => {
                    warn!("skipping {}.{}: {err}", edit.locale, edit.section);
                    EditStatus::Skipped(err)
                }
                Err(err) => return Err(err),
            };
            outcomes.push(EditOutcome {
                locale: edit.locale.clone(),
                section: edit.section.clone(),
                status,
            });
        }

        Ok(PlanReport {
            document: current,
            outcomes,
        })
    }
}

/// Replace one section of `document`, returning the new document.
///
/// # Errors
///
/// Returns the lookup error if the locale or section cannot be located. The caller still owns
/// the untouched original.
pub fn replace_section(
    document: &str,
    locale: &str,
    section: &str,
    replacement: &str,
) -> Result<String> {
    let (_, span) = scan::locate(document, locale, section)?;
    let (patched, _) = splice(document, &span, replacement);
    info!("updated {locale}.{section}");
    Ok(patched)
}

#[must_use]
/// Splice `replacement` over `span`, returning the new document and the replaced byte range.
///
/// Leading newlines and trailing whitespace of the replacement are dropped. The replacement
/// then decides how much of the span it covers:
/// - starting with a space or tab, it brings its own indentation and replaces the whitespace
///   before the key on its line; otherwise that whitespace stays and the splice starts at the key,
/// - ending with a comma, it brings its own separator and replaces the absorbed comma;
///   otherwise the splice stops after the closing brace and the original separator stays.
pub fn splice(
    document: &str,
    span: &SectionSpan,
    replacement: &str,
) -> (String, std::ops::Range<usize>) {
    let replacement = replacement
        .trim_start_matches(['\n', '\r'])
        .trim_end();

    let start = if replacement.starts_with([' ', '\t']) {
        span.indent_start
    } else {
        span.key_start
    };
    let end = if replacement.ends_with(',') {
        span.end
    } else {
        span.body_end
    };

    let mut patched = String::with_capacity(document.len() - (end - start) + replacement.len());
    patched.push_str(&document[..start]);
    patched.push_str(replacement);
    patched.push_str(&document[end..]);
    (patched, start..end)
}

#[cfg(test)]
#[path = "tests/edit_plan.rs"]
mod tests;
