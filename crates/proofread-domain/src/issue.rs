//! Issue module - one flagged span returned by the analysis service

use std::fmt;

/// A writing issue found in submitted text
///
/// Issues are immutable once created. The `length` is always derived from
/// `original_text`, so `length == original_text.chars().count()` holds for
/// every value of this type.
///
/// `position` is advisory: it is whatever character offset the remote service
/// reported and may point past the end of the text or overlap other issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    original_text: String,
    suggestion: String,
    explanation: String,
    position: usize,
    length: usize,
}

impl Issue {
    /// Create a new issue
    ///
    /// # Examples
    ///
    /// ```
    /// use proofread_domain::Issue;
    ///
    /// let issue = Issue::new("teh", "the", "typo", 0);
    /// assert_eq!(issue.length(), 3);
    /// ```
    pub fn new(
        original_text: impl Into<String>,
        suggestion: impl Into<String>,
        explanation: impl Into<String>,
        position: usize,
    ) -> Self {
        let original_text = original_text.into();
        let length = original_text.chars().count();

        Self {
            original_text,
            suggestion: suggestion.into(),
            explanation: explanation.into(),
            position,
            length,
        }
    }

    /// The exact substring judged problematic (may be empty)
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    /// Proposed replacement text (may be empty, meaning deletion)
    pub fn suggestion(&self) -> &str {
        &self.suggestion
    }

    /// Human-readable rationale
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Advisory character offset into the submitted text
    pub fn position(&self) -> usize {
        self.position
    }

    /// Character length of `original_text`
    pub fn length(&self) -> usize {
        self.length
    }


    /// Check whether `text` actually contains `original_text` at `position`
    ///
    /// Offsets are counted in characters. This never modifies the issue; it
    /// lets a presentation layer flag positions it cannot trust.
    ///
    /// # Examples
    ///
    /// ```
    /// use proofread_domain::Issue;
    ///
    /// let text = "I seen teh cat";
    /// assert!(Issue::new("teh", "the", "typo", 7).is_anchored(text));
    /// assert!(!Issue::new("teh", "the", "typo", 0).is_anchored(text));
    /// ```
    pub fn is_anchored(&self, text: &str) -> bool {
        if self.original_text.is_empty() {
            return false;
        }

        text.chars()
            .skip(self.position)
            .take(self.length)
            .eq(self.original_text.chars())
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Position {}] '{}' -> '{}'\nExplanation: {}",
            self.position, self.original_text, self.suggestion, self.explanation
        )
    }
}
