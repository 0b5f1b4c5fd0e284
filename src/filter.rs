//! Type-to-filter selection over a list of candidates (font names).
//!
//! [`on_query_change`] is the whole behaviour; [`LiveFilter`] just keeps
//! the last outcome around for callers that want state.

use serde::Serialize;

/// Result of applying a query to the candidate list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOutcome {
    /// Candidates containing the query, case-insensitively, in input order.
    pub visible: Vec<String>,
    /// Index into `visible` of an exact, case-sensitive match of the query.
    pub selection: Option<usize>,
    /// The typed text, exactly as typed.
    pub text: String,
    /// Whether `text` differs from the text before this edit.
    pub changed: bool,
}

impl FilterOutcome {
    pub fn selected(&self) -> Option<&str> {
        self.selection.map(|i| self.visible[i].as_str())
    }
}

/// Recompute the visible candidates after the query text changed.
///
/// The selection survives only when the query names a visible candidate
/// exactly; otherwise it is cleared. The text itself is never rewritten.
pub fn on_query_change<S: AsRef<str>>(
    candidates: &[S],
    previous_text: &str,
    current_query: &str,
) -> FilterOutcome {
    let needle = current_query.to_lowercase();

    let visible: Vec<String> = candidates
        .iter()
        .map(|c| c.as_ref())
        .filter(|c| c.to_lowercase().contains(&needle))
        .map(str::to_string)
        .collect();

    let selection = visible.iter().position(|c| c == current_query);

    FilterOutcome {
        visible,
        selection,
        text: current_query.to_string(),
        changed: previous_text != current_query,
    }
}

/// An editable selector: candidates plus the current text and selection.
#[derive(Debug, Clone)]
pub struct LiveFilter {
    candidates: Vec<String>,
    state: FilterOutcome,
}

impl LiveFilter {
    /// Start with `initial` as the text, filtered the same way an edit is.
    pub fn new(candidates: Vec<String>, initial: &str) -> Self {
        let state = on_query_change(&candidates, initial, initial);
        Self { candidates, state }
    }

    /// Apply an edit of the text.
    pub fn set_text(&mut self, text: &str) -> &FilterOutcome {
        self.state = on_query_change(&self.candidates, &self.state.text, text);
        &self.state
    }

    pub fn state(&self) -> &FilterOutcome {
        &self.state
    }

    pub fn text(&self) -> &str {
        &self.state.text
    }

    pub fn visible(&self) -> &[String] {
        &self.state.visible
    }

    /// The effective choice: the selected candidate, or the raw text when
    /// nothing is selected.
    pub fn selected(&self) -> &str {
        self.state.selected().unwrap_or(&self.state.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FONTS: [&str; 3] = ["Arial", "Arial-Bold", "Helvetica"];

    #[test]
    fn test_lowercase_query_filters_without_selecting() {
        let out = on_query_change(&FONTS, "", "arial");
        assert_eq!(out.visible, vec!["Arial", "Arial-Bold"]);
        assert_eq!(out.selection, None);
        assert_eq!(out.text, "arial");
    }

    #[test]
    fn test_exact_query_selects() {
        let out = on_query_change(&FONTS, "Aria", "Arial");
        assert_eq!(out.visible, vec!["Arial", "Arial-Bold"]);
        assert_eq!(out.selection, Some(0));
        assert_eq!(out.selected(), Some("Arial"));
        assert!(out.changed);
    }

    #[test]
    fn test_selection_index_is_into_visible() {
        let out = on_query_change(&FONTS, "", "Helvetica");
        assert_eq!(out.visible, vec!["Helvetica"]);
        assert_eq!(out.selection, Some(0));
    }

    #[test]
    fn test_empty_query_shows_all() {
        let out = on_query_change(&FONTS, "x", "");
        assert_eq!(out.visible.len(), 3);
        assert_eq!(out.selection, None);
    }

    #[test]
    fn test_no_match() {
        let out = on_query_change(&FONTS, "", "Futura");
        assert!(out.visible.is_empty());
        assert_eq!(out.selection, None);
        assert_eq!(out.text, "Futura");
    }

    #[test]
    fn test_unchanged_text() {
        let out = on_query_change(&FONTS, "Arial", "Arial");
        assert!(!out.changed);
    }

    #[test]
    fn test_live_filter_falls_back_to_text() {
        let fonts: Vec<String> = FONTS.iter().map(|s| s.to_string()).collect();
        let mut filter = LiveFilter::new(fonts, "");

        filter.set_text("arial-b");
        assert_eq!(filter.visible().to_vec(), vec!["Arial-Bold"]);
        assert_eq!(filter.selected(), "arial-b");

        filter.set_text("Arial-Bold");
        assert_eq!(filter.selected(), "Arial-Bold");
        assert_eq!(filter.text(), "Arial-Bold");
    }
}
