//! Keyword-based folder suggestion.

use std::collections::HashSet;

use serde::Serialize;

use crate::note::NoteRecord;
use crate::text::{strip_html, tokenize};

/// Confidence reported for notes with no token content at all.
const EMPTY_NOTE_CONFIDENCE: f64 = 0.2;
/// Confidence reported when no table folder scores a single keyword.
const NO_MATCH_CONFIDENCE: f64 = 0.35;

/// A classifier verdict for one note.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedFolder {
    pub name: String,
    pub confidence: f64,
    pub reason: String,
}

/// Ordered folder-to-keywords mapping.
///
/// Declaration order is significant: when two folders tie on score the
/// earliest declared folder wins, so the table doubles as the tie-break
/// policy.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    entries: Vec<(String, HashSet<String>)>,
}

impl KeywordTable {
    pub fn new(entries: Vec<(String, Vec<&str>)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(folder, keywords)| {
                    (
                        folder,
                        keywords.into_iter().map(str::to_string).collect(),
                    )
                })
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HashSet<String>)> {
        self.entries
            .iter()
            .map(|(folder, keywords)| (folder.as_str(), keywords))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new(vec![
            (
                "Work".to_string(),
                vec![
                    "meeting",
                    "client",
                    "project",
                    "deadline",
                    "invoice",
                    "deliverable",
                    "followup",
                ],
            ),
            (
                "Personal".to_string(),
                vec!["family", "birthday", "travel", "recipe", "meal", "weekend"],
            ),
            (
                "Finance".to_string(),
                vec!["budget", "tax", "expense", "invoice", "payment"],
            ),
            (
                "Ideas".to_string(),
                vec!["idea", "brainstorm", "concept", "draft"],
            ),
            (
                "Journal".to_string(),
                vec!["today", "gratitude", "mood", "reflection", "diary"],
            ),
        ])
    }
}

/// Scores notes against an injected [`KeywordTable`].
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    table: KeywordTable,
}

impl Classifier {
    pub fn new(table: KeywordTable) -> Self {
        Self { table }
    }

    /// Suggests a folder for one note.
    ///
    /// Pure and total: every input yields a suggestion with confidence
    /// in `[0, 1]`. `known_folders` is the set of folder names that
    /// actually exist in the source, used to decide whether falling
    /// back to the note's original folder is meaningful.
    pub fn suggest(&self, note: &NoteRecord, known_folders: &[String]) -> SuggestedFolder {
        let content = format!("{} {}", note.title, strip_html(&note.body_html));
        let tokens = tokenize(&content);
        if tokens.is_empty() {
            return SuggestedFolder {
                name: fallback_name(&note.folder),
                confidence: EMPTY_NOTE_CONFIDENCE,
                reason: "Empty note".to_string(),
            };
        }

        let mut best_folder = "";
        let mut best_score = 0usize;
        for (folder, keywords) in self.table.iter() {
            let score = tokens.iter().filter(|token| keywords.contains(*token)).count();
            if best_folder.is_empty() || score > best_score {
                best_folder = folder;
                best_score = score;
            }
        }

        if best_score == 0 {
            let reason = "No strong keyword match; keeping original folder".to_string();
            let name = if !note.folder.is_empty()
                && known_folders.iter().any(|folder| folder == &note.folder)
            {
                note.folder.clone()
            } else {
                "Uncategorized".to_string()
            };
            return SuggestedFolder {
                name,
                confidence: NO_MATCH_CONFIDENCE,
                reason,
            };
        }

        // Hit density against content length, floored so very short
        // notes cannot trivially saturate.
        let denominator = f64::max(3.0, tokens.len() as f64 / 4.0);
        let confidence = f64::min(1.0, best_score as f64 / denominator);

        let mut reason = format!("Matched {best_score} keyword(s) for {best_folder}");
        if !known_folders.iter().any(|folder| folder == best_folder) && !note.folder.is_empty() {
            reason.push_str(&format!("; original folder was {}", note.folder));
        }
        SuggestedFolder {
            name: best_folder.to_string(),
            confidence,
            reason,
        }
    }
}

fn fallback_name(folder: &str) -> String {
    if folder.is_empty() {
        "Uncategorized".to_string()
    } else {
        folder.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(folder: &str, title: &str, body: &str) -> NoteRecord {
        NoteRecord::new(folder, title, "2024-11-02", body)
    }

    fn classifier() -> Classifier {
        Classifier::default()
    }

    #[test]
    fn empty_note_takes_fast_path() {
        let suggestion = classifier().suggest(&note("Inbox", "", "<p></p>"), &[]);
        assert_eq!(suggestion.name, "Inbox");
        assert_eq!(suggestion.confidence, 0.2);
        assert_eq!(suggestion.reason, "Empty note");
    }

    #[test]
    fn empty_note_without_folder_is_uncategorized() {
        let suggestion = classifier().suggest(&note("", "", ""), &[]);
        assert_eq!(suggestion.name, "Uncategorized");
        assert_eq!(suggestion.confidence, 0.2);
    }

    #[test]
    fn work_keywords_score_the_work_folder() {
        let n = note("", "Client meeting follow-up", "<p>Send project timeline...</p>");
        let suggestion = classifier().suggest(&n, &[]);
        assert_eq!(suggestion.name, "Work");
        // "client", "meeting", "project" all hit.
        assert!(suggestion.reason.starts_with("Matched 3 keyword(s) for Work"));
        assert_eq!(suggestion.confidence, 1.0);
    }

    #[test]
    fn personal_keywords_in_title_and_body_both_count() {
        let n = note(
            "Personal",
            "Weekend meal prep ideas",
            "<ul><li>Chicken bowls</li></ul>",
        );
        let suggestion = classifier().suggest(&n, &["Personal".to_string()]);
        assert_eq!(suggestion.name, "Personal");
        assert_eq!(suggestion.reason, "Matched 2 keyword(s) for Personal");
    }

    #[test]
    fn no_match_keeps_known_original_folder() {
        let n = note("Recipes", "Soup", "<p>Simmer the stock slowly.</p>");
        let suggestion = classifier().suggest(&n, &["Recipes".to_string()]);
        assert_eq!(suggestion.name, "Recipes");
        assert_eq!(suggestion.confidence, 0.35);
        assert_eq!(
            suggestion.reason,
            "No strong keyword match; keeping original folder"
        );
    }

    #[test]
    fn no_match_with_unknown_folder_is_uncategorized() {
        let n = note("Recipes", "Soup", "<p>Simmer the stock slowly.</p>");
        let suggestion = classifier().suggest(&n, &[]);
        assert_eq!(suggestion.name, "Uncategorized");
        assert_eq!(suggestion.confidence, 0.35);
    }

    #[test]
    fn reason_mentions_original_folder_when_suggestion_leaves_it() {
        let n = note("Inbox", "Budget review meeting", "<p>Discuss the project.</p>");
        let suggestion = classifier().suggest(&n, &["Inbox".to_string()]);
        assert_eq!(suggestion.name, "Work");
        assert!(suggestion.reason.ends_with("; original folder was Inbox"));
    }

    #[test]
    fn ties_resolve_to_earliest_declared_folder() {
        // "invoice" appears in both Work and Finance; Work is declared
        // first so it wins the tie.
        let n = note("", "Invoice", "");
        let suggestion = classifier().suggest(&n, &[]);
        assert_eq!(suggestion.name, "Work");
    }

    #[test]
    fn confidence_stays_within_unit_interval() {
        let dense = note("", "meeting", "meeting meeting meeting meeting meeting");
        let sparse = note("", "one meeting", &"filler ".repeat(200));
        for n in [dense, sparse] {
            let suggestion = classifier().suggest(&n, &[]);
            assert!((0.0..=1.0).contains(&suggestion.confidence));
        }
    }

    #[test]
    fn long_note_confidence_scales_with_token_count() {
        // 1 hit over 40 tokens: denominator is 10, confidence 0.1.
        let body = format!("meeting {}", "word ".repeat(39));
        let n = note("", "", &body);
        let suggestion = classifier().suggest(&n, &[]);
        assert_eq!(suggestion.name, "Work");
        assert!((suggestion.confidence - 0.1).abs() < 1e-9);
    }

    #[test]
    fn custom_table_is_honored() {
        let table = KeywordTable::new(vec![("Cooking".to_string(), vec!["soup", "stock"])]);
        let suggestion = Classifier::new(table).suggest(
            &note("", "Soup stock", ""),
            &[],
        );
        assert_eq!(suggestion.name, "Cooking");
        assert_eq!(suggestion.reason, "Matched 2 keyword(s) for Cooking");
    }
}
