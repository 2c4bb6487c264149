//! Pre-export review: how would the whole collection be filed?

use std::collections::BTreeMap;

use serde::Serialize;

use crate::classify::Classifier;
use crate::note::NoteRecord;

/// One suggested-folder group in an assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentBucket {
    pub folder: String,
    pub count: usize,
    pub avg_confidence: f64,
}

/// Summary of classifier verdicts over a note collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSummary {
    pub total: usize,
    pub buckets: Vec<AssessmentBucket>,
}

/// Returns the sorted distinct non-empty folder names of a collection.
pub fn known_folders(notes: &[NoteRecord]) -> Vec<String> {
    let mut folders: Vec<String> = notes
        .iter()
        .filter(|note| !note.folder.is_empty())
        .map(|note| note.folder.clone())
        .collect();
    folders.sort();
    folders.dedup();
    folders
}

/// Classifies every note and groups the verdicts by suggested folder.
///
/// Buckets come back ordered by folder name ascending, with the mean
/// confidence rounded to two decimals. Read-only; nothing is written.
pub fn assess_suggestions(classifier: &Classifier, notes: &[NoteRecord]) -> AssessmentSummary {
    let known = known_folders(notes);

    let mut confidences: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for note in notes {
        let suggestion = classifier.suggest(note, &known);
        confidences
            .entry(suggestion.name)
            .or_default()
            .push(suggestion.confidence);
    }

    let buckets = confidences
        .into_iter()
        .map(|(folder, values)| {
            let average = values.iter().sum::<f64>() / values.len() as f64;
            AssessmentBucket {
                folder,
                count: values.len(),
                avg_confidence: (average * 100.0).round() / 100.0,
            }
        })
        .collect();

    AssessmentSummary {
        total: notes.len(),
        buckets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::sample_notes;

    #[test]
    fn known_folders_are_sorted_and_distinct() {
        let notes = vec![
            NoteRecord::new("Work", "a", "d", ""),
            NoteRecord::new("", "b", "d", ""),
            NoteRecord::new("Inbox", "c", "d", ""),
            NoteRecord::new("Work", "e", "d", ""),
        ];
        assert_eq!(known_folders(&notes), vec!["Inbox", "Work"]);
    }

    #[test]
    fn sample_fixture_assessment() {
        let summary = assess_suggestions(&Classifier::default(), &sample_notes());
        assert_eq!(summary.total, 3);

        let folders: Vec<&str> = summary
            .buckets
            .iter()
            .map(|bucket| bucket.folder.as_str())
            .collect();
        assert_eq!(folders, vec!["Ideas", "Personal", "Work"]);
        assert!(summary.buckets.iter().all(|bucket| bucket.count == 1));

        // Means arrive pre-rounded to two decimals.
        let ideas = &summary.buckets[0];
        assert_eq!(ideas.avg_confidence, 0.33);
        let personal = &summary.buckets[1];
        assert_eq!(personal.avg_confidence, 0.67);
    }

    #[test]
    fn buckets_aggregate_counts_and_average() {
        let notes = vec![
            NoteRecord::new("", "", "d", ""),
            NoteRecord::new("", "", "d", ""),
        ];
        let summary = assess_suggestions(&Classifier::default(), &notes);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.buckets.len(), 1);
        assert_eq!(summary.buckets[0].folder, "Uncategorized");
        assert_eq!(summary.buckets[0].count, 2);
        assert_eq!(summary.buckets[0].avg_confidence, 0.2);
    }

    #[test]
    fn summary_serializes_with_camel_case_keys() {
        let summary = assess_suggestions(&Classifier::default(), &sample_notes());
        let value = serde_json::to_value(&summary).expect("serialize");
        assert_eq!(value["total"], 3);
        assert!(value["buckets"][0]["avgConfidence"].is_number());
    }

    #[test]
    fn empty_collection_yields_empty_summary() {
        let summary = assess_suggestions(&Classifier::default(), &[]);
        assert_eq!(summary.total, 0);
        assert!(summary.buckets.is_empty());
    }
}
