pub struct TopicClassifier;

impl TopicClassifier {
    /// Buckets a question under the first three whitespace-delimited words
    /// of its prompt. Deliberately coarse: the label is a stable grouping
    /// key for mastery tracking, not a topic ontology, so two unrelated
    /// questions sharing their leading words land in the same bucket.
    pub fn classify(question_text: &str) -> String {
        question_text
            .split_whitespace()
            .take(3)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
