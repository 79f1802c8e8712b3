/// Percentage score of `candidate` against `query`.
///
/// Candidates come from a prefix walk and always start with `query`, so the
/// distance between them is taken to be the length difference. The score
/// therefore reduces to `len(query) / len(candidate) * 100`.
pub fn similarity(candidate: &str, query: &str) -> f64 {
    let candidate_len = candidate.chars().count() as f64;
    let distance = candidate_len - query.chars().count() as f64;
    ((candidate_len - distance) / candidate_len) * 100.0
}

/// The candidate with the highest [`similarity`] that is at least
/// `threshold_percent`, or an empty string if none qualifies.
///
/// On equal scores the earliest candidate wins.
pub fn rank_by_similarity<I, S>(suggestions: I, query: &str, threshold_percent: f64) -> String
    where I: IntoIterator<Item = S>, S: AsRef<str> {
    let mut max_similarity = -1.0;
    let mut result = None;
    for candidate in suggestions {
        let score = similarity(candidate.as_ref(), query);
        if score > max_similarity && score >= threshold_percent {
            max_similarity = score;
            result = Some(candidate);
        }
    }
    result.map(|x| x.as_ref().to_string()).unwrap_or_default()
}
