/// Case-insensitive substring match. An empty query matches everything.
pub fn matches(query: &str, candidate: &str) -> bool {
    query.is_empty() || candidate.to_lowercase().contains(&query.to_lowercase())
}

/// Keeps the candidates that match `query`, preserving their order.
pub fn filter_matching<'a, I>(query: &str, candidates: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .filter(|candidate| matches(query, candidate))
        .collect()
}
