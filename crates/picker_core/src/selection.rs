/// Industry → checked niches, in accumulation order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    entries: Vec<(String, Vec<String>)>,
}

/// One flattened `(industry, niche)` row of the summary table and CSV export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRow {
    pub industry: String,
    /// Empty for an industry without checked niches.
    pub niche: String,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `niche` under `industry`, creating the entry on first append.
    pub fn push(&mut self, industry: &str, niche: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == industry) {
            Some((_, niches)) => niches.push(niche.to_owned()),
            None => self
                .entries
                .push((industry.to_owned(), vec![niche.to_owned()])),
        }
    }

    pub fn get(&self, industry: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == industry)
            .map(|(_, niches)| niches.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(industry, niches)| (industry.as_str(), niches.as_slice()))
    }

    pub fn industries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(industry, _)| industry.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn industry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn niche_count(&self) -> usize {
        self.entries.iter().map(|(_, niches)| niches.len()).sum()
    }

    /// Flattens into `(industry, niche)` rows. An industry with an empty niche list
    /// yields a single row with an empty niche.
    pub fn rows(&self) -> Vec<SelectionRow> {
        let mut rows = Vec::with_capacity(self.niche_count());
        for (industry, niches) in &self.entries {
            if niches.is_empty() {
                rows.push(SelectionRow {
                    industry: industry.clone(),
                    niche: String::new(),
                });
                continue;
            }
            rows.extend(niches.iter().map(|niche| SelectionRow {
                industry: industry.clone(),
                niche: niche.clone(),
            }));
        }
        rows
    }
}

/// Builds a state from explicit entries. Later entries for a repeated industry are appended
/// to the first one.
impl FromIterator<(String, Vec<String>)> for SelectionState {
    fn from_iter<T: IntoIterator<Item = (String, Vec<String>)>>(iter: T) -> Self {
        let mut state = Self::new();
        for (industry, niches) in iter {
            match state.entries.iter_mut().find(|(name, _)| *name == industry) {
                Some((_, existing)) => existing.extend(niches),
                None => state.entries.push((industry, niches)),
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_first_seen_industry_order() {
        let mut state = SelectionState::new();
        state.push("Tech", "AI");
        state.push("Retail", "Grocery");
        state.push("Tech", "Web");

        let industries: Vec<_> = state.industries().collect();
        assert_eq!(industries, vec!["Tech", "Retail"]);
        assert_eq!(state.get("Tech"), Some(&["AI".to_string(), "Web".to_string()][..]));
        assert_eq!(state.niche_count(), 3);
        assert_eq!(state.industry_count(), 2);
    }

    #[test]
    fn empty_industry_flattens_to_placeholder_row() {
        let state: SelectionState = vec![
            ("Tech".to_string(), vec!["AI".to_string()]),
            ("Retail".to_string(), Vec::new()),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            state.rows(),
            vec![
                SelectionRow {
                    industry: "Tech".into(),
                    niche: "AI".into()
                },
                SelectionRow {
                    industry: "Retail".into(),
                    niche: String::new()
                },
            ]
        );
    }
}
