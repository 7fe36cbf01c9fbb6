use std::collections::{BTreeSet, HashMap};

/// A record as it arrives from the data source, already coerced to text.
///
/// Values are untrimmed and may be empty; [`Dataset::normalize`] decides what survives.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRecord {
    pub industry: String,
    pub niches: Vec<String>,
}

impl RawRecord {
    pub fn new<I, S>(industry: impl Into<String>, niches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            industry: industry.into(),
            niches: niches.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndustryRecord {
    pub industry: String,
    /// Trimmed, distinct, ascending.
    pub niches: Vec<String>,
}

/// Canonical, immutable list of industries sorted case-insensitively by name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    records: Vec<IndustryRecord>,
}

impl Dataset {
    /// Trims, deduplicates and sorts raw records into the canonical dataset.
    ///
    /// Records with a blank industry or no non-blank niches are dropped. Records sharing
    /// the same trimmed industry name are merged so that names stay unique.
    pub fn normalize<I>(raw: I) -> Self
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let mut merged: Vec<(String, BTreeSet<String>)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for record in raw {
            let industry = record.industry.trim();
            let niches: BTreeSet<String> = record
                .niches
                .iter()
                .map(|n| n.trim())
                .filter(|n| !n.is_empty())
                .map(ToOwned::to_owned)
                .collect();
            if industry.is_empty() || niches.is_empty() {
                continue;
            }
            match positions.get(industry) {
                Some(&idx) => merged[idx].1.extend(niches),
                None => {
                    positions.insert(industry.to_owned(), merged.len());
                    merged.push((industry.to_owned(), niches));
                }
            }
        }

        let mut records: Vec<IndustryRecord> = merged
            .into_iter()
            .map(|(industry, niches)| IndustryRecord {
                industry,
                niches: niches.into_iter().collect(),
            })
            .collect();
        // Stable: ties keep source order.
        records.sort_by_cached_key(|r| r.industry.to_lowercase());

        Self { records }
    }

    pub fn records(&self) -> &[IndustryRecord] {
        &self.records
    }

    pub fn industries(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.industry.as_str())
    }

    pub fn niches(&self, industry: &str) -> Option<&[String]> {
        self.records
            .iter()
            .find(|r| r.industry == industry)
            .map(|r| r.niches.as_slice())
    }

    pub fn contains(&self, industry: &str) -> bool {
        self.niches(industry).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
