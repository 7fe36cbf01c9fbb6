//! Query-string encoding of a selection, for bookmarks and shared URLs.
//!
//! Wire format (`application/x-www-form-urlencoded`):
//!
//! ```text
//! industries=Tech&industries=Retail+Banking&n_Tech=AI&n_Tech=Web
//! ```
//!
//! `industries` lists every selected industry; each `n_<industry>` key lists the checked
//! niches of one industry. Multi-valued entries repeat the key, in list order.

use url::form_urlencoded;

use crate::SelectionState;

pub const INDUSTRIES_KEY: &str = "industries";
pub const NICHE_KEY_PREFIX: &str = "n_";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShareLink {
    pub industries: Vec<String>,
    niches: Vec<(String, Vec<String>)>,
}

impl ShareLink {
    /// Builds the link for the current render: every selected industry, plus one niche list
    /// per industry that has checked niches.
    pub fn from_selection(selected_industries: &[String], selections: &SelectionState) -> Self {
        Self {
            industries: selected_industries.to_vec(),
            niches: selections
                .iter()
                .map(|(industry, niches)| (industry.to_owned(), niches.to_vec()))
                .collect(),
        }
    }

    /// Parses a query string, with or without the leading `?`.
    ///
    /// Unknown keys and blank values are ignored. Names are not checked against any dataset.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut link = Self::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            if key == INDUSTRIES_KEY {
                link.industries.push(value.into_owned());
            } else if let Some(industry) = key.strip_prefix(NICHE_KEY_PREFIX) {
                if industry.is_empty() {
                    continue;
                }
                link.push_niche(industry, value.into_owned());
            }
        }
        link
    }

    /// Encodes to a query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for industry in &self.industries {
            serializer.append_pair(INDUSTRIES_KEY, industry);
        }
        for (industry, niches) in &self.niches {
            let key = format!("{NICHE_KEY_PREFIX}{industry}");
            for niche in niches {
                serializer.append_pair(&key, niche);
            }
        }
        serializer.finish()
    }

    /// The `n_<industry>` list, if the link carried one.
    pub fn niches_for(&self, industry: &str) -> Option<&[String]> {
        self.niches
            .iter()
            .find(|(name, _)| name == industry)
            .map(|(_, niches)| niches.as_slice())
    }

    pub fn niche_lists(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.niches
            .iter()
            .map(|(industry, niches)| (industry.as_str(), niches.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.industries.is_empty() && self.niches.is_empty()
    }

    fn push_niche(&mut self, industry: &str, niche: String) {
        match self.niches.iter_mut().find(|(name, _)| name == industry) {
            Some((_, niches)) => niches.push(niche),
            None => self.niches.push((industry.to_owned(), vec![niche])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn selection(entries: &[(&str, &[&str])]) -> SelectionState {
        entries
            .iter()
            .map(|(industry, niches)| {
                (
                    industry.to_string(),
                    niches.iter().map(|n| n.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn encodes_repeated_keys_in_list_order() {
        let selections = selection(&[("Tech", &["AI", "Web"])]);
        let link = ShareLink::from_selection(&["Tech".into(), "Retail".into()], &selections);

        assert_eq!(
            link.to_query_string(),
            "industries=Tech&industries=Retail&n_Tech=AI&n_Tech=Web"
        );
    }

    #[test]
    fn reserved_characters_are_percent_encoded_in_keys_and_values() {
        let selections = selection(&[("Food & Drink", &["Cafés", "50/50 Bars"])]);
        let link = ShareLink::from_selection(&["Food & Drink".into()], &selections);
        let query = link.to_query_string();

        assert_eq!(
            query,
            "industries=Food+%26+Drink&n_Food+%26+Drink=Caf%C3%A9s&n_Food+%26+Drink=50%2F50+Bars"
        );
        assert_eq!(ShareLink::parse(&query), link);
    }

    #[test]
    fn parse_accepts_leading_question_mark_and_ignores_unknown_keys() {
        let link = ShareLink::parse("?industries=Tech&page=3&n_Tech=AI&n_=x&industries=");

        assert_eq!(link.industries, vec!["Tech".to_string()]);
        assert_eq!(link.niches_for("Tech"), Some(&["AI".to_string()][..]));
        assert_eq!(link.niche_lists().count(), 1);
    }

    #[test]
    fn names_containing_percent_and_prefix_survive() {
        let selections = selection(&[("n_100% Organic", &["a=b", "c&d"])]);
        let link = ShareLink::from_selection(&["n_100% Organic".into()], &selections);

        let decoded = ShareLink::parse(&link.to_query_string());
        assert_eq!(decoded, link);
        assert_eq!(
            decoded.niches_for("n_100% Organic"),
            Some(&["a=b".to_string(), "c&d".to_string()][..])
        );
    }

    #[test]
    fn empty_query_is_empty_link() {
        assert!(ShareLink::parse("").is_empty());
        assert!(ShareLink::parse("?").is_empty());
    }
}
