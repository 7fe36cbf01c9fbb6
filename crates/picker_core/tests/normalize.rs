use picker_core::{Dataset, IndustryRecord, RawRecord};
use pretty_assertions::assert_eq;

fn names(dataset: &Dataset) -> Vec<&str> {
    dataset.industries().collect()
}

#[test]
fn trims_dedupes_and_sorts_niches() {
    let dataset = Dataset::normalize(vec![RawRecord::new(
        "  Tech ",
        ["Web", " AI", "Web ", "", "   ", "ai"],
    )]);

    assert_eq!(
        dataset.records(),
        &[IndustryRecord {
            industry: "Tech".to_string(),
            niches: vec!["AI".to_string(), "Web".to_string(), "ai".to_string()],
        }]
    );
}

#[test]
fn drops_blank_industries_and_empty_niche_lists() {
    let dataset = Dataset::normalize(vec![
        RawRecord::new("   ", ["AI"]),
        RawRecord::new("Retail", Vec::<String>::new()),
        RawRecord::new("Energy", ["  ", ""]),
        RawRecord::new("Health", ["Clinics"]),
    ]);

    assert_eq!(names(&dataset), vec!["Health"]);
}

#[test]
fn sorts_industries_case_insensitively() {
    let dataset = Dataset::normalize(vec![
        RawRecord::new("banking", ["Retail"]),
        RawRecord::new("Agriculture", ["Dairy"]),
        RawRecord::new("Construction", ["Roofing"]),
        RawRecord::new("aviation", ["Charter"]),
    ]);

    assert_eq!(
        names(&dataset),
        vec!["Agriculture", "aviation", "banking", "Construction"]
    );
}

#[test]
fn case_insensitive_ties_keep_source_order() {
    let dataset = Dataset::normalize(vec![
        RawRecord::new("tech", ["b"]),
        RawRecord::new("Tech", ["a"]),
    ]);

    assert_eq!(names(&dataset), vec!["tech", "Tech"]);
}

#[test]
fn repeated_industry_names_are_merged() {
    let dataset = Dataset::normalize(vec![
        RawRecord::new("Tech", ["Web"]),
        RawRecord::new(" Tech", ["AI", "Web"]),
    ]);

    assert_eq!(dataset.len(), 1);
    assert_eq!(
        dataset.niches("Tech"),
        Some(&["AI".to_string(), "Web".to_string()][..])
    );
}

#[test]
fn every_output_record_satisfies_the_canonical_form() {
    let dataset = Dataset::normalize(vec![
        RawRecord::new(" Zeta ", [" z2", "z1 ", "z1"]),
        RawRecord::new("alpha", ["x", " "]),
        RawRecord::new("", ["orphan"]),
        RawRecord::new("Mid", [" "]),
    ]);

    for record in dataset.records() {
        assert!(!record.industry.is_empty());
        assert_eq!(record.industry, record.industry.trim());
        assert!(!record.niches.is_empty());
        let mut sorted = record.niches.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(record.niches, sorted);
        assert!(record.niches.iter().all(|n| !n.is_empty() && n == n.trim()));
    }
    assert_eq!(names(&dataset), vec!["alpha", "Zeta"]);
}
