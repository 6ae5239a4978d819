use std::collections::HashMap;

use crate::catalog::Slide;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetCount {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub total: usize,
    pub company: Vec<FacetCount>,
    pub slide_type: Vec<FacetCount>,
    pub industry: Vec<FacetCount>,
    pub use_case: Vec<FacetCount>,
    pub tags: Vec<FacetCount>,
}

/// Per-facet frequency tables over the current view. Every table is ordered
/// by count descending, ties kept in first-encountered order. The tag table
/// flattens each row's tag list into one multiset before counting.
pub fn summarize(view: &[&Slide]) -> Summary {
    Summary {
        total: view.len(),
        company: count_values(view.iter().map(|s| s.company.as_str())),
        slide_type: count_values(view.iter().map(|s| s.slide_type.as_str())),
        industry: count_values(view.iter().map(|s| s.industry.as_str())),
        use_case: count_values(view.iter().map(|s| s.use_case.as_str())),
        tags: count_values(view.iter().flat_map(|s| s.tags.iter().map(|t| t.as_str()))),
    }
}

fn count_values<'a>(values: impl Iterator<Item = &'a str>) -> Vec<FacetCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for value in values {
        let entry = counts.entry(value).or_insert(0);
        if *entry == 0 {
            order.push(value);
        }
        *entry += 1;
    }

    let mut table: Vec<FacetCount> = order
        .into_iter()
        .map(|value| FacetCount {
            value: value.to_string(),
            count: counts[value],
        })
        .collect();

    // Stable sort: ties stay in first-encountered order.
    table.sort_by_key(|entry| std::cmp::Reverse(entry.count));
    table
}
