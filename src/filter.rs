use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Slide};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub company: Option<String>,
    pub slide_type: Option<String>,
    pub industry: Option<String>,
    pub use_case: Option<String>,
    pub tag: Option<String>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.company.is_none()
            && self.slide_type.is_none()
            && self.industry.is_none()
            && self.use_case.is_none()
            && self.tag.is_none()
    }
}

/// Narrows the catalog to the rows matching every set facet. The tag facet
/// is a membership test against the row's tag list and is applied first;
/// the scalar facets are exact-equality restrictions. Unset facets skip.
/// Catalog order is preserved; an empty result is valid.
pub fn filter<'a>(catalog: &'a Catalog, selection: &Selection) -> Vec<&'a Slide> {
    filter_view(catalog.view(), selection)
}

pub fn filter_view<'a>(mut view: Vec<&'a Slide>, selection: &Selection) -> Vec<&'a Slide> {
    if let Some(tag) = &selection.tag {
        view.retain(|slide| slide.tags.iter().any(|t| t == tag));
    }

    if let Some(company) = &selection.company {
        view.retain(|slide| slide.company == *company);
    }
    if let Some(slide_type) = &selection.slide_type {
        view.retain(|slide| slide.slide_type == *slide_type);
    }
    if let Some(industry) = &selection.industry {
        view.retain(|slide| slide.industry == *industry);
    }
    if let Some(use_case) = &selection.use_case {
        view.retain(|slide| slide.use_case == *use_case);
    }

    view
}
