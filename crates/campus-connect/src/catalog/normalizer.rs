use std::collections::BTreeSet;

use crate::recommendations::OrgRecord;

/// Strips byte-order marks and zero-width spaces that spreadsheet exports leave in header cells.
pub(crate) fn clean_header(value: &str) -> String {
    value.replace(['\u{feff}', '\u{200b}'], "").trim().to_string()
}

/// Splits a raw category cell such as `["Cultural; Social"]` into its individual options.
pub(crate) fn category_options(raw: &str) -> Vec<String> {
    let cleaned: String = raw
        .chars()
        .filter(|ch| !matches!(ch, '[' | ']' | '"'))
        .collect();

    cleaned
        .split([';', ',', '.'])
        .map(str::trim)
        .filter(|option| !option.is_empty())
        .map(str::to_string)
        .collect()
}

/// Distinct, sorted interest options drawn from every organization category.
pub fn interest_options(organizations: &[OrgRecord]) -> Vec<String> {
    organizations
        .iter()
        .flat_map(|record| category_options(&record.category))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
