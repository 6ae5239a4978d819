pub mod facets;
pub mod gallery;
pub mod summary;

pub(crate) fn truncate(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(width.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

pub(crate) fn print_count_table(title: &str, value_header: &str, table: &[crate::summary::FacetCount]) {
    println!("{}", title);

    if table.is_empty() {
        println!("  (none)");
        println!();
        return;
    }

    let value_width = table
        .iter()
        .map(|entry| entry.value.chars().count())
        .chain(std::iter::once(value_header.chars().count()))
        .max()
        .unwrap_or(0);

    println!("  {:<value_width$}  Count", value_header);
    for entry in table {
        println!("  {:<value_width$}  {}", entry.value, entry.count);
    }
    println!();
}
