use crate::cli::output;

/// Indicator of the active list filter; hidden when unfiltered.
pub fn banner_text(filter_category: Option<&str>) -> Option<String> {
    filter_category.map(|category| {
        format!("Filtering: {category} — run `filter {category}` again (or `filter`) to clear.")
    })
}

pub fn render(filter_category: Option<&str>) {
    if let Some(text) = banner_text(filter_category) {
        output::warning(text);
    }
}
