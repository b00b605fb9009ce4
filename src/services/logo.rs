const LOGO_BASE_URL: &str = "https://logo.clearbit.com";

/// Derives a logo URL from a company name. Unknown or empty names fall back
/// to an empty string, never an error.
pub fn logo_url_for(company: &str) -> String {
    let slug: String = company
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();

    if slug.is_empty() {
        return String::new();
    }

    format!("{}/{}.com", LOGO_BASE_URL, slug)
}
