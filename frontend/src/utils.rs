use article_admin_shared::Article;
use web_sys::{File, HtmlInputElement};

/// Files currently selected in a `<input type="file" multiple>`, in
/// selection order.
pub fn selected_files(input: &HtmlInputElement) -> Vec<File> {
    match input.files() {
        Some(list) => (0..list.length()).filter_map(|i| list.get(i)).collect(),
        None => Vec::new(),
    }
}

/// `YYYY-MM-DD HH:MM` in UTC, or a dash when unpublished.
pub fn published_label(article: &Article) -> String {
    article
        .published_at
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
