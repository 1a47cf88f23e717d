/// Loading indicator shown while a search is in flight
pub fn render_loading() -> String {
    concat!(
        r#"<div class="loading" role="status" aria-live="polite">"#,
        r#"<div class="spinner"></div>"#,
        r#"<span class="loading-label">Searching the web...</span>"#,
        r#"</div>"#
    )
    .to_string()
}
