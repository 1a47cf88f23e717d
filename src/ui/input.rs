use crate::ui::markdown::escape_html;

/// Path the search form posts to
pub const SEARCH_ACTION: &str = "/search";
/// Form field carrying the query text
pub const QUERY_FIELD: &str = "query";

/// Search box. Shows the last typed text; disabled while a search runs.
pub struct SearchInput<'a> {
    pub draft: &'a str,
    pub disabled: bool,
}

impl SearchInput<'_> {
    pub fn render(&self) -> String {
        let disabled = if self.disabled { " disabled" } else { "" };
        format!(
            concat!(
                r#"<form class="search-form" method="post" action="{action}">"#,
                r#"<div class="search-box">"#,
                r#"<input class="search-input" type="text" name="{field}" value="{value}" placeholder="Ask anything..." autocomplete="off" autofocus{disabled} />"#,
                r#"<button class="search-button" type="submit" aria-label="Search"{disabled}>"#,
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                r#"<path d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z" /></svg>"#,
                r#"</button></div></form>"#
            ),
            action = SEARCH_ACTION,
            field = QUERY_FIELD,
            value = escape_html(self.draft),
            disabled = disabled,
        )
    }
}
