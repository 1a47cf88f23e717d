use crate::controller::Query;
use crate::search::{Citation, SearchResult};
use crate::ui::markdown::{escape_html, to_html};
use std::fmt::Write;

/// Answer view: query heading, formatted answer and source cards
pub struct ResultDisplay<'a> {
    pub result: &'a SearchResult,
    pub query: &'a Query,
}

impl ResultDisplay<'_> {
    pub fn render(&self) -> String {
        let mut html = String::from(r#"<section class="result">"#);

        let _ = write!(
            html,
            r#"<p class="result-query">Showing results for: <span>{}</span></p>"#,
            escape_html(self.query.as_str())
        );
        let _ = write!(
            html,
            r#"<div class="answer">{}</div>"#,
            to_html(&self.result.answer)
        );

        let sources = web_sources(&self.result.citations);
        if !sources.is_empty() {
            html.push_str(r#"<div class="sources"><h2>Sources</h2><div class="source-grid">"#);
            for source in sources {
                html.push_str(&render_source_card(source));
            }
            html.push_str("</div></div>");
        }

        html.push_str("</section>");
        html
    }
}

/// Citations that have both a title and a URI, in order
pub fn web_sources(citations: &[Citation]) -> Vec<&Citation> {
    citations.iter().filter(|c| c.is_displayable()).collect()
}

// Opens in a new browsing context with no opener access.
fn render_source_card(source: &Citation) -> String {
    let uri = escape_html(&source.uri);
    format!(
        concat!(
            r#"<a class="source-card" href="{uri}" target="_blank" rel="noopener noreferrer">"#,
            r#"<p class="source-title">{title}</p>"#,
            r#"<p class="source-uri">{uri}</p>"#,
            r#"</a>"#
        ),
        uri = uri,
        title = escape_html(&source.title),
    )
}
