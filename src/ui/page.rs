use crate::app::App;
use crate::controller::SearchState;
use crate::ui::input::SearchInput;
use crate::ui::markdown::escape_html;
use crate::ui::result::ResultDisplay;
use crate::ui::spinner::render_loading;
use chrono::Datelike;

/// Seconds between reloads while a search is in flight
pub const LOADING_REFRESH_SECS: u32 = 1;

/// Everything the page needs, borrowed from the session
pub struct PageView<'a> {
    pub state: &'a SearchState,
    pub draft: &'a str,
    pub has_searched: bool,
    /// Year printed in the footer
    pub year: i32,
}

impl<'a> PageView<'a> {
    pub fn from_app(app: &'a App) -> Self {
        Self {
            state: app.state(),
            draft: app.draft(),
            has_searched: app.has_searched(),
            year: chrono::Local::now().year(),
        }
    }
}

/// Render the whole document
pub fn render_page(view: &PageView<'_>) -> String {
    let loading = view.state.is_loading();

    let refresh = if loading {
        format!(r#"<meta http-equiv="refresh" content="{LOADING_REFRESH_SECS}" />"#)
    } else {
        String::new()
    };
    let layout = if view.has_searched {
        "shell shell-searched"
    } else {
        "shell shell-landing"
    };

    let input = SearchInput {
        draft: view.draft,
        disabled: loading,
    }
    .render();

    let body = match view.state {
        SearchState::Idle => String::new(),
        SearchState::Loading { .. } => render_loading(),
        SearchState::Success { result, query } => ResultDisplay { result, query }.render(),
        SearchState::Error { message } => render_error(message),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
{refresh}<title>start341</title>
<style>{STYLE}</style>
</head>
<body>
<div class="{layout}">
<header class="brand"><h1>start341</h1><p>Your AI-powered starting point.</p></header>
<main>
{input}
<div class="outcome">{body}</div>
</main>
</div>
<footer class="footer"><p>&copy; {year} start341.com. All rights reserved.</p></footer>
</body>
</html>
"#,
        year = view.year,
    )
}

fn render_error(message: &str) -> String {
    format!(
        r#"<div class="error" role="alert">{}</div>"#,
        escape_html(message)
    )
}

const STYLE: &str = r#"
:root { --bg:#0f172a; --surface:#1e293b; --border:#334155; --primary:#38bdf8; --secondary:#a78bfa; --text:#f1f5f9; --muted:#94a3b8; }
* { box-sizing:border-box; }
body { margin:0; min-height:100vh; display:flex; flex-direction:column; align-items:center; background:var(--bg); color:var(--text); font-family:system-ui,sans-serif; padding:1rem; }
.shell { width:100%; max-width:48rem; }
.shell-landing { padding-top:10rem; }
.brand { text-align:center; margin-bottom:2rem; }
.brand h1 { font-size:3.5rem; margin:0 0 .5rem; background:linear-gradient(90deg,var(--primary),var(--secondary)); -webkit-background-clip:text; background-clip:text; color:transparent; }
.brand p { color:var(--muted); margin:0; }
.search-form { max-width:42rem; margin:0 auto; }
.search-box { position:relative; }
.search-input { width:100%; padding:.75rem 4rem .75rem 1.25rem; border-radius:9999px; border:1px solid var(--border); background:var(--surface); color:var(--text); font-size:1rem; }
.search-input:disabled, .search-button:disabled { opacity:.5; }
.search-button { position:absolute; top:0; right:0; height:100%; width:3.5rem; border:none; background:none; color:var(--muted); cursor:pointer; }
.search-button svg { width:1.5rem; height:1.5rem; }
.outcome { margin-top:1.5rem; }
.loading { display:flex; flex-direction:column; align-items:center; gap:.75rem; color:var(--muted); }
.spinner { width:2.5rem; height:2.5rem; border:4px solid var(--border); border-top-color:var(--primary); border-radius:50%; animation:spin 1s linear infinite; }
@keyframes spin { to { transform:rotate(360deg); } }
.error { text-align:center; padding:1rem; border-radius:.5rem; background:rgba(127,29,29,.5); border:1px solid rgba(239,68,68,.5); color:#fca5a5; }
.result-query { color:var(--muted); font-size:1.125rem; }
.result-query span { color:var(--text); font-weight:600; }
.answer { background:var(--surface); padding:1.5rem; border-radius:.75rem; border:1px solid var(--border); line-height:1.7; color:var(--muted); }
.answer-strong { color:var(--text); font-weight:600; }
.sources h2 { font-size:1.25rem; }
.source-grid { display:grid; grid-template-columns:repeat(auto-fill,minmax(18rem,1fr)); gap:1rem; }
.source-card { display:block; padding:1rem; border-radius:.5rem; background:var(--surface); border:1px solid var(--border); text-decoration:none; }
.source-card:hover { border-color:var(--primary); }
.source-title { margin:0; color:var(--primary); font-weight:600; overflow:hidden; text-overflow:ellipsis; white-space:nowrap; }
.source-uri { margin:.25rem 0 0; color:var(--muted); font-size:.875rem; overflow:hidden; text-overflow:ellipsis; white-space:nowrap; }
.footer { margin-top:auto; padding:2rem 0 1rem; color:var(--muted); font-size:.875rem; text-align:center; }
"#;
