use axum::{extract::State, response::Html};

use crate::handlers::AppState;

const PAGE_HEAD: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>Transaction upload</title></head>
<body>
  <h1>Upload transactions</h1>
  <form action="/upload" method="post" enctype="multipart/form-data">
    <input type="file" name="file" accept=".csv,.xlsx">
    <button type="submit">Upload</button>
  </form>
  <p><a href="/dashboard">Dashboard</a></p>
"#;

const TRUNCATE_FORM: &str = r#"  <form action="/admin/truncate" method="post">
    <button type="submit">Truncate table</button>
  </form>
"#;

// A plain HTML form cannot set request headers
const TRUNCATE_NOTE: &str = r#"  <p>Truncating the table requires a POST to <code>/admin/truncate</code> with the <code>x-api-key</code> header.</p>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

pub async fn upload_form(State(state): State<AppState>) -> Html<String> {
    let admin = if state.admin_api_key.is_some() {
        TRUNCATE_NOTE
    } else {
        TRUNCATE_FORM
    };
    Html(format!("{PAGE_HEAD}{admin}{PAGE_TAIL}"))
}

pub async fn health() -> &'static str {
    "Spreadsheet upload server is running."
}
