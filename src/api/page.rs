use crate::endpoints::Endpoint;

/// Only endpoints that take a term get an input; all of them are listed.
pub fn render_index(endpoints: &[Endpoint]) -> String {
    let inputs: String = endpoints
        .iter()
        .filter(|e| e.needs_term)
        .map(|e| {
            let name = escape(e.name);
            format!(
                r#"
      <label>{name}
        <input type="text" name="{name}">
      </label>"#
            )
        })
        .collect();

    let listing: String = endpoints
        .iter()
        .map(|e| format!("\n      <li>{}</li>", escape(e.name)))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Trademark Search</title>
</head>
<body>
  <h1>Trademark Search</h1>
  <form id="search-form" action="/fetch_api_data" method="post">{inputs}
    <button type="submit">Search</button>
  </form>
  <h2>Endpoints</h2>
  <ul>{listing}
  </ul>
  <pre id="results"></pre>
  <script src="/static/app.js"></script>
</body>
</html>
"#
    )
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
