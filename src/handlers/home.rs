use axum::response::Html;

/// Static landing page with a minimal form for poking the analyzer by hand.
pub async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Scrape Savings</title>
<style>
  body { font-family: sans-serif; max-width: 720px; margin: 2rem auto; padding: 0 1rem; }
  input[type=url] { width: 100%; padding: 0.5rem; margin: 0.5rem 0; }
  button { padding: 0.5rem 1.5rem; }
  pre { background: #f4f4f4; padding: 1rem; overflow-x: auto; }
  .error { color: #b00020; }
</style>
</head>
<body>
<h1>Scrape Savings</h1>
<p>Compare a raw page fetch against Firecrawl's cleaned extraction.</p>
<form id="form">
  <input type="url" id="url" placeholder="https://example.com" required>
  <button type="submit">Analyze</button>
</form>
<div id="out"></div>
<script>
document.getElementById('form').addEventListener('submit', async (e) => {
  e.preventDefault();
  const out = document.getElementById('out');
  out.textContent = 'Analyzing...';
  try {
    const res = await fetch('/analyze', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ url: document.getElementById('url').value })
    });
    const data = await res.json();
    if (!res.ok) {
      out.innerHTML = '<p class="error"></p>';
      out.firstChild.textContent = data.error;
      return;
    }
    out.innerHTML = '<pre></pre>';
    out.firstChild.textContent = JSON.stringify(data, null, 2);
  } catch (err) {
    out.innerHTML = '<p class="error"></p>';
    out.firstChild.textContent = String(err);
  }
});
</script>
</body>
</html>
"#;
