use crate::heatmap::render_heatmap;
use crate::models::ReviewRecord;

pub fn render_index() -> &'static str {
    INDEX_HTML
}

pub fn render_heatmap_page(series: &[ReviewRecord]) -> String {
    HEATMAP_HTML.replace("{{CHART}}", &render_heatmap(series))
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Anki Reviews</title>
  <style>
    body {
      margin: 0;
      min-height: 100vh;
      display: grid;
      place-items: center;
      font-family: Arial, sans-serif;
      background: linear-gradient(135deg, #f4f9ff, #dcefff);
      color: #1d2b3a;
    }

    main {
      background: rgba(255, 255, 255, 0.9);
      border-radius: 20px;
      box-shadow: 0 18px 48px rgba(0, 80, 255, 0.12);
      padding: 32px 40px;
      max-width: 520px;
    }

    h1 {
      margin-top: 0;
    }

    ul {
      padding-left: 20px;
      line-height: 1.8;
    }

    a {
      color: rgb(0, 80, 255);
    }
  </style>
</head>
<body>
  <main>
    <h1>Anki Reviews</h1>
    <p>Study history pulled from a local Anki install through AnkiConnect.</p>
    <ul>
      <li><a href="/anki-heatmap">Review heatmap</a></li>
      <li><a href="/anki-stats">Deck names (raw JSON)</a></li>
      <li><a href="/api/review-data">Reviews by day (raw JSON)</a></li>
    </ul>
  </main>
</body>
</html>
"#;

const HEATMAP_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Anki Heatmap</title>
  <style>
    body {
      margin: 0;
      font-family: Arial, sans-serif;
    }

    .crumbs {
      position: absolute;
      top: 10px;
      left: 10px;
      font-size: 16px;
    }

    .crumbs a {
      text-decoration: none;
    }

    .caption {
      margin-top: 50px;
      text-align: center;
      font-size: 20px;
    }

    .heatmap {
      display: grid;
      justify-items: center;
      gap: 8px;
      padding: 24px;
    }

    .heatmap-year {
      margin: 16px 0 0;
      font-size: 18px;
    }

    .heatmap-label {
      font-size: 9px;
      fill: #5f6b78;
    }

    .heatmap-empty {
      color: #5f6b78;
    }
  </style>
</head>
<body>
  <div class="crumbs">
    <a href="/">Home</a> &gt; Anki
  </div>
  <div class="caption">
    <a href="https://apps.ankiweb.net/" target="_blank">Anki</a> is a spaced repetition flashcard software. Below is a heatmap of my reviews.
  </div>
  <br><br>
  {{CHART}}
</body>
</html>
"#;
