use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::routes::AppState;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Product Recommendations</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            background: #f4f6f9;
            text-align: center;
            padding-top: 50px;
        }
        select, button { padding: 10px; margin: 10px; }
        .card {
            background: white;
            padding: 15px;
            margin: 10px auto;
            width: 300px;
            border-radius: 8px;
            box-shadow: 0 4px 8px rgba(0,0,0,0.1);
        }
    </style>
</head>
<body>
    <h1>Product Recommendations</h1>
    <select id="productSelect">
        <option value="">Select a product</option>
"#;

const PAGE_TAIL: &str = r#"    </select>
    <button onclick="getRecommendations()">Get Recommendations</button>
    <div id="results"></div>
    <script>
        async function getRecommendations() {
            const product = document.getElementById("productSelect").value;
            if (!product) {
                alert("Please select a product.");
                return;
            }
            const response = await fetch("/recommend", {
                method: "POST",
                headers: { "Content-Type": "application/json" },
                body: JSON.stringify({ product })
            });
            const items = await response.json();
            const results = document.getElementById("results");
            results.replaceChildren();
            const heading = document.createElement("h3");
            heading.textContent = "Recommended Products:";
            results.appendChild(heading);
            for (const item of items) {
                const card = document.createElement("div");
                card.className = "card";
                const title = document.createElement("strong");
                title.textContent = item.title;
                card.appendChild(title);
                card.appendChild(document.createElement("br"));
                card.appendChild(document.createTextNode("Category: " + item.category));
                results.appendChild(card);
            }
        }
    </script>
</body>
</html>
"#;

/// Selection page listing every catalog title
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_page(state.recommender.catalog().titles()))
}

fn render_page<'a>(titles: impl Iterator<Item = &'a str>) -> String {
    let mut page = String::from(PAGE_HEAD);
    for title in titles {
        let title = escape_html(title);
        page.push_str(&format!("        <option value=\"{title}\">{title}</option>\n"));
    }
    page.push_str(PAGE_TAIL);
    page
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
