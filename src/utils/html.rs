use crate::tcg::{CardEntry, DeckRecord};

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Card Collection</title>
    <style>
        .cards {
            display: flex;
            flex-wrap: wrap;
        }
        .card {
            flex: 0 0 10%;
            text-align: center;
            box-sizing: border-box;
            margin-bottom: 20px;
            position: relative;
        }
        .card img {
            max-width: 100%;
            height: auto;
        }
        .quantity-overlay {
            position: absolute;
            bottom: 5px;
            left: 5px;
            background: rgba(0, 0, 0, 0.7);
            color: #fff;
            padding: 2px 5px;
            font-size: 18px;
            border-radius: 1px;
            display: flex;
            align-items: center;
            justify-content: center;
            width: calc(100% - 10px);
            box-sizing: border-box;
        }
    </style>
</head>
<body>
    <div class="cards">
"#;

const PAGE_TAIL: &str = r#"    </div>
</body>
</html>
"#;

/// Escape text for use in HTML content and quoted attributes
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn push_card(html: &mut String, card: &CardEntry) {
    html.push_str(&format!(
        r#"        <div class="card">
            <a target="_blank" href="{}"><img src="{}" alt="{}"></a>
            <div class="quantity-overlay">{}</div>
        </div>
"#,
        html_escape(&card.page_url),
        html_escape(&card.card_img_url),
        html_escape(&card.name),
        card.quantity
    ));
}

/// Render the gallery page for a deck, pokemon first, then trainer, then energy
pub fn render_gallery(record: &DeckRecord) -> String {
    let mut html = String::from(PAGE_HEAD);
    for card in record.cards() {
        push_card(&mut html, card);
    }
    html.push_str(PAGE_TAIL);
    html
}
