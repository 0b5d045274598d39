//! HTML fragments for card and dossier views
//!
//! Every interpolated value goes through `html_escape`; authored data may
//! carry quotes and ampersands.

use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::card::CardView;
use crate::detail::DetailView;

/// Call-to-action label on every card
pub const OPEN_DOSSIER_LABEL: &str = "OUVRIR LE DOSSIER";

/// Render a list card; `link` is the dossier page the card opens
#[must_use]
pub fn render_card_html(card: &CardView, link: &str) -> String {
    let mut html = String::with_capacity(512);

    let _ = writeln!(
        html,
        "<article class=\"file-card\" data-id=\"{}\">",
        encode_double_quoted_attribute(card.id.as_str()),
    );
    let _ = writeln!(
        html,
        "  <div class=\"file-header\"><span class=\"file-id\">{}</span> <span class=\"file-status\">{}</span></div>",
        encode_text(&card.header()),
        encode_text(&card.status),
    );
    let _ = writeln!(
        html,
        "  <img src=\"{}\" alt=\"{}\">",
        encode_double_quoted_attribute(&card.image),
        encode_double_quoted_attribute(&card.image_alt),
    );
    let _ = writeln!(html, "  <h3>{}</h3>", encode_text(&card.alias));
    let _ = writeln!(html, "  <p class=\"civil-name\">{}</p>", encode_text(&card.name));
    let _ = writeln!(
        html,
        "  <p class=\"powers\">Capacités : {}</p>",
        encode_text(&card.powers)
    );
    let _ = writeln!(
        html,
        "  <a class=\"btn-open\" href=\"{}\">{OPEN_DOSSIER_LABEL}</a>",
        encode_double_quoted_attribute(link),
    );
    html.push_str("</article>\n");

    html
}

/// Render the main section of a dossier page
#[must_use]
pub fn render_detail_html(view: &DetailView) -> String {
    let mut html = String::with_capacity(2048);
    let narrative = &view.narrative;

    html.push_str("<section class=\"dossier\">\n");
    let _ = writeln!(html, "  <h1>{}</h1>", encode_text(&view.title));
    let _ = writeln!(
        html,
        "  <img src=\"{}\" alt=\"{}\">",
        encode_double_quoted_attribute(&view.image),
        encode_double_quoted_attribute(&view.image_alt),
    );
    let _ = writeln!(
        html,
        "  <p class=\"dossier-id\">{} <span class=\"class-badge class-{}\">{}</span></p>",
        encode_text(view.id.as_str()),
        view.class_token,
        view.class,
    );
    let _ = writeln!(html, "  <h2>{}</h2>", encode_text(&view.alias));
    let _ = writeln!(html, "  <p class=\"civil-name\">{}</p>", encode_text(&view.name));
    let _ = writeln!(
        html,
        "  <p class=\"category\">{}</p>",
        encode_text(view.category_label)
    );

    html.push_str("  <ul class=\"powers\">\n");
    for power in &view.powers {
        let _ = writeln!(html, "    <li>{}</li>", encode_text(power));
    }
    html.push_str("  </ul>\n");

    html.push_str("  <div class=\"narrative\">\n");
    let _ = writeln!(html, "    <p>{}</p>", encode_text(&narrative.intro()));
    let _ = writeln!(
        html,
        "    <p>📍 Dernière localisation : {}</p>",
        encode_text(&narrative.last_seen)
    );
    let _ = writeln!(html, "    <p>📊 Statut : {}</p>", encode_text(&narrative.status));
    let _ = writeln!(
        html,
        "    <p>⚠️ Niveau de danger : {}</p>",
        encode_text(&narrative.danger_level)
    );
    let _ = writeln!(
        html,
        "    <p>📝 Notes opérationnelles :<br>{}</p>",
        encode_text(&narrative.notes)
    );
    html.push_str("  </div>\n");

    let _ = writeln!(html, "  <p class=\"bio\">{}</p>", encode_text(&view.bio));

    if !view.tags.is_empty() {
        html.push_str("  <ul class=\"tags\">\n");
        for tag in &view.tags {
            let _ = writeln!(html, "    <li class=\"tag\">{}</li>", encode_text(tag));
        }
        html.push_str("  </ul>\n");
    }

    html.push_str("</section>\n");
    html
}
