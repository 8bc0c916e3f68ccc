//! `scraper`-backed HTML signal parser.

use scraper::{ElementRef, Html, Selector};

use super::signals::{FormSignal, HtmlSignals};

/// Parse markup into [`HtmlSignals`]. Never fails: markup without the
/// relevant tags yields empty lists.
pub fn extract_html_signals(html: &str) -> HtmlSignals {
    let document = Html::parse_document(html);

    let forms = select(&document, "form")
        .map(|form| {
            FormSignal::new(
                attr(&form, "method").to_lowercase(),
                attr(&form, "action"),
            )
        })
        .collect();

    HtmlSignals {
        hrefs: select_attr(&document, "a", "href"),
        imgs: select_attr(&document, "img", "src"),
        scripts: select_attr(&document, "script", "src"),
        links_tag: select_attr(&document, "link", "href"),
        forms,
        meta_keywords: meta_keywords(&document),
    }
}

/// Elements matching a tag selector. An unparsable selector matches nothing.
fn select<'a>(document: &'a Html, selector: &str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    let selector = Selector::parse(selector).ok();
    selector
        .into_iter()
        .flat_map(move |s| document.select(&s).collect::<Vec<_>>())
}

fn select_attr(document: &Html, selector: &str, name: &str) -> Vec<String> {
    select(document, selector).map(|el| attr(&el, name)).collect()
}

fn attr(element: &ElementRef<'_>, name: &str) -> String {
    element.value().attr(name).unwrap_or_default().to_string()
}

/// `content` of the first `<meta name="keywords">`, else of the first
/// `<meta property="keywords">`. A matching tag with no content yields "".
fn meta_keywords(document: &Html) -> String {
    let metas: Vec<ElementRef<'_>> = select(document, "meta").collect();
    let find = |key: &str| {
        metas
            .iter()
            .find(|m| m.value().attr(key) == Some("keywords"))
    };
    find("name")
        .or_else(|| find("property"))
        .map(|m| attr(m, "content"))
        .unwrap_or_default()
}
