use crate::parsers::text::join_text;
use crate::results::{RawJobRecord, field_or_unknown};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector should be valid")
}

static CARD: LazyLock<Selector> = LazyLock::new(|| selector(".job-search-card"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector(".base-search-card__title"));
static COMPANY: LazyLock<Selector> = LazyLock::new(|| selector(".base-search-card__subtitle"));
static LOCATION: LazyLock<Selector> = LazyLock::new(|| selector(".job-search-card__location"));
static TIME: LazyLock<Selector> = LazyLock::new(|| selector("time"));
static LINK: LazyLock<Selector> = LazyLock::new(|| selector("a[href]"));
static DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| {
    selector(".job-search-card__snippet, .show-more-less-html__markup")
});

/// Extracts one record per job card on a search result page
pub fn parse(html: &str) -> Vec<RawJobRecord> {
    let doc = Html::parse_document(html);

    let records = doc.select(&CARD).map(parse_card).collect::<Vec<_>>();

    ::log::debug!("HTML parser found {} job cards", records.len());
    records
}

/// Extracts the fields of a single card
///
/// Every lookup is independent; whatever is missing becomes `unknown`
/// without affecting the other fields.
pub fn parse_card(card: ElementRef<'_>) -> RawJobRecord {
    RawJobRecord {
        title: field_or_unknown(text_of(card, &TITLE).as_deref()),
        company: field_or_unknown(text_of(card, &COMPANY).as_deref()),
        location: field_or_unknown(text_of(card, &LOCATION).as_deref()),
        posted_date: field_or_unknown(attr_of(card, &TIME, "datetime")),
        link: field_or_unknown(attr_of(card, &LINK, "href")),
        description: text_of(card, &DESCRIPTION).unwrap_or_default(),
    }
}

fn text_of(card: ElementRef<'_>, selector: &Selector) -> Option<String> {
    card.select(selector).next().map(|e| join_text(e.text()))
}

fn attr_of<'a>(card: ElementRef<'a>, selector: &Selector, attr: &str) -> Option<&'a str> {
    card.select(selector).next().and_then(|e| e.value().attr(attr))
}
