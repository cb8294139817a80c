//! Static article field catalog
//!
//! The field paths below describe the expected shape of a flattened
//! article record. The list is hand-authored from observed responses,
//! not derived from data: individual records may omit fields, and the
//! catalog makes no claim of being exhaustive for every record.

/// Ordered field paths of a flattened article record
pub const ARTICLE_FIELDS: &[&str] = &[
    "web_url",
    "snippet",
    "multimedia",
    "headline.main",
    "headline.kicker",
    "headline.content_kicker",
    "headline.print_headline",
    "headline.name",
    "headline.seo",
    "headline.sub",
    "keywords",
    "document_type",
    "type_of_material",
    "_id",
    "word_count",
    "score",
];

/// The field paths expected in a flattened article record, in catalog order.
pub fn article_fields() -> &'static [&'static str] {
    ARTICLE_FIELDS
}
