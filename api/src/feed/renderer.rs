//! Feed renderer
//!
//! Renders feed documents to RSS 2.0 XML.

use chrono::NaiveDateTime;
use rss::{ChannelBuilder, EnclosureBuilder, GuidBuilder, Item, ItemBuilder};

use crate::domain::entities::{FeedDocument, FeedItem};

/// MIME type of the rendered document
pub const RSS_CONTENT_TYPE: &str = "application/rss+xml";

const GENERATOR: &str = concat!("headless-rss-api ", env!("CARGO_PKG_VERSION"));

/// Render a feed document to RSS XML.
///
/// No build timestamp is emitted, so equal documents render byte-identical.
pub fn render_rss(document: &FeedDocument) -> String {
    let items: Vec<Item> = document.items.iter().map(render_item).collect();

    ChannelBuilder::default()
        .title(document.channel.title.clone())
        .link(document.channel.feed_url.clone())
        .description(document.channel.description.clone())
        .language(document.channel.language.clone())
        .generator(GENERATOR.to_string())
        .items(items)
        .build()
        .to_string()
}

fn render_item(item: &FeedItem) -> Item {
    let enclosure = EnclosureBuilder::default()
        .url(item.enclosure.url.clone())
        .length(item.enclosure.length.to_string())
        .mime_type(item.enclosure.content_type.clone())
        .build();

    let guid = GuidBuilder::default()
        .value(item.url.clone())
        .permalink(true)
        .build();

    ItemBuilder::default()
        .title(item.title.clone())
        .description(item.description.clone())
        .link(item.url.clone())
        .guid(guid)
        .pub_date(format_pub_date(&item.date))
        .enclosure(enclosure)
        .build()
}

/// `2021-05-04T10:15:30` becomes `Tue, 04 May 2021 10:15:30 GMT`. The date
/// carries no zone and is read as UTC. Anything unparseable passes through.
fn format_pub_date(date: &str) -> String {
    match NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S") {
        Ok(dt) => dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
        Err(_) => date.to_string(),
    }
}
