//! RSS feed parsing for torrent index results.

use super::{CandidateRelease, SearchError};
use quick_xml::events::Event;
use quick_xml::reader::Reader;

/// Parse an RSS feed into candidate releases, preserving item order.
///
/// Items missing a title or link are dropped; the index's ranking of the
/// remaining items is the priority order downstream code relies on.
pub fn parse_feed(xml: &[u8]) -> Result<Vec<CandidateRelease>, SearchError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut buf = Vec::new();

    let mut current_item: Option<ItemBuilder> = None;
    let mut current_element = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                current_element = name.clone();

                if name == "item" {
                    current_item = Some(ItemBuilder::default());
                }
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();

                if name == "item" {
                    if let Some(builder) = current_item.take() {
                        if let Some(item) = builder.build() {
                            items.push(item);
                        }
                    }
                }
                current_element.clear();
            }
            Ok(Event::Text(e)) => {
                if let Some(ref mut item) = current_item {
                    let text = e.unescape().unwrap_or_default().to_string();
                    set_field(item, &current_element, text);
                }
            }
            // Indexes sometimes CDATA-wrap titles to dodge escaping.
            Ok(Event::CData(e)) => {
                if let Some(ref mut item) = current_item {
                    let text = String::from_utf8_lossy(&e).to_string();
                    set_field(item, &current_element, text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(SearchError::Feed(format!("XML parse error: {}", e))),
            _ => {}
        }
        buf.clear();
    }

    Ok(items)
}

fn set_field(item: &mut ItemBuilder, element: &str, text: String) {
    if text.is_empty() {
        return;
    }
    match element {
        "title" => item.title = Some(text),
        "link" => item.link = Some(text),
        _ => {}
    }
}

#[derive(Default)]
struct ItemBuilder {
    title: Option<String>,
    link: Option<String>,
}

impl ItemBuilder {
    fn build(self) -> Option<CandidateRelease> {
        Some(CandidateRelease {
            title: self.title?,
            link: self.link?,
        })
    }
}
