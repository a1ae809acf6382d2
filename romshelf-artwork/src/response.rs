//! Catalog response parsing.
//!
//! Both the login and search endpoints answer with a small XML document:
//! a `Results` root holding `Result` records whose payload rides in
//! attributes. A missing root, a record without the attribute, or a
//! malformed body all mean "zero results" — lookups are best-effort.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

/// Collect every non-empty `URL` attribute from `Results/Result` records.
pub fn result_urls(body: &str) -> Vec<String> {
    collect_result_attribute(body, b"URL")
}

/// Extract the session token from a login response.
pub fn session_token(body: &str) -> Option<String> {
    collect_result_attribute(body, b"Session").into_iter().next()
}

fn collect_result_attribute(body: &str, attribute: &[u8]) -> Vec<String> {
    let mut xml = Reader::from_reader(body.as_bytes());
    xml.config_mut().trim_text(true);

    let mut values = Vec::new();
    let mut in_results = false;
    let mut buf = Vec::new();

    loop {
        match xml.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"Results" => in_results = true,
                b"Result" if in_results => {
                    if let Some(value) = attribute_value(e, attribute) {
                        values.push(value);
                    }
                }
                _ => {}
            },
            Ok(Event::Empty(ref e)) => {
                if in_results && e.name().as_ref() == b"Result" {
                    if let Some(value) = attribute_value(e, attribute) {
                        values.push(value);
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                if e.name().as_ref() == b"Results" {
                    in_results = false;
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                log::debug!("malformed catalog response: {e}");
                break;
            }
        }
        buf.clear();
    }

    values
}

fn attribute_value(e: &BytesStart<'_>, attribute: &[u8]) -> Option<String> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == attribute {
            let value = String::from_utf8_lossy(&attr.value).to_string();
            if !value.is_empty() {
                return Some(value);
            }
        }
    }
    None
}
