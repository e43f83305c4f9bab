//! Parsing an XML document back into a [`Value`].

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, ErrorKind, Result};
use crate::value::Value;
use crate::{ATTRIBUTES_KEY, TEXT_KEY};

/// An open element while the document is being walked.
struct Frame {
    name: String,
    attributes: Vec<(String, Value)>,
    entries: Vec<(String, Value)>,
    text: String,
}

/// Parse an XML document into a [`Value`].
///
/// The result is a map keyed by the root element name, so
/// `<invoice><id>5</id></invoice>` decodes to `{invoice: {id: "5"}}`.
/// Repeated sibling elements collapse into a [`Value::List`] under the
/// shared name, attributes are kept under [`ATTRIBUTES_KEY`], and leaves
/// are always text.
pub fn from_xml(xml: &str) -> Result<Value> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Frame> = Vec::new();
    let mut top: Vec<(String, Value)> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                stack.push(Frame {
                    name: element_name(&e)?,
                    attributes: element_attributes(&e)?,
                    entries: Vec::new(),
                    text: String::new(),
                });
            }
            Ok(Event::Empty(e)) => {
                let name = element_name(&e)?;
                let value = finish_element(element_attributes(&e)?, Vec::new(), String::new());
                attach(&mut stack, &mut top, name, value);
            }
            Ok(Event::Text(t)) => {
                let text = t.unescape().map_err(parse_err)?;
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&text);
                }
            }
            Ok(Event::CData(t)) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&String::from_utf8_lossy(&t.into_inner()));
                }
            }
            Ok(Event::End(_)) => {
                let frame = stack.pop().ok_or_else(|| {
                    Error::new(ErrorKind::Parse("closing tag without an open element".into()))
                })?;
                let value = finish_element(frame.attributes, frame.entries, frame.text);
                attach(&mut stack, &mut top, frame.name, value);
            }
            Ok(Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_)) => {}
            Ok(Event::Eof) => break,
            Err(e) => return Err(parse_err(e)),
        }
    }

    if !stack.is_empty() {
        return Err(Error::new(ErrorKind::Parse("unclosed element".into())));
    }
    if top.is_empty() {
        return Err(Error::new(ErrorKind::Parse("document has no root element".into())));
    }
    Ok(Value::Map(top))
}

/// Build the value for a closed element.
fn finish_element(
    attributes: Vec<(String, Value)>,
    entries: Vec<(String, Value)>,
    text: String,
) -> Value {
    if attributes.is_empty() && entries.is_empty() {
        return Value::Text(text);
    }

    let mut map = Vec::new();
    if !attributes.is_empty() {
        map.push((ATTRIBUTES_KEY.to_string(), Value::Map(attributes)));
    }
    if entries.is_empty() && !text.is_empty() {
        map.push((TEXT_KEY.to_string(), Value::Text(text)));
    }
    // text interleaved with child elements is dropped
    map.extend(entries);
    Value::Map(map)
}

/// Attach a finished child to its parent, or to the document top level.
fn attach(stack: &mut [Frame], top: &mut Vec<(String, Value)>, name: String, value: Value) {
    let entries = match stack.last_mut() {
        Some(frame) => &mut frame.entries,
        None => top,
    };
    insert_collapsing(entries, name, value);
}

/// Repeated sibling names collapse into a list under the shared name.
fn insert_collapsing(entries: &mut Vec<(String, Value)>, name: String, value: Value) {
    if let Some((_, existing)) = entries.iter_mut().find(|(k, _)| *k == name) {
        match existing {
            Value::List(items) => items.push(value),
            _ => {
                let first = std::mem::replace(existing, Value::List(Vec::new()));
                if let Value::List(items) = existing {
                    items.push(first);
                    items.push(value);
                }
            }
        }
    } else {
        entries.push((name, value));
    }
}

fn element_name(e: &BytesStart) -> Result<String> {
    std::str::from_utf8(e.name().as_ref())
        .map(str::to_string)
        .map_err(|e| Error::with_source(ErrorKind::Parse("element name is not UTF-8".into()), e))
}

fn element_attributes(e: &BytesStart) -> Result<Vec<(String, Value)>> {
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(parse_err)?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| {
                Error::with_source(ErrorKind::Parse("attribute name is not UTF-8".into()), e)
            })?
            .to_string();
        let value = attr.unescape_value().map_err(parse_err)?.into_owned();
        attributes.push((key, Value::Text(value)));
    }
    Ok(attributes)
}

fn parse_err(e: impl std::error::Error + Send + Sync + 'static) -> Error {
    let message = e.to_string();
    Error::with_source(ErrorKind::Parse(message), e)
}
