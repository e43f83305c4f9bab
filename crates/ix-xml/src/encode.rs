//! Serializing a [`Value`] into an XML document.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{Error, ErrorKind, Result};
use crate::value::Value;
use crate::{ATTRIBUTES_KEY, TEXT_KEY};

/// Serialize a [`Value`] into a single XML document with a UTF-8 declaration.
///
/// The top-level value must be a map; each entry becomes a root-level
/// element, and a list under key `k` repeats element `k` once per item.
/// An empty map encodes to the declaration alone.
pub fn to_xml(value: &Value) -> Result<String> {
    let entries = match value {
        Value::Map(entries) => entries,
        _ => {
            return Err(Error::new(ErrorKind::Encode(
                "top-level value must be a map".into(),
            )))
        }
    };

    let mut writer = Writer::new(Vec::new());
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(encode_err)?;
    writer.get_mut().extend_from_slice(b"\n");

    for (key, child) in entries {
        write_element(&mut writer, key, child)?;
    }

    String::from_utf8(writer.into_inner())
        .map_err(|e| Error::with_source(ErrorKind::Encode("document is not valid UTF-8".into()), e))
}

fn write_element<W: std::io::Write>(writer: &mut Writer<W>, name: &str, value: &Value) -> Result<()> {
    if name.is_empty()
        || name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '&' | '"' | '\''))
    {
        return Err(Error::new(ErrorKind::Encode(format!(
            "invalid element name: {name:?}"
        ))));
    }

    match value {
        Value::Text(text) => {
            writer
                .write_event(Event::Start(BytesStart::new(name)))
                .map_err(encode_err)?;
            writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(encode_err)?;
            writer
                .write_event(Event::End(BytesEnd::new(name)))
                .map_err(encode_err)?;
        }
        Value::List(items) => {
            for item in items {
                if matches!(item, Value::List(_)) {
                    return Err(Error::new(ErrorKind::Encode(format!(
                        "list under {name:?} may not contain another list"
                    ))));
                }
                write_element(writer, name, item)?;
            }
        }
        Value::Map(entries) => {
            let mut start = BytesStart::new(name);
            for (key, child) in entries {
                if key == ATTRIBUTES_KEY {
                    let attrs = child.as_map().ok_or_else(|| {
                        Error::new(ErrorKind::Encode(format!(
                            "{ATTRIBUTES_KEY} under {name:?} must be a map"
                        )))
                    })?;
                    for (attr_name, attr_value) in attrs {
                        let text = attr_value.as_text().ok_or_else(|| {
                            Error::new(ErrorKind::Encode(format!(
                                "attribute {attr_name:?} must be text"
                            )))
                        })?;
                        start.push_attribute((attr_name.as_str(), text));
                    }
                }
            }
            writer
                .write_event(Event::Start(start))
                .map_err(encode_err)?;
            for (key, child) in entries {
                if key == ATTRIBUTES_KEY {
                    continue;
                }
                if key == TEXT_KEY {
                    let text = child.as_text().ok_or_else(|| {
                        Error::new(ErrorKind::Encode(format!(
                            "{TEXT_KEY} under {name:?} must be text"
                        )))
                    })?;
                    writer
                        .write_event(Event::Text(BytesText::new(text)))
                        .map_err(encode_err)?;
                    continue;
                }
                write_element(writer, key, child)?;
            }
            writer
                .write_event(Event::End(BytesEnd::new(name)))
                .map_err(encode_err)?;
        }
    }

    Ok(())
}

fn encode_err(e: impl std::error::Error + Send + Sync + 'static) -> Error {
    let message = e.to_string();
    Error::with_source(ErrorKind::Encode(message), e)
}
