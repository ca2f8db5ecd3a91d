//! Minimal element tree built from the markup event stream.

use crate::{DocumentError, DocumentResult};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

#[derive(Debug, Clone)]
pub(crate) struct Element {
    pub name: String,
    /// Slash-separated names from the root down to this element.
    pub path: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    fn open(start: &BytesStart<'_>, parent: Option<&Element>) -> DocumentResult<Self> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let path = match parent {
            Some(parent) => format!("{}/{name}", parent.path),
            None => name.clone(),
        };
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attributes.push((key, value));
        }
        Ok(Self {
            name,
            path,
            attributes,
            text: String::new(),
            children: Vec::new(),
        })
    }

    /// Parses a whole document and returns its root element.
    pub fn parse(xml: &str) -> DocumentResult<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    let element = Element::open(&start, stack.last())?;
                    stack.push(element);
                }
                Event::Empty(start) => {
                    let element = Element::open(&start, stack.last())?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| DocumentError::Malformed("unbalanced end tag".into()))?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::Text(text) => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&text.unescape()?);
                    }
                }
                Event::CData(data) => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&String::from_utf8_lossy(&data));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(DocumentError::Malformed(format!(
                "document ended inside <{}>",
                open.name
            )));
        }
        root.ok_or_else(|| DocumentError::Malformed("document has no root element".into()))
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All children with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    pub fn required(&self, name: &str) -> DocumentResult<&Element> {
        self.child(name).ok_or_else(|| DocumentError::MissingElement {
            path: format!("{}/{name}", self.path),
        })
    }

    pub fn required_text(&self, name: &str) -> DocumentResult<String> {
        Ok(self.required(name)?.text.clone())
    }

    pub fn optional_text(&self, name: &str) -> Option<String> {
        self.child(name).map(|c| c.text.clone())
    }

    pub fn required_bool(&self, name: &str) -> DocumentResult<bool> {
        self.required(name)?.as_bool()
    }

    pub fn optional_bool(&self, name: &str) -> DocumentResult<Option<bool>> {
        self.child(name).map(Element::as_bool).transpose()
    }

    pub fn required_f64(&self, name: &str) -> DocumentResult<f64> {
        let element = self.required(name)?;
        element
            .text
            .trim()
            .parse::<f64>()
            .map_err(|_| element.invalid("number"))
    }

    fn as_bool(&self) -> DocumentResult<bool> {
        match self.text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(self.invalid("boolean")),
        }
    }

    fn invalid(&self, expected: &'static str) -> DocumentError {
        DocumentError::InvalidValue {
            path: self.path.clone(),
            value: self.text.clone(),
            expected,
        }
    }
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> DocumentResult<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(DocumentError::Malformed(format!(
                "second root element <{}>",
                element.name
            )));
        }
    }
    Ok(())
}
