//! HTML rendering of attribute values

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::{
    escape::{html_escape, js_string_escape},
    model::Attribute,
    request::DEFAULT_FILTER,
};

/// Presentation rule selected by attribute name
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeKind {
    /// `labeledURI`: URI followed by an optional label
    LabeledUri,
    /// `mail`: e-mail address
    Mail,
    /// `jpegPhoto`: binary JPEG image
    JpegPhoto,
    /// `roleOccupant`: DN of an entry which can be searched
    RoleOccupant,
    /// Anything else, shown as text
    Plain,
}

impl AttributeKind {
    pub fn from_name(name: &str) -> Self {
        const KINDS: [(&str, AttributeKind); 4] = [
            ("labeledURI", AttributeKind::LabeledUri),
            ("mail", AttributeKind::Mail),
            ("jpegPhoto", AttributeKind::JpegPhoto),
            ("roleOccupant", AttributeKind::RoleOccupant),
        ];
        KINDS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, kind)| *kind)
            .unwrap_or(AttributeKind::Plain)
    }

    fn render_value(self, value: &[u8]) -> String {
        if self == AttributeKind::JpegPhoto {
            return format!(
                "<img src='data:image/jpg;base64,{}'>",
                html_escape(&STANDARD.encode(value))
            );
        }

        let text = String::from_utf8_lossy(value);
        match self {
            AttributeKind::LabeledUri => {
                let (href, label) = text.split_once(char::is_whitespace).unwrap_or((text.as_ref(), ""));
                format!("<a href='{}'>{}</a>", html_escape(href), html_escape(label))
            }
            AttributeKind::Mail => {
                let addr = html_escape(&text);
                format!("<a href='mailto:{}'>{}</a>", addr, addr)
            }
            AttributeKind::RoleOccupant => {
                // the href is percent-decoded before the script runs
                let arg = js_string_escape(&text).replace('%', "%25");
                format!(
                    r#"<a href='javascript:search("{}", "*", "{}")'>{}</a>"#,
                    DEFAULT_FILTER,
                    html_escape(&arg),
                    html_escape(&text)
                )
            }
            _ => html_escape(&text),
        }
    }
}

/// Render all values of an attribute, joined with line breaks
pub fn render_attribute(attr: &Attribute) -> String {
    let kind = AttributeKind::from_name(&attr.name);
    attr.byte_values()
        .map(|v| kind.render_value(v))
        .collect::<Vec<_>>()
        .join("<br>")
}
