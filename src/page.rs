//! Search results page

use askama::Template;

use crate::{error::Result, escape::js_string_escape, model::Entry, render::render_attribute};

/// Attribute row with its value already rendered to HTML
pub struct Row {
    pub name: String,
    pub html: String,
}

/// One result card per entry
pub struct Card {
    pub dn: String,
    pub rows: Vec<Row>,
}

impl From<&Entry> for Card {
    fn from(entry: &Entry) -> Self {
        Card {
            dn: entry.dn.clone(),
            rows: entry
                .attributes
                .iter()
                .map(|attr| Row {
                    name: attr.name.clone(),
                    html: render_attribute(attr),
                })
                .collect(),
        }
    }
}

/// Search form followed by the result cards
#[derive(Template)]
#[template(path = "search.html")]
pub struct SearchPage<'a> {
    pub filter: &'a str,
    pub fields: &'a str,
    pub base_dn: &'a str,
    /// Top DN escaped for the script block
    pub top_dn_js: String,
    pub cards: Vec<Card>,
}

impl<'a> SearchPage<'a> {
    pub fn new(filter: &'a str, fields: &'a str, base_dn: &'a str, top_dn: &str, entries: &[Entry]) -> Self {
        SearchPage {
            filter,
            fields,
            base_dn,
            top_dn_js: js_string_escape(top_dn),
            cards: entries.iter().map(Card::from).collect(),
        }
    }

    /// Render the complete HTML document
    pub fn to_html(&self) -> Result<String> {
        Ok(self.render()?)
    }
}
