#![allow(dead_code)]

//! Queries over rendered card HTML.

use scraper::{ElementRef, Html, Selector};

pub struct RenderedCard {
    doc: Html,
}

impl RenderedCard {
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Html::parse_fragment(html),
        }
    }

    fn select(&self, selector: &str) -> Vec<ElementRef<'_>> {
        let selector = Selector::parse(selector).expect("valid selector");
        self.doc.select(&selector).collect()
    }

    fn text_of(element: ElementRef<'_>) -> String {
        element.text().collect()
    }

    /// Text content of the card root.
    pub fn text(&self) -> String {
        self.select("div")
            .first()
            .map(|root| Self::text_of(*root))
            .unwrap_or_default()
    }

    pub fn texts(&self, selector: &str) -> Vec<String> {
        self.select(selector).into_iter().map(Self::text_of).collect()
    }

    pub fn root_classes(&self) -> Vec<String> {
        self.select("div")
            .first()
            .map(|root| root.value().classes().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn href(&self) -> Option<String> {
        self.select("a")
            .first()
            .and_then(|a| a.value().attr("href"))
            .map(str::to_string)
    }
}
