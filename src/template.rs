//! Cross-reference of element ids inside an embedded markup template.
//!
//! A simple regex-driven lookup: every tag with an `id="..."` attribute is
//! reported together with the DOM interface its tag maps to.

use lazy_static::lazy_static;
use phf::phf_map;
use regex::Regex;

/// Tag name -> DOM interface name.
static ELEMENT_TYPES: phf::Map<&'static str, &'static str> = phf_map! {
    "a" => "HTMLAnchorElement",
    "div" => "HTMLDivElement",
    "button" => "HTMLButtonElement",
    "canvas" => "HTMLCanvasElement",
    "form" => "HTMLFormElement",
    "head" => "HTMLHeadElement",
    "iframe" => "HTMLIFrameElement",
    "img" => "HTMLImageElement",
    "input" => "HTMLInputElement",
    "li" => "HTMLLIElement",
    "ol" => "HTMLOListElement",
    "p" => "HTMLParagraphElement",
    "picture" => "HTMLPictureElement",
    "script" => "HTMLScriptElement",
    "select" => "HTMLSelectElement",
    "textarea" => "HTMLTextAreaElement",
    "title" => "HTMLTitleElement",
    "ul" => "HTMLUListElement",
};

lazy_static! {
    /// A tag carrying an id attribute, e.g. `<paper-input id="name" ...>`.
    static ref ID_ELEMENT: Regex = Regex::new(r#"<([\w-]+)\s[^>]*id="(\w+)""#).unwrap();
}

/// An id-carrying element found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedElement {
    pub id: String,
    pub tag: String,
    pub class_name: String,
}

/// The DOM interface for a tag, defaulting to the generic element type.
pub fn element_type(tag: &str) -> &'static str {
    ELEMENT_TYPES.get(tag).copied().unwrap_or("HTMLElement")
}

/// camelCase -> kebab-case, for element tag names.
pub fn to_kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() && i > 0 {
            out.push('-');
        }
        out.extend(ch.to_lowercase());
    }
    out
}

/// Scan a template for elements with ids.
pub fn parse_template_for_ids(template: &str) -> Vec<NamedElement> {
    ID_ELEMENT
        .captures_iter(template)
        .map(|caps| {
            let tag = caps[1].to_string();
            NamedElement {
                id: caps[2].to_string(),
                class_name: element_type(&tag).to_string(),
                tag,
            }
        })
        .collect()
}
