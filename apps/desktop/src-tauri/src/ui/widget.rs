//! # Calculator Widget Tree
//!
//! Builds the keypad and screens as a tree of [`Element`]s and renders it to
//! HTML for the webview.
//!
//! ## Layout
//! ```text
//! <main>
//! ├── div.screens
//! │   ├── div.input-screen          "12.5"
//! │   └── div.output-screen         "0"
//! └── div.buttons
//!     ├── button.btn.operator       + - x ÷
//!     ├── button.btn.operator.equal =
//!     ├── button.btn.numeric.remove AC / CE   data-remove-type="ac" | "ce"
//!     └── button.btn.numeric        7 8 9 4 5 6 1 2 3 0 .
//! ```
//!
//! Every button carries `data-value`, the symbol the frontend passes back to
//! `press_digit` or `press_operator`.

use std::fmt::Write as _;

use abacus_core::{DisplaySnapshot, EntryKey, Operator, RemoveMode};

/// Digit order on the keypad, row by row.
pub const DIGIT_LAYOUT: [u8; 10] = [7, 8, 9, 4, 5, 6, 1, 2, 3, 0];

// =============================================================================
// Element
// =============================================================================

/// One node of the widget tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// HTML tag name
    pub tag: String,
    /// CSS classes, in insertion order
    pub classes: Vec<String>,
    /// Text content (escaped on render)
    pub text: String,
    /// `data-*` attributes as (name, value), without the `data-` prefix
    pub data: Vec<(String, String)>,
    /// Child elements
    pub children: Vec<Element>,
}

impl Element {
    /// Creates an empty element.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_string(),
            classes: Vec::new(),
            text: String::new(),
            data: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element with whitespace-separated classes and text.
    #[must_use]
    pub fn labeled(tag: &str, classes: &str, text: &str) -> Self {
        classes
            .split_whitespace()
            .fold(Element::new(tag), Element::with_class)
            .with_text(text)
    }

    /// Adds a class, ignoring duplicates.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
        self
    }

    /// Sets the text content.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// Sets a `data-*` attribute, replacing an earlier value.
    #[must_use]
    pub fn with_data(mut self, name: &str, value: &str) -> Self {
        match self.data.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.data.push((name.to_string(), value.to_string())),
        }
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several child elements.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets a `data-*` attribute value.
    #[must_use]
    pub fn data(&self, name: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Finds the first element carrying `class`, depth first, self included.
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_class(class))
    }

    /// Renders the tree as HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.write_html(&mut html);
        html
    }

    fn write_html(&self, out: &mut String) {
        // Writing to a String cannot fail
        let _ = write!(out, "<{}", self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.classes.join(" ")));
        }
        for (name, value) in &self.data {
            let _ = write!(out, " data-{}=\"{}\"", name, escape(value));
        }
        out.push('>');
        out.push_str(&escape(&self.text));
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Escapes text for use in HTML content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

// =============================================================================
// Render Functions
// =============================================================================

/// Input and output screens.
pub fn screens(snapshot: &DisplaySnapshot) -> Element {
    Element::labeled("div", "screens", "")
        .with_child(Element::labeled("div", "input-screen", &snapshot.input))
        .with_child(Element::labeled("div", "output-screen", &snapshot.output))
}

/// A digit or decimal point button.
pub fn numeric_button(key: EntryKey) -> Element {
    let label = key.as_char().map(String::from).unwrap_or_default();
    Element::labeled("button", "btn numeric", &label).with_data("value", &label)
}

/// An operator button; "=" also gets the `equal` class.
pub fn operator_button(op: Operator) -> Element {
    let button = Element::labeled("button", "btn operator", op.symbol()).with_data("value", op.symbol());
    match op {
        Operator::Equal => button.with_class("equal"),
        _ => button,
    }
}

/// The clear button, labelled and tagged for its current mode.
pub fn remove_button(mode: RemoveMode) -> Element {
    Element::labeled("button", "btn numeric remove", mode.label())
        .with_data("value", mode.as_str())
        .with_data("remove-type", mode.as_str())
}

/// All buttons: operators and the clear button, then digits and the point.
pub fn keypad(mode: RemoveMode) -> Element {
    let operators = Operator::ALL.into_iter().map(operator_button);
    let digits = DIGIT_LAYOUT
        .into_iter()
        .map(|d| numeric_button(EntryKey::Digit(d)));

    Element::labeled("div", "buttons", "")
        .with_children(operators)
        .with_child(remove_button(mode))
        .with_children(digits)
        .with_child(numeric_button(EntryKey::Point))
}

/// The whole calculator for one display state.
pub fn calculator(snapshot: &DisplaySnapshot) -> Element {
    Element::new("main")
        .with_child(screens(snapshot))
        .with_child(keypad(snapshot.remove_mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use abacus_core::Calculator;

    fn labels(keypad: &Element) -> Vec<&str> {
        keypad.children.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn test_labeled_splits_classes() {
        let el = Element::labeled("button", "btn  numeric remove", "AC");
        assert_eq!(el.classes, vec!["btn", "numeric", "remove"]);
        assert_eq!(el.text, "AC");
    }

    #[test]
    fn test_with_data_replaces() {
        let el = Element::new("button")
            .with_data("remove-type", "ac")
            .with_data("remove-type", "ce");
        assert_eq!(el.data.len(), 1);
        assert_eq!(el.data("remove-type"), Some("ce"));
        assert_eq!(el.data("missing"), None);
    }

    #[test]
    fn test_html_escapes_text_and_attributes() {
        let el = Element::labeled("div", "note", "<b>&\"'")
            .with_data("value", "a\"b");
        assert_eq!(
            el.to_html(),
            "<div class=\"note\" data-value=\"a&quot;b\">&lt;b&gt;&amp;&quot;&#39;</div>"
        );
    }

    #[test]
    fn test_keypad_order() {
        let pad = keypad(RemoveMode::AllClear);
        assert_eq!(
            labels(&pad),
            vec!["+", "-", "x", "÷", "=", "AC", "7", "8", "9", "4", "5", "6", "1", "2", "3", "0", "."]
        );
    }

    #[test]
    fn test_only_equals_has_equal_class() {
        let pad = keypad(RemoveMode::AllClear);
        let equal: Vec<&str> = pad
            .children
            .iter()
            .filter(|c| c.has_class("equal"))
            .map(|c| c.text.as_str())
            .collect();
        assert_eq!(equal, vec!["="]);
    }

    #[test]
    fn test_remove_button_follows_mode() {
        let ac = remove_button(RemoveMode::AllClear);
        assert_eq!(ac.text, "AC");
        assert_eq!(ac.data("remove-type"), Some("ac"));

        let ce = remove_button(RemoveMode::ClearEntry);
        assert_eq!(ce.text, "CE");
        assert_eq!(ce.data("remove-type"), Some("ce"));
        assert!(ce.has_class("remove"));
    }

    #[test]
    fn test_calculator_tree_reflects_state() {
        let mut calc = Calculator::new();
        calc.append_digit(EntryKey::Digit(4));
        calc.append_digit(EntryKey::Point);
        let tree = calculator(&calc.snapshot());

        assert_eq!(tree.tag, "main");
        let input = tree.find_by_class("input-screen").map(|e| e.text.as_str());
        assert_eq!(input, Some("4."));
        let output = tree.find_by_class("output-screen").map(|e| e.text.as_str());
        assert_eq!(output, Some("0"));
        let remove = tree.find_by_class("remove").map(|e| e.text.as_str());
        assert_eq!(remove, Some("CE"));
    }

    #[test]
    fn test_calculator_html() {
        let html = calculator(&Calculator::new().snapshot()).to_html();
        assert!(html.starts_with("<main><div class=\"screens\">"));
        assert!(html.contains("<div class=\"input-screen\">0</div>"));
        assert!(html.contains(
            "<button class=\"btn operator equal\" data-value=\"=\">=</button>"
        ));
        assert!(html.contains("data-remove-type=\"ac\">AC</button>"));
        assert!(html.ends_with("</div></main>"));
    }
}
