//! Display names for outline entries.
//!
//! An element is named `tag#id.class1.class2`. Quote characters are stripped
//! from the `id` and `class` values; nothing else is escaped, so a `#` or `.`
//! inside a value shows up verbatim.

use crate::syntax::MarkupNode;

/// Derive the display name of an element from its tag, `id`, and `class`.
///
/// A missing value behaves exactly like an empty one.
///
/// # Example
/// ```
/// use markup_outline::ide::symbol_name;
///
/// assert_eq!(symbol_name("div", Some("main"), Some("a  b")), "div#main.a.b");
/// assert_eq!(symbol_name("p", None, None), "p");
/// ```
pub fn symbol_name(tag: &str, id: Option<&str>, class: Option<&str>) -> String {
    let mut name = String::from(tag);

    if let Some(id) = id.filter(|v| !v.is_empty()) {
        name.push('#');
        name.extend(unquoted(id));
    }

    if let Some(class) = class.filter(|v| !v.is_empty()) {
        let class: String = unquoted(class).collect();
        for token in class.split_whitespace() {
            name.push('.');
            name.push_str(token);
        }
    }

    name
}

/// [`symbol_name`] for a parsed node.
pub fn node_symbol_name(node: &MarkupNode) -> String {
    symbol_name(
        &node.tag,
        node.attributes.value("id"),
        node.attributes.value("class"),
    )
}

fn unquoted(value: &str) -> impl Iterator<Item = char> + '_ {
    value.chars().filter(|c| !matches!(c, '"' | '\''))
}
