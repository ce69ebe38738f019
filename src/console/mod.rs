//! Console input descriptors
//!
//! This module models already-parsed console input: a read-only accessor
//! over positional arguments and named options, plus the option/argument
//! definitions used to validate values and render help, usage, and XML
//! descriptors for tooling integrations. Parsing itself lives in an external
//! option parser and is out of scope here.

pub mod arguments;
pub mod input_argument;
pub mod input_option;

pub use arguments::{Arguments, OptionValue};
pub use input_argument::ConsoleInputArgument;
pub use input_option::ConsoleInputOption;

/// Escape text for use in XML attribute and element content
pub(crate) fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_escape() {
        assert_eq!(xml_escape("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(xml_escape("\"quoted\""), "&quot;quoted&quot;");
    }
}
