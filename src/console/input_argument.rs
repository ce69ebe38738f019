//! Positional argument definitions

use crate::common::error::{Result, SqlForgeError};
use crate::console::xml_escape;

/// Definition of one positional console argument
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleInputArgument {
    name: String,
    help: String,
    required: bool,
    choices: Vec<String>,
}

impl ConsoleInputArgument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            help: String::new(),
            required: false,
            choices: Vec::new(),
        }
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn choices(mut self, choices: Vec<String>) -> Self {
        self.choices = choices;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Reject values outside the declared choices
    pub fn validate(&self, value: &str) -> Result<()> {
        if self.choices.is_empty() || self.choices.iter().any(|c| c == value) {
            return Ok(());
        }
        Err(SqlForgeError::Console(format!(
            "`{}` is not a valid value for `{}`, please use one of `{}`",
            value,
            self.name,
            self.choices.join(", ")
        )))
    }

    /// One help line: padded name column followed by the help text and hints
    pub fn help_line(&self, width: usize) -> String {
        let mut line = format!("{:<width$}{}", self.name, self.help, width = width);
        if !self.choices.is_empty() {
            line.push_str(&format!(" (choices: {})", self.choices.join("|")));
        }
        if !self.required {
            line.push_str(" (optional)");
        }
        line
    }

    /// The usage token: `name` when required, `[name]` otherwise
    pub fn usage(&self) -> String {
        let name = if self.choices.is_empty() {
            self.name.clone()
        } else {
            self.choices.join("|")
        };
        if self.required {
            name
        } else {
            format!("[{}]", name)
        }
    }

    /// XML descriptor consumed by IDE/tooling integrations
    pub fn xml(&self) -> String {
        let mut xml = format!(
            "<argument name=\"{}\" help=\"{}\" required=\"{}\">",
            xml_escape(&self.name),
            xml_escape(&self.help),
            self.required as u8,
        );
        xml.push_str("<choices>");
        for choice in &self.choices {
            xml.push_str(&format!("<choice>{}</choice>", xml_escape(choice)));
        }
        xml.push_str("</choices></argument>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_rendering() {
        assert_eq!(ConsoleInputArgument::new("table").required().usage(), "table");
        assert_eq!(ConsoleInputArgument::new("table").usage(), "[table]");
        assert_eq!(
            ConsoleInputArgument::new("mode")
                .choices(vec!["up".to_string(), "down".to_string()])
                .usage(),
            "[up|down]"
        );
    }

    #[test]
    fn test_choice_validation() {
        let argument = ConsoleInputArgument::new("mode")
            .choices(vec!["up".to_string(), "down".to_string()]);
        assert!(argument.validate("up").is_ok());
        assert!(argument.validate("sideways").is_err());
    }

    #[test]
    fn test_xml_descriptor() {
        let argument = ConsoleInputArgument::new("table")
            .help("Table to migrate")
            .required();
        assert_eq!(
            argument.xml(),
            "<argument name=\"table\" help=\"Table to migrate\" required=\"1\"><choices></choices></argument>"
        );
    }
}
