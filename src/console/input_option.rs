//! Named option definitions
//!
//! A `ConsoleInputOption` describes one named option of a command: long
//! name, optional single-character short flag, default, choices, prompt and
//! flags. Invalid combinations are rejected at construction time; the
//! definition renders its own help line, usage token, and XML descriptor.

use crate::common::error::{Result, SqlForgeError};
use crate::console::{arguments::OptionValue, xml_escape};

/// Definition of a named console option
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleInputOption {
    name: String,
    short: Option<char>,
    help: String,
    boolean: bool,
    default: Option<OptionValue>,
    choices: Vec<String>,
    multiple: bool,
    required: bool,
    prompt: Option<String>,
}

impl ConsoleInputOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short: None,
            help: String::new(),
            boolean: false,
            default: None,
            choices: Vec::new(),
            multiple: false,
            required: false,
            prompt: None,
        }
    }

    /// Set the short flag; anything longer than one character is an error
    pub fn short(mut self, short: &str) -> Result<Self> {
        let mut chars = short.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                self.short = Some(c);
                Ok(self)
            }
            _ => Err(SqlForgeError::Console(format!(
                "short option `{}` is invalid, short options must be one letter",
                short
            ))),
        }
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn boolean(mut self) -> Self {
        self.boolean = true;
        self
    }

    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the default value; mutually exclusive with a prompt
    pub fn default_value(mut self, default: OptionValue) -> Result<Self> {
        if self.prompt.is_some() {
            return Err(SqlForgeError::Console(format!(
                "option `{}` cannot have both `default` and `prompt` set, use either a default or a prompt",
                self.name
            )));
        }
        self.default = Some(default);
        Ok(self)
    }

    /// Set the interactive prompt; mutually exclusive with a default
    pub fn prompt(mut self, prompt: impl Into<String>) -> Result<Self> {
        if self.default.is_some() {
            return Err(SqlForgeError::Console(format!(
                "option `{}` cannot have both `default` and `prompt` set, use either a default or a prompt",
                self.name
            )));
        }
        self.prompt = Some(prompt.into());
        Ok(self)
    }

    pub fn choices(mut self, choices: Vec<String>) -> Self {
        self.choices = choices;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_flag(&self) -> Option<char> {
        self.short
    }

    pub fn is_boolean(&self) -> bool {
        self.boolean
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn default(&self) -> Option<&OptionValue> {
        self.default.as_ref()
    }

    pub fn prompt_text(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    /// Reject values outside the declared choices
    pub fn validate(&self, value: &str) -> Result<()> {
        if self.choices.is_empty() || self.choices.iter().any(|c| c == value) {
            return Ok(());
        }
        Err(SqlForgeError::Console(format!(
            "`{}` is not a valid value for --{}, please use one of `{}`",
            value,
            self.name,
            self.choices.join(", ")
        )))
    }

    /// One help line: padded flag column followed by the help text and hints
    pub fn help_line(&self, width: usize) -> String {
        let mut name = format!("--{}", self.name);
        if let Some(short) = self.short {
            name.push_str(&format!(", -{}", short));
        }
        let mut line = format!("{:<width$}{}", name, self.help, width = width);
        if let Some(default) = &self.default {
            if !self.boolean {
                let default = match default {
                    OptionValue::Str(s) => s.clone(),
                    OptionValue::Bool(b) => b.to_string(),
                    OptionValue::Many(values) => values.join(", "),
                };
                line.push_str(&format!(" (default: {})", default));
            }
        }
        if !self.choices.is_empty() {
            line.push_str(&format!(" (choices: {})", self.choices.join("|")));
        }
        line
    }

    /// The usage token, e.g. `[-v]`, `[--connection NAME]`, `[--format a|b]`
    pub fn usage(&self) -> String {
        let name = match self.short {
            Some(short) => format!("-{}", short),
            None => format!("--{}", self.name),
        };
        let value = if self.boolean {
            String::new()
        } else if !self.choices.is_empty() {
            format!(" {}", self.choices.join("|"))
        } else {
            format!(" {}", self.name.to_uppercase())
        };
        if self.required {
            format!("{}{}", name, value)
        } else {
            format!("[{}{}]", name, value)
        }
    }

    /// XML descriptor with the fixed element/attribute schema consumed by
    /// IDE/tooling integrations
    pub fn xml(&self) -> String {
        let short = match self.short {
            Some(short) => format!("-{}", short),
            None => String::new(),
        };
        let default = match &self.default {
            Some(OptionValue::Str(s)) => s.clone(),
            Some(OptionValue::Bool(b)) => b.to_string(),
            Some(OptionValue::Many(values)) => values.join(","),
            None => String::new(),
        };
        let mut xml = format!(
            "<option name=\"--{}\" short=\"{}\" help=\"{}\" boolean=\"{}\" required=\"{}\">",
            xml_escape(&self.name),
            xml_escape(&short),
            xml_escape(&self.help),
            self.boolean as u8,
            self.required as u8,
        );
        xml.push_str(&format!("<default>{}</default>", xml_escape(&default)));
        xml.push_str("<choices>");
        for choice in &self.choices {
            xml.push_str(&format!("<choice>{}</choice>", xml_escape(choice)));
        }
        xml.push_str("</choices></option>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_flag_validation() {
        assert!(ConsoleInputOption::new("verbose").short("v").is_ok());
        assert!(ConsoleInputOption::new("verbose").short("vv").is_err());
        assert!(ConsoleInputOption::new("verbose").short("").is_err());
    }

    #[test]
    fn test_default_and_prompt_are_exclusive() {
        let with_default = ConsoleInputOption::new("name")
            .default_value(OptionValue::Str("x".to_string()))
            .unwrap();
        assert!(with_default.prompt("What name?").is_err());

        let with_prompt = ConsoleInputOption::new("name").prompt("What name?").unwrap();
        assert!(with_prompt
            .default_value(OptionValue::Str("x".to_string()))
            .is_err());
    }

    #[test]
    fn test_choice_validation() {
        let option = ConsoleInputOption::new("format")
            .choices(vec!["json".to_string(), "text".to_string()]);
        assert!(option.validate("json").is_ok());
        assert!(option.validate("xml").is_err());
        // no declared choices accepts anything
        assert!(ConsoleInputOption::new("any").validate("whatever").is_ok());
    }

    #[test]
    fn test_usage_rendering() {
        let boolean = ConsoleInputOption::new("verbose").short("v").unwrap().boolean();
        assert_eq!(boolean.usage(), "[-v]");

        let choices = ConsoleInputOption::new("format")
            .choices(vec!["json".to_string(), "text".to_string()]);
        assert_eq!(choices.usage(), "[--format json|text]");

        let plain = ConsoleInputOption::new("connection");
        assert_eq!(plain.usage(), "[--connection CONNECTION]");
    }

    #[test]
    fn test_xml_descriptor() {
        let option = ConsoleInputOption::new("format")
            .short("f")
            .unwrap()
            .help("Output format")
            .choices(vec!["json".to_string(), "text".to_string()]);
        assert_eq!(
            option.xml(),
            "<option name=\"--format\" short=\"-f\" help=\"Output format\" boolean=\"0\" required=\"0\"><default></default><choices><choice>json</choice><choice>text</choice></choices></option>"
        );
    }
}
