//! Console Descriptor Integration Tests

use std::collections::HashMap;

use sqlforge::{Arguments, ConsoleInputArgument, ConsoleInputOption, OptionValue, Result};

fn parsed_input() -> Arguments {
    Arguments::new(
        vec!["articles".to_string()],
        HashMap::from([
            ("verbose".to_string(), OptionValue::Bool(true)),
            (
                "connection".to_string(),
                OptionValue::Str("default".to_string()),
            ),
        ]),
        vec!["table".to_string(), "limit".to_string()],
    )
}

#[test]
fn test_arguments_accessors() -> Result<()> {
    let args = parsed_input();
    assert_eq!(args.get_arguments(), &["articles".to_string()]);
    assert_eq!(args.get_argument("table")?, Some("articles"));
    assert_eq!(args.get_argument("limit")?, None);
    assert!(args.get_argument("nope").is_err());
    assert_eq!(args.get_boolean_option("verbose")?, Some(true));
    assert!(args.get_boolean_option("connection").is_err());
    Ok(())
}

#[test]
fn test_option_short_flag_must_be_one_letter() {
    assert!(ConsoleInputOption::new("force").short("f").is_ok());
    assert!(ConsoleInputOption::new("force").short("fo").is_err());
}

#[test]
fn test_option_default_prompt_conflict() -> Result<()> {
    let option = ConsoleInputOption::new("name")
        .default_value(OptionValue::Str("world".to_string()))?;
    assert!(option.prompt("Who?").is_err());
    Ok(())
}

#[test]
fn test_option_choice_validation() {
    let option = ConsoleInputOption::new("format")
        .choices(vec!["json".to_string(), "text".to_string()]);
    assert!(option.validate("text").is_ok());
    assert!(option.validate("yaml").is_err());
}

#[test]
fn test_option_help_line_padding() -> Result<()> {
    let option = ConsoleInputOption::new("connection")
        .short("c")?
        .help("The datasource to use")
        .default_value(OptionValue::Str("default".to_string()))?;
    assert_eq!(
        option.help_line(20),
        "--connection, -c    The datasource to use (default: default)"
    );
    Ok(())
}

#[test]
fn test_option_usage_tokens() -> Result<()> {
    let boolean = ConsoleInputOption::new("verbose").short("v")?.boolean();
    assert_eq!(boolean.usage(), "[-v]");

    let required = ConsoleInputOption::new("table").required();
    assert_eq!(required.usage(), "--table TABLE");
    Ok(())
}

#[test]
fn test_option_xml_schema() -> Result<()> {
    let option = ConsoleInputOption::new("verbose")
        .short("v")?
        .help("Enable verbose output")
        .boolean();
    assert_eq!(
        option.xml(),
        "<option name=\"--verbose\" short=\"-v\" help=\"Enable verbose output\" boolean=\"1\" required=\"0\"><default></default><choices></choices></option>"
    );
    Ok(())
}

#[test]
fn test_option_xml_escapes_content() -> Result<()> {
    let option = ConsoleInputOption::new("filter").help("Match a & b <only>");
    assert!(option
        .xml()
        .contains("help=\"Match a &amp; b &lt;only&gt;\""));
    Ok(())
}

#[test]
fn test_argument_usage_and_xml() {
    let argument = ConsoleInputArgument::new("table")
        .help("Table to inspect")
        .required();
    assert_eq!(argument.usage(), "table");
    assert_eq!(
        argument.xml(),
        "<argument name=\"table\" help=\"Table to inspect\" required=\"1\"><choices></choices></argument>"
    );

    let optional = ConsoleInputArgument::new("limit");
    assert_eq!(optional.usage(), "[limit]");
}

#[test]
fn test_argument_choices() {
    let argument = ConsoleInputArgument::new("direction")
        .choices(vec!["up".to_string(), "down".to_string()]);
    assert_eq!(argument.usage(), "[up|down]");
    assert!(argument.validate("up").is_ok());
    assert!(argument.validate("left").is_err());
}
