use thiserror::Error;

use super::CliFlags;
use crate::pass::CharClass;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
    #[error("Unknown character class: {0} (expected upper, lower, numbers, symbols)")]
    UnknownClass(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-g" | "--generate" => flags.generate = true,
            "--no-uppercase" => flags.disabled.push(CharClass::Uppercase),
            "--no-lowercase" => flags.disabled.push(CharClass::Lowercase),
            "--no-numbers" => flags.disabled.push(CharClass::Numbers),
            "--no-symbols" => flags.disabled.push(CharClass::Symbols),
            "-l" | "--length" => {
                let value = value_for(args, &mut i)?;
                flags.length = Some(
                    value
                        .parse()
                        .map_err(|_| ParseError::InvalidNumber(value.to_string()))?,
                );
            }
            "--only" => {
                let value = value_for(args, &mut i)?;
                flags.only = Some(parse_classes(value)?);
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn value_for<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn parse_classes(list: &str) -> Result<Vec<CharClass>, ParseError> {
    list.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| CharClass::from_name(s).ok_or_else(|| ParseError::UnknownClass(s.to_string())))
        .collect()
}
