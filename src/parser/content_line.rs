//! Split the result of `LineReader` into parts.
//!
//! A content line contains:
//! - A name formatted in uppercase.
//! - An ordered list of `KEY=VALUE` parameters. The key is formatted in
//!   uppercase and the value stays untouched apart from surrounding quotes.
//! - A value, which stays untouched.
//!
//! Double quotes are dropped from the whole line first, except on lines
//! carrying a quoted `"(UTC...)` timezone label whose quotes protect the
//! commas and colons inside it.
//!
//! #### Warning
//!   The `ContentLineParser` only parses the content. No checks are made on
//!   the fields validity and a malformed line comes back as an error for the
//!   caller to skip.
//!
//! # Examples
//!
//! ```rust
//! let mut reader = lenient_ical::ContentLineParser::from_str(
//!     "DTSTART;TZID=Europe/Berlin:20240101T090000\n",
//! );
//! let line = reader.next().unwrap().unwrap();
//! assert_eq!(line.name, "DTSTART");
//! assert_eq!(line.params.get_tzid(), Some("Europe/Berlin"));
//! assert_eq!(line.value, "20240101T090000");
//! ```

use derive_more::From;
use std::borrow::Cow;
use std::fmt;

use super::{Line, LineReader};
use crate::types::{ParamValue, Params};
use crate::{PARAM_DELIMITER, PARAM_NAME_DELIMITER, PARAM_QUOTE, VALUE_DELIMITER};

/// Error arising when trying to parse a content line
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContentLineError {
    #[error("Line {0}: Missing property name.")]
    MissingName(usize),
    #[error("Line {0}: Missing a closing quote.")]
    MissingClosingQuote(usize),
    #[error("Line {0}: Missing a \"{1}\" delimiter.")]
    MissingDelimiter(usize, char),
    #[error("Line {0}: Missing content after \"{1}\".")]
    MissingContentAfter(usize, char),
    #[error("Line {0}: Missing a parameter key.")]
    MissingParamKey(usize),
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, From)]
pub struct ContentLineParams(pub(crate) Vec<(String, String)>);

impl ContentLineParams {
    #[inline]
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    #[inline]
    pub fn get_tzid(&self) -> Option<&str> {
        self.get_param("TZID").filter(|tzid| !tzid.is_empty())
    }

    /// True if any parameter is `VALUE=<value_type>`.
    pub fn has_value_type(&self, value_type: &str) -> bool {
        self.0
            .iter()
            .any(|(key, value)| key == "VALUE" && value.eq_ignore_ascii_case(value_type))
    }

    /// A lone `CHARSET=utf-8` says nothing worth keeping next to the value.
    pub fn is_trivial(&self) -> bool {
        match self.0.as_slice() {
            [] => true,
            [(key, value)] => key == "CHARSET" && value.eq_ignore_ascii_case("utf-8"),
            _ => false,
        }
    }

    /// Parameters with `TRUE`/`FALSE` and numbers coerced.
    pub fn coerce(&self) -> Params {
        Params(
            self.0
                .iter()
                .map(|(key, value)| (key.to_owned(), ParamValue::coerce(value)))
                .collect(),
        )
    }
}

/// An ICAL property.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct ContentLine {
    /// Property name.
    pub name: String,
    /// Property list of parameters.
    pub params: ContentLineParams,
    /// Property value.
    pub value: String,
    /// The whole unfolded line after quote stripping.
    pub raw: String,
}

impl fmt::Display for ContentLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "name: {}\nparams: {:?}\nvalue: {:?}",
            self.name, self.params, self.value
        )
    }
}

#[inline]
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

#[derive(Debug, Clone)]
pub struct ContentLineParser<'a>(LineReader<'a>);

impl<'a> ContentLineParser<'a> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'a str) -> Self {
        ContentLineParser(LineReader::from_str(input))
    }

    pub fn new(line_reader: LineReader<'a>) -> Self {
        ContentLineParser(line_reader)
    }

    pub fn parse(line: &Line) -> Result<ContentLine, ContentLineError> {
        let number = line.number();
        let raw = if line.as_str().contains("\"(") {
            Cow::Borrowed(line.as_str())
        } else {
            Cow::Owned(line.as_str().replace(PARAM_QUOTE, ""))
        };
        let mut to_parse: &str = &raw;

        // Find end of property name
        let name_end = to_parse.find(|c| !is_name_char(c)).unwrap_or(to_parse.len());
        let (prop_name, remainder) = to_parse.split_at(name_end);
        if prop_name.is_empty() {
            return Err(ContentLineError::MissingName(number));
        }
        to_parse = remainder;

        // remainder either starts with ; or :
        // Fetch all parameters
        let mut params = vec![];
        while let Some(rest) = to_parse.strip_prefix(PARAM_DELIMITER) {
            let key_end = rest.find(|c| !is_name_char(c)).unwrap_or(rest.len());
            let (key, rest) = rest.split_at(key_end);
            if key.is_empty() {
                return Err(ContentLineError::MissingParamKey(number));
            }
            let Some(rest) = rest.strip_prefix(PARAM_NAME_DELIMITER) else {
                return Err(ContentLineError::MissingDelimiter(
                    number,
                    PARAM_NAME_DELIMITER,
                ));
            };

            let (content, rest) = if let Some(quoted) = rest.strip_prefix(PARAM_QUOTE) {
                // This is a dquoted value. (NAME;Foo="Bar":value)
                let Some((content, rest)) = quoted.split_once(PARAM_QUOTE) else {
                    return Err(ContentLineError::MissingClosingQuote(number));
                };
                (content, rest)
            } else {
                // This is a 'raw' value. (NAME;Foo=Bar:value)
                let end = rest
                    .find([PARAM_DELIMITER, VALUE_DELIMITER, PARAM_QUOTE])
                    .unwrap_or(rest.len());
                if end == 0 {
                    return Err(ContentLineError::MissingContentAfter(
                        number,
                        PARAM_NAME_DELIMITER,
                    ));
                }
                rest.split_at(end)
            };

            params.push((key.to_uppercase(), content.to_owned()));
            to_parse = rest;
        }

        // Parse value
        let Some(value) = to_parse.strip_prefix(VALUE_DELIMITER) else {
            return Err(ContentLineError::MissingDelimiter(number, VALUE_DELIMITER));
        };
        Ok(ContentLine {
            name: prop_name.to_uppercase(),
            params: params.into(),
            value: value.to_owned(),
            raw: raw.into_owned(),
        })
    }
}

impl Iterator for ContentLineParser<'_> {
    type Item = Result<ContentLine, ContentLineError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|line| Self::parse(&line))
    }
}

#[cfg(test)]
mod tests {
    use super::{ContentLineError, ContentLineParser};
    use crate::parser::Line;
    use rstest::rstest;

    fn parse(input: &str) -> Result<super::ContentLine, ContentLineError> {
        ContentLineParser::parse(&Line::new(input.to_owned(), 1))
    }

    #[rstest]
    #[case("SUMMARY:Hello", "SUMMARY", "Hello")]
    #[case("summary:Hello", "SUMMARY", "Hello")]
    #[case("DESCRIPTION:a:b:c", "DESCRIPTION", "a:b:c")]
    #[case("X-WR-CALNAME:", "X-WR-CALNAME", "")]
    fn name_and_value(#[case] input: &str, #[case] name: &str, #[case] value: &str) {
        let line = parse(input).unwrap();
        assert_eq!(line.name, name);
        assert_eq!(line.value, value);
    }

    #[test]
    fn parameters_keep_order() {
        let line = parse("DTSTART;VALUE=DATE;X-Foo=bar:20240101").unwrap();
        assert_eq!(
            line.params.0,
            vec![
                ("VALUE".to_owned(), "DATE".to_owned()),
                ("X-FOO".to_owned(), "bar".to_owned()),
            ]
        );
    }

    #[test]
    fn quotes_are_stripped() {
        let line = parse("DTSTART;TZID=\"Pacific Standard Time\":20240101T090000").unwrap();
        assert_eq!(line.params.get_tzid(), Some("Pacific Standard Time"));
        assert!(!line.raw.contains('"'));
    }

    #[test]
    fn quoted_offset_label_survives() {
        let line = parse(
            "DTSTART;TZID=\"(UTC+01:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna\":20240101T090000",
        )
        .unwrap();
        assert_eq!(
            line.params.get_tzid(),
            Some("(UTC+01:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna")
        );
        assert_eq!(line.value, "20240101T090000");
    }

    #[test]
    fn outlook_custom_tzid_is_cut_at_colon() {
        let line = parse("DTSTART;TZID=tzone://Microsoft/Custom:20240101T090000").unwrap();
        assert_eq!(line.params.get_tzid(), Some("tzone"));
        assert_eq!(line.value, "//Microsoft/Custom:20240101T090000");
    }

    #[rstest]
    #[case("", ContentLineError::MissingName(1))]
    #[case(":value", ContentLineError::MissingName(1))]
    #[case("NAME value", ContentLineError::MissingDelimiter(1, ':'))]
    #[case("NAME", ContentLineError::MissingDelimiter(1, ':'))]
    #[case("NAME;=x:value", ContentLineError::MissingParamKey(1))]
    #[case("NAME;KEY:value", ContentLineError::MissingDelimiter(1, '='))]
    #[case("NAME;KEY=:value", ContentLineError::MissingContentAfter(1, '='))]
    #[case("NAME;KEY=\"(open:value", ContentLineError::MissingClosingQuote(1))]
    fn malformed(#[case] input: &str, #[case] expected: ContentLineError) {
        assert_eq!(parse(input), Err(expected));
    }

    #[test]
    fn charset_only_is_trivial() {
        assert!(parse("SUMMARY;CHARSET=utf-8:x").unwrap().params.is_trivial());
        assert!(!parse("SUMMARY;LANGUAGE=de:x").unwrap().params.is_trivial());
    }
}
