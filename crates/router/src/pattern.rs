//! Path segment expressions (PSE).
//!
//! A PSE is the template of one `/` delimited path segment. Segments that contain a pair of
//! braces or a `*` are compiled into an anchored regular expression, every other segment is
//! matched by plain string equality.
//!
//! Supported placeholders:
//!
//! ```text
//! {word:name}    one or more word characters; alphanumeric and underscore
//! {uint:name}    unsigned integer, up to 18 digits
//! {int:name}     signed integer, up to 18 digits
//! {float:name}   floating-point number in decimal notation
//! {hex:name}     hex number, with optional "0x" prefix
//! {uuid:name}    UUID, dashes optional
//! {date:name}    ISO 8601 date, captures name_year, name_mon, name_mday, name_hour, name_min, name_sec
//! {geo:name}     RFC 5870 geo location, captures name_lat, name_lon, name_alt, name_crs, name_u
//! {name}         catch-all; matches anything
//! *              same as {wild}
//! {re:pattern}   custom regexp pattern, must span the whole segment
//! ```
//!
//! Text around a placeholder is regexp syntax, so `GET /api/investments/\${float:dollars}/fund`
//! escapes the `$` itself.

use crate::error::PatternError;
use once_cell::sync::Lazy;
use regex::Regex;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(?:([0-9A-Za-z_]+):)?([0-9A-Za-z_]+)\}").expect("placeholder regex is valid"));

/// Returns true if the segment template must be matched by a compiled regexp.
#[inline]
pub fn is_pattern(segment: &str) -> bool {
    (segment.contains('{') && segment.contains('}')) || segment.contains('*')
}

/// Compiles a segment template into a regexp that only matches a whole segment.
///
/// # Errors
/// Returns [`PatternError`] when the template names an unknown placeholder type or does not
/// expand into valid regexp syntax.
pub fn compile(template: &str) -> Result<Regex, PatternError> {
    let body = expand(template)?;
    // the group is non-capturing so capture indexes stay the ones of the body
    Regex::new(&format!("^(?:{body})$")).map_err(|e| PatternError::invalid_regex(template, e))
}

/// Expands every placeholder of the template into its grammar.
fn expand(template: &str) -> Result<String, PatternError> {
    if let Some(custom) = template.strip_prefix("{re:").and_then(|rest| rest.strip_suffix('}')) {
        return Ok(custom.to_owned());
    }

    let template_text = template.replace('*', "{wild}");
    let mut body = String::with_capacity(template_text.len() * 4);
    let mut last = 0;

    for captures in PLACEHOLDER.captures_iter(&template_text) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        let kind = captures.get(1).map(|m| m.as_str());
        let name = &captures[2];

        let placeholder = Placeholder::from_kind(kind).ok_or_else(|| {
            PatternError::unknown_placeholder(template, kind.unwrap_or_default())
        })?;

        body.push_str(&template_text[last..whole.start()]);
        body.push_str(&placeholder.grammar(name));
        last = whole.end();
    }

    body.push_str(&template_text[last..]);
    Ok(body)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder {
    CatchAll,
    Word,
    Uint,
    Int,
    Float,
    Hex,
    Uuid,
    Date,
    Geo,
}

impl Placeholder {
    fn from_kind(kind: Option<&str>) -> Option<Self> {
        let placeholder = match kind {
            None => Self::CatchAll,
            Some("word") => Self::Word,
            Some("uint") => Self::Uint,
            Some("int") => Self::Int,
            Some("float") => Self::Float,
            Some("hex") => Self::Hex,
            Some("uuid") => Self::Uuid,
            Some("date") => Self::Date,
            Some("geo") => Self::Geo,
            Some(_) => return None,
        };
        Some(placeholder)
    }

    fn grammar(self, name: &str) -> String {
        match self {
            Self::CatchAll => format!("(?P<{name}>.+)"),
            Self::Word => format!("(?P<{name}>[0-9A-Za-z_]+)"),
            Self::Uint => format!("(?P<{name}>[0-9]{{1,18}})"),
            Self::Int => format!("(?P<{name}>[-+]?[0-9]{{1,18}})"),
            Self::Float => format!(r"(?P<{name}>[-+]?[0-9]+\.[0-9]+)"),
            Self::Hex => format!("(?P<{name}>(?:0x)?[[:xdigit:]]+)"),
            Self::Uuid => format!(
                "(?P<{name}>[[:xdigit:]]{{8}}-?[[:xdigit:]]{{4}}-?[[:xdigit:]]{{4}}-?[[:xdigit:]]{{4}}-?[[:xdigit:]]{{12}})"
            ),
            // accepted values:
            //   YYYY
            //   YYYY-MM
            //   YYYY-MM-DD
            //   YYYY-MM-DDTHH
            //   YYYY-MM-DDTHH:MM
            //   YYYY-MM-DDTHH:MM:SS[.NN]
            //   YYYY-MM-DDTHH:MM:SS[.NN]Z
            //   YYYY-MM-DDTHH:MM:SS[.NN][+-]HH
            //   YYYY-MM-DDTHH:MM:SS[.NN][+-]HH:MM
            Self::Date => format!(
                concat!(
                    "(?P<{n}>(",
                    "(?P<{n}_year>[0-9]{{4}})",
                    "([/-]?(?P<{n}_mon>(0[1-9])|(1[012]))",
                    "([/-]?(?P<{n}_mday>(0[1-9])|([12][0-9])|(3[01])))?)?",
                    "(?:T(?P<{n}_hour>([01][0-9])|(?:2[0123]))",
                    "(:?(?P<{n}_min>[0-5][0-9])",
                    "(:?(?P<{n}_sec>[0-5][0-9]([,.][0-9]{{1,10}})?))?)?",
                    "(?:Z|([-+](?:([01][0-9])|(?:2[0123]))(:?(?:[0-5][0-9]))?))?)?",
                    "))",
                ),
                n = name
            ),
            // accepted values:
            //   lat,lon           (point)
            //   lat,lon,alt       (3d point)
            //   lat,lon;u=unc     (circle)
            //   lat,lon,alt;u=unc (sphere)
            //   lat,lon;crs=name  (point with coordinate reference system)
            Self::Geo => format!(
                concat!(
                    r"(?P<{n}_lat>-?[0-9]+(\.[0-9]+)?)[,;]",
                    r"(?P<{n}_lon>-?[0-9]+(\.[0-9]+)?)",
                    r"([,;](?P<{n}_alt>-?[0-9]+(\.[0-9]+)?))?",
                    r"(((?:;crs=)(?P<{n}_crs>[0-9A-Za-z_-]+))?",
                    r"((?:;u=)(?P<{n}_u>-?[0-9]+(\.[0-9]+)?))?)?",
                ),
                n = name
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepts(template: &str, inputs: &[&str]) {
        let regex = compile(template).unwrap();
        for input in inputs {
            assert!(regex.is_match(input), "{template} should match {input}");
        }
    }

    fn rejects(template: &str, inputs: &[&str]) {
        let regex = compile(template).unwrap();
        for input in inputs {
            assert!(!regex.is_match(input), "{template} should not match {input}");
        }
    }

    #[test]
    fn test_is_pattern() {
        assert!(is_pattern("{uint:id}"));
        assert!(is_pattern("@{word:name}"));
        assert!(is_pattern("*"));
        assert!(!is_pattern("users"));
        assert!(!is_pattern("{half"));
        assert!(!is_pattern("half}"));
    }

    #[test]
    fn test_word() {
        accepts("{word:name}", &["bob", "bob_1", "B0B"]);
        rejects("{word:name}", &["bob-1", "b.b", ""]);
    }

    #[test]
    fn test_uint() {
        accepts("{uint:id}", &["0", "42", "123456789012345678"]);
        rejects("{uint:id}", &["abc", "-1", "+1", "1234567890123456789", "42abc"]);
    }

    #[test]
    fn test_int() {
        accepts("{int:n}", &["42", "-42", "+42"]);
        rejects("{int:n}", &["4.2", "--1", "x"]);
    }

    #[test]
    fn test_float() {
        accepts("{float:f}", &["3.14", "-0.5", "+10.25"]);
        rejects("{float:f}", &["3", "3.", ".5", "1e5"]);
    }

    #[test]
    fn test_hex() {
        accepts("{hex:h}", &["0xff", "DEADbeef", "0"]);
        rejects("{hex:h}", &["0x", "xyz", "0xg1"]);
    }

    #[test]
    fn test_uuid() {
        accepts("{uuid:u}", &["123e4567-e89b-12d3-a456-426614174000", "123e4567e89b12d3a456426614174000"]);
        rejects("{uuid:u}", &["123e4567-e89b", "123e4567-e89b-12d3-a456-42661417400z"]);
    }

    #[test]
    fn test_date() {
        accepts(
            "{date:d}",
            &[
                "2024",
                "2024-03",
                "2024-03-15",
                "2024/03/15",
                "20240315",
                "2024-03-15T10",
                "2024-03-15T10:30",
                "2024-03-15T10:30:00Z",
                "2024-03-15T10:30:00.123+02:00",
                "2024-03-15T10:30:00-05",
            ],
        );
        rejects("{date:d}", &["2024-13-01", "2024-03-32", "2024-03-15T25", "24-03-15", "today"]);
    }

    #[test]
    fn test_date_captures() {
        let regex = compile("{date:d}").unwrap();
        let captures = regex.captures("2024-03-15T10:30:45Z").unwrap();
        assert_eq!(&captures["d"], "2024-03-15T10:30:45Z");
        assert_eq!(&captures["d_year"], "2024");
        assert_eq!(&captures["d_mon"], "03");
        assert_eq!(&captures["d_mday"], "15");
        assert_eq!(&captures["d_hour"], "10");
        assert_eq!(&captures["d_min"], "30");
        assert_eq!(&captures["d_sec"], "45");

        let captures = regex.captures("2024-03").unwrap();
        assert_eq!(&captures["d_mon"], "03");
        assert!(captures.name("d_mday").is_none());
    }

    #[test]
    fn test_geo() {
        accepts("{geo:loc}", &["48.2,16.37", "48.2,16.37,120", "48.2,16.37;u=30", "48.2,16.37;crs=wgs84", "-33,151"]);
        rejects("{geo:loc}", &["48.2", "north,south", "48.2,16.37;v=1"]);

        let regex = compile("{geo:loc}").unwrap();
        let captures = regex.captures("48.2,16.37,120;crs=wgs84;u=30").unwrap();
        assert_eq!(&captures["loc_lat"], "48.2");
        assert_eq!(&captures["loc_lon"], "16.37");
        assert_eq!(&captures["loc_alt"], "120");
        assert_eq!(&captures["loc_crs"], "wgs84");
        assert_eq!(&captures["loc_u"], "30");
    }

    #[test]
    fn test_catch_all_and_wildcard() {
        accepts("{path}", &["anything goes.txt", "a"]);
        rejects("{path}", &[""]);

        let regex = compile("*").unwrap();
        assert_eq!(&regex.captures("readme.md").unwrap()["wild"], "readme.md");
    }

    #[test]
    fn test_custom() {
        accepts("{re:([0][1-9]|[1][0-2])}", &["01", "07", "12"]);
        rejects("{re:([0][1-9]|[1][0-2])}", &["00", "13", "7", "012"]);
    }

    #[test]
    fn test_literal_around_placeholder() {
        let regex = compile("@{word:name}").unwrap();
        assert_eq!(&regex.captures("@bob").unwrap()["name"], "bob");
        assert!(!regex.is_match("bob"));

        let regex = compile(r"\${float:dollars}").unwrap();
        assert_eq!(&regex.captures("$12.50").unwrap()["dollars"], "12.50");
    }

    #[test]
    fn test_invalid_patterns() {
        assert!(matches!(compile("{re:([0-9}"), Err(PatternError::InvalidRegex { .. })));
        assert!(matches!(compile("{uint:id}-{uint:id}"), Err(PatternError::InvalidRegex { .. })));
        assert!(matches!(
            compile("{color:c}"),
            Err(PatternError::UnknownPlaceholder { kind, .. }) if kind == "color"
        ));
    }
}
