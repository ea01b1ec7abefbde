use wtypes_formats::{FormatValidator, Formats};

fn check(value: &str, format: &str) -> bool {
    Formats::standard().validate_format(value, format)
}

#[test]
fn standard_table_lists_draft7_names() {
    let formats = Formats::standard();
    for name in [
        "date-time",
        "date",
        "time",
        "email",
        "idn-email",
        "hostname",
        "idn-hostname",
        "ipv4",
        "ipv6",
        "uri",
        "uri-reference",
        "iri",
        "iri-reference",
        "uri-template",
        "json-pointer",
        "relative-json-pointer",
        "regex",
        "color",
    ] {
        assert!(formats.supports(name), "missing {name}");
    }
    assert!(!formats.supports("uuid"));
}

#[test]
fn empty_table_supports_nothing() {
    let formats = Formats::empty();
    assert!(!formats.supports("date"));
    assert!(!formats.validate_format("2020-01-01", "date"));
}

#[test]
fn dates() {
    assert!(check("2020-02-29", "date"));
    assert!(!check("2019-02-29", "date"));
    assert!(!check("2020-13-01", "date"));
    assert!(!check("2020-1-01", "date"));
    assert!(!check("2020-01-00", "date"));
}

#[test]
fn times() {
    assert!(check("23:59:59Z", "time"));
    assert!(check("08:30:00.123+02:00", "time"));
    assert!(check("23:59:60z", "time"));
    assert!(!check("24:00:00Z", "time"));
    assert!(!check("12:00:00", "time"));
    assert!(!check("12:00:00+25:00", "time"));
}

#[test]
fn date_times() {
    assert!(check("1985-04-12T23:20:50.52Z", "date-time"));
    assert!(check("1996-12-19t16:39:57-08:00", "date-time"));
    assert!(!check("1985-04-12 23:20:50Z", "date-time"));
    assert!(!check("1985-04-12", "date-time"));
}

#[test]
fn emails() {
    assert!(check("ada@example.com", "email"));
    assert!(!check("ada.example.com", "email"));
    assert!(!check("@example.com", "email"));
    assert!(!check("ada @example.com", "email"));
    assert!(!check("アダ@example.com", "email"));
    assert!(check("アダ@example.com", "idn-email"));
}

#[test]
fn hostnames() {
    assert!(check("example.com", "hostname"));
    assert!(check("a-b.c", "hostname"));
    assert!(!check("-ab.c", "hostname"));
    assert!(!check("a..b", "hostname"));
    assert!(!check(&"a".repeat(64), "hostname"));
    assert!(!check("bücher.de", "hostname"));
    assert!(check("bücher.de", "idn-hostname"));
}

#[test]
fn ip_addresses() {
    assert!(check("192.168.0.1", "ipv4"));
    assert!(!check("256.0.0.1", "ipv4"));
    assert!(!check("::1", "ipv4"));
    assert!(check("::1", "ipv6"));
    assert!(check("2001:db8::8a2e:370:7334", "ipv6"));
    assert!(!check("2001:db8:::1", "ipv6"));
}

#[test]
fn uris() {
    assert!(check("https://example.com/a?b=c#d", "uri"));
    assert!(!check("/relative/path", "uri"));
    assert!(check("/relative/path", "uri-reference"));
    assert!(!check("has space", "uri-reference"));
    assert!(check("https://例え.jp/", "iri"));
    assert!(!check("https://例え.jp/", "uri"));
    assert!(check("../ü", "iri-reference"));
}

#[test]
fn uri_templates() {
    assert!(check("https://example.com/{id}/items{?page}", "uri-template"));
    assert!(!check("https://example.com/{id", "uri-template"));
    assert!(!check("https://example.com/{{id}}", "uri-template"));
}

#[test]
fn pointers() {
    assert!(check("/foo/0/~1bar", "json-pointer"));
    assert!(check("", "json-pointer"));
    assert!(!check("foo", "json-pointer"));
    assert!(check("1/foo", "relative-json-pointer"));
    assert!(check("0#", "relative-json-pointer"));
    assert!(!check("/foo", "relative-json-pointer"));
}

#[test]
fn regexes_and_colors() {
    assert!(check("^a+$", "regex"));
    assert!(!check("(unclosed", "regex"));
    assert!(check("#fff", "color"));
    assert!(check("#00FF7f", "color"));
    assert!(check("Maroon", "color"));
    assert!(!check("#ffff", "color"));
    assert!(!check("chartreuse", "color"));
}
