use crate::LogLevel;

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::eq;
use log::LevelFilter;

#[derive(serde::Deserialize)]
struct Wrapper {
    level: LogLevel,
}

#[test]
fn given_known_names_in_any_case_when_parsed_then_map_to_level() {
    let cases = [
        ("off", LevelFilter::Off),
        ("ERROR", LevelFilter::Error),
        ("Warn", LevelFilter::Warn),
        ("info", LevelFilter::Info),
        (" debug ", LevelFilter::Debug),
        ("trace", LevelFilter::Trace),
    ];

    for (input, expected) in cases {
        let Ok(level) = LogLevel::from_str(input);
        assert_that!(*level, eq(expected));
    }
}

#[test]
fn given_unknown_name_when_parsed_then_defaults_to_info() {
    let Ok(level) = LogLevel::from_str("loud");
    assert_that!(*level, eq(LevelFilter::Info));
}

#[test]
fn given_non_string_level_in_toml_when_deserialized_then_defaults_to_info() {
    let wrapper: Wrapper = toml::from_str("level = 3").unwrap();
    assert_that!(LevelFilter::from(wrapper.level), eq(LevelFilter::Info));
}
