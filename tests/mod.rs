use lenient_ical::{Calendar, IcalParser, ParserOptions};

const OUTLOOK: &str = include_str!("./resources/outlook.ics");
const RECURRING: &str = include_str!("./resources/recurring.ics");
const FREEBUSY: &str = include_str!("./resources/freebusy.ics");
const MISC: &str = include_str!("./resources/misc.ics");

fn parse(input: &str) -> Calendar {
    IcalParser::from_str(input)
        .with_options(ParserOptions {
            local_timezone: Some(chrono_tz::Asia::Tokyo),
            ..Default::default()
        })
        .parse()
        .unwrap()
}

// Components without UID get a random key, so compare them order-invariantly
pub fn normalise(cal: &Calendar) -> Vec<String> {
    let mut comps: Vec<String> = cal.iter().map(|(_, comp)| format!("{comp:?}")).collect();
    comps.sort();
    comps
}

pub mod line {
    use lenient_ical::LineReader;
    use lenient_ical::parser::LineEnding;
    use rstest::rstest;

    #[rstest]
    #[case(crate::OUTLOOK, LineEnding::CrLf)]
    #[case(crate::RECURRING, LineEnding::Lf)]
    fn detects_line_ending(#[case] input: &str, #[case] expected: LineEnding) {
        assert_eq!(LineReader::from_str(input).line_ending(), expected);
    }

    #[test]
    fn multioctet_line_wrapping() {
        let line = LineReader::from_str("SUMMARY:K\u{f6}\r\n ln\r\n").next().unwrap();
        assert_eq!(line.as_str(), "SUMMARY:K\u{f6}ln");
    }

    #[test]
    fn folded_uid() {
        let uid = LineReader::from_str(super::OUTLOOK)
            .find(|line| line.as_str().starts_with("UID:"))
            .unwrap();
        assert_eq!(
            uid.as_str(),
            "UID:040000008200E00074C5B7101A82E00800000000B0C42E6B4C7ED9010000000000000000100000009A6E"
        );
        assert_eq!(uid.number(), 23);
    }
}

pub mod property {
    use lenient_ical::ContentLineParser;

    #[test]
    fn every_fixture_line_but_garbage_tokenizes() {
        let errors: Vec<_> = ContentLineParser::from_str(super::MISC)
            .filter_map(Result::err)
            .map(|err| err.to_string())
            .collect();
        assert_eq!(
            errors,
            vec![
                "Line 42: Missing a \":\" delimiter.".to_owned(),
                "Line 44: Missing property name.".to_owned(),
            ]
        );
    }

    #[test]
    fn display() {
        let line = ContentLineParser::from_str("SUMMARY;LANGUAGE=en-US:Quarterly review")
            .next()
            .unwrap()
            .unwrap();
        insta::assert_snapshot!(line, @r#"
        name: SUMMARY
        params: ContentLineParams([("LANGUAGE", "en-US")])
        value: "Quarterly review"
        "#);
    }
}

pub mod outlook {
    use chrono::{TimeZone, Utc};
    use lenient_ical::Value;
    use lenient_ical::types::{ParamValue, Tz};

    const EXCHANGE_UID: &str =
        "040000008200E00074C5B7101A82E00800000000B0C42E6B4C7ED9010000000000000000100000009A6E";

    #[test]
    fn windows_zone_names() {
        let cal = super::parse(super::OUTLOOK);
        let event = cal.get(EXCHANGE_UID).unwrap();
        assert_eq!(event.summary(), Some("Quarterly review"));
        assert_eq!(
            event.description(),
            Some("Quarterly review\n\nAgenda to follow, see link")
        );
        let start = event.start().unwrap();
        assert_eq!(start.tzid(), Some("W. Europe Standard Time"));
        assert_eq!(start.timezone(), Tz::Olson(chrono_tz::Europe::Berlin));
        assert_eq!(start.utc(), Utc.with_ymd_and_hms(2024, 3, 5, 9, 0, 0).unwrap());
        assert_eq!(
            event.end().unwrap().utc(),
            Utc.with_ymd_and_hms(2024, 3, 5, 10, 30, 0).unwrap()
        );
        assert_eq!(event.datetype(), Some("date-time"));
    }

    #[test]
    fn plain_and_extension_properties() {
        let cal = super::parse(super::OUTLOOK);
        let event = cal.get(EXCHANGE_UID).unwrap();
        assert_eq!(event.method(), Some("REQUEST"));
        assert_eq!(event.properties.text("class"), Some("PUBLIC"));
        assert_eq!(event.properties.text("transparency"), Some("OPAQUE"));
        assert_eq!(event.properties.text("priority"), Some("5"));
        assert_eq!(
            event.properties.text("MICROSOFT-CDO-BUSYSTATUS"),
            Some("BUSY")
        );
        assert_eq!(
            event.get("organizer"),
            Some(&Value::Wrapped {
                params: vec![("CN".to_owned(), ParamValue::Text("Jane Doe".to_owned()))].into(),
                value: "mailto:jane@example.com".to_owned(),
            })
        );
    }

    #[test]
    fn alarm_is_nested() {
        let cal = super::parse(super::OUTLOOK);
        let event = cal.get(EXCHANGE_UID).unwrap();
        let [alarm] = event.components.as_slice() else {
            panic!("expected exactly one alarm");
        };
        assert_eq!(alarm.kind(), "VALARM");
        assert_eq!(alarm.properties.text("trigger"), Some("-PT15M"));
        assert_eq!(alarm.description(), Some("REMINDER"));
        assert_eq!(cal.iter().filter(|(_, comp)| comp.kind() == "VALARM").count(), 0);
    }

    #[test]
    fn custom_timezone_uses_configured_zone() {
        let cal = super::parse(super::OUTLOOK);
        let event = cal.get("outlook-custom-1").unwrap();
        let start = event.start().unwrap();
        assert_eq!(start.tzid(), Some("Asia/Tokyo"));
        assert_eq!(start.utc(), Utc.with_ymd_and_hms(2024, 4, 10, 5, 0, 0).unwrap());
    }

    #[test]
    fn offset_labels() {
        let cal = super::parse(super::OUTLOOK);

        let mapped = cal.get("offset-label-1").unwrap().start().unwrap();
        assert_eq!(mapped.timezone(), Tz::Olson(chrono_tz::Europe::Berlin));
        assert_eq!(mapped.utc(), Utc.with_ymd_and_hms(2024, 6, 1, 7, 0, 0).unwrap());

        let event = cal.get("offset-label-2").unwrap();
        let unlisted = event.start().unwrap();
        assert_eq!(unlisted.offset_seconds(), 5 * 3600);
        assert_eq!(unlisted.utc(), Utc.with_ymd_and_hms(2024, 6, 1, 4, 0, 0).unwrap());
        assert_eq!(event.end(), Some(unlisted));
    }

    #[test]
    fn quoted_zone_with_rule() {
        let cal = super::parse(super::OUTLOOK);
        let event = cal.get("quoted-tzid-1").unwrap();
        assert_eq!(event.start().unwrap().tzid(), Some("Pacific Standard Time"));
        let rule = event.rrule().unwrap();
        insta::assert_snapshot!(
            rule.as_str(),
            @"FREQ=WEEKLY;UNTIL=20240301T160000Z;BYDAY=MO;DTSTART;TZID=America/Los_Angeles:20240115T160000Z"
        );
        assert_eq!(rule.to_rrule_set().all(100).dates.len(), 7);
    }

    #[test]
    fn timezone_definition() {
        let cal = super::parse(super::OUTLOOK);
        let vtimezones: Vec<_> = cal.of_kind("VTIMEZONE").collect();
        let [vtimezone] = vtimezones.as_slice() else {
            panic!("expected one VTIMEZONE");
        };
        assert_eq!(vtimezone.properties.text("tzid"), Some("W. Europe Standard Time"));
        let kinds: Vec<_> = vtimezone.components.iter().map(|c| c.kind()).collect();
        assert_eq!(kinds, vec!["STANDARD", "DAYLIGHT"]);
        // Only events, to-dos and journals get their rule built
        assert!(matches!(
            vtimezone.components[0].get("rrule"),
            Some(Value::Text(_))
        ));
        assert_eq!(cal.len(), 6);
        assert!(cal.properties.is_empty());
    }
}

pub mod recurring {
    use lenient_ical::Value;
    use lenient_ical::types::{ParamValue, Params};
    use rstest::rstest;

    #[test]
    fn exdates_keyed_by_day() {
        let cal = super::parse(super::RECURRING);
        let event = cal.get("weekly-standup").unwrap();
        assert_eq!(
            event
                .exdates()
                .unwrap()
                .keys()
                .map(String::as_str)
                .collect::<Vec<_>>(),
            vec!["2024-01-22", "2024-01-29", "2024-02-05"]
        );
        insta::assert_snapshot!(
            event.rrule().unwrap().as_str(),
            @"FREQ=WEEKLY;BYDAY=MO;COUNT=10;DTSTART;TZID=Europe/Berlin:20240108T083000Z"
        );
    }

    #[test]
    fn exception_is_filed_under_parent() {
        let cal = super::parse(super::RECURRING);
        let event = cal.get("weekly-standup").unwrap();
        assert_eq!(event.summary(), Some("Standup"));
        assert_eq!(event.properties.text("sequence"), Some("1"));
        assert_eq!(
            event.recurrences.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["2024-01-15"]
        );

        let moved = &event.recurrences["2024-01-15"];
        assert_eq!(moved.summary(), Some("Standup (moved)"));
        assert_eq!(moved.properties.text("sequence"), Some("2"));
        assert!(moved.recurrences.is_empty());
    }

    #[test]
    fn exception_before_base() {
        let cal = super::parse(super::RECURRING);
        let event = cal.get("early-exception").unwrap();
        assert_eq!(event.summary(), Some("Review"));
        assert!(event.recurrence_id().is_none());
        assert_eq!(event.start().unwrap().date_key(), "2024-02-29");
        assert_eq!(event.end().unwrap().date_key(), "2024-03-01");
        assert_eq!(
            event.recurrences["2024-03-07"].summary(),
            Some("Review (cancelled)")
        );
        insta::assert_snapshot!(
            event.rrule().unwrap().as_str(),
            @"FREQ=WEEKLY;INTERVAL=1;COUNT=4;DTSTART=20240229T000000Z"
        );
    }

    #[test]
    fn repeated_uid_merges_fields() {
        let cal = super::parse(super::RECURRING);
        let event = cal.get("updated").unwrap();
        assert_eq!(event.summary(), Some("Final"));
        assert_eq!(event.location(), Some("Room 1"));
        assert_eq!(event.start().unwrap().naive_utc().to_string(), "2024-03-01 13:00:00");
        assert_eq!(event.end(), event.start());
    }

    #[rstest]
    #[case("floating-until", "FREQ=DAILY;UNTIL=20240110T090000Z;DTSTART=20240101T090000Z", 10)]
    #[case("all-day-until", "FREQ=YEARLY;UNTIL=20300101T235959Z;DTSTART=20240101T000000Z", 7)]
    #[case(
        "zoned-floating-until",
        "FREQ=DAILY;UNTIL=20240105T080000Z;DTSTART;TZID=Europe/Berlin:20240101T080000Z",
        5
    )]
    fn until_follows_start(#[case] uid: &str, #[case] text: &str, #[case] occurrences: usize) {
        let cal = super::parse(super::RECURRING);
        let rule = cal.get(uid).unwrap().rrule().unwrap();
        assert_eq!(rule.as_str(), text);
        assert_eq!(rule.to_rrule_set().all(100).dates.len(), occurrences);
    }

    #[test]
    fn calendar_attributes_with_params_survive() {
        let cal = super::parse(super::RECURRING);
        assert_eq!(cal.len(), 6);
        assert_eq!(
            cal.properties.get("WR-CALNAME"),
            Some(&Value::Wrapped {
                params: Params(vec![("X-PUBLISHED".to_owned(), ParamValue::Bool(true))]),
                value: "Team".to_owned(),
            })
        );
        assert!(cal.properties.get("version").is_none());
    }
}

pub mod freebusy {
    use lenient_ical::Value;

    #[test]
    fn periods() {
        let cal = super::parse(super::FREEBUSY);
        let fb = cal.get("fb-1").unwrap();
        assert_eq!(fb.kind(), "VFREEBUSY");
        assert_eq!(fb.method(), Some("PUBLISH"));

        let periods = fb.freebusy().unwrap();
        let types: Vec<_> = periods.iter().map(|p| p.fb_type.as_str()).collect();
        assert_eq!(types, vec!["BUSY", "BUSY-TENTATIVE", "BUSY-TENTATIVE", "FREE"]);
        assert!(periods.iter().all(|p| p.start.as_date().is_some()));
        assert_eq!(periods[1].end, Some(Value::Text("PT1H".to_owned())));
        assert_eq!(
            periods[3].end.as_ref().and_then(Value::as_date).unwrap().naive_utc().to_string(),
            "2024-01-01 18:00:00"
        );
    }
}

pub mod misc {
    use lenient_ical::types::Geo;

    #[test]
    fn all_day_event() {
        let cal = super::parse(super::MISC);
        let event = cal.get("all-day").unwrap();
        assert_eq!(event.summary(), Some("Ferien in K\u{f6}ln"));
        assert_eq!(
            event.description(),
            Some("Long description that was folded by the client at seventy-five octets, as RFC 5545 asks for.")
        );
        assert_eq!(
            event.categories().unwrap(),
            &["Holiday".to_owned(), "Family".to_owned(), "Travel".to_owned()]
        );
        assert_eq!(
            event.geo(),
            Some(&Geo {
                lat: 50.937531,
                lon: 6.960279
            })
        );
        let start = event.start().unwrap();
        assert!(start.is_all_day());
        assert_eq!(event.datetype(), Some("date"));
        assert_eq!(event.end().unwrap().date_key(), "2024-07-23");
    }

    #[test]
    fn duration_end() {
        let cal = super::parse(super::MISC);
        let event = cal.get("with-duration").unwrap();
        assert_eq!(event.end().unwrap().date_key(), "2024-08-03");
    }

    #[test]
    fn missing_uid_gets_generated_key() {
        let cal = super::parse(super::MISC);
        let (key, event) = cal
            .iter()
            .find(|(_, comp)| comp.summary() == Some("No identifier"))
            .unwrap();
        assert_eq!(key.len(), 36);
        assert!(event.uid().is_none());
        assert_eq!(event.end(), event.start());
        assert_eq!(cal.len(), 5);
    }

    #[test]
    fn todo_dates() {
        let cal = super::parse(super::MISC);
        let todo = cal.get("todo-1").unwrap();
        assert_eq!(todo.kind(), "VTODO");
        assert!(todo.properties.date("due").unwrap().is_all_day());
        assert_eq!(
            todo.properties.date("completed").unwrap().tzid(),
            Some("Etc/UTC")
        );
        assert!(todo.properties.date("created").is_some());
        assert!(todo.properties.date("lastmodified").is_some());
        assert_eq!(todo.properties.text("completion"), Some("100"));
        assert!(todo.end().is_none());
    }

    #[test]
    fn repeated_property_becomes_list() {
        let cal = super::parse(super::MISC);
        let journal = cal.get("journal-1").unwrap();
        let Some(lenient_ical::Value::List(attendees)) = journal.get("attendee") else {
            panic!("attendees not collected");
        };
        assert_eq!(attendees.len(), 3);
        assert_eq!(journal.properties.text("attendee"), Some("mailto:a@example.com"));
    }
}

pub mod driver {
    use lenient_ical::{IcalParser, ParserOptions};
    use rstest::rstest;
    use similar_asserts::assert_eq;

    #[rstest]
    #[case(crate::OUTLOOK)]
    #[case(crate::RECURRING)]
    #[case(crate::FREEBUSY)]
    #[case(crate::MISC)]
    fn chunked_matches_immediate(#[case] input: &str) {
        let options = ParserOptions {
            batch_size: 5,
            local_timezone: Some(chrono_tz::Asia::Tokyo),
        };
        let immediate = super::parse(input);

        let mut outcome = None;
        IcalParser::from_str(input)
            .with_options(options)
            .chunked()
            .drive(&mut || {}, |result| outcome = Some(result));
        let chunked = outcome.unwrap().unwrap();

        assert_eq!(
            super::normalise(&chunked),
            super::normalise(&immediate)
        );
        assert_eq!(chunked.properties, immediate.properties);
    }

    #[test]
    fn line_endings_do_not_matter() {
        let lf = super::OUTLOOK.replace("\r\n", "\n");
        assert_eq!(
            super::normalise(&super::parse(&lf)),
            super::normalise(&super::parse(super::OUTLOOK))
        );
    }

    #[test]
    fn calendars_merge() {
        let input = format!("{}{}", super::RECURRING, super::FREEBUSY);
        let cal = super::parse(&input);
        assert_eq!(cal.len(), 7);
        assert!(cal.properties.get("WR-CALNAME").is_some());
        assert_eq!(cal.get("fb-1").unwrap().method(), Some("PUBLISH"));
    }
}
