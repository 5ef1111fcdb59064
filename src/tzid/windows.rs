//! Microsoft timezone names mapped to IANA identifiers.
//!
//! Covers the Windows zone IDs used by Exchange and Outlook as well as the
//! legacy `(UTC+HH:MM) City` display names. A `None` entry is a known name
//! without an IANA equivalent; those fall back to the offset in the label.

pub(crate) static WINDOWS_ZONES: phf::Map<&'static str, Option<&'static str>> = phf::phf_map! {
    "Dateline Standard Time" => Some("Etc/GMT+12"),
    "UTC-11" => Some("Etc/GMT+11"),
    "Aleutian Standard Time" => Some("America/Adak"),
    "Hawaiian Standard Time" => Some("Pacific/Honolulu"),
    "Marquesas Standard Time" => Some("Pacific/Marquesas"),
    "Alaskan Standard Time" => Some("America/Anchorage"),
    "UTC-09" => Some("Etc/GMT+9"),
    "Pacific Standard Time (Mexico)" => Some("America/Tijuana"),
    "UTC-08" => Some("Etc/GMT+8"),
    "Pacific Standard Time" => Some("America/Los_Angeles"),
    "US Mountain Standard Time" => Some("America/Phoenix"),
    "Mountain Standard Time (Mexico)" => Some("America/Chihuahua"),
    "Mountain Standard Time" => Some("America/Denver"),
    "Yukon Standard Time" => Some("America/Whitehorse"),
    "Central America Standard Time" => Some("America/Guatemala"),
    "Central Standard Time" => Some("America/Chicago"),
    "Easter Island Standard Time" => Some("Pacific/Easter"),
    "Central Standard Time (Mexico)" => Some("America/Mexico_City"),
    "Canada Central Standard Time" => Some("America/Regina"),
    "SA Pacific Standard Time" => Some("America/Bogota"),
    "Eastern Standard Time (Mexico)" => Some("America/Cancun"),
    "Eastern Standard Time" => Some("America/New_York"),
    "Haiti Standard Time" => Some("America/Port-au-Prince"),
    "Cuba Standard Time" => Some("America/Havana"),
    "US Eastern Standard Time" => Some("America/Indianapolis"),
    "Turks And Caicos Standard Time" => Some("America/Grand_Turk"),
    "Paraguay Standard Time" => Some("America/Asuncion"),
    "Atlantic Standard Time" => Some("America/Halifax"),
    "Venezuela Standard Time" => Some("America/Caracas"),
    "Central Brazilian Standard Time" => Some("America/Cuiaba"),
    "SA Western Standard Time" => Some("America/La_Paz"),
    "Pacific SA Standard Time" => Some("America/Santiago"),
    "Newfoundland Standard Time" => Some("America/St_Johns"),
    "Tocantins Standard Time" => Some("America/Araguaina"),
    "E. South America Standard Time" => Some("America/Sao_Paulo"),
    "SA Eastern Standard Time" => Some("America/Cayenne"),
    "Argentina Standard Time" => Some("America/Buenos_Aires"),
    "Greenland Standard Time" => Some("America/Godthab"),
    "Montevideo Standard Time" => Some("America/Montevideo"),
    "Magallanes Standard Time" => Some("America/Punta_Arenas"),
    "Saint Pierre Standard Time" => Some("America/Miquelon"),
    "Bahia Standard Time" => Some("America/Bahia"),
    "UTC-02" => Some("Etc/GMT+2"),
    "Azores Standard Time" => Some("Atlantic/Azores"),
    "Cape Verde Standard Time" => Some("Atlantic/Cape_Verde"),
    "UTC" => Some("Etc/UTC"),
    "GMT Standard Time" => Some("Europe/London"),
    "Greenwich Standard Time" => Some("Atlantic/Reykjavik"),
    "Sao Tome Standard Time" => Some("Africa/Sao_Tome"),
    "Morocco Standard Time" => Some("Africa/Casablanca"),
    "W. Europe Standard Time" => Some("Europe/Berlin"),
    "Central Europe Standard Time" => Some("Europe/Budapest"),
    "Romance Standard Time" => Some("Europe/Paris"),
    "Central European Standard Time" => Some("Europe/Warsaw"),
    "W. Central Africa Standard Time" => Some("Africa/Lagos"),
    "Jordan Standard Time" => Some("Asia/Amman"),
    "GTB Standard Time" => Some("Europe/Bucharest"),
    "Middle East Standard Time" => Some("Asia/Beirut"),
    "Egypt Standard Time" => Some("Africa/Cairo"),
    "E. Europe Standard Time" => Some("Europe/Chisinau"),
    "Syria Standard Time" => Some("Asia/Damascus"),
    "West Bank Standard Time" => Some("Asia/Hebron"),
    "South Africa Standard Time" => Some("Africa/Johannesburg"),
    "FLE Standard Time" => Some("Europe/Kiev"),
    "Israel Standard Time" => Some("Asia/Jerusalem"),
    "South Sudan Standard Time" => Some("Africa/Juba"),
    "Kaliningrad Standard Time" => Some("Europe/Kaliningrad"),
    "Sudan Standard Time" => Some("Africa/Khartoum"),
    "Libya Standard Time" => Some("Africa/Tripoli"),
    "Namibia Standard Time" => Some("Africa/Windhoek"),
    "Arabic Standard Time" => Some("Asia/Baghdad"),
    "Turkey Standard Time" => Some("Europe/Istanbul"),
    "Arab Standard Time" => Some("Asia/Riyadh"),
    "Belarus Standard Time" => Some("Europe/Minsk"),
    "Russian Standard Time" => Some("Europe/Moscow"),
    "E. Africa Standard Time" => Some("Africa/Nairobi"),
    "Iran Standard Time" => Some("Asia/Tehran"),
    "Arabian Standard Time" => Some("Asia/Dubai"),
    "Astrakhan Standard Time" => Some("Europe/Astrakhan"),
    "Azerbaijan Standard Time" => Some("Asia/Baku"),
    "Russia Time Zone 3" => Some("Europe/Samara"),
    "Mauritius Standard Time" => Some("Indian/Mauritius"),
    "Saratov Standard Time" => Some("Europe/Saratov"),
    "Georgian Standard Time" => Some("Asia/Tbilisi"),
    "Volgograd Standard Time" => Some("Europe/Volgograd"),
    "Caucasus Standard Time" => Some("Asia/Yerevan"),
    "Afghanistan Standard Time" => Some("Asia/Kabul"),
    "West Asia Standard Time" => Some("Asia/Tashkent"),
    "Ekaterinburg Standard Time" => Some("Asia/Yekaterinburg"),
    "Pakistan Standard Time" => Some("Asia/Karachi"),
    "Qyzylorda Standard Time" => Some("Asia/Qyzylorda"),
    "India Standard Time" => Some("Asia/Calcutta"),
    "Sri Lanka Standard Time" => Some("Asia/Colombo"),
    "Nepal Standard Time" => Some("Asia/Katmandu"),
    "Central Asia Standard Time" => Some("Asia/Almaty"),
    "Bangladesh Standard Time" => Some("Asia/Dhaka"),
    "Omsk Standard Time" => Some("Asia/Omsk"),
    "Myanmar Standard Time" => Some("Asia/Rangoon"),
    "SE Asia Standard Time" => Some("Asia/Bangkok"),
    "Altai Standard Time" => Some("Asia/Barnaul"),
    "W. Mongolia Standard Time" => Some("Asia/Hovd"),
    "North Asia Standard Time" => Some("Asia/Krasnoyarsk"),
    "N. Central Asia Standard Time" => Some("Asia/Novosibirsk"),
    "Tomsk Standard Time" => Some("Asia/Tomsk"),
    "China Standard Time" => Some("Asia/Shanghai"),
    "North Asia East Standard Time" => Some("Asia/Irkutsk"),
    "Singapore Standard Time" => Some("Asia/Singapore"),
    "W. Australia Standard Time" => Some("Australia/Perth"),
    "Taipei Standard Time" => Some("Asia/Taipei"),
    "Ulaanbaatar Standard Time" => Some("Asia/Ulaanbaatar"),
    "Aus Central W. Standard Time" => Some("Australia/Eucla"),
    "Transbaikal Standard Time" => Some("Asia/Chita"),
    "Tokyo Standard Time" => Some("Asia/Tokyo"),
    "North Korea Standard Time" => Some("Asia/Pyongyang"),
    "Korea Standard Time" => Some("Asia/Seoul"),
    "Yakutsk Standard Time" => Some("Asia/Yakutsk"),
    "Cen. Australia Standard Time" => Some("Australia/Adelaide"),
    "AUS Central Standard Time" => Some("Australia/Darwin"),
    "E. Australia Standard Time" => Some("Australia/Brisbane"),
    "AUS Eastern Standard Time" => Some("Australia/Sydney"),
    "West Pacific Standard Time" => Some("Pacific/Port_Moresby"),
    "Tasmania Standard Time" => Some("Australia/Hobart"),
    "Vladivostok Standard Time" => Some("Asia/Vladivostok"),
    "Lord Howe Standard Time" => Some("Australia/Lord_Howe"),
    "Bougainville Standard Time" => Some("Pacific/Bougainville"),
    "Russia Time Zone 10" => Some("Asia/Srednekolymsk"),
    "Magadan Standard Time" => Some("Asia/Magadan"),
    "Norfolk Standard Time" => Some("Pacific/Norfolk"),
    "Sakhalin Standard Time" => Some("Asia/Sakhalin"),
    "Central Pacific Standard Time" => Some("Pacific/Guadalcanal"),
    "Russia Time Zone 11" => Some("Asia/Kamchatka"),
    "New Zealand Standard Time" => Some("Pacific/Auckland"),
    "UTC+12" => Some("Etc/GMT-12"),
    "Fiji Standard Time" => Some("Pacific/Fiji"),
    "Chatham Islands Standard Time" => Some("Pacific/Chatham"),
    "UTC+13" => Some("Etc/GMT-13"),
    "Tonga Standard Time" => Some("Pacific/Tongatapu"),
    "Samoa Standard Time" => Some("Pacific/Apia"),
    "Line Islands Standard Time" => Some("Pacific/Kiritimati"),
    "(UTC-12:00) International Date Line West" => Some("Etc/GMT+12"),
    "(UTC-11:00) Midway Island, Samoa" => Some("Pacific/Apia"),
    "(UTC-10:00) Hawaii" => Some("Pacific/Honolulu"),
    "(UTC-09:00) Alaska" => Some("America/Anchorage"),
    "(UTC-08:00) Pacific Time (US & Canada); Tijuana" => Some("America/Los_Angeles"),
    "(UTC-08:00) Pacific Time (US and Canada); Tijuana" => Some("America/Los_Angeles"),
    "(UTC-07:00) Mountain Time (US & Canada)" => Some("America/Denver"),
    "(UTC-07:00) Mountain Time (US and Canada)" => Some("America/Denver"),
    "(UTC-07:00) Chihuahua, La Paz, Mazatlan" => None,
    "(UTC-07:00) Arizona" => Some("America/Phoenix"),
    "(UTC-06:00) Central Time (US & Canada)" => Some("America/Chicago"),
    "(UTC-06:00) Central Time (US and Canada)" => Some("America/Chicago"),
    "(UTC-06:00) Saskatchewan" => Some("America/Regina"),
    "(UTC-06:00) Guadalajara, Mexico City, Monterrey" => None,
    "(UTC-06:00) Central America" => Some("America/Guatemala"),
    "(UTC-05:00) Eastern Time (US & Canada)" => Some("America/New_York"),
    "(UTC-05:00) Eastern Time (US and Canada)" => Some("America/New_York"),
    "(UTC-05:00) Indiana (East)" => Some("America/Indianapolis"),
    "(UTC-05:00) Bogota, Lima, Quito" => Some("America/Bogota"),
    "(UTC-04:00) Atlantic Time (Canada)" => Some("America/Halifax"),
    "(UTC-04:00) Georgetown, La Paz, San Juan" => Some("America/La_Paz"),
    "(UTC-04:00) Santiago" => Some("America/Santiago"),
    "(UTC-03:30) Newfoundland" => None,
    "(UTC-03:00) Brasilia" => Some("America/Sao_Paulo"),
    "(UTC-03:00) Georgetown" => Some("America/Cayenne"),
    "(UTC-03:00) Greenland" => Some("America/Godthab"),
    "(UTC-02:00) Mid-Atlantic" => None,
    "(UTC-01:00) Azores" => Some("Atlantic/Azores"),
    "(UTC-01:00) Cape Verde Islands" => Some("Atlantic/Cape_Verde"),
    "(UTC) Greenwich Mean Time: Dublin, Edinburgh, Lisbon, London" => None,
    "(UTC) Monrovia, Reykjavik" => Some("Atlantic/Reykjavik"),
    "(UTC+01:00) Belgrade, Bratislava, Budapest, Ljubljana, Prague" => Some("Europe/Budapest"),
    "(UTC+01:00) Sarajevo, Skopje, Warsaw, Zagreb" => Some("Europe/Warsaw"),
    "(UTC+01:00) Brussels, Copenhagen, Madrid, Paris" => Some("Europe/Paris"),
    "(UTC+01:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna" => Some("Europe/Berlin"),
    "(UTC+01:00) West Central Africa" => Some("Africa/Lagos"),
    "(UTC+02:00) Minsk" => Some("Europe/Chisinau"),
    "(UTC+02:00) Cairo" => Some("Africa/Cairo"),
    "(UTC+02:00) Helsinki, Kiev, Riga, Sofia, Tallinn, Vilnius" => Some("Europe/Kiev"),
    "(UTC+02:00) Athens, Bucharest, Istanbul" => Some("Europe/Bucharest"),
    "(UTC+02:00) Jerusalem" => Some("Asia/Jerusalem"),
    "(UTC+02:00) Harare, Pretoria" => Some("Africa/Johannesburg"),
    "(UTC+03:00) Moscow, St. Petersburg, Volgograd" => Some("Europe/Moscow"),
    "(UTC+03:00) Kuwait, Riyadh" => Some("Asia/Riyadh"),
    "(UTC+03:00) Nairobi" => Some("Africa/Nairobi"),
    "(UTC+03:00) Baghdad" => Some("Asia/Baghdad"),
    "(UTC+03:30) Tehran" => Some("Asia/Tehran"),
    "(UTC+04:00) Abu Dhabi, Muscat" => Some("Asia/Dubai"),
    "(UTC+04:00) Baku, Tbilisi, Yerevan" => Some("Asia/Yerevan"),
    "(UTC+04:30) Kabul" => None,
    "(UTC+05:00) Ekaterinburg" => Some("Asia/Yekaterinburg"),
    "(UTC+05:00) Tashkent" => Some("Asia/Tashkent"),
    "(UTC+05:30) Chennai, Kolkata, Mumbai, New Delhi" => Some("Asia/Calcutta"),
    "(UTC+05:45) Kathmandu" => Some("Asia/Katmandu"),
    "(UTC+06:00) Astana, Dhaka" => Some("Asia/Almaty"),
    "(UTC+06:00) Sri Jayawardenepura" => Some("Asia/Colombo"),
    "(UTC+06:00) Almaty, Novosibirsk" => Some("Asia/Novosibirsk"),
    "(UTC+06:30) Yangon (Rangoon)" => Some("Asia/Rangoon"),
    "(UTC+07:00) Bangkok, Hanoi, Jakarta" => Some("Asia/Bangkok"),
    "(UTC+07:00) Krasnoyarsk" => Some("Asia/Krasnoyarsk"),
    "(UTC+08:00) Beijing, Chongqing, Hong Kong, Urumqi" => Some("Asia/Shanghai"),
    "(UTC+08:00) Kuala Lumpur, Singapore" => Some("Asia/Singapore"),
    "(UTC+08:00) Taipei" => Some("Asia/Taipei"),
    "(UTC+08:00) Perth" => Some("Australia/Perth"),
    "(UTC+08:00) Irkutsk, Ulaanbaatar" => Some("Asia/Irkutsk"),
    "(UTC+09:00) Seoul" => Some("Asia/Seoul"),
    "(UTC+09:00) Osaka, Sapporo, Tokyo" => Some("Asia/Tokyo"),
    "(UTC+09:00) Yakutsk" => Some("Asia/Yakutsk"),
    "(UTC+09:30) Darwin" => Some("Australia/Darwin"),
    "(UTC+09:30) Adelaide" => Some("Australia/Adelaide"),
    "(UTC+10:00) Canberra, Melbourne, Sydney" => Some("Australia/Sydney"),
    "(GMT+10:00) Canberra, Melbourne, Sydney" => Some("Australia/Sydney"),
    "(UTC+10:00) Brisbane" => Some("Australia/Brisbane"),
    "(UTC+10:00) Hobart" => Some("Australia/Hobart"),
    "(UTC+10:00) Vladivostok" => Some("Asia/Vladivostok"),
    "(UTC+10:00) Guam, Port Moresby" => Some("Pacific/Port_Moresby"),
    "(UTC+11:00) Magadan, Solomon Islands, New Caledonia" => Some("Pacific/Guadalcanal"),
    "(UTC+12:00) Fiji, Kamchatka, Marshall Is." => None,
    "(UTC+12:00) Auckland, Wellington" => Some("Pacific/Auckland"),
    "(UTC+13:00) Nukualofa" => Some("Pacific/Tongatapu"),
    "(UTC-03:00) Buenos Aires" => Some("America/Buenos_Aires"),
    "(UTC+02:00) Beirut" => Some("Asia/Beirut"),
    "(UTC+02:00) Amman" => Some("Asia/Amman"),
    "(UTC-06:00) Guadalajara, Mexico City, Monterrey - New" => Some("America/Mexico_City"),
    "(UTC-07:00) Chihuahua, La Paz, Mazatlan - New" => Some("America/Chihuahua"),
    "(UTC-08:00) Tijuana, Baja California" => Some("America/Tijuana"),
    "(UTC+02:00) Windhoek" => Some("Africa/Windhoek"),
    "(UTC+03:00) Tbilisi" => Some("Asia/Tbilisi"),
    "(UTC-04:00) Manaus" => Some("America/Cuiaba"),
    "(UTC-03:00) Montevideo" => Some("America/Montevideo"),
    "(UTC+04:00) Yerevan" => None,
    "(UTC-04:30) Caracas" => Some("America/Caracas"),
    "(UTC) Casablanca" => Some("Africa/Casablanca"),
    "(UTC+05:00) Islamabad, Karachi" => Some("Asia/Karachi"),
    "(UTC+04:00) Port Louis" => Some("Indian/Mauritius"),
    "(UTC) Coordinated Universal Time" => Some("Etc/UTC"),
    "(UTC-04:00) Asuncion" => Some("America/Asuncion"),
    "(UTC+12:00) Petropavlovsk-Kamchatsky" => None,
};

/// Look up a Microsoft zone name.
///
/// The outer `Option` tells whether the name is known at all.
pub fn lookup_windows_zone(name: &str) -> Option<Option<&'static str>> {
    WINDOWS_ZONES.get(name).copied()
}
