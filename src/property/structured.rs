use super::date::{DateParams, RE_LIST_SEPARATOR, parse_date};
use super::text::{text_value, unescape};
use crate::component::Properties;
use crate::parser::ContentLineParams;
use crate::types::{FreeBusy, Geo, Value};

fn parse_geo(value: &str) -> Option<Geo> {
    let (lat, lon) = value.split_once(';')?;
    Some(Geo {
        lat: lat.trim().parse().ok()?,
        lon: lon.trim().parse().ok()?,
    })
}

/// `GEO:lat;lon`. A pair that does not parse is kept as text.
pub fn store_geo(props: &mut Properties, params: &ContentLineParams, value: &str) {
    let geo = match parse_geo(value) {
        Some(geo) => Value::Geo(geo),
        None => text_value(params, value),
    };
    props.insert("geo".to_owned(), geo);
}

/// `CATEGORIES`, accumulated over every occurrence.
pub fn store_categories(props: &mut Properties, value: &str) {
    let mut categories = match props.remove("categories") {
        Some(Value::Categories(categories)) => categories,
        _ => Vec::new(),
    };
    if !value.is_empty() {
        categories.extend(RE_LIST_SEPARATOR.split(value).map(unescape));
    }
    props.insert("categories".to_owned(), Value::Categories(categories));
}

/// `FREEBUSY`: one record per `start/end` period.
pub fn store_freebusy(
    props: &mut Properties,
    params: &ContentLineParams,
    value: &str,
    local: Option<chrono_tz::Tz>,
) {
    let fb_type = params.get_param("FBTYPE").unwrap_or("BUSY").to_owned();
    let (date_params, value) = DateParams::extract(params, value);

    let mut periods = match props.remove("freebusy") {
        Some(Value::FreeBusy(periods)) => periods,
        _ => Vec::new(),
    };
    for period in value.split(',') {
        let (start, end) = match period.split_once('/') {
            Some((start, end)) => (start, Some(end)),
            None => (period, None),
        };
        periods.push(FreeBusy {
            fb_type: fb_type.clone(),
            start: parse_date(start, &date_params, local),
            end: end.map(|end| parse_date(end, &date_params, local)),
        });
    }
    props.insert("freebusy".to_owned(), Value::FreeBusy(periods));
}
