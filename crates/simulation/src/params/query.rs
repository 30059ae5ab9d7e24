//! Short-form query-string encoding of [`NeighbourhoodParams`].
//!
//! `fyp=20&syp=10&byp=45&lod=37.2&low=10.1&st=3&rw=11&law=6&sw=8&mbl=100&ip=false&pphb=4&aus=100`

use bevy::prelude::*;

use super::NeighbourhoodParams;

/// Every key understood by [`NeighbourhoodParams::from_query`], in output order.
pub const QUERY_KEYS: [&str; 13] = [
    "fyp", "syp", "byp", "lod", "low", "st", "rw", "law", "sw", "mbl", "ip", "pphb", "aus",
];

/// Parse a numeric query value.
///
/// The literal `0` is zero. Anything else that parses to zero, or fails to
/// parse, is treated as missing so the caller keeps its default.
fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw == "0" {
        return Some(0.0);
    }
    match raw.parse::<f64>() {
        Ok(v) if v != 0.0 && !v.is_nan() => Some(v),
        _ => None,
    }
}

/// Decode one `application/x-www-form-urlencoded` component: `+` is a space
/// and `%XX` is a byte. Malformed escapes are kept as written.
fn decode_component(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => decoded.push(b' '),
            b'%' => {
                let hex = bytes
                    .get(i + 1..i + 3)
                    .filter(|h| h.iter().all(u8::is_ascii_hexdigit))
                    .and_then(|h| std::str::from_utf8(h).ok())
                    .and_then(|h| u8::from_str_radix(h, 16).ok());
                match hex {
                    Some(byte) => {
                        decoded.push(byte);
                        i += 2;
                    }
                    None => decoded.push(b'%'),
                }
            }
            b => decoded.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&decoded).into_owned()
}

fn parse_count(raw: &str) -> Option<u32> {
    let v = parse_number(raw)?;
    if v < 0.0 || v.fract() != 0.0 || v > f64::from(u32::MAX) {
        return None;
    }
    Some(v as u32)
}

impl NeighbourhoodParams {
    /// Build a record from a query string, starting from the defaults.
    ///
    /// A leading `?` is ignored and keys and values are percent-decoded, so a
    /// browser's `location.search` can be passed as is. Unknown keys are
    /// ignored; keys whose value cannot be parsed keep their default and log
    /// a warning.
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(raw_key);
            let value = decode_component(raw_value);
            let value = value.as_str();
            let applied = match key.as_str() {
                "fyp" => parse_number(value).map(|v| params.front_yard_percent = v),
                "syp" => parse_number(value).map(|v| params.side_yard_percent = v),
                "byp" => parse_number(value).map(|v| params.back_yard_percent = v),
                "lod" => parse_number(value).map(|v| params.lot_depth_in_m = v),
                "low" => parse_number(value).map(|v| params.lot_width_in_m = v),
                "st" => parse_count(value).map(|v| params.storeys = v),
                "rw" => parse_number(value).map(|v| params.road_width_in_m = v),
                "law" => parse_number(value).map(|v| params.laneway_width_in_m = v),
                "sw" => parse_number(value).map(|v| params.sidewalk_width_in_m = v),
                "mbl" => parse_number(value).map(|v| params.max_block_length_in_m = v),
                "ip" => {
                    params.include_parks = value.eq_ignore_ascii_case("true");
                    Some(())
                }
                "pphb" => {
                    parse_count(value).map(|v| params.one_park_per_this_many_housing_blocks = v)
                }
                "aus" => parse_number(value).map(|v| params.average_unit_size_in_sq_m = v),
                _ => continue,
            };
            if applied.is_none() {
                warn!(
                    "Query parameter {}={:?} could not be parsed, keeping the default",
                    key, value
                );
            }
        }

        params
    }

    /// Encode this record with the short query keys.
    pub fn to_query(&self) -> String {
        let values = [
            self.front_yard_percent.to_string(),
            self.side_yard_percent.to_string(),
            self.back_yard_percent.to_string(),
            self.lot_depth_in_m.to_string(),
            self.lot_width_in_m.to_string(),
            self.storeys.to_string(),
            self.road_width_in_m.to_string(),
            self.laneway_width_in_m.to_string(),
            self.sidewalk_width_in_m.to_string(),
            self.max_block_length_in_m.to_string(),
            self.include_parks.to_string(),
            self.one_park_per_this_many_housing_blocks.to_string(),
            self.average_unit_size_in_sq_m.to_string(),
        ];
        QUERY_KEYS
            .iter()
            .zip(values.iter())
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}
