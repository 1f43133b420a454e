//! Shareable Link Codec
//!
//! A list travels as percent-encoded JSON in a single query parameter.
//! Encoding matches `encodeURIComponent`, so links produced by older
//! versions of the app decode the same way.

use std::collections::HashSet;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::ShareError;
use crate::item::Item;

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Serialize and percent-encode a list for use as a query value
pub fn encode_list(items: &[Item]) -> Result<String, ShareError> {
    let json = serde_json::to_string(items).map_err(ShareError::Encode)?;
    Ok(utf8_percent_encode(&json, URI_COMPONENT).to_string())
}

/// Full share link: `{base}?{param}={encoded list}`
pub fn share_url(base: &str, param: &str, items: &[Item]) -> Result<String, ShareError> {
    Ok(format!("{}?{}={}", base, param, encode_list(items)?))
}

/// Decode a raw (still percent-encoded) query value into a list.
///
/// All or nothing: any malformed escape, invalid JSON, non-array value,
/// unrepairable item or repeated id rejects the whole payload.
pub fn decode_list(raw: &str) -> Result<Vec<Item>, ShareError> {
    check_escapes(raw)?;
    let json = percent_decode_str(raw).decode_utf8()?;
    parse_list_json(&json)
}

/// Parse a plain JSON list, as stored locally or after percent-decoding
pub(crate) fn parse_list_json(json: &str) -> Result<Vec<Item>, ShareError> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(ShareError::Json)?;
    if !value.is_array() {
        return Err(ShareError::NotASequence);
    }
    let mut items: Vec<Item> =
        serde_json::from_value(value).map_err(|e| ShareError::InvalidItem(e.to_string()))?;

    let mut seen = HashSet::new();
    for item in &mut items {
        item.normalize()?;
        if !seen.insert(item.id().to_string()) {
            return Err(ShareError::DuplicateId(item.id().to_string()));
        }
    }
    Ok(items)
}

/// Find a parameter in a raw query string, returning its value undecoded
pub fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query
        .strip_prefix('?')
        .unwrap_or(query)
        .split('&')
        .find_map(|pair| match pair.split_once('=') {
            Some((key, value)) if key == name => Some(value),
            None if pair == name => Some(""),
            _ => None,
        })
}

/// `%` must always be followed by two hex digits
fn check_escapes(raw: &str) -> Result<(), ShareError> {
    let bytes = raw.as_bytes();
    for (pos, byte) in bytes.iter().enumerate() {
        if *byte != b'%' {
            continue;
        }
        let valid = bytes
            .get(pos + 1..pos + 3)
            .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            return Err(ShareError::MalformedEscape(pos));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(name: &str, price: f64, quantity: u32) -> Item {
        Item::new(name, price, quantity).unwrap()
    }

    #[test]
    fn test_roundtrip_preserves_list() {
        let mut milk = item("Milk & <Honey>", 2.5, 3);
        milk.toggle();
        let list = vec![milk, item("ข้าว 50% off", 10.0, 1)];

        let encoded = encode_list(&list).unwrap();
        assert!(!encoded.contains('&'));
        assert!(!encoded.contains(' '));
        assert_eq!(decode_list(&encoded).unwrap(), list);
    }

    #[test]
    fn test_empty_list_roundtrip() {
        let encoded = encode_list(&[]).unwrap();
        assert_eq!(encoded, "%5B%5D");
        assert!(decode_list(&encoded).unwrap().is_empty());
    }

    #[test]
    fn test_encoding_matches_uri_component() {
        let encoded = utf8_percent_encode("a b/c?d=e&f*(g)'!~_-.", URI_COMPONENT).to_string();
        assert_eq!(encoded, "a%20b%2Fc%3Fd%3De%26f*(g)'!~_-.");
    }

    #[test]
    fn test_share_url_shape() {
        let url = share_url("https://g.example/", "list", &[item("Tea", 1.0, 1)]).unwrap();
        assert!(url.starts_with("https://g.example/?list=%5B%7B"));
        let query = url.split_once('?').unwrap().1;
        let raw = query_param(query, "list").unwrap();
        assert_eq!(decode_list(raw).unwrap()[0].name(), "Tea");
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = decode_list("%7Bnot%20json").unwrap_err();
        assert!(matches!(err, ShareError::Json(_)));
    }

    #[test]
    fn test_malformed_escape_rejected() {
        assert!(matches!(decode_list("%5B%5"), Err(ShareError::MalformedEscape(3))));
        assert!(matches!(decode_list("%zz"), Err(ShareError::MalformedEscape(0))));
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        assert!(matches!(decode_list("%FF%FE"), Err(ShareError::Utf8(_))));
    }

    #[test]
    fn test_non_sequence_rejected() {
        let raw = utf8_percent_encode(r#"{"id":"1","name":"x","price":1,"quantity":1}"#, URI_COMPONENT).to_string();
        assert!(matches!(decode_list(&raw), Err(ShareError::NotASequence)));
        assert!(matches!(decode_list("42"), Err(ShareError::NotASequence)));
    }

    #[test]
    fn test_invalid_element_rejects_whole_payload() {
        let raw = utf8_percent_encode(
            r#"[{"id":"1","name":"ok","price":1,"quantity":1},{"id":"2"}]"#,
            URI_COMPONENT,
        )
        .to_string();
        assert!(matches!(decode_list(&raw), Err(ShareError::InvalidItem(_))));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let raw = utf8_percent_encode(
            r#"[{"id":"1","name":"a","price":1,"quantity":1},{"id":"1","name":"b","price":1,"quantity":1}]"#,
            URI_COMPONENT,
        )
        .to_string();
        assert!(matches!(decode_list(&raw), Err(ShareError::DuplicateId(id)) if id == "1"));
    }

    #[test]
    fn test_query_param() {
        assert_eq!(query_param("?list=abc&x=1", "list"), Some("abc"));
        assert_eq!(query_param("x=1&list=%5B%5D", "list"), Some("%5B%5D"));
        assert_eq!(query_param("?list", "list"), Some(""));
        assert_eq!(query_param("?listing=1", "list"), None);
        assert_eq!(query_param("", "list"), None);
    }

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(
            entries in prop::collection::vec(
                ("[a-zA-Z0-9 %&<>\"'ก-ฮ]{0,12}[a-zA-Z]", 0.0f64..1.0e6, 1u32..500, any::<bool>()),
                0..8,
            )
        ) {
            let list: Vec<Item> = entries
                .iter()
                .map(|(name, price, quantity, done)| {
                    let mut item = item(name, *price, *quantity);
                    if *done {
                        item.toggle();
                    }
                    item
                })
                .collect();
            let encoded = encode_list(&list).unwrap();
            prop_assert_eq!(decode_list(&encoded).unwrap(), list);
        }
    }
}
