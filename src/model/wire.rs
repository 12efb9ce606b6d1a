//! Wire-format helpers for CWMP list parameters.

/// Serde adapter for list-valued parameters, which travel as one
/// comma-separated string under a single tag. Use with
/// `#[serde(with = "crate::model::wire::comma_list")]`.
pub mod comma_list {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::fmt::Display;
    use std::str::FromStr;

    pub fn serialize<T, S>(items: &[T], serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        let joined = items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        serializer.serialize_str(&joined)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        raw.split(',')
            .map(|item| item.trim().parse::<T>().map_err(serde::de::Error::custom))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize, Default)]
    struct Holder {
        #[serde(with = "super::comma_list")]
        items: Vec<String>,
        #[serde(with = "super::comma_list")]
        numbers: Vec<u32>,
    }

    #[test]
    fn test_comma_list_round_trip() {
        let holder = Holder {
            items: vec!["ATM".to_string(), "Ethernet".to_string()],
            numbers: vec![2048, 34525],
        };
        let json = serde_json::to_string(&holder).unwrap();
        assert!(json.contains("\"ATM,Ethernet\""));
        assert!(json.contains("\"2048,34525\""));
        let back: Holder = serde_json::from_str(&json).unwrap();
        assert_eq!(back, holder);
    }

    #[test]
    fn test_empty_list() {
        let holder: Holder = serde_json::from_str(r#"{"items":"","numbers":""}"#).unwrap();
        assert!(holder.items.is_empty());
        assert!(holder.numbers.is_empty());
    }

    #[test]
    fn test_whitespace_tolerated() {
        let holder: Holder =
            serde_json::from_str(r#"{"items":"a, b","numbers":"1, 2"}"#).unwrap();
        assert_eq!(holder.items, vec!["a", "b"]);
        assert_eq!(holder.numbers, vec![1, 2]);
    }
}
