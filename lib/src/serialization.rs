//! Serialization of fitted transformer parameters.
//!
//! Fitted state is extracted into plain parameter structs (column names,
//! fill values, scale factors) and written with `bincode`, so a fitted
//! imputer can be reused by a later process without refitting.

use std::error::Error;

/// A trait for parameter representations that can be serialized to and from bytes.
///
/// Implementors should contain only plain data, not references into a table.
pub trait SerializableParams: Sized {
    /// The error type returned during (de)serialization.
    type Error: Error + Send + Sync + 'static;

    /// Serialize the parameters into a byte buffer.
    fn to_bytes(&self) -> Result<Vec<u8>, Self::Error>;

    /// Deserialize the parameters from a byte buffer.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error>;
}

impl<T> SerializableParams for T
where
    T: serde::Serialize + for<'de> serde::Deserialize<'de>,
{
    type Error = bincode::Error;

    fn to_bytes(&self) -> Result<Vec<u8>, Self::Error> {
        bincode::serialize(self)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error> {
        bincode::deserialize(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Sentinel, Value};

    #[test]
    fn test_value_params_survive_bincode() {
        let params = vec![
            ("age".to_string(), Value::Number(54.5)),
            ("sex".to_string(), Value::text("M")),
        ];
        let bytes = params.to_bytes().unwrap();
        let restored = Vec::<(String, Value)>::from_bytes(&bytes).unwrap();
        assert_eq!(restored, params);
    }

    #[test]
    fn test_sentinel_survives_bincode() {
        let sentinel = Sentinel::Text("?".to_string());
        let bytes = sentinel.to_bytes().unwrap();
        assert_eq!(Sentinel::from_bytes(&bytes).unwrap(), sentinel);
    }

    #[test]
    fn test_truncated_bytes_fail() {
        let result = Vec::<(String, Value)>::from_bytes(&[0x02]);
        assert!(result.is_err());
    }
}
