use serde::Deserialize;

/// Column description in the `FORMAT JSON` envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColumnMeta {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

/// Envelope returned by ClickHouse for `FORMAT JSON` queries.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonResult<T> {
    #[serde(default)]
    pub meta: Vec<ColumnMeta>,
    pub data: Vec<T>,
    #[serde(default)]
    pub rows: u64,
}

impl<T> JsonResult<T> {
    pub fn into_first(self) -> Option<T> {
        self.data.into_iter().next()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VersionRow {
    pub version: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminRow {
    /// `UInt8` boolean, 0 or 1
    pub is_admin: u8,
}

impl AdminRow {
    pub fn granted(&self) -> bool {
        self.is_admin != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_version_envelope() {
        let body = r#"{
            "meta": [{"name": "version", "type": "String"}],
            "data": [{"version": "24.8.4.13"}],
            "rows": 1,
            "statistics": {"elapsed": 0.0001, "rows_read": 1, "bytes_read": 1}
        }"#;
        let result: JsonResult<VersionRow> = serde_json::from_str(body).unwrap();
        assert_eq!(result.rows, 1);
        assert_eq!(result.meta[0].type_name, "String");
        assert_eq!(result.into_first().unwrap().version, "24.8.4.13");
    }

    #[test]
    fn test_decode_admin_flag() {
        let body = r#"{"meta": [], "data": [{"is_admin": 1}], "rows": 1}"#;
        let result: JsonResult<AdminRow> = serde_json::from_str(body).unwrap();
        assert!(result.into_first().unwrap().granted());

        let body = r#"{"data": [{"is_admin": 0}]}"#;
        let result: JsonResult<AdminRow> = serde_json::from_str(body).unwrap();
        assert!(!result.into_first().unwrap().granted());
    }

    #[test]
    fn test_empty_result_has_no_first_row() {
        let result: JsonResult<VersionRow> = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(result.into_first().is_none());
    }
}
