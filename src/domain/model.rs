use serde::{Serialize, Serializer};

/// 單一查詢請求：輸入檔中的一個電話號碼，原樣傳遞不做驗證
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub phone_number: String,
}

impl LookupRequest {
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailureKind {
    Timeout,
    NetworkError,
}

/// 一次 API 呼叫的原始結果
#[derive(Debug, Clone, PartialEq)]
pub enum RawLookupResult {
    Success {
        payload: serde_json::Value,
    },
    ApiFailure {
        http_status: u16,
        body: String,
    },
    TransportFailure {
        kind: TransportFailureKind,
        detail: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineType {
    Wireless,
    Landline,
}

/// 正規化後的輸出列，欄位順序即為輸出檔欄位順序
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarrierRecord {
    pub phone_number: String,
    #[serde(serialize_with = "serialize_flag")]
    pub success: bool,
    pub carrier: String,
    pub line_type: Option<LineType>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub raw_response: String,
    pub error: String,
}

impl CarrierRecord {
    pub const COLUMNS: [&'static str; 10] = [
        "phone_number",
        "success",
        "carrier",
        "line_type",
        "city",
        "state",
        "zip_code",
        "country",
        "raw_response",
        "error",
    ];

    /// 失敗列：除了原始回應與錯誤說明外全部留空
    pub fn failed(
        phone_number: impl Into<String>,
        raw_response: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            phone_number: phone_number.into(),
            success: false,
            carrier: String::new(),
            line_type: None,
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: String::new(),
            raw_response: raw_response.into(),
            error: error.into(),
        }
    }
}

fn serialize_flag<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *flag { "True" } else { "False" })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LookupSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}

impl LookupSummary {
    pub fn from_records(records: &[CarrierRecord]) -> Self {
        let successful = records.iter().filter(|r| r.success).count();
        Self {
            total: records.len(),
            successful,
            failed: records.len() - successful,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub records: Vec<CarrierRecord>,
    pub summary: LookupSummary,
}
