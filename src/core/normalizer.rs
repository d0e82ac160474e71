//! 將 API 回應（成功或失敗）整理成固定欄位的 `CarrierRecord`。
//!
//! 回應外層的 `status` 表示 API 呼叫是否成功，`payload[0].status` 則是號碼本身的查詢
//! 狀態。輸出的 `success` 欄位取自後者，兩者刻意分開計算。

use crate::core::{CarrierRecord, LineType, LookupRequest, RawLookupResult, TransportFailureKind};
use serde_json::{Map, Value};

pub fn normalize(request: &LookupRequest, result: &RawLookupResult) -> CarrierRecord {
    match result {
        RawLookupResult::Success { payload } => normalize_payload(request, payload),
        RawLookupResult::ApiFailure { http_status, body } => CarrierRecord::failed(
            request.phone_number.as_str(),
            body.as_str(),
            format!("HTTP {}", http_status),
        ),
        RawLookupResult::TransportFailure { kind, detail } => {
            let error = match kind {
                TransportFailureKind::Timeout => "Timeout".to_string(),
                TransportFailureKind::NetworkError => detail.clone(),
            };
            CarrierRecord::failed(request.phone_number.as_str(), detail.as_str(), error)
        }
    }
}

fn normalize_payload(request: &LookupRequest, payload: &Value) -> CarrierRecord {
    let carrier_data = extract_carrier_data(payload);

    // 沒有 network 欄位時才退回 company
    let carrier = carrier_data
        .get("network")
        .or_else(|| carrier_data.get("company"))
        .map(render)
        .unwrap_or_default();

    // 無法判斷時一律視為市話，不另設 unknown
    let line_type = if carrier_data.get("wireless").is_some_and(is_truthy) {
        LineType::Wireless
    } else {
        LineType::Landline
    };

    CarrierRecord {
        phone_number: request.phone_number.clone(),
        success: carrier_data.get("status").is_some_and(is_truthy),
        carrier,
        line_type: Some(line_type),
        city: field(&carrier_data, "city"),
        state: field(&carrier_data, "state"),
        zip_code: field(&carrier_data, "zipCode"),
        country: field(&carrier_data, "country"),
        raw_response: payload.to_string(),
        error: field(&carrier_data, "error"),
    }
}

/// 取出實際的號碼資料；結構不符時回傳空 map
fn extract_carrier_data(payload: &Value) -> Map<String, Value> {
    let Some(envelope) = payload.as_object() else {
        return Map::new();
    };

    match envelope.get("status") {
        Some(Value::Bool(true)) => envelope
            .get("payload")
            .and_then(Value::as_array)
            .and_then(|items| items.first())
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default(),
        Some(Value::Bool(false)) => {
            let error = envelope
                .get("error")
                .cloned()
                .unwrap_or_else(|| Value::String(String::new()));
            let mut data = Map::new();
            data.insert("error".to_string(), error);
            data
        }
        _ => Map::new(),
    }
}

fn field(data: &Map<String, Value>, key: &str) -> String {
    data.get(key).map(render).unwrap_or_default()
}

/// 非字串值輸出為 JSON 文字（`true`、`1`），與舊版工具的 `True` 寫法不同
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
