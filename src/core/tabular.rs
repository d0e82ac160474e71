use crate::core::{CarrierRecord, LookupRequest};
use crate::utils::error::{LookupError, Result};

pub const PHONE_NUMBER_COLUMN: &str = "phone_number";

/// 讀取輸入 CSV，每一列產生一個請求，順序與檔案相同；其他欄位忽略
pub fn parse_requests(data: &[u8]) -> Result<Vec<LookupRequest>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(data);

    let column = reader
        .headers()?
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}') == PHONE_NUMBER_COLUMN)
        .ok_or_else(|| LookupError::ValidationError {
            message: format!("Input has no '{}' column", PHONE_NUMBER_COLUMN),
        })?;

    let mut requests = Vec::new();
    for row in reader.records() {
        let row = row?;
        let phone = row.get(column).unwrap_or_default();
        requests.push(LookupRequest::new(phone));
    }

    Ok(requests)
}

/// 輸出 CSV；即使沒有任何記錄也會寫出標題列
pub fn render_records(records: &[CarrierRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(CarrierRecord::COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }

    writer
        .into_inner()
        .map_err(|e| LookupError::IoError(e.into_error()))
}
