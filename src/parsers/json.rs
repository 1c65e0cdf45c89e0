use crate::errors::ScoutError;
use crate::results::RawJobRecord;

/// Parse a JSON array of records, normalising placeholders to the sentinel
pub fn parse(json: &str) -> Result<Vec<RawJobRecord>, ScoutError> {
    let records: Vec<RawJobRecord> = serde_json::from_str(json)?;
    Ok(records.into_iter().map(RawJobRecord::normalized).collect())
}
