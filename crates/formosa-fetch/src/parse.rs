//! Response body classification.
//!
//! The endpoint answers a well-formed query with CSV rows and reports errors
//! by emitting an HTML fragment whose script raises `alert("<message>")`. The
//! content type does not distinguish the two, so the body is sniffed.

use std::sync::LazyLock;

use formosa_types::StatsTable;
use regex::bytes::Regex;

use crate::error::FetchError;

/// Matches the upstream alert idiom; the capture group is the message.
static ALERT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"alert\("(.*?)"\)"#).expect("alert pattern is valid"));

/// Alert message the exchange emits for an empty result.
const NO_DATA_MESSAGE: &[u8] = b"no data";

/// Classifies a response body as CSV rows or an upstream alert.
///
/// Precedence: table success, then the no-data sentinel, then any other alert
/// message, then a hard parse failure carrying the raw body. The alert sniff
/// runs before the CSV parse; under RFC-4180 rules an alert page would
/// otherwise read as a one-column table, and an embedded alert must win
/// regardless of the markup around it.
///
/// # Errors
///
/// - [`FetchError::NoData`] if the body carries `alert("no data")`.
/// - [`FetchError::Alert`] for any other alert message, verbatim.
/// - [`FetchError::Parse`] if the body is neither CSV nor an alert.
pub fn parse_body(body: &[u8]) -> Result<StatsTable, FetchError> {
    if let Some(captures) = ALERT_RE.captures(body) {
        let message = &captures[1];
        if message == NO_DATA_MESSAGE {
            return Err(FetchError::NoData);
        }
        return Err(FetchError::Alert(
            String::from_utf8_lossy(message).into_owned(),
        ));
    }

    parse_csv(body).ok_or_else(|| FetchError::Parse {
        body: String::from_utf8_lossy(body).into_owned(),
    })
}

/// Parses the body as RFC-4180 CSV, fields verbatim.
///
/// No header handling and no width validation: any row may have a differing
/// field count. An empty body yields an empty table.
fn parse_csv(body: &[u8]) -> Option<StatsTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.ok()?;
        rows.push(record.iter().map(str::to_owned).collect());
    }
    Some(StatsTable::from_rows(rows))
}
