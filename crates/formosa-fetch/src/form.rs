//! TAIFEX form contract for the contract statistics download endpoint.

use formosa_types::DateRange;

/// Download endpoint for futures contract statistics.
pub const ENDPOINT_URL: &str = "https://www.taifex.com.tw/enl/eng3/futContractsDateDown";

/// Commodity identifier for Mini-TAIEX futures.
pub const COMMODITY_ID: &str = "MXF";

// The endpoint requires an overall bounding range wider than any practical
// query, on top of the actual query dates. The values are part of the form
// contract, not caller input.
// TODO: reverify against the live service whether the bounding fields are
// still required.
const FIRST_DATE: &str = "2017/06/14 00:00";
const LAST_DATE: &str = "2020/06/14 00:00";

/// Date format the endpoint expects for the query fields.
const QUERY_DATE_FORMAT: &str = "%Y/%m/%d";

/// Builds the five-field form payload for a contract statistics query.
pub(crate) fn contract_stats_form(range: DateRange) -> [(&'static str, String); 5] {
    [
        ("firstDate", FIRST_DATE.to_owned()),
        ("lastDate", LAST_DATE.to_owned()),
        (
            "queryStartDate",
            range.start.format(QUERY_DATE_FORMAT).to_string(),
        ),
        (
            "queryEndDate",
            range.end.format(QUERY_DATE_FORMAT).to_string(),
        ),
        ("commodityId", COMMODITY_ID.to_owned()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2019, 1, 2).unwrap(),
            NaiveDate::from_ymd_opt(2019, 1, 31).unwrap(),
        )
    }

    #[test]
    fn test_form_has_five_fields() {
        let form = contract_stats_form(range());

        assert_eq!(form.len(), 5);
        assert_eq!(form[0], ("firstDate", "2017/06/14 00:00".to_owned()));
        assert_eq!(form[1], ("lastDate", "2020/06/14 00:00".to_owned()));
        assert_eq!(form[4], ("commodityId", "MXF".to_owned()));
    }

    #[test]
    fn test_query_dates_use_slash_format() {
        let form = contract_stats_form(range());

        assert_eq!(form[2], ("queryStartDate", "2019/01/02".to_owned()));
        assert_eq!(form[3], ("queryEndDate", "2019/01/31".to_owned()));
    }

    #[test]
    fn test_bounding_range_independent_of_query() {
        let narrow = contract_stats_form(DateRange::single_day(
            NaiveDate::from_ymd_opt(2019, 6, 14).unwrap(),
        ));

        assert_eq!(narrow[0].1, "2017/06/14 00:00");
        assert_eq!(narrow[1].1, "2020/06/14 00:00");
    }
}
