//! Strategy CSV codec.
//!
//! A header row followed by one comma-separated row per leg:
//!
//! ```text
//! type,position,option_type,strike_or_entry,premium
//! option,long,call,100.0,5.0
//! stock,buy,,95.0,0
//! ```

use std::fmt::Write as _;

use crate::domain::strategy::{LegRecord, Portfolio, StrategyError};

/// Header row of a strategy file.
pub const STRATEGY_HEADER: &str = "type,position,option_type,strike_or_entry,premium";

/// Render a portfolio as strategy CSV, options first.
#[must_use]
pub fn serialize_portfolio(portfolio: &Portfolio) -> String {
    let mut csv = String::from(STRATEGY_HEADER);
    csv.push('\n');

    for record in portfolio.to_records() {
        let _ = writeln!(csv, "{}", record.fields().join(","));
    }

    csv
}

/// Parse strategy CSV into a new portfolio.
///
/// Blank lines are skipped and fields are trimmed. The first non-blank line
/// must be the header. The first bad row aborts the whole parse with a
/// `MalformedRecord` carrying its 1-based line number.
pub fn deserialize_portfolio(text: &str) -> Result<Portfolio, StrategyError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let Some((header_line, header)) = lines.next() else {
        return Err(StrategyError::malformed(1, "missing header row"));
    };
    let columns: Vec<&str> = header.split(',').map(str::trim).collect();
    if columns != LegRecord::COLUMNS {
        return Err(StrategyError::malformed(
            header_line,
            format!("expected header '{STRATEGY_HEADER}', got '{header}'"),
        ));
    }

    let mut portfolio = Portfolio::new();
    for (line_no, line) in lines {
        let record = parse_row(line_no, line)?;
        let leg = record.to_leg().map_err(|e| e.at_line(line_no))?;
        portfolio.push(leg);
    }

    Ok(portfolio)
}

fn parse_row(line_no: usize, line: &str) -> Result<LegRecord, StrategyError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let fields: [&str; 5] = fields.as_slice().try_into().map_err(|_| {
        StrategyError::malformed(
            line_no,
            format!("expected 5 fields, found {}", fields.len()),
        )
    })?;
    Ok(LegRecord::from_fields(fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::strategy::{OptionLeg, StockLeg};

    fn sample() -> Portfolio {
        let mut portfolio = Portfolio::new();
        portfolio.add_option(OptionLeg::long_call(100.0, 5.0).unwrap());
        portfolio.add_stock(StockLeg::buy(95.0).unwrap());
        portfolio.add_option(OptionLeg::short_put(90.5, 1.25).unwrap());
        portfolio
    }

    #[test]
    fn serialize_writes_header_and_rows() {
        let csv = serialize_portfolio(&sample());
        assert_eq!(
            csv,
            "type,position,option_type,strike_or_entry,premium\n\
             option,long,call,100.0,5.0\n\
             option,short,put,90.5,1.25\n\
             stock,buy,,95.0,0\n"
        );
    }

    #[test]
    fn serialize_empty_portfolio_is_header_only() {
        let csv = serialize_portfolio(&Portfolio::new());
        assert_eq!(csv, format!("{STRATEGY_HEADER}\n"));
        assert!(deserialize_portfolio(&csv).unwrap().is_empty());
    }

    #[test]
    fn round_trip() {
        let portfolio = sample();
        let parsed = deserialize_portfolio(&serialize_portfolio(&portfolio)).unwrap();
        assert_eq!(parsed, portfolio);
    }

    #[test]
    fn tolerates_blank_lines_whitespace_and_crlf() {
        let text = "\r\ntype, position, option_type, strike_or_entry, premium\r\n\
                    \r\n\
                    option, short, call, 110, 2\r\n\
                    stock, sell, , 50, 0\r\n";
        let portfolio = deserialize_portfolio(text).unwrap();
        assert_eq!(portfolio.len(), 2);
        assert_eq!(portfolio.options()[0], OptionLeg::short_call(110.0, 2.0).unwrap());
        assert_eq!(portfolio.stocks()[0], StockLeg::sell(50.0).unwrap());
    }

    #[test]
    fn unknown_type_reports_line() {
        let text = "type,position,option_type,strike_or_entry,premium\n\
                    option,long,call,100,5\n\
                    bond,long,,100,0\n";
        let err = deserialize_portfolio(text).unwrap_err();
        assert!(matches!(err, StrategyError::MalformedRecord { line: 3, .. }));
        assert!(err.to_string().contains("bond"));
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        let text = "type,position,option_type,strike_or_entry,premium\n\
                    option,long,call,100\n";
        let err = deserialize_portfolio(text).unwrap_err();
        assert_eq!(
            err,
            StrategyError::malformed(2, "expected 5 fields, found 4")
        );
    }

    #[test]
    fn missing_or_wrong_header_is_malformed() {
        let err = deserialize_portfolio("").unwrap_err();
        assert!(matches!(err, StrategyError::MalformedRecord { line: 1, .. }));

        let err = deserialize_portfolio("option,long,call,100,5\n").unwrap_err();
        assert!(err.to_string().contains("expected header"));
    }

    #[test]
    fn unparseable_number_is_malformed() {
        let text = "type,position,option_type,strike_or_entry,premium\n\
                    option,long,put,one hundred,5\n";
        let err = deserialize_portfolio(text).unwrap_err();
        assert!(matches!(err, StrategyError::MalformedRecord { line: 2, .. }));
    }
}
