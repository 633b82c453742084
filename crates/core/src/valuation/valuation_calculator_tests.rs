#[cfg(test)]
mod tests {
    use crate::holdings::Holding;
    use crate::quotes::PriceTable;
    use crate::valuation::price_snapshot;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_ledger_values_at_zero_with_alert() {
        let snapshot = price_snapshot(&[], &PriceTable::fixed());
        assert!(snapshot.holdings.is_empty());
        assert_eq!(snapshot.total_value, Decimal::ZERO);
        assert!(snapshot.low_value_alert);
    }

    #[test]
    fn single_holding_multiplies_price_by_quantity() {
        let holdings = vec![Holding::new("AAPL", 2)];
        let table = PriceTable::from_pairs([("AAPL", dec!(150))]);

        let snapshot = price_snapshot(&holdings, &table);
        assert_eq!(snapshot.holdings.len(), 1);
        assert_eq!(snapshot.holdings[0].price, dec!(150));
        assert_eq!(snapshot.holdings[0].total, dec!(300));
        assert_eq!(snapshot.total_value, dec!(300));
        assert!(!snapshot.low_value_alert);
    }

    #[test]
    fn totals_sum_across_holdings() {
        let holdings = vec![Holding::new("AAPL", 2), Holding::new("GOOGL", 1)];
        let table = PriceTable::from_pairs([("AAPL", dec!(150)), ("GOOGL", dec!(200))]);

        let snapshot = price_snapshot(&holdings, &table);
        assert_eq!(snapshot.total_value, dec!(500));
        assert!(!snapshot.low_value_alert);
    }

    #[test]
    fn unknown_symbols_contribute_zero() {
        let holdings = vec![Holding::new("ZZZZ", 5)];
        let snapshot = price_snapshot(&holdings, &PriceTable::fixed());
        assert_eq!(snapshot.holdings[0].price, Decimal::ZERO);
        assert_eq!(snapshot.holdings[0].total, Decimal::ZERO);
        assert_eq!(snapshot.total_value, Decimal::ZERO);
        assert!(snapshot.low_value_alert);
    }

    #[test]
    fn low_value_alert_fires_below_threshold() {
        let holdings = vec![Holding::new("PENNY", 2)];
        let table = PriceTable::from_pairs([("PENNY", dec!(25))]);

        let snapshot = price_snapshot(&holdings, &table);
        assert_eq!(snapshot.total_value, dec!(50));
        assert!(snapshot.low_value_alert);
    }

    #[test]
    fn low_value_alert_is_strict_at_the_threshold() {
        let holdings = vec![Holding::new("EVEN", 2)];
        let table = PriceTable::from_pairs([("EVEN", dec!(50))]);

        let snapshot = price_snapshot(&holdings, &table);
        assert_eq!(snapshot.total_value, dec!(100));
        assert!(!snapshot.low_value_alert);
    }

    #[test]
    fn snapshot_preserves_ledger_order() {
        let holdings = vec![
            Holding::new("TSLA", 1),
            Holding::new("AAPL", 1),
            Holding::new("GOOGL", 1),
        ];
        let snapshot = price_snapshot(&holdings, &PriceTable::fixed());
        let symbols: Vec<&str> = snapshot
            .holdings
            .iter()
            .map(|p| p.symbol.as_str())
            .collect();
        assert_eq!(symbols, vec!["TSLA", "AAPL", "GOOGL"]);
    }

    #[test]
    fn snapshot_serializes_with_wire_field_names() {
        let holdings = vec![Holding::new("AAPL", 2)];
        let table = PriceTable::from_pairs([("AAPL", dec!(150))]);

        let json = serde_json::to_value(price_snapshot(&holdings, &table)).unwrap();
        assert_eq!(json["holdings"][0]["name"], "AAPL");
        assert_eq!(json["totalValue"], serde_json::json!(300.0));
        assert_eq!(json["lowValueAlert"], serde_json::json!(false));
    }
}
