use trip_core::currency::{ConversionTable, Currency, APPROX_RATES};

#[test]
fn same_currency_conversion_is_exact_for_every_currency() {
    let table = ConversionTable::approx();
    let amount = 123.456_789;
    for currency in Currency::ALL_CODES {
        assert_eq!(table.convert(amount, currency, currency), amount);
    }
}

#[test]
fn round_trip_law_holds_within_tolerance() {
    let table = ConversionTable::approx();
    let amount = 250.0;
    for from in Currency::ALL_CODES {
        for to in Currency::ALL_CODES {
            let there = table.convert(amount, from, to);
            let back = table.convert(there, to, from);
            assert!(
                (back - amount).abs() < 1e-9,
                "{from} -> {to} round trip drifted: {back}"
            );
        }
    }
}

#[test]
fn currency_missing_from_table_converts_one_to_one() {
    // EUR has no rate here, so conversions touching it pass through.
    let sparse = ConversionTable::with_rates([(Currency::Try, 1.0), (Currency::Usd, 34.5)]);
    assert_eq!(sparse.convert(75.0, Currency::Eur, Currency::Try), 75.0);
    assert_eq!(sparse.convert(75.0, Currency::Try, Currency::Eur), 75.0);
    // A fully known pair still converts normally.
    let usd_to_try = sparse.convert(10.0, Currency::Usd, Currency::Try);
    assert!((usd_to_try - 345.0).abs() < 1e-9);
}

#[test]
fn builtin_table_converts_try_to_eur() {
    let in_eur = APPROX_RATES.convert(2000.0, Currency::Try, Currency::Eur);
    assert!((in_eur - 2000.0 / 36.5).abs() < 1e-9);
}

#[test]
fn currency_codes_parse_case_insensitively() {
    assert_eq!(Currency::try_from("eur").unwrap(), Currency::Eur);
    assert_eq!(Currency::try_from(" TRY ").unwrap(), Currency::Try);
    assert!(Currency::try_from("XYZ").is_err());
}
