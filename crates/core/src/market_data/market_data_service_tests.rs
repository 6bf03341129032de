// Test cases for the in-memory market data provider and service.
#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::market_data::{
        FundProfile, InMemoryMarketDataProvider, MarketDataService, MarketDataServiceTrait,
    };
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn profile(code: &str, name: &str, category: Option<&str>, nav: Option<&str>) -> FundProfile {
        FundProfile {
            scheme_code: code.to_string(),
            scheme_name: name.to_string(),
            category: category.map(str::to_string),
            nav: nav.map(|n| n.parse().unwrap()),
            nav_date: NaiveDate::from_ymd_opt(2025, 6, 30),
        }
    }

    fn seeded_service() -> MarketDataService {
        let provider = InMemoryMarketDataProvider::with_profiles(vec![
            profile(
                "120503",
                "Axis Bluechip Fund - Direct Growth",
                Some("Equity"),
                Some("58.41"),
            ),
            profile(
                "118834",
                "HDFC Corporate Bond Fund",
                Some("Debt"),
                Some("31.02"),
            ),
            profile("149870", "Quant Small Cap Fund", None, None),
        ]);
        MarketDataService::new(Arc::new(provider))
    }

    #[tokio::test]
    async fn fund_details_returns_only_known_funds() {
        let service = seeded_service();

        let details = service
            .get_fund_details(&["120503".to_string(), "999999".to_string()])
            .await
            .unwrap();

        assert_eq!(details.len(), 1);
        let data = &details["120503"];
        assert_eq!(data.nav, Some(dec!(58.41)));
        assert_eq!(data.category.as_deref(), Some("Equity"));
        assert!(!details.contains_key("999999"));
    }

    #[tokio::test]
    async fn fund_details_carries_unknown_nav_and_category() {
        let service = seeded_service();

        let details = service
            .get_fund_details(&["149870".to_string()])
            .await
            .unwrap();

        let data = &details["149870"];
        assert_eq!(data.nav, None);
        assert_eq!(data.category, None);
    }

    #[tokio::test]
    async fn fund_details_with_no_ids_skips_provider() {
        let service = seeded_service();
        let details = service.get_fund_details(&[]).await.unwrap();
        assert!(details.is_empty());
    }

    #[tokio::test]
    async fn search_is_case_insensitive_over_code_and_name() {
        let service = seeded_service();

        let by_name = service.search_funds("bluechip").await.unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].scheme_code, "120503");

        let by_code = service.search_funds("1188").await.unwrap();
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].scheme_code, "118834");

        let blank = service.search_funds("   ").await.unwrap();
        assert!(blank.is_empty());
    }

    #[tokio::test]
    async fn upsert_replaces_profile_with_same_scheme_code() {
        let provider = InMemoryMarketDataProvider::new();
        provider
            .upsert_profile(profile("120503", "Axis Bluechip", Some("Equity"), Some("58")))
            .await;
        provider
            .upsert_profile(profile(
                "120503",
                "Axis Bluechip Fund - Direct Growth",
                Some("Equity"),
                Some("59.10"),
            ))
            .await;
        let service = MarketDataService::new(Arc::new(provider));

        let fetched = service.get_fund_profile("120503").await.unwrap().unwrap();
        assert_eq!(fetched.nav, Some(dec!(59.10)));
        assert_eq!(service.search_funds("axis").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn catalog_loads_from_json_snapshot() {
        let json = r#"[
            {
                "schemeCode": "120503",
                "schemeName": "Axis Bluechip Fund - Direct Growth",
                "category": "Equity",
                "nav": 58.41,
                "navDate": "2025-06-30"
            },
            {
                "schemeCode": "149870",
                "schemeName": "Quant Small Cap Fund",
                "category": null,
                "nav": null,
                "navDate": null
            }
        ]"#;

        let provider = InMemoryMarketDataProvider::from_catalog_json(json).unwrap();
        let service = MarketDataService::new(Arc::new(provider));

        let fetched = service.get_fund_profile("120503").await.unwrap().unwrap();
        assert_eq!(fetched.nav, Some(dec!(58.41)));
        assert_eq!(fetched.nav_date, NaiveDate::from_ymd_opt(2025, 6, 30));

        let sparse = service.get_fund_profile("149870").await.unwrap().unwrap();
        assert_eq!(sparse.nav, None);
        assert_eq!(sparse.category, None);
    }

    #[test]
    fn malformed_catalog_json_is_a_validation_error() {
        let result = InMemoryMarketDataProvider::from_catalog_json("{not json");
        assert!(matches!(result, Err(Error::Validation(_))));
    }
}
