// Test cases for HoldingsService over the in-memory repository.
#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::holdings::{
        HoldingUpdate, HoldingsService, HoldingsServiceTrait, InMemoryHoldingsRepository,
        NewHolding,
    };
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn service() -> HoldingsService {
        HoldingsService::new(Arc::new(InMemoryHoldingsRepository::new()))
    }

    fn new_holding(fund_id: &str) -> NewHolding {
        NewHolding {
            fund_id: fund_id.to_string(),
            invested_amount: dec!(1000),
            units: dec!(100),
            purchase_date: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids_and_timestamps() {
        let service = service();

        let first = service.create_holding(new_holding("120503")).await.unwrap();
        let second = service.create_holding(new_holding("118834")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.created_at, first.updated_at);
        assert_eq!(first.fund_id, "120503");
        assert_eq!(first.invested_amount, dec!(1000));
        assert_eq!(first.units, dec!(100));
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let service = service();

        for fund_id in ["F1", "F2", "F3"] {
            service.create_holding(new_holding(fund_id)).await.unwrap();
        }

        let holdings = service.list_holdings().await.unwrap();
        let fund_ids: Vec<&str> = holdings.iter().map(|h| h.fund_id.as_str()).collect();
        assert_eq!(fund_ids, vec!["F1", "F2", "F3"]);
    }

    #[tokio::test]
    async fn get_returns_created_holding() {
        let service = service();
        let created = service.create_holding(new_holding("F1")).await.unwrap();

        let fetched = service.get_holding(&created.id).await.unwrap();
        assert_eq!(fetched, Some(created));

        let missing = service.get_holding("no-such-id").await.unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_created_at() {
        let service = service();
        let created = service.create_holding(new_holding("F1")).await.unwrap();

        let updated = service
            .update_holding(
                &created.id,
                HoldingUpdate {
                    fund_id: "F2".to_string(),
                    invested_amount: dec!(1500),
                    units: dec!(120.5),
                    purchase_date: NaiveDate::from_ymd_opt(2024, 1, 15),
                    notes: Some("SIP top-up".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.fund_id, "F2");
        assert_eq!(updated.invested_amount, dec!(1500));
        assert_eq!(updated.units, dec!(120.5));
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn update_unknown_id_returns_not_found() {
        let service = service();

        let result = service
            .update_holding(
                "missing",
                HoldingUpdate {
                    fund_id: "F1".to_string(),
                    invested_amount: dec!(1),
                    units: dec!(1),
                    purchase_date: None,
                    notes: None,
                },
            )
            .await;

        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_removes_holding() {
        let service = service();
        let created = service.create_holding(new_holding("F1")).await.unwrap();

        let deleted = service.delete_holding(&created.id).await.unwrap();
        assert_eq!(deleted, 1);
        assert!(service.list_holdings().await.unwrap().is_empty());

        let result = service.delete_holding(&created.id).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn create_rejects_blank_fund_id() {
        let service = service();
        let mut input = new_holding("  ");

        let result = service.create_holding(input.clone()).await;
        assert!(matches!(result, Err(Error::Validation(_))));

        input.fund_id = String::new();
        let result = service.create_holding(input).await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn create_rejects_non_positive_amounts() {
        let service = service();

        let mut input = new_holding("F1");
        input.invested_amount = dec!(0);
        assert!(matches!(
            service.create_holding(input).await,
            Err(Error::Validation(_))
        ));

        let mut input = new_holding("F1");
        input.units = dec!(-5);
        assert!(matches!(
            service.create_holding(input).await,
            Err(Error::Validation(_))
        ));
    }

    #[tokio::test]
    async fn update_rejects_invalid_input_before_touching_store() {
        let service = service();
        let created = service.create_holding(new_holding("F1")).await.unwrap();

        let result = service
            .update_holding(
                &created.id,
                HoldingUpdate {
                    fund_id: "F1".to_string(),
                    invested_amount: dec!(-1),
                    units: dec!(1),
                    purchase_date: None,
                    notes: None,
                },
            )
            .await;
        assert!(matches!(result, Err(Error::Validation(_))));

        // Stored holding is untouched
        let stored = service.get_holding(&created.id).await.unwrap().unwrap();
        assert_eq!(stored.invested_amount, dec!(1000));
    }
}
