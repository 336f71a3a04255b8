use tracing::info;

// Adds automatic logging to tests
mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub fn funds_body() -> serde_json::Value {
        serde_json::json!({
            "pagination": { "page": 1, "limit": 1000, "totalFunds": 2, "totalPages": 1 },
            "data": [
                {
                    "id": "1",
                    "name": "Fondo Global Acciones",
                    "isin": "ES0000000001",
                    "category": "GLOBAL",
                    "currency": "EUR",
                    "value": 100.0,
                    "div": "Acc",
                    "profitability": { "YTD": 3.2, "oneYear": 7.5 },
                    "ter": "0.35%",
                    "riskLevel": "4/7"
                },
                {
                    "id": "2",
                    "name": "Fondo Tecnología Plus",
                    "isin": "ES0000000002",
                    "category": "TECH",
                    "currency": "USD",
                    "value": 250.0,
                    "div": "Dist",
                    "ter": "0.50%",
                    "riskLevel": "6/7"
                }
            ]
        })
    }

    pub fn portfolio_body() -> serde_json::Value {
        serde_json::json!({
            "data": [
                { "id": "1", "name": "Fondo Global Acciones", "quantity": 2.5, "totalValue": 250.0 },
                { "id": "999", "quantity": 1.0, "totalValue": 80.0 }
            ]
        })
    }

    pub async fn create_mock_api() -> MockServer {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/funds"))
            .respond_with(ResponseTemplate::new(200).set_body_json(funds_body()))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/portfolio"))
            .respond_with(ResponseTemplate::new(200).set_body_json(portfolio_body()))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/funds/1/buy"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })))
            .mount(&server)
            .await;

        server
    }

    pub fn write_config(server_uri: &str) -> tempfile::NamedTempFile {
        let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        let config_content = format!(
            r#"
api:
  base_url: "{server_uri}"
currency: "EUR"
items_per_page: 10
"#
        );
        std::fs::write(config_file.path(), config_content).expect("Failed to write config file");
        config_file
    }
}

#[test_log::test(tokio::test)]
async fn test_funds_view_with_mock_api() {
    let server = test_utils::create_mock_api().await;
    let config_file = test_utils::write_config(&server.uri());

    let command = fondo::AppCommand::Funds(fondo::FundsViewOptions {
        sort: Some(fondo::api::FundSortKey::Name),
        descending: false,
        page: 1,
        items_per_page: Some(5),
    });
    let result = fondo::run_command(command, config_file.path().to_str()).await;
    assert!(result.is_ok(), "Funds view failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_portfolio_view_with_mock_api() {
    let server = test_utils::create_mock_api().await;
    let config_file = test_utils::write_config(&server.uri());

    info!("Running portfolio view against {}", server.uri());
    let result = fondo::run_command(fondo::AppCommand::Portfolio, config_file.path().to_str()).await;
    assert!(
        result.is_ok(),
        "Portfolio view failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_buy_flow_with_mock_api() {
    let server = test_utils::create_mock_api().await;
    let config_file = test_utils::write_config(&server.uri());

    let command = fondo::AppCommand::Buy {
        fund_id: "1".to_string(),
        amount: 500.0,
    };
    let result = fondo::run_command(command, config_file.path().to_str()).await;
    assert!(result.is_ok(), "Buy flow failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_buy_unknown_fund_fails() {
    let server = test_utils::create_mock_api().await;
    let config_file = test_utils::write_config(&server.uri());

    let command = fondo::AppCommand::Buy {
        fund_id: "does-not-exist".to_string(),
        amount: 500.0,
    };
    let result = fondo::run_command(command, config_file.path().to_str()).await;
    assert!(result.is_err());
}

#[test_log::test(tokio::test)]
async fn test_buy_rejected_by_backend_fails() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    let server = test_utils::create_mock_api().await;
    Mock::given(method("POST"))
        .and(path("/api/funds/2/buy"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({ "error": "Fondos insuficientes" })),
        )
        .mount(&server)
        .await;
    let config_file = test_utils::write_config(&server.uri());

    let command = fondo::AppCommand::Buy {
        fund_id: "2".to_string(),
        amount: 500.0,
    };
    let result = fondo::run_command(command, config_file.path().to_str()).await;
    let err = result.expect_err("backend rejection should propagate");
    assert_eq!(err.to_string(), "Fondos insuficientes");
}

#[test_log::test(tokio::test)]
async fn test_missing_config_file_fails() {
    let result = fondo::run_command(
        fondo::AppCommand::Portfolio,
        Some("/nonexistent/fondo-config.yaml"),
    )
    .await;
    assert!(result.is_err());
}

#[test_log::test(tokio::test)]
async fn test_funds_view_handles_empty_catalog() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/funds"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "pagination": { "page": 1, "limit": 1000, "totalFunds": 0, "totalPages": 0 },
            "data": []
        })))
        .mount(&server)
        .await;
    let config_file = test_utils::write_config(&server.uri());

    let command = fondo::AppCommand::Funds(fondo::FundsViewOptions::default());
    let result = fondo::run_command(command, config_file.path().to_str()).await;
    assert!(result.is_ok(), "Empty funds view failed: {:?}", result.err());
}
