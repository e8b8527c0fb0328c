#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test::TestRequest};
    use serde_json::json;

    use crate::{
        controllers::auth::forgot_password::forgot_password,
        tests::utils::{db_available, get_app_config, get_db, perform_integration_test, WebData},
    };

    #[actix_web::test]
    pub async fn should_fail_with_unknown_email() {
        if !db_available() {
            return;
        }
        let app_config = get_app_config();
        let db = get_db(&app_config).await;

        let req = TestRequest::post()
            .insert_header(("Content-Type", "application/json"))
            .uri("/auth/forgotpassword")
            .set_json(json!({
                "email": format!("{}@example.com", bson::oid::ObjectId::new().to_hex())
            }));

        let resp = perform_integration_test(
            forgot_password,
            req,
            WebData {
                config: Some(app_config),
                db: Some(db),
                auth: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(resp.status, StatusCode::NOT_FOUND);
    }
}
