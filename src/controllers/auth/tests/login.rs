#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test::TestRequest};
    use serde_json::json;

    use crate::{
        controllers::auth::login::login,
        providers::database::schemas::user::{Role, User, USER_COLLECTION_NAME},
        tests::utils::{db_available, get_app_config, get_db, perform_integration_test, WebData},
    };

    #[actix_web::test]
    pub async fn should_fail_to_login_with_empty_fields() {
        let app_config = get_app_config();
        let db = get_db(&app_config).await;

        let req = TestRequest::post()
            .insert_header(("Content-Type", "application/json"))
            .uri("/auth/login")
            .set_json(json!({ "email": "", "password": "" }));

        let resp = perform_integration_test(
            login,
            req,
            WebData {
                config: Some(app_config),
                db: Some(db),
                auth: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(resp.status, StatusCode::BAD_REQUEST);
        let body = resp.body.unwrap();
        assert_eq!(
            body.get("error").unwrap(),
            "Please provide an email and password"
        );
    }

    #[actix_web::test]
    pub async fn should_fail_to_login_with_unknown_email() {
        if !db_available() {
            return;
        }
        let app_config = get_app_config();
        let db = get_db(&app_config).await;

        let req = TestRequest::post()
            .insert_header(("Content-Type", "application/json"))
            .uri("/auth/login")
            .set_json(json!({
                "email": format!("{}@example.com", bson::oid::ObjectId::new().to_hex()),
                "password": "123456"
            }));

        let resp = perform_integration_test(
            login,
            req,
            WebData {
                config: Some(app_config),
                db: Some(db),
                auth: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
        let body = resp.body.unwrap();
        assert_eq!(body.get("error").unwrap(), "Invalid credentials");
    }

    #[actix_web::test]
    pub async fn should_fail_to_login_with_wrong_password() {
        if !db_available() {
            return;
        }
        let app_config = get_app_config();
        let db = get_db(&app_config).await;

        let email = format!("{}@example.com", bson::oid::ObjectId::new().to_hex());
        let now = bson::DateTime::now();
        db.collection::<User>(USER_COLLECTION_NAME)
            .insert_one(User {
                id: None,
                name: "John Smith".to_string(),
                email: email.clone(),
                role: Role::User,
                password: bcrypt::hash("123456", bcrypt::DEFAULT_COST).unwrap(),
                reset_password_token: None,
                reset_password_expire: None,
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();

        let req = TestRequest::post()
            .insert_header(("Content-Type", "application/json"))
            .uri("/auth/login")
            .set_json(json!({ "email": email, "password": "wrong-password" }));

        let resp = perform_integration_test(
            login,
            req,
            WebData {
                config: Some(app_config),
                db: Some(db),
                auth: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
        let body = resp.body.unwrap();
        assert_eq!(body.get("error").unwrap(), "Invalid credentials");
    }

    #[actix_web::test]
    pub async fn should_succeed_to_login_with_valid_credentials() {
        if !db_available() {
            return;
        }
        let app_config = get_app_config();
        let db = get_db(&app_config).await;

        let email = format!("{}@example.com", bson::oid::ObjectId::new().to_hex());
        let now = bson::DateTime::now();
        db.collection::<User>(USER_COLLECTION_NAME)
            .insert_one(User {
                id: None,
                name: "John Smith".to_string(),
                email: email.clone(),
                role: Role::User,
                password: bcrypt::hash("123456", bcrypt::DEFAULT_COST).unwrap(),
                reset_password_token: None,
                reset_password_expire: None,
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();

        let req = TestRequest::post()
            .insert_header(("Content-Type", "application/json"))
            .uri("/auth/login")
            .set_json(json!({ "email": email, "password": "123456" }));

        let resp = perform_integration_test(
            login,
            req,
            WebData {
                config: Some(app_config),
                db: Some(db),
                auth: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(resp.status, StatusCode::OK);
        let body = resp.body.unwrap();
        assert_eq!(body.get("success").unwrap(), true);
        assert!(!body.get("token").unwrap().as_str().unwrap().is_empty());
    }
}
