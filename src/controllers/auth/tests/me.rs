#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test::TestRequest};

    use crate::{
        controllers::auth::me::me,
        providers::{
            database::schemas::user::{Role, User, USER_COLLECTION_NAME},
            identity::Identity,
        },
        tests::utils::{db_available, get_app_config, get_db, perform_integration_test, WebData},
    };

    #[actix_web::test]
    pub async fn should_fail_without_identity() {
        let app_config = get_app_config();
        let db = get_db(&app_config).await;

        let req = TestRequest::get()
            .insert_header(("Content-Type", "application/json"))
            .uri("/auth/me");

        let resp = perform_integration_test(
            me,
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
    }

    #[actix_web::test]
    pub async fn should_succeed_to_return_current_user_without_password() {
        if !db_available() {
            return;
        }
        let app_config = get_app_config();
        let db = get_db(&app_config).await;

        let email = format!("{}@example.com", bson::oid::ObjectId::new().to_hex());
        let now = bson::DateTime::now();
        let result = db
            .collection::<User>(USER_COLLECTION_NAME)
            .insert_one(User {
                id: None,
                name: "John Smith".to_string(),
                email: email.clone(),
                role: Role::User,
                password: "hashed".to_string(),
                reset_password_token: None,
                reset_password_expire: None,
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();
        let user_id = result.inserted_id.as_object_id().unwrap();

        let req = TestRequest::get()
            .insert_header(("Content-Type", "application/json"))
            .uri("/auth/me");

        let resp = perform_integration_test(
            me,
            req,
            WebData {
                config: Some(app_config),
                db: Some(db),
                auth: Some(Identity {
                    user_id,
                    role: Role::User,
                }),
            },
        )
        .await
        .unwrap();

        assert_eq!(resp.status, StatusCode::OK);
        let body = resp.body.unwrap();
        let data = body.get("data").unwrap();
        assert_eq!(data.get("email").unwrap(), email.as_str());
        assert!(data.get("password").is_none());
    }
}
