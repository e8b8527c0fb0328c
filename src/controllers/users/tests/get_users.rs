#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test::TestRequest};

    use crate::{
        controllers::users::get_users::get_users,
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

        let req = TestRequest::get().uri("/users");

        let resp = perform_integration_test(
            get_users,
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
    pub async fn should_fail_for_non_admin_roles() {
        let app_config = get_app_config();
        let db = get_db(&app_config).await;

        for role in [Role::User, Role::Publisher] {
            let req = TestRequest::get().uri("/users");

            let resp = perform_integration_test(
                get_users,
                req,
                WebData {
                    config: Some(app_config.clone()),
                    db: Some(db.clone()),
                    auth: Some(Identity {
                        user_id: bson::oid::ObjectId::new(),
                        role,
                    }),
                },
            )
            .await
            .unwrap();

            assert_eq!(resp.status, StatusCode::FORBIDDEN);
        }
    }

    #[actix_web::test]
    pub async fn should_never_return_credential_fields() {
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
                password: "hashed".to_string(),
                reset_password_token: Some("token-hash".to_string()),
                reset_password_expire: Some(now),
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();

        let req = TestRequest::get().uri(&format!("/users?email={}", email));

        let resp = perform_integration_test(
            get_users,
            req,
            WebData {
                config: Some(app_config),
                db: Some(db),
                auth: Some(Identity {
                    user_id: bson::oid::ObjectId::new(),
                    role: Role::Admin,
                }),
            },
        )
        .await
        .unwrap();

        assert_eq!(resp.status, StatusCode::OK);
        let body = resp.body.unwrap();
        assert_eq!(body.get("count").unwrap(), 1);
        let record = &body.get("data").unwrap().as_array().unwrap()[0];
        assert!(record.get("password").is_none());
        assert!(record.get("resetPasswordToken").is_none());
        assert!(record.get("resetPasswordExpire").is_none());
    }
}
