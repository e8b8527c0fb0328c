#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test::TestRequest};
    use serde_json::json;

    use crate::{
        controllers::reviews::create_review::create_review,
        providers::{
            database::schemas::bootcamp::{Bootcamp, BOOTCAMP_COLLECTION_NAME},
            database::schemas::user::Role,
            identity::Identity,
        },
        tests::utils::{db_available, get_app_config, get_db, perform_integration_test, WebData},
    };

    async fn insert_bootcamp(db: &mongodb::Database) -> bson::oid::ObjectId {
        let now = bson::DateTime::now();
        let result = db
            .collection::<Bootcamp>(BOOTCAMP_COLLECTION_NAME)
            .insert_one(Bootcamp {
                id: None,
                name: "Devworks".to_string(),
                description: "Full stack training".to_string(),
                website: None,
                phone: None,
                address: "Boston".to_string(),
                location: None,
                careers: vec![],
                housing: false,
                job_assistance: false,
                job_guarantee: false,
                photo: None,
                average_cost: None,
                average_rating: None,
                user: bson::oid::ObjectId::new(),
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();
        result.inserted_id.as_object_id().unwrap()
    }

    #[actix_web::test]
    pub async fn should_fail_for_the_publisher_role() {
        let app_config = get_app_config();
        let db = get_db(&app_config).await;

        let req = TestRequest::post()
            .insert_header(("Content-Type", "application/json"))
            .uri(&format!(
                "/bootcamps/{}/reviews",
                bson::oid::ObjectId::new()
            ))
            .set_json(json!({ "title": "Great", "text": "Loved it", "rating": 8 }));

        let resp = perform_integration_test(
            create_review,
            req,
            WebData {
                config: Some(app_config),
                db: Some(db),
                auth: Some(Identity {
                    user_id: bson::oid::ObjectId::new(),
                    role: Role::Publisher,
                }),
            },
        )
        .await
        .unwrap();

        assert_eq!(resp.status, StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    pub async fn should_fail_with_an_out_of_range_rating() {
        let app_config = get_app_config();
        let db = get_db(&app_config).await;

        let req = TestRequest::post()
            .insert_header(("Content-Type", "application/json"))
            .uri(&format!(
                "/bootcamps/{}/reviews",
                bson::oid::ObjectId::new()
            ))
            .set_json(json!({ "title": "Great", "text": "Loved it", "rating": 11 }));

        let resp = perform_integration_test(
            create_review,
            req,
            WebData {
                config: Some(app_config),
                db: Some(db),
                auth: Some(Identity {
                    user_id: bson::oid::ObjectId::new(),
                    role: Role::User,
                }),
            },
        )
        .await
        .unwrap();

        assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    pub async fn should_reject_a_second_review_from_the_same_user() {
        if !db_available() {
            return;
        }
        let app_config = get_app_config();
        let db = get_db(&app_config).await;
        crate::providers::database::schemas::review::setup_review_indexes(&db)
            .await
            .unwrap();

        let bootcamp_id = insert_bootcamp(&db).await;
        let user_id = bson::oid::ObjectId::new();
        let payload = json!({ "title": "Great", "text": "Loved it", "rating": 8 });

        for expected in [StatusCode::CREATED, StatusCode::BAD_REQUEST] {
            let req = TestRequest::post()
                .insert_header(("Content-Type", "application/json"))
                .uri(&format!("/bootcamps/{}/reviews", bootcamp_id))
                .set_json(payload.clone());

            let resp = perform_integration_test(
                create_review,
                req,
                WebData {
                    config: Some(app_config.clone()),
                    db: Some(db.clone()),
                    auth: Some(Identity {
                        user_id,
                        role: Role::User,
                    }),
                },
            )
            .await
            .unwrap();
            assert_eq!(resp.status, expected);
        }
    }

    #[actix_web::test]
    pub async fn should_create_a_review_and_refresh_the_average_rating() {
        if !db_available() {
            return;
        }
        let app_config = get_app_config();
        let db = get_db(&app_config).await;

        let bootcamp_id = insert_bootcamp(&db).await;
        for rating in [6, 9] {
            let req = TestRequest::post()
                .insert_header(("Content-Type", "application/json"))
                .uri(&format!("/bootcamps/{}/reviews", bootcamp_id))
                .set_json(json!({ "title": "Great", "text": "Loved it", "rating": rating }));

            let resp = perform_integration_test(
                create_review,
                req,
                WebData {
                    config: Some(app_config.clone()),
                    db: Some(db.clone()),
                    auth: Some(Identity {
                        user_id: bson::oid::ObjectId::new(),
                        role: Role::User,
                    }),
                },
            )
            .await
            .unwrap();
            assert_eq!(resp.status, StatusCode::CREATED);
        }

        // ratings {6, 9} average to 7.5, stored unrounded
        let bootcamp = db
            .collection::<Bootcamp>(BOOTCAMP_COLLECTION_NAME)
            .find_one(bson::doc! { "_id": bootcamp_id })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(bootcamp.average_rating, Some(7.5));
    }
}
