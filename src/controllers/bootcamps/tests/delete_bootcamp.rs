#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test::TestRequest};

    use crate::{
        controllers::bootcamps::delete_bootcamp::delete_bootcamp,
        providers::{
            database::schemas::bootcamp::{Bootcamp, BOOTCAMP_COLLECTION_NAME},
            database::schemas::user::Role,
            identity::Identity,
        },
        tests::utils::{db_available, get_app_config, get_db, perform_integration_test, WebData},
    };

    fn bootcamp_fixture(owner: bson::oid::ObjectId) -> Bootcamp {
        let now = bson::DateTime::now();
        Bootcamp {
            id: None,
            name: "Devworks".to_string(),
            description: "Full stack training".to_string(),
            website: None,
            phone: None,
            address: "Boston".to_string(),
            location: None,
            careers: vec!["Web Development".to_string()],
            housing: false,
            job_assistance: false,
            job_guarantee: false,
            photo: None,
            average_cost: None,
            average_rating: None,
            user: owner,
            created_at: now,
            updated_at: now,
        }
    }

    #[actix_web::test]
    pub async fn should_fail_without_identity() {
        let app_config = get_app_config();
        let db = get_db(&app_config).await;

        let req =
            TestRequest::delete().uri(&format!("/bootcamps/{}", bson::oid::ObjectId::new()));

        let resp = perform_integration_test(
            delete_bootcamp,
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
    pub async fn should_fail_for_a_non_owner() {
        if !db_available() {
            return;
        }
        let app_config = get_app_config();
        let db = get_db(&app_config).await;

        let result = db
            .collection::<Bootcamp>(BOOTCAMP_COLLECTION_NAME)
            .insert_one(bootcamp_fixture(bson::oid::ObjectId::new()))
            .await
            .unwrap();
        let bootcamp_id = result.inserted_id.as_object_id().unwrap();

        let req = TestRequest::delete().uri(&format!("/bootcamps/{}", bootcamp_id));

        let resp = perform_integration_test(
            delete_bootcamp,
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
    pub async fn should_succeed_for_the_owner() {
        if !db_available() {
            return;
        }
        let app_config = get_app_config();
        let db = get_db(&app_config).await;

        let owner = bson::oid::ObjectId::new();
        let collection = db.collection::<Bootcamp>(BOOTCAMP_COLLECTION_NAME);
        let result = collection
            .insert_one(bootcamp_fixture(owner))
            .await
            .unwrap();
        let bootcamp_id = result.inserted_id.as_object_id().unwrap();

        let req = TestRequest::delete().uri(&format!("/bootcamps/{}", bootcamp_id));

        let resp = perform_integration_test(
            delete_bootcamp,
            req,
            WebData {
                config: Some(app_config),
                db: Some(db.clone()),
                auth: Some(Identity {
                    user_id: owner,
                    role: Role::Publisher,
                }),
            },
        )
        .await
        .unwrap();

        assert_eq!(resp.status, StatusCode::OK);
        let remaining = collection
            .find_one(bson::doc! { "_id": bootcamp_id })
            .await
            .unwrap();
        assert!(remaining.is_none());
    }
}
