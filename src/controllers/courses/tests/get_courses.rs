#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test::TestRequest};

    use crate::{
        controllers::courses::get_courses::get_courses,
        providers::database::schemas::course::{Course, MinimumSkill, COURSE_COLLECTION_NAME},
        tests::utils::{db_available, get_app_config, get_db, perform_integration_test, WebData},
    };

    #[actix_web::test]
    pub async fn should_fail_when_filtering_on_an_unknown_field() {
        let app_config = get_app_config();
        let db = get_db(&app_config).await;

        let req = TestRequest::get().uri("/courses?password=x");

        let resp = perform_integration_test(
            get_courses,
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
    }

    #[actix_web::test]
    pub async fn should_filter_courses_with_comparison_operators() {
        if !db_available() {
            return;
        }
        let app_config = get_app_config();
        let db = get_db(&app_config).await;

        let bootcamp_id = bson::oid::ObjectId::new();
        let now = bson::DateTime::now();
        let collection = db.collection::<Course>(COURSE_COLLECTION_NAME);
        for tuition in [4000.0, 8000.0, 12000.0] {
            collection
                .insert_one(Course {
                    id: None,
                    title: "Front End Web Development".to_string(),
                    description: "html, css and javascript".to_string(),
                    weeks: "8".to_string(),
                    tuition,
                    minimum_skill: MinimumSkill::Beginner,
                    scholarship_available: false,
                    bootcamp: bootcamp_id,
                    user: bson::oid::ObjectId::new(),
                    created_at: now,
                    updated_at: now,
                })
                .await
                .unwrap();
        }

        let req = TestRequest::get().uri(&format!(
            "/courses?bootcamp={}&tuition[gte]=5000&tuition[lte]=10000",
            bootcamp_id.to_hex()
        ));

        let resp = perform_integration_test(
            get_courses,
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
        assert_eq!(body.get("count").unwrap(), 1);
        let record = &body.get("data").unwrap().as_array().unwrap()[0];
        assert_eq!(record.get("tuition").unwrap(), 8000.0);
    }
}
