#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test::TestRequest};

    use crate::{
        controllers::bootcamps::get_bootcamps_in_radius::get_bootcamps_in_radius,
        tests::utils::{get_app_config, get_db, perform_integration_test, WebData},
    };

    #[actix_web::test]
    pub async fn should_fail_with_a_non_positive_distance() {
        let app_config = get_app_config();
        let db = get_db(&app_config).await;

        let req = TestRequest::get().uri("/bootcamps/radius/02118/0");

        let resp = perform_integration_test(
            get_bootcamps_in_radius,
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
    pub async fn should_fail_with_a_non_numeric_distance() {
        let app_config = get_app_config();
        let db = get_db(&app_config).await;

        let req = TestRequest::get().uri("/bootcamps/radius/02118/far");

        let resp = perform_integration_test(
            get_bootcamps_in_radius,
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
