#[cfg(test)]
mod tests {
    use crate::helpers::{TEST_TOKEN, get_json_body, make_test_app, request, valid_student};
    use axum::{
        body::Body,
        http::{Request, StatusCode, header::AUTHORIZATION},
    };
    use db::models::student::{Gender, Model as StudentModel};
    use serde_json::json;
    use tower::ServiceExt;

    /// Test Case: Valid body creates a student and returns its id
    #[tokio::test]
    async fn test_create_student_success() {
        let (app, app_state) = make_test_app().await;

        let response = app
            .oneshot(request("POST", "/students", Some(TEST_TOKEN), Some(valid_student())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        let id = obj["id"].as_str().unwrap();
        assert_eq!(id.len(), 36);

        let stored = StudentModel::find_by_id(app_state.db(), id)
            .await
            .unwrap()
            .expect("created student should be stored");
        assert_eq!(stored.first_name, "Ana");
        assert_eq!(stored.last_name, "Lee");
        assert_eq!(stored.student_code, "S1");
        assert_eq!(stored.birth_date, "2010-05-01");
        assert_eq!(stored.gender, Gender::Female);
    }

    /// Test Case: Client-supplied id is ignored
    #[tokio::test]
    async fn test_create_student_ignores_client_id() {
        let (app, _state) = make_test_app().await;

        let mut body = valid_student();
        body["id"] = json!("chosen-by-client");

        let response = app
            .oneshot(request("POST", "/students", Some(TEST_TOKEN), Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_ne!(json["id"], "chosen-by-client");
    }

    /// Test Case: Empty first name is rejected with the field named
    #[tokio::test]
    async fn test_create_student_empty_first_name() {
        let (app, app_state) = make_test_app().await;

        let mut body = valid_student();
        body["firstName"] = json!("");

        let response = app
            .oneshot(request("POST", "/students", Some(TEST_TOKEN), Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(
            json,
            json!({
                "errors": {
                    "formErrors": [],
                    "fieldErrors": {
                        "firstName": ["String must contain at least 1 character(s)"]
                    }
                }
            })
        );

        assert!(StudentModel::find_all(app_state.db()).await.unwrap().is_empty());
    }

    /// Test Case: Each single-field violation names exactly that field
    #[tokio::test]
    async fn test_create_student_single_field_violations() {
        let (app, _state) = make_test_app().await;

        let cases = [
            ("lastName", json!("")),
            ("studentCode", json!(17)),
            ("birthDate", json!("01/05/2010")),
            ("gender", json!("Z")),
        ];

        for (field, value) in cases {
            let mut body = valid_student();
            body[field] = value;

            let response = app
                .clone()
                .oneshot(request("POST", "/students", Some(TEST_TOKEN), Some(body)))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{field}");

            let json = get_json_body(response).await;
            let field_errors = json["errors"]["fieldErrors"].as_object().unwrap();
            assert_eq!(field_errors.len(), 1, "{field}");
            assert!(field_errors.contains_key(field), "{field}");
        }
    }

    /// Test Case: Missing fields are all reported in one response
    #[tokio::test]
    async fn test_create_student_missing_fields() {
        let (app, _state) = make_test_app().await;

        let response = app
            .oneshot(request(
                "POST",
                "/students",
                Some(TEST_TOKEN),
                Some(json!({ "firstName": "Ana" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        let field_errors = &json["errors"]["fieldErrors"];
        for field in ["lastName", "studentCode", "birthDate", "gender"] {
            assert_eq!(field_errors[field], json!(["Required"]), "{field}");
        }
        assert!(field_errors.get("firstName").is_none());
    }

    /// Test Case: Malformed JSON is a 400 with a form-level error
    #[tokio::test]
    async fn test_create_student_malformed_json() {
        let (app, _state) = make_test_app().await;

        let req = Request::builder()
            .method("POST")
            .uri("/students")
            .header(AUTHORIZATION, format!("Bearer {TEST_TOKEN}"))
            .body(Body::from("{\"firstName\": "))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["errors"]["formErrors"], json!(["Malformed JSON body"]));
    }

    /// Test Case: Impossible calendar dates pass the lexical check
    #[tokio::test]
    async fn test_create_student_accepts_lexically_valid_date() {
        let (app, _state) = make_test_app().await;

        let mut body = valid_student();
        body["birthDate"] = json!("2024-02-30");

        let response = app
            .oneshot(request("POST", "/students", Some(TEST_TOKEN), Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
