#[cfg(test)]
mod tests {
    use crate::helpers::{TEST_TOKEN, get_json_body, make_test_app, request, valid_student};
    use axum::http::StatusCode;
    use db::models::student::{Gender, Model as StudentModel, NewStudent};
    use serde_json::json;
    use tower::ServiceExt;

    fn new_student(first_name: &str, code: &str) -> NewStudent {
        NewStudent {
            first_name: first_name.into(),
            last_name: "Lee".into(),
            student_code: code.into(),
            birth_date: "2010-05-01".into(),
            gender: Gender::Male,
        }
    }

    /// Test Case: A created student resolves by id to the input plus its id
    #[tokio::test]
    async fn test_get_student_round_trip() {
        let (app, _state) = make_test_app().await;

        let response = app
            .clone()
            .oneshot(request("POST", "/students", Some(TEST_TOKEN), Some(valid_student())))
            .await
            .unwrap();
        let id = get_json_body(response).await["id"].as_str().unwrap().to_owned();

        let response = app
            .oneshot(request("GET", &format!("/students/{id}"), Some(TEST_TOKEN), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let mut expected = valid_student();
        expected["id"] = json!(id);
        assert_eq!(get_json_body(response).await, expected);
    }

    /// Test Case: Unknown id is 404
    #[tokio::test]
    async fn test_get_student_not_found() {
        let (app, _state) = make_test_app().await;

        let response = app
            .oneshot(request("GET", "/students/does-not-exist", Some(TEST_TOKEN), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(get_json_body(response).await, json!({ "message": "Not found" }));
    }

    /// Test Case: Empty store lists as an empty array
    #[tokio::test]
    async fn test_list_students_empty() {
        let (app, _state) = make_test_app().await;

        let response = app
            .oneshot(request("GET", "/students", Some(TEST_TOKEN), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(get_json_body(response).await, json!([]));
    }

    /// Test Case: List reflects creates and deletes
    #[tokio::test]
    async fn test_list_students_after_create_and_delete() {
        let (app, app_state) = make_test_app().await;

        let a = StudentModel::create(app_state.db(), new_student("Ana", "A1")).await.unwrap();
        let b = StudentModel::create(app_state.db(), new_student("Ben", "B1")).await.unwrap();

        let response = app
            .clone()
            .oneshot(request("GET", "/students", Some(TEST_TOKEN), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        let mut ids: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_str().unwrap())
            .collect();
        ids.sort();
        let mut expected = vec![a.as_str(), b.as_str()];
        expected.sort();
        assert_eq!(ids, expected);

        StudentModel::delete_by_id(app_state.db(), &a).await.unwrap();

        let response = app
            .oneshot(request("GET", "/students", Some(TEST_TOKEN), None))
            .await
            .unwrap();
        let json = get_json_body(response).await;
        let students = json.as_array().unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0]["id"], b.as_str());
        assert_eq!(students[0]["firstName"], "Ben");
        assert_eq!(students[0]["gender"], "M");
    }
}
