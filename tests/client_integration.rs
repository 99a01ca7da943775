//! Client integration tests
//!
//! Runs the reqwest-backed client against a local mock of the service.

mod common;

use common::helpers::{GOLFER_ID, TOKEN, api_path, create_test_client, login_body, mount_session};
use ghin_client::{
    Error,
    types::{
        GetCourseDetailsInput, GetUserInfoInput, HoleScore, PlayerGender, ScoreStatus,
        SearchCoursesInput, SubmitScoreInput,
    },
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path, query_param},
};

#[tokio::test]
async fn test_login_flow_and_headers() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    Mock::given(method("GET"))
        .and(path(api_path("golfers/search.json")))
        .and(header("Authorization", TOKEN))
        .and(query_param("last_name", "Lovelace"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"golfers": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let user = client.login("golfer@example.com", "pw").await.unwrap();
    assert_eq!(user.golfer_id, GOLFER_ID);
    assert_eq!(user.primary_golfer().unwrap().ghin_number, GOLFER_ID.to_string());

    let golfers = client
        .search_golfers(ghin_client::types::SearchGolfersInput::new().with_last_name("Lovelace"))
        .await
        .unwrap();
    assert!(golfers.is_empty());

    let requests = server.received_requests().await.unwrap();
    let login = &requests[0];
    assert!(login.headers.get("authorization").is_none());
    assert_eq!(
        login.headers.get("content-type").unwrap().to_str().unwrap(),
        "application/json"
    );
    assert!(
        login
            .headers
            .get("user-agent")
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("ghin-client/")
    );
    let body: Value = serde_json::from_slice(&login.body).unwrap();
    assert_eq!(body["user"]["remember_me"], true);
    assert_eq!(body["token"], "someValue");
    assert_eq!(body["user_token"], "someValue");
}

#[tokio::test]
async fn test_login_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("golfer_login.json")))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"errors": "bad"})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let err = client.login("golfer@example.com", "wrong").await.unwrap_err();

    assert!(matches!(err, Error::Authentication { .. }));
    assert_eq!(err.status(), Some(401));
    assert!(!client.is_authenticated().await);
}

#[tokio::test]
async fn test_search_courses_without_filters() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    Mock::given(method("GET"))
        .and(path(api_path("crsCourseMethods.asmx/SearchCourses.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "courses": [
                {"CourseID": 10, "CourseName": "South", "FacilityName": "Links", "State": "US-CA"},
                {"CourseID": 11, "CourseName": "North", "FacilityName": "Links", "State": "US-CA"}
            ]
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client.login("golfer@example.com", "pw").await.unwrap();
    let courses = client.search_courses(SearchCoursesInput::new()).await.unwrap();

    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].course_name, "South");
    assert_eq!(courses[1].state.as_deref(), Some("US-CA"));

    let requests = server.received_requests().await.unwrap();
    let search = requests.last().unwrap();
    assert_eq!(search.url.query(), None);
    assert_eq!(
        search.headers.get("authorization").unwrap().to_str().unwrap(),
        TOKEN
    );
}

#[tokio::test]
async fn test_course_details_server_error() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    Mock::given(method("GET"))
        .and(path(api_path("crsCourseMethods.asmx/GetCourseDetails.json")))
        .and(query_param("courseId", "777"))
        .and(query_param("include_altered_tees", "false"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client.login("golfer@example.com", "pw").await.unwrap();
    let err = client
        .get_course_details(GetCourseDetailsInput::new("777"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("\"777\""));
}

#[tokio::test]
async fn test_submit_score_with_defaults() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    Mock::given(method("POST"))
        .and(path(api_path("scores/hbh.json")))
        .and(header("Authorization", TOKEN))
        .and(body_partial_json(json!({
            "golfer_id": GOLFER_ID.to_string(),
            "course_id": 9001,
            "tee_set_id": 55,
            "tee_set_side": "ALL18",
            "number_of_holes": 18,
            "score_type": "A",
            "gender": "M"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 31337,
            "golfer_id": GOLFER_ID,
            "course_id": 9001,
            "tee_set_id": 55,
            "adjusted_gross_score": 80,
            "differential": 7.4,
            "status": "Validated"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client.login("golfer@example.com", "pw").await.unwrap();

    let holes = (1..=18).map(|n| HoleScore::new(n, 5, 4).with_putts(2)).collect();
    let score = client
        .submit_score(SubmitScoreInput::new(PlayerGender::Male, 9001, 55, holes))
        .await
        .unwrap();

    assert_eq!(score.id, 31337);
    assert_eq!(score.golfer_id, GOLFER_ID.to_string());
    assert_eq!(score.course_id, "9001");
    assert_eq!(score.status, Some(ScoreStatus::Validated));
}

#[tokio::test]
async fn test_score_history_paging() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    Mock::given(method("GET"))
        .and(path(api_path("scores.json")))
        .and(query_param("golfer_id", GOLFER_ID.to_string()))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "scores": [{"id": 1, "adjusted_gross_score": 85}, {"id": 2, "adjusted_gross_score": 79}],
            "total_count": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client.login("golfer@example.com", "pw").await.unwrap();
    let page = client.get_user_info(GetUserInfoInput::new()).await.unwrap();

    assert_eq!(page.total_count, 2);
    assert_eq!(page.scores[1].adjusted_gross_score, 79);
}

#[tokio::test]
async fn test_logout_clears_session_when_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("golfer_login.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_body()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(api_path("users/logout.json")))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client.login("golfer@example.com", "pw").await.unwrap();

    let err = client.logout().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert!(!client.is_authenticated().await);
    assert!(client.current_user().await.is_none());
}

#[tokio::test]
async fn test_malformed_body_reports_path() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    Mock::given(method("GET"))
        .and(path(api_path("scores.json")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"scores": [{"id": 1}, {"id": "two"}]})),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client.login("golfer@example.com", "pw").await.unwrap();
    let err = client.get_user_info(GetUserInfoInput::new()).await.unwrap_err();

    match err.root() {
        Error::Deserialization { path, .. } => assert_eq!(path, "scores[1].id"),
        other => panic!("unexpected error: {other:?}"),
    }
}
