use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use oj_web::services::{
    ApiClient, HttpRequest, HttpResponse, Method, SolutionFilter, Transport, TransportError,
    UserFilter,
};
use oj_web::{ErrorMessage, PagedData, UserInfo};

/// Replays canned results and records every request it sees.
#[derive(Clone, Default)]
struct ScriptedTransport {
    replies: Rc<RefCell<VecDeque<Result<HttpResponse, TransportError>>>>,
    seen: Rc<RefCell<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    fn reply(&self, result: Result<HttpResponse, TransportError>) -> &Self {
        self.replies.borrow_mut().push_back(result);
        self
    }

    fn last_request(&self) -> HttpRequest {
        self.seen.borrow().last().cloned().expect("no request sent")
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.seen.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::NoResponse("script exhausted".into())))
    }
}

fn json(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        status_text: if status == 200 { "OK".into() } else { "No Content".into() },
        content_type: Some("application/json".into()),
        body: body.into(),
    }
}

fn client() -> (ApiClient, ScriptedTransport) {
    let transport = ScriptedTransport::default();
    let client = ApiClient::with_transport("http://oj.test/", transport.clone());
    (client, transport)
}

fn user_info() -> UserInfo {
    serde_json::from_value(serde_json::json!({
        "sub": "alice",
        "userId": "alice",
        "token": "h.p.s",
        "roleId": 0
    }))
    .unwrap()
}

#[tokio::test]
async fn user_list_resolves_exact_page_with_auth_headers() {
    let (client, transport) = client();
    transport.reply(Ok(json(
        200,
        r#"{"data":[{"userId":"alice","name":"Alice"},{"userId":"bob"}],"count":5}"#,
    )));

    let filter = UserFilter {
        user_id: None,
        name: Some("ali".into()),
    };
    let page = client.get_all_users(2, 15, filter, &user_info()).await.unwrap();

    assert_eq!(page.count, 5);
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].name.as_deref(), Some("Alice"));

    let request = transport.last_request();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url, "http://oj.test/api/manager/user");
    assert_eq!(request.headers.get("token").map(String::as_str), Some("h.p.s"));
    assert_eq!(request.query_value("page"), Some("2"));
    assert_eq!(request.query_value("limit"), Some("15"));
    assert_eq!(request.query_value("name"), Some("ali"));
    assert_eq!(request.query_value("userId"), None);
}

#[tokio::test]
async fn user_list_non_200_resolves_empty_page() {
    let (client, transport) = client();
    transport.reply(Ok(json(204, "")));

    let page = client
        .get_all_users(1, 15, UserFilter::default(), &user_info())
        .await
        .unwrap();
    assert_eq!(page, PagedData::empty());
}

#[tokio::test]
async fn history_sends_user_id_and_filters() {
    let (client, transport) = client();
    transport.reply(Ok(json(
        200,
        r#"{"data":[{"solutionId":"s1","problemId":1000,"result":0,"passRate":1.0}],"count":1}"#,
    )));

    let filter = SolutionFilter {
        problem_id: Some(1000),
        title: None,
    };
    let page = client
        .get_solutions(1, 10, &user_info(), Some(filter))
        .await
        .unwrap();
    assert_eq!(page.count, 1);
    assert_eq!(page.data[0].solution_id, "s1");

    let request = transport.last_request();
    assert_eq!(request.url, "http://oj.test/api/core/solution/history");
    assert_eq!(request.headers.get("userId").map(String::as_str), Some("alice"));
    assert_eq!(request.headers.get("token").map(String::as_str), Some("h.p.s"));
    assert_eq!(request.query_value("problemId"), Some("1000"));
    assert_eq!(request.query_value("title"), None);
}

#[tokio::test]
async fn history_non_200_resolves_empty_page() {
    let (client, transport) = client();
    transport.reply(Ok(json(204, "")));

    let page = client.get_solutions(1, 10, &user_info(), None).await.unwrap();
    assert_eq!(page.data.len(), 0);
    assert_eq!(page.count, 0);
}

#[tokio::test]
async fn profile_is_anonymous() {
    let (client, transport) = client();
    transport.reply(Ok(json(200, r#"{"userId":"bob","name":"Bob"}"#)));

    let user = client.get_profile("bob").await.unwrap();
    assert_eq!(user.user_id, "bob");

    let request = transport.last_request();
    assert_eq!(request.url, "http://oj.test/api/core/user/profile");
    assert!(request.headers.is_empty());
    assert_eq!(request.query_value("userId"), Some("bob"));
}

#[tokio::test]
async fn overview_passes_year() {
    let (client, transport) = client();
    transport.reply(Ok(json(
        200,
        r#"{"year":2023,"total":12,"passed":7,"activities":[{"date":"2023-03-01","count":2}]}"#,
    )));

    let overview = client.get_overview("bob", 2023).await.unwrap();
    assert_eq!(overview.total, 12);
    assert_eq!(overview.activities.len(), 1);

    let request = transport.last_request();
    assert_eq!(request.query_value("year"), Some("2023"));
    assert!(request.headers.is_empty());
}

#[tokio::test]
async fn structured_error_body_is_rejected_verbatim() {
    let (client, transport) = client();
    transport.reply(Err(TransportError::Response(HttpResponse {
        status: 403,
        status_text: "Forbidden".into(),
        content_type: Some("application/json".into()),
        body: r#"{"code":403,"message":"admin only"}"#.into(),
    })));

    let err = client
        .get_all_users(1, 15, UserFilter::default(), &user_info())
        .await
        .unwrap_err();
    assert_eq!(err, ErrorMessage::new(403, "admin only"));
}

#[tokio::test]
async fn network_and_client_failures_use_sentinel_codes() {
    let (client, transport) = client();
    transport
        .reply(Err(TransportError::NoResponse("Failed to fetch".into())))
        .reply(Err(TransportError::Request("bad url".into())));

    let err = client.get_profile("bob").await.unwrap_err();
    assert_eq!(err, ErrorMessage::new(0, "request failed"));

    let err = client.get_overview("bob", 2024).await.unwrap_err();
    assert_eq!(err, ErrorMessage::new(-1, "bad url"));
}

#[tokio::test]
async fn unparseable_success_body_is_a_client_error() {
    let (client, transport) = client();
    transport.reply(Ok(json(200, "<html></html>")));

    let err = client.get_profile("bob").await.unwrap_err();
    assert_eq!(err.code, -1);
    assert!(err.message.starts_with("Parse error"));
}
