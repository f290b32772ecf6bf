//! HTTP surface tests: the router served on an ephemeral port.

mod common;

use app_lib::routes::router;
use reqwest::{redirect, Client, StatusCode};
use serde_json::Value;
use tempfile::TempDir;

struct TestServer {
    base: String,
    client: Client,
    _dir: TempDir,
}

impl TestServer {
    async fn start() -> Self {
        let (dir, store) = common::seeded_store();
        let static_dir = dir.path().join("static");
        std::fs::create_dir_all(&static_dir).unwrap();
        std::fs::write(static_dir.join("index.html"), "<h1>Activities</h1>").unwrap();

        let app = router(store, &static_dir);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .unwrap();
        Self {
            base: format!("http://{}", addr),
            client,
            _dir: dir,
        }
    }

    fn url(&self, activity: &str, action: &str) -> String {
        format!(
            "{}/activities/{}/{}",
            self.base,
            activity.replace(' ', "%20"),
            action
        )
    }

    async fn activities(&self) -> Value {
        let res = self
            .client
            .get(format!("{}/activities", self.base))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        res.json().await.unwrap()
    }

    async fn signup(&self, activity: &str, email: &str) -> (StatusCode, Value) {
        let res = self
            .client
            .post(self.url(activity, "signup"))
            .query(&[("email", email)])
            .send()
            .await
            .unwrap();
        (res.status(), res.json().await.unwrap())
    }

    async fn unregister(&self, activity: &str, email: &str) -> (StatusCode, Value) {
        let res = self
            .client
            .delete(self.url(activity, "unregister"))
            .query(&[("email", email)])
            .send()
            .await
            .unwrap();
        (res.status(), res.json().await.unwrap())
    }
}

#[tokio::test]
async fn root_redirects_to_index() {
    let srv = TestServer::start().await;
    let res = srv.client.get(format!("{}/", srv.base)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(res.headers()["location"], "/static/index.html");

    let page = srv
        .client
        .get(format!("{}/static/index.html", srv.base))
        .send()
        .await
        .unwrap();
    assert_eq!(page.status(), StatusCode::OK);
    assert!(page.text().await.unwrap().contains("Activities"));
}

#[tokio::test]
async fn list_returns_seeded_mapping() {
    let srv = TestServer::start().await;
    let body = srv.activities().await;
    let obj = body.as_object().unwrap();
    assert_eq!(obj.len(), 9);

    let chess = &body["Chess Club"];
    assert_eq!(
        chess["description"],
        "Learn strategies and compete in chess tournaments"
    );
    assert_eq!(chess["schedule"], "Fridays, 3:30 PM - 5:00 PM");
    assert_eq!(chess["max_participants"], 12);
    assert_eq!(chess["participants"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn signup_scenario_over_http() {
    let srv = TestServer::start().await;

    let (status, body) = srv.signup("Chess Club", "x@mergington.edu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Signed up x@mergington.edu for Chess Club");

    let list = srv.activities().await;
    let chess = list["Chess Club"]["participants"].as_array().unwrap();
    assert_eq!(chess.len(), 3);
    assert!(chess.contains(&Value::from("x@mergington.edu")));

    let (status, body) = srv.signup("Chess Club", "x@mergington.edu").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Student is already signed up");
    assert_eq!(body["code"], "CONFLICT");
}

#[tokio::test]
async fn signup_unknown_activity_is_404() {
    let srv = TestServer::start().await;
    let (status, body) = srv.signup("Nonexistent Club", "x@mergington.edu").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");
}

#[tokio::test]
async fn signup_full_activity_is_400() {
    let srv = TestServer::start().await;
    for i in 0..8 {
        let (status, _) = srv
            .signup("Math Club", &format!("s{}@mergington.edu", i))
            .await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, body) = srv.signup("Math Club", "late@mergington.edu").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Activity is full");
}

#[tokio::test]
async fn unregister_over_http() {
    let srv = TestServer::start().await;

    let (status, body) = srv.unregister("Chess Club", "daniel@mergington.edu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Unregistered daniel@mergington.edu from Chess Club"
    );

    let (status, body) = srv.unregister("Chess Club", "daniel@mergington.edu").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Student is not signed up for this activity");

    let (status, body) = srv.unregister("Nonexistent Club", "daniel@mergington.edu").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");
}

#[tokio::test]
async fn missing_email_is_rejected() {
    let srv = TestServer::start().await;
    let res = srv
        .client
        .post(srv.url("Chess Club", "signup"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        srv.activities().await["Chess Club"]["participants"]
            .as_array()
            .unwrap()
            .len(),
        2
    );
}

#[tokio::test]
async fn wrong_method_is_rejected() {
    let srv = TestServer::start().await;
    let res = srv
        .client
        .get(srv.url("Chess Club", "signup"))
        .query(&[("email", "x@mergington.edu")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
}
