use common::{ActionResponse, SearchResponse};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use server::{AppState, seed_catalog};
use tokio::net::TcpListener;

struct TestServer {
    base_url: String,
    state: AppState,
}

async fn spawn_server(authenticated: bool) -> TestServer {
    let state = AppState::new(seed_catalog(), authenticated).expect("build index");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind random port");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(server::serve(listener, state.clone()));

    TestServer {
        base_url: format!("http://{addr}"),
        state,
    }
}

async fn post(client: &Client, url: String) -> (StatusCode, ActionResponse) {
    let response = client.post(url).send().await.unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn http_search_lists_and_filters() {
    let server = spawn_server(true).await;
    let client = Client::new();

    let all: SearchResponse = client
        .get(format!("{}/jobs/api/search", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(all.success);
    assert_eq!(all.count, 6);
    assert_eq!(all.jobs.len(), 6);

    let remote: SearchResponse = client
        .get(format!("{}/jobs/api/search", server.base_url))
        .query(&[("q", "engineer"), ("location", "remote")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(remote.count, remote.jobs.len());
    assert!(remote.jobs.iter().all(|j| j.remote));

    let none: SearchResponse = client
        .get(format!("{}/jobs/api/search?q=astronaut", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(none.success);
    assert_eq!(none.count, 0);
    assert_eq!(server.state.hits.snapshot().search, 3);
}

#[tokio::test]
async fn http_save_then_unsave() {
    let server = spawn_server(true).await;
    let client = Client::new();

    let (status, body) = post(&client, format!("{}/jobs/mock_1/save", server.base_url)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.success);

    let page = client
        .get(format!("{}/jobs/mock_1", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains(r#"data-job-id="mock_1" data-saved="true""#));

    let (_, body) = post(&client, format!("{}/jobs/mock_1/unsave", server.base_url)).await;
    assert!(body.success);
    assert_eq!(body.message.as_deref(), Some("Job removed from saved list."));

    let (status, body) = post(&client, format!("{}/jobs/mock_1/unsave", server.base_url)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.success);
    assert_eq!(body.message.as_deref(), Some("Job not found in saved list."));
}

#[tokio::test]
async fn http_apply_validates_and_rejects_duplicates() {
    let server = spawn_server(true).await;
    let client = Client::new();
    let url = format!("{}/jobs/mock_2/apply", server.base_url);

    let response = client
        .post(&url)
        .multipart(Form::new().text("name", "Jane").text("email", ""))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ActionResponse = response.json().await.unwrap();
    assert_eq!(body.message.as_deref(), Some("Name and Email are required!"));

    let bad_resume = Part::bytes(b"MZ".to_vec()).file_name("cv.exe");
    let response = client
        .post(&url)
        .multipart(
            Form::new()
                .text("name", "Jane")
                .text("email", "jane@example.com")
                .part("resume", bad_resume),
        )
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ActionResponse = response.json().await.unwrap();
    assert_eq!(body.message.as_deref(), Some("Invalid file type."));

    let resume = Part::bytes(b"%PDF-1.4".to_vec()).file_name("cv.pdf");
    let response = client
        .post(&url)
        .multipart(
            Form::new()
                .text("name", "Jane")
                .text("email", "jane@example.com")
                .text("cover_letter", "Hello")
                .part("resume", resume),
        )
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: ActionResponse = response.json().await.unwrap();
    assert!(body.success);

    let response = client
        .post(&url)
        .multipart(Form::new().text("name", "Jane").text("email", "jane@example.com"))
        .send()
        .await
        .unwrap();
    let body: ActionResponse = response.json().await.unwrap();
    assert!(!body.success);
    assert_eq!(body.message.as_deref(), Some("You already applied to this job."));

    let store = server.state.store.lock().await;
    let application = store.applications.get("mock_2").unwrap();
    assert_eq!(application.resume_file.as_deref(), Some("cv.pdf"));
    assert_eq!(application.cover_letter, "Hello");
}

#[tokio::test]
async fn http_anonymous_actions_are_unauthorized() {
    let server = spawn_server(false).await;
    let client = Client::new();

    let (status, body) = post(&client, format!("{}/jobs/mock_1/save", server.base_url)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(!body.success);

    let page = client
        .get(format!("{}/jobs/", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains(r#"data-user-authenticated="false""#));
    assert_eq!(server.state.hits.snapshot().save, 1);
    assert!(server.state.store.lock().await.saved.is_empty());
}

#[tokio::test]
async fn http_unknown_job_page_is_not_found() {
    let server = spawn_server(true).await;
    let response = Client::new()
        .get(format!("{}/jobs/nope", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
