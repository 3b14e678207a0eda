use super::*;

async fn spawn_base_routes() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, base_routes()).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_route_serves_ok_over_http() {
    let base = spawn_base_routes().await;
    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
}

#[tokio::test]
async fn feedback_api_is_not_served_by_host() {
    let base = spawn_base_routes().await;
    let resp = reqwest::get(format!("{base}/api/feedback")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 404);
}
