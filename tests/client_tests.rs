use std::net::SocketAddr;
use std::time::Duration;

use ml_chat_handler::message::ServiceStatus;
use ml_chat_handler::routes::create_router;
use ml_chat_handler::services::chatbot::{GRATITUDE_REPLY, QUESTION_REPLY};
use ml_chat_handler::services::ml_client::{ClientConfig, HealthReport, MlClient};

async fn spawn_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, create_router()).await.unwrap();
    });
    addr
}

fn enabled_client(addr: SocketAddr) -> MlClient {
    MlClient::new(ClientConfig {
        enabled: true,
        base_url: format!("http://{}", addr),
        timeout: Duration::from_secs(5),
    })
}

#[tokio::test]
async fn test_client_round_trip() {
    let addr = spawn_server().await;
    let client = enabled_client(addr);

    let reply = client.get_response("thanks").await.unwrap();
    assert_eq!(reply.as_deref(), Some(GRATITUDE_REPLY));

    let reply = client.get_response("چی؟").await.unwrap();
    assert_eq!(reply.as_deref(), Some(QUESTION_REPLY));
}

#[tokio::test]
async fn test_client_health_check() {
    let addr = spawn_server().await;
    let client = enabled_client(addr);

    assert_eq!(
        client.check_health().await,
        HealthReport::Healthy(ServiceStatus::current())
    );
}

#[tokio::test]
async fn test_client_reports_unreachable_service() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = enabled_client(addr);
    assert!(client.get_response("hello").await.is_err());
    assert!(matches!(
        client.check_health().await,
        HealthReport::Unhealthy(_)
    ));
}
