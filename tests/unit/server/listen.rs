use super::*;

#[tokio::test]
async fn skips_ports_in_use() {
    let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = taken.local_addr().unwrap().port();
    let Some(next) = port.checked_add(1) else {
        return;
    };
    // The neighbour may be owned by someone else; only assert when it is free.
    let Ok(probe) = std::net::TcpListener::bind(("127.0.0.1", next)) else {
        return;
    };
    drop(probe);

    let listener = bind_with_retry("127.0.0.1", port, 5).await.unwrap();
    let bound = listener.local_addr().unwrap().port();
    assert!(bound > port && bound < port.saturating_add(5));
}

#[tokio::test]
async fn gives_up_after_the_attempt_budget() {
    let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = taken.local_addr().unwrap().port();

    let err = bind_with_retry("127.0.0.1", port, 1).await.unwrap_err();
    assert!(matches!(err, BlueboardError::Startup(_)));
    assert!(err.to_string().contains("1 attempts"));
}

#[tokio::test]
async fn ephemeral_port_binds_first_try() {
    let listener = bind_with_retry("127.0.0.1", 0, 0).await.unwrap();
    assert_ne!(listener.local_addr().unwrap().port(), 0);
}
