use super::*;

#[test]
fn status_error_carries_backend_detail() {
    let err = status_error(503, r#"{"detail":"El índice no está disponible."}"#);
    assert_eq!(
        err,
        ApiError::Status { status: 503, detail: Some("El índice no está disponible.".to_owned()) }
    );
    assert_eq!(err.user_message(), "El índice no está disponible.");
}

#[test]
fn status_error_without_detail_mentions_status() {
    let err = status_error(500, "Internal Server Error");
    assert_eq!(err, ApiError::Status { status: 500, detail: None });
    assert_eq!(err.user_message(), "El servidor respondió con un error (500).");
}

#[test]
fn decode_error_wraps_wire_error() {
    let wire_err = wire::decode_query_response("{}").unwrap_err();
    let err = decode_error(&wire_err);
    assert!(matches!(err, ApiError::Decode(ref msg) if msg.contains("respuesta")));
    assert_eq!(err.user_message(), "La respuesta del servidor no tiene el formato esperado.");
}

#[test]
fn network_and_unavailable_share_message() {
    let network = ApiError::Network("offline".to_owned());
    assert_eq!(network.user_message(), ApiError::Unavailable.user_message());
    assert_eq!(network.to_string(), "network error: offline");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_outside_browser_are_unavailable() {
    let query = block_on_ready(submit_query("hola"));
    assert_eq!(query, Err(ApiError::Unavailable));
    let historial = block_on_ready(fetch_historial(wire::DEFAULT_USER_ID));
    assert_eq!(historial, Err(ApiError::Unavailable));
}

/// Poll a future that never awaits to completion.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("stub future should resolve immediately"),
    }
}
