use super::*;

#[test]
fn network_error_message_includes_status_and_body() {
    let err = ApiError::Network { status: 502, body: "bad gateway".to_owned() };
    let message = err.to_string();
    assert!(message.contains("502"));
    assert!(message.contains("bad gateway"));
}

#[test]
fn malformed_response_names_the_missing_field() {
    let err = ApiError::MalformedResponse("map");
    assert!(err.to_string().contains("`map`"));
}

#[test]
fn error_kinds_are_distinguishable() {
    let network = ApiError::Network { status: 500, body: String::new() };
    let malformed = ApiError::MalformedResponse("map");
    let transport = ApiError::Transport("offline".to_owned());
    assert_ne!(network, malformed);
    assert_ne!(malformed, transport);
    assert_ne!(network, transport);
}
