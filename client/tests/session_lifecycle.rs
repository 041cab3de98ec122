//! End-to-end session behaviour through the composed client: bearer
//! propagation, `401` eviction and timeout handling.

use std::sync::Arc;

use rstest::{fixture, rstest};
use serde_json::json;

use travel_client::domain::ports::{LOGIN_ROUTE, TransportError};
use travel_client::domain::{LoginRequest, User};
use travel_client::http::ClientConfig;
use travel_client::outbound::storage::MemoryKeyValueStore;
use travel_client::storage::keys;
use travel_client::test_support::{RecordingNavigator, ScriptedTransport, sample_user};
use travel_client::{ClientError, TravelApp};

struct Harness {
    app: TravelApp,
    transport: Arc<ScriptedTransport>,
    navigator: Arc<RecordingNavigator>,
}

#[fixture]
fn harness() -> Harness {
    let transport = ScriptedTransport::new();
    let navigator = Arc::new(RecordingNavigator::default());
    let config = ClientConfig::parse("http://api.test/api/v1").expect("valid URL");
    let app = TravelApp::assemble(
        config,
        Arc::new(MemoryKeyValueStore::default()),
        Some(transport.clone()),
        navigator.clone(),
    )
    .expect("app assembles");
    Harness {
        app,
        transport,
        navigator,
    }
}

fn credentials() -> LoginRequest {
    LoginRequest {
        email: "lin.wei@example.com".to_owned(),
        password: "correct horse".to_owned(),
    }
}

async fn signed_in(harness: &Harness) {
    harness
        .transport
        .reply_data(&json!({ "user": sample_user(), "token": "tok-1" }));
    harness
        .app
        .auth()
        .login(&credentials())
        .await
        .expect("login succeeds");
}

#[rstest]
#[tokio::test]
async fn token_from_login_is_sent_on_later_calls(harness: Harness) {
    signed_in(&harness).await;
    let first = harness.transport.last_request().expect("login sent");
    assert!(first.header("Authorization").is_none());

    harness.transport.reply_data(&sample_user());
    let user = harness
        .app
        .auth()
        .refresh_profile()
        .await
        .expect("profile")
        .clone();
    assert_eq!(user, sample_user());

    let second = harness.transport.last_request().expect("profile sent");
    assert_eq!(second.header("Authorization"), Some("Bearer tok-1"));
}

#[rstest]
#[tokio::test]
async fn unauthorized_response_evicts_session_and_redirects(harness: Harness) {
    signed_in(&harness).await;
    let expired = json!({ "code": 401, "message": "token expired" });
    harness.transport.reply_json(401, &expired);

    let err = harness
        .app
        .orders()
        .get_order("o-1")
        .await
        .expect_err("401 fails");

    assert!(err.is_unauthorized());
    let api = err.as_api().expect("normalized error");
    assert_eq!((api.code(), api.message()), (401, "token expired"));
    assert_eq!(harness.app.storage().get::<String>(keys::TOKEN), None);
    assert_eq!(harness.app.storage().get::<User>(keys::USER), None);
    assert_eq!(harness.navigator.routes(), [LOGIN_ROUTE]);
    assert!(!harness.app.auth().store().is_authenticated());
}

#[rstest]
#[tokio::test]
async fn http_401_with_custom_body_code_is_unauthorized(harness: Harness) {
    signed_in(&harness).await;
    let revoked = json!({ "code": 40_101, "message": "token revoked" });
    harness.transport.reply_json(401, &revoked);

    let err = harness
        .app
        .orders()
        .get_order("o-1")
        .await
        .expect_err("401 fails");

    assert!(err.is_unauthorized());
    assert_eq!(err.as_api().map(|api| api.code()), Some(40_101));
    assert_eq!(harness.navigator.routes(), [LOGIN_ROUTE]);
}

#[rstest]
#[tokio::test]
async fn business_code_401_in_success_envelope_keeps_the_session(harness: Harness) {
    signed_in(&harness).await;
    let exhausted = json!({ "code": 401, "message": "quota exhausted" });
    harness.transport.reply_json(200, &exhausted);

    let err = harness
        .app
        .orders()
        .get_order("o-1")
        .await
        .expect_err("business failure");

    assert!(!err.is_unauthorized());
    assert_eq!(err.as_api().map(|api| api.code()), Some(401));
    assert!(harness.navigator.routes().is_empty());
    assert!(harness.app.auth().store().is_authenticated());
}

#[rstest]
#[tokio::test]
async fn timeout_leaves_session_untouched(harness: Harness) {
    signed_in(&harness).await;
    harness
        .transport
        .fail(TransportError::timeout("15000ms elapsed"));

    let err = harness
        .app
        .travel()
        .load_plans("r-1")
        .await
        .expect_err("timed out");

    assert!(err.is_timeout());
    assert_eq!(
        err,
        ClientError::Transport(TransportError::timeout("15000ms elapsed"))
    );
    assert_eq!(
        harness.app.storage().get::<String>(keys::TOKEN).as_deref(),
        Some("tok-1")
    );
    assert!(harness.navigator.routes().is_empty());
    assert!(harness.app.auth().store().is_authenticated());
}

#[rstest]
#[case::forbidden(403)]
#[case::missing(404)]
#[case::server(500)]
#[tokio::test]
async fn other_failures_keep_the_session(harness: Harness, #[case] status: u16) {
    signed_in(&harness).await;
    harness.transport.reply(status, "");

    let err = harness
        .app
        .catalogue()
        .get_attraction("a-1")
        .await
        .expect_err("non-2xx fails");

    assert_eq!(err.as_api().map(|api| api.code()), Some(i64::from(status)));
    assert!(harness.navigator.routes().is_empty());
    assert!(harness.app.auth().store().is_authenticated());
}
