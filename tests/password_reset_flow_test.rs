mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};

fn extract_reset_token(text: &str) -> String {
    text.split("token is: ")
        .nth(1)
        .expect("no token in email body")
        .split_whitespace()
        .next()
        .expect("no token in email body")
        .to_string()
}

#[tokio::test]
async fn test_password_reset_flow() {
    println!("\n\n[+] Running test: test_password_reset_flow");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.create_test_user("a@b.com", "old-password").await;

    println!("[>] Requesting a password reset.");
    let req = test::TestRequest::get()
        .uri("/retrieve_password/a@b.com")
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Password reset email sent to a@b.com");

    println!("[>] Fishing the token out of the recorded email.");
    let sent = client.mailer.sent.lock().unwrap().clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "a@b.com");
    // the email carries a one-time token, never the password
    assert!(!sent[0].text.contains("old-password"));
    let token = extract_reset_token(&sent[0].text);

    println!("[>] Resetting the password with the token.");
    let req = test::TestRequest::post()
        .uri("/reset_password")
        .set_json(serde_json::json!({
            "email": "a@b.com",
            "token": token,
            "new_password": "new-password"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Password updated successfully.");

    println!("[>] Logging in with the new password.");
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(serde_json::json!({"email": "a@b.com", "password": "new-password"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    println!("[>] Logging in with the old password.");
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(serde_json::json!({"email": "a@b.com", "password": "old-password"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    println!("[/] Test passed: reset token rotates the credential.");
}

#[tokio::test]
async fn test_reset_token_is_single_use() {
    println!("\n\n[+] Running test: test_reset_token_is_single_use");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.create_test_user("a@b.com", "old-password").await;

    let req = test::TestRequest::get()
        .uri("/retrieve_password/a@b.com")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let sent = client.mailer.sent.lock().unwrap().clone();
    let token = extract_reset_token(&sent[0].text);

    let reset_body = serde_json::json!({
        "email": "a@b.com",
        "token": token,
        "new_password": "new-password"
    });

    let req = test::TestRequest::post()
        .uri("/reset_password")
        .set_json(&reset_body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    println!("[>] Replaying the same token.");
    let req = test::TestRequest::post()
        .uri("/reset_password")
        .set_json(&reset_body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    println!("[/] Test passed: a consumed token is rejected.");
}

#[tokio::test]
async fn test_retrieve_password_unknown_email() {
    println!("\n\n[+] Running test: test_retrieve_password_unknown_email");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/retrieve_password/nobody@b.com")
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "That email doesn't exist");

    assert!(client.mailer.sent.lock().unwrap().is_empty());
    println!("[/] Test passed: unknown email sends no mail.");
}

#[tokio::test]
async fn test_reset_password_wrong_token() {
    println!("\n\n[+] Running test: test_reset_password_wrong_token");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.create_test_user("a@b.com", "old-password").await;

    let req = test::TestRequest::get()
        .uri("/retrieve_password/a@b.com")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    println!("[>] Resetting with a made-up token.");
    let req = test::TestRequest::post()
        .uri("/reset_password")
        .set_json(serde_json::json!({
            "email": "a@b.com",
            "token": "tok_not_the_real_one",
            "new_password": "new-password"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    println!("[>] Old password still works.");
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(serde_json::json!({"email": "a@b.com", "password": "old-password"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    println!("[/] Test passed: wrong token changes nothing.");
}
