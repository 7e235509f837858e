use aircall_client::{BlockingAircallClient, ClientError, Credentials};
use httpmock::prelude::*;
use reqwest::Method;
use serde_json::{Value, json};

fn client_for(server: &MockServer) -> BlockingAircallClient {
    BlockingAircallClient::new(Credentials::new("id", "token"))
        .expect("default url is valid")
        .with_base_url(server.base_url())
        .expect("mock server url is valid")
}

#[test]
fn transfer_call_posts_to_transfers() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/calls/99/transfers")
            .header("authorization", "Basic aWQ6dG9rZW4=")
            .json_body(json!({"user_id": 5}));
        then.status(204);
    });

    client_for(&server)
        .transfer_call(99, &json!({"user_id": 5}))
        .expect("call transferred");

    mock.assert();
}

#[test]
fn update_contact_uses_post() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/contacts/7")
            .json_body(json!({"information": "VIP"}));
        then.status(200).json_body(json!({"contact": {"id": 7}}));
    });

    let value = client_for(&server)
        .update_contact(7, &json!({"information": "VIP"}))
        .expect("contact updated");

    mock.assert();
    assert_eq!(value["contact"]["id"], 7);
}

#[test]
fn recording_and_voicemail_deletion_routes() {
    let server = MockServer::start();
    let recording = server.mock(|when, then| {
        when.method(DELETE).path("/calls/3/recording");
        then.status(204);
    });
    let voicemail = server.mock(|when, then| {
        when.method(DELETE).path("/calls/3/voicemail");
        then.status(204);
    });

    let client = client_for(&server);
    client.delete_recording(3).expect("recording deleted");
    client.delete_voicemail(3).expect("voicemail deleted");

    recording.assert();
    voicemail.assert();
}

#[test]
fn raw_request_reuses_client_configuration() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/integrations/me")
            .header("authorization", "Basic aWQ6dG9rZW4=");
        then.status(200).json_body(json!({"integration": {"id": 1}}));
    });

    let value = client_for(&server)
        .request_json(Method::GET, "/integrations/me", &())
        .expect("request succeeds");

    mock.assert();
    assert_eq!(value["integration"]["id"], 1);
}

#[test]
fn server_error_body_is_kept_as_text() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/webhooks");
        then.status(500).body("internal error");
    });

    let error = client_for(&server)
        .get_webhooks(&())
        .expect_err("server error");

    match error {
        ClientError::Response { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, json!("internal error"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_success_body_is_a_json_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/company");
        then.status(200).body("not json");
    });

    let error = client_for(&server)
        .get_company()
        .expect_err("body is not JSON");

    assert!(matches!(error, ClientError::Json(_)));
}

#[test]
fn webhook_ids_are_percent_encoded_as_path_segments() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/webhooks/a%20b");
        then.status(200).json_body(json!({"webhook": {}}));
    });

    client_for(&server)
        .get_webhook("a b")
        .expect("webhook found");

    mock.assert();
}

/// Runs `call` against a fresh server that only answers `method` on `path`.
fn assert_route<F>(method: httpmock::Method, path: &str, call: F)
where
    F: FnOnce(&BlockingAircallClient) -> Result<Value, ClientError>,
{
    let server = MockServer::start();
    let mock = server.mock(move |when, then| {
        when.method(method).path(path);
        then.status(200).json_body(json!({}));
    });

    if let Err(error) = call(&client_for(&server)) {
        panic!("{path}: {error}");
    }
    mock.assert();
}

#[test]
fn company_and_user_methods_map_to_their_routes() {
    let body = json!({"first_name": "Ada"});
    assert_route(GET, "/ping", |c| c.ping());
    assert_route(GET, "/company", |c| c.get_company());
    assert_route(GET, "/users", |c| c.get_users(&()));
    assert_route(GET, "/users/1", |c| c.get_user(1));
    assert_route(POST, "/users", |c| c.create_user(&body));
    assert_route(PUT, "/users/1", |c| c.update_user(1, &body));
    assert_route(DELETE, "/users/1", |c| c.delete_user(1));
    assert_route(GET, "/users/availabilities", |c| {
        c.get_user_availabilities(&())
    });
    assert_route(GET, "/users/1/availability", |c| c.get_user_availability(1));
}

#[test]
fn team_and_number_methods_map_to_their_routes() {
    let body = json!({"name": "Support"});
    assert_route(GET, "/teams", |c| c.get_teams(&()));
    assert_route(GET, "/teams/2", |c| c.get_team(2));
    assert_route(POST, "/teams", |c| c.create_team(&body));
    assert_route(DELETE, "/teams/2", |c| c.delete_team(2));
    assert_route(POST, "/teams/2/users/1", |c| c.add_user_to_team(2, 1));
    assert_route(DELETE, "/teams/2/users/1", |c| c.remove_user_from_team(2, 1));
    assert_route(GET, "/numbers", |c| c.get_numbers(&()));
    assert_route(GET, "/numbers/3", |c| c.get_number(3));
    assert_route(PUT, "/numbers/3", |c| c.update_number(3, &body));
}

#[test]
fn call_methods_map_to_their_routes() {
    let body = json!({"content": "note"});
    assert_route(GET, "/calls", |c| c.get_calls(&()));
    assert_route(GET, "/calls/search", |c| c.search_calls(&()));
    assert_route(GET, "/calls/4", |c| c.get_call(4));
    assert_route(POST, "/calls/4/transfers", |c| c.transfer_call(4, &body));
    assert_route(POST, "/calls/4/link", |c| c.display_call_link(4, &body));
    assert_route(POST, "/calls/4/insight_cards", |c| {
        c.display_custom_call_data(4, &body)
    });
    assert_route(POST, "/calls/4/comments", |c| c.comment_call(4, &body));
    assert_route(POST, "/calls/4/tags", |c| c.tag_call(4, &body));
    assert_route(PUT, "/calls/4/archive", |c| c.archive_call(4));
    assert_route(PUT, "/calls/4/unarchive", |c| c.unarchive_call(4));
    assert_route(DELETE, "/calls/4/recording", |c| c.delete_recording(4));
    assert_route(DELETE, "/calls/4/voicemail", |c| c.delete_voicemail(4));
}

#[test]
fn contact_methods_map_to_their_routes() {
    let body = json!({"label": "Work", "value": "+33123456789"});
    assert_route(GET, "/contacts", |c| c.get_contacts(&()));
    assert_route(GET, "/contacts/search", |c| c.search_contacts(&()));
    assert_route(GET, "/contacts/5", |c| c.get_contact(5));
    assert_route(POST, "/contacts", |c| c.create_contact(&body));
    assert_route(POST, "/contacts/5", |c| c.update_contact(5, &body));
    assert_route(DELETE, "/contacts/5", |c| c.delete_contact(5));
    assert_route(POST, "/contacts/5/phone_details", |c| {
        c.add_contact_phone_number(5, &body)
    });
    assert_route(PUT, "/contacts/5/phone_details/6", |c| {
        c.update_contact_phone_number(5, 6, &body)
    });
    assert_route(DELETE, "/contacts/5/phone_details/6", |c| {
        c.delete_contact_phone_number(5, 6)
    });
    assert_route(POST, "/contacts/5/email_details", |c| {
        c.add_contact_email(5, &body)
    });
    assert_route(PUT, "/contacts/5/email_details/7", |c| {
        c.update_contact_email(5, 7, &body)
    });
    assert_route(DELETE, "/contacts/5/email_details/7", |c| {
        c.delete_contact_email(5, 7)
    });
}

#[test]
fn webhook_methods_map_to_their_routes() {
    let body = json!({"url": "https://example.com/hook", "events": ["call.created"]});
    assert_route(GET, "/webhooks", |c| c.get_webhooks(&()));
    assert_route(GET, "/webhooks/abc", |c| c.get_webhook("abc"));
    assert_route(POST, "/webhooks", |c| c.create_webhook(&body));
    assert_route(PUT, "/webhooks/abc", |c| c.update_webhook("abc", &body));
    assert_route(DELETE, "/webhooks/abc", |c| c.delete_webhook("abc"));
}
