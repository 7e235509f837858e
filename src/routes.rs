use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::Method;

use crate::ClientError;

/// Metadata for one Aircall endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperationDefinition {
    /// Stable operation identifier (for example `getUser`).
    pub operation_id: &'static str,
    /// Uppercase HTTP method (for example `GET`, `POST`).
    pub method: &'static str,
    /// Route template, potentially containing `{param}` placeholders.
    pub path_template: &'static str,
    /// Required path parameter names, in template order.
    pub path_params: &'static [&'static str],
}

macro_rules! operation {
    ($name:ident, $id:literal, $method:literal, $path:literal $(, $param:literal)*) => {
        pub const $name: OperationDefinition = OperationDefinition {
            operation_id: $id,
            method: $method,
            path_template: $path,
            path_params: &[$($param),*],
        };
    };
}

// Auth and company.
operation!(PING, "ping", "GET", "/ping");
operation!(GET_COMPANY, "getCompany", "GET", "/company");

// Users.
operation!(LIST_USERS, "listUsers", "GET", "/users");
operation!(GET_USER, "getUser", "GET", "/users/{user_id}", "user_id");
operation!(CREATE_USER, "createUser", "POST", "/users");
operation!(UPDATE_USER, "updateUser", "PUT", "/users/{user_id}", "user_id");
operation!(DELETE_USER, "deleteUser", "DELETE", "/users/{user_id}", "user_id");
operation!(GET_USER_AVAILABILITIES, "getUserAvailabilities", "GET", "/users/availabilities");
operation!(
    GET_USER_AVAILABILITY,
    "getUserAvailability",
    "GET",
    "/users/{user_id}/availability",
    "user_id"
);

// Teams.
operation!(LIST_TEAMS, "listTeams", "GET", "/teams");
operation!(GET_TEAM, "getTeam", "GET", "/teams/{team_id}", "team_id");
operation!(CREATE_TEAM, "createTeam", "POST", "/teams");
operation!(DELETE_TEAM, "deleteTeam", "DELETE", "/teams/{team_id}", "team_id");
operation!(
    ADD_USER_TO_TEAM,
    "addUserToTeam",
    "POST",
    "/teams/{team_id}/users/{user_id}",
    "team_id",
    "user_id"
);
operation!(
    REMOVE_USER_FROM_TEAM,
    "removeUserFromTeam",
    "DELETE",
    "/teams/{team_id}/users/{user_id}",
    "team_id",
    "user_id"
);

// Numbers.
operation!(LIST_NUMBERS, "listNumbers", "GET", "/numbers");
operation!(GET_NUMBER, "getNumber", "GET", "/numbers/{number_id}", "number_id");
operation!(UPDATE_NUMBER, "updateNumber", "PUT", "/numbers/{number_id}", "number_id");

// Calls.
operation!(LIST_CALLS, "listCalls", "GET", "/calls");
operation!(SEARCH_CALLS, "searchCalls", "GET", "/calls/search");
operation!(GET_CALL, "getCall", "GET", "/calls/{call_id}", "call_id");
operation!(TRANSFER_CALL, "transferCall", "POST", "/calls/{call_id}/transfers", "call_id");
operation!(DISPLAY_CALL_LINK, "displayCallLink", "POST", "/calls/{call_id}/link", "call_id");
operation!(
    DISPLAY_CUSTOM_CALL_DATA,
    "displayCustomCallData",
    "POST",
    "/calls/{call_id}/insight_cards",
    "call_id"
);
operation!(COMMENT_CALL, "commentCall", "POST", "/calls/{call_id}/comments", "call_id");
operation!(TAG_CALL, "tagCall", "POST", "/calls/{call_id}/tags", "call_id");
operation!(ARCHIVE_CALL, "archiveCall", "PUT", "/calls/{call_id}/archive", "call_id");
operation!(UNARCHIVE_CALL, "unarchiveCall", "PUT", "/calls/{call_id}/unarchive", "call_id");
operation!(
    DELETE_CALL_RECORDING,
    "deleteCallRecording",
    "DELETE",
    "/calls/{call_id}/recording",
    "call_id"
);
operation!(
    DELETE_CALL_VOICEMAIL,
    "deleteCallVoicemail",
    "DELETE",
    "/calls/{call_id}/voicemail",
    "call_id"
);

// Contacts.
operation!(LIST_CONTACTS, "listContacts", "GET", "/contacts");
operation!(SEARCH_CONTACTS, "searchContacts", "GET", "/contacts/search");
operation!(GET_CONTACT, "getContact", "GET", "/contacts/{contact_id}", "contact_id");
operation!(CREATE_CONTACT, "createContact", "POST", "/contacts");
// Aircall updates contacts with POST, not PUT.
operation!(UPDATE_CONTACT, "updateContact", "POST", "/contacts/{contact_id}", "contact_id");
operation!(DELETE_CONTACT, "deleteContact", "DELETE", "/contacts/{contact_id}", "contact_id");
operation!(
    ADD_CONTACT_PHONE_NUMBER,
    "addContactPhoneNumber",
    "POST",
    "/contacts/{contact_id}/phone_details",
    "contact_id"
);
operation!(
    UPDATE_CONTACT_PHONE_NUMBER,
    "updateContactPhoneNumber",
    "PUT",
    "/contacts/{contact_id}/phone_details/{phone_number_id}",
    "contact_id",
    "phone_number_id"
);
operation!(
    DELETE_CONTACT_PHONE_NUMBER,
    "deleteContactPhoneNumber",
    "DELETE",
    "/contacts/{contact_id}/phone_details/{phone_number_id}",
    "contact_id",
    "phone_number_id"
);
operation!(
    ADD_CONTACT_EMAIL,
    "addContactEmail",
    "POST",
    "/contacts/{contact_id}/email_details",
    "contact_id"
);
operation!(
    UPDATE_CONTACT_EMAIL,
    "updateContactEmail",
    "PUT",
    "/contacts/{contact_id}/email_details/{email_id}",
    "contact_id",
    "email_id"
);
operation!(
    DELETE_CONTACT_EMAIL,
    "deleteContactEmail",
    "DELETE",
    "/contacts/{contact_id}/email_details/{email_id}",
    "contact_id",
    "email_id"
);

// Webhooks.
operation!(LIST_WEBHOOKS, "listWebhooks", "GET", "/webhooks");
operation!(GET_WEBHOOK, "getWebhook", "GET", "/webhooks/{webhook_id}", "webhook_id");
operation!(CREATE_WEBHOOK, "createWebhook", "POST", "/webhooks");
operation!(UPDATE_WEBHOOK, "updateWebhook", "PUT", "/webhooks/{webhook_id}", "webhook_id");
operation!(DELETE_WEBHOOK, "deleteWebhook", "DELETE", "/webhooks/{webhook_id}", "webhook_id");

/// Every endpoint known to the client, grouped by resource.
pub static OPERATIONS: &[OperationDefinition] = &[
    PING,
    GET_COMPANY,
    LIST_USERS,
    GET_USER,
    CREATE_USER,
    UPDATE_USER,
    DELETE_USER,
    GET_USER_AVAILABILITIES,
    GET_USER_AVAILABILITY,
    LIST_TEAMS,
    GET_TEAM,
    CREATE_TEAM,
    DELETE_TEAM,
    ADD_USER_TO_TEAM,
    REMOVE_USER_FROM_TEAM,
    LIST_NUMBERS,
    GET_NUMBER,
    UPDATE_NUMBER,
    LIST_CALLS,
    SEARCH_CALLS,
    GET_CALL,
    TRANSFER_CALL,
    DISPLAY_CALL_LINK,
    DISPLAY_CUSTOM_CALL_DATA,
    COMMENT_CALL,
    TAG_CALL,
    ARCHIVE_CALL,
    UNARCHIVE_CALL,
    DELETE_CALL_RECORDING,
    DELETE_CALL_VOICEMAIL,
    LIST_CONTACTS,
    SEARCH_CONTACTS,
    GET_CONTACT,
    CREATE_CONTACT,
    UPDATE_CONTACT,
    DELETE_CONTACT,
    ADD_CONTACT_PHONE_NUMBER,
    UPDATE_CONTACT_PHONE_NUMBER,
    DELETE_CONTACT_PHONE_NUMBER,
    ADD_CONTACT_EMAIL,
    UPDATE_CONTACT_EMAIL,
    DELETE_CONTACT_EMAIL,
    LIST_WEBHOOKS,
    GET_WEBHOOK,
    CREATE_WEBHOOK,
    UPDATE_WEBHOOK,
    DELETE_WEBHOOK,
];

/// Looks up an endpoint by operation id.
pub fn find_operation(operation_id: &str) -> Result<&'static OperationDefinition, ClientError> {
    OPERATIONS
        .iter()
        .find(|op| op.operation_id == operation_id)
        .ok_or_else(|| ClientError::UnknownOperation(operation_id.to_owned()))
}

pub(crate) fn parse_method(operation: &OperationDefinition) -> Result<Method, ClientError> {
    Method::from_bytes(operation.method.as_bytes())
        .map_err(|_| ClientError::UnknownOperation(operation.operation_id.to_owned()))
}

pub(crate) fn render_path(
    operation: &OperationDefinition,
    path_params: &[(&str, &str)],
) -> Result<String, ClientError> {
    let mut rendered = operation.path_template.to_owned();

    for required_param in operation.path_params {
        let value = path_params
            .iter()
            .find(|(name, _)| name == required_param)
            .map(|(_, value)| *value)
            .ok_or_else(|| ClientError::MissingPathParameter {
                operation_id: operation.operation_id.to_owned(),
                parameter: (*required_param).to_owned(),
            })?;

        let placeholder = format!("{{{required_param}}}");
        rendered = rendered.replace(&placeholder, &encode_path_segment(value));
    }

    Ok(rendered)
}

// Path percent-encode set, plus the segment separator and `%` itself.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{OPERATIONS, find_operation, parse_method, render_path};
    use crate::ClientError;

    #[test]
    fn operation_ids_are_unique() {
        let ids: HashSet<_> = OPERATIONS.iter().map(|op| op.operation_id).collect();
        assert_eq!(ids.len(), OPERATIONS.len());
    }

    #[test]
    fn every_operation_has_a_valid_method_and_declared_params() {
        for op in OPERATIONS {
            parse_method(op).expect("method parses");
            assert!(op.path_template.starts_with('/'), "{}", op.operation_id);
            for param in op.path_params {
                assert!(
                    op.path_template.contains(&format!("{{{param}}}")),
                    "{} does not use {param}",
                    op.operation_id
                );
            }
            let placeholders = op.path_template.matches('{').count();
            assert_eq!(placeholders, op.path_params.len(), "{}", op.operation_id);
        }
    }

    #[test]
    fn render_path_replaces_required_path_params() {
        let op = find_operation("removeUserFromTeam").expect("operation exists");
        let path = render_path(op, &[("user_id", "5"), ("team_id", "12")]).expect("path renders");
        assert_eq!(path, "/teams/12/users/5");
    }

    #[test]
    fn render_path_encodes_segments() {
        let op = find_operation("getContact").expect("operation exists");
        let path = render_path(op, &[("contact_id", "a/b c+d%")]).expect("path renders");
        assert_eq!(path, "/contacts/a%2Fb%20c+d%25");
    }

    #[test]
    fn render_path_keeps_uuids_verbatim() {
        let op = find_operation("getWebhook").expect("operation exists");
        let path = render_path(op, &[("webhook_id", "5b1e0a2c-9f3d-4c1e-8a8e-1f2d3c4b5a69")])
            .expect("path renders");
        assert_eq!(path, "/webhooks/5b1e0a2c-9f3d-4c1e-8a8e-1f2d3c4b5a69");
    }

    #[test]
    fn render_path_reports_missing_parameter() {
        let op = find_operation("getUser").expect("operation exists");
        let error = render_path(op, &[]).expect_err("missing parameter should error");
        match error {
            ClientError::MissingPathParameter {
                operation_id,
                parameter,
            } => {
                assert_eq!(operation_id, "getUser");
                assert_eq!(parameter, "user_id");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_operation_is_reported() {
        let error = find_operation("getPizza").expect_err("not in the catalog");
        assert!(matches!(error, ClientError::UnknownOperation(id) if id == "getPizza"));
    }
}
