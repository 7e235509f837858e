use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::request::ContentType;
use crate::routes::{self, OPERATIONS, OperationDefinition, find_operation, parse_method, render_path};
use crate::{ApiClient, BlockingApiClient, ClientError, Credentials};

/// Async Aircall client with one method per API endpoint.
///
/// Methods that take `params` accept anything implementing [`Serialize`]:
/// `serde_json::json!` values, typed structs, or `&()` for no parameters.
/// Parameters of `GET` endpoints become the query string, the others are
/// sent as the request body.
///
/// ```rust,no_run
/// use aircall_client::{AircallClient, Credentials};
/// use serde_json::json;
///
/// # async fn run() -> Result<(), aircall_client::ClientError> {
/// let client = AircallClient::new(Credentials::new("api-id", "api-token"))?;
/// let user = client.get_user(42).await?;
/// let calls = client.search_calls(&json!({"user_id": 42, "per_page": 20})).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AircallClient {
    inner: ApiClient,
}

impl AircallClient {
    /// Creates a client for the public Aircall API.
    pub fn new(credentials: Credentials) -> Result<Self, ClientError> {
        Ok(Self {
            inner: ApiClient::new(credentials)?,
        })
    }

    /// Returns a new client sending requests to `base_url` instead.
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Result<Self, ClientError> {
        self.inner = self.inner.with_base_url(base_url)?;
        Ok(self)
    }

    /// Returns a new client encoding request bodies as `content_type`.
    #[must_use]
    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.inner = self.inner.with_content_type(content_type);
        self
    }

    /// Returns all endpoints known to the client.
    pub fn operations() -> &'static [OperationDefinition] {
        OPERATIONS
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &ApiClient {
        &self.inner
    }

    /// Sends a request to a raw route.
    ///
    /// This bypasses the endpoint catalog but keeps client configuration.
    pub async fn request_json<P>(
        &self,
        method: Method,
        route: &str,
        params: &P,
    ) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.inner
            .request_json(method, route, &to_params(params)?)
            .await
    }

    /// Calls an endpoint by operation id (for example `getUser`).
    ///
    /// `path_params` replaces `{param}` segments in the route template.
    /// Missing required parameters return
    /// [`ClientError::MissingPathParameter`].
    pub async fn call_operation<P>(
        &self,
        operation_id: &str,
        path_params: &[(&str, &str)],
        params: &P,
    ) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        let operation = find_operation(operation_id)?;
        self.send(operation, path_params, to_params(params)?).await
    }

    async fn send(
        &self,
        operation: &OperationDefinition,
        path_params: &[(&str, &str)],
        params: Value,
    ) -> Result<Value, ClientError> {
        let route = render_path(operation, path_params)?;
        let method = parse_method(operation)?;
        self.inner.request_json(method, &route, &params).await
    }

    /// Checks that the API is reachable and the credentials are accepted.
    pub async fn ping(&self) -> Result<Value, ClientError> {
        self.send(&routes::PING, &[], Value::Null).await
    }

    /// Fetches the company the credentials belong to.
    pub async fn get_company(&self) -> Result<Value, ClientError> {
        self.send(&routes::GET_COMPANY, &[], Value::Null).await
    }

    // Users.

    /// Lists users. `params` is forwarded as query string (`page`, `per_page`, `order`, ...).
    pub async fn get_users<P>(&self, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(&routes::LIST_USERS, &[], to_params(params)?).await
    }

    pub async fn get_user(&self, user_id: u64) -> Result<Value, ClientError> {
        self.send(&routes::GET_USER, &[("user_id", user_id.to_string().as_str())], Value::Null)
            .await
    }

    pub async fn create_user<P>(&self, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(&routes::CREATE_USER, &[], to_params(params)?).await
    }

    pub async fn update_user<P>(&self, user_id: u64, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(
            &routes::UPDATE_USER,
            &[("user_id", user_id.to_string().as_str())],
            to_params(params)?,
        )
        .await
    }

    pub async fn delete_user(&self, user_id: u64) -> Result<Value, ClientError> {
        self.send(&routes::DELETE_USER, &[("user_id", user_id.to_string().as_str())], Value::Null)
            .await
    }

    /// Lists the availability status of every user.
    pub async fn get_user_availabilities<P>(&self, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(&routes::GET_USER_AVAILABILITIES, &[], to_params(params)?)
            .await
    }

    pub async fn get_user_availability(&self, user_id: u64) -> Result<Value, ClientError> {
        self.send(
            &routes::GET_USER_AVAILABILITY,
            &[("user_id", user_id.to_string().as_str())],
            Value::Null,
        )
        .await
    }

    // Teams.

    pub async fn get_teams<P>(&self, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(&routes::LIST_TEAMS, &[], to_params(params)?).await
    }

    pub async fn get_team(&self, team_id: u64) -> Result<Value, ClientError> {
        self.send(&routes::GET_TEAM, &[("team_id", team_id.to_string().as_str())], Value::Null)
            .await
    }

    pub async fn create_team<P>(&self, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(&routes::CREATE_TEAM, &[], to_params(params)?).await
    }

    pub async fn delete_team(&self, team_id: u64) -> Result<Value, ClientError> {
        self.send(&routes::DELETE_TEAM, &[("team_id", team_id.to_string().as_str())], Value::Null)
            .await
    }

    pub async fn add_user_to_team(&self, team_id: u64, user_id: u64) -> Result<Value, ClientError> {
        self.send(
            &routes::ADD_USER_TO_TEAM,
            &[
                ("team_id", team_id.to_string().as_str()),
                ("user_id", user_id.to_string().as_str()),
            ],
            Value::Null,
        )
        .await
    }

    pub async fn remove_user_from_team(
        &self,
        team_id: u64,
        user_id: u64,
    ) -> Result<Value, ClientError> {
        self.send(
            &routes::REMOVE_USER_FROM_TEAM,
            &[
                ("team_id", team_id.to_string().as_str()),
                ("user_id", user_id.to_string().as_str()),
            ],
            Value::Null,
        )
        .await
    }

    // Numbers.

    pub async fn get_numbers<P>(&self, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(&routes::LIST_NUMBERS, &[], to_params(params)?).await
    }

    pub async fn get_number(&self, number_id: u64) -> Result<Value, ClientError> {
        self.send(
            &routes::GET_NUMBER,
            &[("number_id", number_id.to_string().as_str())],
            Value::Null,
        )
        .await
    }

    pub async fn update_number<P>(&self, number_id: u64, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(
            &routes::UPDATE_NUMBER,
            &[("number_id", number_id.to_string().as_str())],
            to_params(params)?,
        )
        .await
    }

    // Calls.

    pub async fn get_calls<P>(&self, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(&routes::LIST_CALLS, &[], to_params(params)?).await
    }

    /// Searches calls by `phone_number`, `user_id`, `tags`, time range, ...
    pub async fn search_calls<P>(&self, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(&routes::SEARCH_CALLS, &[], to_params(params)?).await
    }

    pub async fn get_call(&self, call_id: u64) -> Result<Value, ClientError> {
        self.send(&routes::GET_CALL, &[("call_id", call_id.to_string().as_str())], Value::Null)
            .await
    }

    /// Transfers an ongoing call to a user, team or external number.
    pub async fn transfer_call<P>(&self, call_id: u64, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(
            &routes::TRANSFER_CALL,
            &[("call_id", call_id.to_string().as_str())],
            to_params(params)?,
        )
        .await
    }

    /// Displays a link in the agent's phone during the call.
    pub async fn display_call_link<P>(&self, call_id: u64, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(
            &routes::DISPLAY_CALL_LINK,
            &[("call_id", call_id.to_string().as_str())],
            to_params(params)?,
        )
        .await
    }

    /// Displays custom data (an insight card) during the call.
    pub async fn display_custom_call_data<P>(
        &self,
        call_id: u64,
        params: &P,
    ) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(
            &routes::DISPLAY_CUSTOM_CALL_DATA,
            &[("call_id", call_id.to_string().as_str())],
            to_params(params)?,
        )
        .await
    }

    pub async fn comment_call<P>(&self, call_id: u64, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(
            &routes::COMMENT_CALL,
            &[("call_id", call_id.to_string().as_str())],
            to_params(params)?,
        )
        .await
    }

    pub async fn tag_call<P>(&self, call_id: u64, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(
            &routes::TAG_CALL,
            &[("call_id", call_id.to_string().as_str())],
            to_params(params)?,
        )
        .await
    }

    pub async fn archive_call(&self, call_id: u64) -> Result<Value, ClientError> {
        self.send(&routes::ARCHIVE_CALL, &[("call_id", call_id.to_string().as_str())], Value::Null)
            .await
    }

    pub async fn unarchive_call(&self, call_id: u64) -> Result<Value, ClientError> {
        self.send(
            &routes::UNARCHIVE_CALL,
            &[("call_id", call_id.to_string().as_str())],
            Value::Null,
        )
        .await
    }

    pub async fn delete_recording(&self, call_id: u64) -> Result<Value, ClientError> {
        self.send(
            &routes::DELETE_CALL_RECORDING,
            &[("call_id", call_id.to_string().as_str())],
            Value::Null,
        )
        .await
    }

    pub async fn delete_voicemail(&self, call_id: u64) -> Result<Value, ClientError> {
        self.send(
            &routes::DELETE_CALL_VOICEMAIL,
            &[("call_id", call_id.to_string().as_str())],
            Value::Null,
        )
        .await
    }

    // Contacts.

    pub async fn get_contacts<P>(&self, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(&routes::LIST_CONTACTS, &[], to_params(params)?).await
    }

    /// Searches contacts by `phone_number` or `email`.
    pub async fn search_contacts<P>(&self, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(&routes::SEARCH_CONTACTS, &[], to_params(params)?).await
    }

    pub async fn get_contact(&self, contact_id: u64) -> Result<Value, ClientError> {
        self.send(
            &routes::GET_CONTACT,
            &[("contact_id", contact_id.to_string().as_str())],
            Value::Null,
        )
        .await
    }

    pub async fn create_contact<P>(&self, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(&routes::CREATE_CONTACT, &[], to_params(params)?).await
    }

    pub async fn update_contact<P>(&self, contact_id: u64, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(
            &routes::UPDATE_CONTACT,
            &[("contact_id", contact_id.to_string().as_str())],
            to_params(params)?,
        )
        .await
    }

    pub async fn delete_contact(&self, contact_id: u64) -> Result<Value, ClientError> {
        self.send(
            &routes::DELETE_CONTACT,
            &[("contact_id", contact_id.to_string().as_str())],
            Value::Null,
        )
        .await
    }

    pub async fn add_contact_phone_number<P>(
        &self,
        contact_id: u64,
        params: &P,
    ) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(
            &routes::ADD_CONTACT_PHONE_NUMBER,
            &[("contact_id", contact_id.to_string().as_str())],
            to_params(params)?,
        )
        .await
    }

    pub async fn update_contact_phone_number<P>(
        &self,
        contact_id: u64,
        phone_number_id: u64,
        params: &P,
    ) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(
            &routes::UPDATE_CONTACT_PHONE_NUMBER,
            &[
                ("contact_id", contact_id.to_string().as_str()),
                ("phone_number_id", phone_number_id.to_string().as_str()),
            ],
            to_params(params)?,
        )
        .await
    }

    pub async fn delete_contact_phone_number(
        &self,
        contact_id: u64,
        phone_number_id: u64,
    ) -> Result<Value, ClientError> {
        self.send(
            &routes::DELETE_CONTACT_PHONE_NUMBER,
            &[
                ("contact_id", contact_id.to_string().as_str()),
                ("phone_number_id", phone_number_id.to_string().as_str()),
            ],
            Value::Null,
        )
        .await
    }

    pub async fn add_contact_email<P>(
        &self,
        contact_id: u64,
        params: &P,
    ) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(
            &routes::ADD_CONTACT_EMAIL,
            &[("contact_id", contact_id.to_string().as_str())],
            to_params(params)?,
        )
        .await
    }

    pub async fn update_contact_email<P>(
        &self,
        contact_id: u64,
        email_id: u64,
        params: &P,
    ) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(
            &routes::UPDATE_CONTACT_EMAIL,
            &[
                ("contact_id", contact_id.to_string().as_str()),
                ("email_id", email_id.to_string().as_str()),
            ],
            to_params(params)?,
        )
        .await
    }

    pub async fn delete_contact_email(
        &self,
        contact_id: u64,
        email_id: u64,
    ) -> Result<Value, ClientError> {
        self.send(
            &routes::DELETE_CONTACT_EMAIL,
            &[
                ("contact_id", contact_id.to_string().as_str()),
                ("email_id", email_id.to_string().as_str()),
            ],
            Value::Null,
        )
        .await
    }

    // Webhooks. Aircall identifies webhooks by UUID.

    pub async fn get_webhooks<P>(&self, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(&routes::LIST_WEBHOOKS, &[], to_params(params)?).await
    }

    pub async fn get_webhook(&self, webhook_id: &str) -> Result<Value, ClientError> {
        self.send(&routes::GET_WEBHOOK, &[("webhook_id", webhook_id)], Value::Null)
            .await
    }

    /// Registers a webhook; `params` carries `url`, `custom_name` and `events`.
    pub async fn create_webhook<P>(&self, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(&routes::CREATE_WEBHOOK, &[], to_params(params)?).await
    }

    pub async fn update_webhook<P>(&self, webhook_id: &str, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(
            &routes::UPDATE_WEBHOOK,
            &[("webhook_id", webhook_id)],
            to_params(params)?,
        )
        .await
    }

    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<Value, ClientError> {
        self.send(&routes::DELETE_WEBHOOK, &[("webhook_id", webhook_id)], Value::Null)
            .await
    }
}

/// Blocking Aircall client with one method per API endpoint.
///
/// This is the synchronous counterpart of [`AircallClient`].
#[derive(Debug)]
pub struct BlockingAircallClient {
    inner: BlockingApiClient,
}

impl BlockingAircallClient {
    /// Creates a client for the public Aircall API.
    pub fn new(credentials: Credentials) -> Result<Self, ClientError> {
        Ok(Self {
            inner: BlockingApiClient::new(credentials)?,
        })
    }

    /// Returns a new client sending requests to `base_url` instead.
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Result<Self, ClientError> {
        self.inner = self.inner.with_base_url(base_url)?;
        Ok(self)
    }

    /// Returns a new client encoding request bodies as `content_type`.
    #[must_use]
    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.inner = self.inner.with_content_type(content_type);
        self
    }

    /// Returns all endpoints known to the client.
    pub fn operations() -> &'static [OperationDefinition] {
        OPERATIONS
    }

    pub fn transport(&self) -> &BlockingApiClient {
        &self.inner
    }

    /// Sends a request to a raw route.
    pub fn request_json<P>(
        &self,
        method: Method,
        route: &str,
        params: &P,
    ) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.inner.request_json(method, route, &to_params(params)?)
    }

    /// Calls an endpoint by operation id (for example `getUser`).
    pub fn call_operation<P>(
        &self,
        operation_id: &str,
        path_params: &[(&str, &str)],
        params: &P,
    ) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        let operation = find_operation(operation_id)?;
        self.send(operation, path_params, to_params(params)?)
    }

    fn send(
        &self,
        operation: &OperationDefinition,
        path_params: &[(&str, &str)],
        params: Value,
    ) -> Result<Value, ClientError> {
        let route = render_path(operation, path_params)?;
        let method = parse_method(operation)?;
        self.inner.request_json(method, &route, &params)
    }

    /// Checks that the API is reachable and the credentials are accepted.
    pub fn ping(&self) -> Result<Value, ClientError> {
        self.send(&routes::PING, &[], Value::Null)
    }

    /// Fetches the company the credentials belong to.
    pub fn get_company(&self) -> Result<Value, ClientError> {
        self.send(&routes::GET_COMPANY, &[], Value::Null)
    }

    // Users.

    /// Lists users. `params` is forwarded as query string (`page`, `per_page`, `order`, ...).
    pub fn get_users<P>(&self, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(&routes::LIST_USERS, &[], to_params(params)?)
    }

    pub fn get_user(&self, user_id: u64) -> Result<Value, ClientError> {
        self.send(&routes::GET_USER, &[("user_id", user_id.to_string().as_str())], Value::Null)
    }

    pub fn create_user<P>(&self, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(&routes::CREATE_USER, &[], to_params(params)?)
    }

    pub fn update_user<P>(&self, user_id: u64, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(
            &routes::UPDATE_USER,
            &[("user_id", user_id.to_string().as_str())],
            to_params(params)?,
        )
    }

    pub fn delete_user(&self, user_id: u64) -> Result<Value, ClientError> {
        self.send(&routes::DELETE_USER, &[("user_id", user_id.to_string().as_str())], Value::Null)
    }

    /// Lists the availability status of every user.
    pub fn get_user_availabilities<P>(&self, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(&routes::GET_USER_AVAILABILITIES, &[], to_params(params)?)
    }

    pub fn get_user_availability(&self, user_id: u64) -> Result<Value, ClientError> {
        self.send(
            &routes::GET_USER_AVAILABILITY,
            &[("user_id", user_id.to_string().as_str())],
            Value::Null,
        )
    }

    // Teams.

    pub fn get_teams<P>(&self, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(&routes::LIST_TEAMS, &[], to_params(params)?)
    }

    pub fn get_team(&self, team_id: u64) -> Result<Value, ClientError> {
        self.send(&routes::GET_TEAM, &[("team_id", team_id.to_string().as_str())], Value::Null)
    }

    pub fn create_team<P>(&self, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(&routes::CREATE_TEAM, &[], to_params(params)?)
    }

    pub fn delete_team(&self, team_id: u64) -> Result<Value, ClientError> {
        self.send(&routes::DELETE_TEAM, &[("team_id", team_id.to_string().as_str())], Value::Null)
    }

    pub fn add_user_to_team(&self, team_id: u64, user_id: u64) -> Result<Value, ClientError> {
        self.send(
            &routes::ADD_USER_TO_TEAM,
            &[
                ("team_id", team_id.to_string().as_str()),
                ("user_id", user_id.to_string().as_str()),
            ],
            Value::Null,
        )
    }

    pub fn remove_user_from_team(
        &self,
        team_id: u64,
        user_id: u64,
    ) -> Result<Value, ClientError> {
        self.send(
            &routes::REMOVE_USER_FROM_TEAM,
            &[
                ("team_id", team_id.to_string().as_str()),
                ("user_id", user_id.to_string().as_str()),
            ],
            Value::Null,
        )
    }

    // Numbers.

    pub fn get_numbers<P>(&self, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(&routes::LIST_NUMBERS, &[], to_params(params)?)
    }

    pub fn get_number(&self, number_id: u64) -> Result<Value, ClientError> {
        self.send(
            &routes::GET_NUMBER,
            &[("number_id", number_id.to_string().as_str())],
            Value::Null,
        )
    }

    pub fn update_number<P>(&self, number_id: u64, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(
            &routes::UPDATE_NUMBER,
            &[("number_id", number_id.to_string().as_str())],
            to_params(params)?,
        )
    }

    // Calls.

    pub fn get_calls<P>(&self, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(&routes::LIST_CALLS, &[], to_params(params)?)
    }

    /// Searches calls by `phone_number`, `user_id`, `tags`, time range, ...
    pub fn search_calls<P>(&self, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(&routes::SEARCH_CALLS, &[], to_params(params)?)
    }

    pub fn get_call(&self, call_id: u64) -> Result<Value, ClientError> {
        self.send(&routes::GET_CALL, &[("call_id", call_id.to_string().as_str())], Value::Null)
    }

    /// Transfers an ongoing call to a user, team or external number.
    pub fn transfer_call<P>(&self, call_id: u64, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(
            &routes::TRANSFER_CALL,
            &[("call_id", call_id.to_string().as_str())],
            to_params(params)?,
        )
    }

    /// Displays a link in the agent's phone during the call.
    pub fn display_call_link<P>(&self, call_id: u64, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(
            &routes::DISPLAY_CALL_LINK,
            &[("call_id", call_id.to_string().as_str())],
            to_params(params)?,
        )
    }

    /// Displays custom data (an insight card) during the call.
    pub fn display_custom_call_data<P>(
        &self,
        call_id: u64,
        params: &P,
    ) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(
            &routes::DISPLAY_CUSTOM_CALL_DATA,
            &[("call_id", call_id.to_string().as_str())],
            to_params(params)?,
        )
    }

    pub fn comment_call<P>(&self, call_id: u64, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(
            &routes::COMMENT_CALL,
            &[("call_id", call_id.to_string().as_str())],
            to_params(params)?,
        )
    }

    pub fn tag_call<P>(&self, call_id: u64, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(
            &routes::TAG_CALL,
            &[("call_id", call_id.to_string().as_str())],
            to_params(params)?,
        )
    }

    pub fn archive_call(&self, call_id: u64) -> Result<Value, ClientError> {
        self.send(&routes::ARCHIVE_CALL, &[("call_id", call_id.to_string().as_str())], Value::Null)
    }

    pub fn unarchive_call(&self, call_id: u64) -> Result<Value, ClientError> {
        self.send(
            &routes::UNARCHIVE_CALL,
            &[("call_id", call_id.to_string().as_str())],
            Value::Null,
        )
    }

    pub fn delete_recording(&self, call_id: u64) -> Result<Value, ClientError> {
        self.send(
            &routes::DELETE_CALL_RECORDING,
            &[("call_id", call_id.to_string().as_str())],
            Value::Null,
        )
    }

    pub fn delete_voicemail(&self, call_id: u64) -> Result<Value, ClientError> {
        self.send(
            &routes::DELETE_CALL_VOICEMAIL,
            &[("call_id", call_id.to_string().as_str())],
            Value::Null,
        )
    }

    // Contacts.

    pub fn get_contacts<P>(&self, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(&routes::LIST_CONTACTS, &[], to_params(params)?)
    }

    /// Searches contacts by `phone_number` or `email`.
    pub fn search_contacts<P>(&self, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(&routes::SEARCH_CONTACTS, &[], to_params(params)?)
    }

    pub fn get_contact(&self, contact_id: u64) -> Result<Value, ClientError> {
        self.send(
            &routes::GET_CONTACT,
            &[("contact_id", contact_id.to_string().as_str())],
            Value::Null,
        )
    }

    pub fn create_contact<P>(&self, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(&routes::CREATE_CONTACT, &[], to_params(params)?)
    }

    pub fn update_contact<P>(&self, contact_id: u64, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(
            &routes::UPDATE_CONTACT,
            &[("contact_id", contact_id.to_string().as_str())],
            to_params(params)?,
        )
    }

    pub fn delete_contact(&self, contact_id: u64) -> Result<Value, ClientError> {
        self.send(
            &routes::DELETE_CONTACT,
            &[("contact_id", contact_id.to_string().as_str())],
            Value::Null,
        )
    }

    pub fn add_contact_phone_number<P>(
        &self,
        contact_id: u64,
        params: &P,
    ) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(
            &routes::ADD_CONTACT_PHONE_NUMBER,
            &[("contact_id", contact_id.to_string().as_str())],
            to_params(params)?,
        )
    }

    pub fn update_contact_phone_number<P>(
        &self,
        contact_id: u64,
        phone_number_id: u64,
        params: &P,
    ) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(
            &routes::UPDATE_CONTACT_PHONE_NUMBER,
            &[
                ("contact_id", contact_id.to_string().as_str()),
                ("phone_number_id", phone_number_id.to_string().as_str()),
            ],
            to_params(params)?,
        )
    }

    pub fn delete_contact_phone_number(
        &self,
        contact_id: u64,
        phone_number_id: u64,
    ) -> Result<Value, ClientError> {
        self.send(
            &routes::DELETE_CONTACT_PHONE_NUMBER,
            &[
                ("contact_id", contact_id.to_string().as_str()),
                ("phone_number_id", phone_number_id.to_string().as_str()),
            ],
            Value::Null,
        )
    }

    pub fn add_contact_email<P>(
        &self,
        contact_id: u64,
        params: &P,
    ) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(
            &routes::ADD_CONTACT_EMAIL,
            &[("contact_id", contact_id.to_string().as_str())],
            to_params(params)?,
        )
    }

    pub fn update_contact_email<P>(
        &self,
        contact_id: u64,
        email_id: u64,
        params: &P,
    ) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(
            &routes::UPDATE_CONTACT_EMAIL,
            &[
                ("contact_id", contact_id.to_string().as_str()),
                ("email_id", email_id.to_string().as_str()),
            ],
            to_params(params)?,
        )
    }

    pub fn delete_contact_email(
        &self,
        contact_id: u64,
        email_id: u64,
    ) -> Result<Value, ClientError> {
        self.send(
            &routes::DELETE_CONTACT_EMAIL,
            &[
                ("contact_id", contact_id.to_string().as_str()),
                ("email_id", email_id.to_string().as_str()),
            ],
            Value::Null,
        )
    }

    // Webhooks. Aircall identifies webhooks by UUID.

    pub fn get_webhooks<P>(&self, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(&routes::LIST_WEBHOOKS, &[], to_params(params)?)
    }

    pub fn get_webhook(&self, webhook_id: &str) -> Result<Value, ClientError> {
        self.send(&routes::GET_WEBHOOK, &[("webhook_id", webhook_id)], Value::Null)
    }

    /// Registers a webhook; `params` carries `url`, `custom_name` and `events`.
    pub fn create_webhook<P>(&self, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(&routes::CREATE_WEBHOOK, &[], to_params(params)?)
    }

    pub fn update_webhook<P>(&self, webhook_id: &str, params: &P) -> Result<Value, ClientError>
    where
        P: Serialize + ?Sized,
    {
        self.send(
            &routes::UPDATE_WEBHOOK,
            &[("webhook_id", webhook_id)],
            to_params(params)?,
        )
    }

    pub fn delete_webhook(&self, webhook_id: &str) -> Result<Value, ClientError> {
        self.send(&routes::DELETE_WEBHOOK, &[("webhook_id", webhook_id)], Value::Null)
    }
}

fn to_params<P>(params: &P) -> Result<Value, ClientError>
where
    P: Serialize + ?Sized,
{
    Ok(serde_json::to_value(params)?)
}
