//! Galileo-FT API client.
//!
//! Every endpoint is a form-encoded `POST` answered with a JSON envelope.
//! The client performs no retries; a failed call surfaces as a
//! [`GalileoError`] naming the endpoint.

use reqwest::{header, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use crate::form::{FormData, PaginationVars};
use crate::hierarchy::flatten_group_ids;
use crate::models::{
    Account, AccountOverviewResponse, BaseResponse, Customer, ErrorResponse, Group,
    GroupHierarchy, GroupToAccounts, ListResponse, RelatedAccountsResponse,
};
use crate::{GalileoConfig, GalileoError, GalileoResult};

/// Header asking Galileo-FT to answer in JSON.
const RESPONSE_CONTENT_TYPE: &str = "Response-Content-Type";

/// Remote operations exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Ping,
    RelatedAccounts,
    AccountOverview,
    RootGroups,
    GroupHierarchy,
    GroupsInfo,
    GroupsToAccounts,
    AddAccountToGroup,
    RemoveAccountFromGroup,
}

impl Endpoint {
    /// Operation name, used in errors and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Ping => "ping",
            Endpoint::RelatedAccounts => "getRelatedAccounts",
            Endpoint::AccountOverview => "getAccountOverview",
            Endpoint::RootGroups => "getRootGroups",
            Endpoint::GroupHierarchy => "getGroupHierarchy",
            Endpoint::GroupsInfo => "getGroupsInfo",
            Endpoint::GroupsToAccounts => "getAccountGroupRelationships",
            Endpoint::AddAccountToGroup => "setAccountGroupRelationships",
            Endpoint::RemoveAccountFromGroup => "removeAccountGroupRelationship",
        }
    }

    pub fn path(&self) -> String {
        format!("/intserv/4.0/{}", self.name())
    }
}

/// Galileo-FT API client.
#[derive(Debug, Clone)]
pub struct GalileoClient {
    http_client: reqwest::Client,
    config: Arc<GalileoConfig>,
    base_url: url::Url,
}

impl GalileoClient {
    /// Creates a client with its own HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: GalileoConfig) -> GalileoResult<Self> {
        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|e| GalileoError::Config(format!("Failed to create HTTP client: {e}")))?;
        Self::with_http_client(config, http_client)
    }

    /// Creates a client on a shared HTTP transport. Timeouts and proxies
    /// come from the transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_http_client(
        config: GalileoConfig,
        http_client: reqwest::Client,
    ) -> GalileoResult<Self> {
        config.validate()?;
        let base_url = config.base_url()?;

        Ok(Self {
            http_client,
            config: Arc::new(config),
            base_url,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GalileoConfig {
        &self.config
    }

    #[must_use]
    pub fn base_url(&self) -> &url::Url {
        &self.base_url
    }

    /// Checks that the remote accepts the credentials.
    #[instrument(skip(self, cancel))]
    pub async fn ping(&self, cancel: &CancellationToken) -> GalileoResult<()> {
        let _: Value = self.post(cancel, Endpoint::Ping, FormData::new()).await?;
        Ok(())
    }

    /// Lists the child accounts of `account_id`.
    ///
    /// <https://docs.galileo-ft.com/pro/reference/post_getrelatedaccounts>
    #[instrument(skip(self, cancel))]
    pub async fn list_related_accounts(
        &self,
        cancel: &CancellationToken,
        account_id: &str,
    ) -> GalileoResult<Vec<Account>> {
        let res: BaseResponse<Option<RelatedAccountsResponse>> = self
            .post(
                cancel,
                Endpoint::RelatedAccounts,
                FormData::new().account_no(account_id),
            )
            .await?;

        Ok(res.data.map(|d| d.children).unwrap_or_default())
    }

    /// Fetches the customer profile of an account.
    ///
    /// <https://docs.galileo-ft.com/pro/reference/post_getaccountoverview>
    #[instrument(skip(self, cancel))]
    pub async fn get_customer(
        &self,
        cancel: &CancellationToken,
        account_id: &str,
    ) -> GalileoResult<Customer> {
        let res: BaseResponse<Option<AccountOverviewResponse>> = self
            .post(
                cancel,
                Endpoint::AccountOverview,
                FormData::new().account_no(account_id),
            )
            .await?;

        res.data
            .and_then(|d| d.profile)
            .ok_or_else(|| GalileoError::CustomerNotFound {
                account_id: account_id.to_string(),
            })
    }

    /// Fetches one page of root groups; returns the groups and the total
    /// number of pages.
    ///
    /// <https://docs.galileo-ft.com/pro/reference/post_getrootgroups>
    #[instrument(skip(self, cancel))]
    pub async fn list_root_groups(
        &self,
        cancel: &CancellationToken,
        vars: PaginationVars,
    ) -> GalileoResult<(Vec<Group>, u32)> {
        let res: ListResponse<Group> = self
            .post(cancel, Endpoint::RootGroups, FormData::new().pagination(vars))
            .await?;

        let groups = res.data.unwrap_or_default();
        debug!(
            groups = groups.len(),
            page = res.page,
            number_of_pages = res.number_of_pages,
            "Fetched root groups"
        );
        Ok((groups, res.number_of_pages))
    }

    /// Lists the ids of every group below `parent_group_id`, pre-order.
    ///
    /// A root group has at most five levels below it; the flattening does not
    /// rely on that bound.
    ///
    /// <https://docs.galileo-ft.com/pro/reference/post_getgrouphierarchy>
    #[instrument(skip(self, cancel))]
    pub async fn list_children_groups(
        &self,
        cancel: &CancellationToken,
        parent_group_id: &str,
    ) -> GalileoResult<Vec<String>> {
        let res: BaseResponse<Option<Vec<GroupHierarchy>>> = self
            .post(
                cancel,
                Endpoint::GroupHierarchy,
                FormData::new().group_id(parent_group_id),
            )
            .await?;

        let mut ids = flatten_group_ids(&res.data.unwrap_or_default());
        // The hierarchy may be rooted at the requested group itself.
        ids.retain(|id| id != parent_group_id && !id.is_empty());
        Ok(ids)
    }

    /// Fetches full records for a batch of groups.
    ///
    /// <https://docs.galileo-ft.com/pro/reference/post_getgroupsinfo>
    #[instrument(skip(self, cancel))]
    pub async fn get_groups_info(
        &self,
        cancel: &CancellationToken,
        group_ids: &[String],
    ) -> GalileoResult<Vec<Group>> {
        let res: BaseResponse<Option<Vec<Group>>> = self
            .post(
                cancel,
                Endpoint::GroupsInfo,
                FormData::new().group_ids(group_ids),
            )
            .await?;

        Ok(res.data.unwrap_or_default())
    }

    /// Fetches the membership edge of one group.
    ///
    /// More than one record for a single group is a protocol error; no record
    /// means the group has no accounts.
    ///
    /// <https://docs.galileo-ft.com/pro/reference/post_getaccountgrouprelationships>
    #[instrument(skip(self, cancel))]
    pub async fn list_group_members(
        &self,
        cancel: &CancellationToken,
        group_id: &str,
    ) -> GalileoResult<GroupToAccounts> {
        let res: BaseResponse<Option<Vec<GroupToAccounts>>> = self
            .post(
                cancel,
                Endpoint::GroupsToAccounts,
                FormData::new().group_id(group_id),
            )
            .await?;

        let mut records = res.data.unwrap_or_default();
        if records.len() > 1 {
            return Err(GalileoError::UnexpectedMembershipCount {
                group_id: group_id.to_string(),
                count: records.len(),
            });
        }

        Ok(records.pop().unwrap_or_else(|| GroupToAccounts {
            group_id: group_id.to_string(),
            account_ids: Vec::new(),
        }))
    }

    /// Places an account in a group.
    ///
    /// <https://docs.galileo-ft.com/pro/reference/post_setaccountgrouprelationships>
    #[instrument(skip(self, cancel))]
    pub async fn add_account_to_group(
        &self,
        cancel: &CancellationToken,
        group_id: &str,
        account_id: &str,
    ) -> GalileoResult<()> {
        let _: Value = self
            .post(
                cancel,
                Endpoint::AddAccountToGroup,
                FormData::new()
                    .group_id(group_id)
                    .account_ids(&[account_id.to_string()]),
            )
            .await?;
        Ok(())
    }

    /// Removes an account from a group.
    ///
    /// <https://docs.galileo-ft.com/pro/reference/post_removeaccountgrouprelationship>
    #[instrument(skip(self, cancel))]
    pub async fn remove_account_from_group(
        &self,
        cancel: &CancellationToken,
        group_id: &str,
        account_id: &str,
    ) -> GalileoResult<()> {
        let _: Value = self
            .post(
                cancel,
                Endpoint::RemoveAccountFromGroup,
                FormData::new()
                    .group_id(group_id)
                    .account_ids(&[account_id.to_string()]),
            )
            .await?;
        Ok(())
    }

    /// Sends one form request and decodes the envelope into `T`.
    async fn post<T: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        endpoint: Endpoint,
        form: FormData,
    ) -> GalileoResult<T> {
        let name = endpoint.name();
        if cancel.is_cancelled() {
            return Err(GalileoError::Cancelled { endpoint: name });
        }

        let url = self
            .base_url
            .join(&endpoint.path())
            .map_err(|e| GalileoError::Config(format!("invalid endpoint url: {e}")))?;

        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(form.encode(&self.config))
            .finish();

        let request = self
            .http_client
            .post(url)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(RESPONSE_CONTENT_TYPE, "json")
            .body(body);

        debug!(endpoint = name, "Sending request");

        let exchange = async {
            let response = request
                .send()
                .await
                .map_err(|source| GalileoError::Http {
                    endpoint: name,
                    source,
                })?;

            let status = response.status();
            let content_type = response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            let body = response.text().await.map_err(|source| GalileoError::Http {
                endpoint: name,
                source,
            })?;

            Ok::<_, GalileoError>((status, content_type, body))
        };

        let (status, content_type, body) = cancel
            .run_until_cancelled(exchange)
            .await
            .ok_or(GalileoError::Cancelled { endpoint: name })??;

        debug!(endpoint = name, status = %status, "Received response");
        decode_response(name, status, &content_type, &body)
    }
}

/// Decode a response body, turning error envelopes into [`GalileoError::Api`].
fn decode_response<T: DeserializeOwned>(
    endpoint: &'static str,
    status: StatusCode,
    content_type: &str,
    body: &str,
) -> GalileoResult<T> {
    if !status.is_success() {
        if let Ok(ErrorResponse {
            code: Some(status_code),
            status,
        }) = serde_json::from_str::<ErrorResponse>(body)
        {
            return Err(GalileoError::Api {
                endpoint,
                status_code,
                status,
            });
        }

        return Err(GalileoError::HttpStatus {
            endpoint,
            status: status.as_u16(),
            body: body.to_string(),
        });
    }

    if !is_json(content_type) {
        return Err(GalileoError::UnexpectedContentType {
            endpoint,
            content_type: content_type.to_string(),
            body: body.to_string(),
        });
    }

    let value: Value =
        serde_json::from_str(body).map_err(|source| GalileoError::Json { endpoint, source })?;

    let envelope = ErrorResponse::from_value(&value);
    if let Some(status_code) = envelope.code.filter(|code| *code != 0) {
        return Err(GalileoError::Api {
            endpoint,
            status_code,
            status: envelope.status,
        });
    }

    serde_json::from_value(value).map_err(|source| GalileoError::Json { endpoint, source })
}

fn is_json(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}
