//! Connections: the external stores, registries and services an
//! organization's runs can mount or reach.

use crate::apis::errors::ApiError;
use crate::apis::path::Operation;
use crate::apis::query::{require, require_path, QueryParams};
use crate::apis::response::ApiResponse;
use crate::apis::runtime::ApiClient;
use crate::clients::{HttpClient, HttpMethod, Transport};
use crate::models::{Model, V1ConnectionResponse, V1ListConnectionsResponse};

const CREATE_CONNECTION: Operation = Operation::new(
    "create_connection",
    HttpMethod::Post,
    "/api/v1/orgs/{owner}/connections",
);
const DELETE_CONNECTION: Operation = Operation::new(
    "delete_connection",
    HttpMethod::Delete,
    "/api/v1/orgs/{owner}/connections/{uuid}",
);
const GET_CONNECTION: Operation = Operation::new(
    "get_connection",
    HttpMethod::Get,
    "/api/v1/orgs/{owner}/connections/{uuid}",
);
const LIST_CONNECTION_NAMES: Operation = Operation::new(
    "list_connection_names",
    HttpMethod::Get,
    "/api/v1/orgs/{owner}/connections/names",
);
const LIST_CONNECTIONS: Operation = Operation::new(
    "list_connections",
    HttpMethod::Get,
    "/api/v1/orgs/{owner}/connections",
);
const PATCH_CONNECTION: Operation = Operation::new(
    "patch_connection",
    HttpMethod::Patch,
    "/api/v1/orgs/{owner}/connections/{connection.uuid}",
);
const UPDATE_CONNECTION: Operation = Operation::new(
    "update_connection",
    HttpMethod::Put,
    "/api/v1/orgs/{owner}/connections/{connection.uuid}",
);

/// Parameters for [`ConnectionsV1Api::create_connection`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateConnectionRequest {
    /// Required. The organization.
    pub owner: Option<String>,
    /// Required. The connection to create.
    pub body: Option<V1ConnectionResponse>,
}

/// Parameters for [`ConnectionsV1Api::delete_connection`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeleteConnectionRequest {
    /// Required. The organization.
    pub owner: Option<String>,
    /// Required. The connection uuid.
    pub uuid: Option<String>,
}

/// Parameters for [`ConnectionsV1Api::get_connection`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GetConnectionRequest {
    /// Required. The organization.
    pub owner: Option<String>,
    /// Required. The connection uuid.
    pub uuid: Option<String>,
}

/// Parameters for [`ConnectionsV1Api::list_connections`] and
/// [`ConnectionsV1Api::list_connection_names`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListConnectionsRequest {
    /// Required. The organization.
    pub owner: Option<String>,
    /// Pagination offset.
    pub offset: Option<i64>,
    /// Page size.
    pub limit: Option<i64>,
    /// Sort expression, e.g. `-created_at`.
    pub sort: Option<String>,
    /// Search query, e.g. `kind:s3`.
    pub query: Option<String>,
}

impl ListConnectionsRequest {
    /// Creates a request for the first page of `owner`'s connections.
    #[must_use]
    pub fn for_owner(owner: impl Into<String>) -> Self {
        Self {
            owner: Some(owner.into()),
            ..Self::default()
        }
    }

    fn query(&self) -> QueryParams {
        QueryParams::new()
            .push("offset", self.offset)
            .push("limit", self.limit)
            .push("sort", self.sort.as_deref())
            .push("query", self.query.as_deref())
    }
}

/// Parameters for [`ConnectionsV1Api::patch_connection`] and
/// [`ConnectionsV1Api::update_connection`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateConnectionRequest {
    /// Required. The organization.
    pub owner: Option<String>,
    /// Required. The uuid of the connection to change.
    pub connection_uuid: Option<String>,
    /// Required. The new field values.
    pub body: Option<V1ConnectionResponse>,
}

/// Operations on an organization's connections.
///
/// # Example
///
/// ```rust,no_run
/// use polyaxon_api::apis::{CreateConnectionRequest, ListConnectionsRequest};
/// use polyaxon_api::models::V1ConnectionResponse;
/// use polyaxon_api::{ApiClient, PolyaxonConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = PolyaxonConfig::from_env()?;
/// let client = ApiClient::new(config)?;
/// let connections = client.connections_v1();
///
/// let created = connections
///     .create_connection(&CreateConnectionRequest {
///         owner: Some("acme".to_string()),
///         body: Some(V1ConnectionResponse::named("conn1")),
///     })
///     .await?;
/// println!("created {:?}", created.uuid);
///
/// let page = connections
///     .list_connections(&ListConnectionsRequest::for_owner("acme"))
///     .await?;
/// for connection in page.items() {
///     println!("{:?}", connection.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConnectionsV1Api<'a, T: Transport = HttpClient> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> ConnectionsV1Api<'a, T> {
    /// Creates the client over a shared [`ApiClient`].
    #[must_use]
    pub const fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Creates a connection, returning the undecoded response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameter`] if `owner` or `body` is unset,
    /// or any dispatch error.
    pub async fn create_connection_raw(
        &self,
        params: &CreateConnectionRequest,
    ) -> Result<ApiResponse<V1ConnectionResponse>, ApiError> {
        let operation = &CREATE_CONNECTION;
        let owner = require_path(operation.name, "owner", params.owner.as_deref())?;
        let body = require(operation.name, "body", params.body.as_ref())?;

        self.client
            .json(
                operation,
                &[("owner", owner)],
                QueryParams::new(),
                Some(body.to_json()),
            )
            .await
    }

    /// Creates a connection.
    ///
    /// # Errors
    ///
    /// See [`create_connection_raw`](Self::create_connection_raw); also
    /// [`ApiError::Decode`] if the response does not decode.
    pub async fn create_connection(
        &self,
        params: &CreateConnectionRequest,
    ) -> Result<V1ConnectionResponse, ApiError> {
        self.create_connection_raw(params).await?.value()
    }

    /// Deletes a connection, returning the undecoded response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameter`] if `owner` or `uuid` is unset,
    /// or any dispatch error.
    pub async fn delete_connection_raw(
        &self,
        params: &DeleteConnectionRequest,
    ) -> Result<ApiResponse<()>, ApiError> {
        let operation = &DELETE_CONNECTION;
        let owner = require_path(operation.name, "owner", params.owner.as_deref())?;
        let uuid = require_path(operation.name, "uuid", params.uuid.as_deref())?;

        self.client
            .void(
                operation,
                &[("owner", owner), ("uuid", uuid)],
                QueryParams::new(),
                None,
            )
            .await
    }

    /// Deletes a connection.
    ///
    /// # Errors
    ///
    /// See [`delete_connection_raw`](Self::delete_connection_raw).
    pub async fn delete_connection(&self, params: &DeleteConnectionRequest) -> Result<(), ApiError> {
        self.delete_connection_raw(params).await?.value()
    }

    /// Fetches a connection, returning the undecoded response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameter`] if `owner` or `uuid` is unset,
    /// or any dispatch error.
    pub async fn get_connection_raw(
        &self,
        params: &GetConnectionRequest,
    ) -> Result<ApiResponse<V1ConnectionResponse>, ApiError> {
        let operation = &GET_CONNECTION;
        let owner = require_path(operation.name, "owner", params.owner.as_deref())?;
        let uuid = require_path(operation.name, "uuid", params.uuid.as_deref())?;

        self.client
            .json(
                operation,
                &[("owner", owner), ("uuid", uuid)],
                QueryParams::new(),
                None,
            )
            .await
    }

    /// Fetches a connection.
    ///
    /// # Errors
    ///
    /// See [`get_connection_raw`](Self::get_connection_raw); also
    /// [`ApiError::Decode`] if the response does not decode.
    pub async fn get_connection(
        &self,
        params: &GetConnectionRequest,
    ) -> Result<V1ConnectionResponse, ApiError> {
        self.get_connection_raw(params).await?.value()
    }

    /// Lists connection names, returning the undecoded response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameter`] if `owner` is unset, or any
    /// dispatch error.
    pub async fn list_connection_names_raw(
        &self,
        params: &ListConnectionsRequest,
    ) -> Result<ApiResponse<V1ListConnectionsResponse>, ApiError> {
        let operation = &LIST_CONNECTION_NAMES;
        let owner = require_path(operation.name, "owner", params.owner.as_deref())?;

        self.client
            .json(operation, &[("owner", owner)], params.query(), None)
            .await
    }

    /// Lists connection names. Only `uuid` and `name` are populated.
    ///
    /// # Errors
    ///
    /// See [`list_connection_names_raw`](Self::list_connection_names_raw);
    /// also [`ApiError::Decode`] if the response does not decode.
    pub async fn list_connection_names(
        &self,
        params: &ListConnectionsRequest,
    ) -> Result<V1ListConnectionsResponse, ApiError> {
        self.list_connection_names_raw(params).await?.value()
    }

    /// Lists connections, returning the undecoded response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameter`] if `owner` is unset, or any
    /// dispatch error.
    pub async fn list_connections_raw(
        &self,
        params: &ListConnectionsRequest,
    ) -> Result<ApiResponse<V1ListConnectionsResponse>, ApiError> {
        let operation = &LIST_CONNECTIONS;
        let owner = require_path(operation.name, "owner", params.owner.as_deref())?;

        self.client
            .json(operation, &[("owner", owner)], params.query(), None)
            .await
    }

    /// Lists connections.
    ///
    /// # Errors
    ///
    /// See [`list_connections_raw`](Self::list_connections_raw); also
    /// [`ApiError::Decode`] if the response does not decode.
    pub async fn list_connections(
        &self,
        params: &ListConnectionsRequest,
    ) -> Result<V1ListConnectionsResponse, ApiError> {
        self.list_connections_raw(params).await?.value()
    }

    /// Partially updates a connection, returning the undecoded response.
    ///
    /// Only fields set on the body are sent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameter`] if `owner`, `connection_uuid`
    /// or `body` is unset, or any dispatch error.
    pub async fn patch_connection_raw(
        &self,
        params: &UpdateConnectionRequest,
    ) -> Result<ApiResponse<V1ConnectionResponse>, ApiError> {
        self.change_connection(&PATCH_CONNECTION, params).await
    }

    /// Partially updates a connection.
    ///
    /// # Errors
    ///
    /// See [`patch_connection_raw`](Self::patch_connection_raw); also
    /// [`ApiError::Decode`] if the response does not decode.
    pub async fn patch_connection(
        &self,
        params: &UpdateConnectionRequest,
    ) -> Result<V1ConnectionResponse, ApiError> {
        self.patch_connection_raw(params).await?.value()
    }

    /// Replaces a connection, returning the undecoded response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameter`] if `owner`, `connection_uuid`
    /// or `body` is unset, or any dispatch error.
    pub async fn update_connection_raw(
        &self,
        params: &UpdateConnectionRequest,
    ) -> Result<ApiResponse<V1ConnectionResponse>, ApiError> {
        self.change_connection(&UPDATE_CONNECTION, params).await
    }

    /// Replaces a connection.
    ///
    /// # Errors
    ///
    /// See [`update_connection_raw`](Self::update_connection_raw); also
    /// [`ApiError::Decode`] if the response does not decode.
    pub async fn update_connection(
        &self,
        params: &UpdateConnectionRequest,
    ) -> Result<V1ConnectionResponse, ApiError> {
        self.update_connection_raw(params).await?.value()
    }

    async fn change_connection(
        &self,
        operation: &Operation,
        params: &UpdateConnectionRequest,
    ) -> Result<ApiResponse<V1ConnectionResponse>, ApiError> {
        let owner = require_path(operation.name, "owner", params.owner.as_deref())?;
        let uuid = require_path(
            operation.name,
            "connection_uuid",
            params.connection_uuid.as_deref(),
        )?;
        let body = require(operation.name, "body", params.body.as_ref())?;

        self.client
            .json(
                operation,
                &[("owner", owner), ("connection.uuid", uuid)],
                QueryParams::new(),
                Some(body.to_json()),
            )
            .await
    }
}
