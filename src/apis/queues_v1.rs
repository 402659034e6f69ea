//! Agent queues.

use crate::apis::errors::ApiError;
use crate::apis::path::Operation;
use crate::apis::query::{require, require_path, QueryParams};
use crate::apis::response::ApiResponse;
use crate::apis::runtime::ApiClient;
use crate::clients::{HttpClient, HttpMethod, Transport};
use crate::models::{Model, V1ListQueuesResponse, V1Queue};

const CREATE_QUEUE: Operation = Operation::new(
    "create_queue",
    HttpMethod::Post,
    "/api/v1/orgs/{owner}/agents/{agent}/queues",
);
const DELETE_QUEUE: Operation = Operation::new(
    "delete_queue",
    HttpMethod::Delete,
    "/api/v1/orgs/{owner}/agents/{agent}/queues/{uuid}",
);
const GET_QUEUE: Operation = Operation::new(
    "get_queue",
    HttpMethod::Get,
    "/api/v1/orgs/{owner}/agents/{agent}/queues/{uuid}",
);
const LIST_QUEUE_NAMES: Operation = Operation::new(
    "list_queue_names",
    HttpMethod::Get,
    "/api/v1/orgs/{owner}/agents/{agent}/queues/names",
);
const LIST_QUEUES: Operation = Operation::new(
    "list_queues",
    HttpMethod::Get,
    "/api/v1/orgs/{owner}/agents/{agent}/queues",
);
const LIST_ORGANIZATION_QUEUES: Operation = Operation::new(
    "list_organization_queues",
    HttpMethod::Get,
    "/api/v1/orgs/{owner}/queues",
);
const PATCH_QUEUE: Operation = Operation::new(
    "patch_queue",
    HttpMethod::Patch,
    "/api/v1/orgs/{owner}/agents/{queue.agent}/queues/{queue.uuid}",
);
const UPDATE_QUEUE: Operation = Operation::new(
    "update_queue",
    HttpMethod::Put,
    "/api/v1/orgs/{owner}/agents/{queue.agent}/queues/{queue.uuid}",
);

/// Parameters for [`QueuesV1Api::create_queue`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateQueueRequest {
    /// Required. The organization.
    pub owner: Option<String>,
    /// Required. The agent owning the queue.
    pub agent: Option<String>,
    /// Required. The queue to create.
    pub body: Option<V1Queue>,
}

/// Parameters for [`QueuesV1Api::get_queue`] and [`QueuesV1Api::delete_queue`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueueRequest {
    /// Required. The organization.
    pub owner: Option<String>,
    /// Required. The agent owning the queue.
    pub agent: Option<String>,
    /// Required. The queue uuid.
    pub uuid: Option<String>,
}

impl QueueRequest {
    /// Creates a request addressing one queue.
    #[must_use]
    pub fn new(
        owner: impl Into<String>,
        agent: impl Into<String>,
        uuid: impl Into<String>,
    ) -> Self {
        Self {
            owner: Some(owner.into()),
            agent: Some(agent.into()),
            uuid: Some(uuid.into()),
        }
    }
}

/// Parameters for the list operations.
///
/// `agent` is required by [`QueuesV1Api::list_queues`] and
/// [`QueuesV1Api::list_queue_names`], and ignored by
/// [`QueuesV1Api::list_organization_queues`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQueuesRequest {
    /// Required. The organization.
    pub owner: Option<String>,
    /// The agent whose queues are listed.
    pub agent: Option<String>,
    /// Pagination offset.
    pub offset: Option<i64>,
    /// Page size.
    pub limit: Option<i64>,
    /// Sort expression.
    pub sort: Option<String>,
    /// Search query.
    pub query: Option<String>,
}

impl ListQueuesRequest {
    fn query(&self) -> QueryParams {
        QueryParams::new()
            .push("offset", self.offset)
            .push("limit", self.limit)
            .push("sort", self.sort.as_deref())
            .push("query", self.query.as_deref())
    }
}

/// Parameters for [`QueuesV1Api::patch_queue`] and [`QueuesV1Api::update_queue`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateQueueRequest {
    /// Required. The organization.
    pub owner: Option<String>,
    /// Required. The agent owning the queue.
    pub queue_agent: Option<String>,
    /// Required. The uuid of the queue to change.
    pub queue_uuid: Option<String>,
    /// Required. The new field values.
    pub body: Option<V1Queue>,
}

/// Operations on the queues agents schedule runs through.
#[derive(Debug)]
pub struct QueuesV1Api<'a, T: Transport = HttpClient> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> QueuesV1Api<'a, T> {
    /// Creates the client over a shared [`ApiClient`].
    #[must_use]
    pub const fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Creates a queue, returning the undecoded response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameter`] if `owner`, `agent` or `body`
    /// is unset, or any dispatch error.
    pub async fn create_queue_raw(
        &self,
        params: &CreateQueueRequest,
    ) -> Result<ApiResponse<V1Queue>, ApiError> {
        let operation = &CREATE_QUEUE;
        let owner = require_path(operation.name, "owner", params.owner.as_deref())?;
        let agent = require_path(operation.name, "agent", params.agent.as_deref())?;
        let body = require(operation.name, "body", params.body.as_ref())?;

        self.client
            .json(
                operation,
                &[("owner", owner), ("agent", agent)],
                QueryParams::new(),
                Some(body.to_json()),
            )
            .await
    }

    /// Creates a queue.
    ///
    /// # Errors
    ///
    /// See [`create_queue_raw`](Self::create_queue_raw); also
    /// [`ApiError::Decode`] if the response does not decode.
    pub async fn create_queue(&self, params: &CreateQueueRequest) -> Result<V1Queue, ApiError> {
        self.create_queue_raw(params).await?.value()
    }

    /// Deletes a queue, returning the undecoded response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameter`] if `owner`, `agent` or `uuid`
    /// is unset, or any dispatch error.
    pub async fn delete_queue_raw(&self, params: &QueueRequest) -> Result<ApiResponse<()>, ApiError> {
        let operation = &DELETE_QUEUE;
        let path_params = queue_path(operation, params)?;
        self.client
            .void(operation, &path_params, QueryParams::new(), None)
            .await
    }

    /// Deletes a queue.
    ///
    /// # Errors
    ///
    /// See [`delete_queue_raw`](Self::delete_queue_raw).
    pub async fn delete_queue(&self, params: &QueueRequest) -> Result<(), ApiError> {
        self.delete_queue_raw(params).await?.value()
    }

    /// Fetches a queue, returning the undecoded response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameter`] if `owner`, `agent` or `uuid`
    /// is unset, or any dispatch error.
    pub async fn get_queue_raw(&self, params: &QueueRequest) -> Result<ApiResponse<V1Queue>, ApiError> {
        let operation = &GET_QUEUE;
        let path_params = queue_path(operation, params)?;
        self.client
            .json(operation, &path_params, QueryParams::new(), None)
            .await
    }

    /// Fetches a queue.
    ///
    /// # Errors
    ///
    /// See [`get_queue_raw`](Self::get_queue_raw); also
    /// [`ApiError::Decode`] if the response does not decode.
    pub async fn get_queue(&self, params: &QueueRequest) -> Result<V1Queue, ApiError> {
        self.get_queue_raw(params).await?.value()
    }

    /// Lists an agent's queue names, returning the undecoded response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameter`] if `owner` or `agent` is
    /// unset, or any dispatch error.
    pub async fn list_queue_names_raw(
        &self,
        params: &ListQueuesRequest,
    ) -> Result<ApiResponse<V1ListQueuesResponse>, ApiError> {
        self.list_agent_queues(&LIST_QUEUE_NAMES, params).await
    }

    /// Lists an agent's queue names.
    ///
    /// # Errors
    ///
    /// See [`list_queue_names_raw`](Self::list_queue_names_raw); also
    /// [`ApiError::Decode`] if the response does not decode.
    pub async fn list_queue_names(
        &self,
        params: &ListQueuesRequest,
    ) -> Result<V1ListQueuesResponse, ApiError> {
        self.list_queue_names_raw(params).await?.value()
    }

    /// Lists an agent's queues, returning the undecoded response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameter`] if `owner` or `agent` is
    /// unset, or any dispatch error.
    pub async fn list_queues_raw(
        &self,
        params: &ListQueuesRequest,
    ) -> Result<ApiResponse<V1ListQueuesResponse>, ApiError> {
        self.list_agent_queues(&LIST_QUEUES, params).await
    }

    /// Lists an agent's queues.
    ///
    /// # Errors
    ///
    /// See [`list_queues_raw`](Self::list_queues_raw); also
    /// [`ApiError::Decode`] if the response does not decode.
    pub async fn list_queues(
        &self,
        params: &ListQueuesRequest,
    ) -> Result<V1ListQueuesResponse, ApiError> {
        self.list_queues_raw(params).await?.value()
    }

    /// Lists the queues of every agent in the organization, returning the
    /// undecoded response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameter`] if `owner` is unset, or any
    /// dispatch error.
    pub async fn list_organization_queues_raw(
        &self,
        params: &ListQueuesRequest,
    ) -> Result<ApiResponse<V1ListQueuesResponse>, ApiError> {
        let operation = &LIST_ORGANIZATION_QUEUES;
        let owner = require_path(operation.name, "owner", params.owner.as_deref())?;

        self.client
            .json(operation, &[("owner", owner)], params.query(), None)
            .await
    }

    /// Lists the queues of every agent in the organization.
    ///
    /// # Errors
    ///
    /// See [`list_organization_queues_raw`](Self::list_organization_queues_raw);
    /// also [`ApiError::Decode`] if the response does not decode.
    pub async fn list_organization_queues(
        &self,
        params: &ListQueuesRequest,
    ) -> Result<V1ListQueuesResponse, ApiError> {
        self.list_organization_queues_raw(params).await?.value()
    }

    /// Partially updates a queue, returning the undecoded response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameter`] if `owner`, `queue_agent`,
    /// `queue_uuid` or `body` is unset, or any dispatch error.
    pub async fn patch_queue_raw(
        &self,
        params: &UpdateQueueRequest,
    ) -> Result<ApiResponse<V1Queue>, ApiError> {
        self.change_queue(&PATCH_QUEUE, params).await
    }

    /// Partially updates a queue.
    ///
    /// # Errors
    ///
    /// See [`patch_queue_raw`](Self::patch_queue_raw); also
    /// [`ApiError::Decode`] if the response does not decode.
    pub async fn patch_queue(&self, params: &UpdateQueueRequest) -> Result<V1Queue, ApiError> {
        self.patch_queue_raw(params).await?.value()
    }

    /// Replaces a queue, returning the undecoded response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameter`] if `owner`, `queue_agent`,
    /// `queue_uuid` or `body` is unset, or any dispatch error.
    pub async fn update_queue_raw(
        &self,
        params: &UpdateQueueRequest,
    ) -> Result<ApiResponse<V1Queue>, ApiError> {
        self.change_queue(&UPDATE_QUEUE, params).await
    }

    /// Replaces a queue.
    ///
    /// # Errors
    ///
    /// See [`update_queue_raw`](Self::update_queue_raw); also
    /// [`ApiError::Decode`] if the response does not decode.
    pub async fn update_queue(&self, params: &UpdateQueueRequest) -> Result<V1Queue, ApiError> {
        self.update_queue_raw(params).await?.value()
    }

    async fn list_agent_queues(
        &self,
        operation: &Operation,
        params: &ListQueuesRequest,
    ) -> Result<ApiResponse<V1ListQueuesResponse>, ApiError> {
        let owner = require_path(operation.name, "owner", params.owner.as_deref())?;
        let agent = require_path(operation.name, "agent", params.agent.as_deref())?;

        self.client
            .json(
                operation,
                &[("owner", owner), ("agent", agent)],
                params.query(),
                None,
            )
            .await
    }

    async fn change_queue(
        &self,
        operation: &Operation,
        params: &UpdateQueueRequest,
    ) -> Result<ApiResponse<V1Queue>, ApiError> {
        let owner = require_path(operation.name, "owner", params.owner.as_deref())?;
        let agent = require_path(operation.name, "queue_agent", params.queue_agent.as_deref())?;
        let uuid = require_path(operation.name, "queue_uuid", params.queue_uuid.as_deref())?;
        let body = require(operation.name, "body", params.body.as_ref())?;

        self.client
            .json(
                operation,
                &[
                    ("owner", owner),
                    ("queue.agent", agent),
                    ("queue.uuid", uuid),
                ],
                QueryParams::new(),
                Some(body.to_json()),
            )
            .await
    }
}

fn queue_path<'p>(
    operation: &Operation,
    params: &'p QueueRequest,
) -> Result<[(&'static str, &'p str); 3], ApiError> {
    Ok([
        ("owner", require_path(operation.name, "owner", params.owner.as_deref())?),
        ("agent", require_path(operation.name, "agent", params.agent.as_deref())?),
        ("uuid", require_path(operation.name, "uuid", params.uuid.as_deref())?),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::runtime::testing::RecordingTransport;
    use crate::config::{HostUrl, PolyaxonConfig};
    use serde_json::json;

    fn client(code: u16, body: &str) -> ApiClient<RecordingTransport> {
        let config = PolyaxonConfig::builder()
            .host(HostUrl::new("https://polyaxon.example.com").unwrap())
            .build()
            .unwrap();
        ApiClient::with_transport(config, RecordingTransport::new(code, body))
    }

    #[tokio::test]
    async fn test_create_queue_sends_falsy_fields() {
        let client = client(200, r#"{"uuid":"q1","name":"default","priority":0}"#);

        let queue = client
            .queues_v1()
            .create_queue(&CreateQueueRequest {
                owner: Some("acme".to_string()),
                agent: Some("agent-1".to_string()),
                body: Some(V1Queue {
                    name: Some("default".to_string()),
                    priority: Some(0),
                    description: Some(String::new()),
                    ..V1Queue::default()
                }),
            })
            .await
            .unwrap();
        assert_eq!(queue.uuid.as_deref(), Some("q1"));

        let request = client.transport().last();
        assert_eq!(request.path, "/api/v1/orgs/acme/agents/agent-1/queues");
        assert_eq!(
            request.body,
            Some(json!({"name": "default", "description": "", "priority": 0}))
        );
    }

    #[tokio::test]
    async fn test_get_queue_path() {
        let client = client(200, r#"{"uuid":"q1"}"#);

        client
            .queues_v1()
            .get_queue(&QueueRequest::new("acme", "agent-1", "q1"))
            .await
            .unwrap();

        let request = client.transport().last();
        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "/api/v1/orgs/acme/agents/agent-1/queues/q1");
    }

    #[tokio::test]
    async fn test_delete_queue_requires_agent() {
        let client = client(204, "");

        let error = client
            .queues_v1()
            .delete_queue(&QueueRequest {
                agent: None,
                ..QueueRequest::new("acme", "", "q1")
            })
            .await
            .unwrap_err();

        assert_eq!(error.missing_parameter(), Some("agent"));
        assert_eq!(error.operation(), "delete_queue");
        assert_eq!(client.transport().calls(), 0);
    }

    #[tokio::test]
    async fn test_list_queues_and_names() {
        let client = client(200, r#"{"count":1,"results":[{"uuid":"q1","name":"default"}]}"#);
        let params = ListQueuesRequest {
            owner: Some("acme".to_string()),
            agent: Some("agent-1".to_string()),
            limit: Some(20),
            ..ListQueuesRequest::default()
        };

        let page = client.queues_v1().list_queues(&params).await.unwrap();
        assert_eq!(page.items().len(), 1);
        let request = client.transport().last();
        assert_eq!(request.path, "/api/v1/orgs/acme/agents/agent-1/queues");
        assert_eq!(request.query_value("limit"), Some("20"));

        client.queues_v1().list_queue_names(&params).await.unwrap();
        assert_eq!(
            client.transport().last().path,
            "/api/v1/orgs/acme/agents/agent-1/queues/names"
        );
    }

    #[tokio::test]
    async fn test_list_organization_queues_ignores_agent() {
        let client = client(200, r#"{"count":0,"results":[]}"#);

        client
            .queues_v1()
            .list_organization_queues(&ListQueuesRequest {
                owner: Some("acme".to_string()),
                query: Some("priority:>1".to_string()),
                ..ListQueuesRequest::default()
            })
            .await
            .unwrap();

        let request = client.transport().last();
        assert_eq!(request.path, "/api/v1/orgs/acme/queues");
        assert_eq!(request.query_value("query"), Some("priority:>1"));
    }

    #[tokio::test]
    async fn test_list_queues_requires_agent() {
        let client = client(200, "{}");

        let error = client
            .queues_v1()
            .list_queues(&ListQueuesRequest {
                owner: Some("acme".to_string()),
                ..ListQueuesRequest::default()
            })
            .await
            .unwrap_err();

        assert_eq!(error.missing_parameter(), Some("agent"));
        assert_eq!(client.transport().calls(), 0);
    }

    #[tokio::test]
    async fn test_update_and_patch_queue_use_queue_placeholders() {
        let client = client(200, r#"{"uuid":"q1","concurrency":4}"#);
        let params = UpdateQueueRequest {
            owner: Some("acme".to_string()),
            queue_agent: Some("agent/1".to_string()),
            queue_uuid: Some("q1".to_string()),
            body: Some(V1Queue {
                concurrency: Some(4),
                ..V1Queue::default()
            }),
        };

        let queue = client.queues_v1().update_queue(&params).await.unwrap();
        assert_eq!(queue.concurrency, Some(4));
        let request = client.transport().last();
        assert_eq!(request.http_method, HttpMethod::Put);
        assert_eq!(request.path, "/api/v1/orgs/acme/agents/agent%2F1/queues/q1");

        client.queues_v1().patch_queue(&params).await.unwrap();
        assert_eq!(client.transport().last().http_method, HttpMethod::Patch);
    }

    #[tokio::test]
    async fn test_patch_queue_requires_body() {
        let client = client(200, "{}");

        let error = client
            .queues_v1()
            .patch_queue(&UpdateQueueRequest {
                owner: Some("acme".to_string()),
                queue_agent: Some("agent-1".to_string()),
                queue_uuid: Some("q1".to_string()),
                body: None,
            })
            .await
            .unwrap_err();

        assert_eq!(error.missing_parameter(), Some("body"));
        assert_eq!(client.transport().calls(), 0);
    }
}
