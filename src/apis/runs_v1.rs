//! Run streams: log collection and multi-run event queries.

use crate::apis::errors::ApiError;
use crate::apis::path::Operation;
use crate::apis::query::{require, require_path, CollectionFormat, QueryParams};
use crate::apis::response::ApiResponse;
use crate::apis::runtime::ApiClient;
use crate::clients::{HttpClient, HttpMethod, Transport};
use crate::models::{V1ArtifactKind, V1EventsResponse};

const COLLECT_RUN_LOGS: Operation = Operation::new(
    "collect_run_logs",
    HttpMethod::Post,
    "/streams/v1/{namespace}/_internal/{owner}/{project}/runs/{uuid}/{kind}/logs",
);
const GET_MULTI_RUN_EVENTS: Operation = Operation::new(
    "get_multi_run_events",
    HttpMethod::Get,
    "/streams/v1/{namespace}/{owner}/{entity}/runs/multi/events/{kind}",
);

/// Parameters for [`RunsV1Api::collect_run_logs`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectRunLogsRequest {
    /// Required. The namespace the run executed in.
    pub namespace: Option<String>,
    /// Required. The organization.
    pub owner: Option<String>,
    /// Required. The project.
    pub project: Option<String>,
    /// Required. The run uuid.
    pub uuid: Option<String>,
    /// Required. The run kind, e.g. `job`.
    pub kind: Option<String>,
}

/// Parameters for [`RunsV1Api::get_multi_run_events`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GetMultiRunEventsRequest {
    /// Required. The streams namespace.
    pub namespace: Option<String>,
    /// Required. The organization.
    pub owner: Option<String>,
    /// Required. The project the runs belong to.
    pub entity: Option<String>,
    /// Required. The event kind to fetch.
    pub kind: Option<V1ArtifactKind>,
    /// Event names, sent comma-separated.
    pub names: Option<Vec<String>>,
    /// Run uuids, sent comma-separated.
    pub runs: Option<Vec<String>>,
    /// Result orientation, e.g. `dict` or `csv`.
    pub orient: Option<String>,
    /// Bypass the streams cache.
    pub force: Option<bool>,
}

/// Operations on the streams service for runs.
#[derive(Debug)]
pub struct RunsV1Api<'a, T: Transport = HttpClient> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> RunsV1Api<'a, T> {
    /// Creates the client over a shared [`ApiClient`].
    #[must_use]
    pub const fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Asks the streams service to archive a run's logs, returning the
    /// undecoded response.
    ///
    /// The service answers `200` or `204`; neither carries a value.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameter`] if any path parameter is
    /// unset, or any dispatch error.
    pub async fn collect_run_logs_raw(
        &self,
        params: &CollectRunLogsRequest,
    ) -> Result<ApiResponse<()>, ApiError> {
        let operation = &COLLECT_RUN_LOGS;
        let name = operation.name;
        let namespace = require_path(name, "namespace", params.namespace.as_deref())?;
        let owner = require_path(name, "owner", params.owner.as_deref())?;
        let project = require_path(name, "project", params.project.as_deref())?;
        let uuid = require_path(name, "uuid", params.uuid.as_deref())?;
        let kind = require_path(name, "kind", params.kind.as_deref())?;

        self.client
            .void(
                operation,
                &[
                    ("namespace", namespace),
                    ("owner", owner),
                    ("project", project),
                    ("uuid", uuid),
                    ("kind", kind),
                ],
                QueryParams::new(),
                None,
            )
            .await
    }

    /// Asks the streams service to archive a run's logs.
    ///
    /// # Errors
    ///
    /// See [`collect_run_logs_raw`](Self::collect_run_logs_raw).
    pub async fn collect_run_logs(&self, params: &CollectRunLogsRequest) -> Result<(), ApiError> {
        self.collect_run_logs_raw(params).await?.value()
    }

    /// Fetches events of one kind across several runs, returning the
    /// undecoded response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameter`] if `namespace`, `owner`,
    /// `entity` or `kind` is unset, or any dispatch error.
    pub async fn get_multi_run_events_raw(
        &self,
        params: &GetMultiRunEventsRequest,
    ) -> Result<ApiResponse<V1EventsResponse>, ApiError> {
        let operation = &GET_MULTI_RUN_EVENTS;
        let name = operation.name;
        let namespace = require_path(name, "namespace", params.namespace.as_deref())?;
        let owner = require_path(name, "owner", params.owner.as_deref())?;
        let entity = require_path(name, "entity", params.entity.as_deref())?;
        let kind = require(name, "kind", params.kind.as_ref())?;

        let query = QueryParams::new()
            .push_list("names", params.names.as_deref(), CollectionFormat::Csv)
            .push_list("runs", params.runs.as_deref(), CollectionFormat::Csv)
            .push("orient", params.orient.as_deref())
            .push("force", params.force);

        self.client
            .json(
                operation,
                &[
                    ("namespace", namespace),
                    ("owner", owner),
                    ("entity", entity),
                    ("kind", kind.as_str()),
                ],
                query,
                None,
            )
            .await
    }

    /// Fetches events of one kind across several runs.
    ///
    /// # Errors
    ///
    /// See [`get_multi_run_events_raw`](Self::get_multi_run_events_raw);
    /// also [`ApiError::Decode`] if the response does not decode.
    pub async fn get_multi_run_events(
        &self,
        params: &GetMultiRunEventsRequest,
    ) -> Result<V1EventsResponse, ApiError> {
        self.get_multi_run_events_raw(params).await?.value()
    }
}
