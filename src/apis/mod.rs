//! Resource clients for the Polyaxon REST API.
//!
//! Every operation comes in two forms:
//!
//! - `<operation>_raw` returns an [`ApiResponse`] once the server answers
//!   with a 2xx status. The body is decoded only when
//!   [`ApiResponse::value`] is called.
//! - `<operation>` awaits the raw form and decodes immediately.
//!
//! Parameters are passed as a struct with one `Option` field per path
//! parameter, query parameter and body. Unset required parameters fail with
//! [`ApiError::MissingParameter`] before anything is sent.
//!
//! # Example
//!
//! ```rust,no_run
//! use polyaxon_api::apis::{DeleteConnectionRequest, GetConnectionRequest};
//! use polyaxon_api::{ApiClient, ApiKey, HostUrl, PolyaxonConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PolyaxonConfig::builder()
//!     .host(HostUrl::new("https://polyaxon.example.com")?)
//!     .api_key(ApiKey::new("my-token")?)
//!     .build()?;
//! let client = ApiClient::new(config)?;
//!
//! let response = client
//!     .connections_v1()
//!     .get_connection_raw(&GetConnectionRequest {
//!         owner: Some("acme".to_string()),
//!         uuid: Some("u1".to_string()),
//!     })
//!     .await?;
//! println!("status {}", response.status());
//! let connection = response.value()?;
//!
//! client
//!     .connections_v1()
//!     .delete_connection(&DeleteConnectionRequest {
//!         owner: Some("acme".to_string()),
//!         uuid: connection.uuid,
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod connections_v1;
mod errors;
mod path;
mod query;
mod queues_v1;
mod response;
mod runs_v1;
mod runtime;

pub use connections_v1::{
    ConnectionsV1Api, CreateConnectionRequest, DeleteConnectionRequest, GetConnectionRequest,
    ListConnectionsRequest, UpdateConnectionRequest,
};
pub use errors::ApiError;
pub use path::{build_path, Operation};
pub use query::{require, require_path, CollectionFormat, QueryParams};
pub use queues_v1::{
    CreateQueueRequest, ListQueuesRequest, QueueRequest, QueuesV1Api, UpdateQueueRequest,
};
pub use response::ApiResponse;
pub use runs_v1::{CollectRunLogsRequest, GetMultiRunEventsRequest, RunsV1Api};
pub use runtime::ApiClient;
