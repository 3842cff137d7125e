// Composition root for the calendar bounded context.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in memory event store and share it through AppState.
// - Wire the HTTP and GraphQL inbound adapters into one router.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod telemetry;
