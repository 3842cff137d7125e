use async_graphql::{EmptySubscription, MergedObject, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

pub use crate::modules::calendar::use_cases::list_events::inbound::graphql::QueryRoot;
use crate::modules::calendar::use_cases::create_event::inbound::graphql::CreateEventMutation;
use crate::modules::calendar::use_cases::delete_event::inbound::graphql::DeleteEventMutation;
use crate::modules::calendar::use_cases::update_event::inbound::graphql::UpdateEventMutation;
use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

#[derive(MergedObject, Default)]
pub struct MutationRoot(CreateEventMutation, UpdateEventMutation, DeleteEventMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
