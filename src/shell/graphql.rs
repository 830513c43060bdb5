use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, http::HeaderMap, response::Html};

use crate::modules::schedule::use_cases::commit_schedule::inbound::graphql::ScheduleMutation;
use crate::modules::schedule::use_cases::list_activity::inbound::graphql::ActivityQuery;
use crate::modules::schedule::use_cases::record_work_hours::inbound::graphql::{
    WorkHoursMutation, WorkHoursQuery,
};
use crate::modules::schedule::use_cases::view_calendar::inbound::graphql::CalendarQuery;
use crate::shell::state::{Actor, AppState};

#[derive(MergedObject, Default)]
pub struct QueryRoot(CalendarQuery, WorkHoursQuery, ActivityQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(WorkHoursMutation, ScheduleMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let request = req.into_inner().data(Actor::from_headers(&headers));
    schema.execute(request).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
