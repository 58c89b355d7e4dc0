//! Host group collection

use serde::Deserialize;

use super::common::{ListParams, ListResponse};
use super::error::ApiError;
use super::Client;

pub const HOST_GROUPS_PATH: &str = "/configuration/hosts/groups";

#[derive(Debug, Clone, Deserialize)]
pub struct HostGroup {
    pub id: i64,
    pub name: String,
}

impl Client {
    /// GET /configuration/hosts/groups
    pub async fn list_host_groups(&self, params: &ListParams) -> Result<Vec<HostGroup>, ApiError> {
        let path = format!("{}{}", HOST_GROUPS_PATH, params.query_string());
        let response: ListResponse<HostGroup> = self.get(&path).await?;
        Ok(response.result)
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::SearchFilter;
    use super::super::test_helpers::create_test_client;
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn list_host_groups_passes_search_filter() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/centreon/api/latest/configuration/hosts/groups")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".into(), "25".into()),
                Matcher::UrlEncoded("page".into(), "1".into()),
                Matcher::UrlEncoded("search".into(), r#"{"name":"web"}"#.into()),
            ]))
            .with_body(r#"{"result":[{"id":7,"name":"web"},{"id":8,"name":"web-staging"}]}"#)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let groups = client
            .list_host_groups(
                &ListParams::new(25, 1).with_search(SearchFilter::new("name", "web")),
            )
            .await
            .unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].id, 7);
        assert_eq!(groups[1].name, "web-staging");
        mock.assert_async().await;
    }
}
