//! Test helpers for the Centreon API

#[cfg(test)]
pub fn create_test_client(url: &str) -> super::Client {
    let stripped = url.strip_prefix("http://").unwrap_or(url);
    let (server, port) = stripped.split_once(':').unwrap_or((stripped, "80"));

    super::Client::new(super::ClientConfig {
        protocol: "http".to_string(),
        server: server.to_string(),
        port: port.to_string(),
        api_version: "latest".to_string(),
        api_key: "test-key".to_string(),
    })
    .unwrap()
}
