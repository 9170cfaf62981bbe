use aws_sdk_sqs::config::Credentials;
use testcontainers::ContainerAsync;
use testcontainers_modules::{
    localstack::LocalStack,
    testcontainers::{runners::AsyncRunner, ImageExt, TestcontainersError},
};

pub fn local_config(endpoint_url: &str) -> aws_config::ConfigLoader {
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .endpoint_url(endpoint_url)
        .region(sqs_hello::config::DEFAULT_REGION)
        .credentials_provider(Credentials::new("test", "test", None, None, "static"))
}

pub async fn localstack() -> Result<(String, ContainerAsync<LocalStack>), TestcontainersError> {
    let request = LocalStack::default()
        .with_tag("latest")
        .with_env_var("SERVICES", "sqs")
        .with_env_var("SKIP_SSL_CERT_DOWNLOAD", "1");
    let container = request.start().await?;

    let host_ip = container.get_host().await?;
    let host_port = container.get_host_port_ipv4(4566).await?;
    let endpoint_url = format!("http://{host_ip}:{host_port}");

    Ok((endpoint_url, container))
}

/// Generate a unique queue name for testing, using a UUID suffix.
pub fn unique_queue_name(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4().simple())
}

/// Creates a queue through the SDK and returns its URL.
pub async fn create_queue(endpoint_url: &str, name: &str) -> String {
    let config = local_config(endpoint_url).load().await;
    let client = aws_sdk_sqs::Client::new(&config);

    client
        .create_queue()
        .queue_name(name)
        .send()
        .await
        .unwrap()
        .queue_url
        .expect("CreateQueue returned no QueueUrl")
}

pub fn test_config(endpoint_url: &str, queue_url: &str) -> sqs_hello::Config {
    sqs_hello::Config {
        region: sqs_hello::config::DEFAULT_REGION.into(),
        access_key_id: "test".into(),
        secret_access_key: "test".into(),
        queue_url: queue_url.into(),
        endpoint_url: None,
    }
    .with_endpoint_url(endpoint_url)
}
