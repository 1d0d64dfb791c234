use userservice::config::ServiceConfig;
use userservice::observability;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::from_env_or_yaml()?;
    let metrics_handle = observability::init_observability();

    tracing::info!(
        service = %config.service_name,
        metrics_bind = %config.metrics_bind,
        "user service starting"
    );
    observability::serve_metrics(metrics_handle, config.metrics_bind).await?;
    Ok(())
}
