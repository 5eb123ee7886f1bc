use tracing::info;

use crate::dashboard::Dashboard;

pub async fn execute(dashboard: &mut Dashboard, input: &str) {
    info!("🔎 Search command called with input: {:?}", input);
    dashboard.search(input).await;
}
