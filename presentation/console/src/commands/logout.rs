use crate::commands::messages;
use crate::setup::dependency_injection::DependencyContainer;

pub async fn run(container: &DependencyContainer) -> anyhow::Result<()> {
    match container.logout.execute().await {
        Ok(()) => {
            println!("Logged out.");
            Ok(())
        }
        Err(err) => Err(anyhow::anyhow!(messages::session_message(&err))),
    }
}
