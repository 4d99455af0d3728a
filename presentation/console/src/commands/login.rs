use business::domain::session::use_cases::login::LoginParams;

use crate::commands::messages;
use crate::setup::dependency_injection::DependencyContainer;

pub async fn run(
    container: &DependencyContainer,
    username: String,
    password: String,
) -> anyhow::Result<()> {
    match container
        .login
        .execute(LoginParams { username, password })
        .await
    {
        Ok(session) => {
            println!("Logged in as {}.", session.user.username);
            Ok(())
        }
        Err(err) => Err(anyhow::anyhow!(messages::session_message(&err))),
    }
}
