use business::domain::errors::RemoteError;
use business::domain::session::errors::SessionError;
use business::domain::supply::errors::SupplyError;

/// Single mapping point from domain error codes to operator-facing text.
pub fn supply_message(err: &SupplyError) -> String {
    match err {
        SupplyError::NameEmpty => "The supply name cannot be empty.".to_string(),
        SupplyError::NegativeQuantity => "The quantity cannot be negative.".to_string(),
        SupplyError::NegativePrice => "The price cannot be negative.".to_string(),
        SupplyError::NotFound => "No supply exists with that id.".to_string(),
        SupplyError::NoActiveSelection => "No supply is selected for editing.".to_string(),
        SupplyError::OperationInFlight => {
            "Another operation on this supply is still running; try again.".to_string()
        }
        SupplyError::Remote(remote) => remote_message(remote),
    }
}

pub fn session_message(err: &SessionError) -> String {
    match err {
        SessionError::MissingCredentials => "Username and password are required.".to_string(),
        SessionError::InvalidCredentials => "Invalid username or password.".to_string(),
        SessionError::NotLoggedIn => "No active session; nothing to log out.".to_string(),
        SessionError::Remote(remote) => remote_message(remote),
    }
}

fn remote_message(err: &RemoteError) -> String {
    match err {
        RemoteError::Unreachable => {
            "Could not reach the inventory API; check the connection and retry.".to_string()
        }
        RemoteError::MalformedResponse => {
            "The inventory API returned an unreadable response.".to_string()
        }
        RemoteError::Unauthorized => {
            "The session expired; run `farm-console login` again.".to_string()
        }
        RemoteError::NotFound => "No supply exists with that id.".to_string(),
        RemoteError::Rejected => "The inventory API rejected the operation; retry.".to_string(),
    }
}
