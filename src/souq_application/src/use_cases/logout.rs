/// Logout use case - acknowledges the end of a session
///
/// Tokens are not tracked server side. An issued token stays valid until it
/// expires, so logout only confirms the request for the client.
#[derive(Default)]
pub struct LogoutUseCase;

impl LogoutUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Execute the logout use case
    ///
    /// # Arguments
    /// * `user_id` - Id of the user taken from the verified access token
    ///
    /// # Returns
    /// The confirmation message for the client
    #[tracing::instrument(name = "LogoutUseCase::execute", skip(self))]
    pub fn execute(&self, user_id: i64) -> String {
        format!("User with ID {user_id} has been logged out successfully")
    }
}
