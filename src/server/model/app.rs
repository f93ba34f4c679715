#[derive(Clone)]
pub struct AppState {
    pub sso_client: ssoready_client::Client,
}

impl From<ssoready_client::Client> for AppState {
    fn from(sso_client: ssoready_client::Client) -> Self {
        Self { sso_client }
    }
}
