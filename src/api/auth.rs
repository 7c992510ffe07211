//! Session commands

use travana_core::auth::TokenStore;
use travana_core::endpoints;
use travana_core::models::{AuthResponse, LoginRequest, RegisterRequest, User};
use travana_core::thunks;
use travana_core::{Action, Dispatcher};

use super::ApiClient;

/// Sign in and keep the returned token
pub async fn login(api: ApiClient, body: LoginRequest) -> Result<AuthResponse, String> {
    thunks::LOGIN
        .run(api.dispatch(), &body, async {
            let response: AuthResponse = api.post(endpoints::LOGIN, &body).await?;
            api.tokens().set(&response.token);
            Ok(response)
        })
        .await
}

pub async fn register(api: ApiClient, body: RegisterRequest) -> Result<AuthResponse, String> {
    thunks::REGISTER
        .run(api.dispatch(), &body, async {
            let response: AuthResponse = api.post(endpoints::REGISTER, &body).await?;
            api.tokens().set(&response.token);
            Ok(response)
        })
        .await
}

/// Exchange a stored token for the user. `None` when nothing is stored.
pub async fn restore_session(api: ApiClient) -> Option<Result<User, String>> {
    if api.tokens().get().is_none() {
        log::debug!("[AUTH] no stored token");
        return None;
    }
    let result = thunks::FETCH_CURRENT_USER
        .run(api.dispatch(), &(), api.get(endpoints::CURRENT_USER))
        .await;
    Some(result)
}

/// Forget the token and every piece of user data
pub fn logout(api: ApiClient) {
    log::info!("[AUTH] logout");
    api.tokens().clear();
    api.dispatch().dispatch(Action::Logout);
}
