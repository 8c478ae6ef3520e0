//! Hooks applied to every request before dispatch and every response after.

use crate::{
    error::ApiError,
    models::session,
    navigation::{is_auth_page, Navigator, LOGIN_PATH},
    storage::KeyValueStore,
};

use super::{ApiRequest, ApiResponse};

const AUTH_ENDPOINTS: [&str; 2] = ["/auth/login", "/auth/register"];

/// Login and registration calls report their own 401s.
pub fn is_auth_endpoint(path: &str) -> bool {
    AUTH_ENDPOINTS.iter().any(|endpoint| path.contains(endpoint))
}

/// Adds `Content-Type: application/json` unless the request sets its own.
pub fn apply_default_headers(request: &mut ApiRequest) {
    if request.header_value("Content-Type").is_none() {
        request.set_header("Content-Type", "application/json");
    }
}

/// Adds `Authorization: Bearer <token>` when a token is stored.
pub fn attach_bearer_token(request: &mut ApiRequest, store: &dyn KeyValueStore) {
    if let Some(token) = session::token(store) {
        request.set_header("Authorization", &format!("Bearer {token}"));
    }
}

/// Passes 2xx responses through. Anything else becomes an [ApiError]; a 401
/// from outside the auth endpoints also ends the session first.
pub fn check_response(
    request: &ApiRequest,
    response: ApiResponse,
    store: &dyn KeyValueStore,
    navigator: &dyn Navigator,
) -> Result<ApiResponse, ApiError> {
    if response.is_success() {
        return Ok(response);
    }

    let error = ApiError::from_status(response.status, &response.body);
    if error.is_unauthorized() {
        handle_unauthorized(request, store, navigator);
    }

    Err(error)
}

fn handle_unauthorized(request: &ApiRequest, store: &dyn KeyValueStore, navigator: &dyn Navigator) {
    if is_auth_endpoint(&request.path) {
        return;
    }

    tracing::warn!("{} {} was unauthorized, ending session", request.method, request.path);
    session::clear(store);

    if !is_auth_page(&navigator.current_path()) {
        navigator.redirect(LOGIN_PATH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::session::{TOKEN_KEY, USER_KEY},
        test_utils::{signed_in_store, MemoryStore, RecordingNavigator},
    };

    #[test]
    fn auth_endpoints_are_recognized_by_substring() {
        assert!(is_auth_endpoint("/auth/login"));
        assert!(is_auth_endpoint("/auth/register"));
        assert!(is_auth_endpoint("/api/auth/login?next=/"));
        assert!(!is_auth_endpoint("/auth/me"));
        assert!(!is_auth_endpoint("/expenses"));
    }

    #[test]
    fn bearer_token_added_only_when_stored() {
        let mut with_token = ApiRequest::get("/expenses");
        attach_bearer_token(&mut with_token, &MemoryStore::with_items([(TOKEN_KEY, "abc")]));

        let mut without_token = ApiRequest::get("/expenses");
        attach_bearer_token(&mut without_token, &MemoryStore::new());

        assert_eq!(with_token.header_value("Authorization"), Some("Bearer abc"));
        assert_eq!(without_token.header_value("Authorization"), None);
    }

    #[test]
    fn default_content_type_does_not_override_caller() {
        let mut plain = ApiRequest::get("/expenses");
        apply_default_headers(&mut plain);

        let mut custom = ApiRequest::post("/expenses").header("Content-Type", "text/csv");
        apply_default_headers(&mut custom);

        assert_eq!(plain.header_value("Content-Type"), Some("application/json"));
        assert_eq!(custom.header_value("Content-Type"), Some("text/csv"));
    }

    #[test]
    fn success_passes_through_unchanged() {
        let store = signed_in_store();
        let navigator = RecordingNavigator::at("/");
        let response = ApiResponse::new(200, "[]");

        let result = check_response(&ApiRequest::get("/expenses"), response.clone(), &store, &navigator);

        assert_eq!(result, Ok(response));
        assert!(store.contains(TOKEN_KEY));
        assert!(navigator.redirects().is_empty());
    }

    #[test]
    fn unauthorized_login_keeps_session_and_stays_put() {
        let store = signed_in_store();
        let navigator = RecordingNavigator::at("/login");
        let response = ApiResponse::new(401, r#"{"message":"Invalid credentials"}"#);

        let result = check_response(&ApiRequest::post("/auth/login"), response, &store, &navigator);

        assert_eq!(
            result,
            Err(ApiError::Unauthorized {
                message: Some("Invalid credentials".to_owned())
            })
        );
        assert!(store.contains(TOKEN_KEY));
        assert!(store.contains(USER_KEY));
        assert!(navigator.redirects().is_empty());
    }

    #[test]
    fn unauthorized_register_keeps_session_and_stays_put() {
        let store = signed_in_store();
        let navigator = RecordingNavigator::at("/register");
        let response = ApiResponse::new(401, r#"{"message":"Registration closed"}"#);

        let result = check_response(&ApiRequest::post("/auth/register"), response, &store, &navigator);

        assert_eq!(
            result,
            Err(ApiError::Unauthorized {
                message: Some("Registration closed".to_owned())
            })
        );
        assert!(store.contains(TOKEN_KEY));
        assert!(store.contains(USER_KEY));
        assert!(navigator.redirects().is_empty());
    }

    #[test]
    fn unauthorized_expenses_clears_session_and_redirects() {
        let store = signed_in_store();
        let navigator = RecordingNavigator::at("/");

        let result = check_response(
            &ApiRequest::get("/expenses"),
            ApiResponse::new(401, ""),
            &store,
            &navigator,
        );

        assert_eq!(result, Err(ApiError::Unauthorized { message: None }));
        assert!(!store.contains(TOKEN_KEY));
        assert!(!store.contains(USER_KEY));
        assert_eq!(navigator.redirects(), vec!["/login".to_owned()]);
    }

    #[test]
    fn unauthorized_on_auth_page_clears_session_without_redirect() {
        for page in ["/login", "/register"] {
            let store = signed_in_store();
            let navigator = RecordingNavigator::at(page);

            let result = check_response(
                &ApiRequest::get("/expenses"),
                ApiResponse::new(401, ""),
                &store,
                &navigator,
            );

            assert!(result.is_err());
            assert!(!store.contains(TOKEN_KEY));
            assert!(navigator.redirects().is_empty());
        }
    }

    #[test]
    fn other_failures_have_no_side_effects() {
        let store = signed_in_store();
        let navigator = RecordingNavigator::at("/");

        let result = check_response(
            &ApiRequest::delete("/expenses/1"),
            ApiResponse::new(403, r#"{"message":"Not yours"}"#),
            &store,
            &navigator,
        );

        assert_eq!(
            result,
            Err(ApiError::Status {
                status: 403,
                message: Some("Not yours".to_owned())
            })
        );
        assert!(store.contains(TOKEN_KEY));
        assert!(navigator.redirects().is_empty());
    }
}
