//! Route modules, one per endpoint.

use axum::Router;

use crate::state::AppState;

pub mod check;
pub mod health;
pub mod logistic;
pub mod opposed;
pub mod simulate;
pub mod token;

/// Assemble the full application router. The token-issuance route is only
/// mounted when explicitly enabled.
pub fn router(allow_token_issue: bool) -> Router<AppState> {
    let mut app = Router::new()
        .merge(health::router())
        .merge(check::router())
        .merge(logistic::router())
        .merge(opposed::router())
        .merge(simulate::router());

    if allow_token_issue {
        app = app.merge(token::router());
    }

    app
}
