//! Session-gated route wrappers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page is wrapped in [`ProtectedRoute`]; the landing path
//! renders [`RootRedirect`]. Both evaluate the `access` decision functions
//! against the current session and match the result exhaustively, so a page
//! component is only ever mounted once a session with an identity exists.

use access::{RootDecision, RouteDecision, dispatch_root, guard};
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::auth::use_auth;

/// Placeholder shown while the persisted session is being restored.
#[component]
pub fn LoadingView() -> impl IntoView {
    view! {
        <div class="route-loading" role="status" aria-live="polite">
            <div class="route-loading__spinner"></div>
            <p>"Loading..."</p>
        </div>
    }
}

/// Render `children` only for an authenticated session.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let decision = Memo::new(move |_| {
        let path = location.pathname.get();
        auth.state.with(|s| guard(&s.session, &path))
    });

    move || match decision.get() {
        RouteDecision::Loading => view! { <LoadingView/> }.into_any(),
        RouteDecision::Redirect(target) => view! { <Redirect path=target/> }.into_any(),
        RouteDecision::Render(_) => children(),
    }
}

/// Landing path: send the user to the dashboard or the login screen.
#[component]
pub fn RootRedirect() -> impl IntoView {
    let auth = use_auth();
    let decision = Memo::new(move |_| auth.state.with(|s| dispatch_root(&s.session)));

    move || match decision.get() {
        RootDecision::Loading => view! { <LoadingView/> }.into_any(),
        RootDecision::Redirect(target) => view! { <Redirect path=target/> }.into_any(),
    }
}
