//! Login page: email + password against the backend, or a demo account per role.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use access::{AccessError, DASHBOARD_PATH, IdentityClaim, Role};
use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::protected_route::LoadingView;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
use crate::state::auth::use_auth;

fn validate_sign_in_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Local identity for trying the portal without a backend.
fn demo_claim(role: Role) -> IdentityClaim {
    let base = IdentityClaim::new(
        format!("demo-{role}"),
        match role {
            Role::Student => "Demo Student",
            Role::Professor => "Demo Professor",
            Role::Club => "Demo Club",
            Role::Admin => "Demo Admin",
        },
        format!("{role}@demo.campus.edu"),
        role.as_str(),
    );
    match role {
        Role::Student => base.with_attr("department", "Computer Science").with_attr("rollNo", "DEMO-001"),
        Role::Professor => base.with_attr("department", "Computer Science"),
        Role::Club => base.with_attr("club", "Coding Club").with_attr("position", "Coordinator"),
        Role::Admin => base,
    }
}

fn login_error_message(err: &AccessError) -> String {
    match err {
        AccessError::InvalidRole(role) => format!("This account has an unsupported role ({role})."),
        AccessError::NotResolved => "Still restoring your session, try again.".to_owned(),
        AccessError::UnknownRole(_) => err.to_string(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status(401 | 403) => "Invalid email or password.".to_owned(),
        other => format!("Sign-in failed: {other}"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_sign_in = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_sign_in_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::sign_in(&email_value, &password_value).await {
                Ok(claim) => match auth.login(claim) {
                    Ok(identity) => {
                        log::info!("signed in as {} ({})", identity.id, identity.role);
                        info.set(String::new());
                    }
                    Err(e) => info.set(login_error_message(&e)),
                },
                Err(e) => info.set(sign_in_error_message(&e)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    let on_demo = move |role: Role| {
        if let Err(e) = auth.login(demo_claim(role)) {
            info.set(login_error_message(&e));
        }
    };

    move || {
        let state = auth.state.get();
        if state.loading() {
            return view! { <LoadingView/> }.into_any();
        }
        if state.user().is_some() {
            return view! { <Redirect path=DASHBOARD_PATH/> }.into_any();
        }
        view! {
            <div class="login-page">
                <div class="login-card">
                    <h1>"Campus Portal"</h1>
                    <p class="login-card__subtitle">"Sign in to continue"</p>
                    <form class="login-form" on:submit=on_sign_in>
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@campus.edu"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            "Sign In"
                        </button>
                    </form>
                    <Show when=move || !info.get().is_empty()>
                        <p class="login-message" role="alert">{move || info.get()}</p>
                    </Show>
                    <div class="login-divider"></div>
                    <p class="login-card__subtitle">"Or explore with a demo account"</p>
                    <div class="login-demo">
                        {Role::ALL
                            .into_iter()
                            .map(|role| {
                                view! {
                                    <button class="login-button login-button--demo" on:click=move |_| on_demo(role)>
                                        {role.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        }
        .into_any()
    }
}
