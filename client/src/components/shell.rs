//! Dashboard chrome: header with the signed-in user, role sidebar, content slot.
//!
//! Rendered inside `ProtectedRoute`, so an identity is normally present. Log
//! out only clears the session; the enclosing guard then redirects to the
//! login screen, and the shell renders nothing in between.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use access::Identity;
use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::state::auth::use_auth;

/// Initials shown in the avatar bubble when no avatar URL is set.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Secondary header line: role-specific attributes when present.
pub fn subtitle(identity: &Identity) -> String {
    let detail = ["department", "club", "position"]
        .iter()
        .filter_map(|key| identity.attr_str(key))
        .collect::<Vec<_>>()
        .join(" · ");
    if detail.is_empty() { identity.role.label().to_owned() } else { format!("{} · {detail}", identity.role.label()) }
}

#[component]
pub fn DashboardShell(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    move || {
        let identity = auth.state.with(|s| s.user().cloned())?;
        let avatar = match identity.avatar.clone() {
            Some(url) => view! { <img class="header__avatar" src=url alt=""/> }.into_any(),
            None => view! { <span class="header__avatar">{initials(&identity.name)}</span> }.into_any(),
        };
        Some(view! {
            <div class="dashboard">
                <Sidebar role=identity.role/>
                <div class="dashboard__main">
                    <header class="header">
                        {avatar}
                        <div class="header__who">
                            <p class="header__name">{identity.name.clone()}</p>
                            <p class="header__subtitle">{subtitle(&identity)}</p>
                        </div>
                        <button class="header__logout" on:click=move |_| auth.logout()>"Log out"</button>
                    </header>
                    <main class="dashboard__content">{children()}</main>
                </div>
            </div>
        })
    }
}
