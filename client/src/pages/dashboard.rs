//! Dashboard overview: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached via `RootRedirect` or directly at `/dashboard`. Shows one card per
//! portal section the signed-in role may open.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use access::{Role, Section};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::protected_route::ProtectedRoute;
use crate::components::shell::DashboardShell;
use crate::state::auth::use_auth;

/// Sections shown as overview cards (everything but the overview itself).
fn overview_cards(role: Role) -> Vec<Section> {
    role.capabilities().sections().iter().copied().filter(|s| *s != Section::Overview).collect()
}

fn greeting(name: &str) -> String {
    match name.split_whitespace().next() {
        Some(first) => format!("Welcome back, {first}"),
        None => "Welcome back".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <DashboardShell>
                <Overview/>
            </DashboardShell>
        </ProtectedRoute>
    }
}

#[component]
fn Overview() -> impl IntoView {
    let auth = use_auth();

    move || {
        let identity = auth.state.with(|s| s.user().cloned())?;
        Some(view! {
            <section class="overview">
                <h1>{greeting(&identity.name)}</h1>
                <div class="overview__cards">
                    {overview_cards(identity.role)
                        .into_iter()
                        .map(|section| {
                            view! {
                                <A href=section.path()>
                                    <div class="overview__card">
                                        <h2>{section.label()}</h2>
                                    </div>
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        })
    }
}
