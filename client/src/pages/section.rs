//! Section pages under `/dashboard/:section`.
//!
//! The route guard decides whether anything renders at all; once it does,
//! this page applies the role check for the specific section. An open section
//! loads its item list with `GET {base}/{slug}` through `net::api`, which
//! attaches the current identity headers.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use access::{Section, SectionAccess, Session, authorize};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use serde::Deserialize;

use crate::components::protected_route::ProtectedRoute;
use crate::components::shell::DashboardShell;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
use crate::state::auth::use_auth;

/// One entry of a section's item list as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
struct SectionItem {
    id: String,
    title: String,
    #[serde(default)]
    body: Option<String>,
}

// Only the browser fetches; SSR always renders `Loading`.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
#[derive(Clone, Debug, PartialEq, Eq)]
enum FeedState {
    Loading,
    Loaded(Vec<SectionItem>),
    Failed(String),
}

/// What the section page should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SectionView {
    Open(Section),
    Denied(Section),
    NotFound,
}

fn resolve_section(session: &Session, slug: &str) -> SectionView {
    match Section::from_slug(slug).filter(|s| *s != Section::Overview) {
        None => SectionView::NotFound,
        Some(section) => match authorize(session, section) {
            SectionAccess::Granted => SectionView::Open(section),
            SectionAccess::Denied => SectionView::Denied(section),
        },
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn feed_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthenticated => "Your session ended. Sign in again.".to_owned(),
        ApiError::Status(403) => "The server refused access to this section.".to_owned(),
        ApiError::Status(404) => "Nothing has been published here yet.".to_owned(),
        other => format!("Could not load this section: {other}"),
    }
}

#[component]
pub fn SectionPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <DashboardShell>
                <SectionBody/>
            </DashboardShell>
        </ProtectedRoute>
    }
}

#[component]
fn SectionBody() -> impl IntoView {
    let auth = use_auth();
    let params = use_params_map();
    let resolved = Memo::new(move |_| {
        let slug = params.read().get("section").unwrap_or_default();
        auth.state.with(|s| resolve_section(&s.session, &slug))
    });

    move || match resolved.get() {
        SectionView::Open(section) => view! {
            <section class="section">
                <h1>{section.label()}</h1>
                <div class="section__body" data-section=section.slug()>
                    <SectionFeed section=section/>
                </div>
            </section>
        }
        .into_any(),
        SectionView::Denied(section) => view! {
            <section class="section section--denied">
                <h1>{section.label()}</h1>
                <p>"Your role does not have access to this section."</p>
            </section>
        }
        .into_any(),
        SectionView::NotFound => view! {
            <section class="section section--missing">
                <p>"Page not found."</p>
            </section>
        }
        .into_any(),
    }
}

#[component]
fn SectionFeed(section: Section) -> impl IntoView {
    let feed = RwSignal::new(FeedState::Loading);

    #[cfg(feature = "hydrate")]
    {
        let auth = use_auth();
        leptos::task::spawn_local(async move {
            let next = match crate::net::api::get_json::<Vec<SectionItem>>(auth, section.slug()).await {
                Ok(items) => FeedState::Loaded(items),
                Err(e) => {
                    log::warn!("loading section {} failed: {e}", section.slug());
                    FeedState::Failed(feed_error_message(&e))
                }
            };
            feed.set(next);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = section;

    move || match feed.get() {
        FeedState::Loading => view! { <p class="section__status">"Loading..."</p> }.into_any(),
        FeedState::Failed(message) => view! { <p class="section__status section__status--error">{message}</p> }.into_any(),
        FeedState::Loaded(items) if items.is_empty() => {
            view! { <p class="section__status">"Nothing here yet."</p> }.into_any()
        }
        FeedState::Loaded(items) => view! {
            <ul class="section__items">
                {items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <li class="section__item" data-id=item.id>
                                <h3>{item.title}</h3>
                                {item.body.map(|body| view! { <p>{body}</p> })}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
    }
}
