//! Dashboard navigation filtered by the user's role.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use access::{Role, Section};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// One sidebar link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

/// Links for every section `role` may reach, marking the one at `current_path`.
pub fn nav_items(role: Role, current_path: &str) -> Vec<NavItem> {
    let current = Section::from_path(current_path);
    role.capabilities()
        .sections()
        .iter()
        .map(|section| NavItem {
            label: section.label(),
            href: section.path(),
            active: current == Some(*section),
        })
        .collect()
}

#[component]
pub fn Sidebar(role: Role) -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="sidebar">
            <p class="sidebar__role">{role.label()}</p>
            <ul class="sidebar__list">
                {move || {
                    nav_items(role, &location.pathname.get())
                        .into_iter()
                        .map(|item| {
                            let class = if item.active { "sidebar__item sidebar__item--active" } else { "sidebar__item" };
                            view! {
                                <li class=class>
                                    <A href=item.href>{item.label}</A>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}
