//! Auth-aware navigation header.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the session reactively: the rendered link set and the identity
//! widget switch with auth state, and logout routes back to the public
//! landing page. The mobile menu toggle is local UI state only.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::session::AppSession;

/// One navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Link set for the current session state.
fn nav_links(authenticated: bool) -> Vec<NavLink> {
    if authenticated {
        vec![
            NavLink { label: "Dashboard", href: "/dashboard" },
            NavLink { label: "New Analysis", href: "/upload" },
            NavLink { label: "History", href: "/history" },
            NavLink { label: "Credits", href: "/plans" },
        ]
    } else {
        vec![
            NavLink { label: "Home", href: "/" },
            NavLink { label: "Plans", href: "/plans" },
            NavLink { label: "Sign In", href: "/login" },
            NavLink { label: "Sign Up", href: "/register" },
        ]
    }
}

/// Class for a nav entry, highlighting the current location.
fn nav_link_class(current: &str, href: &str) -> &'static str {
    if current == href { "header__link header__link--active" } else { "header__link" }
}

/// Avatar letter for the identity widget.
fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

/// Credit balance label for the identity widget.
fn credits_label(credits: i64) -> String {
    if credits == 1 { "1 credit".to_owned() } else { format!("{credits} credits") }
}

/// Top navigation bar.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let auth = session.state();
    let location = use_location();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    let on_logout = {
        let session = session.clone();
        move |_| {
            session.logout();
            menu_open.set(false);
            navigate("/", NavigateOptions::default());
        }
    };

    let links = move || {
        let current = location.pathname.get();
        nav_links(auth.get().is_authenticated())
            .into_iter()
            .map(|link| {
                view! {
                    <a
                        class=nav_link_class(&current, link.href)
                        href=link.href
                        on:click=move |_| menu_open.set(false)
                    >
                        {link.label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    let identity = move || {
        auth.get().user.map(|user| {
            view! {
                <div class="header__identity">
                    <span class="header__avatar">{initial(&user.name)}</span>
                    <div class="header__identity-text">
                        <span class="header__name">{user.name.clone()}</span>
                        <span class="header__credits">{credits_label(user.credits)}</span>
                    </div>
                </div>
            }
        })
    };

    view! {
        <header class="header">
            <a class="header__logo" href="/">"FaceMatch"</a>

            <nav class="header__nav" class=("header__nav--open", move || menu_open.get())>
                {links}
                {identity}
                <Show when=move || auth.get().is_authenticated()>
                    <button class="header__logout" on:click=on_logout.clone()>
                        "Sign Out"
                    </button>
                </Show>
            </nav>

            <button
                class="header__menu-toggle"
                title="Toggle menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>
        </header>
    }
}
