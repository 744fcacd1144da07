//! Haru web application
//!
//! A browser client for a personal diary: sign up, log in, and write
//! short entries against the remote diary API.

mod components;
mod state;
mod ui;
mod views;

use std::sync::Arc;

use dioxus::prelude::*;

use haru_core::{ClientConfig, DiaryApiClient};

use components::Navbar;
use state::AppState;
use views::{DiaryCreate, DiaryDetail, DiaryEdit, DiaryList, Login, Profile, Signup};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    DiaryList {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/me")]
    Profile {},
    #[route("/diaries/new")]
    DiaryCreate {},
    #[route("/diaries/:id")]
    DiaryDetail { id: i64 },
    #[route("/diaries/:id/edit")]
    DiaryEdit { id: i64 },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

/// Root application component
#[component]
fn App() -> Element {
    let page_size = build_config().resolved_page_size();
    let api = use_signal(|| Arc::new(build_api_client(&build_config())));
    let user = use_signal(|| None);
    let auth_checked = use_signal(|| false);

    let state = use_context_provider(|| AppState {
        api,
        user,
        auth_checked,
        page_size,
    });

    // Probe the session once so the navbar and gated pages know who is
    // signed in.
    let mut probed = use_signal(|| false);
    use_effect(move || {
        if probed() {
            return;
        }
        probed.set(true);
        spawn(async move {
            state.refresh_user().await;
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// Layout shared by every route: navbar on top, the page below.
#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {}
        main { class: "page",
            Outlet::<Route> {}
        }
    }
}

/// Build-time configuration baked into the web bundle.
fn build_config() -> ClientConfig {
    ClientConfig::from_values(
        option_env!("HARU_API_BASE_URL").map(str::to_string),
        option_env!("HARU_PAGE_SIZE").and_then(|raw| raw.trim().parse().ok()),
    )
}

fn build_api_client(config: &ClientConfig) -> DiaryApiClient {
    match DiaryApiClient::new(config.resolved_base_url()) {
        Ok(client) => client,
        Err(error) => {
            tracing::error!("Invalid API base URL, falling back to the default: {error}");
            DiaryApiClient::new(haru_core::config::DEFAULT_API_BASE_URL)
                .expect("default base URL is valid")
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn routes_render_the_original_paths() {
        assert_eq!(Route::DiaryList {}.to_string(), "/");
        assert_eq!(Route::Login {}.to_string(), "/login");
        assert_eq!(Route::DiaryCreate {}.to_string(), "/diaries/new");
        assert_eq!(Route::DiaryDetail { id: 7 }.to_string(), "/diaries/7");
        assert_eq!(Route::DiaryEdit { id: 7 }.to_string(), "/diaries/7/edit");
    }

    #[test]
    fn detail_route_parses_back_from_a_path() {
        let route: Route = "/diaries/42".parse().expect("path should parse");
        assert_eq!(route, Route::DiaryDetail { id: 42 });
    }
}
