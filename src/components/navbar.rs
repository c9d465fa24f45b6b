//! Top navigation bar, shared by every page.

use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::auth::{logout, use_auth};
use crate::components::icons::{House, LogIn, LogOut};
use crate::web::route::AppRoute;
use crate::web::router::{use_navigate, use_router};

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let config = crate::use_config();
    let router = use_router();
    let navigate = use_navigate();

    let is_authenticated = move || auth.state.get().is_authenticated();
    let display_name = move || auth.state.get().display_name();
    let current_route = router.current_route();

    let go_home = {
        let navigate = navigate.clone();
        move |ev: MouseEvent| {
            ev.prevent_default();
            navigate(AppRoute::Home);
        }
    };
    let go_login = {
        let navigate = navigate.clone();
        move |ev: MouseEvent| {
            ev.prevent_default();
            navigate(AppRoute::Login);
        }
    };
    let on_logout = move |_| {
        logout(&auth, &config);
        navigate(AppRoute::Home);
    };

    view! {
        <div class="navbar bg-base-100 shadow-lg px-4">
            <div class="flex-1 gap-2">
                <a href="/" class="btn btn-ghost text-xl gap-2" on:click=go_home>
                    <House attr:class="h-5 w-5 text-primary" />
                    "StayHub"
                </a>
            </div>
            <div class="flex-none gap-2 items-center">
                <Show
                    when=is_authenticated
                    fallback=move || {
                        view! {
                            <a
                                id="login-link"
                                href="/login"
                                class="btn btn-primary btn-sm gap-2"
                                class:btn-active=move || {
                                    current_route.get().is_same_page(&AppRoute::Login)
                                }
                                on:click=go_login.clone()
                            >
                                <LogIn attr:class="h-4 w-4" />
                                "Login"
                            </a>
                        }
                    }
                >
                    <span class="badge badge-neutral hidden md:inline-flex">
                        {display_name}
                    </span>
                    <button
                        class="logout-button btn btn-outline btn-error btn-sm gap-2"
                        on:click=on_logout.clone()
                    >
                        <LogOut attr:class="h-4 w-4" />
                        "Logout"
                    </button>
                </Show>
            </div>
        </div>
    }
}
