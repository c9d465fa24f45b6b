//! Login page.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use stayhub_shared::error::ApiErrorKind;
use web_sys::SubmitEvent;

use crate::auth::{login, use_auth};
use crate::components::icons::LogIn;
use crate::components::status::use_status;
use crate::web::route::AppRoute;
use crate::web::router::use_navigate;

/// How long the success message stays on screen before the page moves on.
const REDIRECT_DELAY_MS: u32 = 2_000;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let status = use_status();
    let config = crate::use_config();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (field_error, set_field_error) = signal(Option::<String>::None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if email.get().trim().is_empty() || password.get().is_empty() {
            set_field_error.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_field_error.set(None);

        let config = config.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let address = email.get_untracked().trim().to_string();
            match login(&auth, &config, address, password.get_untracked()).await {
                Ok(()) => {
                    status.success("Login successful! Redirecting...");
                    // The busy label holds until the redirect fires.
                    Timeout::new(REDIRECT_DELAY_MS, move || {
                        navigate(AppRoute::auth_success_redirect())
                    })
                    .forget();
                }
                Err(err) => {
                    log::error!("login failed: {err}");
                    let text = match err.kind {
                        ApiErrorKind::Unauthorized => {
                            "Invalid email or password. Please try again.".to_string()
                        }
                        _ => format!("Login failed: {}", err.message),
                    };
                    status.error(text);
                    set_is_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="hero min-h-[70vh]">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <LogIn attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Login"</h1>
                        <p class="text-base-content/70">
                            "Sign in to book places and write reviews"
                        </p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form id="loginForm" class="card-body" on:submit=on_submit>
                        <Show when=move || field_error.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || field_error.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary">
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Login".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
