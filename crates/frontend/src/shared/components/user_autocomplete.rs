use crate::shared::api_utils::get_json;
use contracts::shared::api_error::ApiError;
use contracts::system::users::{User, UsersResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Spinner, SpinnerSize};

use super::Avatar;

const SEARCH_LIMIT: usize = 25;

/// Searchable user picker.
///
/// `on_change(None)` is emitted when the selection is cleared.
#[component]
pub fn UserAutocomplete(
    #[prop(into)]
    value: Signal<User>,
    on_change: Callback<Option<User>>,
    #[prop(into)]
    label: String,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<User>::new());
    let error = RwSignal::new(Option::<String>::None);
    let open = RwSignal::new(false);
    let loading = RwSignal::new(false);
    // responses of superseded searches are dropped
    let generation = RwSignal::new(0u64);

    let search = move |text: String| {
        query.set(text.clone());
        open.set(true);
        let current = generation.get_untracked() + 1;
        generation.set(current);
        loading.set(true);

        spawn_local(async move {
            let outcome = fetch_users(&text).await;
            if generation.try_get_untracked() != Some(current) {
                return;
            }
            match outcome {
                Ok(users) => {
                    results.set(users);
                    error.set(None);
                }
                Err(e) => {
                    log::warn!("user search failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    let select = move |user: User| {
        open.set(false);
        query.set(String::new());
        on_change.run(Some(user));
    };

    view! {
        <div class="form__group user-autocomplete">
            <label class="form__label" for="owner-autocomplete">{label}</label>
            <div class="user-autocomplete__current">
                {move || {
                    let user = value.get();
                    let letter = user.username.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
                    view! {
                        <Avatar src=user.avatar_url.clone() fallback=letter size="sm" />
                        <span class="user-autocomplete__name">{user.display_name().to_string()}</span>
                        <span class="user-autocomplete__email">{user.email.clone()}</span>
                    }
                }}
                <button
                    type="button"
                    class="user-autocomplete__clear"
                    aria-label="Reset owner"
                    disabled=move || disabled.get().unwrap_or(false)
                    on:click=move |_| on_change.run(None)
                >
                    "×"
                </button>
            </div>
            <input
                id="owner-autocomplete"
                class="form__input"
                type="text"
                placeholder="Search users by username or email"
                autocomplete="off"
                prop:value=move || query.get()
                disabled=move || disabled.get().unwrap_or(false)
                on:focus=move |_| search(query.get_untracked())
                on:input=move |ev| search(event_target_value(&ev))
                on:blur=move |_| open.set(false)
            />
            <Show when=move || open.get()>
                <ul class="user-autocomplete__options" role="listbox">
                    {move || error.get().map(|e| view! { <li class="user-autocomplete__error">{e}</li> })}
                    <Show when=move || loading.get() && results.with(|r| r.is_empty())>
                        <li class="user-autocomplete__loading"><Spinner size=SpinnerSize::Small /></li>
                    </Show>
                    <For
                        each=move || results.get()
                        key=|user| user.id
                        children=move |user| {
                            let picked = user.clone();
                            view! {
                                <li
                                    class="user-autocomplete__option"
                                    role="option"
                                    on:mousedown=move |ev| {
                                        ev.prevent_default();
                                        select(picked.clone());
                                    }
                                >
                                    <span class="user-autocomplete__name">{user.username.clone()}</span>
                                    <span class="user-autocomplete__email">{user.email.clone()}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}

async fn fetch_users(text: &str) -> Result<Vec<User>, ApiError> {
    let path = format!(
        "/api/v2/users?q={}&limit={}",
        urlencoding::encode(text.trim()),
        SEARCH_LIMIT
    );
    let response: UsersResponse = get_json(&path).await?;
    Ok(response.users)
}
