//! Interactive chat demo
//!
//! A scripted "ask your data" console. Queries are sent to the server's
//! generation endpoint; any failure shows a fixed fallback answer instead of
//! an error.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::chat::{
    ChatMessage, SUGGESTIONS, initial_conversation, prepare_query, show_suggestions,
};
use crate::ui::{Icon, icons};

/// Chat demo widget
#[component]
pub fn ChatDemo() -> impl IntoView {
    let (messages, set_messages) = signal(initial_conversation());
    let (query, set_query) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);
    let scroll_ref = NodeRef::<html::Div>::new();

    // Keep the newest message in view
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        messages.track();
        is_loading.track();
        if let Some(el) = scroll_ref.get_untracked() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let submit = move || {
        if is_loading.get_untracked() {
            return;
        }
        let Some(user_text) = prepare_query(&query.get_untracked()) else {
            return;
        };

        set_query.set(String::new());
        set_messages.update(|msgs| msgs.push(ChatMessage::user(user_text.clone())));
        set_is_loading.set(true);

        spawn_local(async move {
            let reply = generate_reply(&user_text).await;
            set_messages.update(|msgs| msgs.push(ChatMessage::model(reply)));
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="w-full max-w-4xl mx-auto bg-slate-900/50 border border-slate-800 rounded-xl overflow-hidden backdrop-blur-md shadow-2xl">
            // Console header
            <div class="bg-slate-900/80 border-b border-slate-800 p-4 flex items-center justify-between">
                <div class="flex items-center gap-2 text-cordon-400">
                    <Icon name=icons::TERMINAL class="w-[18px] h-[18px]" />
                    <span class="font-mono text-sm font-semibold tracking-wider">"CORDON_INTELLIGENCE_ENGINE_V2.1"</span>
                </div>
                <div class="flex gap-2">
                    <div class="flex items-center gap-1 text-xs text-slate-400 bg-slate-800 px-2 py-1 rounded">
                        <Icon name=icons::DATABASE class="w-3 h-3" />
                        "Live Index"
                    </div>
                    <div class="flex items-center gap-1 text-xs text-slate-400 bg-slate-800 px-2 py-1 rounded">
                        <Icon name=icons::SHIELD_CHECK class="w-3 h-3" />
                        "Encrypted"
                    </div>
                </div>
            </div>

            // Messages
            <div node_ref=scroll_ref class="h-[400px] p-6 overflow-y-auto flex flex-col gap-4 relative">
                <For
                    each=move || messages.get().into_iter().enumerate()
                    key=|(i, _)| *i
                    children=move |(_, message)| view! { <MessageBubble message=message /> }
                />

                {move || {
                    if is_loading.get() {
                        view! {
                            <div class="flex justify-start">
                                <div class="bg-slate-800 rounded-lg p-4 flex items-center gap-3 border border-slate-700">
                                    <Icon name=icons::LOADER class="w-5 h-5 animate-spin" />
                                    <span class="text-slate-400 text-sm">"Analyzing disparate data sources..."</span>
                                </div>
                            </div>
                        }.into_any()
                    } else {
                        view! { <div class="hidden"></div> }.into_any()
                    }
                }}
            </div>

            // Input area
            <div class="p-4 bg-slate-900/80 border-t border-slate-800">
                <Show when=move || messages.with(|msgs| show_suggestions(msgs))>
                    <div class="flex flex-wrap gap-2 mb-4">
                        {SUGGESTIONS
                            .iter()
                            .map(|suggestion| {
                                let suggestion = *suggestion;
                                view! {
                                    <button
                                        type="button"
                                        class="text-xs bg-slate-800 hover:bg-slate-700 text-cordon-200 px-3 py-1.5 rounded-full transition-colors border border-slate-700 hover:border-cordon-500/50"
                                        on:click=move |_| set_query.set(suggestion.to_string())
                                    >
                                        {suggestion}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>

                <form
                    class="relative"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit();
                    }
                >
                    <input
                        type="text"
                        class="w-full bg-slate-950 border border-slate-700 text-slate-100 rounded-lg pl-4 pr-12 py-3 focus:outline-none focus:border-cordon-500 focus:ring-1 focus:ring-cordon-500 transition-all placeholder:text-slate-600"
                        placeholder="Ask your enterprise data..."
                        aria-label="Ask your enterprise data"
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="absolute right-2 top-1/2 -translate-y-1/2 p-2 bg-cordon-600 hover:bg-cordon-500 text-white rounded-md transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled=move || is_loading.get()
                        aria-label="Send query"
                    >
                        <Icon name=icons::SEND class="w-4 h-4" />
                    </button>
                </form>
            </div>
        </div>
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.is_user();
    let row_class = if is_user {
        "flex justify-end"
    } else {
        "flex justify-start"
    };
    let bubble_class = if is_user {
        "max-w-[80%] rounded-lg p-4 text-sm leading-relaxed bg-cordon-600 text-white"
    } else {
        "max-w-[80%] rounded-lg p-4 text-sm leading-relaxed bg-slate-800 text-slate-200 border border-slate-700"
    };

    view! {
        <div class=row_class>
            <div class=bubble_class>
                {(!is_user).then(|| view! {
                    <div class="mb-2 flex items-center gap-2 text-cordon-400 text-xs font-mono uppercase tracking-widest opacity-75">
                        <div class="w-2 h-2 rounded-full bg-cordon-400 animate-pulse"></div>
                        "Answer Generated"
                    </div>
                })}
                <p class="whitespace-pre-wrap break-words">{message.text}</p>
            </div>
        </div>
    }
}

/// Ask the server for a reply; never fails
async fn generate_reply(query: &str) -> String {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::chat::FALLBACK_MESSAGE;

        match call_generate_api(query).await {
            Ok(text) => text,
            Err(e) => {
                leptos::logging::warn!("Generation request failed: {}", e);
                FALLBACK_MESSAGE.to_string()
            }
        }
    }

    #[cfg(feature = "ssr")]
    {
        // Only reachable from the browser
        let _ = query;
        crate::core::chat::FALLBACK_MESSAGE.to_string()
    }
}

/// POST the query to our server proxy
#[cfg(not(feature = "ssr"))]
async fn call_generate_api(query: &str) -> Result<String, String> {
    use crate::core::chat::{GENERATE_PATH, GenerateRequest, GenerateResponse};
    use gloo_net::http::Request;

    let body = GenerateRequest {
        query: query.to_string(),
    };

    let response = Request::post(GENERATE_PATH)
        .header("Content-Type", "application/json")
        .json(&body)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "API error {}: {}",
            response.status(),
            response.status_text()
        ));
    }

    let parsed: GenerateResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(parsed.text)
}
