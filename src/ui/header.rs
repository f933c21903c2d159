//! Site header with scroll-aware background and mobile menu

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::{Icon, icons};

/// Scroll offset after which the header gets its solid background
pub const SCROLLED_THRESHOLD: f64 = 20.0;

/// Primary navigation entries
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("Platform", "#platform"),
    ("Solutions", "#stack"),
    ("Customers", "#features"),
    ("Docs", "#demo"),
];

/// Whether the header should use its scrolled style at `scroll_y`
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// Header classes for the given scroll state
///
/// Server HTML is always rendered unscrolled; the browser only switches after
/// hydration.
pub fn header_class(scrolled: bool) -> &'static str {
    if scrolled {
        "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-slate-950/80 backdrop-blur-lg border-b border-slate-800/50"
    } else {
        "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
    }
}

/// Brand logo
#[component]
pub fn Logo(#[prop(default = "h-8")] class: &'static str) -> impl IntoView {
    view! {
        <img
            src="/images/logo.png"
            alt="Cordon Logo"
            class=format!("{} object-contain", class)
        />
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        let update = move || {
            let y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            set_scrolled.set(is_scrolled(y));
        };
        // First read after hydration so the initial class matches the server
        Effect::new(move |_| update());

        let handle = window_event_listener(leptos::ev::scroll, move |_| update());
        on_cleanup(move || drop(handle));
    }
    #[cfg(feature = "ssr")]
    {
        let _ = set_scrolled;
    }

    view! {
        <header class=move || header_class(scrolled.get())>
            <div class="max-w-7xl mx-auto px-6 h-20 flex items-center justify-between">
                <A href="/" attr:class="flex-shrink-0 cursor-pointer" attr:aria-label="Cordon home">
                    <Logo class="h-10 w-auto" />
                </A>

                // Desktop navigation
                <nav class="hidden md:flex items-center gap-8">
                    {NAV_LINKS
                        .iter()
                        .map(|(name, href)| view! {
                            <a href=*href class="text-sm font-medium text-slate-300 hover:text-cordon-300 transition-colors">
                                {*name}
                            </a>
                        })
                        .collect_view()}
                </nav>

                <div class="hidden md:flex items-center gap-4">
                    <button class="text-sm font-medium text-white hover:text-cordon-300 transition-colors">
                        "Log In"
                    </button>
                    <button class="text-sm font-semibold bg-white text-slate-950 px-5 py-2.5 rounded-full hover:bg-cordon-100 hover:text-cordon-900 transition-all shadow-[0_0_15px_rgba(255,255,255,0.2)]">
                        "Book Demo"
                    </button>
                </div>

                // Mobile menu toggle
                <button
                    class="md:hidden text-slate-200"
                    on:click=move |_| set_mobile_menu_open.update(|open| *open = !*open)
                    aria-label="Toggle mobile menu"
                    aria-expanded=move || mobile_menu_open.get().to_string()
                >
                    {move || {
                        if mobile_menu_open.get() {
                            view! { <Icon name=icons::X class="w-6 h-6" /> }.into_any()
                        } else {
                            view! { <Icon name=icons::MENU class="w-6 h-6" /> }.into_any()
                        }
                    }}
                </button>
            </div>

            // Mobile navigation
            <Show when=move || mobile_menu_open.get()>
                <div class="md:hidden absolute top-20 left-0 w-full bg-slate-950 border-b border-slate-800 p-6 flex flex-col gap-4">
                    {NAV_LINKS
                        .iter()
                        .map(|(name, href)| view! {
                            <a
                                href=*href
                                class="text-lg font-medium text-slate-300 py-2 border-b border-slate-800"
                                on:click=move |_| set_mobile_menu_open.set(false)
                            >
                                {*name}
                            </a>
                        })
                        .collect_view()}
                    <div class="flex flex-col gap-3 mt-4">
                        <button class="w-full text-center py-3 text-slate-200 bg-slate-900 rounded-lg">"Log In"</button>
                        <button class="w-full text-center py-3 bg-cordon-600 text-white rounded-lg">"Book Demo"</button>
                    </div>
                </div>
            </Show>
        </header>
    }
}
