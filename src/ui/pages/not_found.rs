//! Not found page component
//!
//! Shown for any route other than the landing page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::{Icon, icons};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found - Cordon" />

        <div class="min-h-screen bg-slate-950 text-white flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-slate-900 border border-slate-800 rounded-full flex items-center justify-center">
                    <Icon name=icons::SEARCH class="w-12 h-12" />
                </div>

                <h1 class="text-6xl font-bold text-white mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-slate-200 mb-2">"Page Not Found"</h2>
                <p class="text-slate-400 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="px-6 py-3 bg-cordon-600 hover:bg-cordon-500 text-white font-medium rounded-lg transition-colors"
                >
                    "Back to Cordon"
                </A>
            </div>
        </div>
    }
}
