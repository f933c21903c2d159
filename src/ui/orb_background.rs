use leptos::prelude::*;

/// Two large blurred orbs drifting behind the page
///
/// Animated purely with CSS keyframes (`orb-drift-*` in the landing styles).
#[component]
pub fn OrbBackground() -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-0 overflow-hidden pointer-events-none" aria-hidden="true">
            <div class="orb-drift-primary absolute top-[-10%] left-[20%] w-[500px] h-[500px] rounded-full bg-cordon-600 blur-[120px] mix-blend-screen"></div>
            <div class="orb-drift-secondary absolute bottom-[-10%] right-[10%] w-[600px] h-[600px] rounded-full bg-teal-800 blur-[140px] mix-blend-screen"></div>
        </div>
    }
}

/// Soft glowing orb centred behind the hero headline
#[component]
pub fn HeroOrb() -> impl IntoView {
    view! {
        <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[600px] h-[600px] md:w-[900px] md:h-[900px] z-0 pointer-events-none" aria-hidden="true">
            <div class="hero-orb absolute inset-[15%] rounded-full"></div>
            <div class="hero-orb-core absolute inset-[35%] rounded-full"></div>
        </div>
    }
}
