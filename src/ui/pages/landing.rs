//! Landing page
//!
//! The single marketing page for Cordon:
//! - SEO meta tags
//! - Hero with headline, calls to action and glow orb
//! - "Ask Your Data" chat demo
//! - Platform section with the live data-block grid
//! - Architecture stack driven by the scroll-stack engine
//! - Feature grid and footer

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::ui::{
    ArchitectureStack, ChatDemo, CubeGrid, Features, Footer, Header, HeroOrb, Icon,
    OrbBackground, icons,
};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />
        <LandingStyles />

        <div class="min-h-screen bg-slate-950 text-white selection:bg-cordon-500/30 selection:text-cordon-200 relative">
            <OrbBackground />
            <Header />

            <main>
                <Hero />

                // Chat demo
                <section id="demo" class="py-20 px-4 relative z-20">
                    <div class="max-w-4xl mx-auto text-center mb-10">
                        <h2 class="text-2xl font-semibold text-white mb-2">"Ask Your Data"</h2>
                        <p class="text-slate-400">
                            "Experience the power of semantic retrieval on our simulated dataset."
                        </p>
                    </div>
                    <ChatDemo />
                </section>

                <PlatformSection />
                <ArchitectureStack />
                <Features />
            </main>

            <Footer />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="relative h-[800px] flex flex-col items-center justify-center text-center z-10 overflow-hidden">
            <HeroOrb />

            <div class="relative z-10 flex flex-col items-center max-w-5xl mx-auto px-6">
                <h1 class="landing-fade-in-up text-4xl md:text-6xl font-bold tracking-tight mb-6 bg-clip-text text-transparent bg-gradient-to-b from-white to-slate-300 drop-shadow-2xl">
                    "Structure Your " <br /> "Enterprise Reality."
                </h1>

                <p class="landing-fade-in-up landing-delay-200 text-lg md:text-xl text-slate-300 max-w-2xl mb-10 leading-relaxed drop-shadow-lg">
                    "Cordon captures, indexes, and monetizes the dormant data within your organization. "
                    "Turn emails, calls, and docs into a real-time AI knowledge base."
                </p>

                <div class="landing-fade-in-up landing-delay-400 flex flex-col sm:flex-row gap-4">
                    <a
                        href="#demo"
                        class="group relative px-8 py-4 bg-white text-slate-950 text-base font-bold rounded-lg hover:bg-slate-100 transition-all flex items-center gap-2 shadow-[0_0_20px_rgba(255,255,255,0.3)]"
                    >
                        "Start Integration"
                        <Icon name=icons::CHEVRON_RIGHT class="w-4 h-4 group-hover:translate-x-1 transition-transform" />
                    </a>
                    <a
                        href="#stack"
                        class="px-8 py-4 bg-slate-950/40 text-white border border-slate-600 hover:border-slate-400 hover:bg-slate-900/60 transition-all rounded-lg backdrop-blur-md"
                    >
                        "Read Documentation"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PlatformSection() -> impl IntoView {
    view! {
        <section id="platform" class="py-24 px-6 relative z-10">
            <div class="max-w-7xl mx-auto grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                <div>
                    <span class="text-cordon-500 text-xs font-bold tracking-widest uppercase">"Live Capture"</span>
                    <h2 class="text-3xl md:text-4xl font-bold text-white mt-3 mb-4">
                        "Every signal, indexed as it happens"
                    </h2>
                    <p class="text-slate-400 text-lg leading-relaxed max-w-xl">
                        "Messages, meetings and documents flow in continuously. Each block lights up the moment "
                        "it is structured and becomes searchable across the organization."
                    </p>
                </div>
                <CubeGrid />
            </div>
        </section>
    }
}

/// SEO meta tags
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Cordon - Enterprise Data Intelligence" />

        <Meta name="description" content="Cordon captures, indexes, and monetizes the dormant data within your organization. Turn emails, calls, and docs into a real-time AI knowledge base." />
        <Meta name="keywords" content="enterprise AI, knowledge base, semantic search, RAG, data capture, fine-tuning, vector database" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content="https://cordon.ai/" />
        <Meta property="og:title" content="Cordon - Structure Your Enterprise Reality" />
        <Meta property="og:description" content="Turn emails, calls, and docs into a real-time AI knowledge base." />
        <Meta property="og:image" content="https://cordon.ai/og-image.png" />

        // Twitter
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:title" content="Cordon - Structure Your Enterprise Reality" />
        <Meta property="twitter:description" content="Turn emails, calls, and docs into a real-time AI knowledge base." />

        <Link rel="canonical" href="https://cordon.ai/" />
    }
}

/// Keyframes and utility classes Tailwind does not provide
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html { scroll-behavior: smooth; }

            @keyframes landing-fade-in-up {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .landing-fade-in-up {
                opacity: 0;
                animation: landing-fade-in-up 0.6s ease-out forwards;
            }
            .landing-delay-200 { animation-delay: 0.2s; }
            .landing-delay-400 { animation-delay: 0.4s; }

            /* Background orbs */
            @keyframes orb-drift-primary {
                0%, 100% { transform: translate(0, 0) scale(1); opacity: 0.05; }
                50% { transform: translate(100px, -50px) scale(1.2); opacity: 0.1; }
            }
            @keyframes orb-drift-secondary {
                0%, 100% { transform: translate(0, 0) scale(1.2); opacity: 0.05; }
                50% { transform: translate(-100px, 50px) scale(1); opacity: 0.1; }
            }
            .orb-drift-primary { animation: orb-drift-primary 10s ease-in-out infinite; }
            .orb-drift-secondary { animation: orb-drift-secondary 15s ease-in-out infinite; }

            /* Hero orb */
            @keyframes hero-orb-pulse {
                0%, 100% { transform: scale(1); opacity: 0.55; }
                50% { transform: scale(1.08); opacity: 0.8; }
            }
            .hero-orb {
                background: radial-gradient(circle, rgba(45, 212, 191, 0.25) 0%, rgba(13, 148, 136, 0.12) 45%, transparent 70%);
                filter: blur(40px);
                animation: hero-orb-pulse 8s ease-in-out infinite;
            }
            .hero-orb-core {
                background: radial-gradient(circle, rgba(153, 246, 228, 0.18) 0%, transparent 65%);
                filter: blur(20px);
                animation: hero-orb-pulse 6s ease-in-out infinite reverse;
            }

            /* Cube grid */
            .cube-grid-perspective { perspective: 1000px; }
            .cube-grid-tilt { transform: rotateX(60deg) rotateZ(-45deg); }
            .cube-grid-cell {
                opacity: 0.1;
                background-color: #1e293b;
                transition: opacity 0.5s, background-color 0.5s, transform 0.5s, box-shadow 0.5s;
            }
            .cube-grid-cell-active {
                opacity: 1;
                background-color: #2dd4bf;
                transform: scale(1.1) translateZ(20px);
                box-shadow: 0 0 20px 2px rgba(45, 212, 191, 0.6);
            }

            @media (prefers-reduced-motion: reduce) {
                .landing-fade-in-up, .orb-drift-primary, .orb-drift-secondary,
                .hero-orb, .hero-orb-core { animation: none; opacity: 1; }
            }
            "#
        </style>
    }
}
