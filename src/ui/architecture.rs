//! Architecture stack section
//!
//! Four platform layers shown as cards that stack up under the header as the
//! user scrolls. Each card lists four modules, some highlighted as active.

use leptos::prelude::*;

use crate::core::{EngineConfig, StickPosition};
use crate::ui::{Icon, ScrollStack, ScrollStackItem, icons};

/// One module tile inside a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Module {
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

/// One platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layer {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub modules: [Module; 4],
}

const fn module(label: &'static str, icon: &'static str, active: bool) -> Module {
    Module {
        label,
        icon,
        active,
    }
}

pub const LAYERS: [Layer; 4] = [
    Layer {
        title: "Enterprise Data",
        subtitle: "Ingestion Layer",
        description: "We connect to your raw data sources, structured or unstructured, and normalize them for AI consumption.",
        icon: icons::SERVER,
        modules: [
            module("Email & Comms", icons::MESSAGE_SQUARE, false),
            module("Documents", icons::FILE_JSON, true),
            module("CRM & ERP", icons::DATABASE, false),
            module("Activity", icons::ZAP, true),
        ],
    },
    Layer {
        title: "Knowledge",
        subtitle: "Structure & Security",
        description: "Raw data is transformed into a semantic knowledge graph with bank-grade security and permissioning.",
        icon: icons::SHIELD_CHECK,
        modules: [
            module("Vector Index", icons::DATABASE, true),
            module("Graph Relations", icons::LAYERS, true),
            module("PII Redaction", icons::LOCK, false),
            module("RBAC Controls", icons::SHIELD_CHECK, true),
        ],
    },
    Layer {
        title: "Models",
        subtitle: "Intelligence & Tuning",
        description: "Orchestrate state-of-the-art foundation models, optimized with your specific enterprise context.",
        icon: icons::CPU,
        modules: [
            module("RLHF Alignment", icons::LAYERS, true),
            module("Context Window", icons::FILE_JSON, false),
            module("Fine-Tuning", icons::CPU, true),
            module("Model Routing", icons::SERVER, false),
        ],
    },
    Layer {
        title: "Applications",
        subtitle: "Value Delivery",
        description: "The final layer where intelligence meets the user. Custom agents, dashboards, and automated workflows.",
        icon: icons::ZAP,
        modules: [
            module("Semantic Search", icons::SEARCH, true),
            module("Chat Assistant", icons::MESSAGE_SQUARE, true),
            module("Monetization", icons::BAR_CHART, false),
            module("Workflows", icons::BOT, true),
        ],
    },
];

/// Tighter stacking than the engine defaults
pub fn stack_config() -> EngineConfig {
    EngineConfig::new()
        .with_spacing(200.0)
        .with_stack_offset_step(12.0)
        .with_scale_shrink(0.05)
        .with_stick_position(StickPosition::Percent(15.0))
        .with_blur_max(4.0)
}

#[component]
fn ModuleBox(module: Module) -> impl IntoView {
    let (box_class, icon_class) = if module.active {
        (
            "flex flex-col items-center justify-center gap-2 p-3 rounded-xl border text-center transition-all duration-300 h-full w-full bg-cordon-500/10 border-cordon-500/20 text-cordon-200 shadow-[0_0_15px_-3px_rgba(45,212,191,0.1)]",
            "w-[18px] h-[18px]",
        )
    } else {
        (
            "flex flex-col items-center justify-center gap-2 p-3 rounded-xl border text-center transition-all duration-300 h-full w-full bg-slate-900/40 border-slate-800/50 text-slate-500",
            "w-[18px] h-[18px] opacity-50",
        )
    };

    view! {
        <div class=box_class>
            <Icon name=module.icon class=icon_class />
            <span class="text-[10px] md:text-xs font-bold uppercase tracking-wider">{module.label}</span>
        </div>
    }
}

#[component]
fn StackCard(layer: Layer) -> impl IntoView {
    view! {
        <div class="bg-slate-950 border border-slate-800 rounded-2xl overflow-hidden relative w-full flex flex-col md:flex-row shadow-2xl md:h-[360px]">
            // Header side
            <div class="md:w-5/12 p-8 flex flex-col justify-center relative bg-slate-900/30">
                <div class="absolute top-0 left-0 w-1 h-full bg-gradient-to-b from-cordon-500 to-cordon-900 opacity-50 hidden md:block"></div>
                <div class="absolute top-0 left-0 w-full h-1 bg-gradient-to-r from-cordon-500 to-cordon-900 opacity-50 md:hidden"></div>

                <div class="mb-6">
                    <div class="w-10 h-10 rounded-lg bg-slate-900 flex items-center justify-center border border-slate-800 mb-4 shadow-inner">
                        <Icon name=layer.icon class="w-5 h-5" />
                    </div>
                    <h3 class="text-2xl md:text-3xl font-bold text-white mb-2 tracking-tight">{layer.title}</h3>
                    <span class="text-cordon-500 text-xs font-bold tracking-widest uppercase">{layer.subtitle}</span>
                </div>

                <p class="text-slate-400 text-sm leading-relaxed max-w-sm">{layer.description}</p>
            </div>

            // Module grid
            <div class="flex-1 p-6 md:p-8 bg-black/20 flex items-center justify-center border-t md:border-t-0 md:border-l border-slate-800/50">
                <div class="w-full h-full grid grid-cols-2 gap-3 md:gap-4">
                    {layer
                        .modules
                        .into_iter()
                        .map(|module| view! { <ModuleBox module=module /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ArchitectureStack() -> impl IntoView {
    view! {
        <section id="stack" class="relative min-h-[120vh] bg-slate-950 py-24 border-t border-slate-900">
            <div class="text-center mb-20 relative z-10">
                <h2 class="text-3xl md:text-4xl font-bold text-white mb-4">"The Enterprise Intelligence Stack"</h2>
                <p class="text-slate-400 max-w-lg mx-auto">
                    "A unified architecture designed to transform raw chaos into structured, actionable intelligence."
                </p>
            </div>

            <div class="max-w-5xl mx-auto px-6">
                <ScrollStack config=stack_config()>
                    {LAYERS
                        .into_iter()
                        .map(|layer| view! {
                            <ScrollStackItem>
                                <StackCard layer=layer />
                            </ScrollStackItem>
                        })
                        .collect_view()}
                </ScrollStack>
            </div>
        </section>
    }
}
