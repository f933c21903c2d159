//! Feature grid section

use leptos::prelude::*;

use crate::ui::{Icon, icons};

/// A single feature tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        title: "Total Data Capture",
        description: "Ingest everything. Emails, Slack, Zoom calls, and even employee screen activity are structured into a unified vector database.",
        icon: icons::EYE,
    },
    Feature {
        title: "Semantic Search",
        description: "Move beyond keywords. Our RAG (Retrieval-Augmented Generation) engine understands context, nuance, and intent.",
        icon: icons::BRAIN_CIRCUIT,
    },
    Feature {
        title: "Enterprise Connectors",
        description: "Seamlessly integrates with Google Workspace, Microsoft 365, Salesforce, Jira, and 50+ other enterprise tools.",
        icon: icons::NETWORK,
    },
    Feature {
        title: "Fine-Tuning Ready",
        description: "Transform your raw data into clean, labeled datasets ready to fine-tune Llama 3, Gemini, or proprietary models.",
        icon: icons::DATABASE,
    },
    Feature {
        title: "Bank-Grade Security",
        description: "SOC 2 Type II compliant. Granular RBAC (Role-Based Access Control) ensures employees only see what they're authorized to.",
        icon: icons::LOCK,
    },
    Feature {
        title: "Asset Monetization",
        description: "Turn dormant knowledge into revenue. Anonymize and license your curated datasets to third parties securely.",
        icon: icons::DOLLAR_SIGN,
    },
];

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="group p-8 rounded-2xl bg-slate-900/40 border border-slate-800 hover:border-cordon-500/30 transition-all duration-300 hover:bg-slate-800/60 backdrop-blur-sm">
            <div class="mb-6 p-3 bg-slate-950/50 rounded-lg w-fit border border-slate-800 group-hover:border-cordon-500/20 transition-colors">
                <Icon name=feature.icon class="w-7 h-7" />
            </div>
            <h3 class="text-xl font-semibold text-white mb-3 group-hover:text-cordon-300 transition-colors">
                {feature.title}
            </h3>
            <p class="text-slate-400 leading-relaxed">{feature.description}</p>
        </div>
    }
}

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="py-24 px-6 md:px-12 max-w-7xl mx-auto relative z-10">
            <div class="mb-16">
                <h2 class="text-3xl md:text-4xl font-bold text-white mb-4">
                    "The Operating System for "
                    <span class="text-cordon-400">"Enterprise Intelligence"</span>
                </h2>
                <p class="text-slate-400 text-lg max-w-2xl">
                    "Cordon bridges the gap between raw data silos and actionable AI models."
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                {FEATURES
                    .into_iter()
                    .map(|feature| view! { <FeatureCard feature=feature /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_titles_unique() {
        let mut titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), FEATURES.len());
    }
}
