use chrono::Datelike;
use leptos::prelude::*;

use crate::ui::header::Logo;

const PRODUCT_LINKS: [&str; 4] = [
    "Data Capture",
    "Knowledge Graph",
    "Fine-Tuning API",
    "Monetization",
];
const COMPANY_LINKS: [&str; 4] = ["About", "Careers", "Security", "Contact"];
const LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "GDPR Compliance"];

/// Copyright line for the given year
pub fn copyright_notice(year: i32) -> String {
    format!("© {} Cordon AI, Inc. All rights reserved.", year)
}

#[component]
fn FooterColumn(title: &'static str, links: &'static [&'static str]) -> impl IntoView {
    view! {
        <div>
            <h4 class="text-white font-semibold mb-4">{title}</h4>
            <ul class="space-y-2 text-sm text-slate-400">
                {links
                    .iter()
                    .map(|label| view! {
                        <li><a href="#" class="hover:text-cordon-300">{*label}</a></li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="bg-slate-950 border-t border-slate-800 pt-16 pb-8 relative z-10">
            <div class="max-w-7xl mx-auto px-6 grid grid-cols-1 md:grid-cols-4 gap-12 mb-12">
                <div class="col-span-1">
                    <Logo class="h-8 mb-6" />
                    <p class="text-slate-400 text-sm leading-relaxed">
                        "Transforming enterprise chaos into structured intelligence. The backbone of the AI-native organization."
                    </p>
                </div>

                <FooterColumn title="Product" links=&PRODUCT_LINKS />
                <FooterColumn title="Company" links=&COMPANY_LINKS />
                <FooterColumn title="Legal" links=&LEGAL_LINKS />
            </div>

            <div class="max-w-7xl mx-auto px-6 border-t border-slate-900 pt-8 flex flex-col md:flex-row justify-between items-center text-xs text-slate-600">
                <p>{copyright_notice(year)}</p>
                <p class="mt-2 md:mt-0">"Designed for the future of work."</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_notice() {
        assert_eq!(
            copyright_notice(2026),
            "© 2026 Cordon AI, Inc. All rights reserved."
        );
    }
}
