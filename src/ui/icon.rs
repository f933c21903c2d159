use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file stem under `/icons`)
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icon names shipped in `public/icons`
pub mod icons {
    pub const BAR_CHART: &str = "bar-chart-3";
    pub const BOT: &str = "bot";
    pub const BRAIN_CIRCUIT: &str = "brain-circuit";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CPU: &str = "cpu";
    pub const DATABASE: &str = "database";
    pub const DOLLAR_SIGN: &str = "dollar-sign";
    pub const EYE: &str = "eye";
    pub const FILE_JSON: &str = "file-json";
    pub const LAYERS: &str = "layers";
    pub const LOADER: &str = "loader-2";
    pub const LOCK: &str = "lock";
    pub const MENU: &str = "menu";
    pub const MESSAGE_SQUARE: &str = "message-square";
    pub const NETWORK: &str = "network";
    pub const SEARCH: &str = "search";
    pub const SEND: &str = "send";
    pub const SERVER: &str = "server";
    pub const SHIELD_CHECK: &str = "shield-check";
    pub const TERMINAL: &str = "terminal";
    pub const X: &str = "x";
    pub const ZAP: &str = "zap";
}
