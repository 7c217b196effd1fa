use dioxus::prelude::*;
use crate::constants::*;
use crate::state::JumpPolicy;

#[component]
pub fn TitleBar(run_name: String, jump_policy: JumpPolicy) -> Element {
    let policy_label = match jump_policy {
        JumpPolicy::ClampToRange => "Jumps: clamp to range",
        JumpPolicy::Free => "Jumps: free",
    };
    rsx! {
        div {
            style: "
                display: flex; align-items: center; justify-content: space-between;
                height: 40px; padding: 0 16px;
                background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                user-select: none; flex-shrink: 0;
            ",
            span { style: "font-size: 13px; font-weight: 600; color: {TEXT_SECONDARY};", "Sim Timeline Console" }
            span { style: "font-size: 13px; color: {TEXT_MUTED};", "{run_name}" }
            span {
                style: "font-size: 10px; color: {TEXT_DIM}; text-transform: uppercase; letter-spacing: 0.6px; min-width: 160px; text-align: right;",
                "{policy_label}"
            }
        }
    }
}
