use dioxus::prelude::*;

use crate::components::{ProfileEditor, WalletLinkButton};
use crate::stores::auth_store;

#[component]
pub fn ProfileSettings() -> Element {
    let Some(user) = auth_store::get_user() else {
        return rsx! {
            div { class: "p-8 text-center text-muted-foreground", "Sign in to edit your profile." }
        };
    };

    rsx! {
        div {
            class: "p-4 max-w-2xl space-y-8",
            h1 { class: "text-2xl font-bold", "Settings" }

            section {
                class: "space-y-4",
                h2 { class: "text-lg font-semibold", "Profile" }
                ProfileEditor { key: "{user.id}", user: user.clone() }
            }

            section {
                class: "space-y-3",
                h2 { class: "text-lg font-semibold", "Wallet" }
                p {
                    class: "text-sm text-muted-foreground",
                    if user.is_artist {
                        "Buyers pay your linked wallet directly when they purchase a collection."
                    } else {
                        "Link the wallet you buy with so purchases show up on your account."
                    }
                }
                WalletLinkButton {}
            }

            section {
                class: "space-y-1 text-sm text-muted-foreground",
                h2 { class: "text-lg font-semibold text-foreground", "Account" }
                p { "Username: @{user.username}" }
                p { "Email: {user.email}" }
            }
        }
    }
}
