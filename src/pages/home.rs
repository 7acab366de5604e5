//! Home page component

use dioxus::prelude::*;

use crate::routes::Route;

/// Landing page with navigation to registration
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-100 flex items-center justify-center px-4",

            div {
                class: "text-center",
                h1 {
                    class: "text-3xl font-bold text-gray-900 mb-2",
                    "Welcome to Chattify!"
                }
                p {
                    class: "text-gray-600 mb-6",
                    "Your one-stop solution for seamless communication."
                }
                Link {
                    to: Route::Register {},
                    class: "inline-block bg-blue-600 text-white py-2 px-6 rounded-md hover:bg-blue-700",
                    "Create an account"
                }
            }
        }
    }
}
