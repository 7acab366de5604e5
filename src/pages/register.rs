//! Account registration page

use dioxus::prelude::*;

use crate::api::{self, ApiError};
use crate::components::PhoneInput;
use crate::types::{RegisterRequest, RegisterResponse};

const INPUT_CLASS: &str =
    "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500";

/// Registration page - collects email, phone contact and password
#[component]
pub fn Register() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut contact = use_signal(String::new);
    let mut status = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let handle_register = move |_| {
        let request = RegisterRequest {
            email: email(),
            password: password(),
            contact: contact(),
        };

        spawn(async move {
            status.set(None);
            is_submitting.set(true);

            tracing::info!("registration attempt started");

            let result = api::default_client().register(&request).await;

            match &result {
                Ok(response) => {
                    tracing::info!(message = ?response.message, "registration succeeded")
                }
                Err(err) => tracing::error!(error = %err, "registration failed"),
            }

            status.set(Some(registration_status(&result)));
            is_submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-100 flex items-center justify-center px-4",

            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full",

                div {
                    class: "mb-6 text-center",
                    h2 { class: "text-2xl font-bold text-gray-900 mb-2", "Register" }
                    p { class: "text-gray-600 text-sm", "Chattify" }
                }

                form {
                    onsubmit: handle_register,

                    div {
                        class: "mb-4",
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Email"
                        }
                        input {
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                            placeholder: "you@example.com",
                            class: INPUT_CLASS,
                            required: true,
                        }
                    }

                    div {
                        class: "mb-4",
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Phone Number"
                        }
                        PhoneInput {
                            value: contact(),
                            on_change: move |value| contact.set(value),
                            required: true,
                            placeholder: "+1234567890",
                            class: INPUT_CLASS,
                        }
                    }

                    div {
                        class: "mb-6",
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Password"
                        }
                        input {
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                            class: INPUT_CLASS,
                            required: true,
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "w-full bg-blue-600 text-white py-2 px-4 rounded-md hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: is_submitting(),
                        if is_submitting() { "Registering..." } else { "Register" }
                    }
                }

                if let Some(message) = status() {
                    p {
                        class: "mt-4 text-center text-sm text-gray-700",
                        "{message}"
                    }
                }
            }
        }
    }
}

/// Map a settled registration outcome to the status line shown to the user.
///
/// A message carried by the reply wins; otherwise the fixed fallback for the
/// outcome class is used. Empty messages count as absent.
fn registration_status(result: &Result<RegisterResponse, ApiError>) -> String {
    match result {
        Ok(response) => match response.message.as_deref() {
            Some(message) if !message.is_empty() => message.to_string(),
            _ => "Registration successful! Please check your email to confirm.".to_string(),
        },
        Err(err @ ApiError::Api { .. }) => match err.message() {
            Some(message) if !message.is_empty() => message.to_string(),
            _ => "Registration failed! Please try again.".to_string(),
        },
        Err(_) => "An unexpected error occurred. Please try again later.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorBody;
    use reqwest::StatusCode;

    // Transport faults carry a real reqwest error; the cheapest way to get
    // one is a send that cannot connect.
    async fn network_error() -> ApiError {
        let err = reqwest::Client::new()
            .get("http://127.0.0.1:0/auth/register")
            .send()
            .await
            .unwrap_err();
        ApiError::Network(err)
    }

    #[test]
    fn test_success_with_message_shown_verbatim() {
        let result = Ok(RegisterResponse {
            message: Some("Welcome!".to_string()),
        });
        assert_eq!(registration_status(&result), "Welcome!");
    }

    #[test]
    fn test_success_without_message_uses_fallback() {
        let result = Ok(RegisterResponse { message: None });
        assert_eq!(
            registration_status(&result),
            "Registration successful! Please check your email to confirm."
        );
    }

    #[test]
    fn test_success_with_empty_message_uses_fallback() {
        let result = Ok(RegisterResponse {
            message: Some(String::new()),
        });
        assert_eq!(
            registration_status(&result),
            "Registration successful! Please check your email to confirm."
        );
    }

    #[test]
    fn test_api_error_with_message_shown_verbatim() {
        let result = Err(ApiError::Api {
            status: StatusCode::BAD_REQUEST,
            body: Some(ErrorBody {
                message: Some("Email taken".to_string()),
            }),
        });
        assert_eq!(registration_status(&result), "Email taken");
    }

    #[test]
    fn test_api_error_without_message_uses_fallback() {
        let result = Err(ApiError::Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: Some(ErrorBody { message: None }),
        });
        assert_eq!(
            registration_status(&result),
            "Registration failed! Please try again."
        );
    }

    #[test]
    fn test_api_error_without_body_uses_fallback() {
        let result = Err(ApiError::Api {
            status: StatusCode::BAD_GATEWAY,
            body: None,
        });
        assert_eq!(
            registration_status(&result),
            "Registration failed! Please try again."
        );
    }

    #[tokio::test]
    async fn test_network_error_uses_generic_fallback() {
        let result = Err(network_error().await);
        assert_eq!(
            registration_status(&result),
            "An unexpected error occurred. Please try again later."
        );
    }
}
