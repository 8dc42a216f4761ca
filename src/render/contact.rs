use crate::core::contact::{ContactForm, SubmitState};
use crate::render::html_escape;

/// Contact page in whichever state the form flow has reached.
pub fn contact_page(form: &ContactForm) -> String {
    match form.state() {
        SubmitState::Editing => [
            "<div class=\"contact\">",
            "  <h2>Contact</h2>",
            "  <form method=\"post\" action=\"/api/contact\">",
            "    <input name=\"name\" placeholder=\"Name\" />",
            "    <input name=\"email\" type=\"email\" placeholder=\"Email\" />",
            "    <textarea name=\"message\" placeholder=\"Message\"></textarea>",
            "    <button>Submit</button>",
            "  </form>",
            "</div>",
        ]
        .join("\n"),
        SubmitState::Submitted => [
            "<div class=\"contact\">",
            "  <h3>Submitted!</h3>",
            "</div>",
        ]
        .join("\n"),
        SubmitState::Failed(message) => [
            "<div class=\"contact\">".to_string(),
            format!(
                "  <p class=\"error\">Something went wrong: {}</p>",
                html_escape(message)
            ),
            "</div>".to_string(),
        ]
        .join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::{StorefrontClient, CONTACT_PATH};
    use crate::domain::model::ContactSubmission;
    use httpmock::prelude::*;

    #[test]
    fn test_editing_state_renders_the_form() {
        let html = contact_page(&ContactForm::new());
        assert!(html.contains("placeholder=\"Name\""));
        assert!(html.contains("placeholder=\"Email\""));
        assert!(html.contains("placeholder=\"Message\""));
        assert!(html.contains("<button>Submit</button>"));
    }

    #[tokio::test]
    async fn test_submitted_state_renders_confirmation_heading() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path(CONTACT_PATH);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({ "status": "ok" }));
        });

        let client = StorefrontClient::new(server.base_url());
        let mut form = ContactForm::new();
        form.submit(
            &client,
            ContactSubmission {
                name: "Joe".to_string(),
                email: "joe@example.com".to_string(),
                message: "test message".to_string(),
            },
        )
        .await
        .unwrap();

        let html = contact_page(&form);
        let heading = html
            .lines()
            .find(|line| line.contains("<h3>"))
            .expect("confirmation heading");
        assert!(heading.contains("Submitted"));
    }

    #[tokio::test]
    async fn test_failed_state_renders_error_paragraph() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path(CONTACT_PATH);
            then.status(500);
        });

        let client = StorefrontClient::new(server.base_url());
        let mut form = ContactForm::new();
        let result = form
            .submit(
                &client,
                ContactSubmission {
                    name: "Joe".to_string(),
                    email: "joe@example.com".to_string(),
                    message: "test message".to_string(),
                },
            )
            .await;
        assert!(result.is_err());

        let html = contact_page(&form);
        assert!(html.contains("<p class=\"error\">Something went wrong:"));
        assert!(html.contains("500"));
    }
}
