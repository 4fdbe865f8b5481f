//! Server-rendered HTML pages.
//!
//! Every user-supplied string goes through [`html_escape`] before it is
//! interpolated.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use notepad_core::{FieldErrors, Notepad};

/// Escape text for use in HTML element content and quoted attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// 200 response carrying an HTML document.
pub fn render(html: String) -> Response {
    render_status(StatusCode::OK, html)
}

pub fn render_status(status: StatusCode, html: String) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        html,
    )
        .into_response()
}

const STYLE: &str = r#"
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 720px; margin: 40px auto; padding: 0 20px; color: #1a1a2e; }
        nav { display: flex; gap: 16px; align-items: center; border-bottom: 1px solid #e0e0e0; padding-bottom: 12px; margin-bottom: 24px; }
        nav .who { margin-left: auto; color: #666; font-size: 14px; }
        label { display: block; font-weight: 600; margin-top: 16px; }
        input[type=text], input[type=email], input[type=password], textarea { width: 100%; padding: 8px; box-sizing: border-box; }
        textarea { min-height: 160px; }
        .error { color: #b00020; font-size: 14px; margin: 4px 0 0; }
        .notepad { border: 1px solid #e0e0e0; border-radius: 6px; padding: 12px 16px; margin-bottom: 12px; }
        .notepad h2 { margin: 0 0 8px; font-size: 18px; }
        .notepad pre { white-space: pre-wrap; font-family: inherit; margin: 0 0 12px; }
        .actions { display: flex; gap: 12px; align-items: center; }
        button { padding: 6px 14px; cursor: pointer; }
"#;

fn layout(page_title: &str, user_email: Option<&str>, content: &str) -> String {
    let nav = match user_email {
        Some(email) => format!(
            r#"<nav><a href="/notepad">Notepads</a><a href="/notepad/create">New notepad</a><span class="who">{}</span><a href="/logout">Log out</a></nav>"#,
            html_escape(email)
        ),
        None => r#"<nav><a href="/login">Log in</a><a href="/signup">Sign up</a></nav>"#.to_string(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{page_title} - Notepad</title>
    <style>{style}</style>
</head>
<body>
    {nav}
    {content}
</body>
</html>"#,
        page_title = html_escape(page_title),
        style = STYLE,
        nav = nav,
        content = content,
    )
}

fn field_error(errors: &FieldErrors, field: &str) -> String {
    errors
        .get(field)
        .map(|msg| format!(r#"<p class="error">{}</p>"#, html_escape(msg)))
        .unwrap_or_default()
}

fn banner(message: Option<&str>) -> String {
    message
        .map(|msg| format!(r#"<p class="error" role="alert">{}</p>"#, html_escape(msg)))
        .unwrap_or_default()
}

// =============================================================================
// AUTH PAGES
// =============================================================================

pub fn login_page(email: &str, error: Option<&str>) -> String {
    let content = format!(
        r#"<h1>Log in</h1>
    {banner}
    <form method="post" action="/login">
        <label for="email">Email</label>
        <input type="email" id="email" name="email" value="{email}" autocomplete="username">
        <label for="password">Password</label>
        <input type="password" id="password" name="password" autocomplete="current-password">
        <p><button type="submit">Log in</button></p>
    </form>
    <p>No account yet? <a href="/signup">Sign up</a></p>"#,
        banner = banner(error),
        email = html_escape(email),
    );
    layout("Log in", None, &content)
}

pub fn signup_page(email: &str, errors: &FieldErrors, error: Option<&str>) -> String {
    let content = format!(
        r#"<h1>Sign up</h1>
    {banner}
    <form method="post" action="/signup">
        <label for="email">Email</label>
        <input type="email" id="email" name="email" value="{email}" autocomplete="username">
        {email_error}
        <label for="password">Password</label>
        <input type="password" id="password" name="password" autocomplete="new-password">
        {password_error}
        <p><button type="submit">Create account</button></p>
    </form>
    <p>Already registered? <a href="/login">Log in</a></p>"#,
        banner = banner(error),
        email = html_escape(email),
        email_error = field_error(errors, "email"),
        password_error = field_error(errors, "password"),
    );
    layout("Sign up", None, &content)
}

// =============================================================================
// NOTEPAD PAGES
// =============================================================================

/// Marker shown when a user owns no notepads.
pub const EMPTY_LIST_MESSAGE: &str = "You have no notepads.";

pub fn notepad_list(user_email: &str, notepads: &[Notepad]) -> String {
    let items = if notepads.is_empty() {
        format!("<p>{}</p>", EMPTY_LIST_MESSAGE)
    } else {
        notepads
            .iter()
            .map(|n| {
                format!(
                    r#"<article class="notepad">
        <h2>{title}</h2>
        <pre>{body}</pre>
        <div class="actions">
            <a href="/notepad/edit/{id}">Edit</a>
            <form method="post" action="/notepad/delete/{id}"><button type="submit">Delete</button></form>
        </div>
    </article>"#,
                    id = n.id,
                    title = html_escape(&n.title),
                    body = html_escape(&n.body),
                )
            })
            .collect::<Vec<_>>()
            .join("\n    ")
    };

    let content = format!(
        r#"<h1>Your notepads</h1>
    <p><a href="/notepad/create">Create a notepad</a></p>
    {items}"#
    );
    layout("Notepads", Some(user_email), &content)
}

/// Which notepad form is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotepadFormKind {
    Create,
    Edit(i64),
}

pub fn notepad_form(
    user_email: &str,
    kind: NotepadFormKind,
    title: &str,
    body: &str,
    errors: &FieldErrors,
) -> String {
    let (heading, action, hidden_id, submit) = match kind {
        NotepadFormKind::Create => (
            "New notepad",
            "/notepad/create".to_string(),
            String::new(),
            "Create",
        ),
        NotepadFormKind::Edit(id) => (
            "Edit notepad",
            format!("/notepad/edit/{}", id),
            format!(r#"<input type="hidden" name="id" value="{}">"#, id),
            "Save",
        ),
    };

    let content = format!(
        r#"<h1>{heading}</h1>
    <form method="post" action="{action}">
        {hidden_id}
        <label for="title">Title</label>
        <input type="text" id="title" name="title" value="{title}">
        {title_error}
        <label for="body">Body</label>
        <textarea id="body" name="body">{body}</textarea>
        {body_error}
        <p class="actions"><button type="submit">{submit}</button><a href="/notepad">Cancel</a></p>
    </form>"#,
        title = html_escape(title),
        body = html_escape(body),
        title_error = field_error(errors, "title"),
        body_error = field_error(errors, "body"),
    );
    layout(heading, Some(user_email), &content)
}

// =============================================================================
// ERRORS
// =============================================================================

pub fn error_page(heading: &str, message: &str) -> String {
    let content = format!(
        r#"<h1>{}</h1>
    <p>{}</p>
    <p><a href="/">Back to start</a></p>"#,
        html_escape(heading),
        html_escape(message),
    );
    layout(heading, None, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn notepad(id: i64, title: &str, body: &str) -> Notepad {
        let now = Utc::now();
        Notepad {
            id,
            user_id: 1,
            title: title.to_string(),
            body: body.to_string(),
            created_at_utc: now,
            updated_at_utc: now,
        }
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(html_escape("plain"), "plain");
    }

    #[test]
    fn test_empty_list_marker() {
        let html = notepad_list("user@example.com", &[]);
        assert!(html.contains("You have no notepads."));
    }

    #[test]
    fn test_list_shows_entries_with_actions() {
        let html = notepad_list("user@example.com", &[notepad(7, "Shopping", "Milk")]);
        assert!(html.contains("Shopping"));
        assert!(html.contains("Milk"));
        assert!(html.contains(r#"href="/notepad/edit/7""#));
        assert!(html.contains(r#"action="/notepad/delete/7""#));
        assert!(!html.contains(EMPTY_LIST_MESSAGE));
    }

    #[test]
    fn test_list_escapes_user_text() {
        let html = notepad_list("user@example.com", &[notepad(1, "<script>", "a & b")]);
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_create_form_has_labels() {
        let html = notepad_form(
            "user@example.com",
            NotepadFormKind::Create,
            "",
            "",
            &FieldErrors::default(),
        );
        assert!(html.contains("Title"));
        assert!(html.contains("Body"));
        assert!(html.contains(r#"action="/notepad/create""#));
    }

    #[test]
    fn test_edit_form_prefilled() {
        let html = notepad_form(
            "user@example.com",
            NotepadFormKind::Edit(3),
            "old \"title\"",
            "old body",
            &FieldErrors::default(),
        );
        assert!(html.contains(r#"action="/notepad/edit/3""#));
        assert!(html.contains(r#"name="id" value="3""#));
        assert!(html.contains(r#"value="old &quot;title&quot;""#));
        assert!(html.contains(">old body</textarea>"));
    }

    #[test]
    fn test_form_shows_field_errors() {
        let errors = notepad_core::NotepadInput::default().validate().unwrap_err();
        let html = notepad_form("u@example.com", NotepadFormKind::Create, "", "", &errors);
        assert!(html.contains("Title is required."));
        assert!(html.contains("Body is required."));
    }

    #[test]
    fn test_login_page_banner() {
        let html = login_page("a@example.com", Some("Invalid email or password."));
        assert!(html.contains("Invalid email or password."));
        assert!(html.contains(r#"value="a@example.com""#));
        assert!(!login_page("", None).contains("role=\"alert\""));
    }
}
