use std::sync::Arc;

use axum::{
    extract::Path,
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
    Extension, Router,
};

use super::found;
use crate::conversation;
use crate::middleware::auth::session_gate;
use crate::session::SessionClaims;
use crate::AppState;

pub fn chat_routes() -> Router {
    let gated = Router::new()
        .route("/chat", get(index).post(index))
        .route("/chat/", get(index).post(index))
        .route("/chat/:conversation_id", get(chat).post(chat))
        .layer(middleware::from_fn(session_gate));

    Router::new()
        .route("/", get(root).post(root))
        .merge(gated)
}

async fn root() -> impl IntoResponse {
    found("/chat/")
}

/// The index is never idempotent: every visit gets a fresh conversation id.
async fn index(
    Extension(state): Extension<Arc<AppState>>,
    Extension(session): Extension<SessionClaims>,
) -> Html<String> {
    render_chat(&state, &session, &conversation::new_conversation_id())
}

/// Chat ids are opaque: anything with a hyphen is rendered verbatim, with no
/// lookup anywhere. Anything else bounces back to the index for a fresh id.
async fn chat(
    Extension(state): Extension<Arc<AppState>>,
    Extension(session): Extension<SessionClaims>,
    Path(conversation_id): Path<String>,
) -> Response {
    if !conversation_id.contains('-') {
        return found("/chat/").into_response();
    }
    render_chat(&state, &session, &conversation_id).into_response()
}

pub(crate) fn render_login(error: Option<&str>) -> Html<String> {
    let error_block = match error {
        Some(message) => format!(
            r#"<div class="error-message">{}</div>"#,
            escape_html(message)
        ),
        None => String::new(),
    };
    Html(LOGIN_PAGE.replace("ERROR_BLOCK_PLACEHOLDER", &error_block))
}

fn render_chat(state: &AppState, session: &SessionClaims, conversation_id: &str) -> Html<String> {
    let user_id = session.user_id.as_deref().unwrap_or("");
    Html(
        CHAT_PAGE
            .replace("CONVERSATION_ID_PLACEHOLDER", &escape_html(conversation_id))
            .replace("URL_PREFIX_PLACEHOLDER", &escape_html(&state.config.url_prefix))
            .replace("USER_ID_PLACEHOLDER", &escape_html(user_id)),
    )
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const LOGIN_PAGE: &str = r###"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>💬 Chat - Sign In</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            color: #e8e8e8;
            background: linear-gradient(135deg, #1a1a2e 0%, #16213e 50%, #0f1419 100%);
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
        }

        .login-card {
            background: rgba(26, 26, 46, 0.9);
            border: 1px solid rgba(59, 130, 246, 0.3);
            border-radius: 12px;
            padding: 2.5rem;
            width: 100%;
            max-width: 380px;
        }

        .login-card h1 {
            font-size: 1.5rem;
            margin-bottom: 0.5rem;
            text-align: center;
        }

        .login-card p.subtitle {
            color: #9ca3af;
            text-align: center;
            margin-bottom: 1.5rem;
            font-size: 0.9rem;
        }

        .error-message {
            background: rgba(220, 53, 69, 0.15);
            border: 1px solid rgba(220, 53, 69, 0.5);
            color: #f8d7da;
            border-radius: 6px;
            padding: 0.75rem;
            margin-bottom: 1rem;
            font-size: 0.9rem;
        }

        label {
            display: block;
            margin-bottom: 0.25rem;
            font-size: 0.85rem;
            color: #9ca3af;
        }

        input {
            width: 100%;
            padding: 0.65rem 0.75rem;
            margin-bottom: 1rem;
            border-radius: 6px;
            border: 1px solid rgba(59, 130, 246, 0.3);
            background: rgba(15, 20, 25, 0.8);
            color: #e8e8e8;
            font-size: 1rem;
        }

        input:focus {
            outline: none;
            border-color: #3b82f6;
        }

        button {
            width: 100%;
            padding: 0.7rem;
            border: none;
            border-radius: 6px;
            background: linear-gradient(135deg, #3b82f6 0%, #6366f1 100%);
            color: white;
            font-size: 1rem;
            font-weight: 600;
            cursor: pointer;
        }

        button:hover {
            opacity: 0.9;
        }
    </style>
</head>
<body>
    <div class="login-card">
        <h1>💬 Chat</h1>
        <p class="subtitle">Sign in to start a conversation</p>
        ERROR_BLOCK_PLACEHOLDER
        <form action="/login" method="post">
            <label for="user_id">User ID</label>
            <input type="text" id="user_id" name="user_id" autocomplete="username" autofocus>
            <label for="password">Password</label>
            <input type="password" id="password" name="password" autocomplete="current-password">
            <button type="submit">Sign In</button>
        </form>
    </div>
</body>
</html>
"###;

const CHAT_PAGE: &str = r###"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>💬 Chat</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            color: #e8e8e8;
            background: linear-gradient(135deg, #1a1a2e 0%, #16213e 50%, #0f1419 100%);
            min-height: 100vh;
            display: flex;
            flex-direction: column;
        }

        .header {
            background: rgba(26, 26, 46, 0.9);
            border-bottom: 1px solid rgba(59, 130, 246, 0.3);
            padding: 0.75rem 1.25rem;
            display: flex;
            align-items: center;
            gap: 1rem;
        }

        .header .logo {
            font-weight: bold;
            font-size: 1.1rem;
        }

        .header .conversation {
            color: #9ca3af;
            font-size: 0.8rem;
            flex: 1;
            overflow: hidden;
            text-overflow: ellipsis;
            white-space: nowrap;
        }

        .header a {
            color: #3b82f6;
            text-decoration: none;
            font-size: 0.9rem;
        }

        .header select {
            background: rgba(15, 20, 25, 0.8);
            color: #e8e8e8;
            border: 1px solid rgba(59, 130, 246, 0.3);
            border-radius: 6px;
            padding: 0.3rem 0.5rem;
        }

        .messages {
            flex: 1;
            overflow-y: auto;
            padding: 1.25rem;
            display: flex;
            flex-direction: column;
            gap: 0.75rem;
        }

        .message {
            max-width: 70%;
            padding: 0.6rem 0.9rem;
            border-radius: 10px;
            line-height: 1.45;
            white-space: pre-wrap;
            word-break: break-word;
        }

        .message.user {
            align-self: flex-end;
            background: linear-gradient(135deg, #3b82f6 0%, #6366f1 100%);
        }

        .message.assistant {
            align-self: flex-start;
            background: rgba(26, 26, 46, 0.9);
            border: 1px solid rgba(59, 130, 246, 0.3);
        }

        .message.notice {
            align-self: center;
            color: #9ca3af;
            font-size: 0.85rem;
            background: none;
        }

        .composer {
            display: flex;
            gap: 0.75rem;
            padding: 1rem 1.25rem;
            background: rgba(26, 26, 46, 0.9);
            border-top: 1px solid rgba(59, 130, 246, 0.3);
        }

        .composer textarea {
            flex: 1;
            resize: none;
            height: 3rem;
            padding: 0.6rem 0.75rem;
            border-radius: 6px;
            border: 1px solid rgba(59, 130, 246, 0.3);
            background: rgba(15, 20, 25, 0.8);
            color: #e8e8e8;
            font-size: 1rem;
            font-family: inherit;
        }

        .composer button {
            padding: 0 1.5rem;
            border: none;
            border-radius: 6px;
            background: linear-gradient(135deg, #3b82f6 0%, #6366f1 100%);
            color: white;
            font-size: 1rem;
            font-weight: 600;
            cursor: pointer;
        }
    </style>
</head>
<body data-conversation-id="CONVERSATION_ID_PLACEHOLDER"
      data-url-prefix="URL_PREFIX_PLACEHOLDER"
      data-user-id="USER_ID_PLACEHOLDER">
    <div class="header">
        <span class="logo">💬 Chat</span>
        <span class="conversation">CONVERSATION_ID_PLACEHOLDER</span>
        <select id="language-select" title="Language"></select>
        <a href="/chat/">New chat</a>
        <a href="/logout">Sign out (USER_ID_PLACEHOLDER)</a>
    </div>
    <div class="messages" id="messages">
        <div class="message notice">New conversation started.</div>
    </div>
    <div class="composer">
        <textarea id="prompt" placeholder="Send a message..."></textarea>
        <button id="send">Send</button>
    </div>
    <script>
        const conversationId = document.body.dataset.conversationId;
        const urlPrefix = document.body.dataset.urlPrefix;
        const messages = document.getElementById('messages');
        const prompt = document.getElementById('prompt');
        const languageSelect = document.getElementById('language-select');

        function appendMessage(role, text) {
            const div = document.createElement('div');
            div.className = 'message ' + role;
            div.textContent = text;
            messages.appendChild(div);
            messages.scrollTop = messages.scrollHeight;
        }

        async function loadLanguages() {
            try {
                const [languages, locale] = await Promise.all([
                    fetch(urlPrefix + '/get-languages').then(r => r.json()),
                    fetch(urlPrefix + '/get-locale').then(r => r.text()),
                ]);
                for (const lang of languages) {
                    const option = document.createElement('option');
                    option.value = lang;
                    option.textContent = lang;
                    option.selected = lang === locale;
                    languageSelect.appendChild(option);
                }
            } catch (e) {
                console.error('failed to load languages', e);
            }
        }

        languageSelect.addEventListener('change', async () => {
            await fetch(urlPrefix + '/change-language', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({ language: languageSelect.value }),
            });
            window.location.reload();
        });

        async function send() {
            const text = prompt.value.trim();
            if (!text) return;
            prompt.value = '';
            appendMessage('user', text);
            try {
                const response = await fetch(urlPrefix + '/backend-api/v2/conversation', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ conversation_id: conversationId, prompt: text }),
                });
                if (!response.ok) throw new Error('HTTP ' + response.status);
                appendMessage('assistant', await response.text());
            } catch (e) {
                appendMessage('notice', 'The chat backend is not reachable (' + e.message + ').');
            }
        }

        document.getElementById('send').addEventListener('click', send);
        prompt.addEventListener('keydown', (event) => {
            if (event.key === 'Enter' && !event.shiftKey) {
                event.preventDefault();
                send();
            }
        });

        loadLanguages();
    </script>
</body>
</html>
"###;
