//! Server-rendered HTML pages

use axum::http::StatusCode;

use crate::quiz::{AnsweredQuestion, QuizSession, Score};

const STYLE: &str = "body{font-family:sans-serif;max-width:46rem;margin:2rem auto;padding:0 1rem}\
    .question{margin:1.5rem 0}.correct{color:#1a7f37}.incorrect{color:#cf222e}\
    .key{font-size:2rem;font-family:monospace;letter-spacing:.2rem}#timer{font-weight:bold}";

/// Counts down and submits the quiz when time runs out
const TIMER_SCRIPT: &str = r#"<script>
let remaining = __SECONDS__;
const display = document.getElementById("timer");
const tick = () => {
  display.textContent = Math.floor(remaining / 60) + ":" + String(remaining % 60).padStart(2, "0");
  if (remaining-- <= 0) { document.getElementById("quiz").submit(); } else { setTimeout(tick, 1000); }
};
tick();
</script>"#;

/// Escape text for inclusion in HTML content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>{title} - docquiz</title><style>{STYLE}</style></head>\
         <body><h1>{title}</h1>{body}</body></html>",
        title = escape(title),
    )
}

pub fn login() -> String {
    layout(
        "Log in",
        r#"<form method="post" action="/login">
<p><label>Name <input name="username" required></label></p>
<p><label><input type="radio" name="role" value="teacher" required> Teacher</label>
<label><input type="radio" name="role" value="student"> Student</label></p>
<p><button type="submit">Continue</button></p>
</form>"#,
    )
}

pub fn upload_form(username: &str, default_questions: usize, default_timer: u32) -> String {
    layout(
        "Create a quiz",
        &format!(
            r#"<p>Welcome, {name}. Upload a PDF, DOCX or TXT document.</p>
<form method="post" action="/teacher" enctype="multipart/form-data">
<p><input type="file" name="file" accept=".pdf,.docx,.txt" required></p>
<p><label>Questions <input type="number" name="num_questions" min="1" value="{default_questions}" required></label></p>
<p><label>Timer (seconds, 0 for none) <input type="number" name="timer" min="0" value="{default_timer}"></label></p>
<p><button type="submit">Generate</button></p>
</form>"#,
            name = escape(username),
        ),
    )
}

pub fn session_key(session: &QuizSession, requested: usize) -> String {
    let generated = session.questions.len();
    let note = if generated < requested {
        format!(
            "<p>Only {generated} of the {requested} requested questions could be generated from this document.</p>"
        )
    } else {
        format!("<p>{generated} questions generated.</p>")
    };

    layout(
        "Quiz ready",
        &format!(
            r#"<p>Share this session key with your students:</p>
<p class="key">{key}</p>{note}<p>Created {created}.</p>
<p><a href="/index">Create another quiz</a></p>"#,
            key = escape(&session.id),
            created = session.created_at.format("%Y-%m-%d %H:%M UTC"),
        ),
    )
}

pub fn join_form() -> String {
    layout(
        "Join a quiz",
        r#"<form method="post" action="/student">
<p><label>Session key <input name="session_key" required autofocus></label></p>
<p><button type="submit">Join</button></p>
</form>"#,
    )
}

pub fn questions(session: &QuizSession) -> String {
    let mut body = String::new();

    if session.timer_seconds > 0 {
        body.push_str(r#"<p>Time left: <span id="timer"></span></p>"#);
    }

    body.push_str(r#"<form id="quiz" method="post" action="/submit">"#);
    for (i, question) in session.questions.iter().enumerate() {
        body.push_str(&format!(
            r#"<div class="question"><p><strong>{n}.</strong> {prompt}</p>"#,
            n = i + 1,
            prompt = escape(&question.prompt),
        ));
        for option in &question.options {
            body.push_str(&format!(
                r#"<label><input type="radio" name="{i}" value="{label}"> {label}) {text}</label><br>"#,
                label = escape(&option.label),
                text = escape(&option.text),
            ));
        }
        body.push_str("</div>");
    }
    body.push_str(r#"<p><button type="submit">Submit answers</button></p></form>"#);

    if session.timer_seconds > 0 {
        body.push_str(&TIMER_SCRIPT.replace("__SECONDS__", &session.timer_seconds.to_string()));
    }

    layout("Quiz", &body)
}

pub fn results(username: Option<&str>, answered: &[AnsweredQuestion], score: Score) -> String {
    let mut body = format!(
        "<p>{who}{correct} / {total} correct ({pct:.0}%)</p>",
        who = username
            .map(|u| format!("{}: ", escape(u)))
            .unwrap_or_default(),
        correct = score.correct,
        total = score.total,
        pct = score.percent(),
    );

    for (i, a) in answered.iter().enumerate() {
        let (class, mark) = if a.is_correct {
            ("correct", "&#10003;")
        } else {
            ("incorrect", "&#10007;")
        };
        body.push_str(&format!(
            r#"<div class="question {class}"><p><strong>{n}.</strong> {prompt}</p>
<p>{mark} Your answer: {user}. Correct answer: {label}) {text}</p></div>"#,
            n = i + 1,
            prompt = escape(&a.question.prompt),
            user = escape(&a.user_answer),
            label = escape(&a.question.correct),
            text = escape(a.question.answer().unwrap_or("?")),
        ));
    }

    layout("Results", &body)
}

pub fn error(status: StatusCode, message: &str) -> String {
    layout(
        status.canonical_reason().unwrap_or("Error"),
        &format!(
            r#"<p>{}</p><p><a href="/login">Back to start</a></p>"#,
            escape(message)
        ),
    )
}
