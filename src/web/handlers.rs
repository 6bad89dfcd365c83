use std::collections::HashMap;
use std::sync::Arc;

use axum::Form;
use axum::extract::{Multipart, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

use super::error::AppError;
use super::{AppState, pages};
use crate::ingest::{self, Document, ExtractionError};
use crate::quiz::{Question, answers_from_form, grade, score};

pub const USER_COOKIE: &str = "docquiz_user";
pub const ROLE_COOKIE: &str = "docquiz_role";
pub const SESSION_COOKIE: &str = "docquiz_session";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Teacher,
    Student,
}

impl Role {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "teacher" => Some(Role::Teacher),
            "student" => Some(Role::Student),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Teacher => "teacher",
            Role::Student => "student",
        }
    }
}

fn visitor_role(jar: &CookieJar) -> Option<Role> {
    jar.get(ROLE_COOKIE).and_then(|c| Role::parse(c.value()))
}

fn visitor_name(jar: &CookieJar) -> Option<String> {
    jar.get(USER_COOKIE).map(|c| c.value().to_string())
}

fn cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

pub async fn home() -> Redirect {
    Redirect::to("/login")
}

pub async fn login_page() -> Html<String> {
    Html(pages::login())
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    username: Option<String>,
    role: Option<String>,
}

pub async fn login(jar: CookieJar, Form(form): Form<LoginForm>) -> Result<Response, AppError> {
    let username = form
        .username
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty());
    let role = form.role.filter(|r| !r.trim().is_empty());

    let (Some(username), Some(role)) = (username, role) else {
        return Err(AppError::MissingCredentials);
    };
    let role = Role::parse(&role).ok_or(AppError::InvalidRole)?;

    tracing::info!(username = %username, role = role.as_str(), "visitor logged in");

    let jar = jar
        .add(cookie(USER_COOKIE, username))
        .add(cookie(ROLE_COOKIE, role.as_str().to_string()))
        .remove(Cookie::build(SESSION_COOKIE).path("/"));

    let target = match role {
        Role::Teacher => "/index",
        Role::Student => "/student",
    };

    Ok((jar, Redirect::to(target)).into_response())
}

pub async fn index(State(state): State<AppState>, jar: CookieJar) -> Response {
    if visitor_role(&jar) != Some(Role::Teacher) {
        return Redirect::to("/login").into_response();
    }

    let username = visitor_name(&jar).unwrap_or_default();
    Html(pages::upload_form(
        &username,
        state.default_questions,
        state.default_timer,
    ))
    .into_response()
}

/// Read a numeric form field, falling back to `default` when blank
fn parse_field<T: std::str::FromStr>(
    value: Option<&str>,
    default: T,
    err: AppError,
) -> Result<T, AppError> {
    match value.map(str::trim) {
        None | Some("") => Ok(default),
        Some(v) => v.parse().map_err(|_| err),
    }
}

pub async fn teacher_generate(
    State(state): State<AppState>,
    jar: CookieJar,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    if visitor_role(&jar) != Some(Role::Teacher) {
        return Ok(Redirect::to("/login").into_response());
    }

    let mut upload: Option<(String, Vec<u8>)> = None;
    let mut num_questions: Option<String> = None;
    let mut timer: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                upload = Some((file_name, bytes.to_vec()));
            }
            "num_questions" => num_questions = Some(field.text().await?),
            "timer" => timer = Some(field.text().await?),
            _ => {}
        }
    }

    let (file_name, bytes) = upload
        .filter(|(name, _)| !name.is_empty())
        .ok_or(AppError::InvalidFile)?;
    let document = Document::new(file_name, bytes).map_err(|_| AppError::InvalidFile)?;

    let count = parse_field(
        num_questions.as_deref(),
        state.default_questions,
        AppError::InvalidQuestionCount,
    )?;
    let timer_seconds = parse_field(timer.as_deref(), state.default_timer, AppError::InvalidTimer)?;

    tracing::info!(
        file = %document.name,
        kind = document.kind.as_str(),
        bytes = document.bytes.len(),
        count,
        "generating quiz from upload"
    );

    let generator = Arc::clone(&state.generator);
    let questions = tokio::task::spawn_blocking(move || -> Result<Vec<Question>, ExtractionError> {
        let text = ingest::extract_document(&document)?;
        Ok(generator.generate(&text, count, &mut rand::thread_rng()))
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    let session = state.sessions.create(questions, timer_seconds);

    Ok(Html(pages::session_key(&session, count)).into_response())
}

pub async fn student_page(jar: CookieJar) -> Response {
    if visitor_role(&jar) != Some(Role::Student) {
        return Redirect::to("/login").into_response();
    }

    Html(pages::join_form()).into_response()
}

#[derive(Debug, Deserialize)]
pub struct JoinForm {
    #[serde(default)]
    session_key: String,
}

pub async fn student_join(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<JoinForm>,
) -> Result<Response, AppError> {
    if visitor_role(&jar) != Some(Role::Student) {
        return Ok(Redirect::to("/login").into_response());
    }

    let session = state
        .sessions
        .get(form.session_key.trim())
        .ok_or(AppError::InvalidSession)?;

    tracing::info!(
        key = %session.id,
        student = %visitor_name(&jar).unwrap_or_default(),
        "student joined quiz"
    );

    let jar = jar.add(cookie(SESSION_COOKIE, session.id.clone()));
    Ok((jar, Html(pages::questions(&session))).into_response())
}

pub async fn submit(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Html<String>, AppError> {
    let session = jar
        .get(SESSION_COOKIE)
        .and_then(|c| state.sessions.get(c.value()))
        .ok_or(AppError::InvalidSession)?;

    let answered = grade(&session.questions, &answers_from_form(fields));
    let score = score(&answered);
    let username = visitor_name(&jar);

    tracing::info!(
        key = %session.id,
        student = username.as_deref().unwrap_or_default(),
        correct = score.correct,
        total = score.total,
        "graded submission"
    );

    Ok(Html(pages::results(username.as_deref(), &answered, score)))
}
