//! Text views behind the router's six routes.

use std::fmt::Write as _;

use async_trait::async_trait;
use textarchive_api_client::upload::{DEFAULT_LIMIT, DEFAULT_SKIP};
use textarchive_api_client::{ApiClient, AuthStore};
use textarchive_core::format_tags;

use crate::router::{Route, Router};
use crate::truncate_string;

const SUMMARY_WIDTH: usize = 40;

/// What a view gets to work with when rendering.
pub struct ViewContext<'a> {
    pub client: &'a ApiClient,
    pub session: &'a AuthStore,
}

#[async_trait]
pub trait View: Send + Sync {
    fn title(&self) -> &'static str;

    async fn render(&self, ctx: &ViewContext<'_>) -> anyhow::Result<String>;
}

/// Router with every view of the application registered.
pub fn app_router() -> Router<dyn View> {
    Router::new()
        .route(Route::Home, || -> Box<dyn View> { Box::new(HomeView) })
        .route(Route::Login, || -> Box<dyn View> { Box::new(LoginView) })
        .route(Route::Register, || -> Box<dyn View> { Box::new(RegisterView) })
        .route(Route::Ocr, || -> Box<dyn View> { Box::new(OcrView) })
        .route(Route::Memos, || -> Box<dyn View> { Box::new(MemosView) })
        .route(Route::Schedules, || -> Box<dyn View> { Box::new(SchedulesView) })
}

pub struct HomeView;

#[async_trait]
impl View for HomeView {
    fn title(&self) -> &'static str {
        "Home"
    }

    async fn render(&self, ctx: &ViewContext<'_>) -> anyhow::Result<String> {
        let mut out = String::new();
        match ctx.session.user_id().filter(|_| ctx.session.is_authenticated()) {
            Some(user_id) => writeln!(out, "Signed in (user {})", user_id)?,
            None => writeln!(out, "Not signed in")?,
        }
        writeln!(out, "Pages:")?;
        for route in Route::ALL {
            writeln!(out, "  {:<11} {}", route.path(), route.name())?;
        }
        Ok(out)
    }
}

pub struct LoginView;

#[async_trait]
impl View for LoginView {
    fn title(&self) -> &'static str {
        "Login"
    }

    async fn render(&self, ctx: &ViewContext<'_>) -> anyhow::Result<String> {
        if ctx.session.is_authenticated() {
            return Ok("Already signed in. Use `textarchive logout` to switch accounts.\n".into());
        }
        Ok("Sign in with `textarchive login <username> --password <password>`.\n".into())
    }
}

pub struct RegisterView;

#[async_trait]
impl View for RegisterView {
    fn title(&self) -> &'static str {
        "Register"
    }

    async fn render(&self, _ctx: &ViewContext<'_>) -> anyhow::Result<String> {
        Ok(
            "Create an account with `textarchive register <username> <email> --password <password>`.\n"
                .into(),
        )
    }
}

pub struct OcrView;

#[async_trait]
impl View for OcrView {
    fn title(&self) -> &'static str {
        "OCR"
    }

    async fn render(&self, ctx: &ViewContext<'_>) -> anyhow::Result<String> {
        let files = ctx
            .client
            .get_uploaded_files(DEFAULT_SKIP, DEFAULT_LIMIT)
            .await?;
        let mut out = String::new();
        if files.is_empty() {
            writeln!(out, "No uploaded files. Upload one with `textarchive upload file <path>`.")?;
            return Ok(out);
        }
        for file in files {
            writeln!(
                out,
                "{}  {}  {} bytes  {}",
                file.file_id,
                file.filename,
                file.file_size,
                file.uploaded_at.format("%Y-%m-%d %H:%M")
            )?;
        }
        Ok(out)
    }
}

pub struct MemosView;

#[async_trait]
impl View for MemosView {
    fn title(&self) -> &'static str {
        "Memos"
    }

    async fn render(&self, ctx: &ViewContext<'_>) -> anyhow::Result<String> {
        let list = ctx.client.list_memos(None).await?;
        let mut out = String::new();
        writeln!(out, "{} memo(s)", list.total)?;
        for memo in list.memos {
            let tags = memo.tag_list();
            write!(out, "{}  {}", memo.id, truncate_string(&memo.summary, SUMMARY_WIDTH))?;
            if !tags.is_empty() {
                write!(out, "  [{}]", format_tags(&tags))?;
            }
            writeln!(out)?;
        }
        Ok(out)
    }
}

pub struct SchedulesView;

#[async_trait]
impl View for SchedulesView {
    fn title(&self) -> &'static str {
        "Schedules"
    }

    async fn render(&self, ctx: &ViewContext<'_>) -> anyhow::Result<String> {
        let list = ctx.client.list_schedules(None, None).await?;
        let mut out = String::new();
        writeln!(out, "{} schedule(s)", list.total)?;
        for schedule in list.schedules {
            writeln!(
                out,
                "{}  {}  {}",
                schedule.id,
                schedule.display_date_time(),
                truncate_string(&schedule.description, SUMMARY_WIDTH)
            )?;
        }
        Ok(out)
    }
}
