//! HTTP surface for the dashboard: one embedded page plus two JSON
//! endpoints the page polls on every control change.

pub mod layout;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};

use crate::charts::{build_dashboard, DashboardUpdate};
use crate::error::Result;
use crate::models::{ColumnMap, Dataset, Selection};

pub use layout::Layout;

const INDEX_HTML: &str = include_str!("index.html");

/// Read-only shared state: the table and column map never change after
/// startup, so request handlers need no locks.
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub columns: ColumnMap,
    pub layout: Layout,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/layout", get(get_layout))
        .route("/api/charts", get(get_charts))
        .with_state(Arc::new(state))
}

/// Serve the dashboard until the process is terminated.
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "dashboard listening");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn get_layout(State(state): State<Arc<AppState>>) -> Json<Layout> {
    Json(state.layout.clone())
}

async fn get_charts(
    State(state): State<Arc<AppState>>,
    Query(selection): Query<Selection>,
) -> Json<DashboardUpdate> {
    tracing::debug!(?selection, "rebuilding charts");
    Json(build_dashboard(&state.dataset, &state.columns, &selection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cell;

    fn state() -> AppState {
        let dataset = Dataset::new(
            vec!["country".into(), "year".into(), "pm25".into(), "pm10".into()],
            vec![vec![
                Cell::Text("Indonesia".into()),
                Cell::Number(2020.0),
                Cell::Number(40.0),
                Cell::Number(60.0),
            ]],
        )
        .unwrap();
        let columns = ColumnMap::resolve(dataset.columns()).unwrap();
        let layout = Layout::build(&dataset, &columns).unwrap();
        AppState {
            dataset: Arc::new(dataset),
            columns,
            layout,
        }
    }

    #[test]
    fn test_router_builds() {
        let _app = router(state());
    }

    #[test]
    fn test_index_page_embeds_panels() {
        for panel in layout::PANELS {
            assert!(
                INDEX_HTML.contains(&format!("id=\"chart-{panel}\"")),
                "index page missing panel {panel}"
            );
        }
    }
}
