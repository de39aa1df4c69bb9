use std::sync::Arc;

use axum::{routing, Router, Server};
use hyper::Result;
use tower_http::services::ServeDir;

use crate::config::Config;
use crate::repository::funnel::{FileRepository, Repository};

use super::{api, pages, AppState};

pub async fn serve(config: Config) -> Result<()> {
    let repo: Arc<dyn Repository> = Arc::new(FileRepository::new(&config.funnels_dir));

    match repo.find_all_funnels().await {
        Ok(funnels) => {
            log::info!(
                "serving {} funnel(s) from {}",
                funnels.len(),
                config.funnels_dir
            );
        }
        Err(err) => {
            log::error!("could not list funnel configs on startup: {:?}", err);
        }
    }

    let app = Router::new()
        .route("/", routing::get(pages::index))
        .route("/funnels/:slug", routing::get(pages::funnel))
        .route("/funnels/:slug/confirmation", routing::get(pages::confirmation))
        .route("/api/funnels/:slug/session", routing::get(api::next_session))
        .nest_service("/assets", ServeDir::new(&config.assets_dir));

    log::info!("Listening on port {}", config.port);

    Server::bind(&format!("0.0.0.0:{}", config.port).parse().unwrap())
        .serve(
            app.with_state(Arc::new(AppState { repo }))
                .into_make_service(),
        )
        .await
}
