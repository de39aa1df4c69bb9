use std::sync::Arc;

use crate::domain::dtos::ListResponse;
use crate::repository::errors::FindAllError;
use crate::repository::funnel::Repository;

#[derive(Debug, PartialEq)]
pub enum Error {
    Unknown,
}

#[derive(Debug, PartialEq)]
pub struct Response {
    pub slug: String,
    pub title: String,
    pub webinar_title: String,
}

pub async fn execute(repo: Arc<dyn Repository>) -> Result<ListResponse<Response>, Error> {
    let funnels = match repo.find_all_funnels().await {
        Err(err) => {
            return match err {
                FindAllError::Unknown => Err(Error::Unknown),
            }
        }
        Ok(funnels) => funnels,
    };

    Ok(ListResponse::new(
        funnels
            .into_iter()
            .map(|funnel| Response {
                slug: funnel.slug,
                title: funnel.meta.title,
                webinar_title: funnel.webinar.title,
            })
            .collect(),
    ))
}
