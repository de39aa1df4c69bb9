use std::sync::Arc;

use crate::domain::entities::FunnelConfig;
use crate::repository::errors::FindError;
use crate::repository::funnel::Repository;

#[derive(Debug, PartialEq)]
pub enum Error {
    NotFound,
    Unknown,
}

pub struct Request {
    pub slug: String,
}

#[derive(Debug, PartialEq)]
pub struct Response {
    pub funnel: FunnelConfig,
}

pub async fn execute(repo: Arc<dyn Repository>, req: Request) -> Result<Response, Error> {
    let funnel = repo.find_funnel(&req.slug).await.map_err(|error| {
        return match error {
            FindError::NotFound => Error::NotFound,
            FindError::Unknown => Error::Unknown,
        };
    })?;

    Ok(Response { funnel })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mocks;
    use crate::repository::funnel::InMemoryRepository;

    #[tokio::test]
    async fn it_should_return_the_funnel_for_a_known_slug() {
        let repo = Arc::new(InMemoryRepository::new());
        repo.insert(mocks::mock_funnel());

        let req = Request {
            slug: mocks::mock_funnel().slug,
        };

        let result = execute(repo, req).await;

        match result {
            Ok(Response { funnel }) => assert_eq!(funnel, mocks::mock_funnel()),
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn it_should_report_not_found_for_an_unknown_slug() {
        let repo = Arc::new(InMemoryRepository::new());

        let req = Request {
            slug: String::from("missing"),
        };

        let result = execute(repo, req).await;

        assert_eq!(result.err(), Some(Error::NotFound));
    }
}
