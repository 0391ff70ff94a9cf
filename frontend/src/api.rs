use std::rc::Rc;

use article_admin_shared::config::AppConfig;
#[cfg(feature = "mock")]
use article_admin_shared::mock::{sample_articles, InMemoryArticleApi};
#[cfg(not(feature = "mock"))]
use article_admin_shared::{
    api::{parse_article_body, parse_list_body, ArticleApi, Endpoints, FormValue, MultipartPayload},
    error::ApiError,
    Article, ArticleId,
};
#[cfg(not(feature = "mock"))]
use async_trait::async_trait;
#[cfg(not(feature = "mock"))]
use gloo_net::http::{Request, Response};
#[cfg(not(feature = "mock"))]
use web_sys::FormData;
use web_sys::File;

/// Adapter the dashboard talks to.
#[cfg(not(feature = "mock"))]
pub type Api = HttpArticleApi;

/// Adapter the dashboard talks to.
#[cfg(feature = "mock")]
pub type Api = InMemoryArticleApi<File>;

/// Shared adapter handed down through props; equal when it is the same instance.
#[derive(Clone)]
pub struct ApiHandle(pub Rc<Api>);

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(not(feature = "mock"))]
pub fn build_api(config: &AppConfig) -> ApiHandle {
    ApiHandle(Rc::new(HttpArticleApi::new(config.endpoints())))
}

#[cfg(feature = "mock")]
pub fn build_api(_config: &AppConfig) -> ApiHandle {
    ApiHandle(Rc::new(InMemoryArticleApi::with_articles(sample_articles())))
}

/// Article endpoints over `fetch`.
#[cfg(not(feature = "mock"))]
pub struct HttpArticleApi {
    endpoints: Endpoints,
}

#[cfg(not(feature = "mock"))]
impl HttpArticleApi {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    async fn send_multipart(
        &self,
        request: gloo_net::http::RequestBuilder,
        payload: MultipartPayload<File>,
    ) -> Result<Option<Article>, ApiError> {
        // No Content-Type header: the browser adds the multipart boundary.
        let form = build_form_data(payload)?;
        let response = request
            .body(form)
            .map_err(|e| ApiError::Request(format!("{:?}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        let body = read_body(response).await?;
        Ok(parse_article_body(&body))
    }
}

#[cfg(not(feature = "mock"))]
fn build_form_data(payload: MultipartPayload<File>) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Request(format!("{:?}", e)))?;
    for (name, value) in payload.into_parts() {
        match value {
            FormValue::Text(text) => form.append_with_str(&name, &text),
            FormValue::File(file) => {
                form.append_with_blob_and_filename(&name, &file, &file.name())
            },
        }
        .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
    }
    Ok(form)
}

#[cfg(not(feature = "mock"))]
async fn read_body(response: Response) -> Result<String, ApiError> {
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(response.status(), &body));
    }
    response
        .text()
        .await
        .map_err(|e| ApiError::Parse(format!("{:?}", e)))
}

#[cfg(not(feature = "mock"))]
#[async_trait(?Send)]
impl ArticleApi for HttpArticleApi {
    type File = File;

    async fn list_articles(&self) -> Result<Vec<Article>, ApiError> {
        let response = Request::get(&self.endpoints.collection())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        let body = read_body(response).await?;
        parse_list_body(&body)
    }

    async fn create_article(
        &self,
        payload: MultipartPayload<File>,
    ) -> Result<Option<Article>, ApiError> {
        let request =
            Request::post(&self.endpoints.collection()).header("Accept", "application/json");
        self.send_multipart(request, payload).await
    }

    async fn update_article(
        &self,
        id: ArticleId,
        payload: MultipartPayload<File>,
    ) -> Result<Option<Article>, ApiError> {
        let request = Request::put(&self.endpoints.item(id)).header("Accept", "application/json");
        self.send_multipart(request, payload).await
    }

    async fn delete_article(&self, id: ArticleId) -> Result<(), ApiError> {
        let response = Request::delete(&self.endpoints.item(id))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        read_body(response).await.map(|_| ())
    }
}
