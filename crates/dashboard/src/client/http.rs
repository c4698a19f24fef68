use reqwest::Url;

use super::{ApiRequest, Method, RawResponse, Transport, TransportError};
use crate::error::{AppError, Result};

#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: Url,
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|err| AppError::InvalidUrl(err.to_string()))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest) -> std::result::Result<RawResponse, TransportError> {
        let mut endpoint = self
            .base_url
            .join(request.path.trim_start_matches('/'))
            .map_err(|err| TransportError::Url(err.to_string()))?;
        if !request.query.is_empty() {
            endpoint.query_pairs_mut().extend_pairs(request.query.iter());
        }

        let builder = match request.method {
            Method::Get => self.http.get(endpoint),
            Method::Post => self.http.post(endpoint),
            Method::Delete => self.http.delete(endpoint),
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let res = builder.send().await?;
        let status = res.status().as_u16();
        let body = res.text().await?;
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_base_url() {
        assert!(matches!(
            HttpTransport::new("not a url"),
            Err(AppError::InvalidUrl(_))
        ));
        assert!(HttpTransport::new("http://127.0.0.1:5000").is_ok());
    }
}
