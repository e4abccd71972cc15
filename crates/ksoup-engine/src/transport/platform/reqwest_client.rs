//! `reqwest` blocking transport

use std::io;

use ksoup_io::{EngineError, Result};

use crate::TransportConfig;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Method, user_agent};

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Head => reqwest::Method::HEAD,
            Method::Post => reqwest::Method::POST,
        }
    }
}

pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
    config: TransportConfig,
}

impl ReqwestTransport {
    pub fn new(config: &TransportConfig) -> Result<Self> {
        let redirects = if config.max_redirects == 0 {
            reqwest::redirect::Policy::none()
        } else {
            reqwest::redirect::Policy::limited(config.max_redirects as usize)
        };

        let client = reqwest::blocking::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .redirect(redirects)
            .user_agent(user_agent(config))
            .build()
            .map_err(transport_error)?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

impl HttpTransport for ReqwestTransport {
    fn name(&self) -> &'static str {
        "reqwest"
    }

    fn config(&self) -> &TransportConfig {
        &self.config
    }

    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let url = request.validated_url()?;
        tracing::info!("HTTP {} {}", request.method.as_str(), url);

        let mut builder = self.client.request(request.method.into(), url);
        for (name, value) in request.effective_headers(&self.config.default_headers) {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().map_err(transport_error)?;
        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.bytes().map_err(transport_error)?.to_vec();

        Ok(HttpResponse {
            status,
            url: final_url,
            headers,
            body,
        })
    }
}

fn transport_error(err: reqwest::Error) -> EngineError {
    let kind = if err.is_timeout() {
        io::ErrorKind::TimedOut
    } else if err.is_connect() {
        io::ErrorKind::ConnectionRefused
    } else {
        io::ErrorKind::Other
    };
    EngineError::Io(io::Error::new(kind, err))
}
