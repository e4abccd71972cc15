//! `ureq` transport

use std::io::{self, Read};

use ksoup_io::{EngineError, Result};

use crate::TransportConfig;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, user_agent};

pub struct UreqTransport {
    agent: ureq::Agent,
    config: TransportConfig,
}

impl UreqTransport {
    pub fn new(config: &TransportConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(config.connect_timeout)
            .timeout(config.request_timeout)
            .redirects(config.max_redirects)
            .user_agent(&user_agent(config))
            .build();

        Self {
            agent,
            config: config.clone(),
        }
    }
}

impl HttpTransport for UreqTransport {
    fn name(&self) -> &'static str {
        "ureq"
    }

    fn config(&self) -> &TransportConfig {
        &self.config
    }

    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let url = request.validated_url()?;
        tracing::info!("HTTP {} {}", request.method.as_str(), url);

        let mut call = self.agent.request(request.method.as_str(), url.as_str());
        for (name, value) in request.effective_headers(&self.config.default_headers) {
            call = call.set(name, value);
        }

        let result = match &request.body {
            Some(body) => call.send_bytes(body),
            None => call.call(),
        };
        let response = match result {
            Ok(response) => response,
            // Error statuses still carry a response for the caller
            Err(ureq::Error::Status(_, response)) => response,
            Err(err) => return Err(transport_error(err)),
        };

        let status = response.status();
        let final_url = response.get_url().to_string();

        // One entry per header line; repeated names list every value
        let mut names: Vec<String> = Vec::new();
        for name in response.headers_names() {
            if !names.iter().any(|seen| seen.eq_ignore_ascii_case(&name)) {
                names.push(name);
            }
        }
        let mut headers = Vec::new();
        for name in &names {
            for value in response.all(name) {
                headers.push((name.clone(), value.to_string()));
            }
        }

        let mut body = Vec::new();
        response.into_reader().read_to_end(&mut body)?;

        Ok(HttpResponse {
            status,
            url: final_url,
            headers,
            body,
        })
    }
}

fn transport_error(err: ureq::Error) -> EngineError {
    let kind = match err.kind() {
        ureq::ErrorKind::ConnectionFailed => io::ErrorKind::ConnectionRefused,
        ureq::ErrorKind::Dns => io::ErrorKind::NotFound,
        _ => io::ErrorKind::Other,
    };
    EngineError::Io(io::Error::new(kind, err))
}
