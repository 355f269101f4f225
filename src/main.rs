use std::io::Read;

use anyhow::Context;
use odata_intake::config::Config;
use odata_intake::http::parser::parse_http_request;
use odata_intake::{Interpretation, RequestInfo, interpret};

/// Reads one raw HTTP request from the file given as the first argument (or
/// stdin) and prints how it would be dispatched.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let cfg = Config::load()?;

    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read(&path).with_context(|| format!("reading request from {path}"))?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("reading request from stdin")?;
            buf
        }
    };

    let (request, _) = parse_http_request(&raw).context("HTTP parse error")?;

    match interpret(&request, &cfg) {
        Ok(outcome) => {
            let status = outcome.status();
            println!("{} {}", status.as_u16(), status.reason_phrase());
            match outcome {
                Interpretation::Redirect { location } => println!("location: {location}"),
                Interpretation::Resolved(info) => print_info(&info),
            }
        }
        Err(e) => {
            let status = e.status();
            if status.is_client_error() {
                tracing::warn!(status = status.as_u16(), error = %e, "request rejected");
            } else {
                tracing::error!(status = status.as_u16(), error = %e, "request failed");
            }
            println!("{} {}", status.as_u16(), status.reason_phrase());
            println!("error: {e}");
        }
    }

    Ok(())
}

fn print_info(info: &RequestInfo) {
    println!("method: {:?}", info.method);
    println!("service root: {}", info.path_info.service_root);
    println!("request uri: {}", info.path_info.request_uri);
    for segment in &info.path_info.preceding_segments {
        println!("preceding: {} {:?}", segment.path(), segment.matrix_parameters());
    }
    for segment in &info.path_info.protocol_segments {
        println!("segment: {}", segment.path());
    }
    println!("content type: {}", info.content_type);
    println!("accept: {}", info.accept_headers.join(", "));
    let languages: Vec<String> = info.accept_languages.iter().map(|l| l.to_string()).collect();
    println!("languages: {}", languages.join(", "));

    let mut query: Vec<_> = info.query_parameters.iter().collect();
    query.sort();
    for (name, value) in query {
        println!("query: {name} = {value}");
    }
}
