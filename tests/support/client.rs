use reqwest::redirect::Policy;
use reqwest::Client;

/// HTTP client that reports redirects instead of following them.
pub fn no_redirects() -> Client {
    Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("build reqwest client")
}

/// `Location` header of a response, if any.
pub fn location(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
