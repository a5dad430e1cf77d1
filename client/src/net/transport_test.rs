use super::*;

fn request(body: Body, bearer: Option<&str>) -> ApiRequest {
    ApiRequest {
        method: Method::Post,
        url: "http://localhost:8000/login".to_owned(),
        bearer: bearer.map(str::to_owned),
        body,
    }
}

#[test]
fn headers_empty_for_anonymous_get() {
    assert!(request(Body::Empty, None).headers().is_empty());
}

#[test]
fn headers_include_json_content_type() {
    let headers = request(Body::Json("{}".to_owned()), None).headers();
    assert_eq!(headers, vec![("Content-Type", "application/json".to_owned())]);
}

#[test]
fn headers_include_form_content_type_and_bearer() {
    let headers = request(Body::Form("email=a".to_owned()), Some("tok")).headers();
    assert_eq!(
        headers,
        vec![
            ("Content-Type", "application/x-www-form-urlencoded".to_owned()),
            ("Authorization", "Bearer tok".to_owned()),
        ]
    );
}

#[test]
fn response_ok_covers_2xx_only() {
    assert!(ApiResponse { status: 200, body: String::new() }.ok());
    assert!(ApiResponse { status: 204, body: String::new() }.ok());
    assert!(!ApiResponse { status: 301, body: String::new() }.ok());
    assert!(!ApiResponse { status: 401, body: String::new() }.ok());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_transport_is_unavailable_off_browser() {
    let result = futures::executor::block_on(BrowserTransport.send(request(Body::Empty, None)));
    assert_eq!(result, Err(ApiError::Transport("not available on server".to_owned())));
}
