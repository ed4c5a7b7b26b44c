use h1core::http::response::{Response, ResponseBuilder, StatusCode};
use h1core::http::writer::{ResponseWriter, serialize_response};

#[test]
fn test_status_codes() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
}

#[test]
fn test_response_builder_basic() {
    let response = ResponseBuilder::new(StatusCode::Ok).body("made it").build();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.status_message, "OK");
    assert_eq!(response.version, "HTTP/1.1");
    assert_eq!(response.body, b"made it".to_vec());
}

#[test]
fn test_response_builder_custom_status() {
    let response = ResponseBuilder::with_status(418, "I'm a teapot").build();

    assert_eq!(response.status_code, 418);
    assert_eq!(response.status_message, "I'm a teapot");
    assert!(response.body.is_empty());
}

#[test]
fn test_response_helpers() {
    let ok = Response::default_ok();
    assert_eq!(ok.status_code, 200);
    assert_eq!(ok.body, b"OK".to_vec());

    let err = Response::internal_error("boom");
    assert_eq!(err.status_code, 500);
    assert_eq!(err.status_message, "Internal Server Error");
    assert_eq!(err.body, b"boom".to_vec());
}

#[test]
fn test_serialize_default_ok() {
    let bytes = serialize_response(&Response::default_ok());

    assert_eq!(&bytes[..], b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nOK");
}

#[test]
fn test_serialize_empty_body() {
    let response = ResponseBuilder::with_status(204, "No Content").build();
    let bytes = serialize_response(&response);

    assert_eq!(&bytes[..], b"HTTP/1.1 204 No Content\r\nContent-Length: 0\r\n\r\n");
}

#[test]
fn test_serialize_is_idempotent() {
    let response = ResponseBuilder::with_status(404, "Not Found")
        .header("X-Reason", "gone")
        .body("nothing here")
        .build();

    assert_eq!(serialize_response(&response), serialize_response(&response));
}

#[test]
fn test_content_length_always_matches_body() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Length", "999")
        .body("OK")
        .build();
    let text = String::from_utf8(serialize_response(&response).to_vec()).unwrap();

    assert_eq!(response.content_length(), 2);
    assert!(text.contains("Content-Length: 2\r\n"));
    assert!(!text.contains("999"));
    assert_eq!(text.matches("Content-Length").count(), 1);
}

#[test]
fn test_extra_headers_follow_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Set-Cookie", "a=1")
        .header("Content-Type", "text/plain")
        .header("Set-Cookie", "b=2")
        .body("hi")
        .build();
    let bytes = serialize_response(&response);

    assert_eq!(
        &bytes[..],
        &b"HTTP/1.1 200 OK\r\n\
           Content-Length: 2\r\n\
           Set-Cookie: a=1\r\n\
           Set-Cookie: b=2\r\n\
           Content-Type: text/plain\r\n\
           \r\n\
           hi"[..]
    );
}

#[tokio::test]
async fn test_writer_writes_whole_response() {
    let response = Response::internal_error("invalid request line: GET");
    let mut out: Vec<u8> = Vec::new();

    let mut writer = ResponseWriter::new(&response);
    writer.write_to_stream(&mut out).await.unwrap();

    assert_eq!(out, writer.bytes());
    assert_eq!(
        out,
        b"HTTP/1.1 500 Internal Server Error\r\n\
          Content-Length: 25\r\n\
          \r\n\
          invalid request line: GET"
            .to_vec()
    );
}

#[tokio::test]
async fn test_writing_same_response_twice_gives_same_bytes() {
    let response = ResponseBuilder::with_status(404, "Not Found")
        .header("X-Reason", "gone")
        .body("nothing here")
        .build();

    let mut first: Vec<u8> = Vec::new();
    ResponseWriter::new(&response)
        .write_to_stream(&mut first)
        .await
        .unwrap();

    let mut second: Vec<u8> = Vec::new();
    ResponseWriter::new(&response)
        .write_to_stream(&mut second)
        .await
        .unwrap();

    assert!(!first.is_empty());
    assert_eq!(first, second);
    assert_eq!(first, serialize_response(&response).to_vec());
}

#[tokio::test]
async fn test_finished_writer_writes_nothing_more() {
    let response = Response::default_ok();
    let mut writer = ResponseWriter::new(&response);

    let mut first: Vec<u8> = Vec::new();
    writer.write_to_stream(&mut first).await.unwrap();

    let mut again: Vec<u8> = Vec::new();
    writer.write_to_stream(&mut again).await.unwrap();

    assert_eq!(first, b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nOK".to_vec());
    assert!(again.is_empty());
}
