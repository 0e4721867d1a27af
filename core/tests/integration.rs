//! Every facade against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the client over real
//! HTTP through `UreqTransport`. A second listener that drops connections
//! unanswered stands in for a reset peer.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::time::Duration;

use wordnik_core::{
    ApiError, AutocompleteOptions, ClientConfig, DefinitionsOptions, DispatchOptions, RandomWordOptions,
    RelatedWordsOptions, WordnikClient,
};

fn start_mock_server() -> SocketAddr {
    let std_listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, mock_server::DEFAULT_API_KEY).await
        })
        .unwrap();
    });

    addr
}

fn client_for(addr: SocketAddr, api_key: &str) -> WordnikClient {
    let config = ClientConfig::new(api_key)
        .with_base_url(&format!("http://{addr}"))
        .with_timeout(Duration::from_secs(5));
    WordnikClient::new(config)
}

#[test]
fn facades_against_mock_server() {
    let addr = start_mock_server();
    let client = client_for(addr, mock_server::DEFAULT_API_KEY);

    // Spelling.
    let suggestions = client.spelling_suggestions("rnu").unwrap();
    assert_eq!(suggestions["suggestions"][0].as_str(), Some("run"));
    assert!(suggestions["canonical"].is_nil());

    let fixed = client.fix_spelling("rnu").unwrap();
    assert_eq!(fixed["word"].as_str(), Some("run"));

    // Definitions: count and part of speech reach the server.
    let defs = client
        .definitions("run", &DefinitionsOptions::default().count(2).part_of_speech("verb"))
        .unwrap();
    assert_eq!(defs.len(), 2);
    assert!(defs.as_list().unwrap().iter().all(|d| d["partOfSpeech"].as_str() == Some("verb")));

    let all_defs = client.definitions("run", &DefinitionsOptions::default()).unwrap();
    assert_eq!(all_defs.len(), 4);

    // Word fields.
    let examples = client.examples("run").unwrap();
    assert_eq!(examples["examples"].len(), 2);

    let related = client
        .related_words("run", &RelatedWordsOptions::default().count(2).relation("synonym"))
        .unwrap();
    assert_eq!(related.len(), 1);
    assert_eq!(related[0]["words"].len(), 2);

    let frequency = client.frequency("run").unwrap();
    assert_eq!(frequency["totalCount"].as_i64(), Some(3960));

    let phrases = client.bigram_phrases("run").unwrap();
    assert_eq!(phrases[0]["gram2"].as_str(), Some("away"));

    let punctuation = client.punctuation_factor("run").unwrap();
    assert_eq!(punctuation["totalCount"].as_i64(), Some(695));

    // Autocompletion paging.
    let completions = client
        .autocompletions("ru", &AutocompleteOptions::default().count(2).start_at(1))
        .unwrap();
    assert_eq!(completions["matches"].as_i64(), Some(3));
    let page: Vec<&str> = completions["match"]
        .as_list()
        .unwrap()
        .iter()
        .filter_map(|m| m["wordstring"].as_str())
        .collect();
    assert_eq!(page, ["runner", "running"]);

    // Word of the day: `isPublished: false` collapses to nil.
    let wotd = client.word_of_the_day().unwrap();
    assert_eq!(wotd["word"].as_str(), Some("run"));
    assert!(wotd["isPublished"].is_nil());

    // Random word with and without the dictionary filter.
    let random = client.random_word(&RandomWordOptions::default()).unwrap();
    assert_eq!(random["word"].as_str(), Some("cromulent"));
    let random = client.random_word(&RandomWordOptions::has_dictionary_ref(true)).unwrap();
    assert_eq!(random["word"].as_str(), Some("run"));

    let prons = client.pronunciations("cat").unwrap();
    assert_eq!(prons[0]["raw"].as_str(), Some("(kăt)"));
}

#[test]
fn raw_response_is_retained_on_request() {
    let addr = start_mock_server();
    let client = client_for(addr, mock_server::DEFAULT_API_KEY);

    let request = wordnik_core::facades::build_word_of_the_day();
    let reply = client.dispatch(&request, DispatchOptions::retain_raw()).unwrap();
    let raw = reply.raw.expect("raw response");
    assert_eq!(raw.status, 200);
    assert!(raw.body_text().contains("\"isPublished\":false"));
    assert_eq!(raw.header("content-type"), Some("application/json"));

    let reply = client.dispatch(&request, DispatchOptions::default()).unwrap();
    assert!(reply.raw.is_none());
}

#[test]
fn remote_rejections_are_classified() {
    let addr = start_mock_server();

    let client = client_for(addr, mock_server::DEFAULT_API_KEY);
    let err = client.examples("blorft").unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    let client = client_for(addr, "wrong-key");
    let err = client.word_of_the_day().unwrap_err();
    match err {
        ApiError::Rejected { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("unauthorized"));
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

/// Serve one connection with a canned status line and raw body bytes.
fn serve_raw_once(status_line: &'static str, body: &'static [u8]) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 1024];
        let _ = stream.read(&mut buf);
        let head = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        stream.write_all(head.as_bytes()).unwrap();
        stream.write_all(body).unwrap();
        stream.flush().unwrap();
    });

    addr
}

#[test]
fn non_utf8_error_page_is_rejected_not_transport() {
    let addr = serve_raw_once("HTTP/1.1 502 Bad Gateway", b"<h1>Passerelle d\xe9faillante</h1>");
    let client = client_for(addr, "any-key");
    let err = client.word_of_the_day().unwrap_err();
    match err {
        ApiError::Rejected { status, body } => {
            assert_eq!(status, 502);
            assert!(body.starts_with("<h1>Passerelle d"), "got {body:?}");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[test]
fn non_utf8_success_body_is_deserialization_error() {
    let addr = serve_raw_once("HTTP/1.1 200 OK", b"{\"word\":\"caf\xe9\"}");
    let client = client_for(addr, "any-key");
    let err = client.word_of_the_day().unwrap_err();
    assert!(matches!(err, ApiError::Deserialization(_)), "got {err:?}");
}

#[test]
fn connection_reset_surfaces_as_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        for stream in listener.incoming().take(1) {
            let mut stream = stream.unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            // Dropped without writing a response.
        }
    });

    let client = client_for(addr, "any-key");
    let err = client.random_word(&RandomWordOptions::default()).unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
}
