use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, DEFAULT_API_KEY};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let resp = app(DEFAULT_API_KEY)
        .oneshot(Request::builder().uri(uri).body(String::new()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    (status, body_json(resp).await)
}

fn keyed(path: &str, query: &str) -> String {
    if query.is_empty() {
        format!("{path}?api_key={DEFAULT_API_KEY}")
    } else {
        format!("{path}?api_key={DEFAULT_API_KEY}&{query}")
    }
}

// --- auth ---

#[tokio::test]
async fn missing_api_key_is_unauthorized() {
    let (status, body) = get("/api/word.json/run").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "unauthorized");
}

#[tokio::test]
async fn wrong_api_key_is_unauthorized() {
    let (status, _) = get("/api/word.json/run?api_key=nope").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// --- word ---

#[tokio::test]
async fn unknown_word_is_not_found() {
    let (status, _) = get(&keyed("/api/word.json/blorft", "")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn spelling_suggestions_for_misspelling() {
    let (status, body) = get(&keyed("/api/word.json/rnu", "useSuggest=true")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["word"], "rnu");
    assert_eq!(body["canonical"], false);
    assert_eq!(body["suggestions"], serde_json::json!(["run"]));
}

#[tokio::test]
async fn fix_spelling_resolves_to_suggestion() {
    let (status, body) = get(&keyed("/api/word.json/rnu", "useSuggest=true&literal=false")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["word"], "run");
}

// --- definitions ---

#[tokio::test]
async fn definitions_filtered_and_limited() {
    let (status, body) = get(&keyed("/api/word.json/run/definitions", "count=1&partOfSpeech=noun")).await;
    assert_eq!(status, StatusCode::OK);
    let defs = body.as_array().unwrap();
    assert_eq!(defs.len(), 1);
    assert_eq!(defs[0]["partOfSpeech"], "noun");
}

#[tokio::test]
async fn definitions_accept_comma_separated_parts_of_speech() {
    let (_, body) = get(&keyed("/api/word.json/run/definitions", "partOfSpeech=noun%2Cverb")).await;
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn bad_count_is_bad_request() {
    let (status, _) = get(&keyed("/api/word.json/run/definitions", "count=lots")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// --- related ---

#[tokio::test]
async fn related_filtered_by_type() {
    let (_, body) = get(&keyed("/api/word.json/run/related", "type=antonym")).await;
    let groups = body.as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["relationshipType"], "antonym");
    assert_eq!(groups[0]["words"], serde_json::json!(["walk", "stop"]));
}

// --- suggest ---

#[tokio::test]
async fn suggest_pages_through_matches() {
    let (_, body) = get(&keyed("/api/suggest.json/run", "count=1&startAt=1")).await;
    assert_eq!(body["matches"], 3);
    assert_eq!(body["match"].as_array().unwrap().len(), 1);
    assert_eq!(body["match"][0]["wordstring"], "runner");
}

// --- words ---

#[tokio::test]
async fn random_word_honours_dictionary_ref() {
    let (_, body) = get(&keyed("/api/words.json/randomWord", "")).await;
    assert_eq!(body["word"], "cromulent");

    let (_, body) = get(&keyed("/api/words.json/randomWord", "hasDictionaryRef=true")).await;
    assert_eq!(body["word"], "run");
    assert_eq!(body["hasDictionaryDef"], true);
}

#[tokio::test]
async fn word_of_the_day_has_trailing_slash_path() {
    let (status, body) = get(&keyed("/api/wordoftheday.json/", "")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["word"], "run");
    assert_eq!(body["isPublished"], false);
}

#[tokio::test]
async fn pronunciations_for_known_word() {
    let (_, body) = get(&keyed("/api/words.json/cat/pronunciations", "")).await;
    assert_eq!(body[0]["raw"], "(kăt)");
}

#[tokio::test]
async fn unknown_field_is_not_found() {
    let (status, _) = get(&keyed("/api/word.json/run/etymology", "")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
