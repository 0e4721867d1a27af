use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use log::info;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Key accepted when none is configured.
pub const DEFAULT_API_KEY: &str = "mock-key";

#[derive(Clone, Debug)]
pub struct Entry {
    pub word: &'static str,
    /// `(partOfSpeech, text)`
    pub definitions: Vec<(&'static str, &'static str)>,
    pub examples: Vec<&'static str>,
    /// `(relationshipType, words)`
    pub related: Vec<(&'static str, Vec<&'static str>)>,
    /// `(year, count)`
    pub frequency: Vec<(u32, u64)>,
    /// `(gram1, gram2)`
    pub phrases: Vec<(&'static str, &'static str)>,
    pub pronunciations: Vec<&'static str>,
    /// `(periods, exclamation points, question marks)`
    pub punctuation: (u64, u64, u64),
}

impl Entry {
    fn bare(word: &'static str) -> Self {
        Entry {
            word,
            definitions: Vec::new(),
            examples: Vec::new(),
            related: Vec::new(),
            frequency: Vec::new(),
            phrases: Vec::new(),
            pronunciations: Vec::new(),
            punctuation: (0, 0, 0),
        }
    }
}

/// Built-in word list. `cromulent` comes first and has no definitions, so
/// `hasDictionaryRef=true` visibly changes the random word.
pub fn lexicon() -> Vec<Entry> {
    vec![
        Entry::bare("cromulent"),
        Entry {
            word: "run",
            definitions: vec![
                ("verb", "To move swiftly on foot."),
                ("verb", "To operate or function."),
                ("noun", "A pace faster than a walk."),
                ("noun", "A continuous series of performances."),
            ],
            examples: vec!["She decided to run the marathon.", "The engine will run all night."],
            related: vec![
                ("synonym", vec!["sprint", "dash", "race", "jog"]),
                ("antonym", vec!["walk", "stop"]),
                ("hypernym", vec!["travel"]),
            ],
            frequency: vec![(2008, 1200), (2009, 1350), (2010, 1410)],
            phrases: vec![("run", "away"), ("run", "out"), ("home", "run")],
            pronunciations: vec!["(rŭn)"],
            punctuation: (640, 20, 35),
        },
        Entry {
            word: "runner",
            definitions: vec![("noun", "One that runs, especially a racer.")],
            examples: vec!["The runner crossed the line first."],
            related: vec![("synonym", vec!["racer", "sprinter"])],
            frequency: vec![(2010, 210)],
            phrases: vec![("front", "runner")],
            pronunciations: vec!["(rŭnʹər)"],
            punctuation: (88, 2, 1),
        },
        Entry {
            word: "running",
            definitions: vec![("adjective", "Moving or passing rapidly.")],
            examples: vec!["Running water is safer to drink."],
            related: vec![],
            frequency: vec![(2010, 530)],
            phrases: vec![("running", "water")],
            pronunciations: vec!["(rŭnʹĭng)"],
            punctuation: (101, 4, 3),
        },
        Entry {
            word: "cat",
            definitions: vec![("noun", "A small carnivorous mammal kept as a pet.")],
            examples: vec!["The cat slept on the windowsill."],
            related: vec![("synonym", vec!["feline", "kitty"])],
            frequency: vec![(2010, 980)],
            phrases: vec![("cat", "nap")],
            pronunciations: vec!["(kăt)"],
            punctuation: (300, 12, 9),
        },
    ]
}

pub struct MockState {
    pub api_key: String,
    pub lexicon: Vec<Entry>,
}

impl MockState {
    fn lookup(&self, word: &str) -> Option<&Entry> {
        self.lexicon.iter().find(|e| e.word.eq_ignore_ascii_case(word))
    }
}

pub type Shared = Arc<MockState>;

type Reply = Result<Json<Value>, (StatusCode, Json<Value>)>;

pub fn app(api_key: &str) -> Router {
    let state: Shared = Arc::new(MockState {
        api_key: api_key.to_string(),
        lexicon: lexicon(),
    });
    Router::new()
        .route("/api/{*path}", get(dispatch))
        .with_state(state)
}

pub async fn run(listener: TcpListener, api_key: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(api_key)).await
}

fn error(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "type": "error", "message": message })))
}

fn not_found() -> (StatusCode, Json<Value>) {
    error(StatusCode::NOT_FOUND, "not found")
}

/// Splits `word.json/run/definitions` into `("word", ["run", "definitions"])`.
/// Empty segments are kept so `word.json//definitions` yields `["", "definitions"]`.
fn split_path(path: &str) -> Option<(&str, Vec<&str>)> {
    let (kind, rest) = path.split_once(".json")?;
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    let segments = if rest.is_empty() { Vec::new() } else { rest.split('/').collect() };
    Some((kind, segments))
}

fn count_param(params: &HashMap<String, String>, name: &str) -> Result<Option<usize>, (StatusCode, Json<Value>)> {
    params
        .get(name)
        .map(|raw| {
            raw.parse::<usize>()
                .map_err(|_| error(StatusCode::BAD_REQUEST, &format!("{name} must be a non-negative integer")))
        })
        .transpose()
}

fn list_param<'a>(params: &'a HashMap<String, String>, name: &str) -> Option<Vec<&'a str>> {
    params.get(name).map(|raw| raw.split(',').collect())
}

async fn dispatch(
    State(state): State<Shared>,
    Path(path): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Reply {
    info!("GET /api/{path}");
    if params.get("api_key").map(String::as_str) != Some(state.api_key.as_str()) {
        return Err(error(StatusCode::UNAUTHORIZED, "unauthorized"));
    }

    let (kind, segments) = split_path(&path).ok_or_else(not_found)?;
    match (kind, segments.as_slice()) {
        ("word", [word]) => word_lookup(&state, word, &params),
        ("word", [word, field]) => {
            let entry = state.lookup(word).ok_or_else(not_found)?;
            word_field(entry, field, &params)
        }
        ("suggest", [fragment]) => suggest(&state, fragment, &params),
        ("wordoftheday", []) => Ok(Json(word_of_the_day(&state))),
        ("words", ["randomWord"]) => random_word(&state, &params),
        ("words", [word, "pronunciations"]) => {
            let entry = state.lookup(word).ok_or_else(not_found)?;
            Ok(Json(pronunciations(entry)))
        }
        _ => Err(not_found()),
    }
}

fn word_lookup(state: &MockState, word: &str, params: &HashMap<String, String>) -> Reply {
    let use_suggest = params.get("useSuggest").is_some_and(|v| v == "true");
    if !use_suggest {
        let entry = state.lookup(word).ok_or_else(not_found)?;
        return Ok(Json(json!({ "word": entry.word, "canonical": false })));
    }

    let suggestions: Vec<&str> = state
        .lexicon
        .iter()
        .filter(|e| strsim::levenshtein(&word.to_lowercase(), e.word) <= 2)
        .map(|e| e.word)
        .collect();

    // `literal=false` asks for the corrected form rather than the input.
    let literal = params.get("literal").map_or(true, |v| v != "false");
    let known = state.lookup(word).map(|e| e.word);
    let resolved = if literal {
        word
    } else {
        known.or_else(|| suggestions.first().copied()).unwrap_or(word)
    };

    Ok(Json(json!({
        "word": resolved,
        "canonical": known.is_some(),
        "suggestions": suggestions,
    })))
}

fn word_field(entry: &Entry, field: &str, params: &HashMap<String, String>) -> Reply {
    let body = match field {
        "definitions" => {
            let count = count_param(params, "count")?;
            let parts = list_param(params, "partOfSpeech");
            let defs: Vec<Value> = entry
                .definitions
                .iter()
                .enumerate()
                .filter(|(_, (pos, _))| parts.as_ref().map_or(true, |parts| parts.contains(pos)))
                .take(count.unwrap_or(usize::MAX))
                .map(|(seq, (pos, text))| {
                    json!({ "word": entry.word, "sequence": seq, "partOfSpeech": pos, "text": text })
                })
                .collect();
            json!(defs)
        }
        "examples" => json!({
            "examples": entry
                .examples
                .iter()
                .map(|text| json!({ "word": entry.word, "text": text }))
                .collect::<Vec<_>>(),
        }),
        "related" => {
            let count = count_param(params, "count")?;
            let kinds = list_param(params, "type");
            let groups: Vec<Value> = entry
                .related
                .iter()
                .filter(|(kind, _)| kinds.as_ref().map_or(true, |kinds| kinds.contains(kind)))
                .map(|(kind, words)| {
                    let words: Vec<&str> = words.iter().copied().take(count.unwrap_or(usize::MAX)).collect();
                    json!({ "relationshipType": kind, "words": words })
                })
                .collect();
            json!(groups)
        }
        "frequency" => json!({
            "word": entry.word,
            "totalCount": entry.frequency.iter().map(|(_, n)| n).sum::<u64>(),
            "frequency": entry
                .frequency
                .iter()
                .map(|(year, count)| json!({ "year": year, "count": count }))
                .collect::<Vec<_>>(),
        }),
        "phrases" => json!(entry
            .phrases
            .iter()
            .map(|(gram1, gram2)| json!({ "gram1": gram1, "gram2": gram2 }))
            .collect::<Vec<_>>()),
        "punctuationFactor" => {
            let (periods, exclamations, questions) = entry.punctuation;
            json!({
                "word": entry.word,
                "periodCount": periods,
                "exclamationPointCount": exclamations,
                "questionMarkCount": questions,
                "totalCount": periods + exclamations + questions,
            })
        }
        _ => return Err(not_found()),
    };
    Ok(Json(body))
}

fn suggest(state: &MockState, fragment: &str, params: &HashMap<String, String>) -> Reply {
    let count = count_param(params, "count")?;
    let start_at = count_param(params, "startAt")?.unwrap_or(0);
    let fragment = fragment.to_lowercase();

    let matches: Vec<&Entry> = state.lexicon.iter().filter(|e| e.word.starts_with(&fragment)).collect();
    let page: Vec<Value> = matches
        .iter()
        .skip(start_at)
        .take(count.unwrap_or(usize::MAX))
        .map(|e| {
            json!({
                "wordstring": e.word,
                "count": e.frequency.iter().map(|(_, n)| n).sum::<u64>(),
            })
        })
        .collect();

    Ok(Json(json!({
        "searchTerm": fragment,
        "matches": matches.len(),
        "match": page,
    })))
}

fn word_of_the_day(state: &MockState) -> Value {
    let entry = state.lookup("run").unwrap_or(&state.lexicon[0]);
    json!({
        "id": 1,
        "word": entry.word,
        "publishDate": "2011-03-14",
        "isPublished": false,
        "definition": entry
            .definitions
            .iter()
            .map(|(pos, text)| json!({ "partOfSpeech": pos, "text": text }))
            .collect::<Vec<_>>(),
        "note": Value::Null,
    })
}

fn random_word(state: &MockState, params: &HashMap<String, String>) -> Reply {
    let needs_ref = params.get("hasDictionaryRef").is_some_and(|v| v == "true");
    let entry = state
        .lexicon
        .iter()
        .find(|e| !needs_ref || !e.definitions.is_empty())
        .ok_or_else(not_found)?;
    Ok(Json(json!({
        "word": entry.word,
        "hasDictionaryDef": !entry.definitions.is_empty(),
    })))
}

fn pronunciations(entry: &Entry) -> Value {
    json!(entry
        .pronunciations
        .iter()
        .enumerate()
        .map(|(seq, raw)| json!({ "seq": seq, "raw": raw, "rawType": "ahd" }))
        .collect::<Vec<_>>())
}
