//! Single binary web server: generate rounds from rosters, serve them as JSON or CSV,
//! and accept game links/outcomes from the game-creation service.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Set MATCHUP_SEED to make every generated round reproducible.

use actix_web::{
    get, post, put,
    web::{self, Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use nations_cup_matchups::{
    generate_round, CsvResultSink, CsvRosterSource, GameFormat, GameOutcome, PlayerId, ResultSink,
    Round, RoundId, RosterSource, Team,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-round entry: round data + last activity time (for auto-cleanup).
struct RoundEntry {
    round: Round,
    last_activity: Instant,
}

/// In-memory rounds by ID. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<RoundId, RoundEntry>>>;

/// Seed from MATCHUP_SEED, shared read-only by all workers.
type SeedConfig = Data<Option<u64>>;

/// Inactivity threshold: rounds not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct PlayerBody {
    name: String,
    id: PlayerId,
}

#[derive(Deserialize)]
struct TeamBody {
    name: String,
    players: Vec<PlayerBody>,
}

#[derive(Deserialize)]
struct CreateRoundBody {
    #[serde(default)]
    format: GameFormat,
    teams: Vec<TeamBody>,
    seed: Option<u64>,
    label: Option<String>,
}

#[derive(Deserialize)]
struct CsvRoundQuery {
    #[serde(default)]
    format: GameFormat,
    seed: Option<u64>,
    label: Option<String>,
}

#[derive(Deserialize)]
struct AttachLinkBody {
    player_ids: Vec<PlayerId>,
    link: String,
}

#[derive(Deserialize)]
struct SetOutcomeBody {
    player_ids: Vec<PlayerId>,
    link: Option<String>,
    outcome: GameOutcome,
}

/// Path segment: round id (e.g. /api/rounds/{id})
#[derive(Deserialize)]
struct RoundPath {
    id: RoundId,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "nations-cup-matchups",
    })
}

/// Generate a round from a JSON roster list (consecutive teams face each other).
#[post("/api/rounds")]
async fn api_create_round(state: AppState, seed: SeedConfig, body: Json<CreateRoundBody>) -> HttpResponse {
    let body = body.into_inner();
    let mut teams: Vec<Team> = body
        .teams
        .into_iter()
        .map(|t| Team::with_players(t.name, t.players.into_iter().map(|p| (p.name, p.id))))
        .collect();
    create_round(
        &state,
        &mut teams,
        body.format,
        body.seed.or(*seed.get_ref()),
        body.label,
    )
}

/// Generate a round from a CSV roster body (blank-row-delimited team blocks).
#[post("/api/rounds/csv")]
async fn api_create_round_csv(
    state: AppState,
    seed: SeedConfig,
    query: Query<CsvRoundQuery>,
    body: String,
) -> HttpResponse {
    let mut source = CsvRosterSource::new(body.as_bytes());
    let query = query.into_inner();
    create_round(
        &state,
        &mut source,
        query.format,
        query.seed.or(*seed.get_ref()),
        query.label,
    )
}

/// Get a round by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/rounds/{id}")]
async fn api_get_round(state: AppState, path: Path<RoundPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.round)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No round" })),
    }
}

/// Export a round's games as CSV rows.
#[get("/api/rounds/{id}/csv")]
async fn api_get_round_csv(state: AppState, path: Path<RoundPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No round" })),
    };
    entry.last_activity = Instant::now();
    let mut sink = CsvResultSink::new(Vec::new());
    let written = sink
        .write_matchups(&entry.round.matchups())
        .and_then(|()| sink.into_inner());
    match written {
        Ok(bytes) => {
            let filename = match &entry.round.label {
                Some(label) => format!("matchups_{}.csv", label),
                None => format!("matchups_{}.csv", entry.round.id),
            };
            HttpResponse::Ok()
                .content_type("text/csv; charset=utf-8")
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{}\"", filename),
                ))
                .body(bytes)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Attach a created game's link, matched by the game's player ids.
#[put("/api/rounds/{id}/games/link")]
async fn api_attach_link(state: AppState, path: Path<RoundPath>, body: Json<AttachLinkBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No round" })),
    };
    entry.last_activity = Instant::now();
    let r = &mut entry.round;
    match r.attach_link(&body.player_ids, &body.link) {
        Ok(()) => HttpResponse::Ok().json(r),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Record a game's state as reported by the game service.
#[put("/api/rounds/{id}/games/outcome")]
async fn api_set_outcome(state: AppState, path: Path<RoundPath>, body: Json<SetOutcomeBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No round" })),
    };
    entry.last_activity = Instant::now();
    let r = &mut entry.round;
    match r.set_outcome(&body.player_ids, body.link.as_deref(), body.outcome) {
        Ok(()) => HttpResponse::Ok().json(r),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Read teams from `source`, generate the round, store it and return it.
fn create_round(
    state: &AppState,
    source: &mut dyn RosterSource,
    format: GameFormat,
    seed: Option<u64>,
    label: Option<String>,
) -> HttpResponse {
    let teams = match source.teams() {
        Ok(teams) => teams,
        Err(e) => return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    };
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let mut round = generate_round(&teams, format, &mut rng);
    round.label = label;
    let id = round.id;

    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let response = HttpResponse::Ok().json(&round);
    g.insert(
        id,
        RoundEntry {
            round,
            last_activity: Instant::now(),
        },
    );
    response
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let seed: Option<u64> = std::env::var("MATCHUP_SEED")
        .ok()
        .and_then(|s| s.parse().ok());
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);
    if let Some(s) = seed {
        log::info!("Using fixed matchup seed {}", s);
    }

    let state = Data::new(RwLock::new(HashMap::<RoundId, RoundEntry>::new()));
    let seed = Data::new(seed);

    // Background task: every 30 minutes, remove rounds inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive round(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(seed.clone())
            .app_data(web::PayloadConfig::new(1 << 20))
            .service(api_health)
            .service(api_create_round)
            .service(api_create_round_csv)
            .service(api_get_round)
            .service(api_get_round_csv)
            .service(api_attach_link)
            .service(api_set_outcome)
    })
    .bind(bind)?
    .run()
    .await
}
