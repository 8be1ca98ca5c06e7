use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json,
    Router,
};
use catch_panic::CatchPanicLayer;
use derive_new::new;
use grid_pathfinder::{
    render::render_map,
    Algorithm,
    Coordinate,
    Grid,
    PathfindingService,
    MAX_GRID_SIDE,
    MIN_GRID_SIDE,
};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use tower_http::catch_panic;

#[tokio::main]
async fn main() {
    println!("================Starting server================");

    let port = std::env::var("PORT").unwrap_or("8080".to_string());

    tracing_subscriber::fmt::init();

    let app = Router::new()
        .route("/", get(|| async { "Hello, World!" }))
        .route("/find-path", post(find_path))
        .layer(CatchPanicLayer::new());

    info!("listening on port {port}");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .unwrap();
    axum::serve(listener, app).await.unwrap();
}

#[derive(Deserialize)]
struct FindPathReq {
    width: i32,
    height: i32,
    #[serde(default)]
    obstacles: Vec<Coordinate>,
    start: Coordinate,
    goal: Coordinate,
    algorithm: Option<String>,
}

#[derive(Serialize, new)]
struct FindPathRes {
    path: Vec<Coordinate>,
    corners: Vec<Coordinate>,
    cost: i32,
    map: String,
}

async fn find_path(Json(req): Json<FindPathReq>) -> Response {
    match solve(req) {
        Ok(res) => (StatusCode::OK, Json(res)).into_response(),
        Err(reason) => (StatusCode::BAD_REQUEST, reason).into_response(),
    }
}

fn solve(req: FindPathReq) -> Result<FindPathRes, String> {
    let sides = MIN_GRID_SIDE..=MAX_GRID_SIDE;
    if !sides.contains(&req.width) || !sides.contains(&req.height) {
        return Err(format!(
            "Grid sides must be between {MIN_GRID_SIDE} and {MAX_GRID_SIDE}"
        ));
    }

    let algorithm = match &req.algorithm {
        Some(name) => name.parse::<Algorithm>().map_err(|e| e.to_string())?,
        None => Algorithm::default(),
    };

    let mut grid = Grid::new(req.width, req.height).map_err(|e| e.to_string())?;
    grid.set_endpoints(req.start, req.goal)
        .map_err(|e| e.to_string())?;
    for obstacle in req.obstacles {
        if !grid.add_obstacle(obstacle) {
            warn!("skipping obstacle {obstacle}");
        }
    }

    let mut service = PathfindingService::new(grid, algorithm.strategy());
    let path = service
        .compute_shortest_path()
        .map_err(|e| e.to_string())?
        .ok_or_else(|| "No path".to_string())?;

    let map = render_map(service.grid(), Some(&path));
    Ok(FindPathRes::new(
        path.coordinates().to_vec(),
        path.minify(),
        path.total_cost(),
        map,
    ))
}
