use async_trait::async_trait;
use axum::Router;
use loopwalk::error::{AppError, Result};
use loopwalk::models::{Coordinates, RouteResult};
use loopwalk::services::directions::DirectionsProvider;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Provider that answers from a script of outcomes, in call order, and
/// records every waypoint list it was asked for.
/// `true` returns a route echoing the waypoints, `false` fails.
/// Once the script runs out, `default_outcome` applies.
#[allow(dead_code)]
pub struct ScriptedProvider {
    outcomes: Mutex<VecDeque<bool>>,
    default_outcome: bool,
    calls: Mutex<Vec<Vec<Coordinates>>>,
}

#[allow(dead_code)]
impl ScriptedProvider {
    pub fn new(outcomes: &[bool], default_outcome: bool) -> Self {
        ScriptedProvider {
            outcomes: Mutex::new(outcomes.iter().copied().collect()),
            default_outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn always_succeeds() -> Self {
        Self::new(&[], true)
    }

    pub fn always_fails() -> Self {
        Self::new(&[], false)
    }

    pub fn calls(&self) -> Vec<Vec<Coordinates>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DirectionsProvider for ScriptedProvider {
    async fn get_directions(&self, waypoints: &[Coordinates]) -> Result<RouteResult> {
        let call_index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(waypoints.to_vec());
            calls.len()
        };
        let succeed = self
            .outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(self.default_outcome);

        if succeed {
            Ok(echo_route(waypoints, call_index))
        } else {
            Err(AppError::RoutingApi("HTTP 503: scripted failure".to_string()))
        }
    }
}

/// Route whose geometry is the requested waypoints and whose distance
/// encodes the 1-based call index in km, so tests can check ordering.
#[allow(dead_code)]
pub fn echo_route(waypoints: &[Coordinates], call_index: usize) -> RouteResult {
    RouteResult::new(
        waypoints.iter().map(Coordinates::to_lng_lat).collect(),
        call_index as f64 * 1000.0,
        call_index as f64 * 720.0,
    )
}

/// Serve `app` on an ephemeral localhost port and return its base URL.
#[allow(dead_code)]
pub async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[allow(dead_code)]
pub fn test_start() -> Coordinates {
    Coordinates::new(40.0, -73.0).unwrap()
}
