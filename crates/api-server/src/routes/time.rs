//! Server clock endpoint

use axum::{routing::get, Json, Router};
use chrono::Local;
use serde::Serialize;

use tick_core::clock;

use crate::state::AppState;

#[derive(Debug, Serialize)]
struct ClockResponse {
    time: String,
    date: String,
}

/// GET /api/time
async fn current_time() -> Json<ClockResponse> {
    let now = Local::now();
    Json(ClockResponse {
        time: clock::clock_time(&now),
        date: clock::clock_date(&now),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/time", get(current_time))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use chrono::{NaiveDate, NaiveTime};
    use serde_json::Value;

    use super::super::test_support::send;
    use crate::state::test_state;

    #[tokio::test]
    async fn reports_time_and_date() {
        let app = super::router().with_state(test_state().await);

        let (status, text) = send(&app, "GET", "/api/time", None).await;
        assert_eq!(status, StatusCode::OK);

        let payload: Value = serde_json::from_str(&text).unwrap();
        let time = payload["time"].as_str().unwrap();
        let date = payload["date"].as_str().unwrap();
        assert!(NaiveTime::parse_from_str(time, "%H:%M:%S").is_ok(), "time: {time}");
        assert!(NaiveDate::parse_from_str(date, "%d/%m/%Y").is_ok(), "date: {date}");
        assert!(text.find("\"time\"").unwrap() < text.find("\"date\"").unwrap());
    }
}
