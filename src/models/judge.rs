use serde::{Deserialize, Serialize};

/// One submission in a user's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeResult {
    pub solution_id: String,
    pub problem_id: i64,
    #[serde(default)]
    pub contest_id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub language: Option<i32>,
    #[serde(default)]
    pub state: Option<i32>,
    #[serde(default)]
    pub result: Option<i32>,
    #[serde(default)]
    pub pass_rate: Option<f64>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub memory: Option<i64>,
    #[serde(default)]
    pub submit_time: Option<i64>,
}
